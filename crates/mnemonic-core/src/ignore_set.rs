use std::{collections::BTreeSet, convert::Infallible, str::FromStr};

/// Characters excluded from the candidate alphabet.
///
/// # Examples
///
/// ```
/// use mnemonic_core::IgnoreSet;
///
/// let ignore = IgnoreSet::parse("a, e,io u");
/// assert_eq!(ignore.len(), 5);
/// assert!(ignore.contains('i'));
/// assert!(!ignore.contains(' '));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    chars: BTreeSet<char>,
}

impl IgnoreSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a comma-separated list of characters.
    ///
    /// Every non-whitespace character of every piece is added, so a piece may
    /// hold several characters and whitespace can never be ignored.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        text.split(',')
            .flat_map(str::chars)
            .filter(|c| !c.is_whitespace())
            .collect()
    }

    /// Adds a character, returning `true` if it was not present.
    pub fn insert(&mut self, c: char) -> bool {
        self.chars.insert(c)
    }

    /// Returns `true` if `c` is ignored.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Returns the number of ignored characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if nothing is ignored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Iterates over the ignored characters in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl FromIterator<char> for IgnoreSet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

impl FromStr for IgnoreSet {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
