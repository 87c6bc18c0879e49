//! Candidate alphabets.

use std::fmt::{self, Display};

use crate::{IgnoreSet, Item};

/// The distinct characters eligible to serve as identifiers.
///
/// Characters keep the order in which they were first discovered: items in
/// list order, characters left to right inside each item. The search tries
/// candidates in this order, so enumeration order depends on the input but is
/// deterministic for a given input.
///
/// # Examples
///
/// ```
/// use mnemonic_core::{Alphabet, items_from};
///
/// let items = items_from(["noon", "moon"])?;
/// let alphabet = Alphabet::from_items(&items);
/// assert_eq!(alphabet.chars(), &['n', 'o', 'm']);
/// assert_eq!(alphabet.to_string(), "m, n, o");
/// # Ok::<(), mnemonic_core::InputError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Collects every distinct character appearing in any of `items`.
    #[must_use]
    pub fn from_items(items: &[Item]) -> Self {
        items.iter().flat_map(Item::chars).collect()
    }

    /// Returns a copy without the characters contained in `ignore`.
    ///
    /// Discovery order of the remaining characters is preserved.
    #[must_use]
    pub fn without(&self, ignore: &IgnoreSet) -> Self {
        Self {
            chars: self
                .chars
                .iter()
                .copied()
                .filter(|&c| !ignore.contains(c))
                .collect(),
        }
    }

    /// Returns the characters in discovery order.
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Returns the characters in ascending order.
    #[must_use]
    pub fn sorted(&self) -> Vec<char> {
        let mut chars = self.chars.clone();
        chars.sort_unstable();
        chars
    }

    /// Returns the number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if the alphabet has no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns `true` if `c` belongs to the alphabet.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Iterates over the characters in discovery order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl FromIterator<char> for Alphabet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        let mut chars: Vec<char> = Vec::new();
        for c in iter {
            if !chars.contains(&c) {
                chars.push(c);
            }
        }
        Self { chars }
    }
}

/// Formats the sorted characters as a comma-separated list.
impl Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.sorted().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
