use std::{
    fmt::{self, Display},
    sync::Arc,
};

use crate::InputError;

/// A string that gets a single-character mnemonic identifier.
///
/// Items are immutable and never empty. Cloning is cheap: the text is shared,
/// which lets a search run on a background thread while the caller keeps its
/// own copy of the list.
///
/// # Examples
///
/// ```
/// use mnemonic_core::Item;
///
/// let item = Item::new("Save As")?;
/// assert!(item.contains('v'));
/// assert!(!item.contains('V'));
/// assert_eq!(item.char_len(), 7);
/// # Ok::<(), mnemonic_core::InputError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Item {
    text: Arc<str>,
}

impl Item {
    /// Creates an item from its text.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::EmptyItem`] if `text` is empty.
    pub fn new(text: impl AsRef<str>) -> Result<Self, InputError> {
        let text = text.as_ref();
        if text.is_empty() {
            return Err(InputError::EmptyItem);
        }
        Ok(Self { text: text.into() })
    }

    /// Returns the item text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns `true` if `c` literally occurs in the item (case-sensitive).
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.text.contains(c)
    }

    /// Returns the number of characters in the item.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Iterates over the characters of the item, duplicates included.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.text, f)
    }
}

impl AsRef<str> for Item {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl TryFrom<&str> for Item {
    type Error = InputError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl TryFrom<String> for Item {
    type Error = InputError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

/// Builds a list of items from string slices.
///
/// # Errors
///
/// Returns [`InputError::EmptyItem`] if any of the strings is empty.
pub fn items_from<I, S>(texts: I) -> Result<Vec<Item>, InputError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    texts.into_iter().map(Item::new).collect()
}
