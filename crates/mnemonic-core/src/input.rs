use crate::{InputError, Item};

/// Splits free text into items, one per line.
///
/// The whole text is trimmed first, then split on line breaks (`\n` or
/// `\r\n`). Blank lines are dropped; any other line is kept verbatim,
/// including inner and trailing spaces.
///
/// # Errors
///
/// Returns [`InputError::NoItems`] if the text holds no non-blank line.
///
/// # Examples
///
/// ```
/// use mnemonic_core::parse_items;
///
/// let items = parse_items("  File\r\nEdit\n\nView  ")?;
/// let texts: Vec<_> = items.iter().map(|item| item.as_str()).collect();
/// assert_eq!(texts, ["File", "Edit", "View"]);
/// # Ok::<(), mnemonic_core::InputError>(())
/// ```
pub fn parse_items(text: &str) -> Result<Vec<Item>, InputError> {
    let items = text
        .trim()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(Item::new)
        .collect::<Result<Vec<_>, _>>()?;

    if items.is_empty() {
        return Err(InputError::NoItems);
    }
    Ok(items)
}
