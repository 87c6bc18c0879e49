/// Errors raised while preparing search input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InputError {
    /// An item was constructed from an empty string.
    #[display("item text must not be empty")]
    EmptyItem,
    /// The input text did not contain any item.
    #[display("input does not contain any item")]
    NoItems,
}
