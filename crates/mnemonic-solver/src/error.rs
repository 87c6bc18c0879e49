use std::io;

/// Errors that can occur while preparing or running a search.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum SearchError {
    /// The item list is empty.
    #[display("no items to assign identifiers to")]
    NoItems,
    /// Fewer candidate characters than items, so no complete assignment exists.
    #[display(
        "not enough characters: {items} items need {items} distinct characters, but only {characters} are available"
    )]
    NotEnoughCharacters {
        /// Number of items.
        items: usize,
        /// Number of candidate characters after exclusions.
        characters: usize,
    },
    /// The output sink could not be reset or written.
    #[display("failed to write assignments: {source}")]
    Sink {
        /// Underlying I/O failure.
        source: io::Error,
        /// Complete assignments discovered before the failure, including the
        /// one whose write failed.
        found: u64,
    },
}

impl SearchError {
    /// Returns how many complete assignments the run had discovered when it
    /// failed.
    #[must_use]
    pub fn found(&self) -> u64 {
        match self {
            Self::Sink { found, .. } => *found,
            Self::NoItems | Self::NotEnoughCharacters { .. } => 0,
        }
    }
}
