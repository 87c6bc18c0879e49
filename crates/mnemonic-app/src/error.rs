use std::{io, path::PathBuf};

use mnemonic_core::InputError;

/// Errors reported by the command-line front end before a run starts.
#[derive(
    Debug, derive_more::Display, derive_more::Error, derive_more::From, derive_more::IsVariant,
)]
pub enum AppError {
    /// The input file could not be read.
    #[display("failed to read {}: {source}", path.display())]
    ReadInput {
        /// Path of the input file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Standard input could not be read.
    #[display("failed to read standard input: {source}")]
    ReadStdin {
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The input text did not contain usable items.
    #[display("invalid input: {_0}")]
    #[from]
    Input(InputError),
}

