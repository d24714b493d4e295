//! CLI error type.

use thiserror::Error;

/// Errors surfaced to the command-line user.
#[derive(Debug, Error)]
pub enum CliError {
    /// Composition failed in the library.
    #[error(transparent)]
    Weave(#[from] tileweave::WeaveError),

    /// An input image could not be read.
    #[error(transparent)]
    Io(#[from] tileweave::IoError),
}
