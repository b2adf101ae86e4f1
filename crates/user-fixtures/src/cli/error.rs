//! Error types for the fixture CLI.

use thiserror::Error;

use crate::error::GenerationError;

/// Errors surfaced by the CLI generation and rendering flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// The configured rules could not produce records.
    #[error("generation error: {source}")]
    Generation {
        /// Underlying generation error.
        #[from]
        #[source]
        source: GenerationError,
    },
    /// The records could not be serialized.
    #[error("failed to serialize user records: {message}")]
    Serialize {
        /// Serializer error message.
        message: String,
    },
    /// Standard output could not be written.
    #[error("failed to write to stdout: {message}")]
    Stdout {
        /// Description of the I/O error.
        message: String,
    },
}
