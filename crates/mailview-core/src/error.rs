//! Error types for the core library.

use thiserror::Error;

use crate::MessageId;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Folder name is not one of the known folders.
    #[error("Invalid folder: {0:?}")]
    InvalidFolder(String),

    /// Two seed records share the same message id.
    #[error("Duplicate message id in seed: {0}")]
    DuplicateMessageId(MessageId),

    /// Seed data could not be deserialized.
    #[error("Seed error: {0}")]
    Seed(#[from] serde_json::Error),

    /// I/O error while reading seed data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
