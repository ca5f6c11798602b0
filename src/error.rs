//! Error types for the dbx_members crate.

use thiserror::Error;

/// Errors that can occur when interacting with the Dropbox API.
#[derive(Error, Debug)]
pub enum DropboxError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid file reference: {0}")]
    InvalidFileRef(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to encode request body: {0}")]
    Encoding(#[source] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode response body: {0}")]
    Decoding(#[source] serde_json::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Pagination did not terminate within {max_pages} pages")]
    PageLimitExceeded { max_pages: u32 },
}

/// Result type alias for DropboxError.
pub type Result<T> = std::result::Result<T, DropboxError>;
