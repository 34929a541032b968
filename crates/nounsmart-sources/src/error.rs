//! Source error types.

use std::path::PathBuf;

use thiserror::Error;

use nounsmart_core::TableError;

/// Errors that can occur while loading a noun table.
///
/// None of these are retried: a table that fails to load stops the program
/// before any quiz starts.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The server answered with a non-success status.
    #[error("failed to load the CSV file: HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// The request timed out.
    #[error("failed to load the CSV file: request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("failed to load the CSV file: network error: {0}")]
    Network(String),

    /// The file could not be read.
    #[error("failed to load the CSV file: cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content was fetched but is not a usable noun table.
    #[error("failed to load the CSV file: {0}")]
    Parse(#[from] TableError),
}
