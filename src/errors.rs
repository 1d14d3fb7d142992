//! Error types for realestate-graph.

use std::path::PathBuf;

/// Alias for Results returning [`IngestError`].
pub type Result<T> = std::result::Result<T, IngestError>;

/// Top-level error type for realestate-graph.
///
/// Variants fall into two classes. Run-level errors ([`IngestError::is_fatal`]:
/// unreadable or non-JSON input, bad configuration) abort before any listing is
/// processed. Everything else is scoped to a single listing and the run moves
/// on to the next one.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("failed to read input file {}", path.display())]
    InputIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in input file")]
    InvalidInput(#[source] serde_json::Error),

    #[error("input must be a JSON array of listings, found {0}")]
    InputShape(String),

    #[error("malformed listing record")]
    MalformedListing(#[source] serde_json::Error),

    #[error("Normalization error: {0}")]
    Normalize(String),

    #[error("Driver error: {0}")]
    Driver(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl IngestError {
    /// Whether this error aborts the whole run rather than a single listing.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::InputNotFound { .. }
                | Self::InputIo { .. }
                | Self::InvalidInput(_)
                | Self::InputShape(_)
                | Self::Validation(_)
        )
    }
}

impl From<neo4rs::Error> for IngestError {
    fn from(err: neo4rs::Error) -> Self {
        Self::Driver(err.to_string())
    }
}
