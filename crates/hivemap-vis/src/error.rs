//! Error types for hivemap-vis.

use thiserror::Error;

/// Result type for hive map operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or rendering a hive map.
#[derive(Debug, Error)]
pub enum Error {
    /// The layout engine rejected an argument
    #[error("Layout error: {0}")]
    Layout(#[from] hivemap_layout::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
