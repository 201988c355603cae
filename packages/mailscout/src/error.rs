//! Typed errors for the extraction engine.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.
//!
//! Note that scan failures never surface through `extract_emails` — the
//! engine absorbs selector and model errors and continues with whatever
//! candidates remain. These types exist for the collaborator seams
//! (model clients, configuration).

use thiserror::Error;

/// Errors that can occur at the engine's collaborator boundaries.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Model endpoint unavailable, timed out, or returned garbage
    #[error("model error: {0}")]
    Model(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Configuration error
    #[error("config error: {0}")]
    Config(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
