//! Error types
//!
//! Errors raised while acquiring or releasing style resources.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScopeError>;

#[derive(Debug, Error)]
pub enum ScopeError {
    /// The CSS source handed to `acquire` is malformed. This is a bug at the
    /// call site, not a recoverable runtime condition.
    #[error("invalid css source: {reason}")]
    InvalidInput { reason: String },

    /// A lease was released after its resource had already been evicted.
    #[error("style resource for key of {} bytes was already released", .key.len())]
    DoubleRelease { key: String },

    #[error("invalid scope configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl ScopeError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        ScopeError::InvalidInput {
            reason: reason.into(),
        }
    }
}
