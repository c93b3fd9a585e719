//! Error types for weekbeeld.

use thiserror::Error;

/// Top-level result type for weekbeeld operations.
pub type Result<T> = std::result::Result<T, WbError>;

/// Top-level error type for weekbeeld.
#[derive(Debug, Error)]
pub enum WbError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("config error: {0}")]
    Config(String),

    /// Compilation was requested for a week with zero stored records.
    #[error("no input found for week {week}")]
    NoInput { week: u32 },

    /// Blank text was submitted while the policy rejects blank submissions.
    #[error("blank text submitted for topic '{topic}'")]
    BlankText { topic: String },

    #[error("unknown area: '{0}'")]
    UnknownArea(String),

    #[error("unknown topic: '{0}'")]
    UnknownTopic(String),
}
