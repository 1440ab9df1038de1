//! Errors raised around configuration loading.
//!
//! Loading itself never fails; these cover run mode parsing, the
//! placeholder audit and summary rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown run mode {0:?} (expected development or production)")]
    UnknownRunMode(String),

    #[error("development defaults still active in production: {}", .fields.join(", "))]
    PlaceholderDefaults { fields: Vec<&'static str> },

    #[error("failed to serialize configuration summary: {0}")]
    Serialize(#[from] serde_json::Error),
}
