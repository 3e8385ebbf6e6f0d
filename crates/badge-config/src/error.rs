//! Error types for badge configuration documents.

use thiserror::Error;

/// Primary error type for loading and validating a [`crate::BadgeConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document was not valid JSON or did not match the schema.
    #[error("malformed badge configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// Field contained an invalid value.
    #[error("invalid badge configuration field '{field}': {reason}")]
    InvalidField {
        /// Path of the field that failed validation (e.g. `size_tokens[1]`).
        field: String,
        /// Offending value when available.
        value: Option<String>,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

impl ConfigError {
    pub(crate) fn invalid(
        field: impl Into<String>,
        value: Option<&str>,
        reason: &'static str,
    ) -> Self {
        Self::InvalidField {
            field: field.into(),
            value: value.map(str::to_string),
            reason,
        }
    }
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;
