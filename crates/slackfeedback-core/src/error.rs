//! Configuration errors and classification of delivery failures.

use thiserror::Error;

use crate::translations::{TranslationKey, Translations};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate feedback category: {0}")]
    DuplicateCategory(String),
    #[error("Timeout must be greater than zero: {0}")]
    InvalidTimeout(&'static str),
    #[error("Invalid theme: {0}")]
    InvalidTheme(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Failure reported back by the host after a submission attempt.
///
/// This is data handed to the session, not a Rust error: the host
/// decides how much it knows about the failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// A ready-made message to display as is.
    Message(String),
    /// HTTP status of the failed delivery.
    Status(u16),
    /// Some failure carrying neither a message nor a status.
    Other,
}

impl From<&str> for SubmitError {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

impl From<String> for SubmitError {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<u16> for SubmitError {
    fn from(status: u16) -> Self {
        Self::Status(status)
    }
}

/// Translation key for a delivery status code.
pub fn status_message_key(status: u16) -> TranslationKey {
    match status {
        400 => TranslationKey::ErrorBadRequest,
        403 => TranslationKey::ErrorForbidden,
        404 => TranslationKey::ErrorNotFound,
        410 => TranslationKey::ErrorArchived,
        500 => TranslationKey::ErrorInternal,
        _ => TranslationKey::ErrorUnexpected,
    }
}

/// Turn a reported failure into the message shown on the submit button.
pub fn classify_error(error: Option<&SubmitError>, translations: &Translations) -> String {
    match error {
        None | Some(SubmitError::Other) => {
            translations.get(TranslationKey::ErrorUnexpected).to_string()
        }
        Some(SubmitError::Message(message)) => message.clone(),
        Some(SubmitError::Status(status)) => {
            translations.get(status_message_key(*status)).to_string()
        }
    }
}
