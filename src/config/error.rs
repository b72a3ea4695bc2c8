//! Configuration errors.

use crate::email::domain::EmailDomainError;
use thiserror::Error;

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The `.env` file exists but could not be read.
    #[error("failed to load .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),

    /// The configuration sources could not be read or deserialized.
    #[error("failed to read configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A required variable is missing or blank.
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// The recipient list is unusable.
    #[error("invalid EMAIL_RECIPIENTS: {0}")]
    Recipients(#[from] EmailDomainError),
}
