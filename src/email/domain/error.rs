//! Error types for email domain validation.

use thiserror::Error;

/// Errors returned while constructing email domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailDomainError {
    /// No usable recipient address was given.
    #[error("at least one recipient address is required")]
    NoRecipients,

    /// An address does not look like `local@domain`.
    #[error("invalid email address '{0}'")]
    InvalidAddress(String),
}
