//! Validated recipient list.

use super::EmailDomainError;
use std::fmt;

/// Non-empty list of destination addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipients(Vec<String>);

impl Recipients {
    /// Creates a recipient list, trimming each address and dropping blanks.
    ///
    /// # Errors
    ///
    /// Returns [`EmailDomainError::NoRecipients`] when nothing remains and
    /// [`EmailDomainError::InvalidAddress`] for an address without a local
    /// part and a domain around a single `@`.
    pub fn new<I, S>(addresses: I) -> Result<Self, EmailDomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Vec::new();
        for address in addresses {
            let trimmed = address.as_ref().trim();
            if trimmed.is_empty() {
                continue;
            }
            if !is_plausible_address(trimmed) {
                return Err(EmailDomainError::InvalidAddress(trimmed.to_owned()));
            }
            parsed.push(trimmed.to_owned());
        }

        if parsed.is_empty() {
            return Err(EmailDomainError::NoRecipients);
        }
        Ok(Self(parsed))
    }

    /// Parses a comma-separated address list.
    ///
    /// # Errors
    ///
    /// See [`Recipients::new`].
    pub fn parse(raw: &str) -> Result<Self, EmailDomainError> {
        Self::new(raw.split(','))
    }

    /// Returns the addresses in configured order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Returns the addresses as an owned list.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }
}

impl fmt::Display for Recipients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

fn is_plausible_address(address: &str) -> bool {
    match address.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !address.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
