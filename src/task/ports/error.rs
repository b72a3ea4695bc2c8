//! Error taxonomy for workspace database access.

use thiserror::Error;

/// Errors returned while reading tasks from the workspace database.
///
/// [`NotionError::DataNotFound`] is an expected outcome (nothing is pending)
/// and is kept apart from transport failures so callers can branch on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotionError {
    /// The upstream call failed: non-success status or connection failure.
    #[error("{}", format_api_error(*.status, .message))]
    Api {
        /// HTTP status code, when a response was received.
        status: Option<u16>,
        /// Description of the failure.
        message: String,
    },

    /// The query succeeded but matched no tasks.
    #[error("{0}")]
    DataNotFound(String),

    /// The client could not be configured (missing key, invalid header).
    #[error("Notion client configuration error: {0}")]
    Configuration(String),

    /// The response did not have the expected JSON shape.
    #[error("malformed Notion response: {0}")]
    MalformedResponse(String),
}

impl NotionError {
    /// Builds an [`NotionError::Api`] error.
    #[must_use]
    pub fn api(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Builds a [`NotionError::DataNotFound`] error.
    #[must_use]
    pub fn data_not_found(message: impl Into<String>) -> Self {
        Self::DataNotFound(message.into())
    }

    /// Builds a [`NotionError::MalformedResponse`] error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// Returns `true` for the expected "nothing found" outcome.
    #[must_use]
    pub const fn is_data_not_found(&self) -> bool {
        matches!(self, Self::DataNotFound(_))
    }

    /// Returns the upstream status code, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => *status,
            Self::DataNotFound(_) | Self::Configuration(_) | Self::MalformedResponse(_) => None,
        }
    }
}

fn format_api_error(status: Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("[{code}] {message}"),
        None => message.to_owned(),
    }
}
