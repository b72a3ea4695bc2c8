//! Digest settings loaded from the environment.

use super::ConfigError;
use crate::digest::DeliverySettings;
use crate::email::domain::Recipients;
use crate::task::adapters::{
    http::{DEFAULT_NOTION_BASE_URL, DEFAULT_NOTION_VERSION, NotionClientSettings},
    notion::DEFAULT_FILTER_PROPERTIES,
};
use config::{Config, Environment, Map};
use serde::Deserialize;

/// Environment label used when `ENVIRONMENT` is unset.
pub const DEFAULT_ENVIRONMENT: &str = "LOCAL";

/// Raw variables as read from the environment. Keys are lowercased
/// variable names.
#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    environment: Option<String>,
    log_level: Option<String>,
    aws_lambda_function_name: Option<String>,
    aws_region: Option<String>,
    notion_api_key: Option<String>,
    notion_version: Option<String>,
    notion_base_url: Option<String>,
    notion_database_id: Option<String>,
    notion_filter_properties: Option<String>,
    email_sender: Option<String>,
    email_recipients: Option<String>,
}

/// Validated configuration for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestConfig {
    /// Environment label, for example `LOCAL` or `PROD`.
    pub environment: String,
    /// Explicit log level, if configured.
    pub log_level: Option<String>,
    /// Lambda function name; present only inside AWS Lambda.
    pub lambda_function_name: Option<String>,
    /// Region override for SES.
    pub aws_region: Option<String>,
    /// Notion connection settings.
    pub notion: NotionClientSettings,
    /// Database holding the tasks.
    pub database_id: String,
    /// Comma-separated property projection.
    pub filter_properties: String,
    /// Sender and recipients of the digest.
    pub delivery: DeliverySettings,
}

impl DigestConfig {
    /// Loads configuration from `.env` (when present) and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source cannot be read or a required
    /// variable is missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            return Err(err.into());
        }
        Self::from_environment(Environment::default())
    }

    /// Builds configuration from an explicit variable map instead of the
    /// process environment.
    ///
    /// # Errors
    ///
    /// See [`DigestConfig::from_env`].
    pub fn from_map<I, K, V>(variables: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let source: Map<String, String> = variables
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self::from_environment(Environment::default().source(Some(source)))
    }

    fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        let raw: RawSettings = Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawSettings) -> Result<Self, ConfigError> {
        let api_key = required(raw.notion_api_key, "NOTION_API_KEY")?;
        let database_id = required(raw.notion_database_id, "NOTION_DATABASE_ID")?;
        let sender = required(raw.email_sender, "EMAIL_SENDER")?;
        let recipients = Recipients::parse(&required(raw.email_recipients, "EMAIL_RECIPIENTS")?)?;

        Ok(Self {
            environment: optional(raw.environment)
                .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_owned()),
            log_level: optional(raw.log_level),
            lambda_function_name: optional(raw.aws_lambda_function_name),
            aws_region: optional(raw.aws_region),
            notion: NotionClientSettings {
                api_key,
                version: optional(raw.notion_version)
                    .unwrap_or_else(|| DEFAULT_NOTION_VERSION.to_owned()),
                base_url: optional(raw.notion_base_url)
                    .unwrap_or_else(|| DEFAULT_NOTION_BASE_URL.to_owned()),
            },
            database_id,
            filter_properties: optional(raw.notion_filter_properties)
                .unwrap_or_else(|| DEFAULT_FILTER_PROPERTIES.to_owned()),
            delivery: DeliverySettings { sender, recipients },
        })
    }

    /// Returns `true` when running inside AWS Lambda.
    #[must_use]
    pub const fn is_lambda(&self) -> bool {
        self.lambda_function_name.is_some()
    }

    /// Returns the tracing filter directive: the configured level, else
    /// `info` inside Lambda and `debug` elsewhere.
    #[must_use]
    pub fn log_directive(&self) -> String {
        self.log_level.as_deref().map_or_else(
            || if self.is_lambda() { "info" } else { "debug" }.to_owned(),
            str::to_ascii_lowercase,
        )
    }
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|trimmed| !trimmed.is_empty())
}

fn required(value: Option<String>, name: &'static str) -> Result<String, ConfigError> {
    optional(value).ok_or(ConfigError::Missing(name))
}
