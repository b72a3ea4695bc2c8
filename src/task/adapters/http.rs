//! HTTP client for the Notion REST API.

use crate::task::ports::{NotionApi, NotionError};
use async_trait::async_trait;
use reqwest::{
    Client, Method,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde_json::Value;
use tracing::{debug, error};

/// Notion API version sent when none is configured.
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";

/// Notion API root used when none is configured.
pub const DEFAULT_NOTION_BASE_URL: &str = "https://api.notion.com/v1";

const NOTION_VERSION_HEADER: &str = "Notion-Version";

/// Connection settings for [`NotionHttpClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotionClientSettings {
    /// Integration token sent as a bearer credential.
    pub api_key: String,
    /// Value of the `Notion-Version` header.
    pub version: String,
    /// API root, for example `https://api.notion.com/v1`.
    pub base_url: String,
}

impl NotionClientSettings {
    /// Creates settings with the default version and base URL.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            version: DEFAULT_NOTION_VERSION.to_owned(),
            base_url: DEFAULT_NOTION_BASE_URL.to_owned(),
        }
    }
}

/// Authenticated Notion API client.
///
/// Every request carries the bearer token, the `Notion-Version` header and a
/// JSON content type. Non-success responses become [`NotionError::Api`]
/// with the status code and response body.
#[derive(Debug, Clone)]
pub struct NotionHttpClient {
    http: Client,
    base_url: String,
}

impl NotionHttpClient {
    /// Builds a client from connection settings.
    ///
    /// # Errors
    ///
    /// Returns [`NotionError::Configuration`] when the API key is empty or a
    /// header value is not valid.
    pub fn new(settings: &NotionClientSettings) -> Result<Self, NotionError> {
        if settings.api_key.trim().is_empty() {
            return Err(NotionError::Configuration(
                "Notion API key must be configured".to_owned(),
            ));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            header_value(&format!("Bearer {}", settings.api_key))?,
        );
        headers.insert(NOTION_VERSION_HEADER, header_value(&settings.version)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|err| NotionError::Configuration(err.to_string()))?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Returns the absolute URL for an endpoint relative to the API root.
    #[must_use]
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Performs a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`NotionError::Api`] when the request fails.
    pub async fn get(&self, endpoint: &str) -> Result<Value, NotionError> {
        self.request(Method::GET, endpoint, None).await
    }

    /// Performs a PATCH request.
    ///
    /// # Errors
    ///
    /// Returns [`NotionError::Api`] when the request fails.
    pub async fn patch(&self, endpoint: &str, payload: &Value) -> Result<Value, NotionError> {
        self.request(Method::PATCH, endpoint, Some(payload)).await
    }

    /// Performs a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns [`NotionError::Api`] when the request fails.
    pub async fn delete(&self, endpoint: &str) -> Result<Value, NotionError> {
        self.request(Method::DELETE, endpoint, None).await
    }

    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        payload: Option<&Value>,
    ) -> Result<Value, NotionError> {
        let url = self.url(endpoint);
        debug!(%method, %url, "sending Notion request");

        let mut builder = self.http.request(method, &url);
        if let Some(body) = payload {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|err| {
            error!(error = %err, "Notion API request failed");
            NotionError::api(
                err.status().map(|status| status.as_u16()),
                format!("Notion API connection error: {err}"),
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|err| err.to_string());
            error!(status = status.as_u16(), "Notion API request failed");
            return Err(NotionError::api(
                Some(status.as_u16()),
                format!("Notion API request failed: {body}"),
            ));
        }

        response.json::<Value>().await.map_err(|err| {
            NotionError::malformed(format!("response body is not valid JSON: {err}"))
        })
    }
}

#[async_trait]
impl NotionApi for NotionHttpClient {
    async fn post(&self, path: &str, payload: &Value) -> Result<Value, NotionError> {
        self.request(Method::POST, path, Some(payload)).await
    }
}

fn header_value(value: &str) -> Result<HeaderValue, NotionError> {
    HeaderValue::from_str(value)
        .map_err(|err| NotionError::Configuration(format!("invalid header value: {err}")))
}
