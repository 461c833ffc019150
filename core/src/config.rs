//! Client configuration: endpoint base plus shared credentials.

use crate::credentials::Credentials;
use crate::error::ApiError;

/// Base URL of the upstream service.
pub const DEFAULT_ENDPOINT: &str = "http://webservice.recruit.co.jp/hotpepper";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "HOTPEPPER_API_KEY";

/// Environment variable overriding [`DEFAULT_ENDPOINT`].
pub const ENDPOINT_ENV: &str = "HOTPEPPER_ENDPOINT";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    endpoint: String,
    credentials: Credentials,
}

impl ClientConfig {
    pub fn new(endpoint: &str, credentials: Credentials) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    /// Reads `HOTPEPPER_API_KEY` and `HOTPEPPER_ENDPOINT`. Both are optional:
    /// without a key the credentials stay unset and every search fails with
    /// `MissingApiKey` until one is provided.
    pub fn from_env() -> Result<Self, ApiError> {
        let credentials = Credentials::new();
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                credentials.set(key)?;
            }
        }
        let endpoint =
            std::env::var(ENDPOINT_ENV).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Ok(Self::new(&endpoint, credentials))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// `<endpoint>/<path>/v1`
    pub fn resource_url(&self, path: &str) -> String {
        format!("{}/{path}/v1", self.endpoint)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, Credentials::new())
    }
}
