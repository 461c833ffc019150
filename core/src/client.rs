//! Generic resource client and the `HotPepper` entry point.
//!
//! # Design
//! The twelve upstream resources differ only in URL path, payload field,
//! filter set and record type. `Resource` captures those four facts and
//! `ResourceClient<R, T>` implements the shared contract once:
//!
//! - builder methods (defined per resource in `resources::*`) mutate the
//!   filter set and return `&mut Self`;
//! - `build_search` reads the credential and formats the filters into an
//!   `HttpRequest` without touching the network;
//! - `parse_search` decodes, classifies and projects an `HttpResponse`;
//! - `search` runs `build_search` → `Transport::execute` → `parse_search`.
//!
//! Filters are never reset between searches: a reused client sends the
//! accumulated filters again, plus whatever the caller added since.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::envelope::is_success;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::query::{format_params, CanonicalQuery, FilterSet};
use crate::response::HotPepperResponse;

/// Static description of one upstream resource.
pub trait Resource {
    /// Path segment between the endpoint and `/v1`, e.g. `"gourmet"`.
    const PATH: &'static str;

    /// Name of the success envelope's payload field, e.g. `"shop"`.
    const PAYLOAD_FIELD: &'static str;

    type Filters: FilterSet + Default + Clone + fmt::Debug;

    type Record: DeserializeOwned;

    /// Hook run on the decoded body of a successful envelope before
    /// projection. The default leaves it untouched.
    fn post_process(_filters: &Self::Filters, _raw: &mut Value) {}
}

/// Query parameters sent with every request ahead of the filters.
const FORMAT: (&str, &str) = ("format", "json");

/// Client for one resource, holding its accumulated filters.
pub struct ResourceClient<R: Resource, T> {
    config: ClientConfig,
    transport: Arc<T>,
    pub(crate) filters: R::Filters,
}

impl<R: Resource, T> ResourceClient<R, T> {
    pub fn new(config: ClientConfig, transport: Arc<T>) -> Self {
        Self {
            config,
            transport,
            filters: R::Filters::default(),
        }
    }

    pub fn filters(&self) -> &R::Filters {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut R::Filters {
        &mut self.filters
    }

    /// Resource URL without a query string.
    pub fn url(&self) -> String {
        self.config.resource_url(R::PATH)
    }

    /// The filters alone, without `key` and `format`.
    pub fn query(&self) -> CanonicalQuery {
        format_params(&self.filters)
    }

    /// Build the GET request for the current filters.
    ///
    /// Fails with `MissingApiKey` when no key has been set; nothing else is
    /// evaluated in that case.
    pub fn build_search(&self) -> Result<HttpRequest, ApiError> {
        let key = self.config.credentials().get()?;
        let mut query = vec![
            ("key".to_string(), key.to_string()),
            (FORMAT.0.to_string(), FORMAT.1.to_string()),
        ];
        query.extend(self.query().into_pairs());
        Ok(HttpRequest {
            url: self.url(),
            query,
            headers: vec![("accept".to_string(), "application/json".to_string())],
        })
    }

    /// Decode a response into a typed `HotPepperResponse`.
    ///
    /// API-level failures come back as `Ok(HotPepperResponse::Failure)`. A
    /// body that is not JSON is a `Deserialization` error, and JSON that is
    /// not an envelope is `InvalidEnvelope`; either becomes an `HttpError`
    /// when the status was not 2xx.
    pub fn parse_search(&self, response: HttpResponse) -> Result<HotPepperResponse<R::Record>, ApiError> {
        let mut raw: Value = match serde_json::from_str(&response.body) {
            Ok(raw) => raw,
            Err(err) => return Err(check_status(response).err().unwrap_or_else(|| err.into())),
        };
        if is_success(&raw) {
            R::post_process(&self.filters, &mut raw);
        }
        let projected = match crate::response::project(raw, R::PAYLOAD_FIELD) {
            Ok(projected) => projected,
            Err(err @ ApiError::InvalidEnvelope(_)) => {
                return Err(check_status(response).err().unwrap_or(err));
            }
            Err(err) => return Err(err),
        };
        match &projected {
            HotPepperResponse::Success { result, meta, .. } => {
                debug!(
                    resource = R::PATH,
                    returned = result.len(),
                    available = meta.results_available,
                    "search succeeded"
                );
            }
            HotPepperResponse::Failure { status, error, .. } => {
                warn!(resource = R::PATH, code = status.code(), %error, "upstream reported failure");
            }
        }
        Ok(projected)
    }
}

impl<R: Resource, T: Transport> ResourceClient<R, T> {
    /// Issue one GET for the current filters and project the answer.
    #[tracing::instrument(level = "debug", skip(self), fields(resource = R::PATH))]
    pub async fn search(&self) -> Result<HotPepperResponse<R::Record>, ApiError> {
        let request = self.build_search()?;
        debug!(url = %request.redacted_url(), "sending request");
        let response = self.transport.execute(request).await?;
        debug!(status = response.status, bytes = response.body.len(), "response received");
        self.parse_search(response)
    }
}

impl<R: Resource, T> Clone for ResourceClient<R, T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            transport: Arc::clone(&self.transport),
            filters: self.filters.clone(),
        }
    }
}

impl<R: Resource, T> fmt::Debug for ResourceClient<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("resource", &R::PATH)
            .field("endpoint", &self.config.endpoint())
            .field("filters", &self.filters)
            .finish()
    }
}

/// Map a non-2xx response to `HttpError`.
fn check_status(response: HttpResponse) -> Result<HttpResponse, ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(response);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body,
    })
}

/// Entry point: shared configuration plus a transport, with one factory per
/// resource (see `resources`). Every factory call returns a fresh client.
pub struct HotPepper<T> {
    config: ClientConfig,
    transport: Arc<T>,
}

impl<T> HotPepper<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self {
            config,
            transport: Arc::new(transport),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fresh client for any resource type.
    pub fn client<R: Resource>(&self) -> ResourceClient<R, T> {
        ResourceClient::new(self.config.clone(), Arc::clone(&self.transport))
    }
}

#[cfg(feature = "reqwest")]
impl HotPepper<crate::transport::ReqwestTransport> {
    /// Configuration from the environment and the bundled reqwest transport.
    pub fn from_env() -> Result<Self, ApiError> {
        Ok(Self::new(
            ClientConfig::from_env()?,
            crate::transport::ReqwestTransport::new(),
        ))
    }
}

impl<T> Clone for HotPepper<T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T> fmt::Debug for HotPepper<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HotPepper").field("config", &self.config).finish()
    }
}
