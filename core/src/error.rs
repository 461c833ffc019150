//! Error types for the HotPepper client.
//!
//! # Design
//! Only faults that the caller cannot handle as data live here: a missing
//! credential, a failed transport, or a body that is not a valid envelope.
//! API-level failures reported by the upstream (codes 1000/2000/3000) are
//! not errors; they come back as `HotPepperResponse::Failure`.

use thiserror::Error;

/// Errors returned by resource clients, credentials and transports.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No API key has been set on the shared credentials.
    #[error("API key is not set")]
    MissingApiKey,

    /// An empty string was offered as the API key.
    #[error("API key must not be empty")]
    EmptyApiKey,

    /// The shared credentials already hold a key.
    #[error("API key has already been set")]
    CredentialAlreadySet,

    /// The transport could not complete the HTTP round-trip.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status and a body that is not an
    /// envelope.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The body is not JSON, or the records do not match the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The body is JSON but does not follow the envelope contract.
    #[error("invalid response envelope: {0}")]
    InvalidEnvelope(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Deserialization(err.to_string())
    }
}

#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}
