//! Response envelopes and their classification.
//!
//! # Design
//! Every resource answers with `{"results": {...}}`. A failure carries an
//! `error` list; a success carries the metadata block plus one payload
//! field whose name depends on the resource. The decision is a presence
//! check on `error` alone, never the HTTP status: the upstream answers 200
//! for API-level failures too. An envelope holding both `error` and a
//! payload is classified as a failure.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// Status reported for a successful search.
pub const SUCCESS_STATUS: u16 = 200;

/// The three failure codes the upstream reports inside the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum FailureCode {
    /// 1000: upstream server fault.
    ServerError,
    /// 2000: API key or source address rejected.
    Authentication,
    /// 3000: a request parameter is invalid.
    InvalidParameter,
}

impl FailureCode {
    pub fn code(self) -> u16 {
        match self {
            FailureCode::ServerError => 1000,
            FailureCode::Authentication => 2000,
            FailureCode::InvalidParameter => 3000,
        }
    }
}

impl TryFrom<u16> for FailureCode {
    type Error = String;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            1000 => Ok(FailureCode::ServerError),
            2000 => Ok(FailureCode::Authentication),
            3000 => Ok(FailureCode::InvalidParameter),
            other => Err(format!("unknown failure code {other}")),
        }
    }
}

impl From<FailureCode> for u16 {
    fn from(code: FailureCode) -> Self {
        code.code()
    }
}

/// Metadata block of a success envelope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResponseMeta {
    pub api_version: String,
    #[serde(deserialize_with = "crate::de::number")]
    pub results_available: u64,
    #[serde(deserialize_with = "crate::de::number")]
    pub results_returned: u64,
    #[serde(deserialize_with = "crate::de::number")]
    pub results_start: u64,
}

/// One entry of a failure envelope's `error` list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorEntry {
    pub code: FailureCode,
    pub message: String,
}

/// A classified envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    Success { meta: ResponseMeta, payload: T },
    Failure { api_version: String, errors: Vec<ErrorEntry> },
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success { .. })
    }
}

/// `true` unless `results.error` is present. Pure presence check.
pub fn is_success(raw: &Value) -> bool {
    raw.get("results")
        .and_then(|results| results.get("error"))
        .is_none()
}

/// Classify a decoded body and extract the typed payload named
/// `payload_field` (success) or the error list (failure).
pub fn classify<T: DeserializeOwned>(raw: &Value, payload_field: &str) -> Result<Envelope<T>, ApiError> {
    let results = raw
        .get("results")
        .filter(|r| r.is_object())
        .ok_or_else(|| ApiError::InvalidEnvelope("missing `results` object".to_string()))?;

    if is_success(raw) {
        let meta = ResponseMeta::deserialize(results)?;
        let payload = results.get(payload_field).ok_or_else(|| {
            ApiError::InvalidEnvelope(format!("missing payload field `{payload_field}`"))
        })?;
        let payload = T::deserialize(payload)?;
        return Ok(Envelope::Success { meta, payload });
    }

    let api_version = results
        .get("api_version")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let errors = match &results["error"] {
        // Some upstream revisions send a bare object instead of a list.
        entry @ Value::Object(_) => vec![decode_error_entry(entry)?],
        Value::Array(entries) => entries
            .iter()
            .map(decode_error_entry)
            .collect::<Result<Vec<_>, _>>()?,
        other => {
            return Err(ApiError::InvalidEnvelope(format!(
                "`error` must be a list, got {other}"
            )))
        }
    };
    if errors.is_empty() {
        return Err(ApiError::InvalidEnvelope("empty `error` list".to_string()));
    }
    Ok(Envelope::Failure { api_version, errors })
}

fn decode_error_entry(entry: &Value) -> Result<ErrorEntry, ApiError> {
    ErrorEntry::deserialize(entry).map_err(|e| ApiError::InvalidEnvelope(e.to_string()))
}
