//! The value every `search()` hands back.
//!
//! A success carries the projected records; a failure carries the first
//! error entry's code and message. Both keep the decoded envelope verbatim
//! in `raw` so callers can reach fields this crate does not model.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::envelope::{classify, Envelope, FailureCode, ResponseMeta, SUCCESS_STATUS};
use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum HotPepperResponse<T> {
    Success {
        result: Vec<T>,
        meta: ResponseMeta,
        raw: Value,
    },
    Failure {
        status: FailureCode,
        error: String,
        raw: Value,
    },
}

impl<T> HotPepperResponse<T> {
    /// `200` for success, otherwise the upstream failure code.
    pub fn status(&self) -> u16 {
        match self {
            HotPepperResponse::Success { .. } => SUCCESS_STATUS,
            HotPepperResponse::Failure { status, .. } => status.code(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, HotPepperResponse::Success { .. })
    }

    pub fn result(&self) -> Option<&[T]> {
        match self {
            HotPepperResponse::Success { result, .. } => Some(result.as_slice()),
            HotPepperResponse::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            HotPepperResponse::Success { .. } => None,
            HotPepperResponse::Failure { error, .. } => Some(error.as_str()),
        }
    }

    pub fn raw(&self) -> &Value {
        match self {
            HotPepperResponse::Success { raw, .. } | HotPepperResponse::Failure { raw, .. } => raw,
        }
    }

    /// Records on success, `(code, message)` on failure.
    pub fn into_result(self) -> Result<Vec<T>, (FailureCode, String)> {
        match self {
            HotPepperResponse::Success { result, .. } => Ok(result),
            HotPepperResponse::Failure { status, error, .. } => Err((status, error)),
        }
    }
}

/// Classify `raw` and project it into a response whose records are read
/// from `payload_field`. Only the first error entry of a failure is kept.
pub fn project<T: DeserializeOwned>(raw: Value, payload_field: &str) -> Result<HotPepperResponse<T>, ApiError> {
    match classify::<Vec<T>>(&raw, payload_field)? {
        Envelope::Success { meta, payload } => Ok(HotPepperResponse::Success {
            result: payload,
            meta,
            raw,
        }),
        Envelope::Failure { errors, .. } => {
            let first = errors
                .into_iter()
                .next()
                .ok_or_else(|| ApiError::InvalidEnvelope("empty `error` list".to_string()))?;
            Ok(HotPepperResponse::Failure {
                status: first.code,
                error: first.message,
                raw,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::MasterRecord;

    #[test]
    fn failure_projects_first_entry() {
        let raw = json!({
            "results": {
                "api_version": "1.26",
                "error": [
                    {"code": 1000, "message": "Invalid API key"},
                    {"code": 3000, "message": "ignored"}
                ]
            }
        });
        let resp: HotPepperResponse<MasterRecord> = project(raw.clone(), "genre").unwrap();
        assert_eq!(resp.status(), 1000);
        assert_eq!(resp.error(), Some("Invalid API key"));
        assert!(resp.result().is_none());
        assert_eq!(resp.raw(), &raw);
    }

    #[test]
    fn success_projects_payload_field() {
        let raw = json!({
            "results": {
                "api_version": "1.26",
                "results_available": 1,
                "results_returned": "1",
                "results_start": 1,
                "genre": [{"code": "G001", "name": "居酒屋"}]
            }
        });
        let resp: HotPepperResponse<MasterRecord> = project(raw.clone(), "genre").unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.status(), SUCCESS_STATUS);
        assert_eq!(resp.error(), None);
        assert_eq!(resp.raw(), &raw);
        let records = resp.into_result().unwrap();
        assert_eq!(records, vec![MasterRecord { code: "G001".into(), name: "居酒屋".into() }]);
    }

    #[test]
    fn into_result_exposes_failure() {
        let raw = json!({"results": {"api_version": "1.26", "error": [{"code": 2000, "message": "denied"}]}});
        let resp: HotPepperResponse<MasterRecord> = project(raw, "genre").unwrap();
        let (code, message) = resp.into_result().unwrap_err();
        assert_eq!(code, FailureCode::Authentication);
        assert_eq!(message, "denied");
    }

    #[test]
    fn mismatched_records_fail_to_decode() {
        let raw = json!({
            "results": {
                "api_version": "1.26",
                "results_available": 1,
                "results_returned": 1,
                "results_start": 1,
                "genre": [{"unexpected": true}]
            }
        });
        let err = project::<MasterRecord>(raw, "genre").unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
