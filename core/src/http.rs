//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain owned data. Resource clients build an
//! `HttpRequest` and parse an `HttpResponse` without touching the network;
//! whoever sits between the two (a `Transport`, or the caller's own HTTP
//! stack) performs the actual I/O.

use std::future::Future;

use url::form_urlencoded;

use crate::error::ApiError;

/// An HTTP GET described as plain data.
///
/// `url` is the resource URL without a query string; `query` holds the
/// canonical query pairs in the order they will be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// Full request URL with the form-urlencoded query appended.
    pub fn to_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter())
            .finish();
        format!("{}?{query}", self.url)
    }

    /// Same as [`to_url`](Self::to_url) with the `key` value masked, for logs.
    pub fn redacted_url(&self) -> String {
        let masked = HttpRequest {
            url: self.url.clone(),
            query: self
                .query
                .iter()
                .map(|(k, v)| {
                    if k == "key" {
                        (k.clone(), "***".to_string())
                    } else {
                        (k.clone(), v.clone())
                    }
                })
                .collect(),
            headers: Vec::new(),
        };
        masked.to_url()
    }

    /// Value of the first query pair named `name`.
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Executes one `HttpRequest` and hands back the raw response.
///
/// Implementations must not interpret the body. A network-level failure is
/// reported as `ApiError::Transport`; any HTTP status, including non-2xx, is
/// returned as data.
pub trait Transport: Send + Sync {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, ApiError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> HttpRequest {
        HttpRequest {
            url: "http://localhost/hotpepper/gourmet/v1".to_string(),
            query: vec![
                ("key".to_string(), "secret".to_string()),
                ("format".to_string(), "json".to_string()),
                ("keyword".to_string(), "ラーメン 渋谷".to_string()),
            ],
            headers: Vec::new(),
        }
    }

    #[test]
    fn to_url_encodes_query_in_order() {
        let url = request().to_url();
        assert!(url.starts_with("http://localhost/hotpepper/gourmet/v1?key=secret&format=json&keyword="));
        assert!(!url.contains(' '));
        assert!(!url.contains("ラーメン"));
    }

    #[test]
    fn to_url_without_query_has_no_question_mark() {
        let req = HttpRequest {
            url: "http://localhost/x".to_string(),
            query: Vec::new(),
            headers: Vec::new(),
        };
        assert_eq!(req.to_url(), "http://localhost/x");
    }

    #[test]
    fn redacted_url_masks_key() {
        let url = request().redacted_url();
        assert!(!url.contains("secret"));
        assert!(url.contains("key=***") || url.contains("key=%2A%2A%2A"));
    }

    #[test]
    fn query_value_finds_pair() {
        let req = request();
        assert_eq!(req.query_value("format"), Some("json"));
        assert_eq!(req.query_value("count"), None);
    }
}
