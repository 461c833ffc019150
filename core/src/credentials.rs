//! Shared API key handle.
//!
//! Every resource client created from one `HotPepper` holds a clone of the
//! same `Credentials`, so a key set after the clients exist is still seen at
//! request time. The key is written at most once.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::error::ApiError;

/// Set-once, read-many API key.
#[derive(Clone, Default)]
pub struct Credentials {
    key: Arc<OnceLock<String>>,
}

impl Credentials {
    /// Empty credentials. Every request fails with `MissingApiKey` until
    /// [`set`](Self::set) is called.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(key: impl Into<String>) -> Result<Self, ApiError> {
        let credentials = Self::new();
        credentials.set(key)?;
        Ok(credentials)
    }

    pub fn set(&self, key: impl Into<String>) -> Result<(), ApiError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ApiError::EmptyApiKey);
        }
        self.key.set(key).map_err(|_| ApiError::CredentialAlreadySet)
    }

    pub fn get(&self) -> Result<&str, ApiError> {
        self.key.get().map(String::as_str).ok_or(ApiError::MissingApiKey)
    }

    pub fn is_set(&self) -> bool {
        self.key.get().is_some()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &if self.is_set() { "<set>" } else { "<unset>" })
            .finish()
    }
}
