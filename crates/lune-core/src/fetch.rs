//! Outbound network fetch policy
//!
//! Hosted content reaches the network (local model servers, chat backends)
//! through the host. By default any http(s) URL is allowed, matching what the
//! content has always been granted; an allowlist narrows it to known origins.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    #[error("Origin not allowed: {0}")]
    Blocked(String),

    #[error("Request failed: {0}")]
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum FetchPolicy {
    #[default]
    Unrestricted,
    Allowlist {
        origins: Vec<String>,
    },
}

impl FetchPolicy {
    /// Parse `raw` and check it against the policy.
    pub fn check(&self, raw: &str) -> Result<Url, FetchError> {
        let url = Url::parse(raw).map_err(|e| FetchError::InvalidUrl(format!("{raw}: {e}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::UnsupportedScheme(url.scheme().to_string()));
        }

        match self {
            FetchPolicy::Unrestricted => Ok(url),
            FetchPolicy::Allowlist { origins } => {
                let origin = url.origin();
                let allowed = origins
                    .iter()
                    .filter_map(|entry| Url::parse(entry).ok())
                    .any(|entry| entry.origin() == origin);

                if allowed {
                    Ok(url)
                } else {
                    Err(FetchError::Blocked(origin.ascii_serialization()))
                }
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FetchRequest {
    pub url: String,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl FetchRequest {
    /// Upper-cased method, `GET` when absent.
    pub fn method(&self) -> Result<String, FetchError> {
        let method = self.method.as_deref().unwrap_or("GET").trim();
        if method.is_empty() || !method.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(FetchError::InvalidMethod(method.to_string()));
        }
        Ok(method.to_ascii_uppercase())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FetchResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}
