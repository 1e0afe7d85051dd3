//! # ndo-client
//!
//! Typed reqwest client for the orchestrator's REST surface:
//! - `POST /login` (session cookie carried for subsequent calls)
//! - `GET /mso/api/v2/sites`, `/mso/api/v1/tenants`, `/mso/api/v1/schemas`
//! - JSON-Patch mutations on `/mso/api/v1/schemas/{id}`
//! - template deployment tasks and deployment status polling
//!
//! One HTTP call at a time; the tool never issues concurrent requests
//! against the controller.

mod deploy;
mod error;
mod http;
mod listings;
mod login;
mod patch;

pub use deploy::DeploymentHandle;
pub use error::ApiError;

use std::sync::Arc;
use std::time::Duration;

/// HTTP client bound to one controller.
#[derive(Debug, Clone)]
pub struct NdoClient {
    http: reqwest::Client,
    base_url: Arc<str>,
}

impl NdoClient {
    /// Build a client for the controller at `base_url` (e.g.
    /// `https://ndo.example.net`).
    ///
    /// `verify_tls` is off by default in the CLI because lab controllers
    /// commonly run self-signed certificates; `--ssl` turns it on.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying client fails to build.
    pub fn new(base_url: &str, timeout: Duration, verify_tls: bool) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent("ndomig/0.1")
            .timeout(timeout)
            .cookie_store(true)
            .danger_accept_invalid_certs(!verify_tls)
            .build()?;

        Ok(Self {
            http,
            base_url: Arc::from(base_url.trim_end_matches('/')),
        })
    }

    fn url(&self, api: &str) -> String {
        format!("{}{api}", self.base_url)
    }
}
