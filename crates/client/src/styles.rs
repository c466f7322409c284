//! Client for the per-user styles backend.
//!
//! Style documents are opaque JSON owned by the backend; the client only
//! moves them. Mutating calls carry a CSRF header when a token can be found:
//! an app-provided token first, then the `XSRF-TOKEN` cookie captured in the
//! client's jar. Reads never carry one.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::config::Endpoints;
use crate::csrf::{CookieCsrfToken, CsrfTokenChain, CsrfTokenSource, StaticCsrfToken};
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::transport::Transport;

/// Client for per-user style documents.
#[derive(Clone)]
pub struct StylesClient {
    transport: Transport,
}

impl StylesClient {
    /// Client with cookie-based CSRF only.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::build(base_url, None, None)
    }

    /// Client that offers `token` as `X-CSRF-TOKEN` before falling back to
    /// the cookie.
    pub fn with_meta_token(base_url: &str, token: &str) -> Result<Self, ApiError> {
        Self::build(base_url, Some(token), None)
    }

    /// Client with a per-request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        Self::build(base_url, None, Some(timeout))
    }

    /// Client for the styles URL in [`Endpoints::from_env`].
    pub fn from_env() -> Result<Self, ApiError> {
        let endpoints = Endpoints::from_env()?;
        Self::new(endpoints.styles_url())
    }

    /// Client with a caller-supplied CSRF source instead of the defaults.
    pub fn with_csrf_source(
        base_url: &str,
        source: Arc<dyn CsrfTokenSource>,
    ) -> Result<Self, ApiError> {
        let mut transport = Transport::new(base_url, None)?;
        transport.set_csrf_source(source);
        Ok(Self { transport })
    }

    fn build(
        base_url: &str,
        meta_token: Option<&str>,
        timeout: Option<Duration>,
    ) -> Result<Self, ApiError> {
        let mut transport = Transport::new(base_url, timeout)?;
        let cookie = CookieCsrfToken::new(transport.cookie_jar(), transport.origin());
        let source: Arc<dyn CsrfTokenSource> = match meta_token {
            Some(token) => Arc::new(CsrfTokenChain::new(vec![
                Arc::new(StaticCsrfToken::new(token)),
                Arc::new(cookie),
            ])),
            None => Arc::new(cookie),
        };
        transport.set_csrf_source(source);
        Ok(Self { transport })
    }

    fn person_path(person_id: i64) -> String {
        format!("/api/styles/person/{person_id}")
    }

    /// `GET /api/styles/person/{personId}`
    pub async fn get_style(&self, person_id: i64) -> Result<ApiResponse, ApiError> {
        self.transport
            .get(&Self::person_path(person_id))
            .await?
            .require_success()
    }

    /// `POST /api/styles/person/{personId}`
    pub async fn create_style(
        &self,
        person_id: i64,
        style: &Value,
    ) -> Result<ApiResponse, ApiError> {
        self.transport
            .post_json(&Self::person_path(person_id), style)
            .await?
            .require_success()
    }

    /// `PUT /api/styles/person/{personId}`
    pub async fn update_style(
        &self,
        person_id: i64,
        style: &Value,
    ) -> Result<ApiResponse, ApiError> {
        self.transport
            .put_json(&Self::person_path(person_id), style)
            .await?
            .require_success()
    }

    /// `DELETE /api/styles/person/{personId}`
    pub async fn delete_style(&self, person_id: i64) -> Result<ApiResponse, ApiError> {
        self.transport
            .delete(&Self::person_path(person_id))
            .await?
            .require_success()
    }
}
