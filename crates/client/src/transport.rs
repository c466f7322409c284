//! Shared HTTP plumbing for both endpoint groups.
//!
//! One canonical request path: endpoint paths are appended to the configured
//! base URL, bodies are JSON, a shared cookie jar carries session cookies
//! across calls, and mutating methods pick up a CSRF header when a source is
//! configured. Response bodies decode by `content-type`.

use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::Jar;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use url::Url;

use crate::csrf::CsrfTokenSource;
use crate::error::ApiError;
use crate::response::{ApiResponse, Payload};

/// Methods that change server state and therefore carry a CSRF header.
fn is_mutating(method: &Method) -> bool {
    matches!(
        *method,
        Method::POST | Method::PUT | Method::DELETE | Method::PATCH
    )
}

#[derive(Clone)]
pub(crate) struct Transport {
    http: Client,
    jar: Arc<Jar>,
    base_url: String,
    origin: Url,
    csrf: Option<Arc<dyn CsrfTokenSource>>,
}

impl Transport {
    /// Build a transport for `base_url`, which may carry a path prefix.
    /// Trailing slashes are trimmed; paths are appended verbatim.
    pub(crate) fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let origin = Url::parse(&base_url).map_err(|source| ApiError::InvalidBaseUrl {
            url: base_url.clone(),
            source,
        })?;

        let jar = Arc::new(Jar::default());
        let mut builder = Client::builder().cookie_provider(jar.clone());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            jar,
            base_url,
            origin,
            csrf: None,
        })
    }

    pub(crate) fn set_csrf_source(&mut self, source: Arc<dyn CsrfTokenSource>) {
        self.csrf = Some(source);
    }

    pub(crate) fn cookie_jar(&self) -> Arc<Jar> {
        self.jar.clone()
    }

    pub(crate) fn origin(&self) -> Url {
        self.origin.clone()
    }

    pub(crate) async fn get(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.run(Method::GET, path, |b| b).await
    }

    pub(crate) async fn get_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<ApiResponse, ApiError> {
        self.run(Method::GET, path, |b| b.query(query)).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, ApiError> {
        self.run(Method::POST, path, |b| b.json(body)).await
    }

    pub(crate) async fn post_empty(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.run(Method::POST, path, |b| b).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, ApiError> {
        self.run(Method::PUT, path, |b| b.json(body)).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.run(Method::DELETE, path, |b| b).await
    }

    async fn run<F>(&self, method: Method, path: &str, configure: F) -> Result<ApiResponse, ApiError>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = configure(self.http.request(method.clone(), &url));

        if is_mutating(&method) {
            if let Some(source) = &self.csrf {
                if let Some(token) = source.token() {
                    builder = builder.header(token.header_name(), token.value());
                }
            }
        }

        tracing::debug!("{} {}", method, url);
        let response = builder.send().await.map_err(|e| {
            tracing::error!("{} {} failed: {}", method, url, e);
            ApiError::Transport(e)
        })?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let text = response.text().await?;

        if status.is_success() {
            tracing::debug!("{} {} -> {}", method, url, status);
        } else {
            tracing::warn!("{} {} -> {}", method, url, status);
        }

        Ok(ApiResponse::new(status, decode_payload(&content_type, text)))
    }
}

/// Decode a body by its declared `content-type`: JSON parses into a value,
/// everything else stays raw text. A body labeled JSON that fails to parse is
/// handed back as text rather than failing the call.
fn decode_payload(content_type: &str, text: String) -> Payload {
    if text.is_empty() {
        Payload::Empty
    } else if content_type.contains("application/json") {
        match serde_json::from_str(&text) {
            Ok(value) => Payload::Json(value),
            Err(_) => Payload::Text(text),
        }
    } else {
        Payload::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mutating_methods() {
        assert!(is_mutating(&Method::POST));
        assert!(is_mutating(&Method::PUT));
        assert!(is_mutating(&Method::DELETE));
        assert!(is_mutating(&Method::PATCH));
        assert!(!is_mutating(&Method::GET));
        assert!(!is_mutating(&Method::HEAD));
    }

    #[test]
    fn decode_payload_json() {
        let payload = decode_payload("application/json; charset=utf-8", r#"{"a":1}"#.to_string());
        assert_eq!(payload, Payload::Json(json!({"a": 1})));
    }

    #[test]
    fn decode_payload_text() {
        let payload = decode_payload("text/plain", "deleted".to_string());
        assert_eq!(payload, Payload::Text("deleted".to_string()));
    }

    #[test]
    fn decode_payload_mislabeled_json_falls_back_to_text() {
        let payload = decode_payload("application/json", "not json".to_string());
        assert_eq!(payload, Payload::Text("not json".to_string()));
    }

    #[test]
    fn decode_payload_empty_body() {
        let payload = decode_payload("application/json", String::new());
        assert_eq!(payload, Payload::Empty);
    }

    #[test]
    fn new_trims_trailing_slash() {
        let transport = Transport::new("http://localhost:8085/", None).expect("build");
        assert_eq!(transport.base_url, "http://localhost:8085");
    }

    #[test]
    fn new_keeps_path_prefix() {
        let transport = Transport::new("http://localhost:8587/py/", None).expect("build");
        assert_eq!(transport.base_url, "http://localhost:8587/py");
    }

    #[test]
    fn new_rejects_invalid_url() {
        let result = Transport::new("not a url", None);
        assert!(matches!(result, Err(ApiError::InvalidBaseUrl { .. })));
    }
}
