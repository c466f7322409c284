//! Backend endpoint configuration.
//!
//! The two services live at separate origins (historically a Flask messaging
//! backend and a Spring styles backend). Base URLs come from the environment
//! or explicit configuration, never from code scattered across call sites.

use url::Url;

use crate::error::ApiError;

/// Default messaging service base URL.
pub const DEFAULT_MESSAGING_URL: &str = "http://localhost:8587";

/// Default styles service base URL.
pub const DEFAULT_STYLES_URL: &str = "http://localhost:8085";

/// Environment variable overriding the messaging base URL.
pub const MESSAGING_URL_ENV: &str = "CORKBOARD_MESSAGING_URL";

/// Environment variable overriding the styles base URL.
pub const STYLES_URL_ENV: &str = "CORKBOARD_STYLES_URL";

/// Validated base URLs of the two backend services.
///
/// A base URL may carry a path prefix (e.g. behind a reverse proxy); endpoint
/// paths are appended to it verbatim. Trailing slashes are trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    messaging_url: String,
    styles_url: String,
}

impl Endpoints {
    pub fn new(messaging_url: &str, styles_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            messaging_url: validate(messaging_url)?,
            styles_url: validate(styles_url)?,
        })
    }

    /// Read endpoints from the environment, falling back to the localhost
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ApiError> {
        let messaging = std::env::var(MESSAGING_URL_ENV)
            .unwrap_or_else(|_| DEFAULT_MESSAGING_URL.to_string());
        let styles =
            std::env::var(STYLES_URL_ENV).unwrap_or_else(|_| DEFAULT_STYLES_URL.to_string());
        Self::new(&messaging, &styles)
    }

    pub fn messaging_url(&self) -> &str {
        &self.messaging_url
    }

    pub fn styles_url(&self) -> &str {
        &self.styles_url
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            messaging_url: DEFAULT_MESSAGING_URL.to_string(),
            styles_url: DEFAULT_STYLES_URL.to_string(),
        }
    }
}

fn validate(url: &str) -> Result<String, ApiError> {
    let trimmed = url.trim_end_matches('/');
    Url::parse(trimmed).map_err(|source| ApiError::InvalidBaseUrl {
        url: trimmed.to_string(),
        source,
    })?;
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_trailing_slashes() {
        let endpoints =
            Endpoints::new("http://messages.test/", "http://styles.test/app/").expect("build");
        assert_eq!(endpoints.messaging_url(), "http://messages.test");
        assert_eq!(endpoints.styles_url(), "http://styles.test/app");
    }

    #[test]
    fn new_rejects_garbage() {
        let err = Endpoints::new("http://messages.test", "::::").expect_err("must fail");
        assert!(matches!(err, ApiError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn default_uses_localhost() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.messaging_url(), DEFAULT_MESSAGING_URL);
        assert_eq!(endpoints.styles_url(), DEFAULT_STYLES_URL);
    }
}
