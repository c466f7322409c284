//! CSRF token discovery for state-changing requests.
//!
//! The styles backend sits behind Spring Security, which accepts either an
//! app-provided token echoed back as `X-CSRF-TOKEN`, or the `XSRF-TOKEN`
//! cookie (CookieCsrfTokenRepository) echoed back as `X-XSRF-TOKEN`. Tokens
//! are looked up at call time and attached to mutating methods only; a
//! missing token is not an error.

use std::sync::Arc;

use reqwest::cookie::{CookieStore, Jar};
use url::Url;

/// Cookie written by the backend when cookie-based CSRF is active.
const CSRF_COOKIE_NAME: &str = "XSRF-TOKEN";

/// An anti-forgery token and its provenance.
///
/// Provenance decides the request header the backend expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsrfToken {
    /// Token issued to the application out of band (page meta tag, config).
    Meta(String),
    /// Token mirrored from the `XSRF-TOKEN` cookie.
    Cookie(String),
}

impl CsrfToken {
    pub fn header_name(&self) -> &'static str {
        match self {
            CsrfToken::Meta(_) => "X-CSRF-TOKEN",
            CsrfToken::Cookie(_) => "X-XSRF-TOKEN",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            CsrfToken::Meta(value) | CsrfToken::Cookie(value) => value,
        }
    }
}

/// Where the transport looks for a CSRF token before each mutating call.
pub trait CsrfTokenSource: Send + Sync {
    fn token(&self) -> Option<CsrfToken>;
}

/// Fixed token handed to the client up front.
#[derive(Debug, Clone)]
pub struct StaticCsrfToken {
    value: String,
}

impl StaticCsrfToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl CsrfTokenSource for StaticCsrfToken {
    fn token(&self) -> Option<CsrfToken> {
        Some(CsrfToken::Meta(self.value.clone()))
    }
}

/// Reads the `XSRF-TOKEN` cookie for the backend origin out of the client's
/// cookie jar at call time.
#[derive(Clone)]
pub struct CookieCsrfToken {
    jar: Arc<Jar>,
    origin: Url,
}

impl CookieCsrfToken {
    pub(crate) fn new(jar: Arc<Jar>, origin: Url) -> Self {
        Self { jar, origin }
    }
}

impl CsrfTokenSource for CookieCsrfToken {
    fn token(&self) -> Option<CsrfToken> {
        let header = self.jar.cookies(&self.origin)?;
        let raw = header.to_str().ok()?;
        for pair in raw.split(';') {
            if let Some((name, value)) = pair.trim().split_once('=') {
                if name == CSRF_COOKIE_NAME && !value.is_empty() {
                    return Some(CsrfToken::Cookie(value.to_string()));
                }
            }
        }
        None
    }
}

/// Tries sources in order; the first token found wins.
#[derive(Clone)]
pub struct CsrfTokenChain {
    sources: Vec<Arc<dyn CsrfTokenSource>>,
}

impl CsrfTokenChain {
    pub fn new(sources: Vec<Arc<dyn CsrfTokenSource>>) -> Self {
        Self { sources }
    }
}

impl CsrfTokenSource for CsrfTokenChain {
    fn token(&self) -> Option<CsrfToken> {
        self.sources.iter().find_map(|source| source.token())
    }
}
