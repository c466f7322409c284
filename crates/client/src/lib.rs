//! Corkboard Client - Typed HTTP wrappers for the messaging and styles backends
//!
//! Two independent endpoint groups over one shared transport:
//! - [`NotificationsClient`] - message CRUD, the per-user notification feed,
//!   and read/dismiss receipts
//! - [`StylesClient`] - per-user UI style documents with best-effort CSRF
//!
//! Every operation is a single HTTP round trip returning
//! `Result<T, ApiError>`; non-2xx responses surface as [`ApiError::Status`]
//! with the status code, reason phrase, and decoded body. There is no retry,
//! batching, or caching. Session cookies persist in a per-client cookie jar.
//!
//! ```no_run
//! use corkboard_client::{NotificationsClient, StylesClient};
//! use corkboard_client::protocol::MessageDraft;
//!
//! # async fn demo() -> Result<(), corkboard_client::ApiError> {
//! let notifications = NotificationsClient::from_env()?;
//! let created = notifications
//!     .create_message(&MessageDraft::new("Picture day", "Bring your forms."))
//!     .await?;
//!
//! let styles = StylesClient::from_env()?;
//! let style = styles.get_style(42).await?;
//! println!("created message {}, style status {}", created.message_id, style.status());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod csrf;
pub mod error;
pub mod notifications;
pub mod response;
pub mod styles;

mod transport;

pub use config::Endpoints;
pub use csrf::{CsrfToken, CsrfTokenChain, CsrfTokenSource, StaticCsrfToken};
pub use error::ApiError;
pub use notifications::NotificationsClient;
pub use response::{ApiResponse, Payload};
pub use styles::StylesClient;

/// Wire types callers pass in and get back.
pub use corkboard_protocol as protocol;
