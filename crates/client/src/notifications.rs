//! Client for the messaging service.
//!
//! Message CRUD plus the per-user notification feed and its read/dismiss
//! receipts. Every method is one round trip against the configured base URL.

use std::time::Duration;

use corkboard_protocol::{Ack, MessageCreated, MessageDraft, Notification, ReceiptEntry};

use crate::config::Endpoints;
use crate::error::ApiError;
use crate::transport::Transport;

/// Client for message authoring and the per-user notification feed.
#[derive(Clone)]
pub struct NotificationsClient {
    transport: Transport,
}

impl NotificationsClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            transport: Transport::new(base_url, None)?,
        })
    }

    /// Client with a per-request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        Ok(Self {
            transport: Transport::new(base_url, Some(timeout))?,
        })
    }

    /// Client for the messaging URL in [`Endpoints::from_env`].
    pub fn from_env() -> Result<Self, ApiError> {
        let endpoints = Endpoints::from_env()?;
        Self::new(endpoints.messaging_url())
    }

    /// `POST /api/messages`
    pub async fn create_message(&self, draft: &MessageDraft) -> Result<MessageCreated, ApiError> {
        self.transport
            .post_json("/api/messages", draft)
            .await?
            .require_success()?
            .decode()
    }

    /// `PUT /api/messages/{id}`
    pub async fn update_message(
        &self,
        message_id: i64,
        draft: &MessageDraft,
    ) -> Result<Ack, ApiError> {
        self.transport
            .put_json(&format!("/api/messages/{message_id}"), draft)
            .await?
            .require_success()?
            .decode()
    }

    /// `DELETE /api/messages/{id}`
    pub async fn delete_message(&self, message_id: i64) -> Result<Ack, ApiError> {
        self.transport
            .delete(&format!("/api/messages/{message_id}"))
            .await?
            .require_success()?
            .decode()
    }

    /// `GET /api/notifications/{userId}`
    ///
    /// The feed is a JSON array; a non-array reply yields an empty list.
    pub async fn user_notifications(&self, user_id: i64) -> Result<Vec<Notification>, ApiError> {
        self.transport
            .get(&format!("/api/notifications/{user_id}"))
            .await?
            .require_success()?
            .decode_array_lenient()
    }

    /// `POST /api/notifications/{id}/read`
    pub async fn mark_read(&self, notification_id: i64) -> Result<Ack, ApiError> {
        self.transport
            .post_empty(&format!("/api/notifications/{notification_id}/read"))
            .await?
            .require_success()?
            .decode()
    }

    /// `POST /api/notifications/{id}/dismiss`
    pub async fn mark_dismissed(&self, notification_id: i64) -> Result<Ack, ApiError> {
        self.transport
            .post_empty(&format!("/api/notifications/{notification_id}/dismiss"))
            .await?
            .require_success()?
            .decode()
    }

    /// `GET /api/notifications?message_id={id}`
    ///
    /// Delivery report for one message: per-user read/dismiss state.
    /// Like the feed, a non-array reply yields an empty list.
    pub async fn message_report(&self, message_id: i64) -> Result<Vec<ReceiptEntry>, ApiError> {
        self.transport
            .get_query("/api/notifications", &[("message_id", message_id)])
            .await?
            .require_success()?
            .decode_array_lenient()
    }
}
