//! Notification feed and delivery receipt types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::messages::MessageLink;

/// One entry in a user's notification feed.
///
/// `read_at`/`dismissed_at` are RFC3339 timestamps on the wire and null
/// until the corresponding action happens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub notification_id: i64,
    pub message_id: i64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub links: Vec<MessageLink>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub is_dismissed: bool,
    #[serde(default)]
    pub read_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub dismissed_at: Option<DateTime<Utc>>,
}

/// Per-user state row in a message delivery report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptEntry {
    pub user_id: i64,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub is_dismissed: bool,
    #[serde(default)]
    pub read_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub dismissed_at: Option<DateTime<Utc>>,
}
