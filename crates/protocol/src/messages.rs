//! Message bodies for the messaging service.
//!
//! A message is authored once and fanned out by the backend as per-user
//! notifications; see [`crate::notifications`] for the read side.

use serde::{Deserialize, Serialize};

/// A link attached to a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageLink {
    pub url: String,
    /// Display label; missing on the wire means empty.
    #[serde(default)]
    pub label: String,
}

impl MessageLink {
    pub fn new(url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            label: label.into(),
        }
    }
}

/// Request body for creating or updating a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDraft {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub links: Vec<MessageLink>,
}

impl MessageDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            links: Vec::new(),
        }
    }

    pub fn with_links(mut self, links: Vec<MessageLink>) -> Self {
        self.links = links;
        self
    }
}

/// Reply to a successful message creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageCreated {
    pub message_id: i64,
    pub title: String,
}

/// Generic `{"message": ...}` acknowledgement returned by mutation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub message: String,
}

#[cfg(test)]
mod serde_tests {
    use super::*;

    #[test]
    fn message_link_label_defaults_to_empty() {
        let link: MessageLink =
            serde_json::from_str(r#"{"url":"https://example.com/syllabus"}"#).expect("deserialize");
        assert_eq!(link.url, "https://example.com/syllabus");
        assert_eq!(link.label, "");
    }

    #[test]
    fn message_draft_serializes_all_fields() {
        let draft = MessageDraft::new("Exam moved", "Now on Friday.")
            .with_links(vec![MessageLink::new("https://example.com", "details")]);

        let json = serde_json::to_value(&draft).expect("serialize");
        assert_eq!(json["title"], "Exam moved");
        assert_eq!(json["content"], "Now on Friday.");
        assert_eq!(json["links"][0]["url"], "https://example.com");
        assert_eq!(json["links"][0]["label"], "details");
    }

    #[test]
    fn message_draft_links_default_to_empty() {
        let draft: MessageDraft =
            serde_json::from_str(r#"{"title":"t","content":"c"}"#).expect("deserialize");
        assert!(draft.links.is_empty());
    }

    #[test]
    fn ack_round_trip() {
        let ack: Ack = serde_json::from_str(r#"{"message":"Message deleted"}"#).expect("deserialize");
        assert_eq!(ack.message, "Message deleted");
    }
}
