//! Corkboard Protocol - Wire-format types for the messaging and styles backends
//!
//! This crate contains the request and response bodies exchanged with the two
//! backend services:
//! - Message CRUD and acknowledgement replies (messaging service)
//! - Per-user notification feed and delivery receipts (messaging service)
//!
//! Style documents carry no schema on the client side and travel as plain
//! `serde_json::Value`, so no types are defined for them here.
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and chrono
//! 2. **No business logic** - Pure data types and serialization
//! 3. **Raw ids** - DTOs use plain `i64` keys, never wrapper types

pub mod messages;
pub mod notifications;

pub use messages::{Ack, MessageCreated, MessageDraft, MessageLink};
pub use notifications::{Notification, ReceiptEntry};
