//! Notification entity models.

use lingo_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub user_id: DbId,
    pub notification_type: String,
    pub title: String,
    pub message: String,
    pub data: serde_json::Value,
    pub is_read: bool,
    pub is_sent: bool,
    pub sent_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// Payload for creating a notification.
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub user_id: DbId,
    pub notification_type: String,
    pub title: String,
    pub message: String,
    pub data: serde_json::Value,
}
