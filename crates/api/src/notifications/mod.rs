//! Notification dispatch infrastructure.
//!
//! The [`NotificationDispatcher`] subscribes to the event bus and turns
//! learning events into persisted notifications plus email/push
//! deliveries per user preference.

pub mod dispatcher;

pub use dispatcher::NotificationDispatcher;
