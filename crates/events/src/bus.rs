//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the central publish/subscribe hub for
//! [`LearningEvent`]s. It is designed to be shared via `Arc<EventBus>`
//! across the application: the gamification service and the reminder
//! scheduler publish, the notification dispatcher subscribes.

use chrono::{DateTime, Utc};
use lingo_core::types::DbId;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// Event types
// ---------------------------------------------------------------------------

/// A user-initiated grant crossed a level boundary.
pub const EVENT_LEVEL_UP: &str = "xp.level_up";
/// An achievement was granted for the first time.
pub const EVENT_ACHIEVEMENT_GRANTED: &str = "achievement.granted";
/// The activity streak was extended to a new length.
pub const EVENT_STREAK_EXTENDED: &str = "streak.extended";
/// A fresh recommendation set was generated.
pub const EVENT_RECOMMENDATIONS_READY: &str = "recommendation.ready";
/// Scheduled daily practice reminder.
pub const EVENT_DAILY_REMINDER: &str = "reminder.daily";
/// Scheduled word-of-the-day delivery.
pub const EVENT_WORD_OF_DAY: &str = "reminder.word_of_day";
/// Scheduled nudge to keep an active streak alive.
pub const EVENT_STREAK_ALERT: &str = "reminder.streak_alert";

// ---------------------------------------------------------------------------
// LearningEvent
// ---------------------------------------------------------------------------

/// A domain event concerning one user.
///
/// Constructed via [`LearningEvent::new`] and enriched with
/// [`with_payload`](LearningEvent::with_payload).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningEvent {
    /// Dot-separated event name, e.g. `"achievement.granted"`.
    pub event_type: String,

    /// The user the event concerns.
    pub user_id: DbId,

    /// Free-form JSON payload carrying event-specific data.
    pub payload: serde_json::Value,

    /// When the event was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl LearningEvent {
    /// Create a new event with an empty payload.
    pub fn new(event_type: impl Into<String>, user_id: DbId) -> Self {
        Self {
            event_type: event_type.into(),
            user_id,
            payload: serde_json::Value::Object(Default::default()),
            timestamp: Utc::now(),
        }
    }

    /// Set the JSON payload for the event.
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`LearningEvent`].
pub struct EventBus {
    sender: broadcast::Sender<LearningEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped;
    /// notifications are best-effort by design.
    pub fn publish(&self, event: LearningEvent) {
        // Ignore the SendError -- it only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Create a new subscription that receives all events published after
    /// this call.
    pub fn subscribe(&self) -> broadcast::Receiver<LearningEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn published_events_reach_all_subscribers() {
        let bus = EventBus::default();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(LearningEvent::new(EVENT_LEVEL_UP, 7));

        let e1 = rx1.recv().await.unwrap();
        let e2 = rx2.recv().await.unwrap();
        assert_eq!(e1.event_type, EVENT_LEVEL_UP);
        assert_eq!(e2.user_id, 7);
    }

    #[tokio::test]
    async fn publish_without_subscribers_is_a_no_op() {
        let bus = EventBus::default();
        // Must not panic or error.
        bus.publish(LearningEvent::new(EVENT_DAILY_REMINDER, 1));
    }

    #[test]
    fn payload_builder_attaches_data() {
        let event = LearningEvent::new(EVENT_ACHIEVEMENT_GRANTED, 3)
            .with_payload(serde_json::json!({ "kind": "STREAK_3" }));
        assert_eq!(event.payload["kind"], "STREAK_3");
    }
}
