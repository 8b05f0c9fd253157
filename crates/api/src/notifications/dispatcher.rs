//! Event-to-notification dispatch engine.
//!
//! [`NotificationDispatcher`] consumes [`LearningEvent`]s from the bus.
//! For each event it renders a notification, persists it, and then
//! decides delivery per the user's preferences: a per-type channel
//! override (EMAIL | PUSH | BOTH, default BOTH) gated by the user's
//! global email/push switches. Delivery failures are logged and absorbed;
//! the persisted row is the source of truth either way.

use lingo_core::achievements::AchievementKind;
use lingo_core::notifications::{
    delivery_plan, NotificationChannel, TYPE_ACHIEVEMENT, TYPE_DAILY_REMINDER,
    TYPE_PROGRESS_UPDATE, TYPE_RECOMMENDATION, TYPE_STREAK_ALERT, TYPE_WORD_OF_DAY,
};
use lingo_core::types::DbId;
use lingo_db::models::notification::NewNotification;
use lingo_db::repositories::{NotificationPreferenceRepo, NotificationRepo, UserRepo};
use lingo_db::DbPool;
use lingo_events::bus::{
    LearningEvent, EVENT_ACHIEVEMENT_GRANTED, EVENT_DAILY_REMINDER, EVENT_LEVEL_UP,
    EVENT_RECOMMENDATIONS_READY, EVENT_STREAK_ALERT, EVENT_WORD_OF_DAY,
};
use lingo_events::{EmailDelivery, PushDelivery};
use tokio::sync::broadcast;

/// A notification rendered from an event, ready to persist and deliver.
struct Rendered {
    notification_type: &'static str,
    title: String,
    message: String,
}

/// Routes learning events to user notifications.
pub struct NotificationDispatcher {
    pool: DbPool,
    email: Option<EmailDelivery>,
    push: Option<PushDelivery>,
}

impl NotificationDispatcher {
    /// Create a new dispatcher. Channels whose delivery service is `None`
    /// are skipped even when a user's preferences select them.
    pub fn new(pool: DbPool, email: Option<EmailDelivery>, push: Option<PushDelivery>) -> Self {
        Self { pool, email, push }
    }

    /// Run the main dispatch loop.
    ///
    /// Subscribes to the event bus via `receiver` and processes each
    /// event. The loop exits when the channel is closed (i.e. the
    /// [`EventBus`](lingo_events::EventBus) is dropped).
    pub async fn run(self, mut receiver: broadcast::Receiver<LearningEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    if let Err(e) = self.dispatch(&event).await {
                        tracing::error!(
                            error = %e,
                            event_type = %event.event_type,
                            user_id = event.user_id,
                            "Failed to dispatch event"
                        );
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Notification dispatcher lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, notification dispatcher shutting down");
                    break;
                }
            }
        }
    }

    /// Persist and deliver the notification for a single event.
    async fn dispatch(&self, event: &LearningEvent) -> Result<(), sqlx::Error> {
        // Not every event is user-facing.
        let Some(rendered) = render(event) else {
            return Ok(());
        };

        let prefs = NotificationPreferenceRepo::get_for_user(&self.pool, event.user_id).await?;

        // Defaults for users who never saved preferences: both channels on,
        // every type routed to both.
        let (email_enabled, push_enabled, overrides) = match &prefs {
            Some(p) => (p.email_enabled, p.push_enabled, p.channel_overrides.clone()),
            None => (true, true, serde_json::Value::Null),
        };

        let routing = overrides
            .get(rendered.notification_type)
            .and_then(|v| v.as_str())
            .map(NotificationChannel::parse_or_default)
            .unwrap_or(NotificationChannel::Both);

        let plan = delivery_plan(routing, email_enabled, push_enabled);

        // The in-app row is written regardless of outbound channels.
        let row = NotificationRepo::create(
            &self.pool,
            &NewNotification {
                user_id: event.user_id,
                notification_type: rendered.notification_type.to_string(),
                title: rendered.title.clone(),
                message: rendered.message.clone(),
                data: event.payload.clone(),
            },
        )
        .await?;

        if plan.is_empty() {
            return Ok(());
        }

        if plan.email {
            self.deliver_email(event.user_id, &rendered).await;
        }
        if plan.push {
            self.deliver_push(event.user_id, &rendered, &event.payload)
                .await;
        }

        NotificationRepo::mark_sent(&self.pool, row.id).await?;
        Ok(())
    }

    /// Send the email rendition; failures are logged, never propagated.
    async fn deliver_email(&self, user_id: DbId, rendered: &Rendered) {
        let Some(email) = &self.email else {
            tracing::debug!(user_id, "Email delivery not configured, skipping");
            return;
        };

        let address = match UserRepo::get(&self.pool, user_id).await {
            Ok(Some(user)) => user.email,
            Ok(None) => {
                tracing::warn!(user_id, "User vanished before email delivery");
                return;
            }
            Err(e) => {
                tracing::error!(user_id, error = %e, "Failed to load user for email delivery");
                return;
            }
        };

        if let Err(e) = email
            .deliver(&address, &rendered.title, &rendered.message)
            .await
        {
            tracing::warn!(user_id, error = %e, "Email delivery failed");
        }
    }

    /// Send the push rendition; failures are logged, never propagated.
    async fn deliver_push(&self, user_id: DbId, rendered: &Rendered, data: &serde_json::Value) {
        let Some(push) = &self.push else {
            tracing::debug!(user_id, "Push delivery not configured, skipping");
            return;
        };

        if let Err(e) = push
            .deliver(user_id, &rendered.title, &rendered.message, data)
            .await
        {
            tracing::warn!(user_id, error = %e, "Push delivery failed");
        }
    }
}

/// Render a user-facing notification from an event, or `None` for events
/// that do not notify.
fn render(event: &LearningEvent) -> Option<Rendered> {
    match event.event_type.as_str() {
        EVENT_LEVEL_UP => {
            let level = event.payload["level"].as_i64().unwrap_or_default();
            let total_xp = event.payload["total_xp"].as_i64().unwrap_or_default();
            Some(Rendered {
                notification_type: TYPE_PROGRESS_UPDATE,
                title: "Progress Update".to_string(),
                message: format!(
                    "You're making great progress! Current level: {level}, Total XP: {total_xp}"
                ),
            })
        }
        EVENT_ACHIEVEMENT_GRANTED => {
            let kind = event.payload["kind"].as_str().unwrap_or_default();
            let xp_reward = event.payload["xp_reward"].as_i64().unwrap_or_default();
            let title = AchievementKind::parse(kind)
                .map(AchievementKind::title)
                .unwrap_or(kind);
            Some(Rendered {
                notification_type: TYPE_ACHIEVEMENT,
                title: format!("Achievement Unlocked: {title}"),
                message: format!("You earned {xp_reward} XP!"),
            })
        }
        EVENT_STREAK_ALERT => {
            let days = event.payload["streak_days"].as_i64().unwrap_or_default();
            Some(Rendered {
                notification_type: TYPE_STREAK_ALERT,
                title: "Streak Alert".to_string(),
                message: format!("Keep your {days}-day streak going! Don't break the chain!"),
            })
        }
        EVENT_DAILY_REMINDER => Some(Rendered {
            notification_type: TYPE_DAILY_REMINDER,
            title: "Daily Learning Reminder".to_string(),
            message: "Don't forget to practice today! Keep your streak going.".to_string(),
        }),
        EVENT_WORD_OF_DAY => {
            let word = event.payload["word"].as_str().unwrap_or_default();
            let translation = event.payload["translation"].as_str().unwrap_or_default();
            let example = event.payload["example_sentence"].as_str().unwrap_or_default();
            Some(Rendered {
                notification_type: TYPE_WORD_OF_DAY,
                title: "Word of the Day".to_string(),
                message: format!("Today's word: {word}\nMeaning: {translation}\nExample: {example}"),
            })
        }
        EVENT_RECOMMENDATIONS_READY => Some(Rendered {
            notification_type: TYPE_RECOMMENDATION,
            title: "New Lesson Recommendations".to_string(),
            message: "Fresh lesson recommendations are ready for you.".to_string(),
        }),
        // streak.extended and other internal events carry no notification.
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
