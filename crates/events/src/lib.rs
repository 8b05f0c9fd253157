//! Lingo event bus and notification delivery infrastructure.
//!
//! Building blocks for the in-process event system:
//!
//! - [`EventBus`] — publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`LearningEvent`] — the canonical user-scoped domain event envelope.
//! - [`delivery`] — outbound channels (SMTP email, push gateway).
//! - [`ReminderScheduler`] — hourly task that emits daily-reminder,
//!   word-of-the-day, and streak-alert events at each user's preferred
//!   hour.

pub mod bus;
pub mod delivery;
pub mod scheduler;

pub use bus::{EventBus, LearningEvent};
pub use delivery::email::{EmailConfig, EmailDelivery};
pub use delivery::push::{PushConfig, PushDelivery};
pub use scheduler::ReminderScheduler;
