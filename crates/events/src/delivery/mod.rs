//! Outbound delivery channels.
//!
//! Each channel takes a fully rendered notification (title + message) and
//! pushes it to an external system. Failures are returned to the caller,
//! which logs and moves on; delivery is best-effort.

pub mod email;
pub mod push;
