//! Orchestration services.
//!
//! Services own the workflows that span the domain crate, the repository
//! layer, and the event bus: the XP grant pipeline with its bounded award
//! cascade, bulk recommendation generation, and best-effort pronunciation
//! annotation.

pub mod gamification;
pub mod pronunciation;
pub mod recommendation;
