//! Lesson recommendation models.
//!
//! Recommendations are a transient cache: the whole per-user set is
//! deleted and regenerated on each generation request, never updated
//! incrementally.

use lingo_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `lesson_recommendations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LessonRecommendation {
    pub id: DbId,
    pub user_id: DbId,
    pub lesson_id: DbId,
    pub score: f64,
    pub reason: String,
    pub created_at: Timestamp,
}

/// A freshly scored lesson, ready to insert.
#[derive(Debug, Clone)]
pub struct NewRecommendation {
    pub lesson_id: DbId,
    pub score: f64,
    pub reason: String,
}
