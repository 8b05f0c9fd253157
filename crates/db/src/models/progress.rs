//! Lesson progress models and DTOs.

use lingo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `lesson_progress` table.
///
/// `score` only ever rises (enforced in the repository upsert);
/// `last_attempted` is touched on every mutation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LessonProgress {
    pub id: DbId,
    pub user_id: DbId,
    pub lesson_id: DbId,
    pub completed: bool,
    pub score: i32,
    pub last_attempted: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for a score update on a lesson.
#[derive(Debug, Deserialize)]
pub struct UpdateScore {
    pub score: i32,
}
