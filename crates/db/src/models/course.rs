//! Course catalog models and DTOs.

use lingo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `courses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub title: String,
    pub description: String,
    /// CEFR level the course targets (A1..C2).
    pub level: String,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `lessons` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Lesson {
    pub id: DbId,
    pub course_id: DbId,
    pub title: String,
    pub description: String,
    /// VOCABULARY, GRAMMAR, or LISTENING.
    pub lesson_type: String,
    /// 1-based position of the lesson within its course.
    pub order_index: i32,
    pub duration_minutes: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A lesson joined with its course's level, as consumed by the
/// recommendation scorer.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LessonWithLevel {
    pub id: DbId,
    pub course_id: DbId,
    pub title: String,
    pub description: String,
    pub lesson_type: String,
    pub order_index: i32,
    pub course_level: String,
}

/// DTO for creating a course.
#[derive(Debug, Deserialize)]
pub struct CreateCourse {
    pub title: String,
    pub description: Option<String>,
    pub level: String,
    pub image_url: Option<String>,
}

/// DTO for creating a lesson.
#[derive(Debug, Deserialize)]
pub struct CreateLesson {
    pub course_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub lesson_type: String,
    pub order_index: i32,
    pub duration_minutes: Option<i32>,
}
