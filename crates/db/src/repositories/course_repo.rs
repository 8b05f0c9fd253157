//! Repository for the `courses` and `lessons` tables.

use lingo_core::types::DbId;
use sqlx::PgPool;

use crate::models::course::{Course, CreateCourse, CreateLesson, Lesson, LessonWithLevel};

/// Column list for `courses` queries.
const COURSE_COLUMNS: &str = "id, title, description, level, image_url, created_at, updated_at";

/// Column list for `lessons` queries.
const LESSON_COLUMNS: &str = "id, course_id, title, description, lesson_type, order_index, \
                              duration_minutes, created_at, updated_at";

/// Provides read access to the course catalog (plus inserts for seeding
/// and admin tooling).
pub struct CourseRepo;

impl CourseRepo {
    /// List all courses, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!("SELECT {COURSE_COLUMNS} FROM courses ORDER BY created_at DESC");
        sqlx::query_as::<_, Course>(&query).fetch_all(pool).await
    }

    /// Get a course by id.
    pub async fn get(pool: &PgPool, course_id: DbId) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COURSE_COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(course_id)
            .fetch_optional(pool)
            .await
    }

    /// Create a course.
    pub async fn create(pool: &PgPool, input: &CreateCourse) -> Result<Course, sqlx::Error> {
        let query = format!(
            "INSERT INTO courses (title, description, level, image_url) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COURSE_COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(&input.title)
            .bind(input.description.as_deref().unwrap_or(""))
            .bind(&input.level)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Lessons belonging to a course, in course order.
    pub async fn lessons_for_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<Lesson>, sqlx::Error> {
        let query = format!(
            "SELECT {LESSON_COLUMNS} FROM lessons \
             WHERE course_id = $1 \
             ORDER BY order_index"
        );
        sqlx::query_as::<_, Lesson>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    /// Get a lesson by id.
    pub async fn get_lesson(pool: &PgPool, lesson_id: DbId) -> Result<Option<Lesson>, sqlx::Error> {
        let query = format!("SELECT {LESSON_COLUMNS} FROM lessons WHERE id = $1");
        sqlx::query_as::<_, Lesson>(&query)
            .bind(lesson_id)
            .fetch_optional(pool)
            .await
    }

    /// Create a lesson.
    pub async fn create_lesson(pool: &PgPool, input: &CreateLesson) -> Result<Lesson, sqlx::Error> {
        let query = format!(
            "INSERT INTO lessons (course_id, title, description, lesson_type, order_index, \
                                  duration_minutes) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {LESSON_COLUMNS}"
        );
        sqlx::query_as::<_, Lesson>(&query)
            .bind(input.course_id)
            .bind(&input.title)
            .bind(input.description.as_deref().unwrap_or(""))
            .bind(&input.lesson_type)
            .bind(input.order_index)
            .bind(input.duration_minutes.unwrap_or(0))
            .fetch_one(pool)
            .await
    }

    /// Every lesson in the catalog joined with its course level, in course
    /// order. This is the scan the recommendation generator runs over.
    pub async fn list_lessons_with_level(
        pool: &PgPool,
    ) -> Result<Vec<LessonWithLevel>, sqlx::Error> {
        sqlx::query_as::<_, LessonWithLevel>(
            "SELECT l.id, l.course_id, l.title, l.description, l.lesson_type, l.order_index, \
                    c.level AS course_level \
             FROM lessons l \
             JOIN courses c ON c.id = l.course_id \
             ORDER BY l.course_id, l.order_index",
        )
        .fetch_all(pool)
        .await
    }
}
