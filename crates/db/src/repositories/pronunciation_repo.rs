//! Repository for the `pronunciation_exercises` and
//! `pronunciation_attempts` tables.

use lingo_core::types::DbId;
use sqlx::PgPool;

use crate::models::pronunciation::{PronunciationAttempt, PronunciationExercise};

/// Column list for `pronunciation_exercises` queries.
const EXERCISE_COLUMNS: &str =
    "id, lesson_id, word, target_ipa, audio_url, difficulty, created_at";

/// Column list for `pronunciation_attempts` queries.
const ATTEMPT_COLUMNS: &str =
    "id, user_id, exercise_id, audio_url, transcript, accuracy, feedback, created_at";

/// Provides pronunciation exercise lookup and attempt recording.
pub struct PronunciationRepo;

impl PronunciationRepo {
    /// Exercises attached to a lesson.
    pub async fn exercises_for_lesson(
        pool: &PgPool,
        lesson_id: DbId,
    ) -> Result<Vec<PronunciationExercise>, sqlx::Error> {
        let query = format!(
            "SELECT {EXERCISE_COLUMNS} FROM pronunciation_exercises \
             WHERE lesson_id = $1 \
             ORDER BY id"
        );
        sqlx::query_as::<_, PronunciationExercise>(&query)
            .bind(lesson_id)
            .fetch_all(pool)
            .await
    }

    /// Get an exercise by id.
    pub async fn get_exercise(
        pool: &PgPool,
        exercise_id: DbId,
    ) -> Result<Option<PronunciationExercise>, sqlx::Error> {
        let query = format!("SELECT {EXERCISE_COLUMNS} FROM pronunciation_exercises WHERE id = $1");
        sqlx::query_as::<_, PronunciationExercise>(&query)
            .bind(exercise_id)
            .fetch_optional(pool)
            .await
    }

    /// Record a new attempt; transcript/accuracy/feedback arrive later.
    pub async fn create_attempt(
        pool: &PgPool,
        user_id: DbId,
        exercise_id: DbId,
        audio_url: &str,
    ) -> Result<PronunciationAttempt, sqlx::Error> {
        let query = format!(
            "INSERT INTO pronunciation_attempts (user_id, exercise_id, audio_url) \
             VALUES ($1, $2, $3) \
             RETURNING {ATTEMPT_COLUMNS}"
        );
        sqlx::query_as::<_, PronunciationAttempt>(&query)
            .bind(user_id)
            .bind(exercise_id)
            .bind(audio_url)
            .fetch_one(pool)
            .await
    }

    /// Write the speech-feedback annotation onto an attempt.
    ///
    /// Called for both success and failure outcomes; on failure the
    /// feedback column carries the error message.
    pub async fn annotate_attempt(
        pool: &PgPool,
        attempt_id: DbId,
        transcript: Option<&str>,
        accuracy: Option<f64>,
        feedback: &str,
    ) -> Result<PronunciationAttempt, sqlx::Error> {
        let query = format!(
            "UPDATE pronunciation_attempts \
             SET transcript = $2, accuracy = $3, feedback = $4 \
             WHERE id = $1 \
             RETURNING {ATTEMPT_COLUMNS}"
        );
        sqlx::query_as::<_, PronunciationAttempt>(&query)
            .bind(attempt_id)
            .bind(transcript)
            .bind(accuracy)
            .bind(feedback)
            .fetch_one(pool)
            .await
    }

    /// A user's attempts, newest first.
    pub async fn list_attempts_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<PronunciationAttempt>, sqlx::Error> {
        let query = format!(
            "SELECT {ATTEMPT_COLUMNS} FROM pronunciation_attempts \
             WHERE user_id = $1 \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, PronunciationAttempt>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
