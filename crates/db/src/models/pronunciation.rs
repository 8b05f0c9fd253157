//! Pronunciation exercise and attempt models.

use lingo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `pronunciation_exercises` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PronunciationExercise {
    pub id: DbId,
    pub lesson_id: DbId,
    pub word: String,
    /// Target pronunciation in IPA notation.
    pub target_ipa: String,
    /// Optional reference audio.
    pub audio_url: Option<String>,
    pub difficulty: String,
    pub created_at: Timestamp,
}

/// A row from the `pronunciation_attempts` table.
///
/// `transcript`, `accuracy`, and `feedback` are written best-effort by the
/// speech-feedback boundary after the row exists; a provider failure leaves
/// an error message in `feedback` rather than failing the attempt.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PronunciationAttempt {
    pub id: DbId,
    pub user_id: DbId,
    pub exercise_id: DbId,
    pub audio_url: String,
    pub transcript: Option<String>,
    pub accuracy: Option<f64>,
    pub feedback: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for submitting a pronunciation attempt.
#[derive(Debug, Deserialize)]
pub struct CreateAttempt {
    /// Where the uploaded audio blob lives.
    pub audio_url: String,
}
