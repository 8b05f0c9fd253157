//! Best-effort pronunciation annotation.
//!
//! The attempt row is created first; the speech provider is then asked
//! for a transcript and coaching feedback. Provider failures are folded
//! into the stored feedback text; the attempt write itself never fails
//! because of the provider.

use lingo_db::models::pronunciation::{PronunciationAttempt, PronunciationExercise};
use lingo_db::repositories::PronunciationRepo;
use lingo_db::DbPool;
use lingo_speech::scoring::accuracy_for;
use lingo_speech::SpeechClient;

use crate::error::AppResult;

/// Feedback stored when no speech provider is configured.
const NOT_CONFIGURED_FEEDBACK: &str =
    "Pronunciation feedback is not available right now. Your attempt was saved.";

/// Language sent to the provider until per-course languages are wired
/// through (the exercise itself does not carry one yet).
const DEFAULT_LANGUAGE: &str = "en";

/// Annotate a stored attempt with transcript, accuracy, and feedback.
///
/// Returns the updated row. Never returns a provider error: those become
/// a stored error message with zero accuracy.
pub async fn annotate_attempt(
    pool: &DbPool,
    speech: Option<&SpeechClient>,
    exercise: &PronunciationExercise,
    attempt: &PronunciationAttempt,
) -> AppResult<PronunciationAttempt> {
    let Some(client) = speech else {
        let updated = PronunciationRepo::annotate_attempt(
            pool,
            attempt.id,
            None,
            None,
            NOT_CONFIGURED_FEEDBACK,
        )
        .await?;
        return Ok(updated);
    };

    match client
        .analyze(
            &attempt.audio_url,
            DEFAULT_LANGUAGE,
            &exercise.word,
            &exercise.target_ipa,
        )
        .await
    {
        Ok(result) => {
            let accuracy = accuracy_for(&result.transcript, &exercise.word);
            let updated = PronunciationRepo::annotate_attempt(
                pool,
                attempt.id,
                Some(&result.transcript),
                Some(accuracy),
                &result.feedback,
            )
            .await?;
            Ok(updated)
        }
        Err(e) => {
            tracing::warn!(
                attempt_id = attempt.id,
                error = %e,
                "Speech provider failed; storing error on attempt",
            );
            let feedback = format!(
                "There was a problem generating pronunciation feedback. \
                 Please try again later. Detail: {e}"
            );
            let updated = PronunciationRepo::annotate_attempt(
                pool,
                attempt.id,
                None,
                Some(0.0),
                &feedback,
            )
            .await?;
            Ok(updated)
        }
    }
}
