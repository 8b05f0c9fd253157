//! Bulk recommendation generation.
//!
//! Generation is a full replace: the user's stored set is discarded and
//! rebuilt from a fresh scan of the lesson catalog. It reads a snapshot
//! of preferences and progress. Staleness against concurrent XP or
//! progress writes is acceptable, and a crash mid-replace is corrected by
//! the next run.

use lingo_core::recommendation::{score_lesson, string_list, LessonSignals, PreferenceSignals};
use lingo_core::types::DbId;
use lingo_db::models::preferences::LearningPreferences;
use lingo_db::models::recommendation::{LessonRecommendation, NewRecommendation};
use lingo_db::repositories::{CourseRepo, PreferenceRepo, ProgressRepo, RecommendationRepo};
use lingo_db::DbPool;
use lingo_events::bus::{EventBus, LearningEvent, EVENT_RECOMMENDATIONS_READY};

use crate::error::AppResult;

/// Regenerate the user's recommendation set and return the top `limit`.
pub async fn generate_for_user(
    pool: &DbPool,
    bus: &EventBus,
    user_id: DbId,
    limit: usize,
) -> AppResult<Vec<LessonRecommendation>> {
    let prefs = PreferenceRepo::get_for_user(pool, user_id).await?;
    let prefs = preference_signals(prefs.as_ref());

    let completed = ProgressRepo::completed_count(pool, user_id).await?;
    let lessons = CourseRepo::list_lessons_with_level(pool).await?;
    let catalog_size = lessons.len();

    // Score every lesson; only positive scores are worth storing.
    let entries: Vec<NewRecommendation> = lessons
        .iter()
        .filter_map(|lesson| {
            let signals = LessonSignals {
                course_level: &lesson.course_level,
                lesson_type: &lesson.lesson_type,
                title: &lesson.title,
                description: &lesson.description,
                order_index: lesson.order_index,
            };
            let scored = score_lesson(&signals, &prefs, completed);
            (scored.score > 0.0).then(|| NewRecommendation {
                lesson_id: lesson.id,
                score: scored.score,
                reason: scored.reason,
            })
        })
        .collect();

    let stored = RecommendationRepo::replace_for_user(pool, user_id, &entries).await?;

    tracing::info!(
        user_id,
        scanned = catalog_size,
        kept = stored.len(),
        "Recommendations regenerated",
    );

    if !stored.is_empty() {
        bus.publish(
            LearningEvent::new(EVENT_RECOMMENDATIONS_READY, user_id)
                .with_payload(serde_json::json!({ "count": stored.len() })),
        );
    }

    Ok(stored.into_iter().take(limit).collect())
}

/// Coerce a preferences row into scorer inputs.
///
/// A missing row or junk entries in the JSONB lists simply produce
/// signals that match nothing.
fn preference_signals(prefs: Option<&LearningPreferences>) -> PreferenceSignals {
    match prefs {
        Some(p) => PreferenceSignals {
            current_level: p.current_level.clone(),
            preferred_lesson_types: string_list(&p.preferred_lesson_types),
            weak_areas: string_list(&p.weak_areas),
            learning_goal: p.learning_goal.clone(),
        },
        None => PreferenceSignals::empty(),
    }
}
