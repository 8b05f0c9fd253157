//! Lesson recommendation scoring.
//!
//! [`score_lesson`] is a deterministic, pure function: it accumulates a
//! score from independent weighted criteria and builds a human-readable
//! reason from the matched-criterion phrases. Missing or malformed inputs
//! (no preferences saved, non-string entries in a JSON list) degrade to
//! "criterion unmatched"; scoring is total over its input domain and
//! never fails for one bad field.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Criterion weights
// ---------------------------------------------------------------------------

/// Lesson's course level equals the user's current level.
pub const WEIGHT_LEVEL_MATCH: f64 = 2.0;
/// Lesson type is one of the user's preferred lesson types.
pub const WEIGHT_TYPE_MATCH: f64 = 1.5;
/// A weak-area keyword appears in the lesson title.
pub const WEIGHT_WEAK_AREA: f64 = 2.0;
/// Lesson sits beyond the user's completed-lesson count.
pub const WEIGHT_PROGRESSION: f64 = 1.0;
/// The learning goal appears in the lesson description.
pub const WEIGHT_GOAL_ALIGNMENT: f64 = 1.5;

/// Separator between matched-criterion phrases in the reason string.
pub const REASON_SEPARATOR: &str = " | ";

/// Reason used when no criterion matched.
pub const GENERIC_REASON: &str = "General recommendation";

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// The lesson attributes the scorer looks at.
#[derive(Debug, Clone)]
pub struct LessonSignals<'a> {
    /// Level of the course the lesson belongs to (A1..C2).
    pub course_level: &'a str,
    /// Lesson type (VOCABULARY, GRAMMAR, LISTENING).
    pub lesson_type: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    /// 1-based position of the lesson within its course.
    pub order_index: i32,
}

/// Snapshot of the user's learning preferences, already coerced to plain
/// strings. Build one with [`PreferenceSignals::empty`] when the user has
/// no saved preferences; every criterion then simply fails to match.
#[derive(Debug, Clone, Default)]
pub struct PreferenceSignals {
    pub current_level: Option<String>,
    pub preferred_lesson_types: Vec<String>,
    pub weak_areas: Vec<String>,
    pub learning_goal: Option<String>,
}

impl PreferenceSignals {
    /// Signals for a user with no saved preferences: nothing matches.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Extract the string entries of a JSON array, dropping anything else.
///
/// Preference lists are stored as JSONB and may contain junk (numbers,
/// nulls, nested objects) from older clients; those entries are skipped
/// rather than failing the scoring pass. Empty strings are dropped too;
/// an empty keyword would substring-match every title.
pub fn string_list(value: &serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect(),
        _ => Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// A scored lesson: the summed criterion weights plus the reason string.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredLesson {
    pub score: f64,
    pub reason: String,
}

/// Score one lesson against a user's preferences and progress.
///
/// `completed_lessons` is the number of lessons the user has completed.
/// Criteria are evaluated in a fixed order; the order affects only the
/// phrase order in the reason string, never the score.
pub fn score_lesson(
    lesson: &LessonSignals<'_>,
    prefs: &PreferenceSignals,
    completed_lessons: i64,
) -> ScoredLesson {
    let mut score = 0.0;
    let mut reasons: Vec<&'static str> = Vec::new();

    // Level match.
    if prefs
        .current_level
        .as_deref()
        .is_some_and(|level| level == lesson.course_level)
    {
        score += WEIGHT_LEVEL_MATCH;
        reasons.push("Matches your current level");
    }

    // Preferred lesson type.
    if prefs
        .preferred_lesson_types
        .iter()
        .any(|t| t == lesson.lesson_type)
    {
        score += WEIGHT_TYPE_MATCH;
        reasons.push("Matches your preferred learning style");
    }

    // Weak areas: case-insensitive substring match against the title.
    let title_lower = lesson.title.to_lowercase();
    if prefs
        .weak_areas
        .iter()
        .any(|area| title_lower.contains(&area.to_lowercase()))
    {
        score += WEIGHT_WEAK_AREA;
        reasons.push("Helps improve your weak areas");
    }

    // Progression: only once the user has completed something, and only for
    // lessons beyond the completed count.
    if completed_lessons > 0 && i64::from(lesson.order_index) > completed_lessons {
        score += WEIGHT_PROGRESSION;
        reasons.push("Builds upon your completed lessons");
    }

    // Learning goal: case-insensitive substring match against the description.
    if let Some(goal) = prefs.learning_goal.as_deref().filter(|g| !g.is_empty()) {
        if lesson
            .description
            .to_lowercase()
            .contains(&goal.to_lowercase())
        {
            score += WEIGHT_GOAL_ALIGNMENT;
            reasons.push("Aligns with your learning goal");
        }
    }

    let reason = if reasons.is_empty() {
        GENERIC_REASON.to_string()
    } else {
        reasons.join(REASON_SEPARATOR)
    };

    ScoredLesson { score, reason }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson<'a>() -> LessonSignals<'a> {
        LessonSignals {
            course_level: "B1",
            lesson_type: "GRAMMAR",
            title: "Past tense verbs",
            description: "Practice for business conversations",
            order_index: 5,
        }
    }

    fn prefs() -> PreferenceSignals {
        PreferenceSignals {
            current_level: Some("B1".to_string()),
            preferred_lesson_types: vec!["GRAMMAR".to_string()],
            weak_areas: vec!["verbs".to_string()],
            learning_goal: Some("business".to_string()),
        }
    }

    #[test]
    fn all_criteria_match() {
        let scored = score_lesson(&lesson(), &prefs(), 3);
        // 2.0 + 1.5 + 2.0 + 1.0 + 1.5
        assert!((scored.score - 8.0).abs() < f64::EPSILON);
        assert_eq!(
            scored.reason,
            "Matches your current level | Matches your preferred learning style | \
             Helps improve your weak areas | Builds upon your completed lessons | \
             Aligns with your learning goal"
        );
    }

    #[test]
    fn partial_match_sums_matched_weights_in_order() {
        let prefs = PreferenceSignals {
            current_level: Some("B1".to_string()),
            preferred_lesson_types: Vec::new(),
            weak_areas: vec!["VERBS".to_string()],
            learning_goal: None,
        };
        // Level (2.0) + weak area (2.0) + progression (1.0) = 5.0
        let scored = score_lesson(&lesson(), &prefs, 2);
        assert!((scored.score - 5.0).abs() < f64::EPSILON);
        assert_eq!(
            scored.reason,
            "Matches your current level | Helps improve your weak areas | \
             Builds upon your completed lessons"
        );
    }

    #[test]
    fn no_match_yields_zero_and_generic_reason() {
        let scored = score_lesson(&lesson(), &PreferenceSignals::empty(), 0);
        assert_eq!(scored.score, 0.0);
        assert_eq!(scored.reason, GENERIC_REASON);
    }

    #[test]
    fn scoring_is_deterministic() {
        let a = score_lesson(&lesson(), &prefs(), 3);
        let b = score_lesson(&lesson(), &prefs(), 3);
        assert_eq!(a.score, b.score);
        assert_eq!(a.reason, b.reason);
    }

    #[test]
    fn weak_area_match_is_case_insensitive() {
        let prefs = PreferenceSignals {
            weak_areas: vec!["PAST TENSE".to_string()],
            ..PreferenceSignals::empty()
        };
        let scored = score_lesson(&lesson(), &prefs, 0);
        assert!((scored.score - WEIGHT_WEAK_AREA).abs() < f64::EPSILON);
    }

    #[test]
    fn progression_requires_completed_lessons() {
        let prefs = PreferenceSignals::empty();
        // No completed lessons: no progression credit, regardless of order.
        assert_eq!(score_lesson(&lesson(), &prefs, 0).score, 0.0);
        // Completed count at or past the lesson's position: no credit.
        assert_eq!(score_lesson(&lesson(), &prefs, 5).score, 0.0);
        // Completed count below the lesson's position: credit.
        let scored = score_lesson(&lesson(), &prefs, 4);
        assert!((scored.score - WEIGHT_PROGRESSION).abs() < f64::EPSILON);
    }

    #[test]
    fn goal_match_requires_non_empty_goal() {
        let prefs = PreferenceSignals {
            learning_goal: Some(String::new()),
            ..PreferenceSignals::empty()
        };
        assert_eq!(score_lesson(&lesson(), &prefs, 0).score, 0.0);
    }

    // -- string_list --

    #[test]
    fn string_list_keeps_only_non_empty_strings() {
        let value = serde_json::json!(["verbs", 7, null, "", ["nested"], "idioms"]);
        assert_eq!(string_list(&value), vec!["verbs", "idioms"]);
    }

    #[test]
    fn string_list_of_non_array_is_empty() {
        assert!(string_list(&serde_json::json!("verbs")).is_empty());
        assert!(string_list(&serde_json::Value::Null).is_empty());
        assert!(string_list(&serde_json::json!({"a": 1})).is_empty());
    }
}
