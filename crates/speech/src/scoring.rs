//! Accuracy scoring for pronunciation attempts.
//!
//! The provider gives us a transcript, not a score. The score is a crude
//! equality heuristic: a normalized transcript that matches the target
//! word scores high, anything else scores mid-range so the learner still
//! gets credit for an intelligible attempt.

/// Accuracy when the normalized transcript equals the target word.
pub const ACCURACY_MATCH: f64 = 0.95;

/// Accuracy when the transcript differs from the target word.
pub const ACCURACY_MISMATCH: f64 = 0.65;

/// Lowercase, trim whitespace, and strip trailing punctuation.
pub fn normalize(text: &str) -> String {
    text.trim()
        .trim_end_matches(['.', ',', '!', '?'])
        .to_lowercase()
}

/// Score a transcript against the target word.
pub fn accuracy_for(transcript: &str, word: &str) -> f64 {
    if normalize(transcript) == normalize(word) {
        ACCURACY_MATCH
    } else {
        ACCURACY_MISMATCH
    }
}
