//! Word-of-the-day models.

use chrono::NaiveDate;
use lingo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `words_of_the_day` table. One word per calendar day.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WordOfTheDay {
    pub id: DbId,
    pub word: String,
    pub translation: String,
    pub example_sentence: String,
    pub difficulty_level: String,
    pub for_date: NaiveDate,
    pub created_at: Timestamp,
}

/// DTO for creating a word-of-the-day entry.
#[derive(Debug, Deserialize)]
pub struct CreateWordOfTheDay {
    pub word: String,
    pub translation: String,
    pub example_sentence: Option<String>,
    pub difficulty_level: String,
    pub for_date: NaiveDate,
}
