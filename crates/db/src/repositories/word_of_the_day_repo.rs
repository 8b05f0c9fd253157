//! Repository for the `words_of_the_day` table.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::word_of_the_day::{CreateWordOfTheDay, WordOfTheDay};

/// Column list for `words_of_the_day` queries.
const COLUMNS: &str = "id, word, translation, example_sentence, difficulty_level, \
                       for_date, created_at";

/// Provides word-of-the-day lookup and seeding.
pub struct WordOfTheDayRepo;

impl WordOfTheDayRepo {
    /// The word scheduled for the given date, if one exists.
    pub async fn for_date(
        pool: &PgPool,
        date: NaiveDate,
    ) -> Result<Option<WordOfTheDay>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM words_of_the_day WHERE for_date = $1");
        sqlx::query_as::<_, WordOfTheDay>(&query)
            .bind(date)
            .fetch_optional(pool)
            .await
    }

    /// Create a word-of-the-day entry. One per calendar day.
    pub async fn create(
        pool: &PgPool,
        input: &CreateWordOfTheDay,
    ) -> Result<WordOfTheDay, sqlx::Error> {
        let query = format!(
            "INSERT INTO words_of_the_day \
                 (word, translation, example_sentence, difficulty_level, for_date) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WordOfTheDay>(&query)
            .bind(&input.word)
            .bind(&input.translation)
            .bind(input.example_sentence.as_deref().unwrap_or(""))
            .bind(&input.difficulty_level)
            .bind(input.for_date)
            .fetch_one(pool)
            .await
    }
}
