//! Integration tests for word-of-the-day storage.

use chrono::NaiveDate;
use lingo_db::models::word_of_the_day::CreateWordOfTheDay;
use lingo_db::repositories::WordOfTheDayRepo;
use sqlx::PgPool;

fn entry(date: NaiveDate) -> CreateWordOfTheDay {
    CreateWordOfTheDay {
        word: "serendipia".to_string(),
        translation: "serendipity".to_string(),
        example_sentence: Some("Fue pura serendipia.".to_string()),
        difficulty_level: "B2".to_string(),
        for_date: date,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn one_word_per_day(pool: PgPool) {
    let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();

    assert!(WordOfTheDayRepo::for_date(&pool, date).await.unwrap().is_none());

    WordOfTheDayRepo::create(&pool, &entry(date)).await.unwrap();

    let word = WordOfTheDayRepo::for_date(&pool, date).await.unwrap().unwrap();
    assert_eq!(word.word, "serendipia");
    assert_eq!(word.for_date, date);

    // The calendar-day uniqueness constraint rejects a second word.
    let err = WordOfTheDayRepo::create(&pool, &entry(date)).await;
    assert!(err.is_err());

    // A different day is fine.
    let next = date.succ_opt().unwrap();
    WordOfTheDayRepo::create(&pool, &entry(next)).await.unwrap();
}
