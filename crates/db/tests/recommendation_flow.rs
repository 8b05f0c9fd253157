//! Integration tests for recommendation storage: bulk replace semantics
//! and ordering.

use lingo_db::models::course::{CreateCourse, CreateLesson};
use lingo_db::models::recommendation::NewRecommendation;
use lingo_db::models::user::CreateUser;
use lingo_db::repositories::{CourseRepo, RecommendationRepo, UserRepo};
use sqlx::PgPool;

async fn seed_user_and_lessons(pool: &PgPool, count: i32) -> (i64, Vec<i64>) {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: "recs@example.com".to_string(),
            display_name: "Rec Tester".to_string(),
        },
    )
    .await
    .unwrap();

    let course = CourseRepo::create(
        pool,
        &CreateCourse {
            title: "French Basics".to_string(),
            description: None,
            level: "A1".to_string(),
            image_url: None,
        },
    )
    .await
    .unwrap();

    let mut lesson_ids = Vec::new();
    for i in 1..=count {
        let lesson = CourseRepo::create_lesson(
            pool,
            &CreateLesson {
                course_id: course.id,
                title: format!("Lesson {i}"),
                description: None,
                lesson_type: "GRAMMAR".to_string(),
                order_index: i,
                duration_minutes: Some(10),
            },
        )
        .await
        .unwrap();
        lesson_ids.push(lesson.id);
    }

    (user.id, lesson_ids)
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn replace_discards_the_previous_set(pool: PgPool) {
    let (user_id, lessons) = seed_user_and_lessons(&pool, 3).await;

    let first = vec![
        NewRecommendation {
            lesson_id: lessons[0],
            score: 2.0,
            reason: "Matches your current level".to_string(),
        },
        NewRecommendation {
            lesson_id: lessons[1],
            score: 3.5,
            reason: "Matches your preferred learning style".to_string(),
        },
    ];
    RecommendationRepo::replace_for_user(&pool, user_id, &first)
        .await
        .unwrap();

    // Regenerate with a different, smaller set.
    let second = vec![NewRecommendation {
        lesson_id: lessons[2],
        score: 5.0,
        reason: "Helps improve your weak areas".to_string(),
    }];
    RecommendationRepo::replace_for_user(&pool, user_id, &second)
        .await
        .unwrap();

    let stored = RecommendationRepo::list_for_user(&pool, user_id, 10)
        .await
        .unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].lesson_id, lessons[2]);
    assert_eq!(stored[0].score, 5.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn listing_orders_by_score_descending(pool: PgPool) {
    let (user_id, lessons) = seed_user_and_lessons(&pool, 3).await;

    let entries: Vec<NewRecommendation> = lessons
        .iter()
        .zip([1.5, 6.5, 3.0])
        .map(|(lesson_id, score)| NewRecommendation {
            lesson_id: *lesson_id,
            score,
            reason: "General recommendation".to_string(),
        })
        .collect();
    RecommendationRepo::replace_for_user(&pool, user_id, &entries)
        .await
        .unwrap();

    let stored = RecommendationRepo::list_for_user(&pool, user_id, 2)
        .await
        .unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].score, 6.5);
    assert_eq!(stored[1].score, 3.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_replace_clears_the_set(pool: PgPool) {
    let (user_id, lessons) = seed_user_and_lessons(&pool, 1).await;

    RecommendationRepo::replace_for_user(
        &pool,
        user_id,
        &[NewRecommendation {
            lesson_id: lessons[0],
            score: 2.0,
            reason: "Matches your current level".to_string(),
        }],
    )
    .await
    .unwrap();

    RecommendationRepo::replace_for_user(&pool, user_id, &[])
        .await
        .unwrap();

    let stored = RecommendationRepo::list_for_user(&pool, user_id, 10)
        .await
        .unwrap();
    assert!(stored.is_empty());
}
