//! HTTP-level integration tests for lesson progress endpoints.

mod common;

use axum::http::StatusCode;
use common::{build_test_app, expect_json, get, post_json, seed_user};
use lingo_db::models::course::{CreateCourse, CreateLesson};
use lingo_db::repositories::CourseRepo;
use serde_json::json;
use sqlx::PgPool;

async fn seed_lesson(pool: &PgPool) -> i64 {
    let course = CourseRepo::create(
        pool,
        &CreateCourse {
            title: "German Basics".to_string(),
            description: None,
            level: "A1".to_string(),
            image_url: None,
        },
    )
    .await
    .unwrap();

    CourseRepo::create_lesson(
        pool,
        &CreateLesson {
            course_id: course.id,
            title: "Articles".to_string(),
            description: None,
            lesson_type: "GRAMMAR".to_string(),
            order_index: 1,
            duration_minutes: Some(10),
        },
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn complete_sets_flag_and_pins_score(pool: PgPool) {
    let user_id = seed_user(&pool, "progress@example.com").await;
    let lesson_id = seed_lesson(&pool).await;

    let response = post_json(
        build_test_app(pool.clone()),
        user_id,
        &format!("/api/v1/lessons/{lesson_id}/complete"),
        json!({}),
    )
    .await;
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["data"]["completed"], true);
    assert_eq!(body["data"]["score"], 100);

    let response = get(build_test_app(pool), user_id, "/api/v1/progress/completed").await;
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn score_updates_are_monotonic_over_http(pool: PgPool) {
    let user_id = seed_user(&pool, "monotonic@example.com").await;
    let lesson_id = seed_lesson(&pool).await;

    let mut last = 0;
    for score in [40, 30, 90, 10] {
        let response = post_json(
            build_test_app(pool.clone()),
            user_id,
            &format!("/api/v1/lessons/{lesson_id}/progress"),
            json!({ "score": score }),
        )
        .await;
        let body = expect_json(response, StatusCode::OK).await;
        last = body["data"]["score"].as_i64().unwrap();
    }
    assert_eq!(last, 90);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn negative_score_is_rejected(pool: PgPool) {
    let user_id = seed_user(&pool, "negscore@example.com").await;
    let lesson_id = seed_lesson(&pool).await;

    let response = post_json(
        build_test_app(pool),
        user_id,
        &format!("/api/v1/lessons/{lesson_id}/progress"),
        json!({ "score": -5 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn progress_against_unknown_lesson_is_404(pool: PgPool) {
    let user_id = seed_user(&pool, "nolesson@example.com").await;

    let response = post_json(
        build_test_app(pool),
        user_id,
        "/api/v1/lessons/999999/complete",
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
