//! HTTP-level integration tests for notifications and their preferences.

mod common;

use axum::http::StatusCode;
use common::{build_test_app, expect_json, get, post_json, put_json, seed_user};
use lingo_db::models::notification::NewNotification;
use lingo_db::repositories::NotificationRepo;
use serde_json::json;
use sqlx::PgPool;

async fn seed_notification(pool: &PgPool, user_id: i64, title: &str) -> i64 {
    NotificationRepo::create(
        pool,
        &NewNotification {
            user_id,
            notification_type: "DAILY_REMINDER".to_string(),
            title: title.to_string(),
            message: "Don't forget to practice today!".to_string(),
            data: serde_json::json!({}),
        },
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unread_filter_and_counts(pool: PgPool) {
    let user_id = seed_user(&pool, "notif@example.com").await;
    let first = seed_notification(&pool, user_id, "First").await;
    seed_notification(&pool, user_id, "Second").await;

    let response = get(
        build_test_app(pool.clone()),
        user_id,
        "/api/v1/notifications/unread-count",
    )
    .await;
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["data"]["count"], 2);

    // Mark one read; the unread filter must drop it.
    let response = post_json(
        build_test_app(pool.clone()),
        user_id,
        &format!("/api/v1/notifications/{first}/read"),
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(
        build_test_app(pool),
        user_id,
        "/api/v1/notifications?unread_only=true",
    )
    .await;
    let body = expect_json(response, StatusCode::OK).await;
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Second");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn marking_anothers_notification_is_404(pool: PgPool) {
    let owner = seed_user(&pool, "owner@example.com").await;
    let intruder = seed_user(&pool, "intruder@example.com").await;
    let id = seed_notification(&pool, owner, "Private").await;

    let response = post_json(
        build_test_app(pool),
        intruder,
        &format!("/api/v1/notifications/{id}/read"),
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn read_all_reports_marked_count(pool: PgPool) {
    let user_id = seed_user(&pool, "readall@example.com").await;
    seed_notification(&pool, user_id, "A").await;
    seed_notification(&pool, user_id, "B").await;

    let response = post_json(
        build_test_app(pool.clone()),
        user_id,
        "/api/v1/notifications/read-all",
        json!({}),
    )
    .await;
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["data"]["marked_read"], 2);

    let response = get(
        build_test_app(pool),
        user_id,
        "/api/v1/notifications/unread-count",
    )
    .await;
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["data"]["count"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn notification_preferences_round_trip(pool: PgPool) {
    let user_id = seed_user(&pool, "prefs@example.com").await;

    // Defaults come back for a user who never saved preferences.
    let response = get(
        build_test_app(pool.clone()),
        user_id,
        "/api/v1/preferences/notifications",
    )
    .await;
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["data"]["email_enabled"], true);
    assert_eq!(body["data"]["push_enabled"], true);

    // Update routing: achievements go email-only.
    let response = put_json(
        build_test_app(pool.clone()),
        user_id,
        "/api/v1/preferences/notifications",
        json!({
            "push_enabled": false,
            "channel_overrides": { "ACHIEVEMENT": "EMAIL" },
            "preferred_hour": 7,
        }),
    )
    .await;
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["data"]["push_enabled"], false);
    assert_eq!(body["data"]["channel_overrides"]["ACHIEVEMENT"], "EMAIL");
    assert_eq!(body["data"]["preferred_hour"], 7);

    let response = put_json(
        build_test_app(pool),
        user_id,
        "/api/v1/preferences/notifications",
        json!({ "preferred_hour": 99 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
