//! HTTP-level integration tests for the `/xp` and `/achievements`
//! endpoints: boundary validation, the grant pipeline end to end, and
//! cascade payouts.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, expect_json, get, post_json, seed_user};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Boundary validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn negative_amount_is_rejected(pool: PgPool) {
    let user_id = seed_user(&pool, "negative@example.com").await;
    let app = build_test_app(pool);

    let response = post_json(app, user_id, "/api/v1/xp", json!({ "amount": -50 })).await;
    let body = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_identity_header_is_unauthorized(pool: PgPool) {
    let app = build_test_app(pool);

    let request = axum::http::Request::builder()
        .uri("/api/v1/xp")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Grant pipeline
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn grant_creates_account_and_accumulates(pool: PgPool) {
    let user_id = seed_user(&pool, "grants@example.com").await;

    let response = post_json(
        build_test_app(pool.clone()),
        user_id,
        "/api/v1/xp",
        json!({ "amount": 250 }),
    )
    .await;
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["data"]["total_xp"], 250);
    assert_eq!(body["data"]["level"], 1);
    // First activity starts the streak at 1.
    assert_eq!(body["data"]["streak_days"], 1);

    // A second same-day grant accumulates XP but leaves the streak alone.
    let response = post_json(
        build_test_app(pool),
        user_id,
        "/api/v1/xp",
        json!({ "amount": 100 }),
    )
    .await;
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["data"]["total_xp"], 350);
    assert_eq!(body["data"]["streak_days"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn level_up_grant_pays_achievement_bonus_once(pool: PgPool) {
    let user_id = seed_user(&pool, "levelup@example.com").await;

    // 1000 XP crosses into level 2: 1000 + 200 LEVEL_UP bonus = 1200.
    let response = post_json(
        build_test_app(pool.clone()),
        user_id,
        "/api/v1/xp",
        json!({ "amount": 1000 }),
    )
    .await;
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["data"]["total_xp"], 1200);
    assert_eq!(body["data"]["level"], 2);

    // The achievement shows up with its captured reward.
    let response = get(build_test_app(pool.clone()), user_id, "/api/v1/achievements").await;
    let body = expect_json(response, StatusCode::OK).await;
    let achievements = body["data"].as_array().unwrap();
    assert_eq!(achievements.len(), 1);
    assert_eq!(achievements[0]["kind"], "LEVEL_UP");
    assert_eq!(achievements[0]["xp_reward"], 200);

    // Another level-up crossing pays no second LEVEL_UP bonus.
    let response = post_json(
        build_test_app(pool),
        user_id,
        "/api/v1/xp",
        json!({ "amount": 1000 }),
    )
    .await;
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["data"]["total_xp"], 2200);
    assert_eq!(body["data"]["level"], 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn zero_amount_grant_is_valid_activity(pool: PgPool) {
    let user_id = seed_user(&pool, "zero@example.com").await;

    let response = post_json(
        build_test_app(pool),
        user_id,
        "/api/v1/xp",
        json!({ "amount": 0 }),
    )
    .await;
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["data"]["total_xp"], 0);
    assert_eq!(body["data"]["streak_days"], 1);
}

// ---------------------------------------------------------------------------
// Account snapshot and leaderboard
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn account_snapshot_is_lazily_created(pool: PgPool) {
    let user_id = seed_user(&pool, "snapshot@example.com").await;

    let response = get(build_test_app(pool), user_id, "/api/v1/xp").await;
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["data"]["total_xp"], 0);
    assert_eq!(body["data"]["level"], 1);
    assert_eq!(body["data"]["streak_days"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn leaderboard_orders_by_total_xp(pool: PgPool) {
    let alice = seed_user(&pool, "alice@example.com").await;
    let bob = seed_user(&pool, "bob@example.com").await;

    post_json(
        build_test_app(pool.clone()),
        alice,
        "/api/v1/xp",
        json!({ "amount": 300 }),
    )
    .await;
    post_json(
        build_test_app(pool.clone()),
        bob,
        "/api/v1/xp",
        json!({ "amount": 700 }),
    )
    .await;

    let response = get(build_test_app(pool), alice, "/api/v1/xp/leaderboard").await;
    let body = body_json(response).await;
    let entries = body["data"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["user_id"], bob);
    assert_eq!(entries[1]["user_id"], alice);
}
