//! Integration tests for `POST /move`.

mod common;

use axum::http::StatusCode;
use common::{body_json, insert_project, insert_sub_work_package, insert_work_package, post_json};
use serde_json::json;
use sqlx::SqlitePool;

async fn links(pool: &SqlitePool, table: &str) -> Vec<(i64, i64)> {
    sqlx::query_as(&format!(
        "SELECT parent_id, child_id FROM {table} ORDER BY child_id"
    ))
    .fetch_all(pool)
    .await
    .unwrap()
}

async fn insert_item(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO tb_item (name, image_url, property) VALUES (?, ?, '{}') RETURNING id",
    )
    .bind(name)
    .bind(common::DEFAULT_IMAGE)
    .fetch_one(pool)
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Test: each supported pair writes one link row
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn work_package_into_project_links_once(pool: SqlitePool) {
    let project = insert_project(&pool, "Plant").await;
    let wp = insert_work_package(&pool, "Foundations", None).await;
    let test = common::build_test_app(pool.clone());

    let body = json!({
        "source_type": "wp",
        "source_id": wp,
        "target_type": "project",
        "target_id": project,
    });
    for _ in 0..2 {
        let response = post_json(test.app(), "/move", body.clone()).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"success": true}));
    }

    assert_eq!(links(&pool, "rel_Project_WP").await, vec![(project, wp)]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn sub_work_package_into_work_package(pool: SqlitePool) {
    let wp = insert_work_package(&pool, "Piping", None).await;
    let sub = insert_sub_work_package(&pool, "Welds").await;
    let test = common::build_test_app(pool.clone());

    let response = post_json(
        test.app(),
        "/move",
        json!({"source_type": "subwp", "source_id": sub, "target_type": "wp", "target_id": wp}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(links(&pool, "rel_WP_subWP").await, vec![(wp, sub)]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn item_into_sub_work_package(pool: SqlitePool) {
    let sub = insert_sub_work_package(&pool, "Welds").await;
    let item = insert_item(&pool, "Elbow").await;
    let test = common::build_test_app(pool.clone());

    let response = post_json(
        test.app(),
        "/move",
        json!({"source_type": "item", "source_id": item, "target_type": "subwp", "target_id": sub}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(links(&pool, "rel_subWP_item").await, vec![(sub, item)]);
}

// ---------------------------------------------------------------------------
// Test: moving again replaces the parent
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn moving_to_another_parent_replaces_link(pool: SqlitePool) {
    let first = insert_project(&pool, "First").await;
    let second = insert_project(&pool, "Second").await;
    let wp = insert_work_package(&pool, "Roof", None).await;
    let test = common::build_test_app(pool.clone());

    for target in [first, second] {
        let response = post_json(
            test.app(),
            "/move",
            json!({"source_type": "wp", "source_id": wp, "target_type": "project", "target_id": target}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    assert_eq!(links(&pool, "rel_Project_WP").await, vec![(second, wp)]);
}

// ---------------------------------------------------------------------------
// Test: ids read from data attributes arrive as strings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn string_ids_are_accepted(pool: SqlitePool) {
    let project = insert_project(&pool, "Plant").await;
    let wp = insert_work_package(&pool, "Walls", None).await;
    let test = common::build_test_app(pool.clone());

    let response = post_json(
        test.app(),
        "/move",
        json!({
            "source_type": "wp",
            "source_id": wp.to_string(),
            "target_type": "project",
            "target_id": project.to_string(),
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(links(&pool, "rel_Project_WP").await, vec![(project, wp)]);
}

// ---------------------------------------------------------------------------
// Test: rejected moves leave the relation tables untouched
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn unsupported_pair_returns_400(pool: SqlitePool) {
    let project = insert_project(&pool, "Plant").await;
    let item = insert_item(&pool, "Bolt").await;
    let test = common::build_test_app(pool.clone());

    let response = post_json(
        test.app(),
        "/move",
        json!({"source_type": "item", "source_id": item, "target_type": "project", "target_id": project}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "VALIDATION_ERROR");

    for table in ["rel_Project_WP", "rel_WP_subWP", "rel_subWP_item"] {
        assert!(links(&pool, table).await.is_empty(), "{table} must stay empty");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_type_returns_400(pool: SqlitePool) {
    let test = common::build_test_app(pool);

    let response = post_json(
        test.app(),
        "/move",
        json!({"source_type": "folder", "source_id": 1, "target_type": "project", "target_id": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_target_returns_404(pool: SqlitePool) {
    let wp = insert_work_package(&pool, "Walls", None).await;
    let test = common::build_test_app(pool.clone());

    let response = post_json(
        test.app(),
        "/move",
        json!({"source_type": "wp", "source_id": wp, "target_type": "project", "target_id": 404}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
    assert!(links(&pool, "rel_Project_WP").await.is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_source_returns_404(pool: SqlitePool) {
    let project = insert_project(&pool, "Plant").await;
    let test = common::build_test_app(pool);

    let response = post_json(
        test.app(),
        "/move",
        json!({"source_type": "wp", "source_id": 77, "target_type": "project", "target_id": project}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_body_returns_400(pool: SqlitePool) {
    let test = common::build_test_app(pool);

    let response = post_json(test.app(), "/move", json!({"source_type": "wp"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["success"], false);
}
