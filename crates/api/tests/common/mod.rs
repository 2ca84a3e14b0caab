#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

use planboard_api::config::{ServerConfig, UploadConfig};
use planboard_api::router::build_app_router;
use planboard_api::state::AppState;
use planboard_api::views::Views;

pub const DEFAULT_IMAGE: &str = "/static/images/question.png";

const BOUNDARY: &str = "planboard-test-boundary";

/// A router wired to a fresh database and a throwaway static directory.
///
/// Keep the value alive for the whole test: dropping it removes the
/// directory uploads are written to.
pub struct TestApp {
    pub router: Router,
    pub static_dir: TempDir,
}

impl TestApp {
    pub fn upload_dir(&self) -> PathBuf {
        self.static_dir.path().join("images")
    }

    pub fn app(&self) -> Router {
        self.router.clone()
    }
}

/// Build a test `ServerConfig` rooted at `static_dir`.
pub fn test_config(static_dir: &std::path::Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5000".to_string()],
        request_timeout_secs: 30,
        static_dir: static_dir.to_path_buf(),
        upload: UploadConfig {
            dir: static_dir.join("images"),
            url_prefix: "/static/images".to_string(),
            allowed_extensions: vec!["png".to_string()],
            default_image: DEFAULT_IMAGE.to_string(),
            max_bytes: 1024 * 1024,
        },
    }
}

/// Build the full application router, with all middleware layers, over `pool`.
pub fn build_test_app(pool: SqlitePool) -> TestApp {
    let static_dir = tempfile::tempdir().unwrap();
    let config = test_config(static_dir.path());

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        views: Arc::new(Views::new().unwrap()),
    };

    TestApp {
        router: build_app_router(state, &config),
        static_dir,
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST an `application/x-www-form-urlencoded` body, as `$.post` sends.
pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}={}", urlencode(k), urlencode(v)))
        .collect::<Vec<_>>()
        .join("&");
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// A file part for [`post_multipart`].
pub struct FilePart<'a> {
    pub field: &'a str,
    pub filename: &'a str,
    pub data: &'a [u8],
}

/// POST a `multipart/form-data` body, as `FormData` uploads send.
pub async fn post_multipart(
    app: Router,
    uri: &str,
    fields: &[(&str, &str)],
    file: Option<FilePart<'_>>,
) -> Response<Body> {
    let mut body: Vec<u8> = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some(part) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                part.field, part.filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn urlencode(raw: &str) -> String {
    raw.bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            b' ' => "+".to_string(),
            _ => format!("%{b:02X}"),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Fixture rows. The API has no create endpoints above the item level.
// ---------------------------------------------------------------------------

pub async fn insert_project(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO tb_Project (name) VALUES (?) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn insert_work_package(pool: &SqlitePool, name: &str, model: Option<&str>) -> i64 {
    sqlx::query_scalar::<_, i64>(r#"INSERT INTO tb_WP (name, "3d_model") VALUES (?, ?) RETURNING id"#)
        .bind(name)
        .bind(model)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn insert_sub_work_package(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO tb_subWP (name) VALUES (?) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn item_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tb_item")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// `(id, image_url, property)` of the most recently inserted item.
pub async fn last_item(pool: &SqlitePool) -> (i64, String, Option<String>) {
    sqlx::query_as("SELECT id, image_url, property FROM tb_item ORDER BY id DESC LIMIT 1")
        .fetch_one(pool)
        .await
        .unwrap()
}
