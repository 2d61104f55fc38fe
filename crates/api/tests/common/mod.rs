#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use gymcoach_core::catalog::CatalogRecord;
use gymcoach_db::repositories::ExerciseRepo;
use gymcoach_db::DbPool;
use http_body_util::BodyExt;
use tower::ServiceExt;

use gymcoach_api::config::ServerConfig;
use gymcoach_api::router::build_app_router;
use gymcoach_api::state::AppState;
use gymcoach_api::views::Views;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        db_path: None,
        catalog_csv_path: PathBuf::from("unused.csv"),
        cors_origins: vec!["http://localhost:8080".to_string()],
        request_timeout_secs: 30,
        log_json: false,
    }
}

/// Fresh in-memory database with the schema applied and no rows.
pub async fn empty_pool() -> DbPool {
    let pool = gymcoach_db::create_pool("sqlite::memory:").await.unwrap();
    gymcoach_db::run_migrations(&pool).await.unwrap();
    pool
}

/// Catalog fixture: 6 chest, 2 legs (mixed labels), 1 core, 1 unlabeled.
pub fn fixture_records() -> Vec<CatalogRecord> {
    let row = |title: &str, body_part: Option<&str>| CatalogRecord {
        title: Some(title.to_string()),
        exercise_type: Some("Strength".to_string()),
        body_part: body_part.map(str::to_string),
        equipment: Some("Barbell".to_string()),
        level: Some("Intermediate".to_string()),
        ..Default::default()
    };

    vec![
        row("Bench press", Some("Chest")),
        row("Incline press", Some("Chest")),
        row("Decline press", Some("chest")),
        row("Cable fly", Some("Chest")),
        row("Push-up", Some("Chest")),
        row("Dip", Some("Chest")),
        row("Walking lunge", Some("Upper Legs")),
        row("Calf raise", Some("Lower Legs")),
        row("Crunch", Some("Abdominals")),
        row("Mystery move", None),
    ]
}

/// In-memory database loaded with [`fixture_records`].
pub async fn seeded_pool() -> DbPool {
    let pool = empty_pool().await;
    ExerciseRepo::replace_all(&pool, &fixture_records())
        .await
        .unwrap();
    pool
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: DbPool) -> Router {
    let state = AppState {
        pool,
        views: Arc::new(Views::new().unwrap()),
    };
    build_app_router(state, &test_config())
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as UTF-8 text.
pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
