pub mod exercises;
pub mod health;
pub mod pages;
pub mod workout;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /workout        assembled workout (JSON)
/// /groups         group to body-part mapping
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(workout::router())
}
