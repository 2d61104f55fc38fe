use axum::routing::get;
use axum::Router;

use crate::handlers::exercises;
use crate::state::AppState;

/// Catalog routes, mounted at root level.
///
/// ```text
/// GET /exercises        -> list_exercises
/// GET /exercises/{id}   -> get_exercise
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/exercises", get(exercises::list_exercises))
        .route("/exercises/{id}", get(exercises::get_exercise))
}
