use axum::routing::get;
use axum::Router;

use crate::handlers::workout;
use crate::state::AppState;

/// Workout routes, mounted under `/api`.
///
/// ```text
/// GET /workout    -> get_workout
/// GET /groups     -> list_groups
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/workout", get(workout::get_workout))
        .route("/groups", get(workout::list_groups))
}
