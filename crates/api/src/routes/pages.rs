use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// HTML pages.
///
/// ```text
/// GET /           -> home
/// GET /workout    -> workout_page
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/workout", get(pages::workout_page))
}
