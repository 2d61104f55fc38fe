//! HTML page handlers.

use axum::extract::{Query, State};
use axum::response::Html;
use gymcoach_db::repositories::ExerciseRepo;

use crate::error::AppResult;
use crate::handlers::workout::assemble_workout;
use crate::query::WorkoutParams;
use crate::state::AppState;

/// GET /
pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    let exercise_count = ExerciseRepo::count(&state.pool).await?;
    Ok(Html(state.views.render_home(exercise_count)?))
}

/// GET /workout
///
/// Same query and logic as `GET /api/workout`, rendered as a page.
pub async fn workout_page(
    State(state): State<AppState>,
    Query(params): Query<WorkoutParams>,
) -> AppResult<Html<String>> {
    let (workout, size) = assemble_workout(&state, &params).await?;
    Ok(Html(state.views.render_workout(&workout, size)?))
}
