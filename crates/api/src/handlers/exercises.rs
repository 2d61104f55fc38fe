//! Handlers for the raw exercise catalog.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use gymcoach_core::error::CoreError;
use gymcoach_core::types::DbId;
use gymcoach_db::models::exercise::Exercise;
use gymcoach_db::repositories::ExerciseRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Catalog listing payload.
#[derive(Debug, Serialize)]
pub struct ExerciseListResponse {
    pub count: usize,
    pub exercises: Vec<Exercise>,
}

/// GET /exercises
///
/// Every catalog row, in load order.
pub async fn list_exercises(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let exercises = ExerciseRepo::list_all(&state.pool).await?;

    Ok(Json(ExerciseListResponse {
        count: exercises.len(),
        exercises,
    }))
}

/// GET /exercises/{id}
pub async fn get_exercise(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let exercise = ExerciseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Exercise",
            id,
        }))?;

    Ok(Json(exercise))
}
