//! Handlers for workout assembly (JSON) and the group catalogue.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use gymcoach_core::muscle_group::MuscleGroup;
use gymcoach_core::workout::{build_single_group_workout, parse_size, Workout, WorkoutExercise};
use gymcoach_db::repositories::ExerciseRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::query::WorkoutParams;
use crate::state::AppState;

/// JSON workout payload.
#[derive(Debug, Serialize)]
pub struct WorkoutResponse {
    pub status: &'static str,
    pub workout_name: String,
    pub group: &'static str,
    pub total_exercises: usize,
    pub exercises: Vec<WorkoutExercise>,
}

/// One entry of the group catalogue.
#[derive(Debug, Serialize)]
pub struct GroupInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub body_parts: &'static [&'static str],
}

/// Group catalogue payload.
#[derive(Debug, Serialize)]
pub struct GroupListResponse {
    pub groups: Vec<GroupInfo>,
}

/// Load the catalog and assemble a workout for the given query.
///
/// Shared by the JSON endpoint and the HTML page. Returns the workout and
/// the size that was used.
pub async fn assemble_workout(
    state: &AppState,
    params: &WorkoutParams,
) -> AppResult<(Workout, usize)> {
    let size = parse_size(params.size.as_deref());
    let catalog = ExerciseRepo::list_all(&state.pool).await?;

    let workout = {
        let mut rng = rand::rng();
        build_single_group_workout(&catalog, params.group.as_deref(), size, &mut rng)
    };

    tracing::debug!(
        requested = ?params.group,
        group = %workout.muscle_group,
        size,
        candidates = catalog.len(),
        chosen = workout.exercises.len(),
        "Workout assembled",
    );

    Ok((workout, size))
}

/// GET /api/workout
///
/// Query: `group` (unknown or missing picks one at random), `size`
/// (default 5).
pub async fn get_workout(
    State(state): State<AppState>,
    Query(params): Query<WorkoutParams>,
) -> AppResult<impl IntoResponse> {
    let (workout, _size) = assemble_workout(&state, &params).await?;
    let group = workout.group();

    Ok(Json(WorkoutResponse {
        status: "ok",
        workout_name: workout.workout_name,
        group,
        total_exercises: workout.exercises.len(),
        exercises: workout.exercises,
    }))
}

/// GET /api/groups
///
/// The fixed group-to-body-part mapping.
pub async fn list_groups() -> Json<GroupListResponse> {
    let groups = MuscleGroup::ALL
        .into_iter()
        .map(|g| GroupInfo {
            key: g.key(),
            name: g.display_name(),
            body_parts: g.body_parts(),
        })
        .collect();

    Json(GroupListResponse { groups })
}
