//! Single-group workout assembly.
//!
//! A workout is built in three steps:
//!
//! 1. Resolve the requested group (unknown or missing picks one at random).
//! 2. Keep the catalog rows whose `body_part` belongs to that group. When
//!    nothing matches, the whole catalog becomes the candidate set.
//! 3. Sample up to `size` candidates uniformly, without replacement, and
//!    number them from 1.

use std::num::IntErrorKind;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;

use crate::muscle_group::MuscleGroup;

// ── Constants ────────────────────────────────────────────────────────

/// Number of exercises when the request does not say (or says nonsense).
pub const DEFAULT_WORKOUT_SIZE: usize = 5;

/// Sets prescribed for every exercise.
pub const DEFAULT_SETS: u32 = 3;

/// Rep range prescribed for every exercise.
pub const DEFAULT_REPS: &str = "8–12";

/// Suffix appended to the group name to form the workout title.
pub const WORKOUT_NAME_SUFFIX: &str = "Focus – GymCoach";

// ── Types ────────────────────────────────────────────────────────────

/// Read access to the catalog fields a workout needs.
///
/// Implemented by the database row type so this module stays free of any
/// storage dependency.
pub trait CatalogExercise {
    fn title(&self) -> Option<&str>;
    fn body_part(&self) -> Option<&str>;
    fn exercise_type(&self) -> Option<&str>;
    fn equipment(&self) -> Option<&str>;
    fn level(&self) -> Option<&str>;
}

/// One numbered entry of an assembled workout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutExercise {
    /// 1-based position in the workout.
    pub order: usize,
    pub title: Option<String>,
    pub body_part: Option<String>,
    #[serde(rename = "type")]
    pub exercise_type: Option<String>,
    pub equipment: Option<String>,
    pub level: Option<String>,
    pub sets: u32,
    pub reps: &'static str,
}

/// An assembled single-group workout.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub muscle_group: MuscleGroup,
    /// Title, e.g. `"Chest Focus – GymCoach"`.
    pub workout_name: String,
    pub exercises: Vec<WorkoutExercise>,
}

impl Workout {
    /// Display name of the group, e.g. `"Chest"`.
    pub fn group(&self) -> &'static str {
        self.muscle_group.display_name()
    }
}

// ── Pure functions ───────────────────────────────────────────────────

/// Parse the `size` query parameter.
///
/// Missing, blank, non-numeric and negative values all yield
/// [`DEFAULT_WORKOUT_SIZE`]. Zero is honoured and produces an empty workout.
/// Integers too large for `usize` saturate, so they select every candidate.
pub fn parse_size(raw: Option<&str>) -> usize {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return DEFAULT_WORKOUT_SIZE;
    };
    match raw.parse::<usize>() {
        Ok(size) => size,
        Err(e) if e.kind() == &IntErrorKind::PosOverflow => usize::MAX,
        Err(_) => DEFAULT_WORKOUT_SIZE,
    }
}

/// Rows of `catalog` that belong to `group`, or the whole catalog when
/// none do. Rows without a body part are skipped.
pub fn select_candidates<E: CatalogExercise>(catalog: &[E], group: MuscleGroup) -> Vec<&E> {
    let candidates: Vec<&E> = catalog
        .iter()
        .filter(|ex| ex.body_part().is_some_and(|bp| group.matches_body_part(bp)))
        .collect();

    if candidates.is_empty() {
        catalog.iter().collect()
    } else {
        candidates
    }
}

/// Pick `min(size, candidates.len())` entries uniformly at random without
/// replacement. When every candidate fits, they are returned in order.
pub fn sample<'a, T: ?Sized, R: Rng + ?Sized>(
    candidates: &[&'a T],
    size: usize,
    rng: &mut R,
) -> Vec<&'a T> {
    if candidates.len() <= size {
        return candidates.to_vec();
    }
    candidates.choose_multiple(rng, size).copied().collect()
}

/// Build a workout focused on a single muscle group.
///
/// `requested_group` is the raw key from the request; an unknown or missing
/// key picks a group at random.
pub fn build_single_group_workout<E, R>(
    catalog: &[E],
    requested_group: Option<&str>,
    size: usize,
    rng: &mut R,
) -> Workout
where
    E: CatalogExercise,
    R: Rng + ?Sized,
{
    let group = MuscleGroup::resolve(requested_group, rng);
    let candidates = select_candidates(catalog, group);
    let chosen = sample(&candidates, size, rng);

    let exercises = chosen
        .into_iter()
        .enumerate()
        .map(|(i, ex)| WorkoutExercise {
            order: i + 1,
            title: ex.title().map(str::to_owned),
            body_part: ex.body_part().map(str::to_owned),
            exercise_type: ex.exercise_type().map(str::to_owned),
            equipment: ex.equipment().map(str::to_owned),
            level: ex.level().map(str::to_owned),
            sets: DEFAULT_SETS,
            reps: DEFAULT_REPS,
        })
        .collect();

    Workout {
        muscle_group: group,
        workout_name: workout_name(group),
        exercises,
    }
}

/// Title shown for a workout targeting `group`.
pub fn workout_name(group: MuscleGroup) -> String {
    format!("{} {WORKOUT_NAME_SUFFIX}", group.display_name())
}
