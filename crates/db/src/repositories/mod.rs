//! Repository layer: one zero-sized struct per table, async methods taking
//! a pool reference.

pub mod exercise_repo;

pub use exercise_repo::ExerciseRepo;
