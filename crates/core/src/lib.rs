//! GymCoach domain logic.
//!
//! Pure functions and types with no database, HTTP or async dependencies:
//! the muscle-group mapping, workout assembly and catalog CSV parsing.

pub mod catalog;
pub mod error;
pub mod muscle_group;
pub mod types;
pub mod workout;
