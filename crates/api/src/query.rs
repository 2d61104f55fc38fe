//! Query parameter types shared by the HTML and JSON workout handlers.

use serde::Deserialize;

/// Workout query parameters (`?group=&size=`).
///
/// Both are kept as raw strings: an unknown group or unparseable size is
/// not an error, it falls back to a random group or the default size.
#[derive(Debug, Default, Deserialize)]
pub struct WorkoutParams {
    pub group: Option<String>,
    pub size: Option<String>,
}
