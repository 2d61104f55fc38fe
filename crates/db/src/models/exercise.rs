//! Exercise catalog row.

use gymcoach_core::types::DbId;
use gymcoach_core::workout::CatalogExercise;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `exercises` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Exercise {
    pub id: DbId,
    pub title: Option<String>,
    pub description: Option<String>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub exercise_type: Option<String>,
    pub body_part: Option<String>,
    pub equipment: Option<String>,
    pub level: Option<String>,
    pub rating: Option<f64>,
    pub rating_desc: Option<String>,
}

impl CatalogExercise for Exercise {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn body_part(&self) -> Option<&str> {
        self.body_part.as_deref()
    }

    fn exercise_type(&self) -> Option<&str> {
        self.exercise_type.as_deref()
    }

    fn equipment(&self) -> Option<&str> {
        self.equipment.as_deref()
    }

    fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }
}
