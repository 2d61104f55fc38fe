//! One-time load of the exercise catalog from its CSV source.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use gymcoach_core::catalog::parse_catalog;
use gymcoach_core::error::CoreError;
use sqlx::SqlitePool;

use crate::repositories::ExerciseRepo;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Catalog CSV not found at: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Failed to read catalog CSV: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Outcome of a catalog load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub rows_loaded: u64,
    pub ignored_columns: Vec<String>,
}

/// Parse the CSV at `csv_path` and replace the `exercises` table with it.
///
/// A missing file is an error; the existing table is left untouched when
/// parsing fails.
pub async fn load_catalog_from_csv(
    pool: &SqlitePool,
    csv_path: &Path,
) -> Result<ImportSummary, ImportError> {
    if !csv_path.exists() {
        return Err(ImportError::SourceNotFound(csv_path.to_path_buf()));
    }

    let file = File::open(csv_path)?;
    let parsed = parse_catalog(BufReader::new(file))?;

    if !parsed.ignored_columns.is_empty() {
        tracing::warn!(
            columns = ?parsed.ignored_columns,
            "Catalog CSV has columns with no matching field, skipping them"
        );
    }

    let rows_loaded = ExerciseRepo::replace_all(pool, &parsed.records).await?;
    tracing::info!(rows_loaded, path = %csv_path.display(), "Exercise catalog loaded");

    Ok(ImportSummary {
        rows_loaded,
        ignored_columns: parsed.ignored_columns,
    })
}
