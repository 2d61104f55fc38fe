//! Integration tests for loading the catalog from a CSV file.

use std::io::Write;

use assert_matches::assert_matches;
use gymcoach_db::import::{load_catalog_from_csv, ImportError};
use gymcoach_db::repositories::ExerciseRepo;
use sqlx::SqlitePool;
use tempfile::NamedTempFile;

const MEGAGYM_SAMPLE: &str = "\
,Title,Desc,Type,BodyPart,Equipment,Level,Rating,RatingDesc
0,Partner plank band row,Plank with a band row,Strength,Abdominals,Bands,Intermediate,0.0,
1,Incline dumbbell press,,Strength,Chest,Dumbbell,Beginner,8.5,Average
2,Barbell deadlift,,Powerlifting,Lower Back,Barbell,Expert,,
";

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// ---------------------------------------------------------------------------
// Test: a MegaGym-shaped file loads every row with renamed columns
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn loads_megagym_layout(pool: SqlitePool) {
    let csv = write_csv(MEGAGYM_SAMPLE);

    let summary = load_catalog_from_csv(&pool, csv.path()).await.unwrap();
    assert_eq!(summary.rows_loaded, 3);
    assert!(summary.ignored_columns.is_empty());

    let rows = ExerciseRepo::list_all(&pool).await.unwrap();
    assert_eq!(rows[0].title.as_deref(), Some("Partner plank band row"));
    assert_eq!(rows[0].body_part.as_deref(), Some("Abdominals"));
    assert_eq!(rows[1].rating, Some(8.5));
    assert_eq!(rows[1].description, None);
    assert_eq!(rows[2].exercise_type.as_deref(), Some("Powerlifting"));
}

// ---------------------------------------------------------------------------
// Test: loading twice replaces the table
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn reload_replaces_existing_rows(pool: SqlitePool) {
    load_catalog_from_csv(&pool, write_csv(MEGAGYM_SAMPLE).path())
        .await
        .unwrap();
    let smaller = write_csv("Title,BodyPart\nSquat,Quadriceps\n");
    load_catalog_from_csv(&pool, smaller.path()).await.unwrap();

    assert_eq!(ExerciseRepo::count(&pool).await.unwrap(), 1);
}

// ---------------------------------------------------------------------------
// Test: a missing file is reported and nothing is touched
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn missing_file_is_an_error(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.csv");

    let err = load_catalog_from_csv(&pool, &path).await.unwrap_err();
    assert!(err.to_string().contains("nope.csv"));
    assert_matches!(err, ImportError::SourceNotFound(p) if p == path);
    assert_eq!(ExerciseRepo::count(&pool).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Test: a malformed file keeps the previous catalog
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn malformed_file_keeps_previous_catalog(pool: SqlitePool) {
    load_catalog_from_csv(&pool, write_csv(MEGAGYM_SAMPLE).path())
        .await
        .unwrap();

    let broken = write_csv("Title,BodyPart\nSquat,Quadriceps,extra\n");
    let err = load_catalog_from_csv(&pool, broken.path()).await.unwrap_err();

    assert_matches!(err, ImportError::Parse(_));
    assert_eq!(ExerciseRepo::count(&pool).await.unwrap(), 3);
}

// ---------------------------------------------------------------------------
// Test: a row shorter than the header loads with NULL trailing columns
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn short_row_loads_with_null_trailing_columns(pool: SqlitePool) {
    let csv = write_csv(
        ",Title,Desc,Type,BodyPart,Equipment,Level,Rating,RatingDesc\n\
         0,Squat,Back squat,Strength,Quadriceps,Barbell,Beginner,8.0\n",
    );

    let summary = load_catalog_from_csv(&pool, csv.path()).await.unwrap();
    assert_eq!(summary.rows_loaded, 1);

    let rows = ExerciseRepo::list_all(&pool).await.unwrap();
    assert_eq!(rows[0].level.as_deref(), Some("Beginner"));
    assert_eq!(rows[0].rating, Some(8.0));
    assert_eq!(rows[0].rating_desc, None);
}
