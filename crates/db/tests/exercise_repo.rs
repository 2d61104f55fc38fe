//! Integration tests for `ExerciseRepo` and the pool helpers.

use gymcoach_core::catalog::CatalogRecord;
use gymcoach_db::repositories::ExerciseRepo;
use sqlx::SqlitePool;

fn record(title: &str, body_part: &str) -> CatalogRecord {
    CatalogRecord {
        title: Some(title.to_string()),
        exercise_type: Some("Strength".to_string()),
        body_part: Some(body_part.to_string()),
        level: Some("Beginner".to_string()),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Test: a fresh database has an empty catalog
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn fresh_catalog_is_empty(pool: SqlitePool) {
    assert_eq!(ExerciseRepo::count(&pool).await.unwrap(), 0);
    assert!(ExerciseRepo::list_all(&pool).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: replace_all stores rows in order with every field
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn replace_all_round_trips_fields(pool: SqlitePool) {
    let mut bench = record("Bench press", "Chest");
    bench.description = Some("Flat barbell press".to_string());
    bench.equipment = Some("Barbell".to_string());
    bench.rating = Some(9.1);
    bench.rating_desc = Some("Average".to_string());

    let inserted = ExerciseRepo::replace_all(&pool, &[bench, record("Row", "Back")])
        .await
        .unwrap();
    assert_eq!(inserted, 2);

    let rows = ExerciseRepo::list_all(&pool).await.unwrap();
    assert_eq!(rows.len(), 2);

    let first = &rows[0];
    assert_eq!(first.id, 1);
    assert_eq!(first.title.as_deref(), Some("Bench press"));
    assert_eq!(first.description.as_deref(), Some("Flat barbell press"));
    assert_eq!(first.exercise_type.as_deref(), Some("Strength"));
    assert_eq!(first.body_part.as_deref(), Some("Chest"));
    assert_eq!(first.equipment.as_deref(), Some("Barbell"));
    assert_eq!(first.rating, Some(9.1));
    assert_eq!(first.rating_desc.as_deref(), Some("Average"));

    assert_eq!(rows[1].id, 2);
    assert_eq!(rows[1].title.as_deref(), Some("Row"));
    assert_eq!(rows[1].equipment, None);
}

// ---------------------------------------------------------------------------
// Test: a second replace_all overwrites instead of appending
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn replace_all_overwrites_previous_catalog(pool: SqlitePool) {
    ExerciseRepo::replace_all(&pool, &[record("A", "Chest"), record("B", "Chest")])
        .await
        .unwrap();
    ExerciseRepo::replace_all(&pool, &[record("C", "Back")])
        .await
        .unwrap();

    let rows = ExerciseRepo::list_all(&pool).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 1);
    assert_eq!(rows[0].title.as_deref(), Some("C"));
    assert_eq!(ExerciseRepo::count(&pool).await.unwrap(), 1);
}

// ---------------------------------------------------------------------------
// Test: replacing with nothing clears the table
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn replace_all_with_no_records_clears_table(pool: SqlitePool) {
    ExerciseRepo::replace_all(&pool, &[record("A", "Chest")])
        .await
        .unwrap();
    let inserted = ExerciseRepo::replace_all(&pool, &[]).await.unwrap();

    assert_eq!(inserted, 0);
    assert_eq!(ExerciseRepo::count(&pool).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Test: health check and migrations are idempotent
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn health_check_and_repeated_migrations_succeed(pool: SqlitePool) {
    gymcoach_db::health_check(&pool).await.unwrap();
    gymcoach_db::run_migrations(&pool).await.unwrap();
}

// ---------------------------------------------------------------------------
// Test: find_by_id returns the row or None
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn find_by_id_returns_row_or_none(pool: SqlitePool) {
    ExerciseRepo::replace_all(&pool, &[record("A", "Chest"), record("B", "Back")])
        .await
        .unwrap();

    let found = ExerciseRepo::find_by_id(&pool, 2).await.unwrap().unwrap();
    assert_eq!(found.title.as_deref(), Some("B"));

    assert!(ExerciseRepo::find_by_id(&pool, 99).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Test: create_pool creates a missing database file
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_pool_creates_missing_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gymcoach.db");
    let url = format!("sqlite://{}", path.display());

    let pool = gymcoach_db::create_pool(&url).await.unwrap();
    gymcoach_db::run_migrations(&pool).await.unwrap();

    assert!(path.exists());
    assert_eq!(ExerciseRepo::count(&pool).await.unwrap(), 0);
}
