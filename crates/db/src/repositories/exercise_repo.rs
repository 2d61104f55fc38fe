//! Repository for the `exercises` table.

use gymcoach_core::catalog::CatalogRecord;
use gymcoach_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::exercise::Exercise;

/// Column list for `exercises` queries.
const COLUMNS: &str = "\
    id, title, description, type, body_part, equipment, level, \
    rating, rating_desc";

/// Read access to the catalog plus the wholesale reload used at startup.
pub struct ExerciseRepo;

impl ExerciseRepo {
    /// Every catalog row, in load order.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Exercise>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM exercises ORDER BY id");
        sqlx::query_as::<_, Exercise>(&query).fetch_all(pool).await
    }

    /// Find a catalog row by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Exercise>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM exercises WHERE id = ?");
        sqlx::query_as::<_, Exercise>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Number of catalog rows.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM exercises")
            .fetch_one(pool)
            .await
    }

    /// Replace the whole catalog with `records`.
    ///
    /// Runs in one transaction, so readers see either the old catalog or
    /// the new one. Row ids restart at 1 and follow `records` order.
    pub async fn replace_all(
        pool: &SqlitePool,
        records: &[CatalogRecord],
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM exercises")
            .execute(&mut *tx)
            .await?;

        let mut inserted = 0u64;
        for (idx, record) in records.iter().enumerate() {
            sqlx::query(
                "INSERT INTO exercises \
                 (id, title, description, type, body_part, equipment, level, rating, rating_desc) \
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(idx as i64 + 1)
            .bind(record.title.as_deref())
            .bind(record.description.as_deref())
            .bind(record.exercise_type.as_deref())
            .bind(record.body_part.as_deref())
            .bind(record.equipment.as_deref())
            .bind(record.level.as_deref())
            .bind(record.rating)
            .bind(record.rating_desc.as_deref())
            .execute(&mut *tx)
            .await?;
            inserted += 1;
        }

        tx.commit().await?;
        Ok(inserted)
    }
}
