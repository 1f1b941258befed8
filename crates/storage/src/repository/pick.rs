use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Pick;

pub struct PickRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PickRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All live picks in submission order.
    pub async fn list(&self) -> Result<Vec<Pick>> {
        let picks = sqlx::query_as::<_, Pick>(
            r#"
            SELECT pick_id, name, nominee_id, created_at
            FROM picks
            ORDER BY created_at, pick_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(picks)
    }

    /// Appends a pick. The case-insensitive unique index on `lower(name)` is
    /// the authority on duplicates; the pre-check only gives a friendlier
    /// path for the common case. Two racing submissions with the same name
    /// resolve to one insert and one `DuplicateParticipant`.
    pub async fn submit(&self, name: &str, nominee_id: i32) -> Result<Pick> {
        let taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM picks WHERE lower(name) = lower($1))",
        )
        .bind(name)
        .fetch_one(self.pool)
        .await?;

        if taken {
            return Err(StorageError::DuplicateParticipant(name.to_string()));
        }

        let pick = sqlx::query_as::<_, Pick>(
            r#"
            INSERT INTO picks (name, nominee_id)
            VALUES ($1, $2)
            RETURNING pick_id, name, nominee_id, created_at
            "#,
        )
        .bind(name)
        .bind(nominee_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_unique_violation() {
                StorageError::DuplicateParticipant(name.to_string())
            } else if err.is_foreign_key_violation() {
                StorageError::InvalidNominee(nominee_id)
            } else {
                err
            }
        })?;

        Ok(pick)
    }

    /// Removing an id that no longer exists is a no-op, so retries are safe.
    pub async fn remove(&self, pick_id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM picks WHERE pick_id = $1")
            .bind(pick_id)
            .execute(self.pool)
            .await?;

        Ok(())
    }

    /// Deletes all picks in a single statement, so observers see exactly one
    /// change notification.
    pub async fn clear(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM picks").execute(self.pool).await?;
        Ok(result.rows_affected())
    }
}
