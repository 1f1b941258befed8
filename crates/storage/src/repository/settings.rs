use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::ContestSettings;

pub struct SettingsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SettingsRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self) -> Result<ContestSettings> {
        let settings = sqlx::query_as::<_, ContestSettings>(
            "SELECT id, winner_nominee_id FROM settings WHERE id = 1",
        )
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(settings)
    }

    /// Sets the winner. Announcing again with a different nominee simply
    /// overwrites the previous one, so a mistaken announcement can be
    /// corrected.
    pub async fn announce_winner(&self, nominee_id: i32) -> Result<ContestSettings> {
        let settings = sqlx::query_as::<_, ContestSettings>(
            r#"
            UPDATE settings
            SET winner_nominee_id = $1
            WHERE id = 1
            RETURNING id, winner_nominee_id
            "#,
        )
        .bind(nominee_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_foreign_key_violation() {
                StorageError::InvalidNominee(nominee_id)
            } else {
                err
            }
        })?;

        Ok(settings)
    }

    /// Clears the winner, which reopens submissions.
    pub async fn reset_winner(&self) -> Result<ContestSettings> {
        let settings = sqlx::query_as::<_, ContestSettings>(
            r#"
            UPDATE settings
            SET winner_nominee_id = NULL
            WHERE id = 1
            RETURNING id, winner_nominee_id
            "#,
        )
        .fetch_one(self.pool)
        .await?;

        Ok(settings)
    }
}
