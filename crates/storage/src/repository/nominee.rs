use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::{Nominee, NomineeWithOdds};

pub struct NomineeRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> NomineeRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, nominee_id: i32) -> Result<Nominee> {
        let nominee = sqlx::query_as::<_, Nominee>(
            r#"
            SELECT nominee_id, title, director
            FROM nominees
            WHERE nominee_id = $1
            "#,
        )
        .bind(nominee_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(nominee)
    }

    /// Registry merged with current odds, favourites first.
    pub async fn list_with_odds(&self) -> Result<Vec<NomineeWithOdds>> {
        let nominees = sqlx::query_as::<_, NomineeWithOdds>(
            r#"
            SELECT n.nominee_id, n.title, n.director, o.odds
            FROM nominees n
            INNER JOIN odds o ON o.nominee_id = n.nominee_id
            ORDER BY o.odds DESC, n.nominee_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(nominees)
    }
}
