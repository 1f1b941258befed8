use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::error::{Result, StorageError};

pub struct OddsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OddsRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Upserts the win probability for a nominee. Out-of-range values are
    /// rejected before the store is touched.
    pub async fn set_odds(&self, nominee_id: i32, value: Decimal) -> Result<()> {
        ensure_valid_odds(value)?;

        sqlx::query(
            r#"
            INSERT INTO odds (nominee_id, odds, updated_at)
            VALUES ($1, $2, now())
            ON CONFLICT (nominee_id)
            DO UPDATE SET odds = EXCLUDED.odds, updated_at = now()
            "#,
        )
        .bind(nominee_id)
        .bind(value)
        .execute(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_foreign_key_violation() {
                StorageError::InvalidNominee(nominee_id)
            } else {
                err
            }
        })?;

        Ok(())
    }
}

fn ensure_valid_odds(value: Decimal) -> Result<()> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(StorageError::InvalidOdds(value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn odds(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn accepts_probabilities() {
        assert!(ensure_valid_odds(odds("0")).is_ok());
        assert!(ensure_valid_odds(odds("0.04")).is_ok());
        assert!(ensure_valid_odds(odds("1")).is_ok());
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(matches!(
            ensure_valid_odds(odds("1.5")),
            Err(StorageError::InvalidOdds(_))
        ));
        assert!(matches!(
            ensure_valid_odds(odds("-0.01")),
            Err(StorageError::InvalidOdds(_))
        ));
    }
}
