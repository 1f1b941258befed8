use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("A pick already exists for \"{0}\"")]
    DuplicateParticipant(String),

    #[error("Picks are closed: a winner has been announced")]
    ContestClosed,

    #[error("Unknown nominee: {0}")]
    InvalidNominee(i32),

    #[error("Odds must be between 0 and 1, got {0}")]
    InvalidOdds(Decimal),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23503")
        )
    }
}
