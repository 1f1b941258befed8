use sqlx::PgPool;
use storage::{
    error::{Result, StorageError},
    models::ContestSettings,
    repository::{nominee::NomineeRepository, settings::SettingsRepository},
};

pub async fn get_settings(pool: &PgPool) -> Result<ContestSettings> {
    let repo = SettingsRepository::new(pool);
    repo.get().await
}

/// Sets the winner and closes submissions. Re-announcing with a different
/// nominee overwrites the previous winner.
pub async fn announce_winner(pool: &PgPool, nominee_id: i32) -> Result<ContestSettings> {
    NomineeRepository::new(pool)
        .find_by_id(nominee_id)
        .await
        .map_err(|e| match e {
            StorageError::NotFound => StorageError::InvalidNominee(nominee_id),
            other => other,
        })?;

    let repo = SettingsRepository::new(pool);
    repo.announce_winner(nominee_id).await
}

/// Clears the winner and reopens submissions.
pub async fn reset_winner(pool: &PgPool) -> Result<ContestSettings> {
    let repo = SettingsRepository::new(pool);
    repo.reset_winner().await
}
