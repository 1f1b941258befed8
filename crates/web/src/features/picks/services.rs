use sqlx::PgPool;
use storage::{
    error::Result,
    models::Pick,
    repository::{pick::PickRepository, settings::SettingsRepository},
};
use uuid::Uuid;

/// All picks in submission order.
pub async fn list_picks(pool: &PgPool) -> Result<Vec<Pick>> {
    let repo = PickRepository::new(pool);
    repo.list().await
}

/// Appends a pick for a new participant. Fails while the contest is
/// resolved; the name must be unique case-insensitively among live picks.
pub async fn submit_pick(pool: &PgPool, name: &str, nominee_id: i32) -> Result<Pick> {
    let settings = SettingsRepository::new(pool).get().await?;
    settings.ensure_open()?;

    let repo = PickRepository::new(pool);
    repo.submit(name, nominee_id).await
}

pub async fn remove_pick(pool: &PgPool, pick_id: Uuid) -> Result<()> {
    let repo = PickRepository::new(pool);
    repo.remove(pick_id).await
}

pub async fn clear_picks(pool: &PgPool) -> Result<u64> {
    let repo = PickRepository::new(pool);
    repo.clear().await
}
