use sqlx::PgPool;
use storage::{
    dto::leaderboard::LeaderboardRow,
    error::Result,
    repository::{
        nominee::NomineeRepository, pick::PickRepository, settings::SettingsRepository,
    },
    services::scoring,
};

/// Recomputes the leaderboard from the three source collections. Nothing is
/// cached; every change notification invalidates the previous projection by
/// construction.
pub async fn get_leaderboard(pool: &PgPool) -> Result<Vec<LeaderboardRow>> {
    let nominees = NomineeRepository::new(pool).list_with_odds().await?;
    let picks = PickRepository::new(pool).list().await?;
    let settings = SettingsRepository::new(pool).get().await?;

    Ok(scoring::compute_leaderboard(&nominees, &picks, &settings))
}
