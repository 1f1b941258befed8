use sqlx::PgPool;
use storage::{
    dto::nominee::NomineeResponse, error::Result, repository::nominee::NomineeRepository,
};

/// Registry merged with current odds, favourites first.
pub async fn list_nominees(pool: &PgPool) -> Result<Vec<NomineeResponse>> {
    let repo = NomineeRepository::new(pool);
    let nominees = repo.list_with_odds().await?;

    Ok(nominees.into_iter().map(NomineeResponse::from).collect())
}
