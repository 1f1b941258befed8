use ingestion::{GammaClient, OddsSync, SyncReport};
use rust_decimal::Decimal;
use sqlx::PgPool;
use storage::repository::odds::OddsRepository;

/// Manual operator edit of one nominee's odds.
pub async fn update_odds(pool: &PgPool, nominee_id: i32, odds: Decimal) -> storage::Result<()> {
    let repo = OddsRepository::new(pool);
    repo.set_odds(nominee_id, odds).await
}

/// Pulls current prices from the market feed and applies them as a batch of
/// independent upserts.
pub async fn sync_odds(pool: &PgPool, slug: &str) -> ingestion::Result<SyncReport> {
    let client = GammaClient::new();
    OddsSync::new(pool).run(&client, slug).await
}
