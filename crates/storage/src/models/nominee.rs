use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One contest entry. The registry is seeded once per contest; ids and titles
/// never change while the contest runs.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Nominee {
    pub nominee_id: i32,
    pub title: String,
    pub director: String,
}

/// A nominee merged with its current win probability from the odds store.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct NomineeWithOdds {
    pub nominee_id: i32,
    pub title: String,
    pub director: String,
    pub odds: Decimal,
}
