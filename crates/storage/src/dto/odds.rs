use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

/// Manual odds edit. Values outside [0, 1] are rejected by the odds store,
/// not clamped.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOddsRequest {
    pub odds: Decimal,
}
