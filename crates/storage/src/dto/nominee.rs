use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::NomineeWithOdds;
use crate::services::scoring;

#[derive(Debug, Serialize, ToSchema)]
pub struct NomineeResponse {
    pub nominee_id: i32,
    pub title: String,
    pub director: String,
    pub odds: Decimal,
    /// Points this nominee would award if it wins and was picked.
    pub points_if_correct: i32,
}

impl From<NomineeWithOdds> for NomineeResponse {
    fn from(nominee: NomineeWithOdds) -> Self {
        let points_if_correct = scoring::points(nominee.odds);
        Self {
            nominee_id: nominee.nominee_id,
            title: nominee.title,
            director: nominee.director,
            odds: nominee.odds,
            points_if_correct,
        }
    }
}
