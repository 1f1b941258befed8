use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::ContestSettings;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AnnounceWinnerRequest {
    pub nominee_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContestSettingsResponse {
    pub winner_nominee_id: Option<i32>,
    pub is_resolved: bool,
}

impl From<ContestSettings> for ContestSettingsResponse {
    fn from(settings: ContestSettings) -> Self {
        Self {
            is_resolved: settings.is_resolved(),
            winner_nominee_id: settings.winner_nominee_id,
        }
    }
}
