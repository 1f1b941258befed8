use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Pick;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SubmitPickRequest {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    pub nominee_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PickResponse {
    pub pick_id: Uuid,
    pub name: String,
    pub nominee_id: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Pick> for PickResponse {
    fn from(pick: Pick) -> Self {
        Self {
            pick_id: pick.pick_id,
            name: pick.name,
            nominee_id: pick.nominee_id,
            created_at: pick.created_at,
        }
    }
}
