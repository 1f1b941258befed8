use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A participant's single selection. Participant names are unique
/// case-insensitively across all live picks (enforced by the store).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Pick {
    pub pick_id: Uuid,
    pub name: String,
    pub nominee_id: i32,
    pub created_at: DateTime<Utc>,
}
