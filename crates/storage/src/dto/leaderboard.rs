use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// One ranked leaderboard entry. Derived on every read, never stored; points
/// reflect the picked nominee's *current* odds, so odds edits after the
/// winner is announced retroactively change displayed points.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LeaderboardRow {
    pub rank: i64,
    pub pick_id: Uuid,
    pub name: String,
    pub nominee_id: i32,
    pub pick_title: String,
    pub points: i32,
    pub is_correct: bool,
    pub submitted_at: DateTime<Utc>,
}
