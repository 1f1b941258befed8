use axum::{Json, extract::State};
use storage::dto::leaderboard::LeaderboardRow;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/leaderboard",
    responses(
        (status = 200, description = "Ranked leaderboard derived from picks, current odds and the announced winner", body = Vec<LeaderboardRow>)
    ),
    tag = "leaderboard"
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaderboardRow>>, WebError> {
    let leaderboard = services::get_leaderboard(state.db.pool()).await?;

    Ok(Json(leaderboard))
}
