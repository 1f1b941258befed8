use axum::{Json, extract::State};
use storage::dto::settings::{AnnounceWinnerRequest, ContestSettingsResponse};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/settings",
    responses(
        (status = 200, description = "Contest state: the announced winner, or null while the contest is open", body = ContestSettingsResponse)
    ),
    tag = "settings"
)]
pub async fn get_settings(
    State(state): State<AppState>,
) -> Result<Json<ContestSettingsResponse>, WebError> {
    let settings = services::get_settings(state.db.pool()).await?;

    Ok(Json(ContestSettingsResponse::from(settings)))
}

#[utoipa::path(
    post,
    path = "/api/settings/winner",
    request_body = AnnounceWinnerRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Winner announced; submissions are now closed", body = ContestSettingsResponse),
        (status = 400, description = "Unknown nominee"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "settings"
)]
pub async fn announce_winner(
    State(state): State<AppState>,
    Json(req): Json<AnnounceWinnerRequest>,
) -> Result<Json<ContestSettingsResponse>, WebError> {
    let settings = services::announce_winner(state.db.pool(), req.nominee_id).await?;

    Ok(Json(ContestSettingsResponse::from(settings)))
}

#[utoipa::path(
    delete,
    path = "/api/settings/winner",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Winner cleared; submissions reopen", body = ContestSettingsResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "settings"
)]
pub async fn reset_winner(
    State(state): State<AppState>,
) -> Result<Json<ContestSettingsResponse>, WebError> {
    let settings = services::reset_winner(state.db.pool()).await?;

    Ok(Json(ContestSettingsResponse::from(settings)))
}
