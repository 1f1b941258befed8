use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use storage::dto::pick::{PickResponse, SubmitPickRequest};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/picks",
    responses(
        (status = 200, description = "All submitted picks in submission order", body = Vec<PickResponse>)
    ),
    tag = "picks"
)]
pub async fn list_picks(State(state): State<AppState>) -> Result<Json<Vec<PickResponse>>, WebError> {
    let picks = services::list_picks(state.db.pool()).await?;

    let response: Vec<PickResponse> = picks.into_iter().map(PickResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/picks",
    request_body = SubmitPickRequest,
    responses(
        (status = 201, description = "Pick submitted", body = PickResponse),
        (status = 400, description = "Validation error or unknown nominee"),
        (status = 409, description = "Name already taken, or the contest is closed")
    ),
    tag = "picks"
)]
pub async fn submit_pick(
    State(state): State<AppState>,
    Json(req): Json<SubmitPickRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let name = req.name.trim();
    if name.is_empty() {
        return Err(WebError::BadRequest("name must not be blank".to_string()));
    }

    let pick = services::submit_pick(state.db.pool(), name, req.nominee_id).await?;

    Ok((StatusCode::CREATED, Json(PickResponse::from(pick))).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/picks/{pick_id}",
    params(
        ("pick_id" = Uuid, Path, description = "Pick to remove")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Pick removed (or was already gone)"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "picks"
)]
pub async fn remove_pick(
    State(state): State<AppState>,
    Path(pick_id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::remove_pick(state.db.pool(), pick_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    delete,
    path = "/api/picks",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "All picks removed"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "picks"
)]
pub async fn clear_picks(State(state): State<AppState>) -> Result<Response, WebError> {
    let deleted = services::clear_picks(state.db.pool()).await?;

    Ok(Json(json!({ "deleted": deleted })).into_response())
}
