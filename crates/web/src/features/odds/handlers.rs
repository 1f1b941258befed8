use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ingestion::IngestionError;
use serde_json::json;
use storage::dto::odds::UpdateOddsRequest;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    put,
    path = "/api/odds/{nominee_id}",
    params(
        ("nominee_id" = i32, Path, description = "Nominee whose odds to set")
    ),
    request_body = UpdateOddsRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Odds updated"),
        (status = 400, description = "Odds outside [0, 1], or unknown nominee"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "odds"
)]
pub async fn update_odds(
    State(state): State<AppState>,
    Path(nominee_id): Path<i32>,
    Json(req): Json<UpdateOddsRequest>,
) -> Result<Response, WebError> {
    services::update_odds(state.db.pool(), nominee_id, req.odds).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/odds/sync",
    responses(
        (status = 200, description = "Odds pulled from the market feed; response lists every applied update"),
        (status = 404, description = "No active market found for the configured slug"),
        (status = 405, description = "Method other than GET or POST"),
        (status = 500, description = "Upstream fetch or store failure")
    ),
    tag = "odds"
)]
pub async fn sync_odds(State(state): State<AppState>) -> Response {
    match services::sync_odds(state.db.pool(), &state.market_slug).await {
        Ok(report) => {
            let body = json!({
                "success": true,
                "message": format!("Updated {} odds from Polymarket", report.applied.len()),
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "odds": report.applied,
            });
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(IngestionError::MarketNotFound(slug)) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("No active market found for '{slug}'") })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Odds sync failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to fetch odds",
                    "message": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}

pub async fn sync_method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
        .into_response()
}
