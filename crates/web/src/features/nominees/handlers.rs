use axum::{Json, extract::State};
use storage::dto::nominee::NomineeResponse;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/nominees",
    responses(
        (status = 200, description = "All nominees with current odds and the points a correct pick would earn", body = Vec<NomineeResponse>)
    ),
    tag = "nominees"
)]
pub async fn list_nominees(
    State(state): State<AppState>,
) -> Result<Json<Vec<NomineeResponse>>, WebError> {
    let nominees = services::list_nominees(state.db.pool()).await?;

    Ok(Json(nominees))
}
