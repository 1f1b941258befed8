use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use super::handlers::{clear_picks, list_picks, remove_pick, submit_pick};
use crate::middleware::auth::{OperatorKeys, require_operator};
use crate::state::AppState;

pub fn routes(operator_keys: OperatorKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/", delete(clear_picks))
        .route("/:pick_id", delete(remove_pick))
        .route_layer(middleware::from_fn_with_state(
            operator_keys,
            require_operator,
        ));

    Router::new()
        .route("/", get(list_picks))
        .route("/", post(submit_pick))
        .merge(protected)
}
