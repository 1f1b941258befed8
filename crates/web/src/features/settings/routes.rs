use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use super::handlers::{announce_winner, get_settings, reset_winner};
use crate::middleware::auth::{OperatorKeys, require_operator};
use crate::state::AppState;

pub fn routes(operator_keys: OperatorKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/winner", post(announce_winner))
        .route("/winner", delete(reset_winner))
        .route_layer(middleware::from_fn_with_state(
            operator_keys,
            require_operator,
        ));

    Router::new().route("/", get(get_settings)).merge(protected)
}
