use axum::{
    Router, middleware,
    routing::{get, put},
};

use super::handlers::{sync_method_not_allowed, sync_odds, update_odds};
use crate::middleware::auth::{OperatorKeys, require_operator};
use crate::state::AppState;

pub fn routes(operator_keys: OperatorKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/:nominee_id", put(update_odds))
        .route_layer(middleware::from_fn_with_state(
            operator_keys,
            require_operator,
        ));

    // The sync trigger is left open so the scheduler can hit it; any method
    // besides GET and POST gets a 405 with an error payload.
    Router::new()
        .route(
            "/sync",
            get(sync_odds)
                .post(sync_odds)
                .fallback(sync_method_not_allowed),
        )
        .merge(protected)
}
