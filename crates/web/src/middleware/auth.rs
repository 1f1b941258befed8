use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::collections::HashSet;

use crate::error::WebError;

/// Gate for the operator-only mutation routes. This is a shared-secret
/// convenience check in the presentation layer, not a capability enforced by
/// the store; the repositories themselves carry no authorization.
pub async fn require_operator(
    State(keys): State<OperatorKeys>,
    request: Request,
    next: Next,
) -> Result<Response, WebError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match token {
        Some(token) if keys.is_valid(token) => Ok(next.run(request).await),
        _ => {
            tracing::warn!("Invalid operator key attempt");
            Err(WebError::Unauthorized)
        }
    }
}

#[derive(Clone)]
pub struct OperatorKeys {
    keys: HashSet<String>,
}

impl OperatorKeys {
    pub fn from_comma_separated(keys_str: &str) -> Self {
        let keys = keys_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Self { keys }
    }

    pub fn is_valid(&self, key: &str) -> bool {
        self.keys.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_keys() {
        let keys = OperatorKeys::from_comma_separated("alpha, beta ,,gamma");

        assert!(keys.is_valid("alpha"));
        assert!(keys.is_valid("beta"));
        assert!(keys.is_valid("gamma"));
        assert!(!keys.is_valid("delta"));
    }

    #[test]
    fn empty_config_accepts_nothing() {
        let keys = OperatorKeys::from_comma_separated("");

        assert!(!keys.is_valid(""));
        assert!(!keys.is_valid("anything"));
    }
}
