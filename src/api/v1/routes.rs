use axum::{
    Router,
    routing::{get, post},
};

use crate::api::v1::handlers::{
    health::health,
    refresh::{method_not_allowed, refresh},
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        // The refresh route answers POST only; every other method falls
        // through to the explicit 405 body instead of the framework default.
        .route(
            "/spotify/refresh",
            post(refresh).fallback(method_not_allowed),
        )
}
