use std::sync::Arc;

use axum::{Router, middleware::from_fn};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

use super::{api, catch_panic_layer, json_error_middleware, views};

pub const API_PREFIX: &str = "/api/v1";

/// Full application router with the error, panic and trace layers applied.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest(API_PREFIX, api::router(state))
        .merge(views::router())
        .layer(from_fn(json_error_middleware))
        .layer(catch_panic_layer())
        .layer(TraceLayer::new_for_http())
}
