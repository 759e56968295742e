use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

use super::{admin, auth, firebase, security_question};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(security_question::router(state.clone()))
        .merge(auth::router(state.clone()))
        .merge(admin::router(state.clone()))
        .merge(firebase::router(state))
}
