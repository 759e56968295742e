use axum::Router;

use super::{admin, public};

pub fn router() -> Router {
    Router::new().merge(public::router()).merge(admin::router())
}
