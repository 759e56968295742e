use std::sync::Arc;

use axum::{Router, routing::get};

use crate::{
    auth::AdminRole,
    content::{REPORTS, ReportDescriptor},
    routes::{ApiResult, AuthRoleGuard, JsonApiResponse},
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/admin/reports", get(admin_reports))
        .with_state(state)
}

async fn admin_reports(
    AuthRoleGuard { claims, .. }: AuthRoleGuard<AdminRole>,
) -> ApiResult<&'static [ReportDescriptor]> {
    tracing::debug!(admin = %claims.sub, "listing reports");
    JsonApiResponse::ok(REPORTS)
}
