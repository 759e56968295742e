use std::sync::Arc;

use axum::{Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};

use crate::{
    routes::{ApiJson, ApiResult, JsonApiResponse},
    services::ServiceContext,
    state::AppState,
};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionRequest {
    pub id_token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub uid: String,
    pub email: Option<String>,
    pub email_verified: bool,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/firebase/session", post(session))
        .with_state(state)
}

async fn session(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<SessionRequest>,
) -> ApiResult<SessionResponse> {
    let service = ServiceContext::from_state(state.as_ref()).firebase(state.firebase.as_ref());
    let account = service.verify_id_token(&body.id_token).await?;

    JsonApiResponse::ok(SessionResponse {
        uid: account.local_id,
        email: account.email,
        email_verified: account.email_verified,
    })
}
