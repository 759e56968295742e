use std::sync::Arc;

use axum::{Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    routes::{ApiJson, ApiResult, JsonApiResponse},
    services::{ServiceContext, auth_service::LoginOutcome},
    state::AppState,
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub nombre: String,
    pub email: String,
    pub rol: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: u64,
    pub user: UserProfile,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/login", post(login))
        .with_state(state)
}

async fn login(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let services = ServiceContext::from_state(state.as_ref());
    let service = services.auth(
        &state.jwt,
        &state.config.auth,
        &state.config.login_security,
    );
    let outcome = service.login(&body.email, &body.password).await?;
    JsonApiResponse::ok(outcome.into())
}

impl From<LoginOutcome> for LoginResponse {
    fn from(outcome: LoginOutcome) -> Self {
        Self {
            access_token: outcome.tokens.access_token,
            token_type: outcome.tokens.token_type,
            expires_in: outcome.tokens.expires_in,
            user: UserProfile {
                id: outcome.user.id,
                nombre: outcome.user.nombre,
                email: outcome.user.email,
                rol: outcome.user.rol,
            },
        }
    }
}
