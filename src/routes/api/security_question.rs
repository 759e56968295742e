use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    content::SecurityQuestion,
    error::AppError,
    routes::{ApiJson, ApiResult, JsonApiResponse},
    services::ServiceContext,
    state::AppState,
};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SetQuestionRequest {
    pub user_id: Option<Uuid>,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EmailRequest {
    pub email: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VerifyAnswerRequest {
    pub email: String,
    pub answer: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub email: String,
    pub answer: String,
    pub new_password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSetResponse {
    pub user_id: Uuid,
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub email: String,
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct VerifiedResponse {
    pub verified: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordResetResponse {
    pub email: String,
    pub password_reset: bool,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/set-security-question", post(set_security_question))
        .route("/get-security-question", post(get_security_question))
        .route("/verify-security-answer", post(verify_security_answer))
        .route("/secure-questions", get(secure_questions))
        .route(
            "/reset-password-with-question",
            post(reset_password_with_question),
        )
        .with_state(state)
}

async fn set_security_question(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<SetQuestionRequest>,
) -> ApiResult<QuestionSetResponse> {
    let user_id = body
        .user_id
        .ok_or_else(|| AppError::bad_request("userId is required"))?;
    let service = ServiceContext::from_state(state.as_ref()).security_question();
    let user = service
        .set_question(&user_id, &body.question, &body.answer)
        .await?;

    JsonApiResponse::with_message(
        "Security question saved",
        QuestionSetResponse {
            user_id: user.id,
            question: user.pregunta_seguridad.unwrap_or_default(),
        },
    )
}

async fn get_security_question(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<EmailRequest>,
) -> ApiResult<QuestionResponse> {
    let service = ServiceContext::from_state(state.as_ref()).security_question();
    let (email, question) = service.get_question(&body.email).await?;
    JsonApiResponse::ok(QuestionResponse { email, question })
}

async fn verify_security_answer(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<VerifyAnswerRequest>,
) -> ApiResult<VerifiedResponse> {
    let service = ServiceContext::from_state(state.as_ref()).security_question();
    service.verify_answer(&body.email, &body.answer).await?;
    JsonApiResponse::ok(VerifiedResponse { verified: true })
}

async fn secure_questions(
    State(state): State<Arc<AppState>>,
) -> ApiResult<&'static [SecurityQuestion]> {
    let service = ServiceContext::from_state(state.as_ref()).security_question();
    JsonApiResponse::ok(service.catalog())
}

async fn reset_password_with_question(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<ResetPasswordRequest>,
) -> ApiResult<PasswordResetResponse> {
    let service = ServiceContext::from_state(state.as_ref()).security_question();
    let email = service
        .reset_password(&body.email, &body.answer, &body.new_password)
        .await?;

    JsonApiResponse::with_message(
        "Password updated",
        PasswordResetResponse {
            email,
            password_reset: true,
        },
    )
}
