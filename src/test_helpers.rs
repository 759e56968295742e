use std::sync::Arc;

use axum::Router;
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    auth::{
        Role,
        jwt::{encode_token, make_access_claims},
        password::{hash_password, hash_secret},
    },
    config::AppConfig,
    db::entities::{login_security, usuario},
    firebase::FirebaseApp,
    routes::router,
    services::security_question_service::normalize_answer,
    state::AppState,
};

pub const TEST_JWT_SECRET: &str = "test-secret";

pub fn test_config() -> AppConfig {
    let mut cfg = AppConfig::default();
    cfg.auth.jwt_secret = TEST_JWT_SECRET.to_string();
    cfg
}

pub fn test_state(db: DatabaseConnection, firebase: Option<FirebaseApp>) -> Arc<AppState> {
    AppState::new(test_config(), db, firebase)
}

pub fn test_router(db: DatabaseConnection) -> Router {
    router(test_state(db, None))
}

pub fn bearer_for(state: &AppState, role: Role) -> String {
    let claims = make_access_claims(&Uuid::new_v4(), vec![role], 600);
    let token = encode_token(&state.jwt, &claims).expect("token should encode");
    format!("Bearer {token}")
}

fn fixed_ts() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .expect("offset should be valid")
        .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
        .single()
        .expect("timestamp should be valid")
}

/// A `cliente` row; `security` is `(question, answer_hash)`.
pub fn sample_user(
    email: &str,
    password_hash: &str,
    security: Option<(&str, &str)>,
) -> usuario::Model {
    let now = fixed_ts();
    usuario::Model {
        id: Uuid::new_v4(),
        nombre: "Ana Pérez".to_string(),
        email: email.to_string(),
        password_hash: password_hash.to_string(),
        rol: Role::Cliente.as_str().to_string(),
        activo: true,
        pregunta_seguridad: security.map(|(question, _)| question.to_string()),
        respuesta_seguridad: security.map(|(_, hash)| hash.to_string()),
        last_activity: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_user_with_password(email: &str, password: &str, rol: &str) -> usuario::Model {
    let hash = hash_password(password).expect("password should hash");
    usuario::Model {
        rol: rol.to_string(),
        ..sample_user(email, &hash, None)
    }
}

/// User whose security answer hashes `answer` the same way the service does.
pub fn user_with_answer(email: &str, answer: &str) -> usuario::Model {
    let answer_hash = hash_secret(&normalize_answer(answer)).expect("answer should hash");
    sample_user(
        email,
        "$argon2id$unused",
        Some(("¿Cuál es el nombre de tu primera mascota?", &answer_hash)),
    )
}

pub fn lockout_record(
    email: &str,
    attempts: i32,
    blocked_until: Option<DateTime<Utc>>,
) -> login_security::Model {
    let now = fixed_ts();
    login_security::Model {
        id: 1,
        email: email.to_string(),
        login_attempts: attempts,
        last_login_attempt: Some(now),
        login_blocked_until: blocked_until.map(|until| until.fixed_offset()),
        created_at: now,
        updated_at: now,
    }
}
