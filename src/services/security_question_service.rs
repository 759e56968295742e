use uuid::Uuid;

use super::user_service::normalize_email;
use crate::{
    auth::password::{hash_password, hash_secret, verify_password},
    content::{SECURITY_QUESTIONS, SecurityQuestion},
    db::dao::{LoginSecurityDao, UserDao},
    db::entities::usuario,
    error::AppError,
};

pub const MAX_QUESTION_LEN: usize = 255;
pub const MAX_ANSWER_LEN: usize = 255;

/// Trims, collapses inner whitespace and lowercases, so "  Mi  Perro " and
/// "mi perro" hash and verify the same.
pub fn normalize_answer(answer: &str) -> String {
    answer
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn required<'a>(value: &'a str, field: &str) -> Result<&'a str, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::bad_request(format!("{field} is required")));
    }
    Ok(value)
}

fn within_limit(value: &str, field: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::bad_request(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

#[derive(Clone)]
pub struct SecurityQuestionService {
    user_dao: UserDao,
    login_security_dao: LoginSecurityDao,
}

impl SecurityQuestionService {
    pub fn new(user_dao: UserDao, login_security_dao: LoginSecurityDao) -> Self {
        Self {
            user_dao,
            login_security_dao,
        }
    }

    pub fn catalog(&self) -> &'static [SecurityQuestion] {
        SECURITY_QUESTIONS
    }

    /// Stores the question text and an argon2 hash of the normalized answer.
    pub async fn set_question(
        &self,
        user_id: &Uuid,
        question: &str,
        answer: &str,
    ) -> Result<usuario::Model, AppError> {
        let question = required(question, "question")?;
        within_limit(question, "question", MAX_QUESTION_LEN)?;
        let answer = normalize_answer(required(answer, "answer")?);
        within_limit(&answer, "answer", MAX_ANSWER_LEN)?;

        let answer_hash = hash_secret(&answer)?;
        let user = self
            .user_dao
            .set_security_question(user_id, question, &answer_hash)
            .await?;
        tracing::info!(user_id = %user.id, "security question updated");
        Ok(user)
    }

    /// Returns `(email, question)`; the stored answer never leaves this service.
    pub async fn get_question(&self, email: &str) -> Result<(String, String), AppError> {
        let user = self.user_with_question(email).await?;
        let question = user.pregunta_seguridad.unwrap_or_default();
        Ok((user.email, question))
    }

    pub async fn verify_answer(
        &self,
        email: &str,
        answer: &str,
    ) -> Result<usuario::Model, AppError> {
        let answer = normalize_answer(required(answer, "answer")?);
        let user = self.user_with_question(email).await?;
        let stored = user.respuesta_seguridad.as_deref().unwrap_or_default();

        if !verify_password(&answer, stored)? {
            tracing::warn!(user_id = %user.id, "security answer mismatch");
            return Err(AppError::unauthorized("Incorrect security answer"));
        }
        Ok(user)
    }

    /// Verifies the answer, replaces the password and lifts any login block.
    ///
    /// The password write decides the outcome. A failed unlock is logged and
    /// leaves the block to expire on its own.
    pub async fn reset_password(
        &self,
        email: &str,
        answer: &str,
        new_password: &str,
    ) -> Result<String, AppError> {
        required(email, "email")?;
        required(answer, "answer")?;
        if new_password.is_empty() {
            return Err(AppError::bad_request("newPassword is required"));
        }
        let password_hash = hash_password(new_password)?;

        let user = self.verify_answer(email, answer).await?;
        self.user_dao
            .set_password_hash(&user.id, &password_hash)
            .await?;
        if let Err(err) = self.login_security_dao.record_success(&user.email).await {
            tracing::warn!(user_id = %user.id, error = %err, "login block not cleared after reset");
        }

        tracing::info!(user_id = %user.id, "password reset with security question");
        Ok(user.email)
    }

    async fn user_with_question(&self, email: &str) -> Result<usuario::Model, AppError> {
        let email = normalize_email(required(email, "email")?);
        let user = self
            .user_dao
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        let has_question = user.pregunta_seguridad.is_some() && user.respuesta_seguridad.is_some();
        if !has_question {
            return Err(AppError::not_found("No security question set for this user"));
        }
        Ok(user)
    }
}
