use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::{
    db::dao::UserDao,
    db::entities::usuario,
    error::AppError,
};

/// Emails are stored and compared trimmed and lowercase.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[derive(Clone)]
pub struct UserService {
    user_dao: UserDao,
}

impl UserService {
    pub fn new(user_dao: UserDao) -> Self {
        Self { user_dao }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<usuario::Model>, AppError> {
        Ok(self.user_dao.find_by_email(&normalize_email(email)).await?)
    }

    pub async fn touch_last_activity(
        &self,
        user_id: &Uuid,
        at: &NaiveDateTime,
    ) -> Result<(), AppError> {
        Ok(self.user_dao.touch_last_activity(user_id, at).await?)
    }
}
