use crate::{
    config::LoginSecurityConfig,
    db::dao::{LockoutStatus, LoginSecurityDao, LoginThrottle},
    error::AppError,
};

pub const BLOCKED_MESSAGE: &str = "Too many failed login attempts";

impl From<&LoginSecurityConfig> for LoginThrottle {
    fn from(cfg: &LoginSecurityConfig) -> Self {
        Self {
            max_attempts: cfg.max_attempts,
            lockout_secs: cfg.lockout_secs,
        }
    }
}

#[derive(Clone)]
pub struct LoginSecurityService {
    dao: LoginSecurityDao,
    throttle: LoginThrottle,
}

impl LoginSecurityService {
    pub fn new(dao: LoginSecurityDao, throttle: LoginThrottle) -> Self {
        Self { dao, throttle }
    }

    pub async fn status(&self, email: &str) -> Result<LockoutStatus, AppError> {
        Ok(self.dao.status(email).await?)
    }

    /// 429 while a block is active.
    pub async fn ensure_not_blocked(&self, email: &str) -> Result<(), AppError> {
        let status = self.status(email).await?;
        if status.is_blocked {
            tracing::warn!(email, until = ?status.blocked_until, "login attempt while blocked");
            return Err(AppError::too_many_requests(BLOCKED_MESSAGE));
        }
        Ok(())
    }

    pub async fn record_failure(&self, email: &str) -> Result<LockoutStatus, AppError> {
        let status = self.dao.record_failure(email, self.throttle).await?;
        if status.is_blocked {
            tracing::warn!(email, attempts = status.attempts, "login blocked");
        }
        Ok(status)
    }

    pub async fn record_success(&self, email: &str) -> Result<(), AppError> {
        Ok(self.dao.record_success(email).await?)
    }
}
