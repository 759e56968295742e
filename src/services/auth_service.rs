use chrono::Utc;

use super::{
    login_security_service::{BLOCKED_MESSAGE, LoginSecurityService},
    user_service::{UserService, normalize_email},
};
use crate::{
    auth::{
        Role, TokenBundle,
        jwt::{JwtKeys, encode_token, make_access_claims},
        password::verify_password,
    },
    db::entities::usuario,
    error::AppError,
};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Debug)]
pub struct LoginOutcome {
    pub tokens: TokenBundle,
    pub user: usuario::Model,
}

pub struct AuthService<'a> {
    users: UserService,
    lockouts: LoginSecurityService,
    jwt: &'a JwtKeys,
    access_ttl_secs: u64,
}

impl<'a> AuthService<'a> {
    pub fn new(
        users: UserService,
        lockouts: LoginSecurityService,
        jwt: &'a JwtKeys,
        access_ttl_secs: u64,
    ) -> Self {
        Self {
            users,
            lockouts,
            jwt,
            access_ttl_secs,
        }
    }

    /// Password login gated by the per-email throttle. Unknown, inactive and
    /// wrong-password attempts all count as failures and share one message.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let email = normalize_email(email);
        if email.is_empty() || password.is_empty() {
            return Err(AppError::bad_request("Email and password are required"));
        }

        self.lockouts.ensure_not_blocked(&email).await?;

        let user = match self.users.find_by_email(&email).await? {
            Some(user) if user.activo && verify_password(password, &user.password_hash)? => user,
            _ => {
                let status = self.lockouts.record_failure(&email).await?;
                if status.is_blocked {
                    return Err(AppError::too_many_requests(BLOCKED_MESSAGE));
                }
                return Err(AppError::unauthorized(INVALID_CREDENTIALS));
            }
        };

        self.lockouts.record_success(&email).await?;
        self.users
            .touch_last_activity(&user.id, &Utc::now().naive_utc())
            .await?;

        let tokens = self.issue_tokens(&user)?;
        tracing::info!(user_id = %user.id, "login succeeded");
        Ok(LoginOutcome { tokens, user })
    }

    fn issue_tokens(&self, user: &usuario::Model) -> Result<TokenBundle, AppError> {
        let role = Role::try_from(user.rol.as_str()).map_err(|_| {
            tracing::error!(user_id = %user.id, rol = %user.rol, "unknown role on user");
            AppError::internal("User has an unknown role")
        })?;
        let ttl = usize::try_from(self.access_ttl_secs).unwrap_or(usize::MAX);
        let claims = make_access_claims(&user.id, vec![role], ttl);

        Ok(TokenBundle {
            access_token: encode_token(self.jwt, &claims)?,
            token_type: "Bearer",
            expires_in: self.access_ttl_secs,
        })
    }
}
