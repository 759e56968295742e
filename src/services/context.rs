use sea_orm::DatabaseConnection;

use crate::{
    auth::jwt::JwtKeys,
    config::{AuthConfig, LoginSecurityConfig},
    db::dao::{DaoContext, LoginThrottle},
    firebase::FirebaseApp,
    services::{
        auth_service::AuthService, firebase_service::FirebaseSessionService,
        login_security_service::LoginSecurityService,
        security_question_service::SecurityQuestionService, user_service::UserService,
    },
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            daos: DaoContext::new(db),
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.db)
    }

    pub fn user(&self) -> UserService {
        UserService::new(self.daos.user())
    }

    pub fn security_question(&self) -> SecurityQuestionService {
        SecurityQuestionService::new(self.daos.user(), self.daos.login_security())
    }

    pub fn login_security(&self, cfg: &LoginSecurityConfig) -> LoginSecurityService {
        LoginSecurityService::new(self.daos.login_security(), LoginThrottle::from(cfg))
    }

    pub fn auth<'a>(
        &self,
        jwt: &'a JwtKeys,
        auth: &AuthConfig,
        login_security: &LoginSecurityConfig,
    ) -> AuthService<'a> {
        AuthService::new(
            self.user(),
            self.login_security(login_security),
            jwt,
            auth.access_token_ttl_secs,
        )
    }

    pub fn firebase<'a>(&self, app: Option<&'a FirebaseApp>) -> FirebaseSessionService<'a> {
        FirebaseSessionService::new(app)
    }
}
