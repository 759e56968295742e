use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{auth::jwt::JwtKeys, config::AppConfig, firebase::FirebaseApp};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db: DatabaseConnection,
    pub jwt: JwtKeys,
    /// `None` when no Firebase variables are set.
    pub firebase: Option<FirebaseApp>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        db: DatabaseConnection,
        firebase: Option<FirebaseApp>,
    ) -> Arc<Self> {
        let jwt = JwtKeys::from_secret(config.auth.jwt_secret.as_bytes());
        Arc::new(Self {
            config,
            db,
            jwt,
            firebase,
        })
    }
}
