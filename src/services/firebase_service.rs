use crate::{
    error::AppError,
    firebase::{FirebaseAccount, FirebaseApp},
};

/// Exchanges a Firebase ID token for the account it belongs to.
pub struct FirebaseSessionService<'a> {
    app: Option<&'a FirebaseApp>,
}

impl<'a> FirebaseSessionService<'a> {
    pub fn new(app: Option<&'a FirebaseApp>) -> Self {
        Self { app }
    }

    pub async fn verify_id_token(&self, id_token: &str) -> Result<FirebaseAccount, AppError> {
        let id_token = id_token.trim();
        if id_token.is_empty() {
            return Err(AppError::bad_request("idToken is required"));
        }
        let app = self
            .app
            .ok_or_else(|| AppError::service_unavailable("Firebase is not configured"))?;

        let account = app.auth().lookup(id_token).await?;
        if account.disabled {
            return Err(AppError::forbidden("Firebase account is disabled"));
        }
        Ok(account)
    }
}
