use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum FirebaseError {
    #[error("firebase configuration is incomplete, missing: {}", .keys.join(", "))]
    MissingConfig { keys: Vec<&'static str> },
    #[error("failed to read firebase configuration: {reason}")]
    Unreadable { reason: String },
    #[error("firebase request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Firebase answered with an error payload such as `INVALID_ID_TOKEN`.
    #[error("firebase rejected the request ({status}): {code}")]
    Rejected { status: u16, code: String },
    #[error("unexpected firebase response: {0}")]
    UnexpectedResponse(String),
}

impl From<FirebaseError> for AppError {
    fn from(err: FirebaseError) -> Self {
        match err {
            FirebaseError::Rejected { status, ref code } if status < 500 => {
                AppError::unauthorized(format!("Firebase rejected the credentials: {code}"))
            }
            FirebaseError::MissingConfig { .. } | FirebaseError::Unreadable { .. } => {
                AppError::service_unavailable("Firebase is not configured")
            }
            other => {
                tracing::error!(error = %other, "firebase call failed");
                AppError::service_unavailable("Firebase is unavailable")
            }
        }
    }
}
