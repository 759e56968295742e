//! Firebase clients, built once at startup and handed to the app through
//! `AppState`. Configuration comes from the `REACT_APP_FIREBASE_*` variables
//! shared with the storefront bundle.

mod auth;
mod config;
mod error;
mod firestore;

use std::time::Duration;

pub use auth::{FirebaseAccount, FirebaseAuth};
pub use self::config::{FirebaseConfig, REQUIRED_KEYS};
pub use error::FirebaseError;
pub use firestore::Firestore;

use crate::config::EnvConfig;

const HTTP_TIMEOUT_SECS: u64 = 10;

pub const IDENTITY_TOOLKIT_URL: &str = "https://identitytoolkit.googleapis.com/v1";
pub const FIRESTORE_URL: &str = "https://firestore.googleapis.com/v1";

/// Base URLs of the two REST services.
#[derive(Debug, Clone)]
pub struct FirebaseEndpoints {
    pub identity_toolkit: String,
    pub firestore: String,
}

impl Default for FirebaseEndpoints {
    fn default() -> Self {
        Self {
            identity_toolkit: IDENTITY_TOOLKIT_URL.to_string(),
            firestore: FIRESTORE_URL.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct FirebaseApp {
    project_id: String,
    auth: FirebaseAuth,
    firestore: Firestore,
}

impl FirebaseApp {
    /// Fails before any client is built if one of the six keys is blank.
    pub fn initialize(config: FirebaseConfig) -> Result<Self, FirebaseError> {
        Self::initialize_with_endpoints(config, FirebaseEndpoints::default())
    }

    pub fn initialize_with_endpoints(
        config: FirebaseConfig,
        endpoints: FirebaseEndpoints,
    ) -> Result<Self, FirebaseError> {
        let settings = config.into_settings()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;

        tracing::info!(project_id = %settings.project_id, "firebase initialized");
        Ok(Self {
            auth: FirebaseAuth::new(
                http.clone(),
                endpoints.identity_toolkit,
                settings.api_key.clone(),
            ),
            firestore: Firestore::new(
                http,
                endpoints.firestore,
                settings.project_id.clone(),
                settings.api_key,
            ),
            project_id: settings.project_id,
        })
    }

    /// `Ok(None)` when no Firebase variable is set at all; a partial set is
    /// a configuration error.
    pub fn from_env() -> Result<Option<Self>, FirebaseError> {
        let config = FirebaseConfig::from_env().map_err(|err| FirebaseError::Unreadable {
            reason: format!("{err:#}"),
        })?;
        if config.is_unset() {
            tracing::info!("firebase not configured; firebase routes are disabled");
            return Ok(None);
        }
        Self::initialize(config).map(Some)
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn auth(&self) -> &FirebaseAuth {
        &self.auth
    }

    pub fn firestore(&self) -> &Firestore {
        &self.firestore
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> FirebaseConfig {
        FirebaseConfig {
            api_key: Some("api-key".to_string()),
            auth_domain: Some("joyeria.firebaseapp.com".to_string()),
            project_id: Some("joyeria".to_string()),
            storage_bucket: Some("joyeria.appspot.com".to_string()),
            messaging_sender_id: Some("1234567890".to_string()),
            app_id: Some("1:1234567890:web:abc".to_string()),
        }
    }

    #[test]
    fn initializes_handles_from_complete_config() {
        let app = FirebaseApp::initialize(full_config()).expect("config is complete");
        assert_eq!(app.project_id(), "joyeria");
        assert_eq!(
            app.firestore().document_url("productos/anillo-01"),
            "https://firestore.googleapis.com/v1/projects/joyeria/databases/(default)/documents/productos/anillo-01"
        );
    }

    #[test]
    fn any_single_blank_key_prevents_initialization() {
        for index in 0..REQUIRED_KEYS.len() {
            let mut config = full_config();
            let blank = if index % 2 == 0 { None } else { Some("  ".to_string()) };
            match index {
                0 => config.api_key = blank,
                1 => config.auth_domain = blank,
                2 => config.project_id = blank,
                3 => config.storage_bucket = blank,
                4 => config.messaging_sender_id = blank,
                _ => config.app_id = blank,
            }

            match FirebaseApp::initialize(config) {
                Err(FirebaseError::MissingConfig { keys }) => {
                    assert_eq!(keys, vec![REQUIRED_KEYS[index]]);
                }
                Err(other) => panic!("unexpected error: {other}"),
                Ok(_) => panic!("key {} was blank but init succeeded", REQUIRED_KEYS[index]),
            }
        }
    }
}
