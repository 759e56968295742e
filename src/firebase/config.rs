use serde::Deserialize;

use super::FirebaseError;
use crate::config::EnvConfig;

pub const REQUIRED_KEYS: [&str; 6] = [
    "REACT_APP_FIREBASE_API_KEY",
    "REACT_APP_FIREBASE_AUTH_DOMAIN",
    "REACT_APP_FIREBASE_PROJECT_ID",
    "REACT_APP_FIREBASE_STORAGE_BUCKET",
    "REACT_APP_FIREBASE_MESSAGING_SENDER_ID",
    "REACT_APP_FIREBASE_APP_ID",
];

/// Raw web-app configuration. Every key is optional here so that a missing
/// one is reported by name instead of as a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FirebaseConfig {
    pub api_key: Option<String>,
    pub auth_domain: Option<String>,
    pub project_id: Option<String>,
    pub storage_bucket: Option<String>,
    pub messaging_sender_id: Option<String>,
    pub app_id: Option<String>,
}

impl EnvConfig for FirebaseConfig {
    const PREFIX: &'static str = "REACT_APP_FIREBASE";
    const TRY_PARSING: bool = false;
}

/// Validated configuration; only the keys the REST clients use are kept.
pub(crate) struct FirebaseSettings {
    pub api_key: String,
    pub project_id: String,
}

impl FirebaseConfig {
    fn values(&self) -> [Option<&str>; 6] {
        [
            self.api_key.as_deref(),
            self.auth_domain.as_deref(),
            self.project_id.as_deref(),
            self.storage_bucket.as_deref(),
            self.messaging_sender_id.as_deref(),
            self.app_id.as_deref(),
        ]
    }

    pub fn missing_keys(&self) -> Vec<&'static str> {
        REQUIRED_KEYS
            .iter()
            .zip(self.values())
            .filter(|(_, value)| value.is_none_or(|value| value.trim().is_empty()))
            .map(|(key, _)| *key)
            .collect()
    }

    pub fn is_unset(&self) -> bool {
        self.missing_keys().len() == REQUIRED_KEYS.len()
    }

    pub(crate) fn into_settings(self) -> Result<FirebaseSettings, FirebaseError> {
        let missing = self.missing_keys();
        if !missing.is_empty() {
            return Err(FirebaseError::MissingConfig { keys: missing });
        }

        match (self.api_key, self.project_id) {
            (Some(api_key), Some(project_id)) => Ok(FirebaseSettings {
                api_key: api_key.trim().to_string(),
                project_id: project_id.trim().to_string(),
            }),
            _ => Err(FirebaseError::MissingConfig {
                keys: vec![REQUIRED_KEYS[0], REQUIRED_KEYS[2]],
            }),
        }
    }
}
