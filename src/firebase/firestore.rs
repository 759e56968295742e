use reqwest::StatusCode;
use serde_json::Value;

use super::{FirebaseError, auth::rejected};

/// Read-only Firestore REST handle scoped to the project's default database.
#[derive(Clone)]
pub struct Firestore {
    http: reqwest::Client,
    base_url: String,
    project_id: String,
    api_key: String,
}

impl Firestore {
    pub(crate) fn new(
        http: reqwest::Client,
        base_url: String,
        project_id: String,
        api_key: String,
    ) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            project_id,
            api_key,
        }
    }

    pub fn document_url(&self, path: &str) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}",
            self.base_url,
            self.project_id,
            path.trim_start_matches('/')
        )
    }

    /// Fetches `collection/doc` style paths. A missing document is `Ok(None)`.
    pub async fn get_document(&self, path: &str) -> Result<Option<Value>, FirebaseError> {
        let response = self
            .http
            .get(self.document_url(path))
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json::<Value>().await?)),
            status => Err(rejected(status, response).await),
        }
    }
}
