use reqwest::StatusCode;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use super::FirebaseError;

/// Identity Toolkit REST client.
#[derive(Clone)]
pub struct FirebaseAuth {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseAccount {
    pub local_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub disabled: bool,
}

#[derive(Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<FirebaseAccount>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl FirebaseAuth {
    pub(crate) fn new(http: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn endpoint(&self, action: &str) -> String {
        format!("{}/accounts:{action}", self.base_url)
    }

    /// Resolves an ID token to the account it was issued for.
    pub async fn lookup(&self, id_token: &str) -> Result<FirebaseAccount, FirebaseError> {
        let body = serde_json::json!({ "idToken": id_token });
        let response: LookupResponse = self.post("lookup", &body).await?;
        response
            .users
            .into_iter()
            .next()
            .ok_or_else(|| FirebaseError::UnexpectedResponse("lookup returned no users".into()))
    }

    async fn post<T: DeserializeOwned>(
        &self,
        action: &str,
        body: &serde_json::Value,
    ) -> Result<T, FirebaseError> {
        let response = self
            .http
            .post(self.endpoint(action))
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(rejected(status, response).await);
        }
        Ok(response.json::<T>().await?)
    }
}

pub(crate) async fn rejected(status: StatusCode, response: reqwest::Response) -> FirebaseError {
    let code = match response.json::<ErrorEnvelope>().await {
        Ok(envelope) => envelope.error.message,
        Err(_) => status.canonical_reason().unwrap_or("UNKNOWN").to_string(),
    };
    FirebaseError::Rejected {
        status: status.as_u16(),
        code,
    }
}

#[cfg(test)]
mod tests {
    use axum::{Json, Router, extract::Query, http::StatusCode as AxumStatus};
    use serde_json::{Value, json};
    use std::collections::HashMap;

    use super::*;

    async fn lookup_handler(
        Query(query): Query<HashMap<String, String>>,
        Json(body): Json<Value>,
    ) -> (AxumStatus, Json<Value>) {
        if query.get("key").map(String::as_str) != Some("test-key") {
            return (
                AxumStatus::BAD_REQUEST,
                Json(json!({ "error": { "code": 400, "message": "API_KEY_INVALID" } })),
            );
        }
        if body["idToken"] == "good-token" {
            (
                AxumStatus::OK,
                Json(json!({
                    "users": [{
                        "localId": "uid-1",
                        "email": "cliente@joyeria.test",
                        "emailVerified": true
                    }]
                })),
            )
        } else {
            (
                AxumStatus::BAD_REQUEST,
                Json(json!({ "error": { "code": 400, "message": "INVALID_ID_TOKEN" } })),
            )
        }
    }

    async fn spawn_identity_toolkit() -> String {
        // Only lookup is exercised, so every path answers as the lookup endpoint.
        let app = Router::new().fallback(lookup_handler);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind listener");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve");
        });
        format!("http://{addr}/v1")
    }

    fn client(base_url: String) -> FirebaseAuth {
        FirebaseAuth::new(reqwest::Client::new(), base_url, "test-key".to_string())
    }

    #[tokio::test]
    async fn lookup_returns_account_for_valid_token() {
        let auth = client(spawn_identity_toolkit().await);

        let account = auth.lookup("good-token").await.expect("lookup should succeed");
        assert_eq!(account.local_id, "uid-1");
        assert_eq!(account.email.as_deref(), Some("cliente@joyeria.test"));
        assert!(account.email_verified);
    }

    #[tokio::test]
    async fn lookup_surfaces_firebase_error_code() {
        let auth = client(spawn_identity_toolkit().await);

        match auth.lookup("bad-token").await {
            Err(FirebaseError::Rejected { status, code }) => {
                assert_eq!(status, 400);
                assert_eq!(code, "INVALID_ID_TOKEN");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }
}
