use axum::{
    Json, Router,
    body::{self, Body},
    http::{Request, StatusCode, header},
};
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::{Value, json};
use tower::ServiceExt; // for `oneshot`

use joyeria_backend::{
    firebase::{FirebaseApp, FirebaseConfig, FirebaseEndpoints},
    routes::{API_PREFIX, router},
    test_helpers::test_state,
};

// Stands in for the Identity Toolkit `accounts:lookup` endpoint.
async fn fake_lookup(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["idToken"] == "valid-id-token" {
        (
            StatusCode::OK,
            Json(json!({
                "users": [{
                    "localId": "firebase-uid-7",
                    "email": "cliente@joyeria.test",
                    "emailVerified": false
                }]
            })),
        )
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": { "code": 400, "message": "INVALID_ID_TOKEN" } })),
        )
    }
}

async fn firebase_app() -> FirebaseApp {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, Router::new().fallback(fake_lookup))
            .await
            .expect("serve");
    });

    let config = FirebaseConfig {
        api_key: Some("test-key".to_string()),
        auth_domain: Some("joyeria.firebaseapp.com".to_string()),
        project_id: Some("joyeria".to_string()),
        storage_bucket: Some("joyeria.appspot.com".to_string()),
        messaging_sender_id: Some("1234567890".to_string()),
        app_id: Some("1:1234567890:web:abc".to_string()),
    };
    let endpoints = FirebaseEndpoints {
        identity_toolkit: format!("http://{addr}/v1"),
        firestore: format!("http://{addr}/firestore/v1"),
    };
    FirebaseApp::initialize_with_endpoints(config, endpoints).expect("firebase should init")
}

fn session_request(id_token: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("{API_PREFIX}/firebase/session"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "idToken": id_token }).to_string()))
        .expect("request should build")
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read");
    serde_json::from_slice(&bytes).expect("body should be json")
}

#[tokio::test]
async fn valid_id_token_resolves_firebase_account() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let app = router(test_state(db, Some(firebase_app().await)));

    let response = app
        .oneshot(session_request("valid-id-token"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["data"]["uid"], "firebase-uid-7");
    assert_eq!(body["data"]["email"], "cliente@joyeria.test");
    assert_eq!(body["data"]["emailVerified"], false);
}

#[tokio::test]
async fn rejected_id_token_is_unauthorized() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let app = router(test_state(db, Some(firebase_app().await)));

    let response = app
        .oneshot(session_request("forged-token"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = read_json(response).await;
    assert!(
        body["message"]
            .as_str()
            .is_some_and(|message| message.contains("INVALID_ID_TOKEN"))
    );
}
