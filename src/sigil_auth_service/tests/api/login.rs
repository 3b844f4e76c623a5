use sigil_adapters::http::routes::{ErrorResponse, LoginHttpResponse};
use sigil_core::TokenIssuer;

use crate::helpers::TestApp;

async fn register(app: &TestApp, email: &str, password: &str) {
    let response = app
        .post_register(&serde_json::json!({
            "email": email,
            "password": password,
            "name": "A",
        }))
        .await;
    assert_eq!(response.status().as_u16(), 201);
}

#[tokio::test]
async fn should_return_200_with_bearer_tokens() {
    let app = TestApp::new().await;
    register(&app, "a@x.com", "secret123").await;

    let response = app
        .post_login(&serde_json::json!({
            "email": "a@x.com",
            "password": "secret123",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response
        .json::<LoginHttpResponse>()
        .await
        .expect("Could not deserialize response body to LoginHttpResponse");

    assert_eq!(body.token_type, "Bearer");
    assert!(!body.refresh_token.is_empty());
    assert_ne!(body.access_token, body.refresh_token);
    assert!(app.token_issuer.validate_token(&body.access_token).await.unwrap());
    assert!(!app.token_issuer.validate_token(&body.refresh_token).await.unwrap());
}

#[tokio::test]
async fn should_return_400_for_empty_body() {
    let app = TestApp::new().await;

    let response = app.post_raw("/login", "").await;

    assert_eq!(response.status().as_u16(), 400);
    let body = response.json::<ErrorResponse>().await.unwrap();
    assert_eq!(body.error, "Request body is empty");
}

#[tokio::test]
async fn should_return_400_for_malformed_body() {
    let app = TestApp::new().await;

    for body in ["{", "[]", r#"{"email": "a@x.com"}"#, "not json"] {
        let response = app.post_raw("/login", body).await;
        assert_eq!(response.status().as_u16(), 400, "body: {body}");
        let error = response.json::<ErrorResponse>().await.unwrap();
        assert_eq!(error.error, "Invalid request body");
    }
}

#[tokio::test]
async fn should_return_400_for_empty_fields() {
    let app = TestApp::new().await;

    let test_cases = [
        serde_json::json!({ "email": "", "password": "secret123" }),
        serde_json::json!({ "email": "a@x.com", "password": "" }),
    ];

    for test_case in test_cases {
        let response = app.post_login(&test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {test_case:?}"
        );
    }
}

#[tokio::test]
async fn should_return_401_without_revealing_which_part_was_wrong() {
    let app = TestApp::new().await;
    register(&app, "a@x.com", "secret123").await;

    let unknown = app
        .post_login(&serde_json::json!({
            "email": "nobody@x.com",
            "password": "secret123",
        }))
        .await;
    let mismatch = app
        .post_login(&serde_json::json!({
            "email": "a@x.com",
            "password": "wrong-password",
        }))
        .await;

    assert_eq!(unknown.status().as_u16(), 401);
    assert_eq!(mismatch.status().as_u16(), 401);

    let unknown: serde_json::Value = unknown.json().await.unwrap();
    let mismatch: serde_json::Value = mismatch.json().await.unwrap();
    assert_eq!(unknown, mismatch);
    assert!(unknown.get("access_token").is_none());
}

#[tokio::test]
async fn should_return_401_for_email_that_was_never_registrable() {
    let app = TestApp::new().await;

    for email in ["alice", "a@localhost"] {
        let response = app
            .post_login(&serde_json::json!({
                "email": email,
                "password": "secret123",
            }))
            .await;

        assert_eq!(response.status().as_u16(), 401, "email: {email}");
        let error = response.json::<ErrorResponse>().await.unwrap();
        assert_eq!(error.error, "Invalid credentials");
    }
}
