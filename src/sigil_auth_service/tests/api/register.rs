use fake::{Fake, faker::internet::en::SafeEmail};
use sigil_adapters::http::routes::{ErrorResponse, RegisterHttpResponse};

use crate::helpers::TestApp;

fn get_random_email() -> String {
    SafeEmail().fake()
}

#[tokio::test]
async fn should_return_201_if_valid_input() {
    let app = TestApp::new().await;

    let response = app
        .post_register(&serde_json::json!({
            "email": get_random_email(),
            "password": "longenough",
            "name": "A",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let body = response.json::<RegisterHttpResponse>().await.unwrap();
    assert_eq!(body.message, "User registered successfully");
}

#[tokio::test]
async fn should_return_400_if_invalid_input() {
    let app = TestApp::new().await;
    let email = get_random_email();

    let test_cases = [
        serde_json::json!({ "email": email, "password": "short", "name": "A" }),
        serde_json::json!({ "email": "", "password": "longenough", "name": "A" }),
        serde_json::json!({ "email": "not-an-email", "password": "longenough", "name": "A" }),
        serde_json::json!({ "email": email, "password": "longenough", "name": "" }),
    ];

    for test_case in test_cases {
        let response = app.post_register(&test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {test_case:?}"
        );
    }
}

#[tokio::test]
async fn should_return_400_for_empty_body() {
    let app = TestApp::new().await;

    let response = app.post_raw("/register", "   ").await;

    assert_eq!(response.status().as_u16(), 400);
    let body = response.json::<ErrorResponse>().await.unwrap();
    assert_eq!(body.error, "Request body is empty");
}

#[tokio::test]
async fn should_return_409_if_email_already_exists() {
    let app = TestApp::new().await;
    let body = serde_json::json!({
        "email": get_random_email(),
        "password": "longenough",
        "name": "A",
    });

    let first = app.post_register(&body).await;
    assert_eq!(first.status().as_u16(), 201);

    let second = app.post_register(&body).await;
    assert_eq!(second.status().as_u16(), 409);
    let error = second.json::<ErrorResponse>().await.unwrap();
    assert_eq!(error.error, "User already exists");
}
