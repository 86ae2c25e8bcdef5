//! Integration tests for registration and login.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The API server running (cargo run -p shoplite-api)
//!
//! Run with: cargo test -p shoplite-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use shoplite_integration_tests::{base_url, unique_email};

/// Register a user and return the response.
async fn register(client: &Client, name: &str, email: &str, password: &str) -> reqwest::Response {
    client
        .post(format!("{}/api/users/register", base_url()))
        .json(&json!({ "name": name, "email": email, "password": password }))
        .send()
        .await
        .expect("Failed to send register request")
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_register_returns_created_user() {
    let client = Client::new();
    let email = unique_email("register");

    let resp = register(&client, "Test User", &email, "password123").await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = resp.json().await.expect("Failed to read response");
    assert_eq!(body["email"], email.as_str());
    assert_eq!(body["name"], "Test User");
    assert!(body["id"].is_number());

    // The password hash must never leak into the response
    assert!(body.get("password").is_none());
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_login_with_correct_password_returns_token() {
    let client = Client::new();
    let email = unique_email("login-ok");

    let resp = register(&client, "Login User", &email, "password123").await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = client
        .post(format!("{}/api/users/login", base_url()))
        .json(&json!({ "email": email, "password": "password123" }))
        .send()
        .await
        .expect("Failed to send login request");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to read response");
    let token = body["token"].as_str().expect("token missing");
    assert!(!token.is_empty());
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_login_with_unknown_email_fails() {
    let client = Client::new();

    let resp = client
        .post(format!("{}/api/users/login", base_url()))
        .json(&json!({ "email": unique_email("never-registered"), "password": "whatever" }))
        .send()
        .await
        .expect("Failed to send login request");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to read response");
    let message = body["error"].as_str().expect("error message missing");
    assert!(message.contains("not found"));
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_login_with_wrong_password_fails() {
    let client = Client::new();
    let email = unique_email("login-bad-pass");

    let resp = register(&client, "Wrong Pass", &email, "password123").await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = client
        .post(format!("{}/api/users/login", base_url()))
        .json(&json!({ "email": email, "password": "hunter2hunter2" }))
        .send()
        .await
        .expect("Failed to send login request");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to read response");
    let message = body["error"].as_str().expect("error message missing");
    assert!(message.contains("incorrect"));
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_register_duplicate_email_conflicts() {
    let client = Client::new();
    let email = unique_email("duplicate");

    let resp = register(&client, "First", &email, "password123").await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = register(&client, "Second", &email, "password456").await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}
