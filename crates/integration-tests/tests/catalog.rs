//! Integration tests for category and product CRUD.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The API server running (cargo run -p shoplite-api)
//!
//! Run with: cargo test -p shoplite-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use shoplite_integration_tests::base_url;

/// Create a category and return its JSON body.
async fn create_category(client: &Client, name: &str) -> Value {
    let resp = client
        .post(format!("{}/api/categories", base_url()))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to create category");

    assert_eq!(resp.status(), StatusCode::CREATED);
    resp.json().await.expect("Failed to read category body")
}

/// Create a product in the given category and return its JSON body.
async fn create_product(client: &Client, category_id: &Value, name: &str) -> Value {
    let resp = client
        .post(format!("{}/api/products", base_url()))
        .json(&json!({
            "name": name,
            "description": "A test product",
            "price": "19.99",
            "stock": 5,
            "category_id": category_id,
            "image_url": "https://example.com/img.png"
        }))
        .send()
        .await
        .expect("Failed to create product");

    assert_eq!(resp.status(), StatusCode::CREATED);
    resp.json().await.expect("Failed to read product body")
}

async fn list(client: &Client, resource: &str) -> Vec<Value> {
    let resp = client
        .get(format!("{}/api/{resource}", base_url()))
        .send()
        .await
        .expect("Failed to list");

    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.expect("Failed to read list body")
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_created_category_listed_exactly_once() {
    let client = Client::new();

    let created = create_category(&client, "Integration Shoes").await;
    let id = created["id"].as_i64().expect("id missing");

    let categories = list(&client, "categories").await;
    let matching = categories
        .iter()
        .filter(|c| c["id"].as_i64() == Some(id))
        .count();
    assert_eq!(matching, 1);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_category_update_roundtrip() {
    let client = Client::new();

    let created = create_category(&client, "Before Rename").await;
    let id = created["id"].as_i64().expect("id missing");

    let resp = client
        .put(format!("{}/api/categories/{id}", base_url()))
        .json(&json!({ "name": "After Rename" }))
        .send()
        .await
        .expect("Failed to update category");

    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = resp.json().await.expect("Failed to read update body");
    assert_eq!(updated["name"], "After Rename");
    assert_eq!(updated["id"].as_i64(), Some(id));
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_update_missing_category_is_not_found() {
    let client = Client::new();

    let resp = client
        .put(format!("{}/api/categories/999999999", base_url()))
        .json(&json!({ "name": "Ghost" }))
        .send()
        .await
        .expect("Failed to send update");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_product_roundtrip_preserves_fields() {
    let client = Client::new();

    let category = create_category(&client, "Roundtrip Category").await;
    let created = create_product(&client, &category["id"], "Roundtrip Product").await;
    let id = created["id"].as_i64().expect("id missing");

    let resp = client
        .get(format!("{}/api/products/{id}", base_url()))
        .send()
        .await
        .expect("Failed to get product");

    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = resp.json().await.expect("Failed to read product body");

    assert_eq!(fetched["name"], "Roundtrip Product");
    assert_eq!(fetched["description"], "A test product");
    assert_eq!(fetched["price"], "19.99");
    assert_eq!(fetched["stock"], 5);
    assert_eq!(fetched["category_id"], category["id"]);
    assert_eq!(fetched["image_url"], "https://example.com/img.png");
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_deleted_product_no_longer_listed() {
    let client = Client::new();

    let category = create_category(&client, "Delete Category").await;
    let created = create_product(&client, &category["id"], "Doomed Product").await;
    let id = created["id"].as_i64().expect("id missing");

    let resp = client
        .delete(format!("{}/api/products/{id}", base_url()))
        .send()
        .await
        .expect("Failed to delete product");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let products = list(&client, "products").await;
    assert!(!products.iter().any(|p| p["id"].as_i64() == Some(id)));
}
