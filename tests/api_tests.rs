// tests/api_tests.rs
#![cfg(feature = "server")]

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use receipt_points::api::{router, AppState};
use receipt_points::{ErrorResponse, PointsResponse, ProcessResponse, ReceiptStore};
use serde_json::{json, Value};
use std::collections::HashSet;
use tower::ServiceExt;

const TARGET_RECEIPT: &str = r#"{
  "retailer": "Target",
  "purchaseDate": "2022-01-01",
  "purchaseTime": "13:01",
  "items": [
    {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
    {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
    {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
    {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
    {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
  ],
  "total": "35.35"
}"#;

fn corner_market_receipt() -> Value {
    json!({
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"}
        ],
        "total": "9.00"
    })
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn post_receipt(app: &Router, body: impl Into<String>) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("POST")
        .uri("/receipts/process")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap();
    send(app, request).await
}

async fn get_points(app: &Router, id: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .uri(format!("/receipts/{}/points", id))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn process_ok(app: &Router, body: impl Into<String>) -> String {
    let (status, body) = post_receipt(app, body).await;
    assert_eq!(status, StatusCode::CREATED);
    serde_json::from_slice::<ProcessResponse>(&body).unwrap().id
}

async fn assert_invalid(app: &Router, body: impl Into<String>) {
    let (status, body) = post_receipt(app, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "The receipt is invalid.");
}

#[tokio::test]
async fn test_process_and_get_points() {
    let app = router(AppState::default());

    let id = process_ok(&app, TARGET_RECEIPT).await;
    let (status, body) = get_points(&app, &id).await;

    assert_eq!(status, StatusCode::OK);
    let points: PointsResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(points.points, 28);
}

#[tokio::test]
async fn test_corner_market_scores_99() {
    let app = router(AppState::default());

    let id = process_ok(&app, corner_market_receipt().to_string()).await;
    let (_, body) = get_points(&app, &id).await;

    let points: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(points, json!({"points": 99}));
}

#[tokio::test]
async fn test_process_response_shape() {
    let app = router(AppState::default());

    let (_, body) = post_receipt(&app, TARGET_RECEIPT).await;
    let value: Value = serde_json::from_slice(&body).unwrap();

    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert!(uuid::Uuid::parse_str(object["id"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let app = router(AppState::default());

    let (status, body) = get_points(&app, "7fb1377b-b223-49d9-a31a-5a02701dd310").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "No receipt found for that ID.");
}

#[tokio::test]
async fn test_empty_items_rejected() {
    let app = router(AppState::default());

    let mut receipt = corner_market_receipt();
    receipt["items"] = json!([]);

    assert_invalid(&app, receipt.to_string()).await;
}

#[tokio::test]
async fn test_each_invalid_field_rejected() {
    let app = router(AppState::default());

    let cases: Vec<(&str, Value)> = vec![
        ("/retailer", json!("Trader Joe's")),
        ("/purchaseDate", json!("2022-3-20")),
        ("/purchaseTime", json!("2:33 PM")),
        ("/items/0/shortDescription", json!("Salt & Vinegar")),
        ("/items/0/price", json!("2.5")),
        ("/total", json!("9")),
    ];

    for (pointer, bad) in cases {
        let mut receipt = corner_market_receipt();
        *receipt.pointer_mut(pointer).unwrap() = bad;
        assert_invalid(&app, receipt.to_string()).await;
    }
}

#[tokio::test]
async fn test_malformed_bodies_rejected() {
    let app = router(AppState::default());

    assert_invalid(&app, "not json").await;
    assert_invalid(&app, "{}").await;

    let mut missing_total = corner_market_receipt();
    missing_total.as_object_mut().unwrap().remove("total");
    assert_invalid(&app, missing_total.to_string()).await;

    let mut numeric_total = corner_market_receipt();
    numeric_total["total"] = json!(9.00);
    assert_invalid(&app, numeric_total.to_string()).await;
}

#[tokio::test]
async fn test_rejected_receipts_are_not_stored() {
    let store = ReceiptStore::new();
    let app = router(AppState::new(store.clone()));

    assert_invalid(&app, "{}").await;
    assert!(store.is_empty());

    process_ok(&app, TARGET_RECEIPT).await;
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_each_receipt_gets_its_own_id() {
    let app = router(AppState::default());

    let mut ids = HashSet::new();
    for _ in 0..5 {
        assert!(ids.insert(process_ok(&app, TARGET_RECEIPT).await));
        assert!(ids.insert(process_ok(&app, corner_market_receipt().to_string()).await));
    }
    assert_eq!(ids.len(), 10);
}

#[tokio::test]
async fn test_health() {
    let app = router(AppState::default());
    process_ok(&app, TARGET_RECEIPT).await;

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value, json!({"status": "ok", "receipts": 1}));
}

#[tokio::test]
async fn test_amounts_wider_than_u64_cents_are_accepted() {
    let app = router(AppState::default());

    let mut receipt = corner_market_receipt();
    receipt["total"] = json!("1000000000000000000000.00");

    let id = process_ok(&app, receipt.to_string()).await;
    let (_, body) = get_points(&app, &id).await;

    // Same as the 9.00 total: the round and quarter bonuses only read the cents
    let points: PointsResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(points.points, 99);
}
