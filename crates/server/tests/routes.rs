use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use sea_orm::Database;
use serde_json::{Value, json};
use tokio::sync::RwLock;
use tower::ServiceExt;

use migration::MigratorTrait;
use server::{ServerState, router};

async fn test_router() -> Router {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = engine::Engine::builder()
        .database(db)
        .build()
        .await
        .unwrap();
    router(ServerState {
        engine: Arc::new(RwLock::new(engine)),
    })
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn create_transaction_with_denominations() {
    let app = test_router().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/transactions",
            json!({
                "kind": "add",
                "reason": "opening float",
                "denominations": { "500": 2 },
                "source": "cash",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    assert_eq!(created["amount_paise"], 100_000);

    let response = app.oneshot(get_request("/drawer")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let drawer = body_json(response).await;
    assert_eq!(drawer["counts"]["500"], 2);
    assert_eq!(drawer["total_paise"], 100_000);
}

#[tokio::test]
async fn invalid_transaction_is_rejected_with_422() {
    let app = test_router().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/transactions",
            json!({ "kind": "add", "amount_paise": 0, "reason": "nothing" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = app
        .oneshot(json_request(
            "POST",
            "/transactions",
            json!({ "kind": "add", "amount_paise": 1000, "reason": "   " }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn list_transactions_applies_filters() {
    let app = test_router().await;

    for (kind, amount, reason) in [
        ("add", 10_000, "morning sale"),
        ("subtract", 4_000, "tea supplies"),
        ("add", 25_000, "afternoon sale"),
    ] {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/transactions",
                json!({ "kind": kind, "amount_paise": amount, "reason": reason }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .clone()
        .oneshot(json_request(
            "GET",
            "/transactions",
            json!({ "kinds": ["add"], "search": "sale" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed = body_json(response).await;
    let transactions = listed["transactions"].as_array().unwrap();
    assert_eq!(transactions.len(), 2);
    // Newest first.
    assert_eq!(transactions[0]["reason"], "afternoon sale");
}

#[tokio::test]
async fn status_round_trip_reports_variance() {
    let app = test_router().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/transactions",
            json!({
                "kind": "add",
                "reason": "opening float",
                "denominations": { "2000": 1 },
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(json_request("POST", "/status", json!({ "kind": "morning" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(json_request("POST", "/status", json!({ "kind": "evening" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let recorded = body_json(response).await;
    assert_eq!(recorded["morning_total_paise"], 200_000);
    assert_eq!(recorded["evening_total_paise"], 200_000);
    assert_eq!(recorded["variance_paise"], 0);

    let response = app.oneshot(get_request("/status/today")).await.unwrap();
    let today = body_json(response).await;
    assert_eq!(today["evening_total_paise"], 200_000);
}

#[tokio::test]
async fn stats_combines_cash_and_balances() {
    let app = test_router().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/transactions",
            json!({
                "kind": "add",
                "reason": "opening float",
                "denominations": { "100": 3 },
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/transactions",
            json!({
                "kind": "add",
                "amount_paise": 50_000,
                "reason": "commission received",
                "source": "csc",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get_request("/stats")).await.unwrap();
    let overview = body_json(response).await;
    assert_eq!(overview["cash_paise"], 30_000);
    assert_eq!(overview["csc_paise"], 50_000);
    assert_eq!(overview["total_paise"], 80_000);
    assert_eq!(overview["lifetime_added_paise"], 80_000);
    assert_eq!(overview["lifetime_removed_paise"], 0);
}

#[tokio::test]
async fn denominations_catalog_is_served() {
    let app = test_router().await;

    let response = app.oneshot(get_request("/denominations")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let catalog = body_json(response).await;
    let denominations = catalog["denominations"].as_array().unwrap();
    assert_eq!(denominations.len(), 11);
    assert_eq!(denominations[0]["id"], "2000");
    assert_eq!(denominations[0]["class"], "note");
}

#[tokio::test]
async fn backup_export_then_import_restores_state() {
    let app = test_router().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/transactions",
            json!({
                "kind": "add",
                "reason": "opening float",
                "denominations": { "500": 4 },
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.clone().oneshot(get_request("/backup")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bundle = body_json(response).await;
    assert_eq!(bundle["cash"]["500"], 4);

    // Restore into a fresh instance.
    let fresh = test_router().await;
    let response = fresh
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/backup")
                .body(Body::from(bundle.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = fresh.oneshot(get_request("/drawer")).await.unwrap();
    let drawer = body_json(response).await;
    assert_eq!(drawer["counts"]["500"], 4);
}

#[tokio::test]
async fn malformed_backup_is_rejected_with_400() {
    let app = test_router().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/backup")
                .body(Body::from("{not a bundle"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
