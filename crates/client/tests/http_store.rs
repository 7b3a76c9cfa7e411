//! Exercises `HttpProductStore` against an in-process axum server.

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};
use pm_client::HttpProductStore;
use pm_core::{Product, ProductDraft, ProductError, ProductId, ProductStore};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tokio::net::TcpListener;

#[derive(Debug, Clone, PartialEq)]
struct Recorded {
    method: &'static str,
    path: String,
    body: Option<Value>,
}

type Log = Arc<Mutex<Vec<Recorded>>>;

fn record(log: &Log, method: &'static str, path: String, body: Option<Value>) {
    log.lock().unwrap().push(Recorded { method, path, body });
}

async fn list(State(log): State<Log>) -> Json<Value> {
    record(&log, "GET", "/products".into(), None);
    Json(json!([
        {"_id": "a1", "name": "Pen", "price": 2, "description": "Blue pen"},
        {"_id": "b2", "name": "Mug", "price": "5", "description": "Ceramic"}
    ]))
}

async fn create(State(log): State<Log>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    record(&log, "POST", "/products".into(), Some(body.clone()));
    (StatusCode::CREATED, Json(body))
}

async fn update(
    State(log): State<Log>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Json<Value> {
    record(&log, "PUT", format!("/products/{id}"), Some(body.clone()));
    Json(body)
}

async fn remove(State(log): State<Log>, Path(id): Path<String>) -> StatusCode {
    record(&log, "DELETE", format!("/products/{id}"), None);
    StatusCode::NO_CONTENT
}

async fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn recording_server() -> (HttpProductStore, Log) {
    let log: Log = Arc::default();
    let router = Router::new()
        .route("/products", get(list).post(create))
        .route("/products/:id", put(update).delete(remove))
        .with_state(log.clone());

    let base_url = spawn_server(router).await;
    (HttpProductStore::new(base_url).unwrap(), log)
}

#[tokio::test]
async fn list_products_parses_records() {
    let (store, log) = recording_server().await;

    let products = store.list_products().await.unwrap();

    assert_eq!(
        products,
        vec![
            Product::new("a1", "Pen", "2", "Blue pen"),
            Product::new("b2", "Mug", "5", "Ceramic"),
        ]
    );
    assert_eq!(log.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn create_product_posts_exact_body() {
    let (store, log) = recording_server().await;

    store
        .create_product(&ProductDraft::new("Mug", "5", "Ceramic"))
        .await
        .unwrap();

    assert_eq!(
        log.lock().unwrap().clone(),
        vec![Recorded {
            method: "POST",
            path: "/products".into(),
            body: Some(json!({"name": "Mug", "price": "5", "description": "Ceramic"})),
        }]
    );
}

#[tokio::test]
async fn update_product_puts_to_item_path() {
    let (store, log) = recording_server().await;

    store
        .update_product(
            &ProductId::new("a1"),
            &ProductDraft::new("Pen", "3", "Red pen"),
        )
        .await
        .unwrap();

    assert_eq!(
        log.lock().unwrap().clone(),
        vec![Recorded {
            method: "PUT",
            path: "/products/a1".into(),
            body: Some(json!({"name": "Pen", "price": "3", "description": "Red pen"})),
        }]
    );
}

#[tokio::test]
async fn delete_product_hits_item_path() {
    let (store, log) = recording_server().await;

    store.delete_product(&ProductId::new("b2")).await.unwrap();

    assert_eq!(
        log.lock().unwrap().clone(),
        vec![Recorded {
            method: "DELETE",
            path: "/products/b2".into(),
            body: None,
        }]
    );
}

#[tokio::test]
async fn server_error_is_a_remote_error() {
    let router = Router::new().route(
        "/products",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database down") }),
    );
    let store = HttpProductStore::new(spawn_server(router).await).unwrap();

    let err = store.list_products().await.unwrap_err();

    assert_eq!(
        err,
        ProductError::remote("Fetching products", "API error (500): database down")
    );
}

#[tokio::test]
async fn missing_record_is_a_remote_error() {
    let router = Router::new().route("/products/:id", put(|| async { StatusCode::NOT_FOUND }));
    let store = HttpProductStore::new(spawn_server(router).await).unwrap();

    let err = store
        .update_product(&ProductId::new("gone"), &ProductDraft::new("a", "1", "b"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ProductError::remote(
            "Updating product",
            "API error (404): Server returned status 404"
        )
    );
}

#[tokio::test]
async fn malformed_list_is_a_remote_error() {
    let router = Router::new().route("/products", get(|| async { Json(json!({"items": []})) }));
    let store = HttpProductStore::new(spawn_server(router).await).unwrap();

    let err = store.list_products().await.unwrap_err();
    assert!(err.is_remote());
    assert!(err.to_string().starts_with("Fetching products failed: Failed to parse response"));
}

#[tokio::test]
async fn unreachable_host_is_a_remote_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let store = HttpProductStore::new(format!("http://{addr}")).unwrap();
    let err = store.delete_product(&ProductId::new("a1")).await.unwrap_err();

    assert!(err.is_remote());
    assert!(err.to_string().starts_with("Deleting product failed"));
}
