mod common;

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use common::{manager, Collected};
use quotesync::remote::{HttpQuoteSource, QuoteSource, SyncOutcome};
use quotesync::storage::MemoryStore;
use quotesync::types::{Quote, QuoteError};
use serde_json::{json, Value};
use url::Url;

type Received = Arc<Mutex<Vec<Value>>>;

async fn posts() -> Json<Value> {
    Json(json!([
        {"userId": 1, "id": 1, "title": "sunt aut facere", "body": "..."},
        {"userId": 1, "id": 2, "title": "qui est esse", "body": "..."}
    ]))
}

async fn broken() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn not_a_list() -> Json<Value> {
    Json(json!({"title": "single object"}))
}

async fn accept(State(received): State<Received>, Json(body): Json<Value>) -> StatusCode {
    received.lock().unwrap().push(body);
    StatusCode::CREATED
}

async fn spawn_server() -> (SocketAddr, Received) {
    let received: Received = Arc::default();
    let app = Router::new()
        .route("/posts", get(posts).post(accept))
        .route("/broken", get(broken).post(broken))
        .route("/object", get(not_a_list))
        .with_state(received.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, received)
}

fn source(addr: SocketAddr, fetch: &str, push: &str) -> HttpQuoteSource {
    let base = format!("http://{}", addr);
    HttpQuoteSource::new(
        Url::parse(&format!("{}{}", base, fetch)).unwrap(),
        Url::parse(&format!("{}{}", base, push)).unwrap(),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn fetch_maps_titles_to_server_quotes() {
    let (addr, _) = spawn_server().await;
    let quotes = source(addr, "/posts", "/posts").fetch().await.unwrap();
    assert_eq!(
        quotes,
        vec![
            Quote::from_server("sunt aut facere"),
            Quote::from_server("qui est esse"),
        ]
    );
}

#[tokio::test]
async fn fetch_rejects_error_status_and_non_array_bodies() {
    let (addr, _) = spawn_server().await;
    assert!(matches!(
        source(addr, "/broken", "/posts").fetch().await,
        Err(QuoteError::Transport(_))
    ));
    assert!(matches!(
        source(addr, "/object", "/posts").fetch().await,
        Err(QuoteError::Transport(_))
    ));
}

#[tokio::test]
async fn push_posts_full_array() {
    let (addr, received) = spawn_server().await;
    let quotes = vec![Quote::new("A", "X"), Quote::from_server("B")];

    source(addr, "/posts", "/posts").push(&quotes).await.unwrap();

    let bodies = received.lock().unwrap().clone();
    assert_eq!(
        bodies,
        vec![json!([
            {"text": "A", "category": "X"},
            {"text": "B", "category": "Server"}
        ])]
    );
    assert!(matches!(
        source(addr, "/posts", "/broken").push(&quotes).await,
        Err(QuoteError::Transport(_))
    ));
}

#[tokio::test]
async fn unreachable_remote_is_reported_not_raised() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let sink = Arc::new(Collected::default());
    let manager = manager(
        Arc::new(MemoryStore::new()),
        Arc::new(source(addr, "/posts", "/posts")),
        sink.clone(),
    );
    manager.start();

    assert_eq!(manager.sync_now().await, SyncOutcome::NoChange);
    let notices = sink.notices.lock().unwrap().clone();
    assert_eq!(
        notices,
        vec![
            ("Failed to fetch quotes from server.".to_string(), true),
            ("No new quotes from server.".to_string(), false),
        ]
    );
    assert_eq!(manager.quotes().len(), 3);

    assert!(!manager.push_now().await);
    assert_eq!(
        sink.last_notice(),
        Some(("Failed to push quotes to server.".to_string(), true))
    );
}

#[tokio::test]
async fn sync_against_live_server_adds_server_category() {
    let (addr, _) = spawn_server().await;
    let sink = Arc::new(Collected::default());
    let manager = manager(
        Arc::new(MemoryStore::new()),
        Arc::new(source(addr, "/posts", "/posts")),
        sink.clone(),
    );
    manager.start();

    assert_eq!(manager.sync_now().await, SyncOutcome::Added(2));
    assert_eq!(manager.sync_now().await, SyncOutcome::NoChange);
    let (_, options) = manager.categories();
    assert_eq!(options.last().map(String::as_str), Some("Server"));
}
