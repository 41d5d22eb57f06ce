//! Integration tests for the reqwest-backed Uber client.
//!
//! Each test starts a local axum server on an ephemeral port and points the
//! client at it, so requests go over real HTTP:
//! - Trip estimate POST: headers, JSON body, raw passthrough of error bodies
//! - Price estimate GET: query parameters, retry on 5xx, no retry on 4xx
//! - Transport failures surface as network errors, and the GET retries them
//! - Requests that cannot be built are configuration errors, never retried

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use lastmile_core::{RideEstimatePort, RidePortError, TripEstimateRequest};
use lastmile_uber::{DefaultUberClient, UberClientConfig};
use serde_json::{Value, json};

// ============================================================================
// Test server helpers
// ============================================================================

#[derive(Clone, Default)]
struct Captured {
    headers: Arc<Mutex<Vec<HeaderMap>>>,
    bodies: Arc<Mutex<Vec<String>>>,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
    hits: Arc<AtomicUsize>,
}

async fn spawn_server(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr) -> DefaultUberClient {
    let config = UberClientConfig::new()
        .with_base_url(format!("http://{addr}"))
        .with_access_token("access-token")
        .with_server_token("server-token")
        .with_max_retries(2)
        .with_retry_delay(Duration::from_millis(1))
        .with_timeout(Duration::from_secs(5));
    DefaultUberClient::new(&config).unwrap()
}

async fn unauthorized_trip(
    State(captured): State<Captured>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    captured.hits.fetch_add(1, Ordering::SeqCst);
    captured.headers.lock().unwrap().push(headers);
    captured.bodies.lock().unwrap().push(body);
    (
        StatusCode::UNAUTHORIZED,
        r#"{"message":"No authentication provided.","code":"unauthorized"}"#.to_string(),
    )
}

async fn accepted_trip(State(captured): State<Captured>, body: String) -> (StatusCode, String) {
    captured.hits.fetch_add(1, Ordering::SeqCst);
    captured.bodies.lock().unwrap().push(body);
    (
        StatusCode::OK,
        r#"{"fare":{"display":"₹95","currency_code":"INR"},"trip":{"distance_estimate":0.41}}"#
            .to_string(),
    )
}

async fn prices(
    State(captured): State<Captured>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    captured.hits.fetch_add(1, Ordering::SeqCst);
    captured.headers.lock().unwrap().push(headers);
    captured.queries.lock().unwrap().push(query);
    Json(json!({
        "prices": [
            {"localized_display_name": "UberGo", "estimate": "₹120-150", "duration": 600, "distance": 2.1},
            {"localized_display_name": "UberAuto", "estimate": "₹80-100", "duration": 650, "distance": 2.1}
        ]
    }))
}

async fn flaky_prices(State(captured): State<Captured>) -> (StatusCode, Json<Value>) {
    let n = captured.hits.fetch_add(1, Ordering::SeqCst);
    if n == 0 {
        (StatusCode::SERVICE_UNAVAILABLE, Json(json!({})))
    } else {
        (StatusCode::OK, Json(json!({"prices": []})))
    }
}

/// Accept connections and close them before answering, counting each one.
async fn spawn_hangup_server() -> (SocketAddr, Arc<AtomicUsize>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let connections = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&connections);
    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);
            drop(socket);
        }
    });
    (addr, connections)
}

async fn always_status(State(captured): State<Captured>, status: StatusCode) -> StatusCode {
    captured.hits.fetch_add(1, Ordering::SeqCst);
    status
}

// ============================================================================
// Trip estimate POST
// ============================================================================

#[tokio::test]
async fn test_trip_estimate_sends_bearer_and_json() {
    let captured = Captured::default();
    let app = Router::new()
        .route("/v1/guests/trips/estimates", post(unauthorized_trip))
        .with_state(captured.clone());
    let addr = spawn_server(app).await;

    let response = client_for(addr)
        .request_trip_estimate(&TripEstimateRequest::default())
        .await
        .unwrap();

    // Error statuses come back as data, body untouched
    assert_eq!(response.status, 401);
    assert_eq!(
        response.body,
        r#"{"message":"No authentication provided.","code":"unauthorized"}"#
    );

    let headers = captured.headers.lock().unwrap();
    assert_eq!(headers.len(), 1);
    assert_eq!(headers[0]["authorization"], "Bearer access-token");
    assert_eq!(headers[0]["content-type"], "application/json");
    assert!(
        headers[0]["user-agent"]
            .to_str()
            .unwrap()
            .starts_with("lastmile-uber/")
    );

    let body: Value = serde_json::from_str(&captured.bodies.lock().unwrap()[0]).unwrap();
    assert_eq!(
        body,
        json!({
            "pickup": {"latitude": 19.1677053, "longitude": 72.960964},
            "dropoff": {"latitude": 19.1720999, "longitude": 72.956671}
        })
    );
}

#[tokio::test]
async fn test_trip_estimate_success_body_is_verbatim() {
    let captured = Captured::default();
    let app = Router::new()
        .route("/v1/guests/trips/estimates", post(accepted_trip))
        .with_state(captured.clone());
    let addr = spawn_server(app).await;

    let response = client_for(addr)
        .request_trip_estimate(&TripEstimateRequest::default())
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(
        response.body,
        r#"{"fare":{"display":"₹95","currency_code":"INR"},"trip":{"distance_estimate":0.41}}"#
    );
}

#[tokio::test]
async fn test_trip_estimate_server_error_is_not_retried() {
    let captured = Captured::default();
    let app = Router::new()
        .route(
            "/v1/guests/trips/estimates",
            post(|state: State<Captured>| always_status(state, StatusCode::BAD_GATEWAY)),
        )
        .with_state(captured.clone());
    let addr = spawn_server(app).await;

    let response = client_for(addr)
        .request_trip_estimate(&TripEstimateRequest::default())
        .await
        .unwrap();

    assert_eq!(response.status, 502);
    assert_eq!(captured.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_trip_estimate_connection_refused_is_network_error() {
    // Reserve a port, then free it so nothing is listening there
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = client_for(addr)
        .request_trip_estimate(&TripEstimateRequest::default())
        .await;

    assert!(matches!(result, Err(RidePortError::Network { .. })));
}

#[tokio::test]
async fn test_trip_estimate_bad_token_is_configuration_error() {
    let captured = Captured::default();
    let app = Router::new()
        .route("/v1/guests/trips/estimates", post(accepted_trip))
        .with_state(captured.clone());
    let addr = spawn_server(app).await;

    let config = UberClientConfig::new()
        .with_base_url(format!("http://{addr}"))
        .with_access_token("bad\ntoken");
    let client = DefaultUberClient::new(&config).unwrap();

    let result = client
        .request_trip_estimate(&TripEstimateRequest::default())
        .await;

    assert!(matches!(result, Err(RidePortError::Configuration { .. })));
    assert_eq!(captured.hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_trip_estimate_without_token_is_configuration_error() {
    let config = UberClientConfig::new().with_base_url("http://127.0.0.1:9");
    let client = DefaultUberClient::new(&config).unwrap();

    let result = client
        .request_trip_estimate(&TripEstimateRequest::default())
        .await;

    assert!(matches!(result, Err(RidePortError::Configuration { .. })));
}

// ============================================================================
// Price estimate GET
// ============================================================================

#[tokio::test]
async fn test_price_estimates_sends_token_and_query() {
    let captured = Captured::default();
    let app = Router::new()
        .route("/v1.2/estimates/price", get(prices))
        .with_state(captured.clone());
    let addr = spawn_server(app).await;

    let estimates = client_for(addr)
        .price_estimates(&TripEstimateRequest::default())
        .await
        .unwrap();

    assert_eq!(estimates.len(), 2);
    assert_eq!(estimates[0].localized_display_name, "UberGo");
    assert_eq!(estimates[1].duration, 650);

    let headers = captured.headers.lock().unwrap();
    assert_eq!(headers[0]["authorization"], "Token server-token");

    let queries = captured.queries.lock().unwrap();
    assert_eq!(queries[0]["start_latitude"], "19.1677053");
    assert_eq!(queries[0]["start_longitude"], "72.960964");
    assert_eq!(queries[0]["end_latitude"], "19.1720999");
    assert_eq!(queries[0]["end_longitude"], "72.956671");
}

#[tokio::test]
async fn test_price_estimates_retries_server_error() {
    let captured = Captured::default();
    let app = Router::new()
        .route("/v1.2/estimates/price", get(flaky_prices))
        .with_state(captured.clone());
    let addr = spawn_server(app).await;

    let estimates = client_for(addr)
        .price_estimates(&TripEstimateRequest::default())
        .await
        .unwrap();

    assert!(estimates.is_empty());
    assert_eq!(captured.hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_price_estimates_gives_up_after_max_retries() {
    let captured = Captured::default();
    let app = Router::new()
        .route(
            "/v1.2/estimates/price",
            get(|state: State<Captured>| always_status(state, StatusCode::SERVICE_UNAVAILABLE)),
        )
        .with_state(captured.clone());
    let addr = spawn_server(app).await;

    let result = client_for(addr)
        .price_estimates(&TripEstimateRequest::default())
        .await;

    assert!(matches!(result, Err(RidePortError::Api { status: 503 })));
    // First attempt plus two retries
    assert_eq!(captured.hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_price_estimates_client_error_is_not_retried() {
    let captured = Captured::default();
    let app = Router::new()
        .route(
            "/v1.2/estimates/price",
            get(|state: State<Captured>| always_status(state, StatusCode::UNAUTHORIZED)),
        )
        .with_state(captured.clone());
    let addr = spawn_server(app).await;

    let result = client_for(addr)
        .price_estimates(&TripEstimateRequest::default())
        .await;

    assert!(matches!(
        result,
        Err(RidePortError::Unauthorized { status: 401 })
    ));
    assert_eq!(captured.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_price_estimates_bad_token_is_not_retried() {
    let captured = Captured::default();
    let app = Router::new()
        .route("/v1.2/estimates/price", get(prices))
        .with_state(captured.clone());
    let addr = spawn_server(app).await;

    let config = UberClientConfig::new()
        .with_base_url(format!("http://{addr}"))
        .with_server_token("bad\ntoken")
        .with_retry_delay(Duration::from_millis(1));
    let client = DefaultUberClient::new(&config).unwrap();

    let result = client
        .price_estimates(&TripEstimateRequest::default())
        .await;

    assert!(matches!(result, Err(RidePortError::Configuration { .. })));
    assert_eq!(captured.hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_price_estimates_retries_dropped_connections() {
    let (addr, connections) = spawn_hangup_server().await;

    let result = client_for(addr)
        .price_estimates(&TripEstimateRequest::default())
        .await;

    assert!(matches!(result, Err(RidePortError::Network { .. })));
    // First attempt plus two retries, each on a fresh connection
    assert_eq!(connections.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_price_estimates_connection_refused_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = client_for(addr)
        .price_estimates(&TripEstimateRequest::default())
        .await;

    assert!(matches!(result, Err(RidePortError::Network { .. })));
}
