//! Integration Tests for API Endpoints
//!
//! Tests the full request/response cycle through the public router.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use weather_cache::{
    api::create_router,
    error::Result,
    source::SimulatedSource,
    AppState, WeatherCache, WeatherError, WeatherRecord, WeatherSource,
};

const TTL: Duration = Duration::from_secs(30 * 60);

// == Helper Functions ==

/// Source returning a sequence number as the temperature, so each fetch is
/// distinguishable.
#[derive(Default)]
struct SequenceSource {
    calls: AtomicUsize,
}

#[async_trait]
impl WeatherSource for SequenceSource {
    fn name(&self) -> &'static str {
        "sequence"
    }

    async fn fetch(&self, city: &str) -> Result<WeatherRecord> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(WeatherRecord::new(city, n as f64, "Mild"))
    }
}

struct FailingSource;

#[async_trait]
impl WeatherSource for FailingSource {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn fetch(&self, _city: &str) -> Result<WeatherRecord> {
        Err(WeatherError::Upstream("500 Internal Server Error".to_string()))
    }
}

fn create_test_app() -> Router {
    let cache = WeatherCache::new(100, TTL);
    create_router(AppState::new(cache, Arc::new(SimulatedSource::new())))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Option<String>, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let cache_header = response
        .headers()
        .get("x-cache")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, cache_header, serde_json::from_slice(&bytes).unwrap())
}

// == Weather Endpoint Tests ==

#[tokio::test]
async fn test_weather_endpoint_success() {
    let app = create_test_app();

    let (status, cache, json) = get(&app, "/weather?city=London").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cache.as_deref(), Some("MISS"));
    assert_eq!(json["city"], "London");
    assert!(json["temp"].is_f64());
    assert!(json["desc"].is_string());
    assert!(json["observed_at"].is_string());
}

#[tokio::test]
async fn test_second_request_served_from_cache() {
    let source = Arc::new(SequenceSource::default());
    let app = create_router(AppState::new(WeatherCache::new(100, TTL), source.clone()));

    let (_, first_cache, first) = get(&app, "/weather?city=Accra").await;
    let (status, second_cache, second) = get(&app, "/weather?city=Accra").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first_cache.as_deref(), Some("MISS"));
    assert_eq!(second_cache.as_deref(), Some("HIT"));
    assert_eq!(first, second);
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_city_with_spaces() {
    let app = create_test_app();

    let (status, _, json) = get(&app, "/weather?city=Buenos%20Aires").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["city"], "Buenos Aires");
}

#[tokio::test]
async fn test_expired_entry_is_refetched() {
    let cache = WeatherCache::new(100, Duration::from_secs(1));
    let source = Arc::new(SequenceSource::default());
    let app = create_router(AppState::new(cache.clone(), source.clone()));

    let (_, _, first) = get(&app, "/weather?city=Hanoi").await;
    assert_eq!(first["temp"], 1.0);

    let (_, cache_status, still) = get(&app, "/weather?city=Hanoi").await;
    assert_eq!(cache_status.as_deref(), Some("HIT"));
    assert_eq!(still["temp"], 1.0);

    // Wait for TTL to expire
    tokio::time::sleep(Duration::from_millis(1100)).await;

    let (_, cache_status, fresh) = get(&app, "/weather?city=Hanoi").await;
    assert_eq!(cache_status.as_deref(), Some("MISS"));
    assert_eq!(fresh["temp"], 2.0);
    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    assert_eq!(cache.len().await, 1);
}

#[tokio::test]
async fn test_capacity_evicts_least_recent_city() {
    let cache = WeatherCache::new(2, TTL);
    let source = Arc::new(SequenceSource::default());
    let app = create_router(AppState::new(cache.clone(), source.clone()));

    get(&app, "/weather?city=a").await;
    get(&app, "/weather?city=b").await;
    get(&app, "/weather?city=a").await;
    get(&app, "/weather?city=c").await;

    assert_eq!(cache.len().await, 2);
    assert_eq!(cache.recency_order().await, vec!["c", "a"]);

    let (_, cache_status, _) = get(&app, "/weather?city=b").await;
    assert_eq!(cache_status.as_deref(), Some("MISS"));
    assert_eq!(source.calls.load(Ordering::SeqCst), 4);
}

// == Error Response Tests ==

#[tokio::test]
async fn test_missing_city_parameter() {
    let app = create_test_app();

    let (status, _, json) = get(&app, "/weather").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "City parameter is required");
}

#[tokio::test]
async fn test_city_too_long() {
    let app = create_test_app();
    let uri = format!("/weather?city={}", "x".repeat(300));

    let (status, _, json) = get(&app, &uri).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_fetch_failure_returns_error_and_caches_nothing() {
    let cache = WeatherCache::new(100, TTL);
    let app = create_router(AppState::new(cache.clone(), Arc::new(FailingSource)));

    let (status, cache_status, json) = get(&app, "/weather?city=Lagos").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(cache_status.is_none());
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to fetch weather data"));
    assert!(cache.is_empty().await);
}

// == HEALTH Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let (status, _, json) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
    assert!(json.get("timestamp").is_some());
}

// == Concurrency ==

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_distinct_cities() {
    let cache = WeatherCache::new(50, TTL);
    let app = create_router(AppState::new(cache.clone(), Arc::new(SimulatedSource::new())));

    let handles: Vec<_> = (0..50)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move { get(&app, &format!("/weather?city=city{}", i)).await.0 })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::OK);
    }

    assert_eq!(cache.len().await, 50);
}
