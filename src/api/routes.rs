//! API Routes
//!
//! Configures the Axum router with the weather service endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{health_handler, weather_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /weather?city=NAME` - Current weather for a city, cached
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/weather", get(weather_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::WeatherCache;
    use crate::source::SimulatedSource;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::sync::Arc;
    use std::time::Duration;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let cache = WeatherCache::new(100, Duration::from_secs(1800));
        let state = AppState::new(cache, Arc::new(SimulatedSource::with_seed(1)));
        create_router(state)
    }

    async fn status_of(app: Router, uri: &str) -> StatusCode {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        assert_eq!(status_of(create_test_app(), "/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_weather_endpoint() {
        assert_eq!(
            status_of(create_test_app(), "/weather?city=Dublin").await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn test_weather_missing_city() {
        assert_eq!(
            status_of(create_test_app(), "/weather").await,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(create_test_app(), "/weather?city=").await,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_unknown_route() {
        assert_eq!(
            status_of(create_test_app(), "/nowhere").await,
            StatusCode::NOT_FOUND
        );
    }
}
