//! Response DTOs for the weather API
//!
//! Defines the structure of outgoing HTTP response bodies.

use axum::{
    http::{header::HeaderName, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::models::WeatherRecord;

/// Header reporting whether the body came from the cache.
pub const CACHE_STATUS_HEADER: &str = "x-cache";

/// Whether a response was served from the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
}

impl CacheStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheStatus::Hit => "HIT",
            CacheStatus::Miss => "MISS",
        }
    }
}

/// Response for `GET /weather`: the record as JSON plus an `x-cache` header.
#[derive(Debug, Clone)]
pub struct WeatherResponse {
    pub status: CacheStatus,
    pub record: WeatherRecord,
}

impl WeatherResponse {
    pub fn hit(record: WeatherRecord) -> Self {
        Self {
            status: CacheStatus::Hit,
            record,
        }
    }

    pub fn miss(record: WeatherRecord) -> Self {
        Self {
            status: CacheStatus::Miss,
            record,
        }
    }
}

impl IntoResponse for WeatherResponse {
    fn into_response(self) -> Response {
        let mut response = Json(self.record).into_response();
        response.headers_mut().insert(
            HeaderName::from_static(CACHE_STATUS_HEADER),
            HeaderValue::from_static(self.status.as_str()),
        );
        response
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
