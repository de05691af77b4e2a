//! API Handlers
//!
//! HTTP request handlers for the weather endpoints.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use tracing::{debug, warn};

use crate::cache::WeatherCache;
use crate::config::Config;
use crate::error::Result;
use crate::models::{HealthResponse, WeatherQuery, WeatherResponse};
use crate::source::{build_source, WeatherSource};

/// Application state shared across all handlers.
///
/// Built once by the composition root and cloned into each request; the
/// cache handle and the source are both reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Weather record cache keyed by city
    pub cache: WeatherCache,
    /// Source consulted on cache misses
    pub source: Arc<dyn WeatherSource>,
}

impl AppState {
    pub fn new(cache: WeatherCache, source: Arc<dyn WeatherSource>) -> Self {
        Self { cache, source }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Sizes the cache and builds the configured data source.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = WeatherCache::new(config.max_entries, config.ttl());
        let source = build_source(config)?;
        Ok(Self::new(cache, source))
    }
}

/// Handler for GET /weather?city=NAME
///
/// Serves a valid cached record if there is one. Otherwise fetches from the
/// source, with no cache lock held, and caches the result only on success.
pub async fn weather_handler(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<WeatherResponse> {
    let city = query.city()?;

    if let Some(record) = state.cache.lookup(city).await {
        debug!(city, "cache hit");
        return Ok(WeatherResponse::hit(record));
    }

    debug!(city, source = state.source.name(), "cache miss, fetching");
    let record = state.source.fetch(city).await.map_err(|e| {
        warn!(city, error = %e, "weather fetch failed");
        e
    })?;

    state.cache.insert(city.to_string(), record.clone()).await;

    Ok(WeatherResponse::miss(record))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
