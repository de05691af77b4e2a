//! Weather Source Module
//!
//! The data-source capability consulted on cache misses. Two variants exist:
//! an in-process simulator and the Weatherstack HTTP API. Neither knows about
//! the cache.

mod simulated;
mod weatherstack;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{Config, SourceKind};
use crate::error::Result;
use crate::models::WeatherRecord;

pub use simulated::{describe_temperature, SimulatedSource};
pub use weatherstack::WeatherstackSource;

// == Weather Source Trait ==
/// Produces a fresh reading for a city.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Fetches current conditions for `city`. Failures are returned as-is;
    /// there are no retries.
    async fn fetch(&self, city: &str) -> Result<WeatherRecord>;
}

// == Builder ==
/// Builds the source selected by `config`.
pub fn build_source(config: &Config) -> Result<Arc<dyn WeatherSource>> {
    let source: Arc<dyn WeatherSource> = match config.source {
        SourceKind::Simulated => Arc::new(SimulatedSource::new()),
        SourceKind::Weatherstack => Arc::new(WeatherstackSource::new(
            config.weatherstack_api_key.clone(),
            config.weatherstack_base_url.clone(),
            config.fetch_timeout(),
        )?),
    };
    Ok(source)
}
