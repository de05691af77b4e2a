//! Weather Cache - city weather over HTTP with a TTL-LRU cache
//!
//! Serves current conditions per city, consulting a size-bounded,
//! time-expiring LRU cache before falling back to a simulated or remote
//! weather source.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod source;

pub use api::AppState;
pub use cache::{SharedCache, TtlLruCache, WeatherCache};
pub use config::Config;
pub use error::WeatherError;
pub use models::WeatherRecord;
pub use source::WeatherSource;
