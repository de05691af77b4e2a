//! Request and Response models for the weather API
//!
//! This module defines the weather record handed between the data source,
//! the cache and the HTTP layer, plus the DTOs used for query parsing and
//! response bodies.

pub mod requests;
pub mod responses;
pub mod weather;

// Re-export commonly used types
pub use requests::{WeatherQuery, MAX_CITY_LENGTH};
pub use responses::{CacheStatus, ErrorResponse, HealthResponse, WeatherResponse};
pub use weather::WeatherRecord;
