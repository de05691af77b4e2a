//! API Module
//!
//! HTTP handlers and routing for the weather service.
//!
//! # Endpoints
//! - `GET /weather?city=NAME` - Current weather for a city
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
