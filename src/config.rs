//! Configuration Module
//!
//! Handles loading server, cache, and data-source configuration from the
//! environment (optionally seeded from a `.env` file).

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use tracing::{debug, warn};

/// Default Weatherstack endpoint.
pub const DEFAULT_WEATHERSTACK_BASE_URL: &str = "http://api.weatherstack.com";

// == Source Kind ==
/// Which data source fills cache misses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// Random readings generated in-process
    #[default]
    Simulated,
    /// Live readings from the Weatherstack API
    Weatherstack,
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simulated" | "simulation" => Ok(SourceKind::Simulated),
            "weatherstack" | "realtime" => Ok(SourceKind::Weatherstack),
            other => Err(format!("unknown weather source '{}'", other)),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Simulated => f.write_str("simulated"),
            SourceKind::Weatherstack => f.write_str("weatherstack"),
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub max_entries: usize,
    /// Entry TTL in seconds
    pub cache_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Data source used on cache misses
    pub source: SourceKind,
    /// Weatherstack access key
    pub weatherstack_api_key: Option<String>,
    /// Weatherstack base URL, without trailing path
    pub weatherstack_base_url: String,
    /// Upstream HTTP timeout in seconds
    pub fetch_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// A `.env` file in the working directory (or a parent) is loaded first
    /// if present. Unparsable values fall back to the default.
    ///
    /// # Environment Variables
    /// - `MAX_ENTRIES` - Maximum cache entries (default: 100)
    /// - `CACHE_TTL` - Entry TTL in seconds (default: 1800)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `WEATHER_SOURCE` - `simulated` or `weatherstack` (default: simulated)
    /// - `WEATHERSTACK_API_KEY` - Weatherstack access key (no default)
    /// - `WEATHERSTACK_BASE_URL` - Weatherstack endpoint
    /// - `FETCH_TIMEOUT` - Upstream timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {}", e);
        }

        let defaults = Self::default();

        Self {
            max_entries: env_or("MAX_ENTRIES", defaults.max_entries),
            cache_ttl: env_or("CACHE_TTL", defaults.cache_ttl),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            source: env_or("WEATHER_SOURCE", defaults.source),
            weatherstack_api_key: env::var("WEATHERSTACK_API_KEY")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            weatherstack_base_url: env::var("WEATHERSTACK_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.weatherstack_base_url),
            fetch_timeout: env_or("FETCH_TIMEOUT", defaults.fetch_timeout),
        }
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: 100,
            cache_ttl: 30 * 60,
            server_port: 8080,
            source: SourceKind::Simulated,
            weatherstack_api_key: None,
            weatherstack_base_url: DEFAULT_WEATHERSTACK_BASE_URL.to_string(),
            fetch_timeout: 10,
        }
    }
}

/// Reads and parses `name`, falling back to `default` when unset or invalid.
fn env_or<T>(name: &str, default: T) -> T
where
    T: FromStr + fmt::Display,
{
    match env::var(name) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                warn!("Ignoring invalid {}={:?}, using {}", name, raw, default);
                default
            }
        },
        Err(_) => default,
    }
}
