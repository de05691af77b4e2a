//! Request DTOs for the weather API
//!
//! Defines the structure of incoming query strings.

use serde::Deserialize;

use crate::error::{Result, WeatherError};

/// Maximum accepted city name length in bytes
pub const MAX_CITY_LENGTH: usize = 256;

/// Query string for `GET /weather`
///
/// # Fields
/// - `city`: The city to report on
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherQuery {
    #[serde(default)]
    pub city: Option<String>,
}

impl WeatherQuery {
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
        }
    }

    /// Returns the trimmed city name, or an error if it is missing or too long.
    pub fn city(&self) -> Result<&str> {
        let city = self
            .city
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or(WeatherError::MissingCity)?;

        if city.len() > MAX_CITY_LENGTH {
            return Err(WeatherError::InvalidRequest(format!(
                "City exceeds maximum length of {} bytes",
                MAX_CITY_LENGTH
            )));
        }

        Ok(city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_deserialize() {
        let query: WeatherQuery = serde_json::from_str(r#"{"city": "Lisbon"}"#).unwrap();
        assert_eq!(query.city().unwrap(), "Lisbon");
    }

    #[test]
    fn test_query_missing_city() {
        let query: WeatherQuery = serde_json::from_str("{}").unwrap();
        assert!(matches!(query.city(), Err(WeatherError::MissingCity)));
    }

    #[test]
    fn test_query_blank_city() {
        let query = WeatherQuery::new("   ");
        assert!(matches!(query.city(), Err(WeatherError::MissingCity)));
    }

    #[test]
    fn test_query_trims_city() {
        let query = WeatherQuery::new("  New York ");
        assert_eq!(query.city().unwrap(), "New York");
    }

    #[test]
    fn test_query_city_too_long() {
        let query = WeatherQuery::new("x".repeat(MAX_CITY_LENGTH + 1));
        assert!(matches!(query.city(), Err(WeatherError::InvalidRequest(_))));
    }
}
