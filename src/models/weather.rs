//! Weather record model
//!
//! The payload the cache stores per city. It is opaque to the cache, which
//! keeps its own insertion time alongside it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current conditions for one city.
///
/// Serialized as `{"city", "temp", "desc", "observed_at"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// City name as requested
    pub city: String,
    /// Temperature in degrees Celsius
    #[serde(rename = "temp")]
    pub temperature: f64,
    /// Short description of the conditions
    #[serde(rename = "desc")]
    pub description: String,
    /// When the data source produced the reading
    pub observed_at: DateTime<Utc>,
}

impl WeatherRecord {
    /// Creates a record observed now.
    pub fn new(city: impl Into<String>, temperature: f64, description: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            temperature,
            description: description.into(),
            observed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_wire_format() {
        let record = WeatherRecord::new("London", 15.5, "Partly cloudy");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["city"], "London");
        assert_eq!(json["temp"], 15.5);
        assert_eq!(json["desc"], "Partly cloudy");
        assert!(json["observed_at"].is_string());
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn test_record_deserialize() {
        let json = r#"{"city":"Oslo","temp":-3.25,"desc":"Cold","observed_at":"2025-03-07T16:00:00Z"}"#;
        let record: WeatherRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.city, "Oslo");
        assert_eq!(record.temperature, -3.25);
        assert_eq!(record.description, "Cold");
        assert_eq!(record.observed_at.to_rfc3339(), "2025-03-07T16:00:00+00:00");
    }
}
