//! Weatherstack weather source
//!
//! Fetches current conditions from the Weatherstack `current` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use super::WeatherSource;
use crate::error::{Result, WeatherError};
use crate::models::WeatherRecord;

/// Description used when the API returns no descriptions.
const NO_DESCRIPTION: &str = "No description available";

/// Client for the Weatherstack API.
#[derive(Debug, Clone)]
pub struct WeatherstackSource {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

/// Body of `GET /current`.
///
/// Weatherstack reports failures with HTTP 200 and an `error` object.
#[derive(Debug, Deserialize)]
struct CurrentResponse {
    #[serde(default)]
    error: Option<ApiError>,
    #[serde(default)]
    current: Option<CurrentConditions>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: Option<i64>,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    info: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temperature: f64,
    #[serde(default)]
    weather_descriptions: Vec<String>,
}

impl WeatherstackSource {
    /// Creates a source with its own HTTP client.
    ///
    /// A missing key is accepted here; every fetch then fails with
    /// `MissingApiKey` without contacting the API.
    pub fn new(api_key: Option<String>, base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WeatherError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(client, api_key, base_url))
    }

    /// Creates a source using a preconfigured HTTP client.
    pub fn with_client(client: Client, api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.filter(|k| !k.is_empty()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn parse_response(city: &str, body: &str) -> Result<WeatherRecord> {
        let payload: CurrentResponse = serde_json::from_str(body)?;

        if let Some(error) = payload.error {
            let info = error
                .info
                .or(error.kind)
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(WeatherError::Upstream(match error.code {
                Some(code) => format!("{} (code {})", info, code),
                None => info,
            }));
        }

        let current = payload
            .current
            .ok_or_else(|| WeatherError::MissingField("current".to_string()))?;

        let description = current
            .weather_descriptions
            .into_iter()
            .next()
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());

        Ok(WeatherRecord::new(city, current.temperature, description))
    }
}

#[async_trait]
impl WeatherSource for WeatherstackSource {
    fn name(&self) -> &'static str {
        "weatherstack"
    }

    async fn fetch(&self, city: &str) -> Result<WeatherRecord> {
        let api_key = self.api_key.as_deref().ok_or(WeatherError::MissingApiKey)?;
        let url = format!("{}/current", self.base_url);

        debug!(city, url = %url, "fetching current conditions from Weatherstack");

        let response = self
            .client
            .get(&url)
            .query(&[("access_key", api_key), ("query", city)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(city, %status, "Weatherstack returned non-OK status");
            return Err(WeatherError::Upstream(status.to_string()));
        }

        let body = response.text().await?;
        Self::parse_response(city, &body)
    }
}
