//! Error types for the weather service
//!
//! Provides unified error handling using thiserror. The cache itself never
//! fails; these cover request validation and upstream fetches.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Weather Error Enum ==
/// Unified error type for the weather service.
#[derive(Error, Debug)]
pub enum WeatherError {
    /// No city given in the query string
    #[error("City parameter is required")]
    MissingCity,

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Remote source configured without a credential
    #[error("API key is missing")]
    MissingApiKey,

    /// Transport failure talking to the upstream API
    #[error("Upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a failure status or an error payload
    #[error("API error: {0}")]
    Upstream(String),

    /// Upstream body was not valid JSON for the expected shape
    #[error("Malformed upstream payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// Upstream body lacked a required field
    #[error("Missing field in upstream payload: {0}")]
    MissingField(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl WeatherError {
    /// Whether this error came from fetching data rather than from the request.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            WeatherError::MissingApiKey
                | WeatherError::Request(_)
                | WeatherError::Upstream(_)
                | WeatherError::Payload(_)
                | WeatherError::MissingField(_)
        )
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            WeatherError::MissingCity | WeatherError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            WeatherError::Request(_)
            | WeatherError::Upstream(_)
            | WeatherError::Payload(_)
            | WeatherError::MissingField(_) => StatusCode::BAD_GATEWAY,
            WeatherError::MissingApiKey | WeatherError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for WeatherError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if self.is_fetch_error() {
            format!("Failed to fetch weather data: {}", self)
        } else {
            self.to_string()
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the weather service.
pub type Result<T> = std::result::Result<T, WeatherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        let test_cases = vec![
            (WeatherError::MissingCity, StatusCode::BAD_REQUEST),
            (WeatherError::InvalidRequest("bad".to_string()), StatusCode::BAD_REQUEST),
            (WeatherError::MissingApiKey, StatusCode::INTERNAL_SERVER_ERROR),
            (WeatherError::Upstream("401".to_string()), StatusCode::BAD_GATEWAY),
            (WeatherError::MissingField("current".to_string()), StatusCode::BAD_GATEWAY),
            (WeatherError::Internal("boom".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should map to correct HTTP status"
            );
        }
    }

    #[test]
    fn test_payload_error_from_serde() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = WeatherError::from(err);

        assert!(matches!(error, WeatherError::Payload(_)));
        assert!(error.is_fetch_error());
        assert_eq!(error.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_request_errors_are_not_fetch_errors() {
        assert!(!WeatherError::MissingCity.is_fetch_error());
        assert!(!WeatherError::InvalidRequest("x".to_string()).is_fetch_error());
        assert!(!WeatherError::Internal("x".to_string()).is_fetch_error());
    }

    #[test]
    fn test_missing_city_message() {
        assert_eq!(WeatherError::MissingCity.to_string(), "City parameter is required");
    }
}
