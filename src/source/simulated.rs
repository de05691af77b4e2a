//! Simulated weather source
//!
//! Generates plausible readings locally, no network involved.

use std::sync::Mutex;

use async_trait::async_trait;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use super::WeatherSource;
use crate::error::{Result, WeatherError};
use crate::models::WeatherRecord;

/// Upper bound (exclusive) of generated temperatures, °C
const MAX_TEMPERATURE: f64 = 40.0;

/// Random readings: temperature in `[0, 40)` °C, truncated to two decimals,
/// with a description derived from the temperature band.
#[derive(Debug)]
pub struct SimulatedSource {
    rng: Mutex<StdRng>,
}

impl SimulatedSource {
    /// Creates a source seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Creates a deterministic source.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn sample_temperature(&self) -> Result<f64> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| WeatherError::Internal("simulator RNG lock poisoned".to_string()))?;
        let raw: f64 = rng.gen_range(0.0..MAX_TEMPERATURE);
        Ok((raw * 100.0).trunc() / 100.0)
    }
}

impl Default for SimulatedSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeatherSource for SimulatedSource {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn fetch(&self, city: &str) -> Result<WeatherRecord> {
        let temperature = self.sample_temperature()?;
        let description = describe_temperature(temperature);
        debug!(city, temperature, description, "generated simulated reading");
        Ok(WeatherRecord::new(city, temperature, description))
    }
}

/// Maps a temperature in °C to a coarse description.
pub fn describe_temperature(temperature: f64) -> &'static str {
    match temperature {
        t if (0.0..10.0).contains(&t) => "Cold",
        t if (10.0..20.0).contains(&t) => "Cool",
        t if (20.0..30.0).contains(&t) => "Warm",
        t if (30.0..40.0).contains(&t) => "Hot",
        _ => "Unknown",
    }
}
