use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;

use crate::error::WeatherError;

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// Source of current-weather payloads.
///
/// Implementations return the raw JSON body on success; field extraction is
/// left to [`crate::model::WeatherReading`].
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, city: &str) -> Result<Value, WeatherError>;
}
