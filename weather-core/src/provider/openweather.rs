use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::WeatherError;

use super::WeatherProvider;

pub const CURRENT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const UNITS: &str = "metric";
pub const LANG: &str = "es";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    endpoint: String,
    timeout: Duration,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            endpoint: CURRENT_WEATHER_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
            http: Client::new(),
        }
    }

    /// Point the provider at another current-weather URL (e.g. a mock server).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn fetch_current(&self, city: &str) -> Result<Value, WeatherError> {
        debug!(city, endpoint = %self.endpoint, "requesting current weather");

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", UNITS),
                ("lang", LANG),
            ])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(WeatherError::transport)?;

        let status = res.status();
        debug!(%status, "OpenWeather responded");

        match status {
            StatusCode::UNAUTHORIZED => return Err(WeatherError::Unauthorized),
            StatusCode::NOT_FOUND => {
                return Err(WeatherError::NotFound {
                    city: city.to_string(),
                });
            }
            _ => {}
        }

        let body = res.text().await.map_err(WeatherError::transport)?;

        if !status.is_success() {
            warn!(%status, "OpenWeather returned an error status");
            return Err(WeatherError::Provider {
                status,
                message: error_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            WeatherError::Transport(format!("invalid JSON from OpenWeather: {e}"))
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<Value, WeatherError> {
        self.fetch_current(city).await
    }
}

/// OpenWeather error bodies look like `{"cod":"500","message":"..."}`.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_owned))
        .unwrap_or_else(|| truncate_body(body))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
