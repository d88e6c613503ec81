use std::io::{self, Write};

use clap::Parser;
use tracing::debug;
use weather_core::{
    Config, OpenWeatherProvider, WeatherError, WeatherProvider, WeatherReading, input,
};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Show the current weather for a city")]
pub struct Cli {
    /// City name; prompted for interactively when omitted.
    pub city: Option<String>,
}

impl Cli {
    pub async fn run(self) -> Result<(), WeatherError> {
        let config = Config::from_env()?;
        debug!("configuration loaded");

        let city = match self.city {
            Some(city) => input::normalize_city(&city)?,
            None => input::read_city(io::stdin().lock(), io::stdout())?,
        };

        let provider = OpenWeatherProvider::new(config.api_key);
        report(&provider, &city, io::stdout().lock()).await
    }
}

/// Fetch the current weather for `city` and print it to `out`.
pub async fn report<W: Write>(
    provider: &dyn WeatherProvider,
    city: &str,
    out: W,
) -> Result<(), WeatherError> {
    let data = provider.current_weather(city).await?;
    debug!(city, "weather data fetched");

    output::print_weather(out, &WeatherReading::from_json(&data))?;
    Ok(())
}
