//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration (API key from the environment)
//! - Console input for the city name
//! - The OpenWeather current-weather fetcher behind [`WeatherProvider`]
//! - [`WeatherReading`], the typed view over the provider's JSON
//!
//! Every failure surfaces as a [`WeatherError`]; deciding how to report it and
//! which exit status to use is left to the binary.

pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod provider;

pub use config::Config;
pub use error::WeatherError;
pub use model::WeatherReading;
pub use provider::{OpenWeatherProvider, WeatherProvider};
