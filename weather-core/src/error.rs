use std::io;

use reqwest::StatusCode;
use thiserror::Error;
use tracing::warn;

/// Every way a single lookup can fail.
///
/// Messages are what the user sees after the `[ERROR]` prefix, so they stay
/// in the same language as the rest of the console output.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// API key absent or empty in the environment.
    #[error("Falta la API key. Define OPENWEATHER_API_KEY en tu archivo .env.")]
    MissingCredential,

    /// City name blank after trimming.
    #[error("Debes ingresar un nombre de ciudad.")]
    EmptyInput,

    /// Provider rejected the API key (401).
    #[error("API key inválida o no autorizada.")]
    Unauthorized,

    /// Provider has no data for the requested city (404).
    #[error("Ciudad '{city}' no encontrada.")]
    NotFound { city: String },

    /// Any other non-2xx status.
    #[error("Error de red o conexión: HTTP {status}: {message}")]
    Provider { status: StatusCode, message: String },

    /// Connection, timeout, DNS or body decoding failure.
    #[error("Error de red o conexión: {0}")]
    Transport(String),

    /// Reading the prompt answer or writing output failed.
    #[error("Error de entrada/salida: {0}")]
    Console(#[from] io::Error),
}

impl WeatherError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Build a `Transport` error from a reqwest failure.
    ///
    /// The URL is stripped because its query string carries the API key.
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        let err = err.without_url();
        let mut description = err.to_string();

        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            description.push_str(": ");
            description.push_str(&cause.to_string());
            source = cause.source();
        }

        warn!(error = %description, "OpenWeather request failed");
        WeatherError::Transport(description)
    }
}
