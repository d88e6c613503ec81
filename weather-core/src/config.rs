use crate::error::WeatherError;

/// Environment variable holding the OpenWeather API key.
pub const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";

/// Runtime configuration, read from the process environment.
///
/// A `.env` file, if any, must already have been applied to the environment
/// by the caller; this type never touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
}

impl Config {
    /// Load config from the process environment.
    pub fn from_env() -> Result<Self, WeatherError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load config through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, WeatherError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match lookup(API_KEY_VAR) {
            Some(api_key) if !api_key.is_empty() => Ok(Self { api_key }),
            _ => Err(WeatherError::MissingCredential),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_key_unchanged() {
        let cfg = Config::from_lookup(|_| Some(" dummy-key ".to_string())).unwrap();
        assert_eq!(cfg.api_key, " dummy-key ");
    }

    #[test]
    fn looks_up_the_expected_variable() {
        let cfg = Config::from_lookup(|name| {
            assert_eq!(name, "OPENWEATHER_API_KEY");
            Some("dummy".to_string())
        })
        .unwrap();
        assert_eq!(cfg.api_key, "dummy");
    }

    #[test]
    fn missing_key_is_an_error() {
        let err = Config::from_lookup(|_| None).unwrap_err();
        assert!(matches!(err, WeatherError::MissingCredential));
    }

    #[test]
    fn empty_key_is_an_error() {
        let err = Config::from_lookup(|_| Some(String::new())).unwrap_err();
        assert!(matches!(err, WeatherError::MissingCredential));
    }
}
