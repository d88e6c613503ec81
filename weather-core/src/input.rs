use std::io::{BufRead, Write};

use crate::error::WeatherError;

pub const CITY_PROMPT: &str = "Ingresa el nombre de la ciudad: ";

/// Prompt for a city on `output` and read one line from `input`.
///
/// End of input counts as an empty answer.
pub fn read_city<R, W>(mut input: R, mut output: W) -> Result<String, WeatherError>
where
    R: BufRead,
    W: Write,
{
    output.write_all(CITY_PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    normalize_city(&line)
}

/// Trim surrounding whitespace and reject blank names.
pub fn normalize_city(raw: &str) -> Result<String, WeatherError> {
    let city = raw.trim();
    if city.is_empty() {
        return Err(WeatherError::EmptyInput);
    }
    Ok(city.to_string())
}
