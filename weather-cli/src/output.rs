use std::io::{self, Write};

use weather_core::WeatherReading;

/// Print the three-line report.
pub fn print_weather<W: Write>(mut out: W, reading: &WeatherReading) -> io::Result<()> {
    writeln!(out, "Ciudad: {}", reading.city_label())?;
    writeln!(out, "Temperatura: {}°C", reading.temperature_label())?;
    writeln!(out, "Clima: {}", reading.description_label())?;
    out.flush()
}
