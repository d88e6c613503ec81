use serde_json::Value;

/// Marker printed for any field missing from the provider response.
pub const PLACEHOLDER: &str = "-";

/// The three fields shown to the user, pulled from a current-weather payload.
///
/// Each field is looked up independently and kept as display text. A missing
/// field, `null`, or an object/array in its place is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReading {
    pub city: Option<String>,
    pub temperature: Option<String>,
    pub description: Option<String>,
}

impl WeatherReading {
    pub fn from_json(data: &Value) -> Self {
        let field = |pointer: &str| data.pointer(pointer).and_then(scalar_text);

        Self {
            city: field("/name"),
            temperature: field("/main/temp"),
            description: field("/weather/0/description"),
        }
    }

    pub fn city_label(&self) -> String {
        self.city.clone().unwrap_or_else(|| PLACEHOLDER.to_string())
    }

    /// Temperature as the provider sent it (`20`, `22.5`), no unit.
    pub fn temperature_label(&self) -> String {
        self.temperature.clone().unwrap_or_else(|| PLACEHOLDER.to_string())
    }

    /// Description with its first character uppercased.
    pub fn description_label(&self) -> String {
        self.description
            .as_deref()
            .map(capitalize_first)
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }
}

/// Strings verbatim, numbers and booleans through `Display`.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Uppercase the first character and leave the rest exactly as given.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_all_fields() {
        let data = json!({
            "name": "Madrid",
            "main": { "temp": 20 },
            "weather": [{ "description": "soleado" }]
        });
        let reading = WeatherReading::from_json(&data);

        assert_eq!(reading.city_label(), "Madrid");
        assert_eq!(reading.temperature_label(), "20");
        assert_eq!(reading.description_label(), "Soleado");
    }

    #[test]
    fn fractional_temperature_is_kept() {
        let reading = WeatherReading::from_json(&json!({ "main": { "temp": 22.5 } }));
        assert_eq!(reading.temperature_label(), "22.5");
    }

    #[test]
    fn negative_temperature() {
        let reading = WeatherReading::from_json(&json!({ "main": { "temp": -3.25 } }));
        assert_eq!(reading.temperature_label(), "-3.25");
    }

    #[test]
    fn empty_object_yields_placeholders() {
        let reading = WeatherReading::from_json(&json!({}));
        assert_eq!(reading.city_label(), PLACEHOLDER);
        assert_eq!(reading.temperature_label(), PLACEHOLDER);
        assert_eq!(reading.description_label(), PLACEHOLDER);
    }

    #[test]
    fn fields_default_independently() {
        let reading = WeatherReading::from_json(&json!({
            "name": "Lima",
            "weather": []
        }));
        assert_eq!(reading.city_label(), "Lima");
        assert_eq!(reading.temperature_label(), PLACEHOLDER);
        assert_eq!(reading.description_label(), PLACEHOLDER);
    }

    #[test]
    fn scalars_of_other_types_are_printed() {
        let reading = WeatherReading::from_json(&json!({
            "name": 42,
            "main": { "temp": "hot" },
            "weather": [{ "description": true }]
        }));
        assert_eq!(reading.city_label(), "42");
        assert_eq!(reading.temperature_label(), "hot");
        assert_eq!(reading.description_label(), "True");
    }

    #[test]
    fn null_and_containers_are_treated_as_missing() {
        let reading = WeatherReading::from_json(&json!({
            "name": null,
            "main": { "temp": [20] },
            "weather": { "description": "soleado" }
        }));
        assert_eq!(reading.city, None);
        assert_eq!(reading.temperature, None);
        assert_eq!(reading.description, None);
    }

    #[test]
    fn non_object_payload_does_not_panic() {
        let reading = WeatherReading::from_json(&json!([1, 2, 3]));
        assert_eq!(reading.city_label(), PLACEHOLDER);
    }

    #[test]
    fn capitalize_leaves_rest_untouched() {
        assert_eq!(capitalize_first("nubes DISPERSAS"), "Nubes DISPERSAS");
        assert_eq!(capitalize_first("Ya Mayúscula"), "Ya Mayúscula");
        assert_eq!(capitalize_first("ñublado"), "Ñublado");
        assert_eq!(capitalize_first("éxito"), "Éxito");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("-"), "-");
    }
}
