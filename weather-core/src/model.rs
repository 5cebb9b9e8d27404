use serde::{Deserialize, Deserializer};

use crate::error::WeatherError;

/// Shape of the `current.json` payload.
///
/// Missing keys and `null` values both decode to zero values;
/// only malformed JSON is an error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WeatherResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub location: Location,
    #[serde(deserialize_with = "null_as_default")]
    pub current: CurrentConditions,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Location {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(deserialize_with = "null_as_default")]
    pub lat: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub lon: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CurrentConditions {
    #[serde(deserialize_with = "null_as_default")]
    pub temp_c: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl WeatherResponse {
    /// Parse a raw response body. A bare `null` body yields the zero value.
    pub fn decode(body: &[u8]) -> Result<Self, WeatherError> {
        let parsed: Option<WeatherResponse> = serde_json::from_slice(body)?;
        Ok(parsed.unwrap_or_default())
    }
}
