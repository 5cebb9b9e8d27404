use weather_core::WeatherResponse;

/// `Current Temperature in <name>, <region>: <temp>°C`, two decimals.
pub fn format_current(weather: &WeatherResponse) -> String {
    format!(
        "Current Temperature in {}, {}: {:.2}°C",
        weather.location.name, weather.location.region, weather.current.temp_c
    )
}
