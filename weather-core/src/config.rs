use std::time::Duration;

use reqwest::Url;

use crate::error::WeatherError;

/// Environment variable holding the WeatherAPI.com key.
pub const API_KEY_VAR: &str = "WEATHER_API_KEY";

/// Optional override of the current-conditions endpoint.
pub const ENDPOINT_VAR: &str = "WEATHER_API_URL";

/// Optional request timeout in whole seconds. Unset means no timeout.
pub const TIMEOUT_VAR: &str = "WEATHER_TIMEOUT_SECS";

pub const DEFAULT_ENDPOINT: &str = "http://api.weatherapi.com/v1/current.json";

/// Runtime settings, resolved once at startup and handed to the provider.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub endpoint: Url,
    pub timeout: Option<Duration>,
}

// The key must never end up in logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Read the process environment.
    pub fn from_env() -> Result<Self, WeatherError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, WeatherError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or(WeatherError::MissingCredential { var: API_KEY_VAR })?;

        let endpoint = match lookup(ENDPOINT_VAR).filter(|v| !v.trim().is_empty()) {
            Some(value) => parse_endpoint(value.trim())?,
            None => parse_endpoint(DEFAULT_ENDPOINT)?,
        };

        let timeout = lookup(TIMEOUT_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(|v| parse_timeout(&v))
            .transpose()?;

        Ok(Self { api_key, endpoint, timeout })
    }
}

#[cfg(test)]
impl Config {
    /// Build a config from an explicit key, using the default endpoint and no timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self, WeatherError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(WeatherError::MissingCredential { var: API_KEY_VAR });
        }

        Ok(Self { api_key, endpoint: parse_endpoint(DEFAULT_ENDPOINT)?, timeout: None })
    }

    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

fn parse_endpoint(value: &str) -> Result<Url, WeatherError> {
    Url::parse(value).map_err(|e| WeatherError::InvalidEndpoint {
        var: ENDPOINT_VAR,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn parse_timeout(value: &str) -> Result<Duration, WeatherError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(WeatherError::InvalidTimeout { var: TIMEOUT_VAR, value: value.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn missing_key_is_a_config_error() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, WeatherError::MissingCredential { var: API_KEY_VAR }));
        assert!(err.is_config());
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let err = Config::from_lookup(lookup(&[(API_KEY_VAR, "  ")])).unwrap_err();
        assert!(matches!(err, WeatherError::MissingCredential { .. }));

        assert!(Config::new("").is_err());
    }

    #[test]
    fn defaults_when_only_key_is_set() {
        let cfg = Config::from_lookup(lookup(&[(API_KEY_VAR, "KEY")])).expect("config");
        assert_eq!(cfg.api_key, "KEY");
        assert_eq!(cfg.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(cfg.timeout, None);
    }

    #[test]
    fn endpoint_and_timeout_overrides() {
        let cfg = Config::from_lookup(lookup(&[
            (API_KEY_VAR, "KEY"),
            (ENDPOINT_VAR, "http://127.0.0.1:8080/v1/current.json"),
            (TIMEOUT_VAR, "5"),
        ]))
        .expect("config");

        assert_eq!(cfg.endpoint.as_str(), "http://127.0.0.1:8080/v1/current.json");
        assert_eq!(cfg.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn rejects_relative_endpoint() {
        let err = Config::from_lookup(lookup(&[(API_KEY_VAR, "KEY"), (ENDPOINT_VAR, "not a url")]))
            .unwrap_err();
        assert!(matches!(err, WeatherError::InvalidEndpoint { .. }));
        assert!(err.to_string().contains(ENDPOINT_VAR));
    }

    #[test]
    fn rejects_zero_and_garbage_timeout() {
        for bad in ["0", "ten", "-3"] {
            let err = Config::from_lookup(lookup(&[(API_KEY_VAR, "KEY"), (TIMEOUT_VAR, bad)]))
                .unwrap_err();
            assert!(matches!(err, WeatherError::InvalidTimeout { .. }), "value {bad}");
        }
    }

    #[test]
    fn debug_output_redacts_key() {
        let cfg = Config::new("SECRET").expect("config");
        let dbg = format!("{cfg:?}");
        assert!(!dbg.contains("SECRET"));
        assert!(dbg.contains("<redacted>"));
    }
}
