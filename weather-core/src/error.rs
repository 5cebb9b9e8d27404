use thiserror::Error;

/// Every way a single weather lookup can fail.
///
/// All variants are terminal: nothing is retried.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("{var} is not set.\nHint: export {var}=<your weatherapi.com key>")]
    MissingCredential { var: &'static str },

    #[error("invalid endpoint URL '{value}' in {var}: {reason}")]
    InvalidEndpoint { var: &'static str, value: String, reason: String },

    #[error("invalid timeout '{value}' in {var}: expected a positive number of seconds")]
    InvalidTimeout { var: &'static str, value: String },

    #[error("failed to send request to WeatherAPI.com")]
    Transport(#[source] reqwest::Error),

    #[error("failed to read WeatherAPI.com response body")]
    BodyRead(#[source] reqwest::Error),

    #[error("failed to parse WeatherAPI.com JSON")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
impl WeatherError {
    /// Configuration problems are detected before any network call.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            WeatherError::MissingCredential { .. }
                | WeatherError::InvalidEndpoint { .. }
                | WeatherError::InvalidTimeout { .. }
        )
    }
}
