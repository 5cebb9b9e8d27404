use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, info};

use crate::{
    config::Config,
    error::WeatherError,
    model::WeatherResponse,
    transport::{ReqwestTransport, Transport},
};

use super::WeatherProvider;

/// WeatherAPI.com `current.json` client.
#[derive(Clone)]
pub struct WeatherApiProvider<T = ReqwestTransport> {
    api_key: String,
    endpoint: Url,
    transport: T,
}

impl<T: std::fmt::Debug> std::fmt::Debug for WeatherApiProvider<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherApiProvider")
            .field("endpoint", &self.endpoint.as_str())
            .field("transport", &self.transport)
            .finish_non_exhaustive()
    }
}

impl<T: Transport> WeatherApiProvider<T> {
    pub fn new(config: &Config, transport: T) -> Self {
        Self { api_key: config.api_key.clone(), endpoint: config.endpoint.clone(), transport }
    }

    /// `<endpoint>?key=..&q=<city>&aqi=no`, with the city form-encoded.
    pub fn request_url(&self, city: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("key", &self.api_key)
            .append_pair("q", city)
            .append_pair("aqi", "no");
        url
    }
}

#[async_trait]
impl<T: Transport> WeatherProvider for WeatherApiProvider<T> {
    async fn current(&self, city: &str) -> Result<WeatherResponse, WeatherError> {
        info!(city, "fetching current conditions");

        let body = self.transport.get(&self.request_url(city)).await?;
        let parsed = WeatherResponse::decode(&body)?;

        debug!(
            name = %parsed.location.name,
            country = %parsed.location.country,
            temp_c = parsed.current.temp_c,
            "decoded response"
        );
        Ok(parsed)
    }
}
