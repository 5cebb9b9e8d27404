use crate::{
    Config, WeatherError, WeatherResponse, provider::weatherapi::WeatherApiProvider,
    transport::ReqwestTransport,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions for a free-text location.
    async fn current(&self, city: &str) -> Result<WeatherResponse, WeatherError>;
}

/// Construct the WeatherAPI.com provider over a real HTTP client.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn WeatherProvider>, WeatherError> {
    let transport = ReqwestTransport::new(config.timeout)?;
    Ok(Box::new(WeatherApiProvider::new(config, transport)))
}
