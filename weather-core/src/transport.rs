use std::{fmt::Debug, time::Duration};

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, warn};

use crate::error::WeatherError;

/// The only network operation the app needs: one GET, whole body in memory.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn get(&self, url: &Url) -> Result<Vec<u8>, WeatherError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self, WeatherError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().map_err(WeatherError::Transport)?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<Vec<u8>, WeatherError> {
        // The query string carries the API key, so only host and path are logged.
        debug!(host = url.host_str().unwrap_or_default(), path = url.path(), "sending GET");

        let res = self.http.get(url.clone()).send().await.map_err(WeatherError::Transport)?;

        let status = res.status();
        if !status.is_success() {
            warn!(%status, "WeatherAPI.com responded with a non-success status");
        }

        // `res` is consumed here; the connection is released on success and error alike.
        let body = res.bytes().await.map_err(WeatherError::BodyRead)?;
        debug!(%status, bytes = body.len(), "response body read");

        Ok(body.to_vec())
    }
}
