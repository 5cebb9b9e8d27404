//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration resolved from the environment
//! - The error taxonomy for a lookup
//! - The WeatherAPI.com provider and the transport seam beneath it
//! - The response model
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod transport;

pub use config::Config;
pub use error::WeatherError;
pub use model::{CurrentConditions, Location, WeatherResponse};
pub use provider::{WeatherProvider, provider_from_config, weatherapi::WeatherApiProvider};
pub use transport::{ReqwestTransport, Transport};
