use std::{io::Write, process::ExitCode};

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing::debug;
use weather_core::{Config, WeatherProvider, provider_from_config};

use crate::output::format_current;

pub const USAGE: &str = "Usage: weather [city name]";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Print the current temperature for a city")]
pub struct Cli {
    /// City name, passed to WeatherAPI.com as free text, e.g. "London".
    pub city: Option<String>,

    /// Log more on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        // Checked before configuration so a bare `weather` never touches the network.
        let Some(city) = self.city else {
            println!("{USAGE}");
            return Ok(ExitCode::FAILURE);
        };

        let config = Config::from_env().context("Invalid configuration")?;
        debug!(?config, "configuration resolved");

        let provider = provider_from_config(&config).context("Failed to build HTTP client")?;

        let mut stdout = std::io::stdout().lock();
        show(provider.as_ref(), &city, &mut stdout).await?;

        Ok(ExitCode::SUCCESS)
    }
}

/// Fetch and print one weather line. Nothing is written unless the lookup succeeds.
pub async fn show(
    provider: &dyn WeatherProvider,
    city: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let weather = provider
        .current(city)
        .await
        .with_context(|| format!("Error getting weather data for '{city}'"))?;

    writeln!(out, "{}", format_current(&weather)).context("Failed to write to stdout")?;
    Ok(())
}
