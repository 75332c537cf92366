use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use route_weather_core::{Config, Endpoint, EndpointRole, engine_from_config};
use tracing::debug;

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "route-weather",
    version,
    about = "Check whether the weather is favorable at both ends of a route"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the AccuWeather API key and response language.
    Configure,

    /// Print the location of the configuration file.
    ConfigPath,

    /// Assess the weather at the start and end of a route.
    Check(CheckArgs),
}

/// Each side is given either by name or by both coordinates.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Start address or place name.
    #[arg(long)]
    pub from: Option<String>,

    /// Start latitude in decimal degrees (used when --from is absent).
    #[arg(long, allow_hyphen_values = true)]
    pub from_lat: Option<String>,

    /// Start longitude in decimal degrees (used when --from is absent).
    #[arg(long, allow_hyphen_values = true)]
    pub from_lon: Option<String>,

    /// End address or place name.
    #[arg(long)]
    pub to: Option<String>,

    /// End latitude in decimal degrees (used when --to is absent).
    #[arg(long, allow_hyphen_values = true)]
    pub to_lat: Option<String>,

    /// End longitude in decimal degrees (used when --to is absent).
    #[arg(long, allow_hyphen_values = true)]
    pub to_lon: Option<String>,

    /// Print both assessments as JSON.
    #[arg(long)]
    pub json: bool,
}

impl CheckArgs {
    fn endpoints(&self) -> Result<(Endpoint, Endpoint), route_weather_core::EngineError> {
        let start = Endpoint::from_parts(
            EndpointRole::Start,
            self.from.as_deref(),
            self.from_lat.as_deref(),
            self.from_lon.as_deref(),
        )?;
        let end = Endpoint::from_parts(
            EndpointRole::End,
            self.to.as_deref(),
            self.to_lat.as_deref(),
            self.to_lon.as_deref(),
        )?;
        Ok((start, end))
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Configure => {
                configure()?;
                Ok(ExitCode::SUCCESS)
            }
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
                Ok(ExitCode::SUCCESS)
            }
            Command::Check(args) => check(args).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    let api_key = Password::new("AccuWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let language = Text::new("Response language:")
        .with_default(&cfg.language)
        .prompt()
        .context("Failed to read language")?;

    cfg.set_api_key(api_key.trim().to_string());
    cfg.language = language.trim().to_string();
    cfg.save()?;

    println!(
        "Configuration saved to {}",
        Config::config_file_path()?.display()
    );
    Ok(())
}

async fn check(args: CheckArgs) -> anyhow::Result<ExitCode> {
    let (start, end) = match args.endpoints() {
        Ok(endpoints) => endpoints,
        Err(err) => {
            eprintln!("{err}");
            return Ok(ExitCode::from(2));
        }
    };

    let config = Config::load_with_env()?;
    let engine = engine_from_config(&config)?;
    debug!(%start, %end, "evaluating route");

    match engine.evaluate(&start, &end).await {
        Ok((start_weather, end_weather)) => {
            if args.json {
                println!("{}", output::to_json(&start_weather, &end_weather)?);
            } else {
                print!("{}", output::render(EndpointRole::Start, &start, &start_weather)?);
                println!();
                print!("{}", output::render(EndpointRole::End, &end, &end_weather)?);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
    }
}
