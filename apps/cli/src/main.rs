#![allow(clippy::print_stdout)]

pub mod args;
pub mod commands;

use crate::args::{Cli, Command};
use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use wpt::domain::config::ApiConfig;
use wpt::kernel::config::load_config;
use wpt_logger::{ConsoleTarget, LevelFilter, Logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log = Logger::builder("wpt")
        .console(Some(ConsoleTarget::Stderr))
        .level(if cli.verbose { LevelFilter::TRACE } else { LevelFilter::WARN })
        .init()?;

    let config: ApiConfig = match &cli.config {
        Some(path) => load_config(Some(path))
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ApiConfig::default(),
    };

    match cli.command {
        Command::Resolve { path, links, policy } => {
            print_json(&commands::resolve(config, &path, &links, policy)?)
        },
        Command::Nav { path, signed_in, query } => {
            print_json(&commands::nav(&config, &path, signed_in, query)?)
        },
        Command::Login { path } => print_json(&commands::login(&config, &path)?),
        Command::Tenants => print_json(&commands::tenants(&config)?),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
