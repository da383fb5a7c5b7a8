//! Config command: show or change the persisted configuration.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Subcommand;
use colored::Colorize;

use crate::config::Config;

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration.
    Show,
    /// Set a configuration key.
    Set {
        /// One of: data-dir, mock-latency-ms, default-screen.
        key: String,
        value: String,
    },
}

pub fn run(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => show(),
        ConfigAction::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let config = Config::load()?;
    println!("{} {}", "config file:".dimmed(), Config::config_path()?.display());
    println!(
        "{:<18} {}",
        "data-dir".cyan(),
        config
            .data_dir
            .as_ref()
            .map_or_else(|| "(platform default)".to_string(), |d| d.display().to_string())
    );
    println!("{:<18} {}", "mock-latency-ms".cyan(), config.mock_latency_ms);
    println!("{:<18} {}", "default-screen".cyan(), config.default_screen);
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    match key {
        "data-dir" => config.data_dir = Some(PathBuf::from(value)),
        "mock-latency-ms" => {
            config.mock_latency_ms = value
                .parse()
                .map_err(|_| anyhow::anyhow!("mock-latency-ms expects a number, got {value:?}"))?;
        }
        "default-screen" => {
            if crate::tui::Screen::from_name(value).is_none() {
                bail!("Unknown screen {value:?}");
            }
            config.default_screen = value.to_string();
        }
        other => bail!("Unknown config key {other:?}"),
    }
    config.save()?;
    println!("{} {key} = {value}", "updated".bright_green());
    Ok(())
}
