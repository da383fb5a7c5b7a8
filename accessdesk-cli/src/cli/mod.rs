//! Command-line interface.

pub mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "accessdesk", version, about = "Access-governance admin portal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Launch the interactive portal (the default).
    Portal {
        /// Screen to open on, overriding the configured default.
        #[arg(long)]
        screen: Option<String>,
    },
    /// Run a directory query and print the rows.
    Query(commands::query::QueryArgs),
    /// Show or change configuration.
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        None | Some(Commands::Portal { screen: None }) => commands::portal::run(None).await,
        Some(Commands::Portal { screen }) => commands::portal::run(screen).await,
        Some(Commands::Query(args)) => commands::query::run(args).await,
        Some(Commands::Config { action }) => commands::config::run(action),
    }
}
