mod api;
mod cli;
mod config;
mod model;
mod services;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Env, Target};

use crate::cli::{Cli, Commands};
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_logging(&args)?;
    cli::run(args).await
}

/// The portal owns the terminal, so its logs go to a file under the data
/// dir; other commands log to stderr as usual.
fn init_logging(args: &Cli) -> Result<()> {
    let env = Env::default().default_filter_or("info");
    let portal = matches!(args.command, None | Some(Commands::Portal { .. }));
    if !portal {
        env_logger::Builder::from_env(env).init();
        return Ok(());
    }

    let config = Config::load()?;
    let path = config.log_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log dir {}", parent.display()))?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    env_logger::Builder::from_env(env)
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
