//! Portal command: runs the interactive TUI.

use anyhow::Result;

use crate::config::Config;
use crate::tui::Runtime;

pub async fn run(screen: Option<String>) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(screen) = screen {
        config.default_screen = screen;
    }
    log::info!("starting portal on screen {}", config.default_screen);
    let mut runtime = Runtime::new(&config)?;
    runtime.run().await
}
