//! Query command: run a directory query and print the rows.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::api::{MockDirectory, Query, QueryExecutor};
use crate::config::Config;

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Query text, e.g. "SELECT * FROM usr WHERE lower(department) = ?".
    pub query: String,

    /// Positional parameters, in order.
    #[arg(long = "param", value_name = "VALUE")]
    pub params: Vec<String>,

    /// Print raw JSON rows instead of the summary.
    #[arg(long)]
    pub json: bool,

    /// Skip the configured simulated latency.
    #[arg(long)]
    pub no_latency: bool,
}

pub async fn run(args: QueryArgs) -> Result<()> {
    let config = Config::load()?;
    let latency = if args.no_latency {
        Duration::ZERO
    } else {
        Duration::from_millis(config.mock_latency_ms)
    };
    let directory = MockDirectory::new(latency);

    let mut query = Query::new(&args.query);
    for param in &args.params {
        query = query.with_param(param);
    }

    let start = Instant::now();
    let response = directory.execute(&query).await?;
    let elapsed = start.elapsed();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response.result_set)?);
        return Ok(());
    }

    if response.is_empty() {
        println!("{}", "No rows returned".yellow());
    } else {
        for (index, row) in response.result_set.iter().enumerate() {
            let name = row
                .get("displayname")
                .and_then(|v| v.as_str())
                .unwrap_or("<unnamed>");
            println!("{} {}", format!("{:>3}", index + 1).dimmed(), name.bold());
            println!("    {}", serde_json::to_string(row)?.dimmed());
        }
    }
    println!(
        "{} row(s) in {:.0}ms",
        response.result_set.len().to_string().bright_green(),
        elapsed.as_secs_f64() * 1000.0
    );
    Ok(())
}
