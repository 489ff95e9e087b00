//! libquality - search GitHub repositories and keep a local search history.
//!
//! This is a terminal front end over `libquality-core`'s search view. The
//! history lives in a file-backed storage area; lookups go to the LibQuality
//! backend.

mod cli;
mod commands;
mod output;
mod storage;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{dashboard, list, search};
use storage::Context;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    let context = Context::new(cli.api, cli.data_dir);

    match cli.command {
        Commands::Search(args) => search::run(args, &context).await,
        Commands::List(args) => list::run(args, &context),
        Commands::Dashboard(args) => dashboard::run(args, &context).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    // Logs go to stderr; stdout carries the rendered list.
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
