//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{dashboard, list, search};

/// Search GitHub repositories through LibQuality and keep a search history.
#[derive(Parser, Debug)]
#[command(name = "libquality")]
#[command(author, version = env!("LIBQUALITY_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// LibQuality backend base URL
    #[arg(
        long,
        global = true,
        env = "LIBQUALITY_API_URL",
        default_value = "http://localhost:3333"
    )]
    pub api: String,

    /// Directory holding the search history (defaults to the platform data dir)
    #[arg(long, global = true, env = "LIBQUALITY_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up a repository and add it to the history
    Search(search::SearchArgs),

    /// Show previously searched repositories
    List(list::ListArgs),

    /// Interactive search form over the history
    Dashboard(dashboard::DashboardArgs),
}
