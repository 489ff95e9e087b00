//! List command implementation.

use anyhow::Result;
use clap::Args;

use libquality_core::{load_history, render_list};

use crate::output;
use crate::storage::Context;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print the stored history as JSON instead of cards
    #[arg(long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long, requires = "json")]
    pub pretty: bool,
}

pub fn run(args: ListArgs, context: &Context) -> Result<()> {
    // Read-only: no resolver, so the API URL is never looked at.
    let repositories = load_history(&context.open_store()?);

    if args.json {
        if args.pretty {
            output::json_pretty(&repositories)?;
        } else {
            output::json(&repositories)?;
        }
        return Ok(());
    }

    output::cards(&render_list(&repositories));

    Ok(())
}
