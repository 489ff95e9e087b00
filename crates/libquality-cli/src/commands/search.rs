//! Search command implementation.

use anyhow::Result;
use clap::Args;

use crate::output;
use crate::storage::Context;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Repository as OWNER/REPOSITORY, e.g. facebook/react
    #[arg(default_value = "")]
    pub query: String,
}

pub async fn run(args: SearchArgs, context: &Context) -> Result<()> {
    let mut view = context.open_view()?;

    let repository = view.submit_query(args.query).await?;

    output::success(&format!("Added {}", repository.full_name));
    println!();
    output::cards(&view.render_list());

    Ok(())
}
