//! Dashboard command: an interactive search form over the history.
//!
//! Each input line is the full content of the query field and is submitted
//! as typed. Lines starting with `:` are commands.

use anyhow::{Context as _, Result};
use clap::Args;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};

use libquality_core::view::{PLACEHOLDER, SUBMIT_LABEL};

use crate::output;
use crate::storage::{CliView, Context};

#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Do not print the history before the first prompt
    #[arg(long)]
    pub no_list: bool,
}

/// What to do with one line of input.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Quit,
    Help,
    List,
    Unknown(&'a str),
    Submit(&'a str),
}

fn parse_line(line: &str) -> Input<'_> {
    match line {
        ":q" | ":quit" => Input::Quit,
        ":h" | ":help" => Input::Help,
        ":l" | ":list" => Input::List,
        cmd if cmd.starts_with(':') => Input::Unknown(cmd),
        query => Input::Submit(query),
    }
}

pub async fn run(args: DashboardArgs, context: &Context) -> Result<()> {
    let mut view = context.open_view()?;

    output::header();
    if !args.no_list {
        output::cards(&view.render_list());
        println!();
    }
    println!("{}", "Type :help for commands, :quit to exit".dimmed());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        prompt(&view);

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };

        match parse_line(&line) {
            Input::Quit => break,
            Input::Help => help(),
            Input::List => output::cards(&view.render_list()),
            Input::Unknown(cmd) => output::error(&format!("Unknown command: {}", cmd)),
            Input::Submit(query) => submit(&mut view, query).await,
        }
    }

    Ok(())
}

async fn submit(view: &mut CliView, query: &str) {
    if !query.is_empty() {
        eprintln!("{}", "Searching...".dimmed());
    }

    match view.submit_query(query).await {
        Ok(repository) => {
            output::success(&format!("Added {}", repository.full_name));
            println!();
            output::cards(&view.render_list());
        }
        Err(_) => output::error(view.error_message()),
    }
}

fn prompt(view: &CliView) {
    use std::io::Write;

    println!();
    if view.error_message().is_empty() {
        println!("{}", PLACEHOLDER.dimmed());
    }
    print!("{} {} ", SUBMIT_LABEL.bold(), "›".dimmed());
    let _ = std::io::stdout().flush();
}

fn help() {
    println!("Commands:");
    println!("  OWNER/REPOSITORY  - Search and add to the history");
    println!("  :list             - Show the history");
    println!("  :help             - Show this help");
    println!("  :quit             - Exit");
}
