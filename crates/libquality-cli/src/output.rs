//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use libquality_core::RepositoryCard;
use libquality_core::view::{SUBTITLE, TITLE};

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print the title block shown above the search form.
pub fn header() {
    println!("{}", TITLE.bold());
    println!("{}", SUBTITLE.dimmed());
    println!();
}

/// Print one repository card.
pub fn card(card: &RepositoryCard) {
    println!("{}  {}", card.title.bold(), "›".dimmed());
    println!("  {}", card.subtitle);
    println!("  {}: {}", "avatar".dimmed(), card.avatar_url);
    println!("  {}: {}", "link".dimmed(), card.link.cyan());
}

/// Print every card, separated by blank lines.
pub fn cards(cards: &[RepositoryCard]) {
    if cards.is_empty() {
        eprintln!("{}", "No repositories searched yet.".dimmed());
        return;
    }

    for (i, c) in cards.iter().enumerate() {
        if i > 0 {
            println!();
        }
        card(c);
    }
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}
