//! Subcommand implementations.

pub mod dashboard;
pub mod list;
pub mod search;
