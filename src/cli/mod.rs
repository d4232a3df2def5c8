//! CLI module for the EMR user domain tools
//!
//! Provides subcommands for working with user records from the command
//! line:
//! - `check`: validate user records stored as JSON

pub mod check;

use clap::{Parser, Subcommand};

/// EMR user domain - validate user and person records
#[derive(Parser)]
#[command(name = "emr-user-domain")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate user records from JSON files
    Check(check::CheckArgs),
}
