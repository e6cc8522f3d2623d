//! `algor` - runs the classic-algorithm demonstrations.
//!
//! `algor run` executes every demonstration in registration order, printing
//! a banner around each one's output; `algor list` tabulates what is
//! available.

mod commands;
mod demos;
mod output;

use std::fmt;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

/// Output format selection for `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table.
    Table,
    /// Machine-readable JSON.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser)]
#[command(name = "algor", version, about = "Classic algorithm demonstrations")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run every demonstration in sequence (sorts, searches, graphs).
    Run {
        /// Run only the demo with this name (see `algor list`).
        #[arg(long)]
        only: Option<String>,
    },
    /// List the available demonstrations.
    List {
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Run { only } => commands::run::run(only.as_deref()),
        Command::List { format } => commands::list::run(format),
    }
}
