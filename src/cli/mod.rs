//! Command-line interface for todo
//!
//! This module defines the CLI structure using clap derive macros.

use clap::{Parser, Subcommand};

use crate::error::Result;

mod run;

/// todo - scriptable to-do list
///
/// Runs line-oriented task scripts against an in-memory store and prints
/// filtered views and live statistics. State lives for exactly one
/// invocation; nothing is persisted.
#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a config file (defaults to ./.todo.toml when present)
    #[arg(long, global = true, env = "TODO_CONFIG")]
    pub config: Option<std::path::PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress mutation confirmations
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Execute a task script against a fresh in-memory store
    ///
    /// Script commands, one per line: add [text], edit <id> [text],
    /// toggle <id>, delete <id>, clear, filter <mode>, list, stats.
    /// Lines starting with # and blank lines are ignored.
    Run {
        /// Read the script from a file instead of stdin
        #[arg(short, long)]
        file: Option<std::path::PathBuf>,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Run { file } => run::run(run::RunOptions {
                file,
                config: self.config,
                json: self.json,
                quiet: self.quiet,
            }),
        }
    }
}
