//! qalloc CLI - runs the Q-learning allocation simulation
//!
//! Prints one line per task on stdout. Logs go to stderr.

// Clippy pedantic allows - these are intentional design choices
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::run::RunArgs;

#[derive(Parser)]
#[command(name = "qalloc")]
#[command(author, version, about = "qalloc - Q-learning task allocator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (defaults to QALLOC_CONFIG, ./qalloc.toml, ~/.config/qalloc/qalloc.toml)
    #[arg(short, long, global = true, env = "QALLOC_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the allocation simulation (default)
    Run(RunArgs),

    /// Configuration inspection
    #[command(subcommand)]
    Config(commands::config::ConfigCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = if cli.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("qalloc={log_level},qalloc_rl={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = config::Config::load(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Run(args)) => commands::run::run(&args, config),
        Some(Commands::Config(cmd)) => commands::config::run(cmd, &config),
        None => commands::run::run(&RunArgs::default(), config),
    }
}
