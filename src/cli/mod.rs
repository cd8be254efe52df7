//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::{Parser, Subcommand};

/// Smoke tests for the marketplace web application
#[derive(Parser, Debug)]
#[command(name = "marketplace-smoke")]
#[command(version)]
#[command(about = "Run HTTP smoke probes against a running marketplace server")]
#[command(long_about = None)]
pub struct Args {
    // Defaults to `run` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error); overrides --verbose
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run every probe against the application
    Run(RunArgs),

    /// List the registered probes
    List(ListArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Run(RunArgs::default())
    }
}

/// Arguments for run command
#[derive(Parser, Debug, Default)]
pub struct RunArgs {
    /// Base URL of the running application [default: http://localhost:3000]
    pub base_url: Option<String>,

    /// Output format (text, json, json-pretty) [default: text]
    #[arg(short, long)]
    pub format: Option<String>,

    /// Disable colored PASSED/FAILED markers
    #[arg(long)]
    pub no_color: bool,
}

/// Arguments for list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Show paths, timeouts and accepted status codes
    #[arg(short, long)]
    pub detailed: bool,
}
