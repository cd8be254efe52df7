//! Marketplace Smoke - black-box smoke tests for the marketplace web app
//!
//! Issues a fixed sequence of HTTP GET probes against a running server,
//! checks status codes and homepage markers, and exits non-zero if any
//! probe fails.
//!
//! ## Usage
//!
//! ```bash
//! # Probe the local dev server (http://localhost:3000)
//! marketplace-smoke
//!
//! # Probe another deployment, JSON report
//! marketplace-smoke run https://staging.example.com --format json
//!
//! # List the probes
//! marketplace-smoke list --detailed
//! ```

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::debug;

mod cli;
mod config;
mod http;
mod models;
mod output;
mod probes;
mod runner;
mod utils;

use cli::Args;
use config::{EnvConfig, RunConfig};
use output::ResultFormatter;
use runner::ProbeRunner;
use utils::logger::init_logger;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let env = EnvConfig::load();

    init_logger(config::log_level(&args, &env)?);

    if env.has_any() {
        debug!("Environment overrides: {:?}", env);
    }

    match args.command.unwrap_or_default() {
        cli::Command::Run(run_args) => {
            let config = RunConfig::resolve(&run_args, &env)?;
            run_probes(config).await
        }
        cli::Command::List(list_args) => {
            list_probes(list_args);
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn run_probes(config: RunConfig) -> Result<ExitCode> {
    debug!("Resolved run configuration: {:?}", config);

    let mut formatter = ResultFormatter::new(config.format);
    if !config.colorize {
        formatter = formatter.no_color();
    }

    let runner = ProbeRunner::new(&config.base_url, formatter)?;
    let summary = runner.run_all().await;

    println!("{}", runner.formatter().format_summary(&summary));

    Ok(ExitCode::from(summary.exit_code()))
}

fn list_probes(args: cli::ListArgs) {
    println!("{}", ResultFormatter::format_probe_list(args.detailed));

    if args.detailed {
        println!();
        config::print_env_help();
    }
}
