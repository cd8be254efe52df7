//! Configuration module
//!
//! Resolves run settings from CLI arguments, environment variables and
//! built-in defaults, in that order of precedence.

mod env;

pub use env::{print_env_help, EnvConfig};

use anyhow::{Context, Result};

use crate::cli::{Args, RunArgs};
use crate::output::OutputFormat;
use crate::utils::logger::LogLevel;

/// Local Next.js dev server
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

pub const DEFAULT_FORMAT: &str = "text";

/// Settings for one probe run
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    pub base_url: String,
    pub format: OutputFormat,
    pub colorize: bool,
}

impl RunConfig {
    pub fn resolve(args: &RunArgs, env: &EnvConfig) -> Result<Self> {
        let base_url = args
            .base_url
            .clone()
            .unwrap_or_else(|| env.base_url_or(DEFAULT_BASE_URL));

        let format_name = args
            .format
            .clone()
            .unwrap_or_else(|| env.format_or(DEFAULT_FORMAT));
        let format = OutputFormat::from_str(&format_name)
            .with_context(|| format!("Unknown output format: {format_name}"))?;

        let colorize = !(args.no_color || env.no_color.unwrap_or(false));

        Ok(Self {
            base_url,
            format,
            colorize,
        })
    }
}

/// Log level from `--log-level`, then the environment, then `--verbose`
pub fn log_level(args: &Args, env: &EnvConfig) -> Result<LogLevel> {
    match args.log_level.as_ref().or(env.log_level.as_ref()) {
        Some(name) => {
            LogLevel::from_str(name).with_context(|| format!("Unknown log level: {name}"))
        }
        None => Ok(LogLevel::from_verbose(
            args.verbose || env.verbose.unwrap_or(false),
        )),
    }
}
