//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

use std::env;

/// Environment variable prefix
const ENV_PREFIX: &str = "MARKETPLACE_SMOKE";

/// Environment configuration from environment variables
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// Base URL from MARKETPLACE_SMOKE_BASE_URL
    pub base_url: Option<String>,
    /// Output format from MARKETPLACE_SMOKE_FORMAT
    pub format: Option<String>,
    /// Verbose from MARKETPLACE_SMOKE_VERBOSE
    pub verbose: Option<bool>,
    /// Log level from MARKETPLACE_SMOKE_LOG_LEVEL
    pub log_level: Option<String>,
    /// Color opt-out from MARKETPLACE_SMOKE_NO_COLOR or NO_COLOR
    pub no_color: Option<bool>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(&format!("{ENV_PREFIX}_{name}"));
        let get_bool = |name: &str| get(name).map(|v| parse_bool(&v));

        // NO_COLOR disables color when set to anything non-empty
        let no_color = get_bool("NO_COLOR").or_else(|| {
            lookup("NO_COLOR")
                .filter(|v| !v.is_empty())
                .map(|_| true)
        });

        Self {
            base_url: get("BASE_URL").filter(|v| !v.trim().is_empty()),
            format: get("FORMAT"),
            verbose: get_bool("VERBOSE"),
            log_level: get("LOG_LEVEL"),
            no_color,
        }
    }

    /// Check if any environment variables are set
    pub fn has_any(&self) -> bool {
        self.base_url.is_some()
            || self.format.is_some()
            || self.verbose.is_some()
            || self.log_level.is_some()
            || self.no_color.is_some()
    }

    /// Get base URL with fallback
    pub fn base_url_or(&self, default: &str) -> String {
        self.base_url.clone().unwrap_or_else(|| default.to_string())
    }

    /// Get output format with fallback
    pub fn format_or(&self, default: &str) -> String {
        self.format.clone().unwrap_or_else(|| default.to_string())
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.to_lowercase().as_str(),
        "1" | "true" | "yes" | "on" | "enabled"
    )
}

/// Print all MARKETPLACE_SMOKE environment variables
pub fn print_env_help() {
    println!("Environment Variables:");
    println!();
    println!("  {ENV_PREFIX}_BASE_URL    Application base URL");
    println!("  {ENV_PREFIX}_FORMAT      Output format (text, json, json-pretty)");
    println!("  {ENV_PREFIX}_VERBOSE     Enable debug logging (true/false)");
    println!("  {ENV_PREFIX}_LOG_LEVEL   Log level (trace, debug, info, warn, error)");
    println!("  {ENV_PREFIX}_NO_COLOR    Disable colored output (true/false)");
    println!("  NO_COLOR                      Disable colored output when set");
    println!();
    println!("Example:");
    println!("  export {ENV_PREFIX}_BASE_URL=http://localhost:3000");
    println!("  marketplace-smoke run");
}
