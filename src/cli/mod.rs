//! CLI definition

use clap::Parser;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - progress lines as the run goes
    #[default]
    Pretty,
    /// JSON format - a single report document at the end
    Json,
}

/// crmseed - populate a CRM test environment with demo company, contact and deals
#[derive(Parser, Debug)]
#[command(name = "crmseed")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// CRM API base URL
    #[arg(long, env = "CRMSEED_API_BASE", hide_env = true)]
    pub api_base: Option<String>,

    /// Pause after each deal request, in milliseconds
    #[arg(long, env = "CRMSEED_DELAY_MS", hide_env = true)]
    pub delay_ms: Option<u64>,

    /// HTTP request timeout, in seconds (none unless set)
    #[arg(long, env = "CRMSEED_TIMEOUT_SECS", hide_env = true)]
    pub timeout_secs: Option<u64>,

    /// Abort on the first failed request or missing identifier
    #[arg(long, env = "CRMSEED_STRICT", hide_env = true)]
    pub strict: bool,

    /// Override config file location
    #[arg(long, env = "CRMSEED_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Output format (pretty, json)
    #[arg(
        long,
        env = "CRMSEED_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(long, env = "CRMSEED_DEBUG", hide_env = true)]
    pub debug: bool,
}
