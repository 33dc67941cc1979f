//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
    MAX_RESPONSE_BODY_SIZE,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// Controls how pages are fetched. Scoring itself has no knobs: thresholds and
/// weights are constants.
///
/// # Examples
///
/// ```no_run
/// use page_audit::Config;
///
/// let config = Config {
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Largest response body (in bytes) that will be analyzed
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_body_bytes: MAX_RESPONSE_BODY_SIZE,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Audit a single page and print the JSON report
/// page_audit audit example.com
///
/// # Serve the audit endpoint on port 8080
/// page_audit serve --port 8080
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "page_audit",
    about = "Scores a web page for performance, SEO, security, mobile and accessibility."
)]
pub struct Opt {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT, global = true)]
    pub user_agent: String,

    /// Largest response body (in bytes) that will be analyzed
    #[arg(long, default_value_t = MAX_RESPONSE_BODY_SIZE, global = true)]
    pub max_body_bytes: usize,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Audit one page and print the JSON report to stdout
    Audit {
        /// Page to audit (https:// is assumed when no scheme is given)
        url: String,

        /// Print the report on a single line
        #[arg(long)]
        compact: bool,
    },
    /// Serve `GET /api/audit?url=...` over HTTP
    Serve {
        /// Address to bind to
        #[arg(long, default_value = DEFAULT_BIND_ADDR)]
        bind: String,

        /// Port to listen on
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
}

impl From<&Opt> for Config {
    fn from(opt: &Opt) -> Self {
        Self {
            log_level: opt.log_level.clone(),
            log_format: opt.log_format.clone(),
            timeout_seconds: opt.timeout_seconds,
            user_agent: opt.user_agent.clone(),
            max_body_bytes: opt.max_body_bytes,
        }
    }
}
