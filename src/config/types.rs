//! Configuration types and CLI options.

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_USER_AGENT;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
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

/// Audit configuration.
///
/// Doubles as the CLI option set for the binary; the library accepts it
/// constructed programmatically.
///
/// # Examples
///
/// ```no_run
/// use seo_audit::Config;
///
/// let config = Config {
///     url: "example.com".to_string(),
///     keyword: Some("seo audit".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Parser, Debug, Clone)]
#[command(
    name = "seo_audit",
    about = "Fetch a web page (following redirects) and produce a structured SEO analysis report as JSON."
)]
pub struct Config {
    /// URL to audit. The scheme defaults to https:// when omitted.
    pub url: String,

    /// Focus keyword for frequency/density analysis and intent detection.
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// User-Agent header sent with every request.
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Skip the best-effort robots.txt and sitemap discovery.
    #[arg(long)]
    pub no_robots: bool,

    /// Pretty-print the report JSON.
    #[arg(long)]
    pub pretty: bool,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            url: String::new(),
            keyword: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            no_robots: false,
            pretty: false,
            log_level: LogLevel::Info,
        }
    }
}
