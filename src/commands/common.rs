//! Arguments and setup shared by every command.

use clap::Args;
use clap::ValueEnum;
use contrib_calendar::config::{DEFAULT_CACHE_TTL_MINUTES, DEFAULT_DEV_LIMIT, Settings, cache_ttl_from_minutes};
use contrib_calendar::calendar::GITHUB_BASE_URL;
use contrib_calendar::request::split_developers;
use core::time::Duration;

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,
    /// Only error messages
    Error,
    /// Warning and error messages
    Warn,
    /// Info, warning, and error messages
    Info,
    /// Debug and above messages
    Debug,
    /// All messages including trace
    Trace,
}

/// Common arguments shared between the serve and fetch commands
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Comma-separated developers that `*` expands to
    #[arg(long, value_name = "DEVS", env = "DEVS", default_value = "")]
    pub devs_roster: String,

    /// Maximum number of developers in one request
    #[arg(long, value_name = "COUNT", env = "DEV_LIMIT", default_value_t = DEFAULT_DEV_LIMIT)]
    pub dev_limit: usize,

    /// Minutes a scraped month stays cached (at least 1)
    #[arg(long, value_name = "MINUTES", env = "CACHE_TTL_MINUTES", default_value_t = DEFAULT_CACHE_TTL_MINUTES)]
    pub cache_ttl: u64,

    /// Seconds to wait for each calendar request
    #[arg(long, value_name = "SECONDS", env = "REQUEST_TIMEOUT", default_value_t = 10)]
    pub request_timeout: u64,

    /// Host to fetch calendar pages from
    #[arg(long, value_name = "URL", env = "GITHUB_BASE_URL", default_value = GITHUB_BASE_URL)]
    pub base_url: String,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    pub log_level: LogLevel,
}

impl CommonArgs {
    /// Initialize logging and resolve the library settings.
    pub fn init(&self) -> Settings {
        init_logging(self.log_level);

        let settings = Settings {
            base_url: self.base_url.clone(),
            request_timeout: Duration::from_secs(self.request_timeout),
            cache_ttl: cache_ttl_from_minutes(self.cache_ttl),
            dev_limit: self.dev_limit,
            roster: split_developers(&self.devs_roster),
        };

        log::debug!("Settings: {settings:?}");
        settings
    }
}

/// Initialize logger based on log level
fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .init();
}
