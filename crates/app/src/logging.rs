//! CLI diagnostics
//!
//! Command output goes to stdout; diagnostics go to stderr so they never mix with tables or
//! order confirmations. Verbosity comes from repeated `-v` flags unless `RUST_LOG` sets
//! explicit directives.

use clap::{ArgAction, Args, ValueEnum};
use thiserror::Error;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, filter::LevelFilter, layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Errors raised while installing the diagnostics subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Another global subscriber is already installed.
    #[error("failed to install log subscriber: {0}")]
    AlreadyInstalled(#[from] tracing_subscriber::util::TryInitError),
}

/// How diagnostics are written to stderr.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// One short line per event, without timestamps.
    Text,

    /// One JSON object per event, for log collectors.
    Json,
}

/// Diagnostic output settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Show more diagnostics (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Diagnostic format
    #[arg(
        long,
        env = "LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Text,
        global = true
    )]
    pub log_format: LogFormat,
}

impl LoggingConfig {
    /// Level used when `RUST_LOG` is unset. Warnings are always shown.
    pub fn level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Install the global subscriber.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed.
    pub fn init(&self) -> Result<(), LoggingError> {
        let filter = EnvFilter::builder()
            .with_default_directive(self.level().into())
            .from_env_lossy();

        tracing_subscriber::registry()
            .with(self.stderr_layer())
            .with(filter)
            .try_init()?;

        Ok(())
    }

    fn stderr_layer(&self) -> Box<dyn Layer<Registry> + Send + Sync> {
        match self.log_format {
            LogFormat::Text => tracing_subscriber::fmt::layer()
                .compact()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stderr)
                .boxed(),
            LogFormat::Json => tracing_subscriber::fmt::layer()
                .json()
                .flatten_event(true)
                .with_writer(std::io::stderr)
                .boxed(),
        }
    }
}
