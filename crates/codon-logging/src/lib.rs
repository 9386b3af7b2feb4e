// ABOUTME: Public API for codon logging infrastructure using tokio-tracing
// ABOUTME: Provides configuration and one-shot initialization for structured logging

pub mod config;
pub mod performance;
pub mod subscriber;

// Re-export tracing macros for convenience
pub use tracing::{Level, Span, debug, error, info, instrument, span, trace, warn};

// Re-export configuration and initialization
pub use config::{ConsoleFormat, LoggingConfig};
pub use subscriber::init_subscriber;

// Re-export performance monitoring utilities
pub use performance::PerfTimer;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;

/// Initialize logging with default configuration.
pub fn init_logging() -> Result<Option<WorkerGuard>> {
    init_subscriber(&LoggingConfig::default())
}

/// Initialize logging with environment variable overrides applied.
///
/// The returned guard must be held for as long as file output should flush;
/// it is `None` when no log file is configured.
pub fn init_logging_from_env() -> Result<Option<WorkerGuard>> {
    init_subscriber(&LoggingConfig::from_env())
}

/// Initialize logging with custom configuration.
pub fn init_logging_with_config(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    init_subscriber(config)
}
