// ABOUTME: Tracing subscriber initialization and layer composition
// ABOUTME: Builds console and file layers from a LoggingConfig and installs them

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    prelude::*,
    registry::LookupSpan,
};

use crate::config::{ConsoleFormat, LoggingConfig};

/// Create an environment filter from the configured directive string.
pub fn create_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    EnvFilter::try_new(&config.filter)
        .with_context(|| format!("Invalid log filter: {}", config.filter))
}

fn console_layer<S>(format: ConsoleFormat) -> Option<Box<dyn Layer<S> + Send + Sync>>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    match format {
        ConsoleFormat::Off => None,
        ConsoleFormat::Text => Some(fmt::layer().with_target(true).compact().boxed()),
        ConsoleFormat::Pretty => Some(
            fmt::layer()
                .with_target(true)
                .with_span_events(FmtSpan::CLOSE)
                .pretty()
                .boxed(),
        ),
        ConsoleFormat::Json => Some(
            fmt::layer()
                .json()
                .with_target(true)
                .with_span_events(FmtSpan::CLOSE)
                .boxed(),
        ),
    }
}

/// File layer appending to `path` through a non-blocking writer.
///
/// The returned guard flushes buffered events on drop; the host keeps it
/// alive for as long as it wants file output.
fn file_layer<S>(path: &Path) -> Result<(Box<dyn Layer<S> + Send + Sync>, WorkerGuard)>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;
    let (writer, guard) = non_blocking::NonBlockingBuilder::default().finish(file);

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .boxed();

    Ok((layer, guard))
}

/// Initialize the global tracing subscriber with the given configuration.
///
/// Returns the file writer guard when file output is configured; dropping it
/// flushes and stops the writer thread.
pub fn init_subscriber(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = create_env_filter(config)?;

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer(config.console));

    let guard = match &config.file {
        Some(path) => {
            let (layer, guard) = file_layer(path)?;
            registry
                .with(layer)
                .try_init()
                .context("Failed to install tracing subscriber")?;
            Some(guard)
        }
        None => {
            registry
                .try_init()
                .context("Failed to install tracing subscriber")?;
            None
        }
    };

    tracing::info!(
        filter = %config.filter,
        console = ?config.console,
        file = config.file.is_some(),
        "Codon logging initialized"
    );

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tracing_subscriber::Registry;

    #[test]
    fn test_env_filter_accepts_directive_strings() {
        let config = LoggingConfig {
            filter: "warn,codon_geometry=trace".to_string(),
            ..Default::default()
        };
        assert!(create_env_filter(&config).is_ok());

        let broken = LoggingConfig {
            filter: "not=a=filter".to_string(),
            ..Default::default()
        };
        assert!(create_env_filter(&broken).is_err());
    }

    #[test]
    fn test_console_layer_respects_format() {
        assert!(console_layer::<Registry>(ConsoleFormat::Off).is_none());
        assert!(console_layer::<Registry>(ConsoleFormat::Text).is_some());
        assert!(console_layer::<Registry>(ConsoleFormat::Json).is_some());
    }

    #[test]
    fn test_file_layer_creates_parent_and_writes() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("codon.log");

        let (layer, guard) = file_layer::<Registry>(&path).unwrap();
        assert!(temp_dir.path().join("nested").is_dir());

        // Isolated subscriber so the global one cannot interfere
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(rows = 3, "Measurement pass file sink check");
        });
        drop(guard);

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Measurement pass file sink check"));
        assert!(contents.contains("rows"));
    }
}
