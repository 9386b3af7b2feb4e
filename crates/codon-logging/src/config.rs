// ABOUTME: Logging configuration for hosts embedding the position resolver
// ABOUTME: A tracing filter string, a console format, and an optional log file

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How console output is rendered, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleFormat {
    Off,
    #[default]
    Text,
    Pretty,
    Json,
}

impl FromStr for ConsoleFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "off" | "none" => Ok(Self::Off),
            "text" | "compact" => Ok(Self::Text),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => anyhow::bail!(
                "Invalid console format: {other}. Must be one of: off, text, pretty, json"
            ),
        }
    }
}

/// Logging configuration for a host embedding the resolver.
///
/// `filter` is a tracing directive string, the same syntax `RUST_LOG` takes:
/// a bare level ("info") or per-crate directives
/// ("warn,codon_geometry=trace").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
    pub console: ConsoleFormat,
    /// Log file path; file output is disabled when unset.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            console: ConsoleFormat::default(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Default configuration with environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    /// Apply environment overrides: `CODON_LOG` (falling back to `RUST_LOG`)
    /// replaces the filter, `CODON_LOG_FORMAT` the console format, and
    /// `CODON_LOG_FILE` names a log file.
    ///
    /// Unparseable values are reported to stderr and skipped; logging is not
    /// up yet while this runs.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(filter) = env::var("CODON_LOG").or_else(|_| env::var("RUST_LOG"))
            && !filter.is_empty()
        {
            self.filter = filter;
        }

        if let Ok(format) = env::var("CODON_LOG_FORMAT") {
            match format.parse() {
                Ok(format) => self.console = format,
                Err(error) => eprintln!("Ignoring CODON_LOG_FORMAT: {error}"),
            }
        }

        if let Ok(path) = env::var("CODON_LOG_FILE")
            && !path.is_empty()
        {
            self.file = Some(PathBuf::from(path));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.filter, "info");
        assert_eq!(config.console, ConsoleFormat::Text);
        assert_eq!(config.file, None);
    }

    #[test]
    fn test_console_format_parsing() {
        assert_eq!("off".parse::<ConsoleFormat>().unwrap(), ConsoleFormat::Off);
        assert_eq!("TEXT".parse::<ConsoleFormat>().unwrap(), ConsoleFormat::Text);
        assert_eq!(
            "Pretty".parse::<ConsoleFormat>().unwrap(),
            ConsoleFormat::Pretty
        );
        assert_eq!("json".parse::<ConsoleFormat>().unwrap(), ConsoleFormat::Json);

        assert!("verbose".parse::<ConsoleFormat>().is_err());
    }

    #[test]
    fn test_config_round_trips_through_serde() {
        let config = LoggingConfig {
            filter: "warn,codon_geometry=trace".to_string(),
            console: ConsoleFormat::Json,
            file: Some(PathBuf::from("/tmp/codon.log")),
        };

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<LoggingConfig>(&json).unwrap(), config);
    }
}
