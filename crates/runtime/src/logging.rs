//! Structured logging setup with tracing.
//!
//! Events go to stderr so that commands writing records to stdout stay
//! pipeable.

use corpus_core::LoggingConfig;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter, Layer, Registry,
};

/// Logging format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable text format.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("unknown log format: {s}")),
        }
    }
}

fn output_layer(format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync> {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE);
    match format {
        LogFormat::Text => layer.boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `level` when set. Returns false when a
/// subscriber was already installed; the first one stays in place.
///
/// # Example
/// ```ignore
/// use runtime::logging::{init_logging, LogFormat};
/// init_logging("debug", LogFormat::Text);
/// ```
pub fn init_logging(level: &str, format: LogFormat) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(output_layer(format))
        .with(filter)
        .try_init()
        .is_ok()
}

/// Install the global subscriber described by the `logging` section of a
/// pipeline configuration. An unknown format falls back to text.
pub fn init_logging_from_config(config: &LoggingConfig) -> bool {
    let format = config.format.parse().unwrap_or_default();
    init_logging(&config.level, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("TEXT".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert!("logfmt".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_log_format_default() {
        assert_eq!(LogFormat::default(), LogFormat::Text);
    }

    #[test]
    fn test_second_init_keeps_first_subscriber() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            format: "json".to_string(),
        };
        init_logging_from_config(&config);
        assert!(!init_logging("info", LogFormat::Text));
    }
}
