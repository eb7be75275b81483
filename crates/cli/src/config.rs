//! CLI configuration.

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// How command results are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Output format.
    pub format: OutputFormat,

    /// Whether to emit ANSI colours in text output.
    pub color: bool,

    /// Log filter, used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl CliConfig {
    /// Build the configuration from parsed global flags.
    pub fn new(format: OutputFormat, no_color: bool, log_level: &str) -> Self {
        Self {
            format,
            // JSON output is never coloured.
            color: !no_color && format == OutputFormat::Text,
            log_level: log_level.to_string(),
        }
    }

    /// Apply process-wide settings: colour override and the log subscriber.
    pub fn install(&self) {
        if !self.color {
            colored::control::set_override(false);
        }

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level));

        // Logs go to stderr so they never mix with JSON on stdout.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init();
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}
