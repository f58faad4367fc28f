//! Vehicle-ad corpus cleaner command-line interface.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use corpus_core::{LoggingConfig, PipelineConfig};
use std::path::PathBuf;
use tracing::info;

mod commands;

/// Persian vehicle-ad corpus cleaner
#[derive(Debug, Parser)]
#[command(name = "corpus")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (overrides the config file; default info)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Log format (overrides the config file; default text)
    #[arg(long, global = true)]
    log_format: Option<LogFormatArg>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Json,
    Text,
}

impl LogFormatArg {
    fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Normalize a single text
    Normalize {
        /// Input text
        input: String,

        /// Also strip noise vocabulary
        #[arg(long)]
        strip: bool,
    },

    /// Extract the model year from a single text
    Year {
        /// Input text
        input: String,
    },

    /// Drop invalid rows and clean the rest
    Clean {
        /// Input JSON-lines file (- for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output JSON-lines file (- for stdout)
        #[arg(short, long)]
        output: PathBuf,

        /// Pipeline configuration (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Add the input's location names to the region vocabulary
        #[arg(long)]
        locations: bool,

        /// Keep a copy of the original text in this field
        #[arg(long)]
        raw_field: Option<String>,
    },

    /// Resample every group into a row count range
    Balance {
        /// Input JSON-lines file (- for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output JSON-lines file (- for stdout)
        #[arg(short, long)]
        output: PathBuf,

        /// Group field
        #[arg(short, long, default_value = "label")]
        group: String,

        /// Minimum rows per group
        #[arg(long)]
        min: usize,

        /// Maximum rows per group
        #[arg(long)]
        max: usize,

        /// Random seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Grow small groups with noisy copies of their rows
    Noise {
        /// Input JSON-lines file (- for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output JSON-lines file (- for stdout)
        #[arg(short, long)]
        output: PathBuf,

        /// Text field receiving the noise
        #[arg(long, default_value = "model")]
        field: String,

        /// Group field
        #[arg(short, long, default_value = "label")]
        group: String,

        /// Field the noise vocabulary is taken from
        #[arg(long, default_value = "raw")]
        reference_field: String,

        /// Groups with fewer rows than this are augmented
        #[arg(long, default_value = "50")]
        limit: usize,

        /// Minimum synthetic rows per group
        #[arg(long, default_value = "20")]
        min: usize,

        /// Maximum synthetic rows per group
        #[arg(long, default_value = "50")]
        max: usize,

        /// Minimum noise words per row
        #[arg(long, default_value = "1")]
        min_words: usize,

        /// Maximum noise words per row
        #[arg(long, default_value = "5")]
        max_words: usize,

        /// Random seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show version and vocabulary info
    Info,
}

/// Command-line log flags override the config file's `logging` section.
fn log_settings(
    config: &LoggingConfig,
    level: Option<String>,
    format: Option<LogFormatArg>,
) -> LoggingConfig {
    LoggingConfig {
        level: level.unwrap_or_else(|| config.level.clone()),
        format: format.map_or_else(|| config.format.clone(), |f| f.as_str().to_string()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let pipeline = match &cli.command {
        Commands::Clean {
            config: Some(path), ..
        } => PipelineConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        _ => PipelineConfig::default(),
    };

    let logging = log_settings(&pipeline.logging, cli.log_level, cli.log_format);
    runtime::init_logging_from_config(&logging);

    info!(version = env!("CARGO_PKG_VERSION"), "starting corpus CLI");

    match cli.command {
        Commands::Normalize { input, strip } => {
            commands::normalize::run(&input, strip).context("normalization failed")?;
        }
        Commands::Year { input } => {
            commands::year::run(&input).context("year extraction failed")?;
        }
        Commands::Clean {
            input,
            output,
            locations,
            raw_field,
            ..
        } => {
            commands::clean::run(commands::clean::CleanOptions {
                input,
                output,
                config: pipeline,
                locations,
                raw_field,
            })
            .context("cleaning failed")?;
        }
        Commands::Balance {
            input,
            output,
            group,
            min,
            max,
            seed,
        } => {
            commands::balance::run(commands::balance::BalanceOptions {
                input,
                output,
                group,
                min,
                max,
                seed,
            })
            .context("balancing failed")?;
        }
        Commands::Noise {
            input,
            output,
            field,
            group,
            reference_field,
            limit,
            min,
            max,
            min_words,
            max_words,
            seed,
        } => {
            commands::noise::run(commands::noise::NoiseOptions {
                input,
                output,
                field,
                group,
                reference_field,
                limit,
                min,
                max,
                min_words,
                max_words,
                seed,
            })
            .context("noise injection failed")?;
        }
        Commands::Info => {
            commands::info::run();
        }
    }

    Ok(())
}
