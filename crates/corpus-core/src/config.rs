//! Configuration structures for the corpus cleaner.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CleanError, CleanResult};
use crate::types::SampleRange;
use crate::vocab;

/// Top-level pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Free-text field holding the ad body.
    #[serde(default = "default_text_field")]
    pub text_field: String,
    /// Categorical field used for grouping.
    #[serde(default = "default_group_field")]
    pub group_field: String,
    /// Numeric price field.
    #[serde(default = "default_price_field")]
    pub price_field: String,
    /// Location field used to harvest region names.
    #[serde(default = "default_location_field")]
    pub location_field: String,
    /// Output field for the extracted year.
    #[serde(default = "default_year_field")]
    pub year_field: String,

    /// Drop-stage switches.
    #[serde(default)]
    pub filters: FilterOptions,

    /// Noise vocabulary for the entity stripper.
    #[serde(default)]
    pub stripper: StripperConfig,

    /// Balancing settings.
    #[serde(default)]
    pub balance: BalanceConfig,

    /// Noise injection settings.
    #[serde(default)]
    pub noise: NoiseConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Random seed (None = seed from entropy).
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_text_field() -> String {
    "model".to_string()
}

fn default_group_field() -> String {
    "label".to_string()
}

fn default_price_field() -> String {
    "price".to_string()
}

fn default_location_field() -> String {
    "location".to_string()
}

fn default_year_field() -> String {
    "year".to_string()
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            text_field: default_text_field(),
            group_field: default_group_field(),
            price_field: default_price_field(),
            location_field: default_location_field(),
            year_field: default_year_field(),
            filters: FilterOptions::default(),
            stripper: StripperConfig::default(),
            balance: BalanceConfig::default(),
            noise: NoiseConfig::default(),
            logging: LoggingConfig::default(),
            seed: None,
        }
    }
}

impl PipelineConfig {
    /// Load a JSON configuration file. Missing keys take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> CleanResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check ranges and field names.
    pub fn validate(&self) -> CleanResult<()> {
        for (name, value) in [
            ("text_field", &self.text_field),
            ("group_field", &self.group_field),
            ("year_field", &self.year_field),
        ] {
            if value.trim().is_empty() {
                return Err(CleanError::config(format!("{name} must not be empty")));
            }
        }
        self.balance.samples.validate()?;
        self.noise.samples.validate()?;
        self.noise.words.validate()?;
        Ok(())
    }
}

/// Switches for the drop stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Drop rows whose text is entirely ASCII.
    #[serde(default = "default_true")]
    pub drop_foreign: bool,
    /// Drop rows with ambiguous year markers or barter keywords.
    #[serde(default = "default_true")]
    pub drop_invalid: bool,
    /// Drop installment-sale ads.
    #[serde(default = "default_true")]
    pub drop_installment: bool,
    /// Report the remaining row count after each stage.
    #[serde(default = "default_true")]
    pub verbose: bool,
}

fn default_true() -> bool {
    true
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            drop_foreign: true,
            drop_invalid: true,
            drop_installment: true,
            verbose: true,
        }
    }
}

/// Vocabulary for the entity stripper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripperConfig {
    /// Base color names (suffix variants are generated).
    #[serde(default = "default_colors")]
    pub colors: Vec<String>,
    /// Suffixes appended to each color.
    #[serde(default = "default_color_suffixes")]
    pub color_suffixes: Vec<String>,
    /// Administrative region names.
    #[serde(default = "default_regions")]
    pub regions: Vec<String>,
    /// Filler and sales-jargon words.
    #[serde(default = "default_boilerplate")]
    pub boilerplate: Vec<String>,
    /// Engine displacement unit spellings.
    #[serde(default = "default_engine_units")]
    pub engine_units: Vec<String>,
    /// Extra structural patterns (regular expressions).
    #[serde(default = "default_mileage_patterns")]
    pub mileage_patterns: Vec<String>,
}

fn default_colors() -> Vec<String> {
    vocab::owned(vocab::COLORS)
}

fn default_color_suffixes() -> Vec<String> {
    vocab::owned(vocab::COLOR_SUFFIXES)
}

fn default_regions() -> Vec<String> {
    vocab::owned(vocab::REGIONS)
}

fn default_boilerplate() -> Vec<String> {
    vocab::owned(vocab::BOILERPLATE)
}

fn default_engine_units() -> Vec<String> {
    vocab::owned(vocab::ENGINE_UNITS)
}

fn default_mileage_patterns() -> Vec<String> {
    vocab::owned(vocab::MILEAGE_PATTERNS)
}

impl Default for StripperConfig {
    fn default() -> Self {
        Self {
            colors: default_colors(),
            color_suffixes: default_color_suffixes(),
            regions: default_regions(),
            boilerplate: default_boilerplate(),
            engine_units: default_engine_units(),
            mileage_patterns: default_mileage_patterns(),
        }
    }
}

/// Balancing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceConfig {
    /// Per-group row count range.
    #[serde(default = "default_balance_samples")]
    pub samples: SampleRange,
}

fn default_balance_samples() -> SampleRange {
    SampleRange { min: 200, max: 400 }
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            samples: default_balance_samples(),
        }
    }
}

/// Noise injection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoiseConfig {
    /// Groups with fewer rows than this receive synthetic rows.
    #[serde(default = "default_min_group_size")]
    pub min_group_size: usize,
    /// Number of synthetic rows per under-represented group.
    #[serde(default = "default_noise_samples")]
    pub samples: SampleRange,
    /// Number of noise words appended per row.
    #[serde(default = "default_noise_words")]
    pub words: SampleRange,
}

fn default_min_group_size() -> usize {
    50
}

fn default_noise_samples() -> SampleRange {
    SampleRange { min: 20, max: 50 }
}

fn default_noise_words() -> SampleRange {
    SampleRange { min: 1, max: 5 }
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            min_group_size: default_min_group_size(),
            samples: default_noise_samples(),
            words: default_noise_words(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format (json or text).
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
