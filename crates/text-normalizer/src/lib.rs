//! # text-normalizer
//!
//! Rule-based cleanup of Persian vehicle-ad text.
//!
//! This crate provides:
//! - A normalization pipeline (base canonicalization, punctuation, ZWNJ)
//! - Entity stripping of colors, regions, filler words, mileage and engine size
//! - Model-year extraction with Jalali/Gregorian disambiguation
//!
//! # Example
//!
//! ```ignore
//! use text_normalizer::{EntityStripper, Normalizer, extract_year};
//! use corpus_core::CalendarNow;
//!
//! let normalizer = Normalizer::new();
//! let text = normalizer.normalize("پراید، مدل ۱۳۹۸ سفید")?;
//! let stripped = EntityStripper::with_defaults()?.strip(&text);
//! let year = extract_year(&stripped, CalendarNow::new(2024, 1403));
//! assert_eq!(year.map(|y| y.year), Some(2019));
//! ```

pub mod canonical;
pub mod rules;
pub mod strip;
pub mod year;

use std::sync::Arc;

use corpus_core::{BaseNormalizer, CleanResult};
use tracing::instrument;

pub use canonical::PersianCanonicalizer;
pub use rules::{Rule, WhitespaceRule, PUNCTUATION, ZWJ, ZWNJ};
pub use strip::{location_vocabulary, EntityStripper, EntityStripperBuilder, RuleSet};
pub use year::{count_year_markers, extract_year, YearCandidate, YearExtractor, YEAR_MARKER};

/// Text normalizer with configurable rule pipeline.
#[derive(Debug)]
pub struct Normalizer {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// Create a new normalizer with default rules and the Persian canonicalizer.
    pub fn new() -> Self {
        Self::with_base(Arc::new(PersianCanonicalizer))
    }

    /// Create a normalizer with default rules around a custom base primitive.
    pub fn with_base(base: Arc<dyn BaseNormalizer>) -> Self {
        Self {
            rules: rules::default_rules(base),
        }
    }

    /// Create a normalizer with custom rules.
    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Add a rule to the pipeline.
    pub fn add_rule(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Names of the rules, in application order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Normalize a single text field.
    #[instrument(level = "trace", skip(self), fields(input_len = input.len()))]
    pub fn normalize(&self, input: &str) -> CleanResult<String> {
        let mut text = input.to_string();

        // Apply all rules in sequence
        for rule in &self.rules {
            text = rule.apply(&text)?;
        }

        Ok(text)
    }
}
