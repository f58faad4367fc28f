//! Normalization rules.

use std::sync::Arc;

use corpus_core::{BaseNormalizer, CleanError, CleanResult};
use tracing::error;

/// Punctuation replaced by a space: ASCII punctuation plus the Persian comma.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~،";

/// Zero-width non-joiner, used inside Persian compound words.
pub const ZWNJ: char = '\u{200C}';

/// Zero-width joiner.
pub const ZWJ: char = '\u{200D}';

/// A text normalization rule.
pub trait Rule: Send + Sync + std::fmt::Debug {
    /// Get the rule name.
    fn name(&self) -> &str;

    /// Apply the rule to the input text.
    fn apply(&self, input: &str) -> CleanResult<String>;
}

/// Create the default set of normalization rules around a base primitive.
pub fn default_rules(base: Arc<dyn BaseNormalizer>) -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(CanonicalizeRule::new(base)),
        Box::new(PunctuationRule),
        Box::new(ZeroWidthJoinerRule),
    ]
}

/// Run the external base canonicalization primitive.
#[derive(Debug)]
pub struct CanonicalizeRule {
    base: Arc<dyn BaseNormalizer>,
}

impl CanonicalizeRule {
    /// Wrap a base normalizer.
    pub fn new(base: Arc<dyn BaseNormalizer>) -> Self {
        Self { base }
    }
}

impl Rule for CanonicalizeRule {
    fn name(&self) -> &str {
        "canonicalize"
    }

    fn apply(&self, input: &str) -> CleanResult<String> {
        self.base.normalize(input).map_err(|err| {
            error!(value = input, error = %err, "base normalization failed");
            match err {
                CleanError::Normalization { .. } => err,
                other => CleanError::normalization(input, other.to_string()),
            }
        })
    }
}

/// Replace every punctuation character with a single space.
#[derive(Debug)]
pub struct PunctuationRule;

impl Rule for PunctuationRule {
    fn name(&self) -> &str {
        "punctuation"
    }

    fn apply(&self, input: &str) -> CleanResult<String> {
        Ok(input
            .chars()
            .map(|c| if PUNCTUATION.contains(c) { ' ' } else { c })
            .collect())
    }
}

/// Replace zero-width joiners and non-joiners with ordinary spaces.
#[derive(Debug)]
pub struct ZeroWidthJoinerRule;

impl Rule for ZeroWidthJoinerRule {
    fn name(&self) -> &str {
        "zero_width_joiner"
    }

    fn apply(&self, input: &str) -> CleanResult<String> {
        Ok(input
            .chars()
            .map(|c| if c == ZWNJ || c == ZWJ { ' ' } else { c })
            .collect())
    }
}

/// Normalize whitespace (collapse multiple spaces, trim).
#[derive(Debug)]
pub struct WhitespaceRule;

impl Rule for WhitespaceRule {
    fn name(&self) -> &str {
        "whitespace"
    }

    fn apply(&self, input: &str) -> CleanResult<String> {
        Ok(input.split_whitespace().collect::<Vec<_>>().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Rejecting;

    impl BaseNormalizer for Rejecting {
        fn normalize(&self, _input: &str) -> CleanResult<String> {
            Err(CleanError::invalid_input("unsupported code point"))
        }
    }

    #[test]
    fn test_whitespace_rule() {
        let result = WhitespaceRule.apply("  پژو   ۲۰۶  ").unwrap();
        assert_eq!(result, "پژو ۲۰۶");
    }

    #[test]
    fn test_punctuation_rule_preserves_char_count() {
        let input = "پراید، مدل-98 (تمیز)!";
        let result = PunctuationRule.apply(input).unwrap();
        assert_eq!(result, "پراید  مدل 98  تمیز  ");
        assert_eq!(result.chars().count(), input.chars().count());
    }

    #[test]
    fn test_zero_width_joiner_rule() {
        let result = ZeroWidthJoinerRule.apply("قهوه\u{200C}ای").unwrap();
        assert_eq!(result, "قهوه ای");
        let result = ZeroWidthJoinerRule.apply("نوک\u{200D}مدادی").unwrap();
        assert_eq!(result, "نوک مدادی");
    }

    #[test]
    fn test_canonicalize_rule_attaches_value() {
        let rule = CanonicalizeRule::new(Arc::new(Rejecting));
        match rule.apply("پژو ۴۰۵") {
            Err(CleanError::Normalization { value, reason }) => {
                assert_eq!(value, "پژو ۴۰۵");
                assert!(reason.contains("unsupported code point"));
            }
            other => panic!("expected normalization error, got {other:?}"),
        }
    }
}
