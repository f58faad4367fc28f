//! Model-year extraction with Jalali/Gregorian disambiguation.
//!
//! Ads state the manufacture year as `مدل` followed by two to four digits,
//! in either calendar and often abbreviated. The thresholds below are tied
//! to the current year, so the same text can resolve differently as time
//! passes: a two-digit `05` reads as Jalali 1405 once that year has arrived,
//! and as Gregorian 2005 before.

use std::collections::BTreeSet;
use std::ops::Range;

use corpus_core::calendar::JALALI_OFFSET;
use corpus_core::vocab::YEAR_KEYWORD;
use corpus_core::{CalendarNow, Clock};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::canonical::digit_value;

/// Year marker with its three separator spellings: whitespace, underscore, hyphen.
pub static YEAR_MARKER: Lazy<Regex> = Lazy::new(|| {
    let digits = r"([0-9۰-۹٠-٩]{2,4})";
    let pattern = format!(
        r"{kw}\s*{digits}|{kw}_*{digits}|{kw}-*{digits}",
        kw = YEAR_KEYWORD
    );
    Regex::new(&pattern).expect("year marker pattern is valid")
});

/// Count non-overlapping year markers in `text`.
pub fn count_year_markers(text: &str) -> usize {
    YEAR_MARKER.find_iter(text).count()
}

/// A year resolved from a single marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearCandidate {
    /// Gregorian year.
    pub year: i32,
    /// Literal marker text, for removal from the source field.
    pub span: String,
    /// Byte range of the first marker in the source text.
    pub range: Range<usize>,
}

/// Extract the model year from `text` relative to `now`.
///
/// Returns `None` when there is no marker, when markers disagree, or when
/// the resolved year falls outside `2000..=now.gregorian_year + 1`.
pub fn extract_year(text: &str, now: CalendarNow) -> Option<YearCandidate> {
    let mut values = BTreeSet::new();
    let mut first: Option<(String, Range<usize>)> = None;

    for caps in YEAR_MARKER.captures_iter(text) {
        let Some(digits) = (1..=3).find_map(|i| caps.get(i)) else {
            continue;
        };
        values.insert(ascii_digits(digits.as_str()));
        if first.is_none() {
            let whole = caps.get(0)?;
            first = Some((whole.as_str().to_string(), whole.range()));
        }
    }

    if values.len() != 1 {
        trace!(distinct = values.len(), "no unambiguous year marker");
        return None;
    }
    let raw: i32 = values.pop_first()?.parse().ok()?;
    let year = resolve_year(raw, now)?;
    let (span, range) = first?;

    Some(YearCandidate { year, span, range })
}

/// Map a captured 2-4 digit number onto a Gregorian year.
pub fn resolve_year(raw: i32, now: CalendarNow) -> Option<i32> {
    let mut year = raw;

    if year < 100 {
        if year > 0 && year <= now.jalali_year - 1400 {
            year += 1400;
        } else if year >= 10 && year <= now.gregorian_year + 1 - 2000 {
            year += 2000;
        } else {
            year += 1300;
        }
    }
    if year < 1000 {
        year += 1000;
    }
    if year > 1300 && year <= now.jalali_year + 1 {
        year += JALALI_OFFSET;
    }
    if year < 2000 || year > now.gregorian_year + 1 {
        return None;
    }
    Some(year)
}

fn ascii_digits(digits: &str) -> String {
    digits
        .chars()
        .filter_map(digit_value)
        .filter_map(|d| char::from_digit(d, 10))
        .collect()
}

/// Year extractor bound to a clock.
#[derive(Debug)]
pub struct YearExtractor {
    clock: Box<dyn Clock>,
}

impl YearExtractor {
    /// Create an extractor reading "now" from `clock`.
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
        }
    }

    /// Extract the model year from `text`.
    pub fn extract(&self, text: &str) -> Option<YearCandidate> {
        extract_year(text, self.clock.now())
    }
}
