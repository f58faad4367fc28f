//! Entity stripping: deletes colors, regions, filler words and structural
//! numeric phrases (mileage, engine size) from ad text.

use std::collections::HashSet;

use corpus_core::{BaseNormalizer, CleanError, CleanResult, RecordCollection, StripperConfig};
use regex::{Regex, RegexBuilder};
use tracing::{debug, instrument};

use crate::rules::ZWNJ;

const REGEX_SIZE_LIMIT: usize = 64 * (1 << 20);

/// Expand each color with every suffix. The base form comes first.
pub fn expand_colors(colors: &[String], suffixes: &[String]) -> Vec<String> {
    colors
        .iter()
        .flat_map(|color| {
            std::iter::once(color.clone()).chain(suffixes.iter().map(move |s| format!("{color}{s}")))
        })
        .collect()
}

/// Canonical spelling of a vocabulary entry: zero-width non-joiners become
/// spaces and whitespace runs collapse, matching normalized text.
fn canonical_entry(entry: &str) -> String {
    entry
        .replace(ZWNJ, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escape an entry, letting any whitespace run separate its words.
fn entry_pattern(entry: &str, separator: &str) -> String {
    entry
        .split(' ')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Compiled deletion rules.
///
/// Rules only delete. Structural patterns run first, then the vocabulary
/// alternation, and the passes repeat until the text stops changing, so the
/// result does not depend on authoring order and stripping is idempotent.
#[derive(Debug, Clone)]
pub struct RuleSet {
    entries: Vec<String>,
    vocabulary: Option<Regex>,
    patterns: Vec<Regex>,
}

impl RuleSet {
    /// Compile vocabulary entries and structural patterns.
    pub fn compile(entries: &[String], patterns: &[String]) -> CleanResult<Self> {
        let mut seen = HashSet::new();
        let mut canonical = Vec::with_capacity(entries.len());
        for entry in entries {
            let entry = canonical_entry(entry);
            if entry.is_empty() {
                return Err(CleanError::config("vocabulary entry is empty"));
            }
            if seen.insert(entry.clone()) {
                canonical.push(entry);
            }
        }
        // Longest first so the alternation prefers "صفر کیلومتر" over "صفر".
        canonical.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });

        let vocabulary = if canonical.is_empty() {
            None
        } else {
            let alternation = canonical
                .iter()
                .map(|e| entry_pattern(e, r"\s+"))
                .collect::<Vec<_>>()
                .join("|");
            Some(compile(&format!(r"\b(?:{alternation})\b"))?)
        };

        let patterns = patterns
            .iter()
            .map(|p| {
                let re = compile(p)?;
                if re.is_match("") {
                    return Err(CleanError::config(format!(
                        "pattern {p:?} matches the empty string"
                    )));
                }
                Ok(re)
            })
            .collect::<CleanResult<Vec<_>>>()?;

        Ok(Self {
            entries: canonical,
            vocabulary,
            patterns,
        })
    }

    /// Canonical vocabulary entries, longest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of structural patterns.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Pairs `(short, long)` where `short` occurs as whole words inside `long`.
    ///
    /// Such pairs are resolved by longest-first matching; they are reported so
    /// authors can spot accidental duplicates.
    pub fn overlaps(&self) -> Vec<(String, String)> {
        let words: Vec<Vec<&str>> = self.entries.iter().map(|e| e.split(' ').collect()).collect();
        let mut pairs = Vec::new();
        for (i, short) in words.iter().enumerate() {
            for (j, long) in words.iter().enumerate() {
                if i != j
                    && long.len() > short.len()
                    && long.windows(short.len()).any(|w| w == short.as_slice())
                {
                    pairs.push((self.entries[i].clone(), self.entries[j].clone()));
                }
            }
        }
        pairs
    }

    /// Delete every rule match from `text`.
    pub fn apply(&self, text: &str) -> String {
        let mut current = text.to_string();
        loop {
            let mut next = current.clone();
            for pattern in &self.patterns {
                next = pattern.replace_all(&next, "").into_owned();
            }
            if let Some(vocabulary) = &self.vocabulary {
                next = vocabulary.replace_all(&next, "").into_owned();
            }
            if next == current {
                return next;
            }
            current = next;
        }
    }
}

fn compile(pattern: &str) -> CleanResult<Regex> {
    RegexBuilder::new(pattern)
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map_err(|e| CleanError::config(format!("invalid pattern: {e}")))
}

/// Structural patterns for engine displacement: `<number> <unit>` and
/// `<unit> <number>`.
pub fn engine_patterns(units: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let units: Vec<String> = units
        .iter()
        .map(|u| canonical_entry(u))
        .filter(|u| !u.is_empty() && seen.insert(u.clone()))
        .map(|u| entry_pattern(&u, r"\s*"))
        .collect();
    if units.is_empty() {
        return Vec::new();
    }
    let units = units.join("|");
    vec![
        format!(r"\d+\s*(?:{units})\b"),
        format!(r"\b(?:{units})\s*\d+"),
    ]
}

/// Removes noise vocabulary and structural numeric phrases from text.
#[derive(Debug, Clone)]
pub struct EntityStripper {
    rules: RuleSet,
}

impl EntityStripper {
    /// Start building a stripper with an empty vocabulary.
    pub fn builder() -> EntityStripperBuilder {
        EntityStripperBuilder::default()
    }

    /// Build a stripper from configuration.
    pub fn from_config(config: &StripperConfig) -> CleanResult<Self> {
        Self::builder()
            .colors(config.colors.iter().cloned(), config.color_suffixes.iter().cloned())
            .regions(config.regions.iter().cloned())
            .boilerplate(config.boilerplate.iter().cloned())
            .engine_units(config.engine_units.iter().cloned())
            .patterns(config.mileage_patterns.iter().cloned())
            .build()
    }

    /// Build a stripper with the default vehicle-ad vocabulary.
    pub fn with_defaults() -> CleanResult<Self> {
        Self::from_config(&StripperConfig::default())
    }

    /// Delete all rule matches from `text`.
    pub fn strip(&self, text: &str) -> String {
        self.rules.apply(text)
    }

    /// The compiled rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}

/// Builder for [`EntityStripper`].
#[derive(Debug, Default)]
pub struct EntityStripperBuilder {
    colors: Vec<String>,
    color_suffixes: Vec<String>,
    regions: Vec<String>,
    boilerplate: Vec<String>,
    engine_units: Vec<String>,
    patterns: Vec<String>,
}

impl EntityStripperBuilder {
    /// Add base colors and the suffixes each color is expanded with.
    pub fn colors<I, S>(mut self, colors: I, suffixes: S) -> Self
    where
        I: IntoIterator<Item = String>,
        S: IntoIterator<Item = String>,
    {
        self.colors.extend(colors);
        self.color_suffixes.extend(suffixes);
        self
    }

    /// Add administrative region or location names.
    pub fn regions<I: IntoIterator<Item = String>>(mut self, regions: I) -> Self {
        self.regions.extend(regions);
        self
    }

    /// Add filler words.
    pub fn boilerplate<I: IntoIterator<Item = String>>(mut self, words: I) -> Self {
        self.boilerplate.extend(words);
        self
    }

    /// Add engine displacement unit spellings.
    pub fn engine_units<I: IntoIterator<Item = String>>(mut self, units: I) -> Self {
        self.engine_units.extend(units);
        self
    }

    /// Add raw structural patterns.
    pub fn patterns<I: IntoIterator<Item = String>>(mut self, patterns: I) -> Self {
        self.patterns.extend(patterns);
        self
    }

    /// Compile the rule set.
    #[instrument(skip_all)]
    pub fn build(self) -> CleanResult<EntityStripper> {
        let mut entries = expand_colors(&self.colors, &self.color_suffixes);
        entries.extend(self.regions);
        entries.extend(self.boilerplate);

        let mut patterns = engine_patterns(&self.engine_units);
        patterns.extend(self.patterns);

        let rules = RuleSet::compile(&entries, &patterns)?;
        let overlaps = rules.overlaps();
        debug!(
            entries = rules.entries().len(),
            patterns = rules.pattern_count(),
            overlaps = overlaps.len(),
            "compiled entity rules"
        );
        for (short, long) in &overlaps {
            debug!(short = %short, long = %long, "vocabulary entry nested in longer entry");
        }

        Ok(EntityStripper { rules })
    }
}

/// Harvest location names from a collection for use as region vocabulary.
///
/// Null locations are skipped, values containing digits are discarded, and
/// the rest are canonicalized with `base` and de-duplicated in first-seen
/// order.
pub fn location_vocabulary(
    collection: &RecordCollection,
    field: &str,
    base: &dyn BaseNormalizer,
) -> CleanResult<Vec<String>> {
    let mut seen = HashSet::new();
    let mut locations = Vec::new();

    for record in collection {
        let Some(raw) = record.optional_text(field)? else {
            continue;
        };
        let raw = raw.replace(ZWNJ, " ");
        if raw.chars().any(|c| c.is_numeric()) {
            continue;
        }
        let location = base.normalize(&raw)?.trim().to_string();
        if !location.is_empty() && seen.insert(location.clone()) {
            locations.push(location);
        }
    }

    Ok(locations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::PersianCanonicalizer;
    use corpus_core::Record;

    fn owned(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    fn squash(s: &str) -> String {
        s.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_expand_colors() {
        let expanded = expand_colors(&owned(&["سفید"]), &owned(&[" ای", "ی", "ای"]));
        assert_eq!(expanded, owned(&["سفید", "سفید ای", "سفیدی", "سفیدای"]));
    }

    #[test]
    fn test_word_boundaries_protect_longer_words() {
        let stripper = EntityStripper::builder()
            .boilerplate(owned(&["دار"]))
            .build()
            .unwrap();
        assert_eq!(squash(&stripper.strip("دارد دار")), "دارد");
    }

    #[test]
    fn test_longest_entry_wins() {
        let stripper = EntityStripper::builder()
            .boilerplate(owned(&["صفر", "صفر کیلومتر"]))
            .build()
            .unwrap();
        assert_eq!(squash(&stripper.strip("پژو صفر کیلومتر")), "پژو");
    }

    #[test]
    fn test_engine_patterns() {
        let stripper = EntityStripper::builder()
            .engine_units(owned(&["cc", "سی سی"]))
            .build()
            .unwrap();
        assert_eq!(squash(&stripper.strip("سمند 1600 cc")), "سمند");
        assert_eq!(squash(&stripper.strip("سمند سی سی 1600")), "سمند");
        assert_eq!(squash(&stripper.strip("سمند 1800سی سی")), "سمند");
    }

    #[test]
    fn test_default_stripper() {
        let stripper = EntityStripper::with_defaults().unwrap();
        let out = stripper.strip("پراید مدل 1398 سفید تمیز تهران 50 هزار کیلومتر");
        assert_eq!(squash(&out), "پراید مدل 1398");
    }

    #[test]
    fn test_colors_with_suffix_variants() {
        let stripper = EntityStripper::with_defaults().unwrap();
        assert_eq!(squash(&stripper.strip("پژو سفیدی")), "پژو");
        assert_eq!(squash(&stripper.strip("پژو قهوه ای")), "پژو");
    }

    #[test]
    fn test_strip_is_idempotent() {
        let stripper = EntityStripper::builder()
            .regions(owned(&["آذربایجان غربی"]))
            .colors(owned(&["سفید"]), Vec::new())
            .build()
            .unwrap();
        let once = stripper.strip("آذربایجان سفید غربی");
        assert_eq!(stripper.strip(&once), once);
    }

    #[test]
    fn test_overlaps_reported() {
        let rules = RuleSet::compile(&owned(&["صفر", "صفر کیلومتر", "کیلومتر", "دار"]), &[])
            .unwrap();
        let overlaps = rules.overlaps();
        assert!(overlaps.contains(&("صفر".to_string(), "صفر کیلومتر".to_string())));
        assert!(overlaps.contains(&("کیلومتر".to_string(), "صفر کیلومتر".to_string())));
        assert_eq!(overlaps.len(), 2);
    }

    #[test]
    fn test_invalid_configuration() {
        assert!(RuleSet::compile(&owned(&["  "]), &[]).is_err());
        assert!(RuleSet::compile(&[], &owned(&[r"\d*"])).is_err());
        assert!(RuleSet::compile(&[], &owned(&["("])).is_err());
    }

    #[test]
    fn test_location_vocabulary() {
        let collection = RecordCollection::from_records(vec![
            Record::new().with("location", "تهران"),
            Record::new().with("location", "منطقه 5"),
            Record::new().with("location", "تهران"),
            Record::new().with("location", "شهر\u{200C}ری"),
            Record::new(),
        ]);
        let locations = location_vocabulary(&collection, "location", &PersianCanonicalizer).unwrap();
        assert_eq!(locations, owned(&["تهران", "شهر ری"]));
    }
}
