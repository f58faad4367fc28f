//! End-to-end preprocessing of the ad corpus.
//!
//! Combines all stages: drop filters → normalizer → entity stripper → year
//! extraction, followed by the optional balancing and augmentation passes.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, instrument};

use corpus_core::{
    BaseNormalizer, CleanResult, Clock, PipelineConfig, Record, RecordCollection, SystemClock,
};
use dataset::{
    balance, drop_foreign_only, generate_noisy_dataset, noisy_words, sanitize_price,
    NoiseVocabulary, ValidityFilter,
};
use text_normalizer::{
    location_vocabulary, EntityStripper, Normalizer, PersianCanonicalizer, Rule, WhitespaceRule,
    YearExtractor,
};

/// Cleaned text and model year of a single ad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedText {
    /// Remaining model text, `None` when nothing is left.
    pub text: Option<String>,
    /// Gregorian model year, `None` when absent or ambiguous.
    pub year: Option<i32>,
}

/// The corpus preprocessor.
///
/// Holds the compiled rules for one [`PipelineConfig`]. Every stage takes the
/// collection by reference and returns a new one.
pub struct Preprocessor {
    config: PipelineConfig,
    base: Arc<dyn BaseNormalizer>,
    normalizer: Normalizer,
    stripper: EntityStripper,
    years: YearExtractor,
    validity: ValidityFilter,
}

impl std::fmt::Debug for Preprocessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preprocessor")
            .field("text_field", &self.config.text_field)
            .field("rules", &self.stripper.rules().entries().len())
            .finish()
    }
}

impl Preprocessor {
    /// Create a preprocessor with the Persian canonicalizer and the system clock.
    pub fn new(config: PipelineConfig) -> CleanResult<Self> {
        Self::with_collaborators(config, Arc::new(PersianCanonicalizer::new()), SystemClock)
    }

    /// Create a preprocessor with an explicit base normalizer and clock.
    #[instrument(skip_all, fields(text_field = %config.text_field))]
    pub fn with_collaborators(
        config: PipelineConfig,
        base: Arc<dyn BaseNormalizer>,
        clock: impl Clock + 'static,
    ) -> CleanResult<Self> {
        config.validate()?;
        let stripper = EntityStripper::from_config(&config.stripper)?;
        info!(
            entries = stripper.rules().entries().len(),
            patterns = stripper.rules().pattern_count(),
            "preprocessor ready"
        );

        Ok(Self {
            normalizer: Normalizer::with_base(Arc::clone(&base)),
            base,
            stripper,
            years: YearExtractor::new(clock),
            validity: ValidityFilter::new(),
            config,
        })
    }

    /// Add the location names found in `collection` to the region vocabulary.
    pub fn with_locations(mut self, collection: &RecordCollection) -> CleanResult<Self> {
        let locations =
            location_vocabulary(collection, &self.config.location_field, self.base.as_ref())?;
        debug!(locations = locations.len(), "harvested location names");

        let stripper = &self.config.stripper;
        self.stripper = EntityStripper::builder()
            .colors(stripper.colors.iter().cloned(), stripper.color_suffixes.iter().cloned())
            .regions(stripper.regions.iter().cloned().chain(locations))
            .boilerplate(stripper.boilerplate.iter().cloned())
            .engine_units(stripper.engine_units.iter().cloned())
            .patterns(stripper.mileage_patterns.iter().cloned())
            .build()?;
        Ok(self)
    }

    /// Get the pipeline configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Get the compiled entity stripper.
    pub fn stripper(&self) -> &EntityStripper {
        &self.stripper
    }

    /// Random generator for the balancing stages, seeded from the config when set.
    pub fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    fn report(&self, stage: &str, rows: usize) {
        if self.config.filters.verbose {
            info!(stage, rows, "filter stage complete");
        }
    }

    /// Apply the enabled drop filters in order: foreign-only, invalid, installment.
    #[instrument(skip_all, fields(rows = collection.len()))]
    pub fn drop_stage(&self, collection: &RecordCollection) -> CleanResult<RecordCollection> {
        let field = self.config.text_field.as_str();
        let filters = &self.config.filters;
        let mut rows = collection.clone();

        if filters.drop_foreign {
            rows = drop_foreign_only(&rows, field)?;
            self.report("drop_foreign", rows.len());
        }
        if filters.drop_invalid {
            rows = self.validity.drop_invalid(&rows, field)?;
            self.report("drop_invalid", rows.len());
        }
        if filters.drop_installment {
            rows = self.validity.drop_installment_ads(&rows, field)?;
            self.report("drop_installment", rows.len());
        }
        Ok(rows)
    }

    /// Clean a single text: normalize, strip, extract and remove the year marker.
    pub fn clean_text(&self, text: &str) -> CleanResult<CleanedText> {
        let normalized = self.normalizer.normalize(text)?;
        let mut stripped = self.stripper.strip(&normalized);

        let year = self.years.extract(&stripped).map(|candidate| {
            stripped = stripped.replace(&candidate.span, " ");
            candidate.year
        });

        let text = WhitespaceRule.apply(&stripped)?;
        Ok(CleanedText {
            text: (!text.is_empty()).then_some(text),
            year,
        })
    }

    fn clean_record(&self, mut record: Record) -> CleanResult<Record> {
        let cleaned = self.clean_text(record.text(&self.config.text_field)?)?;
        record.set(self.config.text_field.as_str(), cleaned.text);
        record.set(self.config.year_field.as_str(), cleaned.year.map(i64::from));

        let price_field = self.config.price_field.as_str();
        if record.get(price_field).is_some() {
            let price = sanitize_price(record.number(price_field));
            record.set(price_field, price);
        }
        Ok(record)
    }

    /// Rewrite the text, year and price fields of every row.
    #[instrument(skip_all, fields(rows = collection.len()))]
    pub fn clean(&self, collection: &RecordCollection) -> CleanResult<RecordCollection> {
        let cleaned = collection.try_map(|record| self.clean_record(record))?;
        let with_year = cleaned
            .iter()
            .filter(|r| r.number(&self.config.year_field).is_some())
            .count();
        info!(rows = cleaned.len(), with_year, "cleaning complete");
        Ok(cleaned)
    }

    /// Drop stage followed by per-row cleaning.
    pub fn run(&self, collection: &RecordCollection) -> CleanResult<RecordCollection> {
        let kept = self.drop_stage(collection)?;
        self.clean(&kept)
    }

    /// Words the cleaning removed, pairing `before` and `after` row by row.
    ///
    /// `before` is normalized first so that digit and punctuation variants do
    /// not count as removed words. Null cleaned text counts as empty.
    pub fn noise_vocabulary(
        &self,
        before: &RecordCollection,
        after: &RecordCollection,
    ) -> CleanResult<NoiseVocabulary> {
        let field = self.config.text_field.as_str();
        let normalized = before
            .iter()
            .map(|r| self.normalizer.normalize(r.text(field)?))
            .collect::<CleanResult<Vec<_>>>()?;
        let cleaned = after
            .iter()
            .map(|r| r.optional_text(field).map(Option::unwrap_or_default))
            .collect::<CleanResult<Vec<_>>>()?;

        let normalized: Vec<&str> = normalized.iter().map(String::as_str).collect();
        noisy_words(&normalized, &cleaned)
    }

    /// Resample every group into the configured range.
    pub fn balance(
        &self,
        collection: &RecordCollection,
        rng: &mut StdRng,
    ) -> CleanResult<RecordCollection> {
        balance(collection, &self.config.group_field, self.config.balance.samples, rng)
    }

    /// Grow small groups with noisy rows.
    ///
    /// Every input row is kept. Rows whose text was cleaned down to nothing
    /// are not resampled.
    pub fn augment(
        &self,
        collection: &RecordCollection,
        vocabulary: &NoiseVocabulary,
        rng: &mut StdRng,
    ) -> CleanResult<RecordCollection> {
        let noise = &self.config.noise;
        generate_noisy_dataset(
            collection,
            &self.config.text_field,
            &self.config.group_field,
            vocabulary,
            noise.min_group_size,
            noise.samples,
            noise.words,
            rng,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corpus_core::{FixedClock, SampleRange, Value};

    fn preprocessor(config: PipelineConfig) -> Preprocessor {
        Preprocessor::with_collaborators(
            config,
            Arc::new(PersianCanonicalizer::new()),
            FixedClock::new(2024, 1403),
        )
        .unwrap()
    }

    #[test]
    fn test_clean_text_reduces_to_model() {
        let p = preprocessor(PipelineConfig::default());
        let cleaned = p.clean_text("پراید ۱۳۱، مدل ۹۸، سفید").unwrap();
        assert_eq!(cleaned.text.as_deref(), Some("پراید 131"));
        assert_eq!(cleaned.year, Some(2019));
    }

    #[test]
    fn test_clean_text_empty_becomes_none() {
        let p = preprocessor(PipelineConfig::default());
        let cleaned = p.clean_text("مدل 1398 سفید تمیز").unwrap();
        assert_eq!(cleaned.text, None);
        assert_eq!(cleaned.year, Some(2019));
    }

    #[test]
    fn test_clean_sets_year_and_price() {
        let p = preprocessor(PipelineConfig::default());
        let rows = RecordCollection::from_records(vec![
            Record::new()
                .with("model", "پژو ۴۰۵ مدل ۱۳۹۵")
                .with("price", 1_111_111.0),
            Record::new().with("model", "پژو ۴۰۵").with("price", 450_000_000.0),
            Record::new().with("model", "سمند"),
        ]);
        let cleaned = p.clean(&rows).unwrap();
        let records = cleaned.records();

        assert_eq!(records[0].get("year"), Some(&Value::Int(2016)));
        assert_eq!(records[0].get("price"), Some(&Value::Null));
        assert_eq!(records[1].get("year"), Some(&Value::Null));
        assert_eq!(records[1].number("price"), Some(450_000_000.0));
        assert!(records[2].get("price").is_none());
    }

    #[test]
    fn test_drop_stage_respects_switches() {
        let rows = RecordCollection::from_records(vec![
            Record::new().with("model", "Peugeot 405"),
            Record::new().with("model", "پژو ۴۰۵ معاوضه"),
            Record::new().with("model", "پژو ۴۰۵ اقساط"),
            Record::new().with("model", "پژو ۴۰۵"),
        ]);

        let all = preprocessor(PipelineConfig::default());
        assert_eq!(all.drop_stage(&rows).unwrap().len(), 1);

        let mut config = PipelineConfig::default();
        config.filters.drop_foreign = false;
        config.filters.drop_installment = false;
        let some = preprocessor(config);
        assert_eq!(some.drop_stage(&rows).unwrap().len(), 3);
    }

    #[test]
    fn test_with_locations_strips_harvested_names() {
        let rows = RecordCollection::from_records(vec![
            Record::new().with("model", "پژو ۴۰۵ شهرری").with("location", "شهرری"),
            Record::new().with("model", "پژو ۴۰۵").with("location", "منطقه ۵"),
        ]);
        let p = preprocessor(PipelineConfig::default())
            .with_locations(&rows)
            .unwrap();
        let cleaned = p.clean_text("پژو ۴۰۵ شهرری").unwrap();
        assert_eq!(cleaned.text.as_deref(), Some("پژو 405"));
    }

    #[test]
    fn test_augment_keeps_rows_without_text() {
        let mut config = PipelineConfig::default();
        config.noise.min_group_size = 2;
        config.noise.words = SampleRange::new(1, 1).unwrap();
        let p = preprocessor(config);

        let mut rows = Vec::new();
        for i in 0..5 {
            rows.push(Record::new().with("model", format!("پراید {i}")).with("label", "big"));
        }
        for _ in 0..2 {
            rows.push(Record::new().with("model", Value::Null).with("label", "big"));
        }
        let input = RecordCollection::from_records(rows);

        let vocabulary: NoiseVocabulary = ["سفید".to_string()].into_iter().collect();
        let augmented = p.augment(&input, &vocabulary, &mut p.rng()).unwrap();
        assert_eq!(augmented.len(), 7);
        assert_eq!(&augmented.records()[..input.len()], input.records());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        use rand::Rng;
        let mut config = PipelineConfig::default();
        config.seed = Some(17);
        let p = preprocessor(config);
        assert_eq!(p.rng().gen::<u64>(), p.rng().gen::<u64>());
    }
}
