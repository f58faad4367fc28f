//! Synthetic noise for under-represented groups.
//!
//! The noise vocabulary is the set of words the cleaning stages removed
//! (present in the raw text, absent from the cleaned text). Appending a few
//! of them to resampled minority rows teaches a downstream model to ignore
//! that kind of filler.

use std::collections::BTreeSet;

use corpus_core::{CleanError, CleanResult, RecordCollection, SampleRange};
use rand::seq::SliceRandom;
use rand::Rng;
use text_normalizer::Normalizer;
use tracing::{debug, info, instrument, warn};

use crate::balance::resample;

/// Distinct words available for noise injection, in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoiseVocabulary {
    words: Vec<String>,
}

impl NoiseVocabulary {
    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check whether `word` is in the vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|w| w.as_str().cmp(word))
            .is_ok()
    }

    /// Iterate over the words.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl FromIterator<String> for NoiseVocabulary {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let words: BTreeSet<String> = iter.into_iter().collect();
        Self {
            words: words.into_iter().collect(),
        }
    }
}

/// Union over aligned rows of the words in `series_a[i]` missing from `series_b[i]`.
///
/// Words are whitespace-separated tokens. Both series must have the same length.
pub fn noisy_words(series_a: &[&str], series_b: &[&str]) -> CleanResult<NoiseVocabulary> {
    if series_a.len() != series_b.len() {
        return Err(CleanError::invalid_input(format!(
            "series are not aligned: {} rows vs {} rows",
            series_a.len(),
            series_b.len()
        )));
    }

    let mut words = BTreeSet::new();
    for (a, b) in series_a.iter().zip(series_b) {
        let reference: BTreeSet<&str> = b.split_whitespace().collect();
        words.extend(
            a.split_whitespace()
                .filter(|w| !reference.contains(w))
                .map(str::to_string),
        );
    }
    Ok(words.into_iter().collect())
}

/// [`noisy_words`] over two text fields of the same collection.
pub fn noisy_words_from(
    collection: &RecordCollection,
    field_a: &str,
    field_b: &str,
) -> CleanResult<NoiseVocabulary> {
    noisy_words(&collection.texts(field_a)?, &collection.texts(field_b)?)
}

/// Words of `reference_field`, once normalized, missing from `field` in the same row.
///
/// Normalizing the reference first keeps digit-script and punctuation
/// variants of kept words (`۲۰۶،` next to `206`) out of the vocabulary.
/// Rows with a null reference contribute nothing; a null `field` counts as
/// empty text.
pub fn normalized_noisy_words(
    collection: &RecordCollection,
    reference_field: &str,
    field: &str,
    normalizer: &Normalizer,
) -> CleanResult<NoiseVocabulary> {
    let mut reference = Vec::with_capacity(collection.len());
    let mut cleaned = Vec::with_capacity(collection.len());
    for record in collection {
        let Some(raw) = record.optional_text(reference_field)? else {
            continue;
        };
        reference.push(normalizer.normalize(raw)?);
        cleaned.push(record.optional_text(field)?.unwrap_or_default());
    }

    let reference: Vec<&str> = reference.iter().map(String::as_str).collect();
    noisy_words(&reference, &cleaned)
}

/// Append `k` distinct vocabulary words to `text`, `k` drawn from `words`.
///
/// Fails with [`CleanError::InsufficientVocabulary`] whenever the upper bound
/// of `words` exceeds the vocabulary size, whatever `k` turns out to be. The
/// original text is always a prefix of the result.
pub fn inject_noise<R: Rng + ?Sized>(
    text: &str,
    vocabulary: &NoiseVocabulary,
    words: SampleRange,
    rng: &mut R,
) -> CleanResult<String> {
    words.validate()?;
    if words.max > vocabulary.len() {
        return Err(CleanError::InsufficientVocabulary {
            requested: words.max,
            available: vocabulary.len(),
        });
    }

    let k = rng.gen_range(words.min..=words.max);
    if k == 0 {
        return Ok(text.to_string());
    }

    let noise = vocabulary
        .words
        .choose_multiple(rng, k)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    Ok(format!("{text} {noise}"))
}

/// Grow every group smaller than `min_group_size` with noisy resampled rows.
///
/// For each such group, a size is drawn from `samples`, that many rows are
/// resampled with replacement from the group, `target_field` of each gets
/// noise appended, and the rows are appended to a copy of `collection`.
/// Groups at or above `min_group_size` are untouched, and every input row
/// is kept as is, whatever its text.
///
/// Only rows whose `target_field` is text can be resampled; null rows of a
/// small group are left out of its resampling pool. A small group with no
/// text row at all gets no synthetic rows. A target value that is neither
/// text nor null fails with [`CleanError::MalformedInput`].
#[allow(clippy::too_many_arguments)]
#[instrument(skip(collection, vocabulary, rng), fields(rows = collection.len(), vocabulary = vocabulary.len()))]
pub fn generate_noisy_dataset<R: Rng + ?Sized>(
    collection: &RecordCollection,
    target_field: &str,
    group_field: &str,
    vocabulary: &NoiseVocabulary,
    min_group_size: usize,
    samples: SampleRange,
    words: SampleRange,
    rng: &mut R,
) -> CleanResult<RecordCollection> {
    samples.validate()?;

    let grouped = collection.group_by(group_field);
    let mut augmented = collection.clone();

    for (key, rows) in grouped.groups.iter().filter(|(_, rows)| rows.len() < min_group_size) {
        let mut pool = Vec::with_capacity(rows.len());
        for record in rows {
            if record.optional_text(target_field)?.is_some() {
                pool.push(*record);
            }
        }
        if pool.len() < rows.len() {
            warn!(
                group = %key,
                rows = rows.len() - pool.len(),
                field = target_field,
                "rows without text left out of the resampling pool"
            );
        }
        if pool.is_empty() {
            continue;
        }

        let n = rng.gen_range(samples.min..=samples.max);
        for mut record in resample(&pool, n, rng) {
            let noisy = inject_noise(record.text(target_field)?, vocabulary, words, rng)?;
            record.set(target_field, noisy);
            augmented.push(record);
        }
        debug!(group = %key, available = pool.len(), added = n, "augmented group");
    }

    info!(
        before = collection.len(),
        after = augmented.len(),
        "noise injection complete"
    );
    Ok(augmented)
}
