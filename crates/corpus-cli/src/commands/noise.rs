//! Noise command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use corpus_core::SampleRange;
use dataset::{generate_noisy_dataset, normalized_noisy_words};
use text_normalizer::Normalizer;
use tracing::info;

use super::io::{read_records, write_records};

/// Options for the noise command.
#[derive(Debug)]
pub struct NoiseOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub field: String,
    pub group: String,
    pub reference_field: String,
    pub limit: usize,
    pub min: usize,
    pub max: usize,
    pub min_words: usize,
    pub max_words: usize,
    pub seed: Option<u64>,
}

/// Run the noise command.
///
/// The vocabulary is every word of the normalized `reference_field` missing
/// from `field` in the same row. Every input row is written back out.
pub fn run(options: NoiseOptions) -> Result<()> {
    let samples = SampleRange::new(options.min, options.max)?;
    let words = SampleRange::new(options.min_words, options.max_words)?;

    let records = read_records(&options.input)?;
    let vocabulary = normalized_noisy_words(
        &records,
        &options.reference_field,
        &options.field,
        &Normalizer::new(),
    )?;
    info!(words = vocabulary.len(), "noise vocabulary");

    let mut rng = super::rng(options.seed);
    let augmented = generate_noisy_dataset(
        &records,
        &options.field,
        &options.group,
        &vocabulary,
        options.limit,
        samples,
        words,
        &mut rng,
    )
    .context("noise injection failed; lower --max-words or widen the vocabulary")?;

    write_records(&options.output, &augmented)?;
    info!(
        input = records.len(),
        output = augmented.len(),
        path = %options.output.display(),
        "noise complete"
    );
    Ok(())
}
