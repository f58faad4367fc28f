//! Balance command implementation.

use std::path::PathBuf;

use anyhow::Result;
use corpus_core::SampleRange;
use tracing::info;

use super::io::{read_records, write_records};

/// Options for the balance command.
#[derive(Debug)]
pub struct BalanceOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub group: String,
    pub min: usize,
    pub max: usize,
    pub seed: Option<u64>,
}

/// Run the balance command.
pub fn run(options: BalanceOptions) -> Result<()> {
    let range = SampleRange::new(options.min, options.max)?;
    let records = read_records(&options.input)?;

    let mut rng = super::rng(options.seed);
    let balanced = dataset::balance(&records, &options.group, range, &mut rng)?;

    write_records(&options.output, &balanced)?;
    info!(
        input = records.len(),
        output = balanced.len(),
        path = %options.output.display(),
        "balance complete"
    );
    Ok(())
}
