//! Clean command implementation.

use std::path::PathBuf;

use anyhow::Result;
use corpus_core::PipelineConfig;
use runtime::Preprocessor;
use tracing::info;

use super::io::{read_records, write_records};

/// Options for the clean command.
#[derive(Debug)]
pub struct CleanOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub config: PipelineConfig,
    pub locations: bool,
    pub raw_field: Option<String>,
}

/// Run the clean command.
pub fn run(options: CleanOptions) -> Result<()> {
    let records = read_records(&options.input)?;
    let mut preprocessor = Preprocessor::new(options.config)?;
    if options.locations {
        preprocessor = preprocessor.with_locations(&records)?;
    }

    let kept = preprocessor.drop_stage(&records)?;
    let kept = match &options.raw_field {
        Some(raw_field) => {
            let text_field = preprocessor.config().text_field.clone();
            kept.try_map(|mut record| {
                let raw = record.text(&text_field)?.to_string();
                record.set(raw_field.as_str(), raw);
                Ok(record)
            })?
        }
        None => kept,
    };
    let cleaned = preprocessor.clean(&kept)?;

    write_records(&options.output, &cleaned)?;
    info!(
        input = records.len(),
        output = cleaned.len(),
        path = %options.output.display(),
        "clean complete"
    );
    Ok(())
}
