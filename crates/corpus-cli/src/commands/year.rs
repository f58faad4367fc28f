//! Year command implementation.

use anyhow::Result;
use corpus_core::{Clock, SystemClock};
use text_normalizer::{Normalizer, YearExtractor};

/// Run the year command.
pub fn run(input: &str) -> Result<()> {
    let normalized = Normalizer::new().normalize(input)?;
    let now = SystemClock.now();

    println!("Input:      {input}");
    println!("Normalized: {normalized}");
    println!("Now:        {} / {}", now.gregorian_year, now.jalali_year);

    match YearExtractor::new(SystemClock).extract(&normalized) {
        Some(candidate) => {
            println!("Year:       {}", candidate.year);
            println!("Span:       {:?}", candidate.span);
        }
        None => println!("Year:       none (absent, ambiguous or out of range)"),
    }

    Ok(())
}
