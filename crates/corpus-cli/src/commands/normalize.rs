//! Normalize command implementation.

use anyhow::Result;
use text_normalizer::{EntityStripper, Normalizer};

/// Run the normalize command.
pub fn run(input: &str, strip: bool) -> Result<()> {
    let normalizer = Normalizer::new();
    let normalized = normalizer.normalize(input)?;

    println!("Input:      {input}");
    println!("Normalized: {normalized}");
    println!("Rules:      {}", normalizer.rule_names().join(" → "));

    if strip {
        let stripper = EntityStripper::with_defaults()?;
        let stripped = stripper.strip(&normalized);
        let stripped = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
        println!("Stripped:   {stripped}");
    }

    Ok(())
}
