//! Info command implementation.

use corpus_core::{Clock, PipelineConfig, SystemClock};
use text_normalizer::EntityStripper;

/// Run the info command.
pub fn run() {
    println!("Vehicle-ad corpus cleaner");
    println!("=========================");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!();

    let now = SystemClock.now();
    println!("Calendar:");
    println!("  Gregorian year: {}", now.gregorian_year);
    println!("  Jalali year:    {}", now.jalali_year);
    println!();

    let config = PipelineConfig::default();
    println!("Default vocabulary:");
    println!(
        "  colors:      {} (× {} suffixes)",
        config.stripper.colors.len(),
        config.stripper.color_suffixes.len()
    );
    println!("  regions:     {}", config.stripper.regions.len());
    println!("  boilerplate: {}", config.stripper.boilerplate.len());
    match EntityStripper::with_defaults() {
        Ok(stripper) => {
            let rules = stripper.rules();
            println!(
                "  compiled:    {} entries, {} patterns",
                rules.entries().len(),
                rules.pattern_count()
            );
            println!(
                "  nested:      {} entries inside longer ones",
                rules.overlaps().len()
            );
        }
        Err(e) => println!("  compiled:    failed ({e})"),
    }
    println!();

    println!("Crates:");
    println!("  corpus-core: Records, errors, configuration and calendar");
    println!("  text-normalizer: Normalization, entity stripping, year extraction");
    println!("  dataset: Filters, balancing and noise augmentation");
    println!("  runtime: Preprocessing pipeline and logging");
    println!("  corpus-cli: This CLI tool");
}
