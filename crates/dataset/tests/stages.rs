//! Integration tests chaining the dataset stages.

use corpus_core::{Record, RecordCollection, SampleRange};
use dataset::{
    balance, drop_foreign_only, generate_noisy_dataset, noisy_words_from, ValidityFilter,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeMap;

fn ad(raw: &str, clean: &str, label: &str) -> Record {
    Record::new()
        .with("raw", raw)
        .with("model", clean)
        .with("label", label)
}

fn corpus() -> RecordCollection {
    let mut rows = vec![
        ad("Peugeot 206", "Peugeot 206", "206"),
        ad("پژو ۲۰۶ مدل ۹۸ معاوضه", "پژو 206", "206"),
        ad("پژو ۲۰۶ مدل ۹۸ مدل ۹۹", "پژو 206", "206"),
        ad("تیبا اقساط", "تیبا", "tiba"),
    ];
    for i in 0..12 {
        rows.push(ad(&format!("پژو ۲۰۶ سفید تمیز {i}"), &format!("پژو 206 {i}"), "206"));
    }
    for i in 0..2 {
        rows.push(ad(&format!("تیبا مشکی فول {i}"), &format!("تیبا {i}"), "tiba"));
    }
    RecordCollection::from_records(rows)
}

fn group_counts(collection: &RecordCollection) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in collection {
        if let Some(key) = record.group_key("label") {
            *counts.entry(key).or_insert(0) += 1;
        }
    }
    counts
}

#[test]
fn test_drop_stage_chain() {
    let filter = ValidityFilter::new();
    let rows = corpus();

    let rows = drop_foreign_only(&rows, "raw").unwrap();
    assert_eq!(rows.len(), 17);
    let rows = filter.drop_invalid(&rows, "raw").unwrap();
    assert_eq!(rows.len(), 15);
    let rows = filter.drop_installment_ads(&rows, "raw").unwrap();
    assert_eq!(rows.len(), 14);
}

#[test]
fn test_balance_property_over_seeds() {
    let range = SampleRange::new(4, 9).unwrap();
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let balanced = balance(&corpus(), "label", range, &mut rng).unwrap();
        let counts = group_counts(&balanced);
        assert_eq!(counts.len(), 2);
        assert!(counts.values().all(|n| range.contains(*n)));
        assert_eq!(counts.values().sum::<usize>(), balanced.len());
    }
}

#[test]
fn test_noise_from_cleaning_residue() {
    let rows = corpus();
    let vocab = noisy_words_from(&rows, "raw", "model").unwrap();
    assert!(vocab.contains("سفید"));
    assert!(vocab.contains("فول"));
    assert!(!vocab.contains("تیبا"));

    let mut rng = StdRng::seed_from_u64(42);
    let augmented = generate_noisy_dataset(
        &rows,
        "model",
        "label",
        &vocab,
        5,
        SampleRange::new(3, 3).unwrap(),
        SampleRange::new(1, 2).unwrap(),
        &mut rng,
    )
    .unwrap();

    let before = group_counts(&rows);
    let after = group_counts(&augmented);
    assert_eq!(after["206"], before["206"]);
    assert_eq!(after["tiba"], before["tiba"] + 3);
}
