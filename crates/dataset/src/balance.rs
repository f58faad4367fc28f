//! Group-stratified resampling.

use corpus_core::{CleanResult, Record, RecordCollection, SampleRange};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, instrument, warn};

/// Draw `n` rows from `rows` uniformly with replacement.
///
/// An empty pool yields no rows.
pub fn resample<R: Rng + ?Sized>(rows: &[&Record], n: usize, rng: &mut R) -> Vec<Record> {
    (0..n)
        .filter_map(|_| rows.choose(rng))
        .map(|record| (*record).clone())
        .collect()
}

/// Resample every group of `group_field` to a random size within `range`.
///
/// Each group draws its own target count uniformly from `range` and that
/// many rows with replacement from its own pool, so the output size is the
/// sum of the drawn counts and unrelated to the input group sizes. Groups
/// are visited in key order, which keeps seeded runs reproducible. Rows
/// without a group key are not part of any group and are left out.
#[instrument(skip(collection, rng), fields(rows = collection.len()))]
pub fn balance<R: Rng + ?Sized>(
    collection: &RecordCollection,
    group_field: &str,
    range: SampleRange,
    rng: &mut R,
) -> CleanResult<RecordCollection> {
    range.validate()?;

    let grouped = collection.group_by(group_field);
    if grouped.ungrouped > 0 {
        warn!(
            rows = grouped.ungrouped,
            field = group_field,
            "rows without a group key are left out of the balanced set"
        );
    }

    let mut balanced = RecordCollection::new();
    for (key, rows) in &grouped.groups {
        let n = rng.gen_range(range.min..=range.max);
        debug!(group = %key, available = rows.len(), drawn = n, "resampling group");
        balanced.extend(resample(rows, n, rng));
    }

    debug!(
        groups = grouped.groups.len(),
        rows = balanced.len(),
        "balanced collection"
    );
    Ok(balanced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeMap;

    fn corpus() -> RecordCollection {
        let mut rows = Vec::new();
        for i in 0..40 {
            rows.push(Record::new().with("model", format!("پراید {i}")).with("label", "pride"));
        }
        for i in 0..3 {
            rows.push(Record::new().with("model", format!("آزرا {i}")).with("label", "azera"));
        }
        rows.push(Record::new().with("model", "بی برچسب"));
        RecordCollection::from_records(rows)
    }

    fn counts(collection: &RecordCollection) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for record in collection {
            *counts.entry(record.group_key("label").unwrap()).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_group_counts_within_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let range = SampleRange::new(10, 15).unwrap();
        let balanced = balance(&corpus(), "label", range, &mut rng).unwrap();

        let counts = counts(&balanced);
        assert_eq!(counts.len(), 2);
        for (group, n) in &counts {
            assert!(range.contains(*n), "group {group} has {n} rows");
        }
        assert_eq!(counts.values().sum::<usize>(), balanced.len());
    }

    #[test]
    fn test_rows_come_from_own_group() {
        let mut rng = StdRng::seed_from_u64(11);
        let balanced = balance(&corpus(), "label", SampleRange::new(5, 5).unwrap(), &mut rng).unwrap();
        for record in &balanced {
            let model = record.text("model").unwrap();
            match record.group_key("label").as_deref() {
                Some("pride") => assert!(model.starts_with("پراید")),
                Some("azera") => assert!(model.starts_with("آزرا")),
                other => panic!("unexpected group {other:?}"),
            }
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let range = SampleRange::new(3, 30).unwrap();
        let a = balance(&corpus(), "label", range, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = balance(&corpus(), "label", range, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_draw_empties_group() {
        let mut rng = StdRng::seed_from_u64(1);
        let balanced = balance(&corpus(), "label", SampleRange::new(0, 0).unwrap(), &mut rng).unwrap();
        assert!(balanced.is_empty());
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let range = SampleRange { min: 9, max: 2 };
        assert!(balance(&corpus(), "label", range, &mut rng).is_err());
    }

    #[test]
    fn test_resample_empty_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(resample(&[], 4, &mut rng).is_empty());
    }
}
