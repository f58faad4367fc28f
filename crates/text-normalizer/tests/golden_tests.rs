//! Golden tests for the normalize → strip → year chain.
//!
//! These tests verify that representative ads reduce to the expected model
//! text and model year, with "now" pinned to 1403 / 2024.

use corpus_core::CalendarNow;
use text_normalizer::{extract_year, EntityStripper, Normalizer};

const NOW: CalendarNow = CalendarNow {
    gregorian_year: 2024,
    jalali_year: 1403,
};

/// Test case structure for golden tests.
struct GoldenTestCase {
    input: &'static str,
    expected: &'static str,
    year: Option<i32>,
    description: &'static str,
}

const GOLDEN_TESTS: &[GoldenTestCase] = &[
    GoldenTestCase {
        input: "مدل 1398 سفید تمیز",
        expected: "",
        year: Some(2019),
        description: "Only year, color and filler",
    },
    GoldenTestCase {
        input: "پراید ۱۳۱، مدل ۹۸، سفید",
        expected: "پراید 131",
        year: Some(2019),
        description: "Two-digit Jalali year with Persian digits",
    },
    GoldenTestCase {
        input: "پژو ۲۰۶ تیپ ۲، مدل ۱۴۰۰، ۵۰ هزار کیلومتر کارکرد، بیمه دارد",
        expected: "پژو 206 تیپ 2",
        year: Some(2021),
        description: "Mileage phrase and filler",
    },
    GoldenTestCase {
        input: "سمند LX، ۱۸۰۰ سی\u{200C}سی، مدل_۱۳۹۰، نوک\u{200C}مدادی",
        expected: "سمند LX",
        year: Some(2011),
        description: "Engine size, underscore marker, ZWNJ color",
    },
    GoldenTestCase {
        input: "تیبا مدل ۹۹ و مدل ۱۴۰۰",
        expected: "تیبا مدل 99 مدل 1400",
        year: None,
        description: "Conflicting markers keep the text",
    },
    GoldenTestCase {
        input: "هیوندای النترا مدل 2016 مشکی فول",
        expected: "هیوندای النترا",
        year: Some(2016),
        description: "Gregorian year",
    },
    GoldenTestCase {
        input: "کیا سراتو آپشنال",
        expected: "کیا سراتو",
        year: None,
        description: "No year marker",
    },
    GoldenTestCase {
        input: "نیسان ماکسیما اصفهان مدل ۱۳۸۵",
        expected: "نیسان ماکسیما",
        year: Some(2006),
        description: "Province name",
    },
];

fn clean(normalizer: &Normalizer, stripper: &EntityStripper, input: &str) -> (String, Option<i32>) {
    let text = normalizer.normalize(input).expect("normalization should not fail");
    let mut text = stripper.strip(&text);
    let year = extract_year(&text, NOW).map(|candidate| {
        text = text.replace(&candidate.span, "");
        candidate.year
    });
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    (text, year)
}

#[test]
fn test_golden_corpus() {
    let normalizer = Normalizer::new();
    let stripper = EntityStripper::with_defaults().expect("default vocabulary compiles");

    for (i, test) in GOLDEN_TESTS.iter().enumerate() {
        let (text, year) = clean(&normalizer, &stripper, test.input);

        assert_eq!(
            (text.as_str(), year),
            (test.expected, test.year),
            "\nGolden Test #{} FAILED: {}\nInput:    '{}'",
            i + 1,
            test.description,
            test.input,
        );
    }
}

/// Properties that must hold for any input.
#[test]
fn test_edge_cases() {
    let normalizer = Normalizer::new();
    let stripper = EntityStripper::with_defaults().unwrap();

    // Whitespace-only input stays whitespace-only
    let result = normalizer.normalize("   ").unwrap();
    assert_eq!(result.trim(), "");

    // Pure latin text passes through the normalizer untouched
    assert_eq!(normalizer.normalize("Hello World").unwrap(), "Hello World");

    // Stripping twice equals stripping once
    for test in GOLDEN_TESTS {
        let normalized = normalizer.normalize(test.input).unwrap();
        let once = stripper.strip(&normalized);
        assert_eq!(stripper.strip(&once), once, "not idempotent: {}", test.input);
    }
}
