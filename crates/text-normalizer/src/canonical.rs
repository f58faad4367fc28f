//! Default base canonicalization for Persian text.

use corpus_core::{BaseNormalizer, CleanResult};
use unicode_normalization::UnicodeNormalization;

use crate::rules::ZWNJ;

/// Character-level canonicalizer for Persian ad text.
///
/// Applies NFKC (folds Arabic presentation forms and other compatibility
/// characters), unifies Arabic letter variants with their Persian forms,
/// drops diacritics and tatweel, folds Persian and Arabic-Indic digits to
/// ASCII, and squeezes runs of zero-width non-joiners.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersianCanonicalizer;

impl PersianCanonicalizer {
    /// Create a new canonicalizer.
    pub fn new() -> Self {
        Self
    }
}

impl BaseNormalizer for PersianCanonicalizer {
    fn normalize(&self, input: &str) -> CleanResult<String> {
        let mut out = String::with_capacity(input.len());
        let mut prev_zwnj = false;

        for c in input.nfkc() {
            if is_diacritic(c) || c == '\u{0640}' {
                continue;
            }
            if c == ZWNJ {
                if !prev_zwnj {
                    out.push(c);
                }
                prev_zwnj = true;
                continue;
            }
            prev_zwnj = false;
            out.push(fold_char(c));
        }

        Ok(out)
    }
}

/// Arabic harakat, tanwin, shadda, sukun and superscript alef.
fn is_diacritic(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{0652}' | '\u{0670}')
}

fn fold_char(c: char) -> char {
    match c {
        'ك' => 'ک',
        'ي' | 'ى' => 'ی',
        'ة' => 'ه',
        '\u{06F0}'..='\u{06F9}' => ascii_digit(c as u32 - 0x06F0),
        '\u{0660}'..='\u{0669}' => ascii_digit(c as u32 - 0x0660),
        _ => c,
    }
}

fn ascii_digit(value: u32) -> char {
    char::from_digit(value, 10).unwrap_or('0')
}

/// Numeric value of an ASCII, Persian or Arabic-Indic digit.
pub fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => c.to_digit(10),
        '\u{06F0}'..='\u{06F9}' => Some(c as u32 - 0x06F0),
        '\u{0660}'..='\u{0669}' => Some(c as u32 - 0x0660),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canon(s: &str) -> String {
        PersianCanonicalizer.normalize(s).unwrap()
    }

    #[test]
    fn test_arabic_letters_fold_to_persian() {
        assert_eq!(canon("كيا"), "کیا");
        assert_eq!(canon("مدل ى"), "مدل ی");
    }

    #[test]
    fn test_digits_fold_to_ascii() {
        assert_eq!(canon("مدل ۱۳۹۸"), "مدل 1398");
        assert_eq!(canon("٢٠٢٠"), "2020");
    }

    #[test]
    fn test_diacritics_and_tatweel_removed() {
        assert_eq!(canon("سـفـيـد"), "سفید");
        assert_eq!(canon("مُدِل"), "مدل");
    }

    #[test]
    fn test_repeated_zwnj_squeezed() {
        assert_eq!(canon("قهوه\u{200C}\u{200C}ای"), "قهوه\u{200C}ای");
    }

    #[test]
    fn test_presentation_forms_fold() {
        // Arabic presentation form of LAM (isolated) folds to the base letter.
        assert_eq!(canon("\u{FEDD}"), "\u{0644}");
    }

    #[test]
    fn test_digit_value() {
        assert_eq!(digit_value('7'), Some(7));
        assert_eq!(digit_value('۹'), Some(9));
        assert_eq!(digit_value('٣'), Some(3));
        assert_eq!(digit_value('x'), None);
    }
}
