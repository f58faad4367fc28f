//! Row filters for the drop stage.
//!
//! Every rejection here is an explicit predicate decision. A row whose text
//! field is missing or not text aborts the filter with
//! [`CleanError::MalformedInput`](corpus_core::CleanError::MalformedInput).

use corpus_core::vocab::{BARTER_KEYWORDS, INSTALLMENT_KEYWORD};
use corpus_core::{CleanResult, RecordCollection};
use text_normalizer::count_year_markers;
use tracing::instrument;

/// True when `text` has no character outside ASCII.
///
/// The empty string is vacuously ASCII-only and therefore dropped by
/// [`drop_foreign_only`].
pub fn is_foreign_only(text: &str) -> bool {
    text.is_ascii()
}

/// Drop rows whose `field` is entirely ASCII.
#[instrument(level = "debug", skip(collection), fields(rows = collection.len()))]
pub fn drop_foreign_only(collection: &RecordCollection, field: &str) -> CleanResult<RecordCollection> {
    collection.try_filter(|record| Ok(!is_foreign_only(record.text(field)?)))
}

/// Listing validity rules: at most one year marker and no barter keyword.
#[derive(Debug, Clone)]
pub struct ValidityFilter {
    barter_keywords: Vec<String>,
    installment_keyword: String,
}

impl Default for ValidityFilter {
    fn default() -> Self {
        Self {
            barter_keywords: BARTER_KEYWORDS.iter().map(|k| (*k).to_string()).collect(),
            installment_keyword: INSTALLMENT_KEYWORD.to_string(),
        }
    }
}

impl ValidityFilter {
    /// Create a filter with the default keywords.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the barter keywords.
    pub fn with_barter_keywords(mut self, keywords: Vec<String>) -> Self {
        self.barter_keywords = keywords;
        self
    }

    /// Replace the installment keyword.
    pub fn with_installment_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.installment_keyword = keyword.into();
        self
    }

    /// Check whether `text` mentions a barter or trade offer.
    pub fn has_barter_keyword(&self, text: &str) -> bool {
        self.barter_keywords.iter().any(|k| text.contains(k.as_str()))
    }

    /// A listing is valid with at most one year marker and no barter keyword.
    pub fn is_valid_listing(&self, text: &str) -> bool {
        count_year_markers(text) <= 1 && !self.has_barter_keyword(text)
    }

    /// Check whether `text` is an installment-sale ad.
    pub fn is_installment_ad(&self, text: &str) -> bool {
        text.contains(self.installment_keyword.as_str())
    }

    /// Drop rows with ambiguous year markers or barter keywords.
    #[instrument(level = "debug", skip(self, collection), fields(rows = collection.len()))]
    pub fn drop_invalid(
        &self,
        collection: &RecordCollection,
        field: &str,
    ) -> CleanResult<RecordCollection> {
        collection.try_filter(|record| Ok(self.is_valid_listing(record.text(field)?)))
    }

    /// Drop installment-sale ads.
    #[instrument(level = "debug", skip(self, collection), fields(rows = collection.len()))]
    pub fn drop_installment_ads(
        &self,
        collection: &RecordCollection,
        field: &str,
    ) -> CleanResult<RecordCollection> {
        collection.try_filter(|record| Ok(!self.is_installment_ad(record.text(field)?)))
    }
}

/// [`ValidityFilter::is_valid_listing`] with the default keywords.
pub fn is_valid_listing(text: &str) -> bool {
    ValidityFilter::default().is_valid_listing(text)
}
