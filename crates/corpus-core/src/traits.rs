//! Trait definitions for external collaborators of the cleaning pipeline.

use crate::calendar::CalendarNow;
use crate::error::CleanResult;

/// Base language canonicalization primitive.
///
/// Implementations fold compatibility characters, unify letter variants and
/// similar character-level cleanup. The cleaning rules treat it as opaque and
/// run it before any pattern matching.
pub trait BaseNormalizer: Send + Sync + std::fmt::Debug {
    /// Canonicalize the input text.
    ///
    /// # Errors
    /// Returns [`CleanError::Normalization`](crate::CleanError::Normalization)
    /// carrying the offending value when the input cannot be handled.
    fn normalize(&self, input: &str) -> CleanResult<String>;
}

/// Source of "now" in both calendar systems.
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// Current year in the Gregorian and Jalali calendars.
    fn now(&self) -> CalendarNow;
}

impl<T: BaseNormalizer + ?Sized> BaseNormalizer for Box<T> {
    fn normalize(&self, input: &str) -> CleanResult<String> {
        (**self).normalize(input)
    }
}

impl<T: Clock + ?Sized> Clock for Box<T> {
    fn now(&self) -> CalendarNow {
        (**self).now()
    }
}
