//! Gregorian and Jalali (Solar Hijri) year arithmetic.
//!
//! Only the year matters to the cleaning rules, but the Jalali year changes
//! at Nowruz, which moves between March 19 and March 22 depending on the
//! 2820-year cycle. [`nowruz_march_day`] computes it exactly for the
//! supported range.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::traits::Clock;

/// Fixed offset between a Jalali year and the Gregorian year it mostly overlaps.
pub const JALALI_OFFSET: i32 = 621;

/// Jalali years at which the leap cycle pattern breaks.
const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// Current year in both calendar systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarNow {
    /// Current Gregorian year.
    pub gregorian_year: i32,
    /// Current Jalali year.
    pub jalali_year: i32,
}

impl CalendarNow {
    /// Create from explicit years.
    pub fn new(gregorian_year: i32, jalali_year: i32) -> Self {
        Self {
            gregorian_year,
            jalali_year,
        }
    }

    /// Derive both years from a Gregorian calendar date.
    pub fn from_gregorian(year: i32, month: u32, day: u32) -> Self {
        Self {
            gregorian_year: year,
            jalali_year: jalali_year(year, month, day),
        }
    }
}

/// Day of March (Gregorian) on which Farvardin 1 of Jalali year `jy` falls.
///
/// Valid for Jalali years in `-61..3178`.
pub fn nowruz_march_day(jy: i32) -> i32 {
    let gy = jy + JALALI_OFFSET;
    let mut leap_j = -14;
    let mut jp = BREAKS[0];
    let mut jump = 0;

    for &jm in &BREAKS[1..] {
        jump = jm - jp;
        if jy < jm {
            break;
        }
        leap_j += jump / 33 * 8 + (jump % 33) / 4;
        jp = jm;
    }

    let n = jy - jp;
    leap_j += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }

    let leap_g = gy / 4 - (gy / 100 + 1) * 3 / 4 - 150;
    20 + leap_j - leap_g
}

/// Jalali year containing the given Gregorian date.
pub fn jalali_year(year: i32, month: u32, day: u32) -> i32 {
    let jy = year - JALALI_OFFSET;
    let march = nowruz_march_day(jy);
    let on_or_after_nowruz = month > 3 || (month == 3 && day as i32 >= march);
    if on_or_after_nowruz {
        jy
    } else {
        jy - 1
    }
}

/// Clock backed by the local system date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> CalendarNow {
        let today = chrono::Local::now().date_naive();
        CalendarNow::from_gregorian(today.year(), today.month(), today.day())
    }
}

/// Clock pinned to fixed years, for reproducible runs and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub CalendarNow);

impl FixedClock {
    /// Create a clock pinned to the given years.
    pub fn new(gregorian_year: i32, jalali_year: i32) -> Self {
        Self(CalendarNow::new(gregorian_year, jalali_year))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> CalendarNow {
        self.0
    }
}
