//! Academic-year derivation.
//!
//! The academic year is a string spanning two calendar years. The year
//! rolls over in July: a date in January--June belongs to the academic
//! year that started the previous July.

use chrono::{DateTime, Datelike, Utc};

/// First month (1-based) of a new academic year.
const CUTOVER_MONTH: u32 = 7;

/// Derive the academic year string (`"YYYY-YYYY"`) for a given instant.
pub fn derive(at: DateTime<Utc>) -> String {
    let year = at.year();
    if at.month() < CUTOVER_MONTH {
        format!("{}-{}", year - 1, year)
    } else {
        format!("{}-{}", year, year + 1)
    }
}

/// The academic year containing the current date.
pub fn current() -> String {
    derive(Utc::now())
}
