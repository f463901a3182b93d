//! One holiday engine per jurisdiction.
//!
//! Each engine is a plain record with one field per named holiday and a
//! `for_year` constructor that fills every field from the shared rules in
//! `hol_time`. Engines never read each other's output.

/// Australia (Australian Capital Territory).
pub mod australia;

/// Germany.
pub mod germany;

/// Japanese bank holidays.
pub mod japan;

/// Netherlands.
pub mod netherlands;

/// ECB Target2.
pub mod target;

/// United Kingdom (England and Wales).
pub mod united_kingdom;

/// US federal and NYSE.
pub mod united_states;

use hol_core::errors::Result;
use hol_time::observance::shift_weekend_to_monday;
use hol_time::Date;

/// January 1, moved to Monday when it falls on a weekend. Shared by every
/// calendar except Japan.
pub(crate) fn new_years_day(year: i32) -> Result<Date> {
    Ok(shift_weekend_to_monday(Date::from_ymd(year, 1, 1)?))
}
