//! # hol-time
//!
//! Date primitives and the shared holiday rules every jurisdiction is built
//! from: Gregorian Easter, weekday locators, weekend observance shifts and
//! the equinox model.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// Gregorian Easter and the Easter-relative feasts.
pub mod easter;

/// March / September equinox instants.
pub mod equinox;

/// First / second / n-th / last weekday of a month.
pub mod locator;

/// `Month`, month of the year.
pub mod month;

/// Weekend observance shifts and the Christmas pair rule.
pub mod observance;

/// `Weekday`, day of the week.
pub mod weekday;

/// Year-domain policy for Easter-dependent dates.
pub mod year_domain;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use equinox::Equinox;
pub use month::Month;
pub use observance::ChristmasPair;
pub use weekday::Weekday;
pub use year_domain::{ComputusYear, FIRST_GREGORIAN_YEAR, LAST_COMPUTUS_YEAR};
