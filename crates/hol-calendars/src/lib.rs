//! # hol-calendars
//!
//! Holiday engines for eight calendars (US federal, NYSE, Germany, ECB
//! Target2, Netherlands, United Kingdom, Australia, Japan), the regional
//! aggregate record and the orchestrator that fills it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Regional grouping records and the aggregate record.
pub mod aggregate;

/// Per-jurisdiction holiday engines.
pub mod calendars;

/// `HolidaySet` trait and the `Holiday` value.
pub mod holiday_set;

/// `Jurisdiction` and `Region`.
pub mod jurisdiction;

/// Parallel computation of the aggregate record.
pub mod orchestrator;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use aggregate::{AggregateBuilder, AggregateRecord, Americas, AsiaPacific, Europe};
pub use calendars::australia::AustraliaHolidays;
pub use calendars::germany::GermanyHolidays;
pub use calendars::japan::JapanBankHolidays;
pub use calendars::netherlands::NetherlandsHolidays;
pub use calendars::target::EcbTarget2Holidays;
pub use calendars::united_kingdom::UnitedKingdomHolidays;
pub use calendars::united_states::{NyseHolidays, UsFederalHolidays};
pub use holiday_set::{Holiday, HolidaySet};
pub use jurisdiction::{Jurisdiction, JurisdictionHolidays, Region};
pub use orchestrator::{compute_aggregate, Orchestrator};
