//! `HolidaySet` trait: uniform read access to one jurisdiction's holidays.
//!
//! Every engine in [`crate::calendars`] produces a plain record with one
//! field per named holiday. The trait exposes those fields generically, in
//! declaration order, so callers can list or query a calendar without
//! knowing its concrete type.

use hol_time::Date;
use serde::Serialize;

use crate::jurisdiction::Jurisdiction;

/// One observed holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Holiday {
    /// Field name of the holiday in its jurisdiction record (e.g. `"GoodFriday"`).
    pub name: &'static str,
    /// Observed date.
    pub date: Date,
}

/// The holidays of one jurisdiction for one year.
pub trait HolidaySet: std::fmt::Debug + Send + Sync {
    /// Which calendar this set belongs to.
    fn jurisdiction(&self) -> Jurisdiction;

    /// Every named holiday in declaration order. `None` marks a holiday that
    /// is not observed in this year.
    fn entries(&self) -> Vec<(&'static str, Option<Date>)>;

    /// Observed holidays only, in declaration order.
    fn holidays(&self) -> Vec<Holiday> {
        self.entries()
            .into_iter()
            .filter_map(|(name, date)| date.map(|date| Holiday { name, date }))
            .collect()
    }

    /// Observed date of the holiday called `name`, if it exists and is
    /// observed.
    fn observed(&self, name: &str) -> Option<Date> {
        self.entries()
            .into_iter()
            .find(|(n, _)| *n == name)
            .and_then(|(_, date)| date)
    }

    /// `true` if any holiday of this set is observed on `date`.
    fn is_holiday(&self, date: Date) -> bool {
        self.entries().into_iter().any(|(_, d)| d == Some(date))
    }
}
