//! Fan-out / fan-in computation of the aggregate record.
//!
//! One unit of work per jurisdiction plus one that records the year. Units
//! run on the rayon pool and each returns its own value; nothing is shared
//! between them. Once all units have returned, their outputs are merged
//! into an [`AggregateRecord`] on the calling thread.

use hol_core::errors::Result;
use hol_core::Settings;
use hol_time::year_domain::{in_computus_domain, ComputusYear};
use hol_time::{FIRST_GREGORIAN_YEAR, LAST_COMPUTUS_YEAR};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::aggregate::AggregateRecord;
use crate::jurisdiction::{Jurisdiction, JurisdictionHolidays};

/// One independent unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Year,
    Jurisdiction(Jurisdiction),
}

/// What a unit hands back to the merge step.
#[derive(Debug)]
enum UnitOutput {
    Year(Option<i32>),
    Holidays(JurisdictionHolidays),
}

impl Unit {
    fn all() -> Vec<Unit> {
        std::iter::once(Unit::Year)
            .chain(Jurisdiction::ALL.into_iter().map(Unit::Jurisdiction))
            .collect()
    }

    fn run(self, year: i32) -> Result<UnitOutput> {
        match self {
            Unit::Year => {
                let record = ComputusYear::exact(year).map(ComputusYear::get);
                debug!(year, ?record, "year recorded");
                Ok(UnitOutput::Year(record))
            }
            Unit::Jurisdiction(j) => {
                let holidays = j.compute(year)?;
                debug!(year, jurisdiction = j.key(), "holidays computed");
                Ok(UnitOutput::Holidays(holidays))
            }
        }
    }
}

/// Computes aggregate records.
#[derive(Debug, Clone, Copy, Default)]
pub struct Orchestrator {
    settings: Settings,
}

impl Orchestrator {
    /// Orchestrator for the given run settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Year that [`run`](Self::run) computes.
    pub fn year(&self) -> i32 {
        self.settings.evaluation_year()
    }

    /// Compute the aggregate record for the configured year.
    pub fn run(&self) -> Result<AggregateRecord> {
        compute_aggregate(self.year())
    }
}

/// Compute every jurisdiction for `year` and merge the results.
///
/// Years outside `[1583, 4099]` still produce a full record: Easter-based
/// holidays are computed from the nearest bound of that window, all other
/// holidays from `year` itself, and the `Year` field is left unset.
///
/// # Errors
/// Fails if `year` is outside the representable date range.
pub fn compute_aggregate(year: i32) -> Result<AggregateRecord> {
    info!(year, "computing holidays");
    if !in_computus_domain(year) {
        warn!(
            year,
            clamped = ComputusYear::clamped(year).get(),
            "year outside [{FIRST_GREGORIAN_YEAR}, {LAST_COMPUTUS_YEAR}]; Easter-based holidays use the clamped year"
        );
    }

    let outputs = Unit::all()
        .into_par_iter()
        .map(|unit| unit.run(year))
        .collect::<Result<Vec<_>>>()?;

    let record = outputs
        .into_iter()
        .fold(AggregateRecord::builder(), |builder, output| match output {
            UnitOutput::Year(record) => builder.year(record),
            UnitOutput::Holidays(holidays) => builder.holidays(holidays),
        })
        .build()?;

    info!(year, "holidays computed for all jurisdictions");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_unit_per_jurisdiction_plus_year() {
        let units = Unit::all();
        assert_eq!(units.len(), 9);
        assert_eq!(units[0], Unit::Year);
    }

    #[test]
    fn year_unit_records_only_domain_years() {
        match Unit::Year.run(2024).unwrap() {
            UnitOutput::Year(y) => assert_eq!(y, Some(2024)),
            other => panic!("unexpected {other:?}"),
        }
        match Unit::Year.run(1500).unwrap() {
            UnitOutput::Year(y) => assert_eq!(y, None),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn orchestrator_uses_settings_year() {
        let orchestrator = Orchestrator::new(Settings::new().with_evaluation_year(2025));
        assert_eq!(orchestrator.year(), 2025);
        assert_eq!(orchestrator.run().unwrap().year, Some(2025));
    }

    #[test]
    fn out_of_range_year_fails() {
        assert!(compute_aggregate(2_000_000).is_err());
    }
}
