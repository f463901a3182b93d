//! The eight supported calendars and the regions they are grouped under.

use std::fmt;

use hol_core::errors::Result;
use hol_time::Date;
use serde::Serialize;

use crate::calendars::australia::AustraliaHolidays;
use crate::calendars::germany::GermanyHolidays;
use crate::calendars::japan::JapanBankHolidays;
use crate::calendars::netherlands::NetherlandsHolidays;
use crate::calendars::target::EcbTarget2Holidays;
use crate::calendars::united_kingdom::UnitedKingdomHolidays;
use crate::calendars::united_states::{NyseHolidays, UsFederalHolidays};
use crate::holiday_set::HolidaySet;

/// Regional grouping used by the aggregate record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Region {
    /// US federal and NYSE.
    Americas,
    /// Germany, ECB Target2, Netherlands, United Kingdom.
    Europe,
    /// Australia and Japan.
    AsiaPacific,
}

impl Region {
    /// All regions, in aggregate order.
    pub const ALL: [Region; 3] = [Region::Americas, Region::Europe, Region::AsiaPacific];

    /// Key of the region in the aggregate record.
    pub fn key(&self) -> &'static str {
        match self {
            Region::Americas => "Americas",
            Region::Europe => "Europe",
            Region::AsiaPacific => "AsiaPacific",
        }
    }

    /// Jurisdictions belonging to this region, in aggregate order.
    pub fn jurisdictions(&self) -> impl Iterator<Item = Jurisdiction> + '_ {
        Jurisdiction::ALL
            .into_iter()
            .filter(move |j| j.region() == *self)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One holiday calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Jurisdiction {
    /// US federal holidays, observed.
    UsFederal,
    /// New York Stock Exchange closures.
    Nyse,
    /// Germany (nationwide).
    Germany,
    /// ECB Target2 settlement holidays.
    EcbTarget2,
    /// Netherlands.
    Netherlands,
    /// England and Wales bank holidays.
    UnitedKingdom,
    /// Australia (Australian Capital Territory).
    Australia,
    /// Japanese bank holidays.
    Japan,
}

impl Jurisdiction {
    /// All jurisdictions, in aggregate order.
    pub const ALL: [Jurisdiction; 8] = [
        Jurisdiction::UsFederal,
        Jurisdiction::Nyse,
        Jurisdiction::Germany,
        Jurisdiction::EcbTarget2,
        Jurisdiction::Netherlands,
        Jurisdiction::UnitedKingdom,
        Jurisdiction::Australia,
        Jurisdiction::Japan,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Jurisdiction::UsFederal => "United States (Federal)",
            Jurisdiction::Nyse => "United States (NYSE)",
            Jurisdiction::Germany => "Germany",
            Jurisdiction::EcbTarget2 => "ECB Target2",
            Jurisdiction::Netherlands => "Netherlands",
            Jurisdiction::UnitedKingdom => "United Kingdom",
            Jurisdiction::Australia => "Australia (ACT)",
            Jurisdiction::Japan => "Japan (Bank)",
        }
    }

    /// Key of the jurisdiction inside its region in the aggregate record.
    pub fn key(&self) -> &'static str {
        match self {
            Jurisdiction::UsFederal => "USFederalHolidaysObserved",
            Jurisdiction::Nyse => "NYSEHolidaysObserved",
            Jurisdiction::Germany => "DEHolidays",
            Jurisdiction::EcbTarget2 => "ECBTarget2Holidays",
            Jurisdiction::Netherlands => "NLHolidays",
            Jurisdiction::UnitedKingdom => "UKHolidays",
            Jurisdiction::Australia => "AustralianHolidays",
            Jurisdiction::Japan => "JapanBankHolidays",
        }
    }

    /// Region the jurisdiction is grouped under.
    pub fn region(&self) -> Region {
        match self {
            Jurisdiction::UsFederal | Jurisdiction::Nyse => Region::Americas,
            Jurisdiction::Germany
            | Jurisdiction::EcbTarget2
            | Jurisdiction::Netherlands
            | Jurisdiction::UnitedKingdom => Region::Europe,
            Jurisdiction::Australia | Jurisdiction::Japan => Region::AsiaPacific,
        }
    }

    /// Run this jurisdiction's engine for `year`.
    ///
    /// # Errors
    /// Fails only if `year` is outside the representable date range.
    pub fn compute(&self, year: i32) -> Result<JurisdictionHolidays> {
        Ok(match self {
            Jurisdiction::UsFederal => UsFederalHolidays::for_year(year)?.into(),
            Jurisdiction::Nyse => NyseHolidays::for_year(year)?.into(),
            Jurisdiction::Germany => GermanyHolidays::for_year(year)?.into(),
            Jurisdiction::EcbTarget2 => EcbTarget2Holidays::for_year(year)?.into(),
            Jurisdiction::Netherlands => NetherlandsHolidays::for_year(year)?.into(),
            Jurisdiction::UnitedKingdom => UnitedKingdomHolidays::for_year(year)?.into(),
            Jurisdiction::Australia => AustraliaHolidays::for_year(year)?.into(),
            Jurisdiction::Japan => JapanBankHolidays::for_year(year)?.into(),
        })
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The output of any one engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JurisdictionHolidays {
    /// US federal.
    UsFederal(UsFederalHolidays),
    /// NYSE.
    Nyse(NyseHolidays),
    /// Germany.
    Germany(GermanyHolidays),
    /// ECB Target2.
    EcbTarget2(EcbTarget2Holidays),
    /// Netherlands.
    Netherlands(NetherlandsHolidays),
    /// United Kingdom.
    UnitedKingdom(UnitedKingdomHolidays),
    /// Australia.
    Australia(AustraliaHolidays),
    /// Japan.
    Japan(JapanBankHolidays),
}

impl JurisdictionHolidays {
    /// Borrow the concrete record as a trait object.
    pub fn as_holiday_set(&self) -> &dyn HolidaySet {
        match self {
            JurisdictionHolidays::UsFederal(h) => h,
            JurisdictionHolidays::Nyse(h) => h,
            JurisdictionHolidays::Germany(h) => h,
            JurisdictionHolidays::EcbTarget2(h) => h,
            JurisdictionHolidays::Netherlands(h) => h,
            JurisdictionHolidays::UnitedKingdom(h) => h,
            JurisdictionHolidays::Australia(h) => h,
            JurisdictionHolidays::Japan(h) => h,
        }
    }
}

impl HolidaySet for JurisdictionHolidays {
    fn jurisdiction(&self) -> Jurisdiction {
        self.as_holiday_set().jurisdiction()
    }

    fn entries(&self) -> Vec<(&'static str, Option<Date>)> {
        self.as_holiday_set().entries()
    }
}

macro_rules! impl_from_holidays {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for JurisdictionHolidays {
                fn from(h: $ty) -> Self {
                    JurisdictionHolidays::$variant(h)
                }
            }
        )*
    };
}

impl_from_holidays!(
    UsFederal(UsFederalHolidays),
    Nyse(NyseHolidays),
    Germany(GermanyHolidays),
    EcbTarget2(EcbTarget2Holidays),
    Netherlands(NetherlandsHolidays),
    UnitedKingdom(UnitedKingdomHolidays),
    Australia(AustraliaHolidays),
    Japan(JapanBankHolidays),
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_region_has_its_jurisdictions() {
        let americas: Vec<_> = Region::Americas.jurisdictions().collect();
        assert_eq!(americas, vec![Jurisdiction::UsFederal, Jurisdiction::Nyse]);
        assert_eq!(Region::Europe.jurisdictions().count(), 4);
        assert_eq!(Region::AsiaPacific.jurisdictions().count(), 2);
    }

    #[test]
    fn compute_tags_the_result() {
        for j in Jurisdiction::ALL {
            let h = j.compute(2024).unwrap();
            assert_eq!(h.jurisdiction(), j);
            assert!(!h.holidays().is_empty(), "{j}");
        }
    }

    #[test]
    fn compute_fails_outside_date_range() {
        assert!(Jurisdiction::UsFederal.compute(i32::MAX).is_err());
        assert!(Jurisdiction::Japan.compute(i32::MIN).is_err());
    }
}
