//! ECB Target2 settlement holidays.

use hol_core::errors::Result;
use hol_time::easter::{easter_monday, good_friday};
use hol_time::observance::christmas_pair;
use hol_time::Date;
use serde::Serialize;

use super::new_years_day;
use crate::holiday_set::HolidaySet;
use crate::jurisdiction::Jurisdiction;

/// Target2 closing days.
///
/// * New Year's Day (Jan 1; weekend → Mon)
/// * Good Friday
/// * Easter Monday
/// * Labour Day (May 1, not shifted)
/// * Christmas Day and Christmas Holiday, resolved like the UK pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EcbTarget2Holidays {
    /// January 1 (weekend → Monday).
    pub new_years_day: Date,
    /// Easter Sunday − 2.
    pub good_friday: Date,
    /// Easter Sunday + 1.
    pub easter_monday: Date,
    /// May 1.
    pub labor_day: Date,
    /// Observed Christmas Day.
    pub christmas_day: Date,
    /// Observed December 26 holiday.
    pub christmas_holiday: Date,
}

impl EcbTarget2Holidays {
    /// Target2 holidays for `year`.
    pub fn for_year(year: i32) -> Result<Self> {
        let christmas = christmas_pair(year)?;
        Ok(Self {
            new_years_day: new_years_day(year)?,
            good_friday: good_friday(year),
            easter_monday: easter_monday(year),
            labor_day: Date::from_ymd(year, 5, 1)?,
            christmas_day: christmas.christmas_day,
            christmas_holiday: christmas.second_day,
        })
    }
}

impl HolidaySet for EcbTarget2Holidays {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::EcbTarget2
    }

    fn entries(&self) -> Vec<(&'static str, Option<Date>)> {
        vec![
            ("NewYearsDay", Some(self.new_years_day)),
            ("GoodFriday", Some(self.good_friday)),
            ("EasterMonday", Some(self.easter_monday)),
            ("LaborDay", Some(self.labor_day)),
            ("ChristmasDay", Some(self.christmas_day)),
            ("ChristmasHoliday", Some(self.christmas_holiday)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn target_2025() {
        let h = EcbTarget2Holidays::for_year(2025).unwrap();
        assert_eq!(h.new_years_day, date(2025, 1, 1));
        assert_eq!(h.good_friday, date(2025, 4, 18));
        assert_eq!(h.easter_monday, date(2025, 4, 21));
        assert_eq!(h.labor_day, date(2025, 5, 1));
        assert_eq!(h.christmas_day, date(2025, 12, 25));
        assert_eq!(h.christmas_holiday, date(2025, 12, 26));
    }

    #[test]
    fn labor_day_is_not_shifted() {
        // May 1, 2021 is a Saturday
        assert_eq!(EcbTarget2Holidays::for_year(2021).unwrap().labor_day, date(2021, 5, 1));
    }

    #[test]
    fn christmas_pair_matches_uk_rule() {
        let h = EcbTarget2Holidays::for_year(2021).unwrap();
        assert_eq!(h.christmas_day, date(2021, 12, 27));
        assert_eq!(h.christmas_holiday, date(2021, 12, 28));
        let h = EcbTarget2Holidays::for_year(2020).unwrap();
        assert_eq!(h.christmas_day, date(2020, 12, 25));
        assert_eq!(h.christmas_holiday, date(2020, 12, 28));
    }
}
