//! Australia (Australian Capital Territory).

use hol_core::errors::Result;
use hol_time::easter::{easter_monday, good_friday};
use hol_time::observance::shift_weekend_to_monday;
use hol_time::Date;
use serde::Serialize;

use super::new_years_day;
use crate::holiday_set::HolidaySet;
use crate::jurisdiction::Jurisdiction;

/// ACT public holidays.
///
/// * New Year's Day (Jan 1)
/// * Australia Day (Jan 26)
/// * Good Friday
/// * Easter Monday
/// * Anzac Day (Apr 25)
/// * Christmas Day (Dec 25)
///
/// Every fixed date moves to the following Monday when it falls on a
/// weekend. There is no Boxing Day collision rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AustraliaHolidays {
    /// January 1 (weekend → Monday).
    pub new_years_day: Date,
    /// January 26 (weekend → Monday).
    pub australia_day: Date,
    /// Easter Sunday − 2.
    pub good_friday: Date,
    /// Easter Sunday + 1.
    pub easter_monday: Date,
    /// April 25 (weekend → Monday).
    pub anzac_day: Date,
    /// December 25 (weekend → Monday).
    pub christmas_day: Date,
}

impl AustraliaHolidays {
    /// ACT holidays for `year`.
    pub fn for_year(year: i32) -> Result<Self> {
        let fixed = |month, day| Date::from_ymd(year, month, day).map(shift_weekend_to_monday);
        Ok(Self {
            new_years_day: new_years_day(year)?,
            australia_day: fixed(1, 26)?,
            good_friday: good_friday(year),
            easter_monday: easter_monday(year),
            anzac_day: fixed(4, 25)?,
            christmas_day: fixed(12, 25)?,
        })
    }
}

impl HolidaySet for AustraliaHolidays {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::Australia
    }

    fn entries(&self) -> Vec<(&'static str, Option<Date>)> {
        vec![
            ("NewYearsDay", Some(self.new_years_day)),
            ("AustraliaDay", Some(self.australia_day)),
            ("GoodFriday", Some(self.good_friday)),
            ("EasterMonday", Some(self.easter_monday)),
            ("AnzacDay", Some(self.anzac_day)),
            ("ChristmasDay", Some(self.christmas_day)),
        ]
    }
}
