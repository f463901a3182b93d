//! Germany: nationwide public holidays.
//!
//! Fields serialize under their German names. Only New Year's Day is moved
//! off a weekend; every other date is kept as is.

use hol_core::errors::Result;
use hol_time::easter::{ascension, easter_monday, good_friday, whit_monday};
use hol_time::Date;
use serde::Serialize;

use super::new_years_day;
use crate::holiday_set::HolidaySet;
use crate::jurisdiction::Jurisdiction;

/// German holidays observed in every state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GermanyHolidays {
    /// Neujahrstag: January 1 (weekend → Monday).
    #[serde(rename = "Neujahrstag")]
    pub new_years_day: Date,
    /// Karfreitag.
    #[serde(rename = "Karfreitag")]
    pub good_friday: Date,
    /// Ostermontag.
    #[serde(rename = "Ostermontag")]
    pub easter_monday: Date,
    /// Tag der Arbeit: May 1.
    #[serde(rename = "TagderArbeit")]
    pub labour_day: Date,
    /// Christi Himmelfahrt: Easter Sunday + 40.
    #[serde(rename = "ChristiHimmelfahrt")]
    pub ascension_day: Date,
    /// Pfingstmontag: Easter Sunday + 50.
    #[serde(rename = "Pfingstmontag")]
    pub whit_monday: Date,
    /// Tag der Deutschen Einheit: October 3.
    #[serde(rename = "TagderDeutschenEinheit")]
    pub german_unity_day: Date,
    /// Weihnachtstag: December 25.
    #[serde(rename = "Weihnachtstag")]
    pub christmas_day: Date,
    /// Zweiter Weihnachtsfeiertag: December 26.
    #[serde(rename = "ZweiterWeihnachtsfeiertag")]
    pub boxing_day: Date,
}

impl GermanyHolidays {
    /// German holidays for `year`.
    pub fn for_year(year: i32) -> Result<Self> {
        Ok(Self {
            new_years_day: new_years_day(year)?,
            good_friday: good_friday(year),
            easter_monday: easter_monday(year),
            labour_day: Date::from_ymd(year, 5, 1)?,
            ascension_day: ascension(year),
            whit_monday: whit_monday(year),
            german_unity_day: Date::from_ymd(year, 10, 3)?,
            christmas_day: Date::from_ymd(year, 12, 25)?,
            boxing_day: Date::from_ymd(year, 12, 26)?,
        })
    }
}

impl HolidaySet for GermanyHolidays {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::Germany
    }

    fn entries(&self) -> Vec<(&'static str, Option<Date>)> {
        vec![
            ("Neujahrstag", Some(self.new_years_day)),
            ("Karfreitag", Some(self.good_friday)),
            ("Ostermontag", Some(self.easter_monday)),
            ("TagderArbeit", Some(self.labour_day)),
            ("ChristiHimmelfahrt", Some(self.ascension_day)),
            ("Pfingstmontag", Some(self.whit_monday)),
            ("TagderDeutschenEinheit", Some(self.german_unity_day)),
            ("Weihnachtstag", Some(self.christmas_day)),
            ("ZweiterWeihnachtsfeiertag", Some(self.boxing_day)),
        ]
    }
}
