//! United Kingdom bank holidays (England and Wales).

use hol_core::errors::Result;
use hol_time::easter::{easter_monday, good_friday};
use hol_time::locator::{first_weekday, last_weekday};
use hol_time::observance::christmas_pair;
use hol_time::{Date, Month, Weekday};
use serde::Serialize;

use super::new_years_day;
use crate::holiday_set::HolidaySet;
use crate::jurisdiction::Jurisdiction;

/// UK bank holidays.
///
/// * New Year's Day (Jan 1; weekend → Mon)
/// * Good Friday
/// * Easter Monday
/// * Early May Bank Holiday (1st Mon in May)
/// * Spring Bank Holiday (last Mon in May)
/// * Christmas Day and Boxing Day (see [`christmas_pair`])
///
/// One-off royal holidays and moved May Days are not modelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnitedKingdomHolidays {
    /// January 1 (weekend → Monday).
    pub new_years_day: Date,
    /// Easter Sunday − 2.
    pub good_friday: Date,
    /// Easter Sunday + 1.
    pub easter_monday: Date,
    /// First Monday in May.
    pub early_may: Date,
    /// Last Monday in May.
    pub spring_holiday: Date,
    /// Observed Christmas Day.
    pub christmas_day: Date,
    /// Observed Boxing Day.
    pub boxing_day: Date,
}

impl UnitedKingdomHolidays {
    /// UK bank holidays for `year`.
    pub fn for_year(year: i32) -> Result<Self> {
        let christmas = christmas_pair(year)?;
        Ok(Self {
            new_years_day: new_years_day(year)?,
            good_friday: good_friday(year),
            easter_monday: easter_monday(year),
            early_may: first_weekday(year, Month::May, Weekday::Monday)?,
            spring_holiday: last_weekday(year, Month::May, Weekday::Monday)?,
            christmas_day: christmas.christmas_day,
            boxing_day: christmas.second_day,
        })
    }
}

impl HolidaySet for UnitedKingdomHolidays {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::UnitedKingdom
    }

    fn entries(&self) -> Vec<(&'static str, Option<Date>)> {
        vec![
            ("NewYearsDay", Some(self.new_years_day)),
            ("GoodFriday", Some(self.good_friday)),
            ("EasterMonday", Some(self.easter_monday)),
            ("EarlyMay", Some(self.early_may)),
            ("SpringHoliday", Some(self.spring_holiday)),
            ("ChristmasDay", Some(self.christmas_day)),
            ("BoxingDay", Some(self.boxing_day)),
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
    fn uk_2024() {
        let h = UnitedKingdomHolidays::for_year(2024).unwrap();
        assert_eq!(h.new_years_day, date(2024, 1, 1));
        assert_eq!(h.good_friday, date(2024, 3, 29));
        assert_eq!(h.easter_monday, date(2024, 4, 1));
        assert_eq!(h.early_may, date(2024, 5, 6));
        assert_eq!(h.spring_holiday, date(2024, 5, 27));
        assert_eq!(h.christmas_day, date(2024, 12, 25));
        assert_eq!(h.boxing_day, date(2024, 12, 26));
    }

    #[test]
    fn uk_2021_weekend_christmas() {
        let h = UnitedKingdomHolidays::for_year(2021).unwrap();
        assert_eq!(h.early_may, date(2021, 5, 3));
        assert_eq!(h.spring_holiday, date(2021, 5, 31));
        // Dec 25 is a Saturday
        assert_eq!(h.christmas_day, date(2021, 12, 27));
        assert_eq!(h.boxing_day, date(2021, 12, 28));
    }

    #[test]
    fn boxing_day_on_saturday() {
        let h = UnitedKingdomHolidays::for_year(2020).unwrap();
        assert_eq!(h.christmas_day, date(2020, 12, 25));
        assert_eq!(h.boxing_day, date(2020, 12, 28));
    }
}
