//! United States calendars: federal holidays and NYSE closures.
//!
//! Both records are built from the same rule functions; the NYSE engine
//! does not read the federal record.
//!
//! Observance:
//! * New Year's Day and Independence Day move forward to Monday when they
//!   fall on a weekend.
//! * Veterans Day and Christmas Day move to the nearest weekday
//!   (Saturday → Friday, Sunday → Monday).
//!
//! Martin Luther King Jr. Day and Washington's Birthday use the third-Monday
//! offset table of [`hol_time::locator::third_monday`], which keeps a +16
//! offset for months that begin on a Sunday. In those years the observed day
//! is the Tuesday after the third Monday (e.g. Washington's Birthday 2026 is
//! February 17).

use hol_core::errors::Result;
use hol_time::easter::good_friday;
use hol_time::locator::{first_weekday, fourth_thursday, last_weekday, second_weekday, third_monday};
use hol_time::observance::{shift_weekend_to_monday, shift_weekend_to_nearest_weekday, us_christmas};
use hol_time::{Date, Month, Weekday};
use serde::Serialize;

use super::new_years_day;
use crate::holiday_set::HolidaySet;
use crate::jurisdiction::Jurisdiction;

// ── Shared rules ──────────────────────────────────────────────────────────────

fn martin_luther_king(year: i32) -> Result<Date> {
    third_monday(year, Month::January)
}

fn washingtons_birthday(year: i32) -> Result<Date> {
    third_monday(year, Month::February)
}

fn memorial_day(year: i32) -> Result<Date> {
    last_weekday(year, Month::May, Weekday::Monday)
}

fn independence_day(year: i32) -> Result<Date> {
    Ok(shift_weekend_to_monday(Date::from_ymd(year, 7, 4)?))
}

fn labor_day(year: i32) -> Result<Date> {
    first_weekday(year, Month::September, Weekday::Monday)
}

fn thanksgiving_day(year: i32) -> Result<Date> {
    fourth_thursday(year, Month::November)
}

// ── Federal ───────────────────────────────────────────────────────────────────

/// US federal holidays, as observed by federal employees.
///
/// Washington's Birthday keeps its statutory name; "Presidents' Day" is not
/// used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UsFederalHolidays {
    /// January 1 (weekend → Monday).
    pub new_years_day: Date,
    /// Third Monday in January.
    pub martin_luther_king: Date,
    /// Third Monday in February.
    pub washingtons_birthday: Date,
    /// Last Monday in May.
    pub memorial_day: Date,
    /// July 4 (weekend → Monday).
    pub independence_day: Date,
    /// First Monday in September.
    pub labor_day: Date,
    /// Second Monday in October.
    pub columbus_day: Date,
    /// November 11 (Saturday → Friday, Sunday → Monday).
    pub veterans_day: Date,
    /// Fourth Thursday in November.
    pub thanksgiving_day: Date,
    /// December 25 (Saturday → Friday, Sunday → Monday).
    pub christmas_day: Date,
}

impl UsFederalHolidays {
    /// Observed federal holidays for `year`.
    pub fn for_year(year: i32) -> Result<Self> {
        Ok(Self {
            new_years_day: new_years_day(year)?,
            martin_luther_king: martin_luther_king(year)?,
            washingtons_birthday: washingtons_birthday(year)?,
            memorial_day: memorial_day(year)?,
            independence_day: independence_day(year)?,
            labor_day: labor_day(year)?,
            columbus_day: second_weekday(year, Month::October, Weekday::Monday)?,
            veterans_day: shift_weekend_to_nearest_weekday(Date::from_ymd(year, 11, 11)?),
            thanksgiving_day: thanksgiving_day(year)?,
            christmas_day: us_christmas(year)?,
        })
    }
}

impl HolidaySet for UsFederalHolidays {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::UsFederal
    }

    fn entries(&self) -> Vec<(&'static str, Option<Date>)> {
        vec![
            ("NewYearsDay", Some(self.new_years_day)),
            ("MartinLutherKing", Some(self.martin_luther_king)),
            ("WashingtonsBirthday", Some(self.washingtons_birthday)),
            ("MemorialDay", Some(self.memorial_day)),
            ("IndependenceDay", Some(self.independence_day)),
            ("LaborDay", Some(self.labor_day)),
            ("ColumbusDay", Some(self.columbus_day)),
            ("VeteransDay", Some(self.veterans_day)),
            ("ThanksgivingDay", Some(self.thanksgiving_day)),
            ("ChristmasDay", Some(self.christmas_day)),
        ]
    }
}

// ── NYSE ──────────────────────────────────────────────────────────────────────

/// New York Stock Exchange closures: the federal calendar without Columbus
/// Day and Veterans Day, plus Good Friday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NyseHolidays {
    /// January 1 (weekend → Monday).
    pub new_years_day: Date,
    /// Third Monday in January.
    pub martin_luther_king: Date,
    /// Third Monday in February.
    pub washingtons_birthday: Date,
    /// Easter Sunday − 2.
    pub good_friday: Date,
    /// Last Monday in May.
    pub memorial_day: Date,
    /// July 4 (weekend → Monday).
    pub independence_day: Date,
    /// First Monday in September.
    pub labor_day: Date,
    /// Fourth Thursday in November.
    pub thanksgiving_day: Date,
    /// December 25 (Saturday → Friday, Sunday → Monday).
    pub christmas_day: Date,
}

impl NyseHolidays {
    /// NYSE closures for `year`.
    pub fn for_year(year: i32) -> Result<Self> {
        Ok(Self {
            new_years_day: new_years_day(year)?,
            martin_luther_king: martin_luther_king(year)?,
            washingtons_birthday: washingtons_birthday(year)?,
            good_friday: good_friday(year),
            memorial_day: memorial_day(year)?,
            independence_day: independence_day(year)?,
            labor_day: labor_day(year)?,
            thanksgiving_day: thanksgiving_day(year)?,
            christmas_day: us_christmas(year)?,
        })
    }
}

impl HolidaySet for NyseHolidays {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::Nyse
    }

    fn entries(&self) -> Vec<(&'static str, Option<Date>)> {
        vec![
            ("NewYearsDay", Some(self.new_years_day)),
            ("MartinLutherKing", Some(self.martin_luther_king)),
            ("WashingtonsBirthday", Some(self.washingtons_birthday)),
            ("GoodFriday", Some(self.good_friday)),
            ("MemorialDay", Some(self.memorial_day)),
            ("IndependenceDay", Some(self.independence_day)),
            ("LaborDay", Some(self.labor_day)),
            ("ThanksgivingDay", Some(self.thanksgiving_day)),
            ("ChristmasDay", Some(self.christmas_day)),
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
    fn federal_2024() {
        let h = UsFederalHolidays::for_year(2024).unwrap();
        assert_eq!(h.new_years_day, date(2024, 1, 1));
        assert_eq!(h.martin_luther_king, date(2024, 1, 15));
        assert_eq!(h.washingtons_birthday, date(2024, 2, 19));
        assert_eq!(h.memorial_day, date(2024, 5, 27));
        assert_eq!(h.independence_day, date(2024, 7, 4));
        assert_eq!(h.labor_day, date(2024, 9, 2));
        assert_eq!(h.columbus_day, date(2024, 10, 14));
        assert_eq!(h.veterans_day, date(2024, 11, 11));
        // November 1, 2024 is a Friday; the offset table gives the 21st
        assert_eq!(h.thanksgiving_day, date(2024, 11, 21));
        assert_eq!(h.christmas_day, date(2024, 12, 25));
    }

    #[test]
    fn independence_day_2026_moves_to_monday() {
        // July 4, 2026 is a Saturday
        let h = UsFederalHolidays::for_year(2026).unwrap();
        assert_eq!(h.independence_day, date(2026, 7, 6));
    }

    #[test]
    fn washingtons_birthday_2026_follows_offset_table() {
        // February 2026 starts on a Sunday
        let h = UsFederalHolidays::for_year(2026).unwrap();
        assert_eq!(h.washingtons_birthday, date(2026, 2, 17));
    }

    #[test]
    fn saturday_holidays_move_back_to_friday() {
        // Veterans Day 2023 and Christmas 2021 fall on a Saturday
        assert_eq!(UsFederalHolidays::for_year(2023).unwrap().veterans_day, date(2023, 11, 10));
        assert_eq!(UsFederalHolidays::for_year(2021).unwrap().christmas_day, date(2021, 12, 24));
        // New Year's Day never moves backward: 2022-01-01 is a Saturday
        assert_eq!(UsFederalHolidays::for_year(2022).unwrap().new_years_day, date(2022, 1, 3));
    }

    #[test]
    fn nyse_shares_federal_rules() {
        for y in [2021, 2024, 2026] {
            let fed = UsFederalHolidays::for_year(y).unwrap();
            let nyse = NyseHolidays::for_year(y).unwrap();
            assert_eq!(nyse.new_years_day, fed.new_years_day);
            assert_eq!(nyse.martin_luther_king, fed.martin_luther_king);
            assert_eq!(nyse.washingtons_birthday, fed.washingtons_birthday);
            assert_eq!(nyse.memorial_day, fed.memorial_day);
            assert_eq!(nyse.independence_day, fed.independence_day);
            assert_eq!(nyse.labor_day, fed.labor_day);
            assert_eq!(nyse.thanksgiving_day, fed.thanksgiving_day);
            assert_eq!(nyse.christmas_day, fed.christmas_day);
        }
    }

    #[test]
    fn nyse_closes_on_good_friday() {
        let nyse = NyseHolidays::for_year(2024).unwrap();
        assert_eq!(nyse.good_friday, date(2024, 3, 29));
        assert!(nyse.is_holiday(date(2024, 3, 29)));
        assert!(!nyse.is_holiday(date(2024, 10, 14)));
        assert_eq!(nyse.entries().len(), 9);
    }
}
