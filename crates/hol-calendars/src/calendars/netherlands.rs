//! Netherlands public holidays.
//!
//! Fields serialize under their Dutch names. King's Day moves back to
//! Saturday April 26 when April 27 is a Sunday; a Saturday April 27 stays
//! where it is. Christmas and the second Christmas day are never shifted.
//!
//! Ascension is taken as Easter Sunday + 40 days (see
//! [`hol_time::easter::ascension`]).

use hol_core::errors::Result;
use hol_time::easter::{ascension, easter_monday, good_friday, whit_monday};
use hol_time::observance::shift_sunday_to_saturday;
use hol_time::Date;
use serde::Serialize;

use super::new_years_day;
use crate::holiday_set::HolidaySet;
use crate::jurisdiction::Jurisdiction;

/// Dutch holidays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetherlandsHolidays {
    /// Nieuwjaarsdag: January 1 (weekend → Monday).
    #[serde(rename = "Nieuwjaardag")]
    pub new_years_day: Date,
    /// Goede Vrijdag.
    #[serde(rename = "Goedevrijdag")]
    pub good_friday: Date,
    /// Tweede Paasdag.
    #[serde(rename = "Paasmaandag")]
    pub easter_monday: Date,
    /// Koningsdag: April 27, or April 26 when the 27th is a Sunday.
    #[serde(rename = "Koningsdag")]
    pub kings_day: Date,
    /// Bevrijdingsdag: May 5.
    #[serde(rename = "Bevrijdingsdag")]
    pub liberation_day: Date,
    /// Hemelvaartsdag.
    #[serde(rename = "Hemelvaart")]
    pub ascension_day: Date,
    /// Tweede Pinksterdag.
    #[serde(rename = "Pinkstermaandag")]
    pub whit_monday: Date,
    /// Eerste Kerstdag: December 25.
    #[serde(rename = "Eerstekerstdag")]
    pub christmas_day: Date,
    /// Tweede Kerstdag: December 26.
    #[serde(rename = "Tweedekerstdag")]
    pub second_christmas_day: Date,
}

impl NetherlandsHolidays {
    /// Dutch holidays for `year`.
    pub fn for_year(year: i32) -> Result<Self> {
        Ok(Self {
            new_years_day: new_years_day(year)?,
            good_friday: good_friday(year),
            easter_monday: easter_monday(year),
            kings_day: shift_sunday_to_saturday(Date::from_ymd(year, 4, 27)?),
            liberation_day: Date::from_ymd(year, 5, 5)?,
            ascension_day: ascension(year),
            whit_monday: whit_monday(year),
            christmas_day: Date::from_ymd(year, 12, 25)?,
            second_christmas_day: Date::from_ymd(year, 12, 26)?,
        })
    }
}

impl HolidaySet for NetherlandsHolidays {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::Netherlands
    }

    fn entries(&self) -> Vec<(&'static str, Option<Date>)> {
        vec![
            ("Nieuwjaardag", Some(self.new_years_day)),
            ("Goedevrijdag", Some(self.good_friday)),
            ("Paasmaandag", Some(self.easter_monday)),
            ("Koningsdag", Some(self.kings_day)),
            ("Bevrijdingsdag", Some(self.liberation_day)),
            ("Hemelvaart", Some(self.ascension_day)),
            ("Pinkstermaandag", Some(self.whit_monday)),
            ("Eerstekerstdag", Some(self.christmas_day)),
            ("Tweedekerstdag", Some(self.second_christmas_day)),
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
    fn netherlands_2025() {
        let h = NetherlandsHolidays::for_year(2025).unwrap();
        assert_eq!(h.new_years_day, date(2025, 1, 1));
        assert_eq!(h.good_friday, date(2025, 4, 18));
        assert_eq!(h.easter_monday, date(2025, 4, 21));
        // April 27, 2025 is a Sunday
        assert_eq!(h.kings_day, date(2025, 4, 26));
        assert_eq!(h.liberation_day, date(2025, 5, 5));
        assert_eq!(h.ascension_day, date(2025, 5, 30));
        assert_eq!(h.whit_monday, date(2025, 6, 9));
        assert_eq!(h.christmas_day, date(2025, 12, 25));
        assert_eq!(h.second_christmas_day, date(2025, 12, 26));
    }

    #[test]
    fn kings_day_on_saturday_is_kept() {
        // April 27, 2024 is a Saturday
        assert_eq!(NetherlandsHolidays::for_year(2024).unwrap().kings_day, date(2024, 4, 27));
    }

    #[test]
    fn christmas_is_not_shifted() {
        // December 25, 2021 is a Saturday
        let h = NetherlandsHolidays::for_year(2021).unwrap();
        assert_eq!(h.christmas_day, date(2021, 12, 25));
        assert_eq!(h.second_christmas_day, date(2021, 12, 26));
    }

    #[test]
    fn serializes_dutch_names() {
        let h = NetherlandsHolidays::for_year(2024).unwrap();
        let json = serde_json::to_value(&h).unwrap();
        assert_eq!(json["Koningsdag"], "2024-04-27");
        assert_eq!(json["Tweedekerstdag"], "2024-12-26");
    }
}
