//! Japanese bank holidays.
//!
//! Banks close January 1–3. When January 1 is a Sunday the New Year's Day
//! holiday is taken on January 2, which it then shares with the second bank
//! holiday; the third stays on January 3. When January 1 is a Saturday the
//! preceding December 31 is also a holiday.
//!
//! The equinox days are the calendar day of the astronomical equinox in
//! Japan Standard Time ([`hol_time::equinox`]). Only Mountain Day, Culture
//! Day and Labour Thanksgiving Day carry a Sunday substitute; the general
//! *furikae kyūjitsu* rule is not modelled.

use hol_core::errors::Result;
use hol_time::equinox::{equinox_date, JST_OFFSET_DAYS};
use hol_time::locator::{second_weekday, third_monday};
use hol_time::observance::shift_sunday_to_monday;
use hol_time::{Date, Equinox, Month, Weekday};
use serde::Serialize;

use crate::holiday_set::HolidaySet;
use crate::jurisdiction::Jurisdiction;

/// First year with December 23 as the Emperor's Birthday.
const HEISEI_START: i32 = 1989;

/// Marine Day was fixed on July 20 for these years, then moved to the third
/// Monday of July.
const FIXED_MARINE_DAY_YEARS: std::ops::RangeInclusive<i32> = 1996..=2002;

/// Japanese bank holidays for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct JapanBankHolidays {
    /// January 1, or January 2 when the 1st is a Sunday.
    pub new_years_day: Date,
    /// January 2.
    pub bank_holiday2: Date,
    /// January 3.
    pub bank_holiday3: Date,
    /// Second Monday in January.
    pub coming_of_age_day: Date,
    /// February 11.
    pub national_foundation_day: Date,
    /// March equinox (JST).
    pub vernal_equinox_day: Date,
    /// April 29.
    pub showa_day: Date,
    /// May 3.
    pub constitution_day: Date,
    /// May 4.
    pub greenery_day: Date,
    /// May 5.
    pub childrens_day: Date,
    /// July 20 for 1996–2002, the third Monday in July otherwise.
    pub marine_day: Date,
    /// August 11 (Sunday → Monday).
    pub mountain_day: Date,
    /// Third Monday in September.
    pub respect_for_the_aged_day: Date,
    /// September equinox (JST).
    pub autumnal_equinox_day: Date,
    /// Second Monday in October.
    pub health_sports_day: Date,
    /// November 3 (Sunday → Monday).
    pub culture_day: Date,
    /// November 23 (Sunday → Monday).
    pub labor_thanksgiving_day: Date,
    /// December 23 from 1989; unobserved before.
    pub emperors_birthday: Option<Date>,
    /// December 31 of the previous year when January 1 is a Saturday.
    pub new_years_eve: Option<Date>,
}

impl JapanBankHolidays {
    /// Japanese bank holidays for `year`.
    pub fn for_year(year: i32) -> Result<Self> {
        let ymd = |month, day| Date::from_ymd(year, month, day);

        let jan1 = ymd(1, 1)?;
        let (new_years_day, new_years_eve) = match jan1.weekday() {
            Weekday::Sunday => (ymd(1, 2)?, None),
            Weekday::Saturday => (jan1, Some(Date::from_ymd(year - 1, 12, 31)?)),
            Weekday::Monday
            | Weekday::Tuesday
            | Weekday::Wednesday
            | Weekday::Thursday
            | Weekday::Friday => (jan1, None),
        };

        let marine_day = if FIXED_MARINE_DAY_YEARS.contains(&year) {
            ymd(7, 20)?
        } else {
            third_monday(year, Month::July)?
        };

        let emperors_birthday = if year >= HEISEI_START {
            Some(ymd(12, 23)?)
        } else {
            None
        };

        Ok(Self {
            new_years_day,
            bank_holiday2: ymd(1, 2)?,
            bank_holiday3: ymd(1, 3)?,
            coming_of_age_day: second_weekday(year, Month::January, Weekday::Monday)?,
            national_foundation_day: ymd(2, 11)?,
            vernal_equinox_day: equinox_date(year, Equinox::March, JST_OFFSET_DAYS)?,
            showa_day: ymd(4, 29)?,
            constitution_day: ymd(5, 3)?,
            greenery_day: ymd(5, 4)?,
            childrens_day: ymd(5, 5)?,
            marine_day,
            mountain_day: shift_sunday_to_monday(ymd(8, 11)?),
            respect_for_the_aged_day: third_monday(year, Month::September)?,
            autumnal_equinox_day: equinox_date(year, Equinox::September, JST_OFFSET_DAYS)?,
            health_sports_day: second_weekday(year, Month::October, Weekday::Monday)?,
            culture_day: shift_sunday_to_monday(ymd(11, 3)?),
            labor_thanksgiving_day: shift_sunday_to_monday(ymd(11, 23)?),
            emperors_birthday,
            new_years_eve,
        })
    }
}

impl HolidaySet for JapanBankHolidays {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::Japan
    }

    fn entries(&self) -> Vec<(&'static str, Option<Date>)> {
        vec![
            ("NewYearsDay", Some(self.new_years_day)),
            ("BankHoliday2", Some(self.bank_holiday2)),
            ("BankHoliday3", Some(self.bank_holiday3)),
            ("ComingOfAgeDay", Some(self.coming_of_age_day)),
            ("NationalFoundationDay", Some(self.national_foundation_day)),
            ("VernalEquinoxDay", Some(self.vernal_equinox_day)),
            ("ShowaDay", Some(self.showa_day)),
            ("ConstitutionDay", Some(self.constitution_day)),
            ("GreeneryDay", Some(self.greenery_day)),
            ("ChildrensDay", Some(self.childrens_day)),
            ("MarineDay", Some(self.marine_day)),
            ("MountainDay", Some(self.mountain_day)),
            ("RespectForTheAgedDay", Some(self.respect_for_the_aged_day)),
            ("AutumnalEquinoxDay", Some(self.autumnal_equinox_day)),
            ("HealthSportsDay", Some(self.health_sports_day)),
            ("CultureDay", Some(self.culture_day)),
            ("LaborThanksgivingDay", Some(self.labor_thanksgiving_day)),
            ("EmperorsBirthday", self.emperors_birthday),
            ("NewYearsEve", self.new_years_eve),
        ]
    }
}
