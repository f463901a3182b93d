//! The aggregate record: every jurisdiction's holidays for one year,
//! grouped by region.
//!
//! Records are assembled through [`AggregateBuilder`], which only yields an
//! [`AggregateRecord`] once every jurisdiction has been supplied. The
//! serialized layout is stable: `Year`, then `Americas`, `Europe` and
//! `AsiaPacific`, each keyed by [`Jurisdiction::key`].

use hol_core::errors::{Error, Result};
use serde::Serialize;

use crate::calendars::australia::AustraliaHolidays;
use crate::calendars::germany::GermanyHolidays;
use crate::calendars::japan::JapanBankHolidays;
use crate::calendars::netherlands::NetherlandsHolidays;
use crate::calendars::target::EcbTarget2Holidays;
use crate::calendars::united_kingdom::UnitedKingdomHolidays;
use crate::calendars::united_states::{NyseHolidays, UsFederalHolidays};
use crate::holiday_set::HolidaySet;
use crate::jurisdiction::{Jurisdiction, JurisdictionHolidays};

/// US calendars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Americas {
    /// US federal holidays.
    #[serde(rename = "USFederalHolidaysObserved")]
    pub us_federal: UsFederalHolidays,
    /// NYSE closures.
    #[serde(rename = "NYSEHolidaysObserved")]
    pub nyse: NyseHolidays,
}

/// European calendars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Europe {
    /// Germany.
    #[serde(rename = "DEHolidays")]
    pub germany: GermanyHolidays,
    /// ECB Target2.
    #[serde(rename = "ECBTarget2Holidays")]
    pub ecb_target2: EcbTarget2Holidays,
    /// Netherlands.
    #[serde(rename = "NLHolidays")]
    pub netherlands: NetherlandsHolidays,
    /// United Kingdom.
    #[serde(rename = "UKHolidays")]
    pub united_kingdom: UnitedKingdomHolidays,
}

/// Asia-Pacific calendars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AsiaPacific {
    /// Australia (ACT).
    #[serde(rename = "AustralianHolidays")]
    pub australia: AustraliaHolidays,
    /// Japanese bank holidays.
    #[serde(rename = "JapanBankHolidays")]
    pub japan: JapanBankHolidays,
}

/// All holidays for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AggregateRecord {
    /// The requested year when it lies in `[1583, 4099]`, `None` otherwise.
    pub year: Option<i32>,
    /// US calendars.
    pub americas: Americas,
    /// European calendars.
    pub europe: Europe,
    /// Asia-Pacific calendars.
    pub asia_pacific: AsiaPacific,
}

impl AggregateRecord {
    /// Start an empty builder.
    pub fn builder() -> AggregateBuilder {
        AggregateBuilder::default()
    }

    /// The holiday set of one jurisdiction.
    pub fn get(&self, jurisdiction: Jurisdiction) -> &dyn HolidaySet {
        match jurisdiction {
            Jurisdiction::UsFederal => &self.americas.us_federal,
            Jurisdiction::Nyse => &self.americas.nyse,
            Jurisdiction::Germany => &self.europe.germany,
            Jurisdiction::EcbTarget2 => &self.europe.ecb_target2,
            Jurisdiction::Netherlands => &self.europe.netherlands,
            Jurisdiction::UnitedKingdom => &self.europe.united_kingdom,
            Jurisdiction::Australia => &self.asia_pacific.australia,
            Jurisdiction::Japan => &self.asia_pacific.japan,
        }
    }

    /// Every holiday set, in aggregate order.
    pub fn holiday_sets(&self) -> impl Iterator<Item = &dyn HolidaySet> + '_ {
        Jurisdiction::ALL.into_iter().map(move |j| self.get(j))
    }
}

/// Collects engine outputs in any order and checks completeness.
#[derive(Debug, Default)]
pub struct AggregateBuilder {
    year: Option<i32>,
    us_federal: Option<UsFederalHolidays>,
    nyse: Option<NyseHolidays>,
    germany: Option<GermanyHolidays>,
    ecb_target2: Option<EcbTarget2Holidays>,
    netherlands: Option<NetherlandsHolidays>,
    united_kingdom: Option<UnitedKingdomHolidays>,
    australia: Option<AustraliaHolidays>,
    japan: Option<JapanBankHolidays>,
}

impl AggregateBuilder {
    /// Set the year record.
    pub fn year(mut self, year: Option<i32>) -> Self {
        self.year = year;
        self
    }

    /// Store one engine's output, replacing any earlier value for the same
    /// jurisdiction.
    pub fn holidays(mut self, holidays: JurisdictionHolidays) -> Self {
        match holidays {
            JurisdictionHolidays::UsFederal(h) => self.us_federal = Some(h),
            JurisdictionHolidays::Nyse(h) => self.nyse = Some(h),
            JurisdictionHolidays::Germany(h) => self.germany = Some(h),
            JurisdictionHolidays::EcbTarget2(h) => self.ecb_target2 = Some(h),
            JurisdictionHolidays::Netherlands(h) => self.netherlands = Some(h),
            JurisdictionHolidays::UnitedKingdom(h) => self.united_kingdom = Some(h),
            JurisdictionHolidays::Australia(h) => self.australia = Some(h),
            JurisdictionHolidays::Japan(h) => self.japan = Some(h),
        }
        self
    }

    /// Jurisdictions not supplied yet.
    pub fn missing(&self) -> Vec<Jurisdiction> {
        let present = [
            (Jurisdiction::UsFederal, self.us_federal.is_some()),
            (Jurisdiction::Nyse, self.nyse.is_some()),
            (Jurisdiction::Germany, self.germany.is_some()),
            (Jurisdiction::EcbTarget2, self.ecb_target2.is_some()),
            (Jurisdiction::Netherlands, self.netherlands.is_some()),
            (Jurisdiction::UnitedKingdom, self.united_kingdom.is_some()),
            (Jurisdiction::Australia, self.australia.is_some()),
            (Jurisdiction::Japan, self.japan.is_some()),
        ];
        present
            .into_iter()
            .filter_map(|(j, ok)| (!ok).then_some(j))
            .collect()
    }

    /// Finish the record.
    ///
    /// # Errors
    /// Returns `Error::Postcondition` naming the missing jurisdictions if
    /// any engine output was not supplied.
    pub fn build(self) -> Result<AggregateRecord> {
        let missing = self.missing();
        match self {
            AggregateBuilder {
                year,
                us_federal: Some(us_federal),
                nyse: Some(nyse),
                germany: Some(germany),
                ecb_target2: Some(ecb_target2),
                netherlands: Some(netherlands),
                united_kingdom: Some(united_kingdom),
                australia: Some(australia),
                japan: Some(japan),
            } => Ok(AggregateRecord {
                year,
                americas: Americas { us_federal, nyse },
                europe: Europe {
                    germany,
                    ecb_target2,
                    netherlands,
                    united_kingdom,
                },
                asia_pacific: AsiaPacific { australia, japan },
            }),
            _ => Err(Error::Postcondition(format!(
                "aggregate record is missing {missing:?}"
            ))),
        }
    }
}
