//! Run settings.
//!
//! [`Settings`] holds the **evaluation year**, the year for which holiday
//! dates are computed. It is an ordinary value passed to the orchestrator;
//! there is no global instance. When no year has been set the current UTC
//! year is used.

use chrono::Datelike;

/// Settings for a single holiday computation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    evaluation_year: Option<i32>,
}

impl Settings {
    /// Settings that evaluate the current UTC year.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the evaluation year.
    pub fn with_evaluation_year(mut self, year: i32) -> Self {
        self.evaluation_year = Some(year);
        self
    }

    /// Set or clear the evaluation year.
    pub fn set_evaluation_year(&mut self, year: Option<i32>) {
        self.evaluation_year = year;
    }

    /// The explicitly configured year, if any.
    pub fn configured_year(&self) -> Option<i32> {
        self.evaluation_year
    }

    /// The year to evaluate: the configured one, or the current UTC year.
    pub fn evaluation_year(&self) -> i32 {
        self.evaluation_year
            .unwrap_or_else(|| chrono::Utc::now().year())
    }
}
