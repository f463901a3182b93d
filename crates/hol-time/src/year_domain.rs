//! Year-domain policy for Easter-dependent dates.
//!
//! The Gauss computus is only evaluated on `[1583, 4099]`: 1583 is the first
//! full year of the Gregorian calendar and past 4099 the integer corrections
//! drift. Years outside that window are clamped to the nearest bound before
//! the Easter family (Good Friday, Easter Monday, Ascension, Whit Monday) is
//! computed. Dates that do not depend on Easter use the input year as given.

/// First year of the computus domain.
pub const FIRST_GREGORIAN_YEAR: i32 = 1583;

/// Last year of the computus domain.
pub const LAST_COMPUTUS_YEAR: i32 = 4099;

/// A year guaranteed to lie in `[FIRST_GREGORIAN_YEAR, LAST_COMPUTUS_YEAR]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComputusYear(i32);

impl ComputusYear {
    /// Clamp `year` into the computus domain.
    pub fn clamped(year: i32) -> Self {
        ComputusYear(year.clamp(FIRST_GREGORIAN_YEAR, LAST_COMPUTUS_YEAR))
    }

    /// Accept `year` only if it already lies in the domain.
    pub fn exact(year: i32) -> Option<Self> {
        in_computus_domain(year).then_some(ComputusYear(year))
    }

    /// The underlying year.
    pub fn get(self) -> i32 {
        self.0
    }
}

/// `true` if `year` lies in `[1583, 4099]`.
pub fn in_computus_domain(year: i32) -> bool {
    (FIRST_GREGORIAN_YEAR..=LAST_COMPUTUS_YEAR).contains(&year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_bounds() {
        assert_eq!(ComputusYear::clamped(1200).get(), 1583);
        assert_eq!(ComputusYear::clamped(5000).get(), 4099);
        assert_eq!(ComputusYear::clamped(2024).get(), 2024);
    }

    #[test]
    fn exact_rejects_out_of_domain() {
        assert_eq!(ComputusYear::exact(1583).map(ComputusYear::get), Some(1583));
        assert_eq!(ComputusYear::exact(4099).map(ComputusYear::get), Some(4099));
        assert!(ComputusYear::exact(1582).is_none());
        assert!(ComputusYear::exact(4100).is_none());
    }
}
