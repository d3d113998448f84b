// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Shared arithmetic of the 13-month calendars.
//!
//! The Coptic, Pharaonic and Bosparanian calendars all have twelve months of
//! 30 days followed by a short intercalary month of 5 days.  They differ in
//! the pivot day on which year 1 starts and in whether (and when) the
//! intercalary month grows to 6 days.

const MONTH_DAYS: i64 = 30;
const COMMON_YEAR_DAYS: i64 = 365;
const LEAP_CYCLE_DAYS: i64 = 4 * COMMON_YEAR_DAYS + 1;

/// Layout of a 12×30 + intercalary-month calendar.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct EpagomenalRules {
    /// Day count of day 1 of month 1 of year 1.
    pub epoch: i64,
    /// A year is a leap year when `year mod 4` equals this residue.
    pub leap_residue: Option<i64>,
}

impl EpagomenalRules {
    pub const fn is_leap_year(&self, year: i64) -> bool {
        match self.leap_residue {
            Some(residue) => year.rem_euclid(4) == residue,
            None => false,
        }
    }

    pub const fn days_in_month(&self, year: i64, month: u8) -> u8 {
        match month {
            1..=12 => MONTH_DAYS as u8,
            13 if self.is_leap_year(year) => 6,
            13 => 5,
            _ => 0,
        }
    }

    /// Leap years in `[1, year)`, negative for years before 1.
    const fn leap_years_before(&self, year: i64) -> i64 {
        match self.leap_residue {
            Some(residue) => (year - 1 - residue).div_euclid(4) - (-residue).div_euclid(4),
            None => 0,
        }
    }

    /// Days from the epoch to day 1 of `year`.
    const fn days_before_year(&self, year: i64) -> i64 {
        COMMON_YEAR_DAYS * (year - 1) + self.leap_years_before(year)
    }

    pub const fn day_count_of(&self, year: i64, month: u8, day: u8) -> i64 {
        self.epoch
            + self.days_before_year(year)
            + MONTH_DAYS * (month as i64 - 1)
            + (day as i64 - 1)
    }

    pub fn from_day_count(&self, day_count: i64) -> (i64, u8, u8) {
        let offset = day_count - self.epoch;
        let cycle = if self.leap_residue.is_some() {
            LEAP_CYCLE_DAYS
        } else {
            4 * COMMON_YEAR_DAYS
        };
        // The estimate is off by at most one year in either direction.
        let mut year = (4 * offset).div_euclid(cycle) + 1;
        while self.days_before_year(year) > offset {
            year -= 1;
        }
        while self.days_before_year(year + 1) <= offset {
            year += 1;
        }
        let day_of_year = offset - self.days_before_year(year);
        (
            year,
            (day_of_year / MONTH_DAYS + 1) as u8,
            (day_of_year % MONTH_DAYS + 1) as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEAP_AT_3: EpagomenalRules = EpagomenalRules {
        epoch: 1_000,
        leap_residue: Some(3),
    };
    const NO_LEAP: EpagomenalRules = EpagomenalRules {
        epoch: -500,
        leap_residue: None,
    };

    fn year_length(rules: &EpagomenalRules, year: i64) -> i64 {
        rules.day_count_of(year + 1, 1, 1) - rules.day_count_of(year, 1, 1)
    }

    #[test]
    fn year_lengths_follow_leap_residue() {
        let lengths: Vec<i64> = (-1..=7).map(|y| year_length(&LEAP_AT_3, y)).collect();
        assert_eq!(lengths, [366, 365, 365, 365, 366, 365, 365, 365, 366]);
        assert!((-10..10).all(|y| year_length(&NO_LEAP, y) == 365));
    }

    #[test]
    fn epoch_is_first_day_of_year_one() {
        assert_eq!(LEAP_AT_3.from_day_count(1_000), (1, 1, 1));
        assert_eq!(LEAP_AT_3.from_day_count(999), (0, 13, 5));
        assert_eq!(NO_LEAP.from_day_count(-501), (0, 13, 5));
    }

    #[test]
    fn intercalary_month_length() {
        assert_eq!(LEAP_AT_3.days_in_month(3, 13), 6);
        assert_eq!(LEAP_AT_3.days_in_month(4, 13), 5);
        assert_eq!(LEAP_AT_3.days_in_month(4, 12), 30);
        assert_eq!(LEAP_AT_3.days_in_month(4, 14), 0);
        assert_eq!(LEAP_AT_3.from_day_count(LEAP_AT_3.day_count_of(3, 13, 6)), (3, 13, 6));
        assert_eq!(LEAP_AT_3.from_day_count(LEAP_AT_3.day_count_of(3, 13, 6) + 1), (4, 1, 1));
    }

    #[test]
    fn roundtrip_both_layouts() {
        for rules in [LEAP_AT_3, NO_LEAP] {
            for n in (-200_000..200_000).step_by(3) {
                let (y, m, d) = rules.from_day_count(n);
                assert!(d <= rules.days_in_month(y, m));
                assert_eq!(rules.day_count_of(y, m, d), n);
            }
        }
    }
}
