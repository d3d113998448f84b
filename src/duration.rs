// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Human-readable durations such as `"1 year 1 day"`.
//!
//! Years and months are fixed lengths (365 and 30 days) so the output does
//! not depend on where the duration starts.

use crate::calendar::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// A unit a duration may be broken into, largest first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DurationType {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl DurationType {
    pub const ALL: &'static [DurationType] = &[
        DurationType::Years,
        DurationType::Months,
        DurationType::Weeks,
        DurationType::Days,
        DurationType::Hours,
        DurationType::Minutes,
        DurationType::Seconds,
    ];

    pub const fn singular(self) -> &'static str {
        match self {
            DurationType::Years => "year",
            DurationType::Months => "month",
            DurationType::Weeks => "week",
            DurationType::Days => "day",
            DurationType::Hours => "hour",
            DurationType::Minutes => "minute",
            DurationType::Seconds => "second",
        }
    }

    pub const fn plural(self) -> &'static str {
        match self {
            DurationType::Years => "years",
            DurationType::Months => "months",
            DurationType::Weeks => "weeks",
            DurationType::Days => "days",
            DurationType::Hours => "hours",
            DurationType::Minutes => "minutes",
            DurationType::Seconds => "seconds",
        }
    }

    /// Whether the unit is a whole number of days.
    pub const fn is_day_based(self) -> bool {
        matches!(
            self,
            DurationType::Years | DurationType::Months | DurationType::Weeks | DurationType::Days
        )
    }

    /// Length in days for day-based units, in seconds otherwise.
    const fn size(self) -> i64 {
        match self {
            DurationType::Years => 365,
            DurationType::Months => 30,
            DurationType::Weeks => 7,
            DurationType::Days => 1,
            DurationType::Hours => SECONDS_PER_HOUR,
            DurationType::Minutes => SECONDS_PER_MINUTE,
            DurationType::Seconds => 1,
        }
    }
}

/// Splits a `(days, seconds)` duration into units.
///
/// ```
/// use timestrip::{DurationFormatter, DurationType};
///
/// let formatter = DurationFormatter::new(366, 0);
/// assert_eq!(formatter.format(DurationType::ALL), "1 year 1 day");
/// assert_eq!(formatter.format(&[DurationType::Weeks, DurationType::Days]), "52 weeks 2 days");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DurationFormatter {
    negative: bool,
    days: i64,
    seconds: i64,
}

impl DurationFormatter {
    pub fn new(days: i64, seconds: i64) -> Self {
        let total = i128::from(days) * i128::from(SECONDS_PER_DAY) + i128::from(seconds);
        let magnitude = total.unsigned_abs();
        let per_day = SECONDS_PER_DAY as u128;
        Self {
            negative: total < 0,
            days: (magnitude / per_day) as i64,
            seconds: (magnitude % per_day) as i64,
        }
    }

    /// The amount of each requested unit, largest unit first.
    ///
    /// Each unit takes as much of the remainder as it can; the days left over
    /// after the last requested day-based unit carry into the time units.
    pub fn values(&self, parts: &[DurationType]) -> Vec<(DurationType, i64)> {
        let mut days = self.days;
        let mut seconds = self.seconds;
        let wanted = DurationType::ALL.iter().filter(|unit| parts.contains(unit));
        let mut values = Vec::new();
        for &unit in wanted {
            if unit.is_day_based() {
                values.push((unit, days / unit.size()));
                days %= unit.size();
            } else {
                seconds += days * SECONDS_PER_DAY;
                days = 0;
                values.push((unit, seconds / unit.size()));
                seconds %= unit.size();
            }
        }
        values
    }

    /// `"1 hour 1 minute 40 seconds"`; zero units are omitted and a
    /// negative duration is prefixed with `-`.
    pub fn format(&self, parts: &[DurationType]) -> String {
        let text = self
            .values(parts)
            .into_iter()
            .filter(|(_, value)| *value != 0)
            .map(|(unit, value)| {
                let name = if value == 1 { unit.singular() } else { unit.plural() };
                format!("{value} {name}")
            })
            .collect::<Vec<_>>()
            .join(" ");
        if self.negative && !text.is_empty() {
            format!("-{text}")
        } else {
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_formats_as_empty() {
        assert_eq!(DurationFormatter::new(0, 0).format(DurationType::ALL), "");
    }

    #[test]
    fn year_and_day() {
        assert_eq!(DurationFormatter::new(366, 0).format(DurationType::ALL), "1 year 1 day");
        assert_eq!(
            DurationFormatter::new(400, 0).format(DurationType::ALL),
            "1 year 1 month 5 days"
        );
    }

    #[test]
    fn seconds_only() {
        assert_eq!(
            DurationFormatter::new(0, 3_700).format(DurationType::ALL),
            "1 hour 1 minute 40 seconds"
        );
    }

    #[test]
    fn days_fold_into_time_units() {
        assert_eq!(
            DurationFormatter::new(2, 60).format(&[DurationType::Hours, DurationType::Minutes]),
            "48 hours 1 minute"
        );
        assert_eq!(
            DurationFormatter::new(400, 0).format(&[DurationType::Years, DurationType::Hours]),
            "1 year 840 hours"
        );
        assert_eq!(DurationFormatter::new(1, 0).format(&[DurationType::Seconds]), "86400 seconds");
    }

    #[test]
    fn units_below_the_smallest_part_are_dropped() {
        assert_eq!(DurationFormatter::new(10, 500).format(&[DurationType::Weeks]), "1 week");
        assert_eq!(DurationFormatter::new(6, 0).format(&[DurationType::Weeks]), "");
    }

    #[test]
    fn negative_durations_get_a_sign() {
        assert_eq!(DurationFormatter::new(-1, 0).format(DurationType::ALL), "-1 day");
        assert_eq!(
            DurationFormatter::new(-1, 86_399).format(DurationType::ALL),
            "-1 second"
        );
        assert_eq!(
            DurationFormatter::new(-1, 0).values(&[DurationType::Days]),
            [(DurationType::Days, 1)]
        );
    }
}
