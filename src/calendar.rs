// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar marker traits and the broken-down date view.
//!
//! Every calendar is a zero-sized marker type.  [`Calendar`] carries what the
//! arithmetic layer needs (how many seconds a pivot day has), and
//! [`DateCalendar`] adds the exact conversion between the **day-count pivot**
//! (the Julian Day Number) and a calendar's `(year, month, day)`.
//!
//! The pivot is shared, so a `TimeValue` built in one date calendar denotes
//! the same instant when re-read in another one.

use crate::config::WeekStart;
use crate::dynamic::CalendarKind;
use crate::error::{Result, Side, TimeError};
use crate::instant::TimeValue;
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::marker::PhantomData;

pub(crate) const SECONDS_PER_MINUTE: i64 = 60;
pub(crate) const SECONDS_PER_HOUR: i64 = 3_600;
pub(crate) const SECONDS_PER_DAY: i64 = 86_400;

/// Largest year magnitude a date calendar converts.
///
/// Far outside every supported range, and small enough that the day-count
/// arithmetic cannot overflow.
pub const YEAR_LIMIT: i64 = 1_000_000;

/// Marker trait for calendars (and the numeric axis).
pub trait Calendar:
    Copy + Clone + Debug + Default + PartialEq + Eq + PartialOrd + Ord + Hash + Send + Sync + 'static
{
    /// Display label, also used in type-mismatch errors.
    const LABEL: &'static str;

    /// Runtime tag of this calendar.
    const KIND: CalendarKind;

    /// Length of one pivot day in the seconds component.
    ///
    /// The numeric axis uses `1`, which keeps its seconds component at zero.
    const SECONDS_PER_DAY: i64;
}

/// A calendar with years, months and days on the Julian Day Number pivot.
pub trait DateCalendar: Calendar {
    /// Full month names, indexed by `month - 1`.
    const MONTH_NAMES: &'static [&'static str];

    /// Short month names, indexed by `month - 1`.
    const MONTH_ABBREVIATIONS: &'static [&'static str];

    /// Weekday names, Monday-aligned (index 0 falls on JDN 0).
    const WEEKDAY_NAMES: &'static [&'static str; 7];

    /// Short weekday names, Monday-aligned.
    const WEEKDAY_ABBREVIATIONS: &'static [&'static str; 7];

    fn is_leap_year(year: i64) -> bool;

    fn months_in_year(year: i64) -> u8;

    /// Number of days in `month` of `year`, `0` for a month the year lacks.
    fn days_in_month(year: i64, month: u8) -> u8;

    /// Day count of a date that is already known to be valid.
    fn day_count_of(year: i64, month: u8, day: u8) -> i64;

    /// The `(year, month, day)` on which `day_count` falls.
    fn from_day_count(day_count: i64) -> (i64, u8, u8);

    /// Label of the pseudo-quarter that holds the intercalary month.
    fn intercalary_quarter_label() -> &'static str {
        ""
    }

    /// Whether `month` is the short intercalary month.
    fn is_intercalary_month(month: u8) -> bool {
        month > 12
    }

    /// Fails with [`TimeError::ValueMismatch`] for a date the calendar lacks,
    /// and with [`TimeError::OutOfRange`] for a year beyond [`YEAR_LIMIT`].
    fn validate(year: i64, month: u8, day: u8) -> Result<()> {
        if month == 0 || month > Self::months_in_year(year) {
            return Err(TimeError::ValueMismatch(format!(
                "{} year {} has no month {}",
                Self::LABEL,
                year,
                month
            )));
        }
        if day == 0 || day > Self::days_in_month(year, month) {
            return Err(TimeError::ValueMismatch(format!(
                "{} month {}-{} has no day {}",
                Self::LABEL,
                year,
                month,
                day
            )));
        }
        if year < -YEAR_LIMIT {
            return Err(TimeError::OutOfRange(Side::Left));
        }
        if year > YEAR_LIMIT {
            return Err(TimeError::OutOfRange(Side::Right));
        }
        Ok(())
    }

    /// Exact day count of a calendar date.
    fn to_day_count(year: i64, month: u8, day: u8) -> Result<i64> {
        Self::validate(year, month, day)?;
        Ok(Self::day_count_of(year, month, day))
    }

    fn month_name(month: u8) -> &'static str {
        table_entry(Self::MONTH_NAMES, month)
    }

    fn month_abbreviation(month: u8) -> &'static str {
        table_entry(Self::MONTH_ABBREVIATIONS, month)
    }

    fn weekday_name(weekday: u8) -> &'static str {
        Self::WEEKDAY_NAMES[usize::from(weekday % 7)]
    }

    fn weekday_abbreviation(weekday: u8) -> &'static str {
        Self::WEEKDAY_ABBREVIATIONS[usize::from(weekday % 7)]
    }
}

fn table_entry(table: &'static [&'static str], month: u8) -> &'static str {
    usize::from(month)
        .checked_sub(1)
        .and_then(|index| table.get(index))
        .copied()
        .unwrap_or("")
}

/// Day of week of a pivot day: 0 = Monday … 6 = Sunday.
#[inline]
pub fn weekday(day_count: i64) -> u8 {
    day_count.rem_euclid(7) as u8
}

/// First day of the week that contains `day_count`.
#[inline]
pub(crate) fn week_start_of(day_count: i64, week_start: WeekStart) -> i64 {
    let offset = (i64::from(weekday(day_count)) - i64::from(week_start.first_weekday())).rem_euclid(7);
    day_count - offset
}

/// Week-based year and week number of the week containing `day_count`.
///
/// Week 1 is the week holding day 4 of month 1; a week belongs to the year
/// of its fourth day.  With a Monday start this is ISO 8601 week numbering.
pub(crate) fn week_number<C: DateCalendar>(day_count: i64, week_start: WeekStart) -> (i64, i64) {
    let start = week_start_of(day_count, week_start);
    let (year, _, _) = C::from_day_count(start + 3);
    let first = week_start_of(C::day_count_of(year, 1, 4), week_start);
    (year, (start - first).div_euclid(7) + 1)
}

/// Year label: years ≤ 0 render as `"<1-year> BC"`.
pub fn format_year(year: i64) -> String {
    if year <= 0 {
        format!("{} BC", 1 - year)
    } else {
        year.to_string()
    }
}

/// English ordinal (`1st`, `2nd`, `11th`, …).
pub(crate) fn ordinal(n: i64) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

// ═══════════════════════════════════════════════════════════════════════════
// CalendarDate<C>
// ═══════════════════════════════════════════════════════════════════════════

/// Broken-down `(year, month, day, hour, minute, second)` view of an instant
/// in calendar `C`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CalendarDate<C: DateCalendar> {
    year: i64,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    _calendar: PhantomData<C>,
}

impl<C: DateCalendar> CalendarDate<C> {
    /// A validated date at midnight.
    pub fn from_ymd(year: i64, month: u8, day: u8) -> Result<Self> {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// A validated date and time of day.
    pub fn new(year: i64, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Result<Self> {
        C::validate(year, month, day)?;
        if hour > 23 || minute > 59 || second > 59 {
            return Err(TimeError::ValueMismatch(format!(
                "invalid time of day {hour:02}:{minute:02}:{second:02}"
            )));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            _calendar: PhantomData,
        })
    }

    /// The date on which `time` falls.
    pub fn from_time(time: TimeValue<C>) -> Self {
        let (year, month, day) = C::from_day_count(time.day_count());
        let seconds = time.seconds_in_day();
        Self {
            year,
            month,
            day,
            hour: (seconds / SECONDS_PER_HOUR) as u8,
            minute: (seconds % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as u8,
            second: (seconds % SECONDS_PER_MINUTE) as u8,
            _calendar: PhantomData,
        }
    }

    /// The instant this date denotes.
    pub fn to_time(&self) -> TimeValue<C> {
        TimeValue::new(
            C::day_count_of(self.year, self.month, self.day),
            i64::from(self.hour) * SECONDS_PER_HOUR
                + i64::from(self.minute) * SECONDS_PER_MINUTE
                + i64::from(self.second),
        )
    }

    pub const fn year(&self) -> i64 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Whether the year is displayed with a `BC` suffix.
    pub const fn is_bc(&self) -> bool {
        self.year <= 0
    }

    /// Day of week, 0 = Monday … 6 = Sunday.
    pub fn weekday(&self) -> u8 {
        weekday(C::day_count_of(self.year, self.month, self.day))
    }

    /// 1-based day of the year.
    pub fn day_of_year(&self) -> i64 {
        C::day_count_of(self.year, self.month, self.day) - C::day_count_of(self.year, 1, 1) + 1
    }

    /// Week number of this date, see [`week_number`].
    pub fn week_number(&self, week_start: WeekStart) -> i64 {
        week_number::<C>(C::day_count_of(self.year, self.month, self.day), week_start).1
    }

    /// Whether the time of day is midnight.
    pub const fn is_midnight(&self) -> bool {
        self.hour == 0 && self.minute == 0 && self.second == 0
    }

    /// `"7 Jul 2013"`.
    pub fn format_day_month_year(&self) -> String {
        format!(
            "{} {} {}",
            self.day,
            C::month_abbreviation(self.month),
            format_year(self.year)
        )
    }
}

impl<C: DateCalendar> fmt::Display for CalendarDate<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}
