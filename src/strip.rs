// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Strips: the calendar units an axis is divided into.
//!
//! A [`Strip`] snaps a time down to the start of its unit, steps to the start
//! of the next unit, and labels a unit start.  Date calendars share one
//! implementation, [`DateStrip`], parameterised by a [`StripKind`]; the
//! numeric axis has its own power-of-ten strip in
//! [`numeric`](crate::numeric).
//!
//! Boundary times are always computed from `(year, month, day)` through the
//! calendar's exact conversion, never by adding an average month or year
//! length, so a month boundary in the Coptic calendar is exactly the first
//! of a Coptic month.

use crate::calendar::{format_year, ordinal, week_number, week_start_of, Calendar, DateCalendar};
use crate::config::WeekStart;
use crate::instant::{TimeDelta, TimeValue};
use std::fmt;
use std::marker::PhantomData;

/// A calendar unit that tiles the time axis.
pub trait Strip<C: Calendar>: fmt::Debug + Send + Sync {
    /// Start of the unit containing `time`.
    fn start(&self, time: TimeValue<C>) -> TimeValue<C>;

    /// Start of the unit following the one that starts at `time`.
    fn increment(&self, time: TimeValue<C>) -> TimeValue<C>;

    /// Label for the unit starting at `time`; the major form carries enough
    /// context to stand alone.
    fn label(&self, time: TimeValue<C>, major: bool) -> String;

    /// Which date unit this strip walks, `None` for the numeric axis.
    fn kind(&self) -> Option<StripKind> {
        None
    }
}

/// The major and minor strips chosen for one zoom level.
#[derive(Debug)]
pub struct StripPair<C: Calendar> {
    pub major: Box<dyn Strip<C>>,
    pub minor: Box<dyn Strip<C>>,
}

impl<C: Calendar> StripPair<C> {
    pub fn new(major: impl Strip<C> + 'static, minor: impl Strip<C> + 'static) -> Self {
        Self {
            major: Box::new(major),
            minor: Box::new(minor),
        }
    }
}

/// Date units, finest first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StripKind {
    Minute,
    Hour,
    /// Days labelled with their weekday.
    Weekday,
    Day,
    Week,
    Month,
    /// Three-month groups plus the intercalary month as its own quarter.
    Quarter,
    Year,
    Decade,
    Century,
}

impl StripKind {
    pub const ALL: [StripKind; 10] = [
        StripKind::Minute,
        StripKind::Hour,
        StripKind::Weekday,
        StripKind::Day,
        StripKind::Week,
        StripKind::Month,
        StripKind::Quarter,
        StripKind::Year,
        StripKind::Decade,
        StripKind::Century,
    ];
}

// ═══════════════════════════════════════════════════════════════════════════
// DateStrip<C>
// ═══════════════════════════════════════════════════════════════════════════

/// The strip of one [`StripKind`] in date calendar `C`.
///
/// ```
/// use timestrip::{DateStrip, Gregorian, Strip, StripKind, TimeValue};
///
/// let strip = DateStrip::<Gregorian>::new(StripKind::Month);
/// let t = TimeValue::<Gregorian>::from_ymd_hms(2013, 7, 10, 12, 33, 15).unwrap();
/// let start = strip.start(t);
/// assert_eq!(start, TimeValue::from_ymd(2013, 7, 1).unwrap());
/// assert_eq!(strip.increment(start), TimeValue::from_ymd(2013, 8, 1).unwrap());
/// assert_eq!(strip.label(start, true), "Jul 2013");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DateStrip<C: DateCalendar> {
    kind: StripKind,
    week_start: WeekStart,
    _calendar: PhantomData<C>,
}

impl<C: DateCalendar> DateStrip<C> {
    pub fn new(kind: StripKind) -> Self {
        Self::with_week_start(kind, WeekStart::default())
    }

    pub fn with_week_start(kind: StripKind, week_start: WeekStart) -> Self {
        Self {
            kind,
            week_start,
            _calendar: PhantomData,
        }
    }
}

fn first_of_month<C: DateCalendar>(year: i64, month: u8) -> TimeValue<C> {
    TimeValue::new(C::day_count_of(year, month, 1), 0)
}

/// First month of the quarter holding `month`.
fn quarter_start_month<C: DateCalendar>(month: u8) -> u8 {
    if C::is_intercalary_month(month) {
        month
    } else {
        (month - 1) / 3 * 3 + 1
    }
}

fn quarter_label<C: DateCalendar>(month: u8) -> String {
    if C::is_intercalary_month(month) {
        C::intercalary_quarter_label().to_string()
    } else {
        format!("Q{}", (month - 1) / 3 + 1)
    }
}

/// Decade labels name the decade of the year itself, not of the shifted
/// boundary returned by [`Strip::start`].
fn decade_label(year: i64) -> String {
    let start = year.div_euclid(10) * 10;
    if start > 0 {
        format!("{start}s")
    } else {
        format_year(start)
    }
}

/// Names the century holding the first year of the strip, read the same way
/// as [`format_year`]: the strip starting at year 0 opens in 1 BC.
fn century_label(start: i64) -> String {
    if start > 0 {
        format!("{} century", ordinal(start / 100 + 1))
    } else {
        format!("{} century BC", ordinal((1 - start) / 100 + 1))
    }
}

impl<C: DateCalendar> DateStrip<C> {
    /// `"1-7 Jul 2013"`, widening the left side as the week crosses a month
    /// or a year.
    fn week_range(&self, time: TimeValue<C>) -> String {
        let first = week_start_of(time.day_count(), self.week_start);
        let (y1, m1, d1) = C::from_day_count(first);
        let (y2, m2, d2) = C::from_day_count(first + 6);
        let last = format!("{} {} {}", d2, C::month_abbreviation(m2), format_year(y2));
        if y1 != y2 {
            format!("{} {} {}-{}", d1, C::month_abbreviation(m1), format_year(y1), last)
        } else if m1 != m2 {
            format!("{} {}-{}", d1, C::month_abbreviation(m1), last)
        } else {
            format!("{d1}-{last}")
        }
    }
}

impl<C: DateCalendar> Strip<C> for DateStrip<C> {
    fn start(&self, time: TimeValue<C>) -> TimeValue<C> {
        let day_count = time.day_count();
        let seconds = time.seconds_in_day();
        let (year, month, _) = C::from_day_count(day_count);
        match self.kind {
            StripKind::Minute => TimeValue::new(day_count, seconds - seconds % 60),
            StripKind::Hour => TimeValue::new(day_count, seconds - seconds % 3_600),
            StripKind::Weekday | StripKind::Day => TimeValue::new(day_count, 0),
            StripKind::Week => TimeValue::new(week_start_of(day_count, self.week_start), 0),
            StripKind::Month => first_of_month(year, month),
            StripKind::Quarter => first_of_month(year, quarter_start_month::<C>(month)),
            StripKind::Year => first_of_month(year, 1),
            // One decade earlier than the naive boundary.
            StripKind::Decade => first_of_month(year.div_euclid(10) * 10 - 10, 1),
            StripKind::Century => first_of_month(year.div_euclid(100) * 100, 1),
        }
    }

    fn increment(&self, time: TimeValue<C>) -> TimeValue<C> {
        let (year, month, _) = C::from_day_count(time.day_count());
        match self.kind {
            StripKind::Minute => time + TimeDelta::from_minutes(1),
            StripKind::Hour => time + TimeDelta::from_hours(1),
            StripKind::Weekday | StripKind::Day => time + TimeDelta::from_days(1),
            StripKind::Week => time + TimeDelta::from_days(7),
            StripKind::Month => {
                if month < C::months_in_year(year) {
                    first_of_month(year, month + 1)
                } else {
                    first_of_month(year + 1, 1)
                }
            }
            StripKind::Quarter => {
                let next = quarter_start_month::<C>(month) + 3;
                if C::is_intercalary_month(month) {
                    first_of_month(year + 1, 1)
                } else if next <= 12 {
                    first_of_month(year, next)
                } else if C::months_in_year(year) > 12 {
                    first_of_month(year, 13)
                } else {
                    first_of_month(year + 1, 1)
                }
            }
            StripKind::Year => first_of_month(year + 1, 1),
            StripKind::Decade => first_of_month(year + 10, 1),
            StripKind::Century => first_of_month(year + 100, 1),
        }
    }

    fn label(&self, time: TimeValue<C>, major: bool) -> String {
        let date = time.date();
        let year = date.year();
        let month = date.month();
        match (self.kind, major) {
            (StripKind::Minute, false) => date.minute().to_string(),
            (StripKind::Minute, true) => format!(
                "{}: {:02}:{:02}",
                date.format_day_month_year(),
                date.hour(),
                date.minute()
            ),
            (StripKind::Hour, false) => date.hour().to_string(),
            (StripKind::Hour, true) => {
                format!("{}: {}h", date.format_day_month_year(), date.hour())
            }
            (StripKind::Weekday, false) => {
                format!("{} {}", C::weekday_abbreviation(date.weekday()), date.day())
            }
            (StripKind::Weekday, true) => format!(
                "{} {}",
                C::weekday_name(date.weekday()),
                date.format_day_month_year()
            ),
            (StripKind::Day, false) => date.day().to_string(),
            (StripKind::Day, true) => date.format_day_month_year(),
            (StripKind::Week, false) => {
                format!("Week {}", week_number::<C>(time.day_count(), self.week_start).1)
            }
            (StripKind::Week, true) => format!(
                "Week {} ({})",
                week_number::<C>(time.day_count(), self.week_start).1,
                self.week_range(time)
            ),
            (StripKind::Month, false) => C::month_abbreviation(month).to_string(),
            (StripKind::Month, true) => {
                format!("{} {}", C::month_abbreviation(month), format_year(year))
            }
            (StripKind::Quarter, false) => quarter_label::<C>(month),
            (StripKind::Quarter, true) => {
                format!("{} {}", quarter_label::<C>(month), format_year(year))
            }
            (StripKind::Year, _) => format_year(year),
            (StripKind::Decade, _) => decade_label(year),
            (StripKind::Century, false) => format_year(year.div_euclid(100) * 100),
            (StripKind::Century, true) => century_label(year.div_euclid(100) * 100),
        }
    }

    fn kind(&self) -> Option<StripKind> {
        Some(self.kind)
    }
}
