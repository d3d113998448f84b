// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The proleptic Gregorian calendar.
//!
//! Year 0 exists (it is displayed as `1 BC`) and negative years continue
//! backwards without a gap.  Conversion to and from the Julian Day Number
//! pivot uses the Fliegel–Van Flandern integer algorithm with floor
//! division, which keeps it exact for negative day counts as well.

use crate::calendar::{weekday, Calendar, DateCalendar};
use crate::config::AxisConfig;
use crate::duration::DurationType;
use crate::dynamic::CalendarKind;
use crate::error::Result;
use crate::instant::{TimeDelta, TimeValue};
use crate::period::TimePeriod;
use crate::strip::StripPair;
use crate::time_type::{self, TimeType};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Julian Day Number of 0001-01-01 minus chrono's day number of that date.
const CHRONO_CE_OFFSET: i64 = 1_721_425;

/// 1 January 9990.
const MAX_DAY_COUNT: i64 = 5_369_833;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// Proleptic Gregorian calendar marker.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gregorian;

impl Calendar for Gregorian {
    const LABEL: &'static str = "Gregorian";
    const KIND: CalendarKind = CalendarKind::Gregorian;
    const SECONDS_PER_DAY: i64 = 86_400;
}

impl DateCalendar for Gregorian {
    const MONTH_NAMES: &'static [&'static str] = &MONTH_NAMES;
    const MONTH_ABBREVIATIONS: &'static [&'static str] = &MONTH_ABBREVIATIONS;
    const WEEKDAY_NAMES: &'static [&'static str; 7] = &WEEKDAY_NAMES;
    const WEEKDAY_ABBREVIATIONS: &'static [&'static str; 7] = &WEEKDAY_ABBREVIATIONS;

    fn is_leap_year(year: i64) -> bool {
        year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
    }

    fn months_in_year(_year: i64) -> u8 {
        12
    }

    fn days_in_month(year: i64, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    fn day_count_of(year: i64, month: u8, day: u8) -> i64 {
        let month = i64::from(month);
        let a = (14 - month).div_euclid(12);
        let y = year + 4800 - a;
        let m = month + 12 * a - 3;
        i64::from(day) + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4)
            - y.div_euclid(100)
            + y.div_euclid(400)
            - 32_045
    }

    fn from_day_count(day_count: i64) -> (i64, u8, u8) {
        let a = day_count + 32_044;
        let b = (4 * a + 3).div_euclid(146_097);
        let c = a - (146_097 * b).div_euclid(4);
        let d = (4 * c + 3).div_euclid(1_461);
        let e = c - (1_461 * d).div_euclid(4);
        let m = (5 * e + 2).div_euclid(153);
        let day = e - (153 * m + 2).div_euclid(5) + 1;
        let month = m + 3 - 12 * m.div_euclid(10);
        let year = 100 * b + d - 4800 + m.div_euclid(10);
        (year, month as u8, day as u8)
    }
}

impl TimeType for Gregorian {
    fn now() -> TimeValue<Self> {
        TimeValue::from_naive(chrono::Local::now().naive_local())
    }

    fn parse_time(text: &str) -> Result<TimeValue<Self>> {
        time_type::parse_date_time::<Self>(text)
    }

    fn format_time(time: TimeValue<Self>) -> String {
        time_type::format_date_time(time)
    }

    fn format_delta(delta: TimeDelta<Self>, parts: &[DurationType]) -> String {
        time_type::format_date_delta(delta, parts)
    }

    fn min_time() -> TimeValue<Self> {
        TimeValue::new(0, 0)
    }

    fn max_time() -> TimeValue<Self> {
        TimeValue::new(MAX_DAY_COUNT, 0)
    }

    /// Saturday and Sunday.
    fn is_weekend_day(time: TimeValue<Self>) -> bool {
        weekday(time.day_count()) >= 5
    }

    fn min_zoom_delta() -> TimeDelta<Self> {
        time_type::date_min_zoom_delta()
    }

    fn max_zoom_delta() -> TimeDelta<Self> {
        time_type::date_max_zoom_delta()
    }

    fn choose_strips(period: &TimePeriod<Self>, width_px: f64, config: &AxisConfig) -> StripPair<Self> {
        time_type::choose_date_strips(period, width_px, config)
    }
}

// ── chrono interop ────────────────────────────────────────────────────────

impl TimeValue<Gregorian> {
    /// Build an instant from a naive chrono date-time (sub-second part dropped).
    pub fn from_naive(datetime: NaiveDateTime) -> Self {
        let day_count = i64::from(datetime.date().num_days_from_ce()) + CHRONO_CE_OFFSET;
        Self::new(day_count, i64::from(datetime.time().num_seconds_from_midnight()))
    }

    /// Convert to a naive chrono date-time.
    ///
    /// Returns `None` if the value falls outside chrono's representable range.
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        let days = i32::try_from(self.day_count() - CHRONO_CE_OFFSET).ok()?;
        let seconds = self.seconds_in_day() as u32;
        NaiveDate::from_num_days_from_ce_opt(days)?.and_hms_opt(
            seconds / 3_600,
            seconds % 3_600 / 60,
            seconds % 60,
        )
    }
}

impl From<NaiveDate> for TimeValue<Gregorian> {
    fn from(date: NaiveDate) -> Self {
        Self::new(i64::from(date.num_days_from_ce()) + CHRONO_CE_OFFSET, 0)
    }
}

impl From<NaiveDateTime> for TimeValue<Gregorian> {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::from_naive(datetime)
    }
}
