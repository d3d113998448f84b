// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The Pharaonic (ancient Egyptian civil) calendar.
//!
//! Twelve months of 30 days, each split into three decans, followed by the
//! epagomenal days: 5, or 6 in years with `year mod 4 == 0`.  1 Thoth 1 is
//! JDN 1 448 638 (the era of Nabonassar).
//!
//! The last day of every decan is a rest day; the epagomenal days are feast
//! days.

use crate::calendar::{Calendar, DateCalendar};
use crate::config::AxisConfig;
use crate::duration::DurationType;
use crate::dynamic::CalendarKind;
use crate::epagomenal::EpagomenalRules;
use crate::error::Result;
use crate::gregorian::Gregorian;
use crate::instant::{TimeDelta, TimeValue};
use crate::period::TimePeriod;
use crate::strip::StripPair;
use crate::time_type::{self, TimeType};

const RULES: EpagomenalRules = EpagomenalRules {
    epoch: 1_448_638,
    leap_residue: Some(0),
};

const MONTH_NAMES: [&str; 13] = [
    "Thoth",
    "Phaophi",
    "Athyr",
    "Choiak",
    "Tybi",
    "Mechir",
    "Phamenoth",
    "Pharmuthi",
    "Pachons",
    "Payni",
    "Epiphi",
    "Mesore",
    "Epagomenae",
];

const MONTH_ABBREVIATIONS: [&str; 13] = [
    "Tho", "Pha", "Ath", "Cho", "Tyb", "Mec", "Phm", "Phr", "Pac", "Pay", "Epi", "Mes", "Epa",
];

/// Pharaonic calendar marker.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pharaonic;

impl Calendar for Pharaonic {
    const LABEL: &'static str = "Pharaonic";
    const KIND: CalendarKind = CalendarKind::Pharaonic;
    const SECONDS_PER_DAY: i64 = 86_400;
}

impl DateCalendar for Pharaonic {
    const MONTH_NAMES: &'static [&'static str] = &MONTH_NAMES;
    const MONTH_ABBREVIATIONS: &'static [&'static str] = &MONTH_ABBREVIATIONS;
    const WEEKDAY_NAMES: &'static [&'static str; 7] = Gregorian::WEEKDAY_NAMES;
    const WEEKDAY_ABBREVIATIONS: &'static [&'static str; 7] = Gregorian::WEEKDAY_ABBREVIATIONS;

    fn is_leap_year(year: i64) -> bool {
        RULES.is_leap_year(year)
    }

    fn months_in_year(_year: i64) -> u8 {
        13
    }

    fn days_in_month(year: i64, month: u8) -> u8 {
        RULES.days_in_month(year, month)
    }

    fn day_count_of(year: i64, month: u8, day: u8) -> i64 {
        RULES.day_count_of(year, month, day)
    }

    fn from_day_count(day_count: i64) -> (i64, u8, u8) {
        RULES.from_day_count(day_count)
    }

    fn intercalary_quarter_label() -> &'static str {
        "Epa"
    }
}

impl TimeType for Pharaonic {
    fn now() -> TimeValue<Self> {
        Gregorian::now().to::<Self>()
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
        Gregorian::min_time().to::<Self>()
    }

    fn max_time() -> TimeValue<Self> {
        Gregorian::max_time().to::<Self>()
    }

    /// The closing day of each decan: days 10, 20 and 30.
    fn is_weekend_day(time: TimeValue<Self>) -> bool {
        let date = time.date();
        !Self::is_intercalary_month(date.month()) && date.day() % 10 == 0
    }

    /// The epagomenal days.
    fn is_special_day(time: TimeValue<Self>) -> bool {
        Self::is_intercalary_month(time.date().month())
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
