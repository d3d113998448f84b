// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The Coptic calendar.
//!
//! Twelve months of 30 days and the epagomenal month Pi Kogi Enavot of 5
//! days, 6 in years with `year mod 4 == 3`.  1 Thout 1 is JDN 1 825 030
//! (29 August 284 Julian).

use crate::calendar::{weekday, Calendar, DateCalendar};
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
    epoch: 1_825_030,
    leap_residue: Some(3),
};

const MONTH_NAMES: [&str; 13] = [
    "Thout",
    "Paopi",
    "Hathor",
    "Koiak",
    "Tobi",
    "Meshir",
    "Paremhat",
    "Parmouti",
    "Pashons",
    "Paoni",
    "Epip",
    "Mesori",
    "Pi Kogi Enavot",
];

const MONTH_ABBREVIATIONS: [&str; 13] = [
    "Tht", "Pop", "Hat", "Kia", "Tob", "Msh", "Pmh", "Pmo", "Pas", "Pon", "Epp", "Mso", "PKE",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Pesnau",
    "Pshoment",
    "Peftoou",
    "Ptiou",
    "Psoou",
    "Psabbaton",
    "Tkyriake",
];

const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["Psn", "Psh", "Pef", "Pti", "Pso", "Psa", "Tky"];

/// Coptic calendar marker.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coptic;

impl Calendar for Coptic {
    const LABEL: &'static str = "Coptic";
    const KIND: CalendarKind = CalendarKind::Coptic;
    const SECONDS_PER_DAY: i64 = 86_400;
}

impl DateCalendar for Coptic {
    const MONTH_NAMES: &'static [&'static str] = &MONTH_NAMES;
    const MONTH_ABBREVIATIONS: &'static [&'static str] = &MONTH_ABBREVIATIONS;
    const WEEKDAY_NAMES: &'static [&'static str; 7] = &WEEKDAY_NAMES;
    const WEEKDAY_ABBREVIATIONS: &'static [&'static str; 7] = &WEEKDAY_ABBREVIATIONS;

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
        "PKE"
    }
}

impl TimeType for Coptic {
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

    /// Psabbaton and Tkyriake.
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

#[cfg(test)]
mod tests {
    use super::*;

    fn gregorian(y: i64, m: u8, d: u8) -> TimeValue<Coptic> {
        TimeValue::<Gregorian>::from_ymd(y, m, d).unwrap().to::<Coptic>()
    }

    #[test]
    fn new_year_dates() {
        assert_eq!(gregorian(2012, 9, 11).date().day_of_year(), 1);
        let date = gregorian(2012, 9, 11).date();
        assert_eq!((date.year(), date.month(), date.day()), (1729, 1, 1));
        let date = gregorian(2015, 9, 11).date();
        assert_eq!((date.year(), date.month(), date.day()), (1731, 13, 6));
        let date = gregorian(2015, 9, 12).date();
        assert_eq!((date.year(), date.month(), date.day()), (1732, 1, 1));
    }

    #[test]
    fn leap_years_have_six_epagomenal_days() {
        assert!(Coptic::is_leap_year(1731));
        assert!(!Coptic::is_leap_year(1732));
        assert_eq!(Coptic::days_in_month(1731, 13), 6);
        assert_eq!(Coptic::days_in_month(1732, 13), 5);
        assert!(Coptic::to_day_count(1732, 13, 6).is_err());
    }

    #[test]
    fn weekend_table() {
        // 6 and 7 July 2013: Paoni 29 and 30, 1729.
        let saturday = gregorian(2013, 7, 6);
        let sunday = gregorian(2013, 7, 7);
        let thursday = gregorian(2013, 7, 4);
        assert_eq!(Coptic::weekday_name(saturday.weekday()), "Psabbaton");
        assert_eq!(Coptic::weekday_name(sunday.weekday()), "Tkyriake");
        assert!(Coptic::is_weekend_day(saturday));
        assert!(Coptic::is_weekend_day(sunday));
        assert!(!Coptic::is_weekend_day(thursday));
        assert!(!Coptic::is_special_day(sunday));
    }

    #[test]
    fn roundtrip_over_wide_range() {
        for n in -2_000_000..=5_000_000 {
            let (y, m, d) = Coptic::from_day_count(n);
            assert_eq!(Coptic::day_count_of(y, m, d), n, "day count {n}");
        }
    }

    #[test]
    fn parse_and_format() {
        let t = Coptic::parse_time("1729-10-30 08:00").unwrap();
        assert_eq!(t.to::<Gregorian>().date().day(), 7);
        assert_eq!(Coptic::format_time(t), "1729-10-30 08:00:00");
        assert!(Coptic::parse_time("1729-13-06").is_err());
    }
}
