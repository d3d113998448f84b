// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The Bosparanian calendar (years counted after the Fall of Bosparan, BF).
//!
//! Twelve god-named months of 30 days and the five Nameless Days, a fixed
//! 365-day year without leap years.  1 Praios 1 BF is JDN 2 078 449.
//! Praiostag, the day of the sun god, is a holiday every week.

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
    epoch: 2_078_449,
    leap_residue: None,
};

const PRAIOSTAG: u8 = 3;

const MONTH_NAMES: [&str; 13] = [
    "Praios",
    "Rondra",
    "Efferd",
    "Travia",
    "Boron",
    "Hesinde",
    "Firun",
    "Tsa",
    "Phex",
    "Peraine",
    "Ingerimm",
    "Rahja",
    "Namenlose Tage",
];

const MONTH_ABBREVIATIONS: [&str; 13] = [
    "Pra", "Ron", "Eff", "Tra", "Bor", "Hes", "Fir", "Tsa", "Phe", "Per", "Ing", "Rah", "Nam",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Windstag",
    "Erdstag",
    "Markttag",
    "Praiostag",
    "Rohalstag",
    "Feuertag",
    "Wassertag",
];

const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["Wi", "Er", "Ma", "Pr", "Ro", "Fe", "Wa"];

/// Bosparanian calendar marker.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bosparanian;

impl Calendar for Bosparanian {
    const LABEL: &'static str = "Bosparanian";
    const KIND: CalendarKind = CalendarKind::Bosparanian;
    const SECONDS_PER_DAY: i64 = 86_400;
}

impl DateCalendar for Bosparanian {
    const MONTH_NAMES: &'static [&'static str] = &MONTH_NAMES;
    const MONTH_ABBREVIATIONS: &'static [&'static str] = &MONTH_ABBREVIATIONS;
    const WEEKDAY_NAMES: &'static [&'static str; 7] = &WEEKDAY_NAMES;
    const WEEKDAY_ABBREVIATIONS: &'static [&'static str; 7] = &WEEKDAY_ABBREVIATIONS;

    fn is_leap_year(_year: i64) -> bool {
        false
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
        "NLD"
    }
}

impl TimeType for Bosparanian {
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

    fn is_weekend_day(_time: TimeValue<Self>) -> bool {
        false
    }

    fn is_special_day(time: TimeValue<Self>) -> bool {
        weekday(time.day_count()) == PRAIOSTAG
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

    fn bosparanian(y: i64, m: u8, d: u8) -> TimeValue<Bosparanian> {
        TimeValue::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn epoch_and_sample_dates() {
        let first = bosparanian(1, 1, 1).to::<Gregorian>().date();
        assert_eq!((first.year(), first.month(), first.day()), (978, 7, 1));
        let july_7 = TimeValue::<Gregorian>::from_ymd(2013, 7, 7).unwrap().to::<Bosparanian>();
        let date = july_7.date();
        assert_eq!((date.year(), date.month(), date.day()), (1036, 9, 18));
    }

    #[test]
    fn every_year_has_five_nameless_days() {
        for year in [-3, 0, 1, 4, 1036, 1040] {
            assert!(!Bosparanian::is_leap_year(year));
            assert_eq!(Bosparanian::days_in_month(year, 13), 5);
            assert_eq!(
                Bosparanian::day_count_of(year + 1, 1, 1) - Bosparanian::day_count_of(year, 1, 1),
                365
            );
        }
        assert!(Bosparanian::to_day_count(1036, 13, 6).is_err());
    }

    #[test]
    fn special_day_table() {
        // Phex 15 to 21, 1036 BF: Praiostag falls on Phex 15.
        let special: Vec<u8> = (15..=21)
            .filter(|d| Bosparanian::is_special_day(bosparanian(1036, 9, *d)))
            .collect();
        assert_eq!(special, [15]);
        assert_eq!(
            Bosparanian::weekday_name(bosparanian(1036, 9, 15).weekday()),
            "Praiostag"
        );
        assert!(Bosparanian::is_special_day(bosparanian(1036, 9, 22)));
        assert!((15..=21).all(|d| !Bosparanian::is_weekend_day(bosparanian(1036, 9, d))));
    }

    #[test]
    fn roundtrip_over_wide_range() {
        for n in -2_000_000..=5_000_000 {
            let (y, m, d) = Bosparanian::from_day_count(n);
            assert_eq!(Bosparanian::day_count_of(y, m, d), n, "day count {n}");
        }
    }
}
