// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The numeric axis: plain integers instead of dates.
//!
//! A numeric time is stored in the day-count component with a zero seconds
//! component, which lets it share `TimeValue`, `TimePeriod` and the axis
//! walker with the date calendars.

use crate::calendar::Calendar;
use crate::config::AxisConfig;
use crate::duration::DurationType;
use crate::dynamic::CalendarKind;
use crate::error::{Result, TimeError};
use crate::instant::{TimeDelta, TimeValue};
use crate::period::TimePeriod;
use crate::strip::{Strip, StripPair};
use crate::time_type::TimeType;

/// Supported values are `-LIMIT..=LIMIT`.
const LIMIT: i64 = 1_000_000_000_000_000;

/// Numeric axis marker.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Numeric;

impl Calendar for Numeric {
    const LABEL: &'static str = "Numeric";
    const KIND: CalendarKind = CalendarKind::Numeric;
    const SECONDS_PER_DAY: i64 = 1;
}

impl TimeValue<Numeric> {
    #[inline]
    pub fn from_value(value: i64) -> Self {
        Self::new(value, 0)
    }

    #[inline]
    pub const fn value(&self) -> i64 {
        self.day_count()
    }
}

impl TimeDelta<Numeric> {
    #[inline]
    pub fn from_units(units: i64) -> Self {
        Self::from_days(units)
    }

    #[inline]
    pub const fn units(&self) -> i64 {
        self.days()
    }
}

impl TimeType for Numeric {
    fn now() -> TimeValue<Self> {
        TimeValue::from_value(0)
    }

    fn parse_time(text: &str) -> Result<TimeValue<Self>> {
        let value: i64 = text
            .trim()
            .parse()
            .map_err(|_| TimeError::Parse(format!("`{text}` is not an integer")))?;
        Self::check_range(TimeValue::from_value(value))
    }

    fn format_time(time: TimeValue<Self>) -> String {
        time.value().to_string()
    }

    fn format_delta(delta: TimeDelta<Self>, _parts: &[DurationType]) -> String {
        delta.units().to_string()
    }

    fn min_time() -> TimeValue<Self> {
        TimeValue::from_value(-LIMIT)
    }

    fn max_time() -> TimeValue<Self> {
        TimeValue::from_value(LIMIT)
    }

    fn is_weekend_day(_time: TimeValue<Self>) -> bool {
        false
    }

    fn min_zoom_delta() -> TimeDelta<Self> {
        TimeDelta::from_units(5)
    }

    fn choose_strips(period: &TimePeriod<Self>, _width_px: f64, _config: &AxisConfig) -> StripPair<Self> {
        let major = NumericStrip::for_span(period.delta().units());
        let minor = NumericStrip::new((major.size / 10).max(1));
        log::debug!("numeric axis: strips of {}/{}", major.size, minor.size);
        StripPair::new(major, minor)
    }
}

/// Power-of-ten blocks of integers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NumericStrip {
    size: i64,
}

impl NumericStrip {
    /// A strip of `size` units; sizes below one are raised to one.
    pub fn new(size: i64) -> Self {
        Self { size: size.max(1) }
    }

    /// The largest power of ten not exceeding `span`.
    pub fn for_span(span: i64) -> Self {
        let span = span.max(1);
        let mut size = 1_i64;
        while size <= span / 10 {
            size *= 10;
        }
        Self::new(size)
    }

    pub const fn size(&self) -> i64 {
        self.size
    }
}

impl Strip<Numeric> for NumericStrip {
    fn start(&self, time: TimeValue<Numeric>) -> TimeValue<Numeric> {
        TimeValue::from_value(time.value().div_euclid(self.size) * self.size)
    }

    fn increment(&self, time: TimeValue<Numeric>) -> TimeValue<Numeric> {
        TimeValue::from_value(time.value() + self.size)
    }

    fn label(&self, time: TimeValue<Numeric>, _major: bool) -> String {
        time.value().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Side;

    #[test]
    fn parse_and_format_integers() {
        assert_eq!(Numeric::parse_time(" -42 ").unwrap().value(), -42);
        assert_eq!(Numeric::format_time(TimeValue::from_value(7)), "7");
        assert!(matches!(Numeric::parse_time("4.5"), Err(TimeError::Parse(_))));
        assert!(matches!(Numeric::parse_time("2013-07-07"), Err(TimeError::Parse(_))));
    }

    #[test]
    fn range_is_ten_to_the_fifteenth() {
        assert!(Numeric::parse_time("1000000000000000").is_ok());
        assert_eq!(
            Numeric::parse_time("1000000000000001"),
            Err(TimeError::OutOfRange(Side::Right))
        );
        assert_eq!(
            Numeric::parse_time("-1000000000000001"),
            Err(TimeError::OutOfRange(Side::Left))
        );
    }

    #[test]
    fn no_weekends_or_special_days() {
        let t = TimeValue::from_value(6);
        assert!(!Numeric::is_weekend_day(t));
        assert!(!Numeric::is_special_day(t));
        assert_eq!(Numeric::now().value(), 0);
        assert_eq!(Numeric::format_delta(TimeDelta::from_units(-3), DurationType::ALL), "-3");
    }

    #[test]
    fn strip_size_follows_span() {
        assert_eq!(NumericStrip::for_span(0).size(), 1);
        assert_eq!(NumericStrip::for_span(9).size(), 1);
        assert_eq!(NumericStrip::for_span(10).size(), 10);
        assert_eq!(NumericStrip::for_span(999).size(), 100);
        assert_eq!(NumericStrip::for_span(1_000).size(), 1_000);
    }

    #[test]
    fn strip_tiles_negative_values() {
        let strip = NumericStrip::new(10);
        assert_eq!(strip.start(TimeValue::from_value(-3)).value(), -10);
        assert_eq!(strip.start(TimeValue::from_value(25)).value(), 20);
        assert_eq!(strip.increment(TimeValue::from_value(20)).value(), 30);
        assert_eq!(strip.label(TimeValue::from_value(20), true), "20");
    }

    #[test]
    fn chosen_strips_nest() {
        let period =
            TimePeriod::new(TimeValue::from_value(0), TimeValue::from_value(5_000)).unwrap();
        let pair = Numeric::choose_strips(&period, 800.0, &AxisConfig::default());
        assert_eq!(pair.major.increment(TimeValue::from_value(0)).value(), 1_000);
        assert_eq!(pair.minor.increment(TimeValue::from_value(0)).value(), 100);
        assert_eq!(pair.major.kind(), None);
    }
}
