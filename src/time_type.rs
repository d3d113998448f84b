// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The per-calendar policy facade.
//!
//! [`TimeType`] bundles everything an editor or an axis renderer asks of a
//! calendar: parsing and formatting, the supported range, day
//! classification, zoom limits and strip selection.  It is implemented by
//! the calendar marker types themselves, so a caller picks a time type by
//! picking `Gregorian`, `Coptic`, `Pharaonic`, `Bosparanian` or `Numeric`.
//!
//! The free functions below are the shared implementation used by all date
//! calendars.

use crate::calendar::{Calendar, DateCalendar};
use crate::config::AxisConfig;
use crate::duration::{DurationFormatter, DurationType};
use crate::error::{Result, Side, TimeError};
use crate::instant::{TimeDelta, TimeValue};
use crate::period::TimePeriod;
use crate::strip::{DateStrip, StripKind, StripPair};
use crate::CalendarDate;

/// Per-calendar parsing, formatting, range and classification rules.
pub trait TimeType: Calendar {
    /// The current wall-clock time.
    fn now() -> TimeValue<Self>;

    /// Parse user text; see [`parse_date_time`] for the date syntax.
    ///
    /// # Errors
    ///
    /// [`TimeError::Parse`] for malformed text, [`TimeError::ValueMismatch`]
    /// for a date the calendar lacks and [`TimeError::OutOfRange`] for a
    /// valid date outside [`min_time`](Self::min_time)…[`max_time`](Self::max_time).
    fn parse_time(text: &str) -> Result<TimeValue<Self>>;

    fn format_time(time: TimeValue<Self>) -> String;

    /// Human-readable duration restricted to `parts`.
    fn format_delta(delta: TimeDelta<Self>, parts: &[DurationType]) -> String;

    fn min_time() -> TimeValue<Self>;

    fn max_time() -> TimeValue<Self>;

    /// Pass `time` through if it lies inside the supported range.
    fn check_range(time: TimeValue<Self>) -> Result<TimeValue<Self>> {
        if time < Self::min_time() {
            Err(TimeError::OutOfRange(Side::Left))
        } else if time > Self::max_time() {
            Err(TimeError::OutOfRange(Side::Right))
        } else {
            Ok(time)
        }
    }

    fn is_weekend_day(time: TimeValue<Self>) -> bool;

    fn is_special_day(_time: TimeValue<Self>) -> bool {
        false
    }

    /// Narrowest visible period.
    fn min_zoom_delta() -> TimeDelta<Self>;

    /// Widest visible period.
    fn max_zoom_delta() -> TimeDelta<Self> {
        Self::max_time() - Self::min_time()
    }

    fn zoom_is_ok(delta: TimeDelta<Self>) -> bool {
        delta >= Self::min_zoom_delta() && delta <= Self::max_zoom_delta()
    }

    /// Whether either end of `period` has a time of day other than midnight.
    fn time_period_has_nonzero_time(period: &TimePeriod<Self>) -> bool {
        !period.start().is_midnight() || !period.end().is_midnight()
    }

    /// Major and minor strips for drawing `period` across `width_px` pixels.
    fn choose_strips(period: &TimePeriod<Self>, width_px: f64, config: &AxisConfig) -> StripPair<Self>;
}

// ═══════════════════════════════════════════════════════════════════════════
// Shared date-calendar implementation
// ═══════════════════════════════════════════════════════════════════════════

/// Parse `[-]Y-M-D[ H:M[:S]]`.
pub fn parse_date_time<C: DateCalendar + TimeType>(text: &str) -> Result<TimeValue<C>> {
    let malformed = || TimeError::Parse(format!("`{text}` is not of the form Y-M-D [H:M[:S]]"));

    let mut fields = text.split_whitespace();
    let date = fields.next().ok_or_else(malformed)?;
    let time = fields.next();
    if fields.next().is_some() {
        return Err(malformed());
    }

    let (sign, unsigned) = match date.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, date),
    };
    let date_fields: Vec<&str> = unsigned.split('-').collect();
    let [year, month, day] = date_fields.as_slice() else {
        return Err(malformed());
    };
    let year: i64 = year.parse().map_err(|_| malformed())?;
    let month: u8 = month.parse().map_err(|_| malformed())?;
    let day: u8 = day.parse().map_err(|_| malformed())?;

    let (hour, minute, second) = match time {
        None => (0, 0, 0),
        Some(time) => {
            let parsed = time
                .split(':')
                .map(str::parse::<u8>)
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|_| malformed())?;
            match parsed.as_slice() {
                [hour, minute] => (*hour, *minute, 0),
                [hour, minute, second] => (*hour, *minute, *second),
                _ => return Err(malformed()),
            }
        }
    };

    let date = CalendarDate::<C>::new(sign * year, month, day, hour, minute, second)?;
    C::check_range(date.to_time())
}

/// `Y-MM-DD HH:MM:SS`.
pub fn format_date_time<C: DateCalendar>(time: TimeValue<C>) -> String {
    time.date().to_string()
}

pub fn format_date_delta<C: DateCalendar>(delta: TimeDelta<C>, parts: &[DurationType]) -> String {
    DurationFormatter::new(delta.days(), delta.seconds()).format(parts)
}

pub(crate) fn date_min_zoom_delta<C: Calendar>() -> TimeDelta<C> {
    TimeDelta::from_minutes(1)
}

pub(crate) fn date_max_zoom_delta<C: Calendar>() -> TimeDelta<C> {
    TimeDelta::from_days(1200 * 365)
}

/// Pixel width of one day above which a strip pair is used, widest first.
const DAY_WIDTH_THRESHOLDS: [(f64, StripKind, StripKind); 9] = [
    (20_000.0, StripKind::Hour, StripKind::Minute),
    (600.0, StripKind::Day, StripKind::Hour),
    (60.0, StripKind::Month, StripKind::Weekday),
    (25.0, StripKind::Month, StripKind::Day),
    (10.0, StripKind::Month, StripKind::Week),
    (1.75, StripKind::Year, StripKind::Month),
    (0.5, StripKind::Year, StripKind::Quarter),
    (0.12, StripKind::Decade, StripKind::Year),
    (0.012, StripKind::Century, StripKind::Decade),
];

/// Pick the strip pair whose units stay readable at the current zoom.
pub fn choose_date_strips<C: DateCalendar>(
    period: &TimePeriod<C>,
    width_px: f64,
    config: &AxisConfig,
) -> StripPair<C> {
    let day_width = width_px / period.delta().to_days().value();
    let (major, minor) = DAY_WIDTH_THRESHOLDS
        .iter()
        .find(|(threshold, _, _)| day_width > *threshold)
        .map(|(_, major, minor)| (*major, *minor))
        .unwrap_or((StripKind::Century, StripKind::Century));
    log::debug!(
        "{} axis: {:.4} px per day, strips {:?}/{:?}",
        C::LABEL,
        day_width,
        major,
        minor
    );
    StripPair::new(
        DateStrip::<C>::with_week_start(major, config.week_start),
        DateStrip::<C>::with_week_start(minor, config.week_start),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bosparanian, Coptic, Gregorian, Pharaonic};

    fn greg(text: &str) -> Result<TimeValue<Gregorian>> {
        Gregorian::parse_time(text)
    }

    #[test]
    fn parses_date_and_time_forms() {
        let full = greg("2013-07-10 12:33:15").unwrap();
        assert_eq!(full.date().to_string(), "2013-07-10 12:33:15");
        let minutes = greg("2013-07-10 12:33").unwrap();
        assert_eq!(full - minutes, TimeDelta::from_seconds(15));
        let date_only = greg("  2013-07-10 ").unwrap();
        assert!(date_only.is_midnight());
        let bc = greg("-44-03-15").unwrap();
        assert_eq!(bc.date().year(), -44);
        assert_eq!(Gregorian::format_time(bc), "-44-03-15 00:00:00");
    }

    #[test]
    fn malformed_text_is_parse_error() {
        for text in ["", "2013", "2013-07", "2013-07-10-01", "x-07-10", "2013-07-10 12", "2013-07-10 1:2:3:4", "2013-07-10 12:00 extra", "2013-07-10 ab:00"] {
            assert!(
                matches!(greg(text), Err(TimeError::Parse(_))),
                "`{text}` should not parse"
            );
        }
    }

    #[test]
    fn invalid_dates_are_value_mismatches() {
        assert!(matches!(greg("2013-02-30"), Err(TimeError::ValueMismatch(_))));
        assert!(matches!(greg("2013-14-01"), Err(TimeError::ValueMismatch(_))));
        assert!(matches!(greg("2013-01-01 25:00"), Err(TimeError::ValueMismatch(_))));
    }

    #[test]
    fn huge_years_are_out_of_range() {
        fn sides<C: TimeType + DateCalendar>() -> (Option<Side>, Option<Side>) {
            let side = |text: &str| C::parse_time(text).err().and_then(|err| err.side());
            (
                side("-100000000000000000-01-01"),
                side("100000000000000000-01-01 12:00"),
            )
        }
        let expected = (Some(Side::Left), Some(Side::Right));
        assert_eq!(sides::<Gregorian>(), expected);
        assert_eq!(sides::<Coptic>(), expected);
        assert_eq!(sides::<Pharaonic>(), expected);
        assert_eq!(sides::<Bosparanian>(), expected);
        assert_eq!(
            Gregorian::parse_time("-9223372036854775807-01-01"),
            Err(TimeError::OutOfRange(Side::Left))
        );
    }

    #[test]
    fn zoom_limits() {
        assert!(!Gregorian::zoom_is_ok(TimeDelta::from_seconds(59)));
        assert!(Gregorian::zoom_is_ok(TimeDelta::from_minutes(1)));
        assert!(Gregorian::zoom_is_ok(TimeDelta::from_days(1200 * 365)));
        assert!(!Gregorian::zoom_is_ok(TimeDelta::from_days(1200 * 365 + 1)));
        assert_eq!(Bosparanian::min_zoom_delta(), TimeDelta::from_minutes(1));
    }

    #[test]
    fn nonzero_time_detection() {
        let midnight = greg("2013-07-10").unwrap();
        let noon = greg("2013-07-10 12:00").unwrap();
        let next = greg("2013-07-11").unwrap();
        assert!(!Gregorian::time_period_has_nonzero_time(
            &TimePeriod::new(midnight, next).unwrap()
        ));
        assert!(Gregorian::time_period_has_nonzero_time(
            &TimePeriod::new(midnight, noon).unwrap()
        ));
        assert!(Gregorian::time_period_has_nonzero_time(
            &TimePeriod::point(noon)
        ));
    }

    #[test]
    fn format_delta_uses_requested_parts() {
        let delta = TimeDelta::<Gregorian>::new(1, 3_700);
        assert_eq!(
            Gregorian::format_delta(delta, DurationType::ALL),
            "1 day 1 hour 1 minute 40 seconds"
        );
        assert_eq!(
            Gregorian::format_delta(delta, &[DurationType::Hours]),
            "25 hours"
        );
    }

    #[test]
    fn strip_choice_follows_day_width() {
        let start = greg("2013-07-01").unwrap();
        let pick = |days: i64, width: f64| {
            let period = TimePeriod::new(start, start + TimeDelta::from_days(days)).unwrap();
            let pair = Gregorian::choose_strips(&period, width, &AxisConfig::default());
            (pair.major.kind().unwrap(), pair.minor.kind().unwrap())
        };
        assert_eq!(pick(1, 1_000.0), (StripKind::Day, StripKind::Hour));
        assert_eq!(pick(30, 1_000.0), (StripKind::Month, StripKind::Day));
        assert_eq!(pick(365, 1_000.0), (StripKind::Year, StripKind::Month));
        assert_eq!(pick(1_000, 1_000.0), (StripKind::Year, StripKind::Quarter));
        assert_eq!(pick(3_650, 1_000.0), (StripKind::Decade, StripKind::Year));
        assert_eq!(pick(365_000, 1_000.0), (StripKind::Century, StripKind::Century));
    }
}
