// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Runtime-tagged times for callers that pick the calendar at run time.
//!
//! A timeline file names its calendar as data, so an editor cannot always
//! know `C` statically.  [`AnyTime`] and [`AnyDelta`] carry the calendar as
//! an enum tag; operations on mismatched tags fail with
//! [`TimeError::TypeMismatch`] instead of being rejected by the compiler.

use crate::calendar::Calendar;
use crate::duration::DurationType;
use crate::error::{Result, TimeError};
use crate::instant::{TimeDelta, TimeValue};
use crate::time_type::TimeType;
use crate::{Bosparanian, Coptic, Gregorian, Numeric, Pharaonic};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Runtime tag of a calendar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CalendarKind {
    Gregorian,
    Coptic,
    Pharaonic,
    Bosparanian,
    Numeric,
}

/// Run `$body` with `$C` bound to the marker type of `$kind`.
macro_rules! with_calendar {
    ($kind:expr, $C:ident => $body:expr) => {
        match $kind {
            CalendarKind::Gregorian => {
                type $C = Gregorian;
                $body
            }
            CalendarKind::Coptic => {
                type $C = Coptic;
                $body
            }
            CalendarKind::Pharaonic => {
                type $C = Pharaonic;
                $body
            }
            CalendarKind::Bosparanian => {
                type $C = Bosparanian;
                $body
            }
            CalendarKind::Numeric => {
                type $C = Numeric;
                $body
            }
        }
    };
}

impl CalendarKind {
    pub const ALL: [CalendarKind; 5] = [
        CalendarKind::Gregorian,
        CalendarKind::Coptic,
        CalendarKind::Pharaonic,
        CalendarKind::Bosparanian,
        CalendarKind::Numeric,
    ];

    pub fn label(self) -> &'static str {
        with_calendar!(self, C => C::LABEL)
    }

    pub fn parse_time(self, text: &str) -> Result<AnyTime> {
        with_calendar!(self, C => C::parse_time(text).map(AnyTime::from))
    }

    pub fn now(self) -> AnyTime {
        with_calendar!(self, C => AnyTime::from(C::now()))
    }

    pub fn min_time(self) -> AnyTime {
        with_calendar!(self, C => AnyTime::from(C::min_time()))
    }

    pub fn max_time(self) -> AnyTime {
        with_calendar!(self, C => AnyTime::from(C::max_time()))
    }
}

impl fmt::Display for CalendarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CalendarKind {
    type Err = TimeError;

    /// Case-insensitive calendar label.
    fn from_str(s: &str) -> Result<Self> {
        CalendarKind::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TimeError::Parse(format!("unknown calendar `{s}`")))
    }
}

fn mismatch(expected: CalendarKind, found: CalendarKind) -> TimeError {
    TimeError::TypeMismatch {
        expected: expected.label(),
        found: found.label(),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// AnyTime / AnyDelta
// ═══════════════════════════════════════════════════════════════════════════

/// A [`TimeValue`] of a calendar chosen at run time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AnyTime {
    Gregorian(TimeValue<Gregorian>),
    Coptic(TimeValue<Coptic>),
    Pharaonic(TimeValue<Pharaonic>),
    Bosparanian(TimeValue<Bosparanian>),
    Numeric(TimeValue<Numeric>),
}

/// A [`TimeDelta`] of a calendar chosen at run time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AnyDelta {
    Gregorian(TimeDelta<Gregorian>),
    Coptic(TimeDelta<Coptic>),
    Pharaonic(TimeDelta<Pharaonic>),
    Bosparanian(TimeDelta<Bosparanian>),
    Numeric(TimeDelta<Numeric>),
}

macro_rules! impl_any_from {
    ($($variant:ident),+) => {
        $(
            impl From<TimeValue<$variant>> for AnyTime {
                fn from(time: TimeValue<$variant>) -> Self {
                    AnyTime::$variant(time)
                }
            }

            impl From<TimeDelta<$variant>> for AnyDelta {
                fn from(delta: TimeDelta<$variant>) -> Self {
                    AnyDelta::$variant(delta)
                }
            }

            impl TryFrom<AnyTime> for TimeValue<$variant> {
                type Error = TimeError;

                fn try_from(time: AnyTime) -> Result<Self> {
                    match time {
                        AnyTime::$variant(inner) => Ok(inner),
                        other => Err(mismatch(CalendarKind::$variant, other.kind())),
                    }
                }
            }

            impl TryFrom<AnyDelta> for TimeDelta<$variant> {
                type Error = TimeError;

                fn try_from(delta: AnyDelta) -> Result<Self> {
                    match delta {
                        AnyDelta::$variant(inner) => Ok(inner),
                        other => Err(mismatch(CalendarKind::$variant, other.kind())),
                    }
                }
            }
        )+
    };
}

impl_any_from!(Gregorian, Coptic, Pharaonic, Bosparanian, Numeric);

/// A raw number is a numeric-axis duration.
impl From<i64> for AnyDelta {
    fn from(units: i64) -> Self {
        AnyDelta::Numeric(TimeDelta::from_days(units))
    }
}

impl AnyTime {
    pub fn kind(&self) -> CalendarKind {
        match self {
            AnyTime::Gregorian(_) => CalendarKind::Gregorian,
            AnyTime::Coptic(_) => CalendarKind::Coptic,
            AnyTime::Pharaonic(_) => CalendarKind::Pharaonic,
            AnyTime::Bosparanian(_) => CalendarKind::Bosparanian,
            AnyTime::Numeric(_) => CalendarKind::Numeric,
        }
    }

    /// The `(day_count, seconds_in_day)` pair, see [`TimeValue::stored`].
    pub fn stored(&self) -> (i64, i64) {
        match self {
            AnyTime::Gregorian(t) => t.stored(),
            AnyTime::Coptic(t) => t.stored(),
            AnyTime::Pharaonic(t) => t.stored(),
            AnyTime::Bosparanian(t) => t.stored(),
            AnyTime::Numeric(t) => t.stored(),
        }
    }

    /// Rebuild a persisted pair under a runtime tag.
    pub fn from_stored(kind: CalendarKind, day_count: i64, seconds_in_day: i64) -> Result<Self> {
        with_calendar!(kind, C => {
            TimeValue::<C>::from_stored(day_count, seconds_in_day).map(AnyTime::from)
        })
    }

    pub fn format(&self) -> String {
        with_calendar!(self.kind(), C => {
            TimeValue::<C>::try_from(*self).map(C::format_time).unwrap_or_default()
        })
    }

    pub fn checked_add(&self, delta: AnyDelta) -> Result<AnyTime> {
        with_calendar!(self.kind(), C => {
            let time: TimeValue<C> = (*self).try_into()?;
            let delta: TimeDelta<C> = delta.try_into()?;
            Ok(AnyTime::from(time + delta))
        })
    }

    pub fn checked_sub(&self, delta: AnyDelta) -> Result<AnyTime> {
        with_calendar!(self.kind(), C => {
            let time: TimeValue<C> = (*self).try_into()?;
            let delta: TimeDelta<C> = delta.try_into()?;
            Ok(AnyTime::from(time - delta))
        })
    }

    /// `self - other` as a duration.
    pub fn checked_diff(&self, other: AnyTime) -> Result<AnyDelta> {
        with_calendar!(self.kind(), C => {
            let time: TimeValue<C> = (*self).try_into()?;
            let other: TimeValue<C> = other.try_into()?;
            Ok(AnyDelta::from(time - other))
        })
    }

    /// Ordering of two times of the same calendar.
    pub fn checked_cmp(&self, other: AnyTime) -> Result<Ordering> {
        with_calendar!(self.kind(), C => {
            let time: TimeValue<C> = (*self).try_into()?;
            let other: TimeValue<C> = other.try_into()?;
            Ok(time.cmp(&other))
        })
    }

    pub fn is_weekend_day(&self) -> bool {
        with_calendar!(self.kind(), C => {
            TimeValue::<C>::try_from(*self).is_ok_and(C::is_weekend_day)
        })
    }

    pub fn is_special_day(&self) -> bool {
        with_calendar!(self.kind(), C => {
            TimeValue::<C>::try_from(*self).is_ok_and(C::is_special_day)
        })
    }
}

impl fmt::Display for AnyTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl AnyDelta {
    pub fn kind(&self) -> CalendarKind {
        match self {
            AnyDelta::Gregorian(_) => CalendarKind::Gregorian,
            AnyDelta::Coptic(_) => CalendarKind::Coptic,
            AnyDelta::Pharaonic(_) => CalendarKind::Pharaonic,
            AnyDelta::Bosparanian(_) => CalendarKind::Bosparanian,
            AnyDelta::Numeric(_) => CalendarKind::Numeric,
        }
    }

    pub fn format(&self, parts: &[DurationType]) -> String {
        with_calendar!(self.kind(), C => {
            TimeDelta::<C>::try_from(*self)
                .map(|delta| C::format_delta(delta, parts))
                .unwrap_or_default()
        })
    }

    pub fn checked_add(&self, other: AnyDelta) -> Result<AnyDelta> {
        with_calendar!(self.kind(), C => {
            let delta: TimeDelta<C> = (*self).try_into()?;
            let other: TimeDelta<C> = other.try_into()?;
            Ok(AnyDelta::from(delta + other))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Side;

    #[test]
    fn calendar_kind_from_str() {
        assert_eq!("gregorian".parse::<CalendarKind>(), Ok(CalendarKind::Gregorian));
        assert_eq!(" Bosparanian ".parse::<CalendarKind>(), Ok(CalendarKind::Bosparanian));
        assert!(matches!("julian".parse::<CalendarKind>(), Err(TimeError::Parse(_))));
        for kind in CalendarKind::ALL {
            assert_eq!(kind.to_string().parse::<CalendarKind>(), Ok(kind));
        }
    }

    #[test]
    fn parse_dispatches_on_kind() {
        let t = CalendarKind::Coptic.parse_time("1729-10-30").unwrap();
        assert_eq!(t.kind(), CalendarKind::Coptic);
        assert_eq!(t.format(), "1729-10-30 00:00:00");
        let n = CalendarKind::Numeric.parse_time("12").unwrap();
        assert_eq!(n.to_string(), "12");
    }

    #[test]
    fn adding_raw_number_to_gregorian_is_type_mismatch() {
        let t = CalendarKind::Gregorian.parse_time("2013-07-07").unwrap();
        assert_eq!(
            t.checked_add(AnyDelta::from(5)),
            Err(TimeError::TypeMismatch {
                expected: "Gregorian",
                found: "Numeric",
            })
        );
        let n = CalendarKind::Numeric.parse_time("12").unwrap();
        assert_eq!(n.checked_add(AnyDelta::from(5)).unwrap().to_string(), "17");
    }

    #[test]
    fn mixing_calendars_is_type_mismatch() {
        let g = AnyTime::from(TimeValue::<Gregorian>::from_ymd(2013, 7, 7).unwrap());
        let c = AnyTime::from(TimeValue::<Coptic>::from_ymd(1729, 10, 30).unwrap());
        assert!(matches!(g.checked_diff(c), Err(TimeError::TypeMismatch { .. })));
        assert!(matches!(g.checked_cmp(c), Err(TimeError::TypeMismatch { .. })));
        assert!(matches!(
            TimeValue::<Coptic>::try_from(g),
            Err(TimeError::TypeMismatch { expected: "Coptic", found: "Gregorian" })
        ));
        assert_eq!(TimeValue::<Coptic>::try_from(c).unwrap().stored(), g.stored());
    }

    #[test]
    fn same_calendar_arithmetic() {
        let a = CalendarKind::Gregorian.parse_time("2013-07-07").unwrap();
        let b = CalendarKind::Gregorian.parse_time("2013-07-08 06:00").unwrap();
        let delta = b.checked_diff(a).unwrap();
        assert_eq!(delta.format(DurationType::ALL), "1 day 6 hours");
        assert_eq!(a.checked_add(delta), Ok(b));
        assert_eq!(b.checked_sub(delta), Ok(a));
        assert_eq!(a.checked_cmp(b), Ok(Ordering::Less));
        assert!(a.is_weekend_day());
        assert!(!b.is_weekend_day());
        assert_eq!(delta.checked_add(delta).unwrap().format(&[DurationType::Hours]), "60 hours");
    }

    #[test]
    fn from_stored_checks_seconds() {
        let t = AnyTime::from_stored(CalendarKind::Bosparanian, 2_456_481, 3_600).unwrap();
        assert_eq!(t.format(), "1036-09-18 01:00:00");
        assert!(!t.is_special_day());
        assert!(AnyTime::from_stored(CalendarKind::Bosparanian, 2_456_478, 0)
            .unwrap()
            .is_special_day());
        assert!(matches!(
            AnyTime::from_stored(CalendarKind::Numeric, 3, 1),
            Err(TimeError::ValueMismatch(_))
        ));
    }

    #[test]
    fn from_stored_checks_the_range() {
        assert_eq!(
            AnyTime::from_stored(CalendarKind::Gregorian, i64::MAX / 2, 0),
            Err(TimeError::OutOfRange(Side::Right))
        );
        assert_eq!(
            AnyTime::from_stored(CalendarKind::Pharaonic, i64::MIN, 0),
            Err(TimeError::OutOfRange(Side::Left))
        );
        assert!(AnyTime::from_stored(CalendarKind::Coptic, 5_369_833, 0).is_ok());
    }

    #[test]
    fn bounds_per_kind() {
        assert_eq!(CalendarKind::Gregorian.min_time().stored(), (0, 0));
        assert_eq!(CalendarKind::Numeric.max_time().format(), "1000000000000000");
        assert_eq!(CalendarKind::Pharaonic.now().kind(), CalendarKind::Pharaonic);
    }
}
