// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time periods: the visible window of an axis and the extent of events.

use crate::calendar::Calendar;
use crate::error::{Result, TimeError};
use crate::instant::{TimeDelta, TimeValue};
use crate::time_type::TimeType;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// A closed span `[start, end]` of one calendar, with `start <= end`.
///
/// # Examples
///
/// ```
/// use timestrip::{Gregorian, TimeDelta, TimePeriod, TimeValue};
///
/// let start = TimeValue::<Gregorian>::from_ymd(2013, 7, 1).unwrap();
/// let end = TimeValue::<Gregorian>::from_ymd(2013, 7, 8).unwrap();
/// let week = TimePeriod::new(start, end).unwrap();
///
/// assert_eq!(week.delta(), TimeDelta::from_days(7));
/// assert!(TimePeriod::new(end, start).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimePeriod<C: Calendar> {
    start: TimeValue<C>,
    end: TimeValue<C>,
}

impl<C: Calendar> TimePeriod<C> {
    /// Fails with [`TimeError::ValueMismatch`] when `end` precedes `start`.
    pub fn new(start: TimeValue<C>, end: TimeValue<C>) -> Result<Self> {
        if end < start {
            return Err(TimeError::ValueMismatch(format!(
                "{} period ends before it starts",
                C::LABEL
            )));
        }
        Ok(Self { start, end })
    }

    /// The period spanned by two instants in either order.
    pub fn between(a: TimeValue<C>, b: TimeValue<C>) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A zero-length period at `time`.
    pub fn point(time: TimeValue<C>) -> Self {
        Self {
            start: time,
            end: time,
        }
    }

    #[inline]
    pub const fn start(&self) -> TimeValue<C> {
        self.start
    }

    #[inline]
    pub const fn end(&self) -> TimeValue<C> {
        self.end
    }

    #[inline]
    pub fn delta(&self) -> TimeDelta<C> {
        self.end - self.start
    }

    pub fn center(&self) -> TimeValue<C> {
        self.start.mean(self.end)
    }

    pub fn is_zero_length(&self) -> bool {
        self.start == self.end
    }

    /// Whether `time` lies inside the closed period.
    pub fn contains(&self, time: TimeValue<C>) -> bool {
        self.start <= time && time <= self.end
    }

    /// Whether the half-open ranges `[start, end)` share any instant.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.intersection(other).is_some()
    }

    /// The span both periods cover, if it has a length.
    ///
    /// Unlike [`contains`](Self::contains) this reads each period as
    /// `[start, end)`, so periods that only touch at one instant share
    /// nothing.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then_some(Self { start, end })
    }

    /// Shift both ends by `delta` without range checks.
    pub fn move_by(&self, delta: TimeDelta<C>) -> Self {
        Self {
            start: self.start + delta,
            end: self.end + delta,
        }
    }
}

impl<C: TimeType> TimePeriod<C> {
    /// Fails with [`TimeError::OutOfRange`] naming the end that leaves the
    /// calendar's supported range.
    pub fn check_range(&self) -> Result<()> {
        C::check_range(self.start)?;
        C::check_range(self.end)?;
        Ok(())
    }

    /// Scroll by `delta`, refusing to leave the supported range.
    pub fn navigate(&self, delta: TimeDelta<C>) -> Result<Self> {
        let moved = self.move_by(delta);
        moved.check_range()?;
        Ok(moved)
    }

    /// Scale the length by `numerator / denominator` around the center.
    ///
    /// # Errors
    ///
    /// [`TimeError::ValueMismatch`] when the new length is outside the
    /// calendar's zoom limits or the factor is not positive, and
    /// [`TimeError::OutOfRange`] when an end leaves the supported range.
    pub fn zoom(&self, numerator: i64, denominator: i64) -> Result<Self> {
        if numerator <= 0 || denominator <= 0 {
            return Err(TimeError::ValueMismatch(format!(
                "zoom factor {numerator}/{denominator} is not positive"
            )));
        }
        let delta = self
            .delta()
            .checked_scale(numerator, denominator)
            .ok_or_else(|| {
                TimeError::ValueMismatch(format!(
                    "{} zoom by {numerator}/{denominator} overflows",
                    C::LABEL
                ))
            })?;
        if !C::zoom_is_ok(delta) {
            return Err(TimeError::ValueMismatch(format!(
                "{} zoom to {} outside [{}, {}]",
                C::LABEL,
                delta,
                C::min_zoom_delta(),
                C::max_zoom_delta()
            )));
        }
        let start = self.center() - delta / 2;
        let zoomed = Self {
            start,
            end: start + delta,
        };
        zoomed.check_range()?;
        Ok(zoomed)
    }
}

impl<C: TimeType> fmt::Display for TimePeriod<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[cfg(feature = "serde")]
impl<C: Calendar> Serialize for TimePeriod<C> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("TimePeriod", 2)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("end", &self.end)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, C: TimeType> Deserialize<'de> for TimePeriod<C> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(bound = "")]
        struct Raw<C: TimeType> {
            start: TimeValue<C>,
            end: TimeValue<C>,
        }

        let raw = Raw::<C>::deserialize(deserializer)?;
        TimePeriod::new(raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}
