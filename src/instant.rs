// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar-parameterised instants and durations.
//!
//! [`TimeValue<C>`] is the core type of the engine.  It stores an integer
//! day count on the shared pivot plus the seconds elapsed in that day; the
//! compile-time marker `C: Calendar` decides how the pair is read as a date.
//! [`TimeDelta<C>`] is the matching signed duration.  Both are `Copy`,
//! integer-exact, and renormalise after every operation so that the seconds
//! component always stays in `[0, C::SECONDS_PER_DAY)`.
//!
//! Values of different calendars have different types, so mixing them is
//! rejected by the compiler.  The runtime counterpart lives in
//! [`dynamic`](crate::dynamic).

use crate::calendar::{weekday, Calendar, CalendarDate, DateCalendar, SECONDS_PER_DAY};
use crate::duration::DurationType;
use crate::error::{Result, TimeError};
use crate::time_type::TimeType;
use qtty::{Days, Seconds};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ═══════════════════════════════════════════════════════════════════════════
// TimeValue<C> — the instant
// ═══════════════════════════════════════════════════════════════════════════

/// A zone-naive instant in calendar `C`.
///
/// Ordering is the lexicographic order of `(day_count, seconds_in_day)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeValue<C: Calendar> {
    day_count: i64,
    seconds_in_day: i64,
    _calendar: PhantomData<C>,
}

impl<C: Calendar> TimeValue<C> {
    // ── constructors ──────────────────────────────────────────────────

    /// Create from a day count and a seconds offset.
    ///
    /// Seconds outside `[0, C::SECONDS_PER_DAY)` carry into the day count.
    #[inline]
    pub fn new(day_count: i64, seconds: i64) -> Self {
        Self {
            day_count: day_count + seconds.div_euclid(C::SECONDS_PER_DAY),
            seconds_in_day: seconds.rem_euclid(C::SECONDS_PER_DAY),
            _calendar: PhantomData,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn day_count(&self) -> i64 {
        self.day_count
    }

    #[inline]
    pub const fn seconds_in_day(&self) -> i64 {
        self.seconds_in_day
    }

    /// The calendar-agnostic pair written by persistence collaborators.
    #[inline]
    pub const fn stored(&self) -> (i64, i64) {
        (self.day_count, self.seconds_in_day)
    }

    /// Whether the time of day is exactly midnight.
    #[inline]
    pub const fn is_midnight(&self) -> bool {
        self.seconds_in_day == 0
    }

    /// Midnight of the same day.
    #[inline]
    pub fn floor_to_day(&self) -> Self {
        Self::new(self.day_count, 0)
    }

    // ── min / max ─────────────────────────────────────────────────────

    #[inline]
    pub fn min(self, other: Self) -> Self {
        Ord::min(self, other)
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        Ord::max(self, other)
    }

    /// Midpoint between two instants, rounded down to the second.
    pub fn mean(self, other: Self) -> Self {
        self + (other - self) / 2
    }
}

impl<C: DateCalendar> TimeValue<C> {
    /// Midnight of a calendar date.
    pub fn from_ymd(year: i64, month: u8, day: u8) -> Result<Self> {
        Ok(Self::new(C::to_day_count(year, month, day)?, 0))
    }

    /// A calendar date and time of day.
    pub fn from_ymd_hms(
        year: i64,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self> {
        Ok(CalendarDate::<C>::new(year, month, day, hour, minute, second)?.to_time())
    }

    /// Broken-down view of this instant.
    #[inline]
    pub fn date(&self) -> CalendarDate<C> {
        CalendarDate::from_time(*self)
    }

    /// Day of week, 0 = Monday … 6 = Sunday.
    #[inline]
    pub fn weekday(&self) -> u8 {
        weekday(self.day_count)
    }

    /// Re-read the same instant in another date calendar.
    ///
    /// The pivot is shared by every date calendar, so this never changes the
    /// stored pair.
    #[inline]
    pub fn to<D: DateCalendar>(&self) -> TimeValue<D> {
        TimeValue::new(self.day_count, self.seconds_in_day)
    }
}

impl<C: TimeType> TimeValue<C> {
    /// Rebuild a persisted `(day_count, seconds_in_day)` pair.
    ///
    /// Unlike [`TimeValue::new`] this does not carry: a seconds component
    /// outside the day fails with [`TimeError::ValueMismatch`], and a day
    /// count outside the calendar's range with [`TimeError::OutOfRange`].
    pub fn from_stored(day_count: i64, seconds_in_day: i64) -> Result<Self> {
        if !(0..C::SECONDS_PER_DAY).contains(&seconds_in_day) {
            return Err(TimeError::ValueMismatch(format!(
                "{} seconds in day {} outside [0, {})",
                C::LABEL,
                seconds_in_day,
                C::SECONDS_PER_DAY
            )));
        }
        C::check_range(Self::new(day_count, seconds_in_day))
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl<C: TimeType> fmt::Display for TimeValue<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&C::format_time(*self))
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<C: Calendar> Serialize for TimeValue<C> {
    fn serialize<Ser>(&self, serializer: Ser) -> std::result::Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        self.stored().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, C: TimeType> Deserialize<'de> for TimeValue<C> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (day_count, seconds_in_day) = <(i64, i64)>::deserialize(deserializer)?;
        Self::from_stored(day_count, seconds_in_day).map_err(serde::de::Error::custom)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TimeDelta<C> — the duration
// ═══════════════════════════════════════════════════════════════════════════

/// A signed duration in calendar `C`, normalised to `(days, seconds)` with
/// `0 ≤ seconds < C::SECONDS_PER_DAY`.
///
/// A negative duration therefore has negative `days` and non-negative
/// `seconds`: minus one second is `(-1, 86_399)`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeDelta<C: Calendar> {
    days: i64,
    seconds: i64,
    _calendar: PhantomData<C>,
}

impl<C: Calendar> TimeDelta<C> {
    /// Create from days and seconds, carrying overflow seconds into days.
    #[inline]
    pub fn new(days: i64, seconds: i64) -> Self {
        Self {
            days: days + seconds.div_euclid(C::SECONDS_PER_DAY),
            seconds: seconds.rem_euclid(C::SECONDS_PER_DAY),
            _calendar: PhantomData,
        }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(0, 0)
    }

    #[inline]
    pub fn from_days(days: i64) -> Self {
        Self::new(days, 0)
    }

    #[inline]
    pub fn from_seconds(seconds: i64) -> Self {
        Self::new(0, seconds)
    }

    #[inline]
    pub fn from_minutes(minutes: i64) -> Self {
        Self::new(0, minutes * 60)
    }

    #[inline]
    pub fn from_hours(hours: i64) -> Self {
        Self::new(0, hours * 3_600)
    }

    /// `None` when the day count does not fit in an `i64`.
    fn from_total_seconds(total: i128) -> Option<Self> {
        let per_day = i128::from(C::SECONDS_PER_DAY);
        Some(Self {
            days: i64::try_from(total.div_euclid(per_day)).ok()?,
            seconds: i64::try_from(total.rem_euclid(per_day)).ok()?,
            _calendar: PhantomData,
        })
    }

    /// The longest delta of the same sign as `total`.
    fn saturated(total: i128) -> Self {
        if total < 0 {
            Self::from_days(i64::MIN)
        } else {
            Self {
                days: i64::MAX,
                seconds: C::SECONDS_PER_DAY - 1,
                _calendar: PhantomData,
            }
        }
    }

    /// `self * numerator / denominator`, rounded down to the second.
    ///
    /// Exact on the total number of seconds; `None` for a zero denominator
    /// or a result that does not fit.
    pub fn checked_scale(self, numerator: i64, denominator: i64) -> Option<Self> {
        let scaled = self.total_seconds().checked_mul(i128::from(numerator))?;
        let total = scaled.checked_div_euclid(i128::from(denominator))?;
        Self::from_total_seconds(total)
    }

    pub fn checked_mul(self, rhs: i64) -> Option<Self> {
        self.checked_scale(rhs, 1)
    }

    /// `None` when dividing by zero.
    pub fn checked_div(self, rhs: i64) -> Option<Self> {
        self.checked_scale(1, rhs)
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn days(&self) -> i64 {
        self.days
    }

    #[inline]
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    /// The whole duration in seconds (in units for the numeric axis).
    #[inline]
    pub fn total_seconds(&self) -> i128 {
        i128::from(self.days) * i128::from(C::SECONDS_PER_DAY) + i128::from(self.seconds)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.seconds == 0
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.days < 0
    }

    pub fn abs(self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self
        }
    }

    /// How many times `other` fits into `self`, as a float.
    ///
    /// Used for pixel geometry only; all calendar arithmetic stays integral.
    pub fn ratio(&self, other: &Self) -> f64 {
        self.total_seconds() as f64 / other.total_seconds() as f64
    }
}

impl<C: DateCalendar> TimeDelta<C> {
    /// Approximate length in days.
    pub fn to_days(&self) -> Days {
        Days::new(self.total_seconds() as f64 / SECONDS_PER_DAY as f64)
    }

    /// Approximate length in seconds.
    pub fn to_seconds(&self) -> Seconds {
        Seconds::new(self.total_seconds() as f64)
    }
}

impl<C: TimeType> fmt::Display for TimeDelta<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&C::format_delta(*self, DurationType::ALL))
    }
}

#[cfg(feature = "serde")]
impl<C: Calendar> Serialize for TimeDelta<C> {
    fn serialize<Ser>(&self, serializer: Ser) -> std::result::Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        (self.days, self.seconds).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, C: Calendar> Deserialize<'de> for TimeDelta<C> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (days, seconds) = <(i64, i64)>::deserialize(deserializer)?;
        Ok(Self::new(days, seconds))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Arithmetic
// ═══════════════════════════════════════════════════════════════════════════

impl<C: Calendar> Add<TimeDelta<C>> for TimeValue<C> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: TimeDelta<C>) -> Self::Output {
        Self::new(self.day_count + rhs.days, self.seconds_in_day + rhs.seconds)
    }
}

impl<C: Calendar> AddAssign<TimeDelta<C>> for TimeValue<C> {
    #[inline]
    fn add_assign(&mut self, rhs: TimeDelta<C>) {
        *self = *self + rhs;
    }
}

impl<C: Calendar> Sub<TimeDelta<C>> for TimeValue<C> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: TimeDelta<C>) -> Self::Output {
        self + (-rhs)
    }
}

impl<C: Calendar> SubAssign<TimeDelta<C>> for TimeValue<C> {
    #[inline]
    fn sub_assign(&mut self, rhs: TimeDelta<C>) {
        *self = *self - rhs;
    }
}

impl<C: Calendar> Sub for TimeValue<C> {
    type Output = TimeDelta<C>;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        TimeDelta::new(
            self.day_count - rhs.day_count,
            self.seconds_in_day - rhs.seconds_in_day,
        )
    }
}

impl<C: Calendar> Add for TimeDelta<C> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.days + rhs.days, self.seconds + rhs.seconds)
    }
}

impl<C: Calendar> AddAssign for TimeDelta<C> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<C: Calendar> Sub for TimeDelta<C> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.days - rhs.days, self.seconds - rhs.seconds)
    }
}

impl<C: Calendar> SubAssign for TimeDelta<C> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<C: Calendar> Neg for TimeDelta<C> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.days, -self.seconds)
    }
}

/// Saturates at the longest representable delta of the result's sign; use
/// [`TimeDelta::checked_mul`] to detect overflow.
impl<C: Calendar> Mul<i64> for TimeDelta<C> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i64) -> Self::Output {
        self.checked_mul(rhs).unwrap_or_else(|| {
            let negative = self.is_negative() != (rhs < 0);
            Self::saturated(if negative { -1 } else { 1 })
        })
    }
}

/// Floor division on the total number of seconds.
///
/// # Panics
///
/// Panics when dividing by zero.
impl<C: Calendar> Div<i64> for TimeDelta<C> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: i64) -> Self::Output {
        let total = self.total_seconds().div_euclid(i128::from(rhs));
        Self::from_total_seconds(total).unwrap_or_else(|| Self::saturated(total))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
