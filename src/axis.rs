// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Walking strips across a visible period and mapping times to pixels.

use crate::calendar::Calendar;
use crate::config::AxisConfig;
use crate::error::{Result, TimeError};
use crate::instant::{TimeDelta, TimeValue};
use crate::period::TimePeriod;
use crate::strip::{Strip, StripPair};
use crate::time_type::TimeType;

/// A labelled unit boundary on the axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick<C: Calendar> {
    pub time: TimeValue<C>,
    pub label: String,
}

/// Iterator over the unit starts of a strip, from the unit containing the
/// period start up to the period end.
#[derive(Debug)]
pub struct StripWalk<'a, C: Calendar> {
    strip: &'a dyn Strip<C>,
    next: Option<TimeValue<C>>,
    end: TimeValue<C>,
}

impl<'a, C: Calendar> StripWalk<'a, C> {
    fn unchecked(strip: &'a dyn Strip<C>, period: &TimePeriod<C>) -> Self {
        Self {
            strip,
            next: Some(strip.start(period.start())),
            end: period.end(),
        }
    }
}

impl<C: Calendar> Iterator for StripWalk<'_, C> {
    type Item = TimeValue<C>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|t| *t <= self.end)?;
        let following = self.strip.increment(current);
        if following <= current {
            log::debug!("{} strip {:?} did not advance past {:?}", C::LABEL, self.strip, current);
            self.next = None;
        } else {
            self.next = Some(following);
        }
        Some(current)
    }
}

/// Unit starts of `strip` covering `period`.
///
/// The first item may precede the period start (it is the start of the unit
/// the period begins in).
///
/// # Errors
///
/// [`TimeError::ValueMismatch`] for a zero-length period.
pub fn walk<'a, C: Calendar>(
    strip: &'a dyn Strip<C>,
    period: &TimePeriod<C>,
) -> Result<StripWalk<'a, C>> {
    if period.is_zero_length() {
        return Err(TimeError::ValueMismatch(format!(
            "cannot walk a zero-length {} period",
            C::LABEL
        )));
    }
    Ok(StripWalk::unchecked(strip, period))
}

/// A visible period laid across a pixel width, with the strips chosen for
/// that zoom level.
///
/// ```
/// use timestrip::{Axis, AxisConfig, Gregorian, TimePeriod, TimeValue};
///
/// let period = TimePeriod::new(
///     TimeValue::<Gregorian>::from_ymd(2013, 7, 1).unwrap(),
///     TimeValue::<Gregorian>::from_ymd(2013, 8, 1).unwrap(),
/// )
/// .unwrap();
/// let axis = Axis::new(period, 1_000.0, &AxisConfig::default()).unwrap();
/// let labels: Vec<_> = axis.major_ticks().into_iter().map(|t| t.label).collect();
/// assert_eq!(labels, ["Jul 2013", "Aug 2013"]);
/// assert_eq!(axis.x_for(period.start()), 0.0);
/// ```
#[derive(Debug)]
pub struct Axis<C: TimeType> {
    period: TimePeriod<C>,
    width_px: f64,
    strips: StripPair<C>,
}

impl<C: TimeType> Axis<C> {
    /// # Errors
    ///
    /// [`TimeError::ValueMismatch`] for a zero-length period or a width that
    /// is not a positive finite number.
    pub fn new(period: TimePeriod<C>, width_px: f64, config: &AxisConfig) -> Result<Self> {
        if period.is_zero_length() {
            return Err(TimeError::ValueMismatch(format!(
                "cannot draw a zero-length {} period",
                C::LABEL
            )));
        }
        if !(width_px.is_finite() && width_px > 0.0) {
            return Err(TimeError::ValueMismatch(format!(
                "axis width {width_px} is not positive"
            )));
        }
        let strips = C::choose_strips(&period, width_px, config);
        Ok(Self {
            period,
            width_px,
            strips,
        })
    }

    pub fn period(&self) -> &TimePeriod<C> {
        &self.period
    }

    pub fn width(&self) -> f64 {
        self.width_px
    }

    pub fn major_strip(&self) -> &dyn Strip<C> {
        &*self.strips.major
    }

    pub fn minor_strip(&self) -> &dyn Strip<C> {
        &*self.strips.minor
    }

    pub fn major_ticks(&self) -> Vec<Tick<C>> {
        self.ticks(self.major_strip(), true)
    }

    pub fn minor_ticks(&self) -> Vec<Tick<C>> {
        self.ticks(self.minor_strip(), false)
    }

    fn ticks(&self, strip: &dyn Strip<C>, major: bool) -> Vec<Tick<C>> {
        let ticks: Vec<_> = StripWalk::unchecked(strip, &self.period)
            .map(|time| Tick {
                time,
                label: strip.label(time, major),
            })
            .collect();
        log::trace!(
            "{} axis: {} {} ticks",
            C::LABEL,
            ticks.len(),
            if major { "major" } else { "minor" }
        );
        ticks
    }

    /// Horizontal pixel position of `time`; may fall outside `0..=width`.
    pub fn x_for(&self, time: TimeValue<C>) -> f64 {
        (time - self.period.start()).ratio(&self.period.delta()) * self.width_px
    }

    /// The time under pixel `x`, rounded to the nearest second.
    pub fn time_at(&self, x: f64) -> TimeValue<C> {
        let total = self.period.delta().total_seconds() as f64;
        let offset = (total * x / self.width_px).round() as i64;
        self.period.start() + TimeDelta::from_seconds(offset)
    }
}
