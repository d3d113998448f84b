// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Multi-calendar time engine for a zoomable timeline.
//!
//! All calendars share one integer pivot, the Julian Day Number, plus a
//! seconds-in-day component.  Converting between calendars is therefore
//! exact and never changes the stored value; only the reading changes.
//!
//! # Core types
//!
//! - [`TimeValue<C>`]: an instant parameterised by a [`Calendar`] marker.
//! - [`TimeDelta<C>`]: the matching signed duration.
//! - [`TimePeriod<C>`]: a closed span, the visible window of an axis.
//! - [`TimeType`]: per-calendar parsing, formatting, range, day
//!   classification, zoom limits and strip choice.
//! - [`Strip`] / [`DateStrip`] / [`NumericStrip`]: the units an axis is
//!   divided into.
//! - [`Axis`]: walks the chosen strips across a pixel width.
//! - [`AnyTime`] / [`AnyDelta`]: runtime-tagged values for callers that
//!   read the calendar from data.
//!
//! # Calendars
//!
//! | Marker | Months | Leap rule | Weekend | Special days |
//! |--------|--------|-----------|---------|--------------|
//! | [`Gregorian`] | 12 | 4/100/400 | Sat, Sun | none |
//! | [`Coptic`] | 12 × 30 + 5/6 | `year mod 4 == 3` | Psabbaton, Tkyriake | none |
//! | [`Pharaonic`] | 12 × 30 + 5/6 | `year mod 4 == 0` | days 10, 20, 30 | epagomenal days |
//! | [`Bosparanian`] | 12 × 30 + 5 | none | none | Praiostag |
//! | [`Numeric`] | n/a | n/a | none | none |
//!
//! Years ≤ 0 are labelled `BC` as `1 - year` (year 0 is `1 BC`).
//!
//! # Example
//!
//! ```
//! use timestrip::{Coptic, Gregorian, TimeType, TimeValue};
//!
//! let t = Gregorian::parse_time("2013-07-07 08:00").unwrap();
//! let coptic: TimeValue<Coptic> = t.to::<Coptic>();
//! assert_eq!(Coptic::format_time(coptic), "1729-10-30 08:00:00");
//! assert!(Gregorian::is_weekend_day(t));
//! ```

pub mod axis;
mod bosparanian;
pub mod calendar;
mod config;
mod coptic;
mod duration;
pub mod dynamic;
mod epagomenal;
mod error;
mod gregorian;
pub(crate) mod instant;
mod numeric;
mod period;
mod pharaonic;
pub mod strip;
pub mod time_type;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use axis::{walk, Axis, StripWalk, Tick};
pub use bosparanian::Bosparanian;
pub use calendar::{format_year, weekday, Calendar, CalendarDate, DateCalendar};
pub use config::{AxisConfig, WeekStart};
pub use coptic::Coptic;
pub use duration::{DurationFormatter, DurationType};
pub use dynamic::{AnyDelta, AnyTime, CalendarKind};
pub use error::{Result, Side, TimeError};
pub use gregorian::Gregorian;
pub use instant::{TimeDelta, TimeValue};
pub use numeric::{Numeric, NumericStrip};
pub use period::TimePeriod;
pub use pharaonic::Pharaonic;
pub use strip::{DateStrip, Strip, StripKind, StripPair};
pub use time_type::TimeType;
