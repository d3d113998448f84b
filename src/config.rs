// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Axis configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which weekday begins a week for the week strip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WeekStart {
    /// ISO 8601.
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    /// Monday-aligned weekday index of the first day of a week.
    pub const fn first_weekday(self) -> u8 {
        match self {
            WeekStart::Monday => 0,
            WeekStart::Sunday => 6,
        }
    }
}

/// Options read by strip selection and labelling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AxisConfig {
    pub week_start: WeekStart,
}

impl AxisConfig {
    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_monday() {
        assert_eq!(AxisConfig::default().week_start, WeekStart::Monday);
        assert_eq!(WeekStart::Monday.first_weekday(), 0);
        assert_eq!(WeekStart::Sunday.first_weekday(), 6);
        assert_eq!(
            AxisConfig::default().with_week_start(WeekStart::Sunday).week_start,
            WeekStart::Sunday
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_lowercase_week_start() {
        let config: AxisConfig = serde_json::from_str(r#"{"week_start":"sunday"}"#).unwrap();
        assert_eq!(config.week_start, WeekStart::Sunday);
        let config: AxisConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AxisConfig::default());
    }
}
