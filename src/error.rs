// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for time engine operations.

use std::fmt;
use thiserror::Error;

/// Which end of a time type's supported range was exceeded.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    /// Before the earliest supported time.
    Left,
    /// After the latest supported time.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("before the earliest supported time"),
            Side::Right => f.write_str("after the latest supported time"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// Malformed date/time text.
    #[error("Invalid time text: {0}")]
    Parse(String),

    /// A time, zoom or navigation request outside the supported range.
    #[error("Time out of range: {0}")]
    OutOfRange(Side),

    /// Arithmetic or conversion mixing values of incompatible time types.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// An invalid calendar date or otherwise unacceptable value.
    #[error("Invalid value: {0}")]
    ValueMismatch(String),
}

impl TimeError {
    /// The exceeded side, if this is an out-of-range error.
    pub fn side(&self) -> Option<Side> {
        match self {
            TimeError::OutOfRange(side) => Some(*side),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TimeError>;
