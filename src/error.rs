// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Tsagalbar contributors

/// Result type for the validated entry points of the calendar.
pub type Result<T> = std::result::Result<T, CalendarError>;

/// Errors raised by the opt-in validation layer.
///
/// The numeric core never fails: an unconverged month search or a phase
/// bracket without a root is reported through
/// [`MonthSearch`](crate::MonthSearch) and [`PhaseSearch`](crate::PhaseSearch)
/// instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    #[error("invalid month: {0} (must be in [1, 12])")]
    InvalidMonth(u32),

    #[error("invalid day: {year:04}-{month:02}-{day:02} does not exist")]
    InvalidDay { year: i32, month: u32, day: u32 },

    #[error("year {year} outside the supported window [{min}, {max}]")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("{attribute} {value} out of range [{min}, {max}]")]
    AttributeOutOfRange {
        attribute: &'static str,
        value: u8,
        min: u8,
        max: u8,
    },

    #[error("invalid lunar day: {0} (must be in [1, 30])")]
    InvalidLunarDay(u32),

    #[error("Julian date {0} cannot be represented as a civil timestamp")]
    TimestampOutOfRange(f64),
}
