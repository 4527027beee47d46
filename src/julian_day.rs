// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Tsagalbar contributors

//! Integer Julian Day Numbers and proleptic Gregorian dates.
//!
//! The [`JulianDayNumber`] is the universal comparison key of the engine:
//! Gregorian dates are converted into it, lunar month boundaries are
//! expressed in it, and the cyclic day attributes are derived from it.
//!
//! # Preconditions
//!
//! [`gregorian_to_jdn`] performs **no validation**: a date such as
//! February 30 silently maps to the day number of March 1 or 2.  Callers that
//! accept untrusted input should go through [`GregorianDate::new`], which
//! rejects impossible dates through `chrono` without changing the numeric
//! result for valid ones.

use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, Result};
use crate::instant::{Time, TimeInstant};
use crate::scales::JD;

// ═══════════════════════════════════════════════════════════════════════════
// JulianDayNumber
// ═══════════════════════════════════════════════════════════════════════════

/// Integer count of days since the Julian Period epoch (4713 BC).
///
/// A day number names the civil day whose noon falls on the fractional
/// Julian Date of the same value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct JulianDayNumber(i64);

impl JulianDayNumber {
    /// Create a day number from its raw value.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// The raw day count.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Fractional Julian Date of this day's noon.
    #[inline]
    pub fn to_julian_date(self) -> Time<JD> {
        Time::<JD>::new(self.0 as f64)
    }

    /// Day number of the civil day containing `jd` (days start at midnight,
    /// i.e. at `JD − 0.5`).
    #[inline]
    pub fn containing(jd: Time<JD>) -> Self {
        Self((jd.value() + 0.5).floor() as i64)
    }

    /// Day of the week, with `JDN + 1 ≡ 0 (mod 7)` falling on Sunday.
    pub fn weekday(self) -> Weekday {
        match (self.0 + 1).rem_euclid(7) {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }

    /// The proleptic Gregorian date of this day number.
    #[inline]
    pub fn to_gregorian(self) -> GregorianDate {
        jdn_to_gregorian(self)
    }
}

impl fmt::Display for JulianDayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JDN {}", self.0)
    }
}

impl Add<i64> for JulianDayNumber {
    type Output = Self;
    #[inline]
    fn add(self, rhs: i64) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl Sub<i64> for JulianDayNumber {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: i64) -> Self::Output {
        Self(self.0 - rhs)
    }
}

impl Sub for JulianDayNumber {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

impl TimeInstant for JulianDayNumber {
    type Duration = i64;

    #[inline]
    fn difference(&self, other: &Self) -> Self::Duration {
        *self - *other
    }

    #[inline]
    fn add_duration(&self, duration: Self::Duration) -> Self {
        *self + duration
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// GregorianDate
// ═══════════════════════════════════════════════════════════════════════════

/// A proleptic Gregorian calendar date.
///
/// `year` is an astronomical year number: 1 BC is `0`, 2 BC is `-1`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GregorianDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl GregorianDate {
    /// Create a validated date.
    ///
    /// # Example
    ///
    /// ```
    /// use tsagalbar::GregorianDate;
    ///
    /// assert!(GregorianDate::new(2024, 2, 29).is_ok());
    /// assert!(GregorianDate::new(2023, 2, 29).is_err());
    /// ```
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        naive_date(year, month, day).map(Self::from)
    }

    /// Every day of the Gregorian month `(year, month)`, in order.
    ///
    /// ```
    /// use tsagalbar::GregorianDate;
    ///
    /// assert_eq!(GregorianDate::month_days(2024, 2).unwrap().count(), 29);
    /// assert!(GregorianDate::month_days(2024, 13).is_err());
    /// ```
    pub fn month_days(year: i32, month: u32) -> Result<impl Iterator<Item = GregorianDate>> {
        let first = naive_date(year, month, 1)?;
        Ok(first
            .iter_days()
            .take_while(move |date| date.month() == month)
            .map(Self::from))
    }

    /// Create a date without any range checks; the converters accept
    /// whatever integers they are given.
    #[inline]
    pub const fn new_unchecked(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Day number of this date.
    #[inline]
    pub fn jdn(&self) -> JulianDayNumber {
        gregorian_to_jdn(self.year, self.month, self.day)
    }

    /// The equivalent `chrono` date, if representable.
    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for GregorianDate {
    fn from(date: NaiveDate) -> Self {
        Self::new_unchecked(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Checked `chrono` date; years beyond chrono's range are refused.
fn naive_date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth(month));
    }
    let (min, max) = (NaiveDate::MIN.year(), NaiveDate::MAX.year());
    if !(min..=max).contains(&year) {
        return Err(CalendarError::YearOutOfRange { year, min, max });
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or(CalendarError::InvalidDay { year, month, day })
}

// ═══════════════════════════════════════════════════════════════════════════
// Conversions
// ═══════════════════════════════════════════════════════════════════════════

/// Gregorian `(year, month, day)` → Julian Day Number.
///
/// Uses floor division throughout so that years before 4800 BC still land
/// on the right day.  See the module docs for the (absent) validation.
///
/// # Example
///
/// ```
/// use tsagalbar::gregorian_to_jdn;
///
/// assert_eq!(gregorian_to_jdn(2000, 1, 1).value(), 2_451_545);
/// ```
pub fn gregorian_to_jdn(year: i32, month: u32, day: u32) -> JulianDayNumber {
    let (year, month, day) = (year as i64, month as i64, day as i64);
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    JulianDayNumber(
        day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
            + y.div_euclid(400)
            - 32045,
    )
}

/// Julian Day Number → Gregorian date; the exact inverse of
/// [`gregorian_to_jdn`] on valid dates.
///
/// # Example
///
/// ```
/// use tsagalbar::{jdn_to_gregorian, GregorianDate, JulianDayNumber};
///
/// let date = jdn_to_gregorian(JulianDayNumber::new(2_460_351));
/// assert_eq!(date, GregorianDate::new(2024, 2, 10).unwrap());
/// ```
pub fn jdn_to_gregorian(jdn: JulianDayNumber) -> GregorianDate {
    let a = jdn.0 + 32044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);
    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = 100 * b + d - 4800 + m.div_euclid(10);
    GregorianDate::new_unchecked(year as i32, month as u32, day as u32)
}

// ═══════════════════════════════════════════════════════════════════════════
// Validity window
// ═══════════════════════════════════════════════════════════════════════════

/// Opt-in guard on the range of years a caller is willing to answer for.
///
/// The engine's constants are tuned for dates within a few centuries of the
/// present; the window lets front ends refuse queries far outside it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidityWindow {
    pub min_year: i32,
    pub max_year: i32,
}

impl ValidityWindow {
    /// Window for daily lookups: ten years back, two years ahead.
    pub const fn daily(reference_year: i32) -> Self {
        Self {
            min_year: reference_year.saturating_sub(10),
            max_year: reference_year.saturating_add(2),
        }
    }

    /// Window for monthly views: ten years back, five years ahead.
    pub const fn monthly(reference_year: i32) -> Self {
        Self {
            min_year: reference_year.saturating_sub(10),
            max_year: reference_year.saturating_add(5),
        }
    }

    /// Window for new-year queries: fifty years back, ten years ahead.
    pub const fn new_year(reference_year: i32) -> Self {
        Self {
            min_year: reference_year.saturating_sub(50),
            max_year: reference_year.saturating_add(10),
        }
    }

    /// Accept `year` if it lies inside the window.
    pub fn check(&self, year: i32) -> Result<i32> {
        if (self.min_year..=self.max_year).contains(&year) {
            Ok(year)
        } else {
            Err(CalendarError::YearOutOfRange {
                year,
                min: self.min_year,
                max: self.max_year,
            })
        }
    }
}
