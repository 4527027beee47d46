// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Tsagalbar contributors

//! Closed intervals between two instants.
//!
//! This module provides:
//! - [`Interval<T>`]: generic interval over any [`TimeInstant`]
//! - [`Period<S>`]: scale-based alias for `Interval<Time<S>>`, used for
//!   new-moon search brackets
//! - [`DaySpan`]: alias for `Interval<JulianDayNumber>`, used for the first
//!   and last civil day of a lunar month
//!
//! Unlike a half-open range, both endpoints belong to the interval: a lunar
//! month's span names its first *and* its last day.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::instant::{Time, TimeInstant, TimeScale};
use crate::julian_day::JulianDayNumber;
use qtty::Days;

/// Represents the closed interval `[start, end]` between two instants.
///
/// # Examples
///
/// ```
/// use tsagalbar::{DaySpan, JulianDayNumber};
///
/// let span = DaySpan::new(JulianDayNumber::new(2_460_351), JulianDayNumber::new(2_460_380));
/// assert_eq!(span.len(), 30);
/// assert!(span.contains(JulianDayNumber::new(2_460_380)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval<T: TimeInstant> {
    pub start: T,
    pub end: T,
}

/// Time-scale period alias.
pub type Period<S> = Interval<Time<S>>;

/// Inclusive span of civil days.
pub type DaySpan = Interval<JulianDayNumber>;

impl<T: TimeInstant> Interval<T> {
    /// Creates a new interval between two instants.
    pub fn new(start: T, end: T) -> Self {
        Interval { start, end }
    }

    /// Returns the difference between end and start.
    pub fn duration(&self) -> T::Duration {
        self.end.difference(&self.start)
    }

    /// Whether `instant` lies within `[start, end]`.
    pub fn contains(&self, instant: T) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// An interval whose end precedes its start contains nothing.
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Returns the overlapping sub-interval between `self` and `other`.
    ///
    /// Both endpoints are inclusive, so two intervals sharing a single
    /// endpoint intersect in that instant.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let start = if self.start >= other.start {
            self.start
        } else {
            other.start
        };
        let end = if self.end <= other.end {
            self.end
        } else {
            other.end
        };

        if start <= end {
            Some(Self::new(start, end))
        } else {
            None
        }
    }
}

impl<T: TimeInstant + fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

impl Interval<JulianDayNumber> {
    /// Number of civil days in the span, endpoints included.
    pub fn len(&self) -> i64 {
        self.duration() + 1
    }

    /// Whether `next` starts on the day right after this span ends, with no
    /// gap and no overlap.
    pub fn is_followed_by(&self, next: &Self) -> bool {
        next.start == self.end + 1
    }
}

impl<S: TimeScale> Interval<Time<S>> {
    /// Returns the width of the period in days.
    pub fn duration_days(&self) -> Days {
        self.end - self.start
    }

    /// Convert this period to another day counter.
    pub fn to<T: TimeScale>(&self) -> Interval<Time<T>> {
        Interval::new(self.start.to::<T>(), self.end.to::<T>())
    }

    /// Symmetric window of `half_width` on each side of `center`.
    pub fn around(center: Time<S>, half_width: Days) -> Self {
        Interval::new(center - half_width, center + half_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scales::{Jd2000, JD};

    fn span(a: i64, b: i64) -> DaySpan {
        DaySpan::new(JulianDayNumber::new(a), JulianDayNumber::new(b))
    }

    #[test]
    fn test_day_span_len_and_contains() {
        let s = span(10, 39);
        assert_eq!(s.len(), 30);
        assert!(s.contains(JulianDayNumber::new(10)));
        assert!(s.contains(JulianDayNumber::new(39)));
        assert!(!s.contains(JulianDayNumber::new(40)));
        assert!(!s.contains(JulianDayNumber::new(9)));
    }

    #[test]
    fn test_followed_by() {
        assert!(span(10, 39).is_followed_by(&span(40, 68)));
        assert!(!span(10, 39).is_followed_by(&span(39, 68)));
        assert!(!span(10, 39).is_followed_by(&span(41, 68)));
    }

    #[test]
    fn test_intersection_is_inclusive() {
        assert_eq!(span(10, 39).intersection(&span(39, 60)), Some(span(39, 39)));
        assert_eq!(span(10, 39).intersection(&span(40, 60)), None);
        assert_eq!(span(10, 39).intersection(&span(20, 30)), Some(span(20, 30)));
    }

    #[test]
    fn test_empty() {
        assert!(span(10, 9).is_empty());
        assert!(!span(10, 10).is_empty());
    }

    #[test]
    fn test_period_around_and_convert() {
        let center = Time::<JD>::new(2_460_736.0);
        let p = Period::around(center, Days::new(3.0));
        assert_eq!(p.duration_days(), Days::new(6.0));
        assert!(p.contains(center));
        let n = p.to::<Jd2000>();
        assert!((n.start.value() - 9_188.0).abs() < 1e-9);
        assert!((n.end.value() - 9_194.0).abs() < 1e-9);
    }

    #[test]
    fn test_display() {
        assert_eq!(span(1, 2).to_string(), "JDN 1 to JDN 2");
    }
}
