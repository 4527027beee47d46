// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Tsagalbar contributors

//! Lunar months and the Gregorian → lunar month resolver.
//!
//! A [`LunarMonth`] spans the civil days from the day after its predecessor's
//! 30th lunar day up to and including its own 30th lunar day.  The resolver
//! starts from the lunar month with the same year and number as the
//! Gregorian date, which is never more than a few months ahead of it, and
//! steps backwards until the span contains the date.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;
use crate::ephemeris::{is_leap_month, lunar_julian_day};
use crate::julian_day::{gregorian_to_jdn, JulianDayNumber};
use crate::period::DaySpan;

/// Number of lunar days in every month, including skipped ones.
pub const LUNAR_DAYS: u32 = 30;

// ═══════════════════════════════════════════════════════════════════════════
// LunarMonth
// ═══════════════════════════════════════════════════════════════════════════

/// One month of the lunisolar calendar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LunarMonth {
    /// Lunar year; it starts on Tsagaan Sar of the Gregorian year of the
    /// same number.
    pub year: i32,
    /// Month number, 1..=12.
    pub month: u32,
    /// `true` for the inserted copy of a doubled month.
    pub is_leap: bool,
}

impl LunarMonth {
    /// The regular (non-inserted) month `month` of `year`.
    #[inline]
    pub const fn regular(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            is_leap: false,
        }
    }

    /// The inserted copy of month `month` of `year`.
    ///
    /// Only meaningful when [`is_leap_month`] holds for `(year, month)`.
    #[inline]
    pub const fn leap(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            is_leap: true,
        }
    }

    /// Whether this month number is doubled in its year.
    #[inline]
    pub fn is_doubled(&self) -> bool {
        is_leap_month(self.year, self.month)
    }

    /// The chronologically preceding lunar month.
    ///
    /// In a doubled month the inserted copy comes first, so the regular
    /// month is preceded by its copy and the copy by the previous number.
    /// The year saturates at `i32::MIN`.
    pub fn previous(&self) -> Self {
        if self.is_doubled() && !self.is_leap {
            return Self::leap(self.year, self.month);
        }
        if self.month <= 1 {
            Self::regular(self.year.saturating_sub(1), 12)
        } else {
            Self::regular(self.year, self.month - 1)
        }
    }

    /// The chronologically following lunar month; the year saturates at
    /// `i32::MAX`.
    pub fn next(&self) -> Self {
        if self.is_leap {
            return Self::regular(self.year, self.month);
        }
        let (year, month) = if self.month == 12 {
            (self.year.saturating_add(1), 1)
        } else {
            (self.year, self.month + 1)
        };
        if is_leap_month(year, month) {
            Self::leap(year, month)
        } else {
            Self::regular(year, month)
        }
    }

    /// Civil day on which lunar day `day` of this month ends.
    #[inline]
    pub fn julian_day(&self, day: u32) -> JulianDayNumber {
        lunar_julian_day(*self, day)
    }

    /// First civil day of the month.
    #[inline]
    pub fn first_day(&self) -> JulianDayNumber {
        self.previous().last_day() + 1
    }

    /// Last civil day of the month: the day its 30th lunar day ends.
    #[inline]
    pub fn last_day(&self) -> JulianDayNumber {
        self.julian_day(LUNAR_DAYS)
    }

    /// Every civil day of the month.
    pub fn span(&self) -> DaySpan {
        DaySpan::new(self.first_day(), self.last_day())
    }

    /// Lunar day (1..=30) running on civil day `jdn`.
    ///
    /// When two lunar days end on the same civil day, that day carries the
    /// first of the two numbers and the second is skipped.  A day number
    /// outside the month yields `1`.
    pub fn day_of(&self, jdn: JulianDayNumber) -> u32 {
        (1..=LUNAR_DAYS)
            .find(|&d| jdn <= self.julian_day(d))
            .unwrap_or(1)
    }
}

impl fmt::Display for LunarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)?;
        if self.is_leap {
            write!(f, " (leap)")?;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Resolver
// ═══════════════════════════════════════════════════════════════════════════

/// Outcome of the bounded backward month search.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MonthSearch {
    /// The month whose span contains the target day.
    Found {
        month: LunarMonth,
        span: DaySpan,
        steps: u32,
    },
    /// The step limit ran out; `last` is the final candidate examined and is
    /// only a degraded approximation.
    Exhausted { last: LunarMonth, steps: u32 },
}

impl MonthSearch {
    /// The resolved month, or the best-effort candidate if the search ran out.
    pub fn month(&self) -> LunarMonth {
        match *self {
            MonthSearch::Found { month, .. } => month,
            MonthSearch::Exhausted { last, .. } => last,
        }
    }

    /// Whether the search actually found the enclosing month.
    pub fn is_found(&self) -> bool {
        matches!(self, MonthSearch::Found { .. })
    }

    /// Candidate months examined.
    pub fn steps(&self) -> u32 {
        match *self {
            MonthSearch::Found { steps, .. } | MonthSearch::Exhausted { steps, .. } => steps,
        }
    }
}

/// Lunar month enclosing the Gregorian date `(year, month, day)`.
///
/// # Example
///
/// ```
/// use tsagalbar::{resolve_lunar_month, LunarMonth};
///
/// // Tsagaan Sar 2024.
/// let search = resolve_lunar_month(2024, 2, 10);
/// assert_eq!(search.month(), LunarMonth::regular(2024, 1));
/// assert!(search.is_found());
/// ```
pub fn resolve_lunar_month(year: i32, month: u32, day: u32) -> MonthSearch {
    resolve_lunar_month_with(year, month, day, &SearchConfig::default())
}

/// [`resolve_lunar_month`] with explicit limits.
pub fn resolve_lunar_month_with(
    year: i32,
    month: u32,
    day: u32,
    config: &SearchConfig,
) -> MonthSearch {
    let target = gregorian_to_jdn(year, month, day);
    search_backwards(
        LunarMonth::regular(year, month),
        target,
        config.max_month_steps,
    )
}

/// Walk back from `candidate` until a month's span contains `target`,
/// examining at most `max_steps` months.
pub(crate) fn search_backwards(
    mut candidate: LunarMonth,
    target: JulianDayNumber,
    max_steps: u32,
) -> MonthSearch {
    let mut last = candidate;
    for step in 0..max_steps {
        let span = candidate.span();
        tracing::debug!(%candidate, %span, %target, step, "examining lunar month");
        if span.contains(target) {
            return MonthSearch::Found {
                month: candidate,
                span,
                steps: step + 1,
            };
        }
        last = candidate;
        candidate = candidate.previous();
    }
    tracing::warn!(
        %target,
        %last,
        max_steps,
        "lunar month search exhausted; returning last candidate"
    );
    MonthSearch::Exhausted {
        last,
        steps: max_steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian_day::jdn_to_gregorian;

    #[test]
    fn previous_handles_doubled_months() {
        // 2024 doubles its twelfth month.
        let regular = LunarMonth::regular(2024, 12);
        let leap = LunarMonth::leap(2024, 12);
        assert_eq!(regular.previous(), leap);
        assert_eq!(leap.previous(), LunarMonth::regular(2024, 11));
        assert_eq!(
            LunarMonth::regular(2025, 1).previous(),
            LunarMonth::regular(2024, 12)
        );
        assert_eq!(
            LunarMonth::regular(2024, 1).previous(),
            LunarMonth::regular(2023, 12)
        );
    }

    #[test]
    fn neighbours_saturate_at_the_year_limits() {
        let first = LunarMonth::regular(i32::MIN, 1);
        assert_eq!(first.previous().year, i32::MIN);
        assert_eq!(first.previous().month, 12);
        let last = LunarMonth::regular(i32::MAX, 12);
        assert_eq!(last.next().year, i32::MAX);
        assert_eq!(last.next().month, 1);
        let _ = first.span();
        assert!(!search_backwards(first, JulianDayNumber::new(0), 3).is_found());
    }

    #[test]
    fn next_inverts_previous() {
        let mut month = LunarMonth::regular(2019, 1);
        for _ in 0..200 {
            let next = month.next();
            assert_eq!(next.previous(), month, "{month} -> {next}");
            month = next;
        }
    }

    #[test]
    fn spans_tile_the_day_axis() {
        let mut month = LunarMonth::regular(1900, 1);
        for _ in 0..3000 {
            let next = month.next();
            let (a, b) = (month.span(), next.span());
            assert!(a.is_followed_by(&b), "{month}: {a} / {next}: {b}");
            assert!((29..=30).contains(&a.len()), "{month} has {} days", a.len());
            month = next;
        }
    }

    #[test]
    fn doubled_month_copy_and_regular_are_adjacent() {
        for year in 1800..=2200 {
            for m in 1..=12 {
                if is_leap_month(year, m) {
                    let leap = LunarMonth::leap(year, m).span();
                    let regular = LunarMonth::regular(year, m).span();
                    assert!(leap.is_followed_by(&regular), "{year}-{m}");
                }
            }
        }
    }

    #[test]
    fn resolves_tsagaan_sar_2024() {
        let search = resolve_lunar_month(2024, 2, 10);
        assert_eq!(search.month(), LunarMonth::regular(2024, 1));
        assert_eq!(search.steps(), 2);
        let eve = resolve_lunar_month(2024, 2, 9);
        assert_eq!(eve.month(), LunarMonth::regular(2023, 12));
    }

    #[test]
    fn resolves_every_day_of_two_centuries() {
        let start = gregorian_to_jdn(1900, 1, 1).value();
        let end = gregorian_to_jdn(2100, 12, 31).value();
        for j in start..=end {
            let jdn = JulianDayNumber::new(j);
            let g = jdn_to_gregorian(jdn);
            let search = resolve_lunar_month(g.year, g.month, g.day);
            match search {
                MonthSearch::Found { month, span, steps } => {
                    assert!(span.contains(jdn));
                    assert!(steps <= 4);
                    let before = month.previous().span();
                    assert!(before.is_followed_by(&span));
                    assert!(before.intersection(&span).is_none());
                }
                MonthSearch::Exhausted { .. } => panic!("{g} not resolved"),
            }
        }
    }

    #[test]
    fn exhausted_search_returns_last_candidate() {
        let target = gregorian_to_jdn(2000, 6, 1);
        let search = search_backwards(LunarMonth::regular(2030, 1), target, 5);
        assert!(!search.is_found());
        assert_eq!(search.steps(), 5);
        let mut expected = LunarMonth::regular(2030, 1);
        for _ in 0..4 {
            expected = expected.previous();
        }
        assert_eq!(search.month(), expected);
    }

    #[test]
    fn configured_limit_is_honoured() {
        let config = SearchConfig {
            max_month_steps: 1,
            ..SearchConfig::default()
        };
        // The matching month is the second candidate, so one step is not enough.
        let search = resolve_lunar_month_with(2024, 2, 10, &config);
        assert!(matches!(search, MonthSearch::Exhausted { steps: 1, .. }));
        assert_eq!(search.month(), LunarMonth::regular(2024, 2));
    }

    #[test]
    fn day_of_month() {
        let month = LunarMonth::regular(2024, 1);
        assert_eq!(month.day_of(gregorian_to_jdn(2024, 2, 10)), 1);
        assert_eq!(month.day_of(gregorian_to_jdn(2024, 3, 1)), 21);
        assert_eq!(month.day_of(month.last_day()), 30);
    }

    #[test]
    fn display() {
        assert_eq!(LunarMonth::leap(2024, 12).to_string(), "2024-12 (leap)");
        assert_eq!(LunarMonth::regular(2025, 1).to_string(), "2025-01");
    }
}
