// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Tsagalbar contributors

//! # True-date ephemeris of the Mongolian lunisolar calendar
//!
//! The calendar is not defined by a physical ephemeris but by a fixed
//! arithmetic recipe in the Phugpa/Kalachakra tradition:
//!
//! 1. a lunar month `(Y, M, leap)` is mapped to its **true month** index `n`,
//!    the number of lunations since the epoch year, via a rational
//!    `67/65` interpolation whose rounding is steered by the leap flag;
//! 2. the **true date** of lunar day `d` in month `n` is the mean date plus
//!    the moon equation minus the sun equation, both read from small
//!    piecewise-linear tables;
//! 3. the civil day on which lunar day `d` ends is `floor(true date)`.
//!
//! Every constant below is part of the calendar's definition; changing any
//! of them produces a different calendar.
//!
//! ## Leap months
//!
//! [`is_leap_month`] marks the month number that occurs twice in a year.
//! The duplicated month comes **first**: `(Y, M, leap = true)` immediately
//! precedes `(Y, M, leap = false)`.

use crate::julian_day::JulianDayNumber;
use crate::lunar_month::LunarMonth;

// ═══════════════════════════════════════════════════════════════════════════
// Calendar constants
// ═══════════════════════════════════════════════════════════════════════════

/// Epoch year of the month count.
pub const EPOCH_YEAR: i64 = 1747;

/// Month offset of the epoch inside its year.
pub const MONTH_OFFSET: i64 = 3;

/// Rounding threshold of the true-month interpolation.
pub const IX_THRESHOLD: i64 = 46;

/// Constant term of the true-month interpolation.
pub const BETA_STAR: i64 = 10;

/// Phase of the leap-month congruence.
pub const BETA: i64 = 172;

/// Period of the leap-month congruence and of the true-month interpolation.
const PERIOD: i64 = 65;

/// Mean-date coefficients: `m0 + n·m1 + d·m2`.
const M0: f64 = 2_359_237.0 + 2603.0 / 2828.0;
const M1: f64 = 167_025.0 / 5656.0;
const M2: f64 = 11_135.0 / 11_312.0;

/// Mean-sun coefficients: `s0 + n·s1 + d·s2` (in revolutions).
const S0: f64 = 397.0 / 402.0;
const S1: f64 = 65.0 / 804.0;
const S2: f64 = 13.0 / 4824.0;

/// Moon-anomaly coefficients: `a0 + n·a1 + d·a2` (in revolutions).
const A0: f64 = 1523.0 / 1764.0;
const A1: f64 = 253.0 / 3528.0;
const A2: f64 = 1.0 / 28.0;

/// Quarter-period of the moon equation, sampled at 28 steps per revolution.
const MOON_TABLE: [f64; 8] = [0.0, 5.0, 10.0, 15.0, 19.0, 22.0, 24.0, 25.0];

/// Quarter-period of the sun equation, sampled at 12 steps per revolution.
const SUN_TABLE: [f64; 4] = [0.0, 6.0, 10.0, 11.0];

// ═══════════════════════════════════════════════════════════════════════════
// Month indexing
// ═══════════════════════════════════════════════════════════════════════════

/// Whether month `month` of lunar year `year` is doubled by a leap month.
///
/// This is a pure congruence, `24(Y − 1747) + 2M − 172 ≡ 0 or 1 (mod 65)`,
/// and it holds for at most one month of any year.
///
/// # Example
///
/// ```
/// use tsagalbar::is_leap_month;
///
/// assert!(is_leap_month(2024, 12));
/// assert!(!is_leap_month(2025, 12));
/// ```
pub fn is_leap_month(year: i32, month: u32) -> bool {
    let t = (24 * (year as i64 - EPOCH_YEAR) + 2 * month as i64 - BETA).rem_euclid(PERIOD);
    t == 0 || t == 1
}

/// Linear month count `12(Y − 1747) + M − 3`.
#[inline]
pub(crate) fn month_count(year: i32, month: u32) -> i64 {
    12 * (year as i64 - EPOCH_YEAR) + month as i64 - MONTH_OFFSET
}

/// True-month index `n` of a lunar month.
///
/// `n` is `(67·M* + β*) / 65` rounded down when the residue is below the
/// threshold or when the month is the leap copy, and rounded up otherwise.
pub fn true_month(month: LunarMonth) -> i64 {
    let p = 67 * month_count(month.year, month.month) + BETA_STAR;
    let ix = p.rem_euclid(PERIOD);
    let floor = (p - ix) / PERIOD;
    if month.is_leap || ix < IX_THRESHOLD {
        floor
    } else {
        floor + 1
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// True date
// ═══════════════════════════════════════════════════════════════════════════

/// Mean date of lunar day `day` in true month `n`.
#[inline]
pub fn mean_date(day: u32, n: i64) -> f64 {
    n as f64 * M1 + day as f64 * M2 + M0
}

/// Mean sun, in revolutions.
#[inline]
pub fn mean_sun(day: u32, n: i64) -> f64 {
    n as f64 * S1 + day as f64 * S2 + S0
}

/// Moon anomaly, in revolutions.
#[inline]
pub fn anomaly_moon(day: u32, n: i64) -> f64 {
    n as f64 * A1 + day as f64 * A2 + A0
}

/// Sun anomaly: the mean sun shifted back a quarter revolution.
#[inline]
pub fn anomaly_sun(day: u32, n: i64) -> f64 {
    mean_sun(day, n) - 0.25
}

/// Piecewise-linear lookup in a quarter-period table, extended to a full
/// period of `4 × (table.len() − 1)` steps by mirror symmetry and a sign
/// flip over the second half.
fn equation(argument: f64, table: &[f64]) -> f64 {
    let quarter = (table.len() - 1) as f64;
    let half = 2.0 * quarter;
    let period = 2.0 * half;

    let mut i = argument % period;
    if i < 0.0 {
        i += period;
    }
    let mut sign = 1.0;
    if i >= half {
        i -= half;
        sign = -1.0;
    }
    if i > quarter {
        i = half - i;
    }

    let a = i.floor();
    let b = i.ceil();
    let (va, vb) = (table[a as usize], table[b as usize]);
    if a == b {
        sign * va
    } else {
        sign * ((b - i) * va + (i - a) * vb) / (b - a)
    }
}

/// Moon equation for an argument measured in 28ths of a revolution.
#[inline]
pub fn moon_equation(argument: f64) -> f64 {
    equation(argument, &MOON_TABLE)
}

/// Sun equation for an argument measured in 12ths of a revolution.
#[inline]
pub fn sun_equation(argument: f64) -> f64 {
    equation(argument, &SUN_TABLE)
}

/// True date (fractional Julian Day) at which lunar day `day` of true month
/// `n` ends.
pub fn true_date(day: u32, n: i64) -> f64 {
    let moon = moon_equation(28.0 * anomaly_moon(day, n));
    let sun = sun_equation(12.0 * anomaly_sun(day, n));
    mean_date(day, n) + moon / 60.0 - sun / 60.0
}

/// Civil day number on which lunar day `day` (1..=30) of `month` ends.
///
/// Every month and day boundary in the engine is expressed through this
/// function.
///
/// # Example
///
/// ```
/// use tsagalbar::{lunar_julian_day, LunarMonth};
///
/// // The last day of the twelfth month of 2024 falls on 2025-02-28.
/// let jdn = lunar_julian_day(LunarMonth::regular(2024, 12), 30);
/// assert_eq!(jdn.value(), 2_460_735);
/// ```
pub fn lunar_julian_day(month: LunarMonth, day: u32) -> JulianDayNumber {
    JulianDayNumber::new(true_date(day, true_month(month)).floor() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_month_known_years() {
        let leaps: Vec<(i32, u32)> = (2020..=2030)
            .flat_map(|y| (1..=12).map(move |m| (y, m)))
            .filter(|&(y, m)| is_leap_month(y, m))
            .collect();
        assert_eq!(leaps, vec![(2022, 4), (2024, 12), (2027, 9), (2030, 5)]);
    }

    #[test]
    fn at_most_one_leap_month_per_year() {
        for year in 1700..=2400 {
            let count = (1..=12).filter(|&m| is_leap_month(year, m)).count();
            assert!(count <= 1, "year {year} has {count} leap months");
        }
    }

    #[test]
    fn leap_months_recur_about_every_32_months() {
        let mut last: Option<i64> = None;
        for year in 1800..=2200 {
            for m in 1..=12 {
                if is_leap_month(year, m) {
                    let c = month_count(year, m);
                    if let Some(prev) = last {
                        assert!((32..=34).contains(&(c - prev)), "gap {}", c - prev);
                    }
                    last = Some(c);
                }
            }
        }
    }

    #[test]
    fn leap_copy_precedes_regular_month() {
        let regular = LunarMonth::regular(2024, 12);
        let leap = LunarMonth::leap(2024, 12);
        assert_eq!(true_month(leap) + 1, true_month(regular));
        let gap = lunar_julian_day(regular, 30) - lunar_julian_day(leap, 30);
        assert!((29..=30).contains(&gap));
    }

    #[test]
    fn leap_flag_forces_rounding_down() {
        for year in 1900..=2100 {
            for m in 1..=12 {
                let regular = true_month(LunarMonth::regular(year, m));
                let flagged = true_month(LunarMonth::leap(year, m));
                assert!(regular - flagged == 0 || regular - flagged == 1);
            }
        }
    }

    #[test]
    fn consecutive_months_advance_the_true_month_by_one() {
        for year in 1900..=2100 {
            for m in 1..12 {
                let a = true_month(LunarMonth::regular(year, m));
                let b = true_month(LunarMonth::regular(year, m + 1));
                let expected = if is_leap_month(year, m + 1) { 2 } else { 1 };
                assert_eq!(b - a, expected, "{year}-{m}");
            }
        }
    }

    #[test]
    fn moon_equation_table_and_symmetry() {
        assert_eq!(moon_equation(0.0), 0.0);
        assert_eq!(moon_equation(7.0), 25.0);
        assert_eq!(moon_equation(3.0), 15.0);
        assert_eq!(moon_equation(10.0), 19.0);
        assert_eq!(moon_equation(11.0), 15.0);
        assert_eq!(moon_equation(14.0), 0.0);
        assert_eq!(moon_equation(21.0), -25.0);
        assert_eq!(moon_equation(28.0 + 3.0), 15.0);
        assert_eq!(moon_equation(-3.0), -15.0);
        assert!((moon_equation(3.5) - 17.0).abs() < 1e-12);
    }

    #[test]
    fn sun_equation_table_and_symmetry() {
        assert_eq!(sun_equation(0.0), 0.0);
        assert_eq!(sun_equation(3.0), 11.0);
        assert_eq!(sun_equation(4.0), 10.0);
        assert_eq!(sun_equation(6.0), 0.0);
        assert_eq!(sun_equation(9.0), -11.0);
        assert!((sun_equation(1.5) - 8.0).abs() < 1e-12);
    }

    #[test]
    fn lunar_days_end_on_nondecreasing_civil_days() {
        let month = LunarMonth::regular(2024, 1);
        let mut previous = lunar_julian_day(LunarMonth::regular(2023, 12), 30);
        for d in 1..=30 {
            let jdn = lunar_julian_day(month, d);
            assert!(jdn >= previous);
            assert!(jdn - previous <= 2, "day {d} ends too late");
            previous = jdn;
        }
    }

    #[test]
    fn month_ends_match_reference_dates() {
        // Tsagaan Sar 2024 fell on 2024-02-10 and 2025 on 2025-03-01.
        assert_eq!(lunar_julian_day(LunarMonth::regular(2023, 12), 30).value(), 2_460_350);
        assert_eq!(lunar_julian_day(LunarMonth::regular(2024, 12), 30).value(), 2_460_735);
    }
}
