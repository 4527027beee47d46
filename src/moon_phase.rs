// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Tsagalbar contributors

//! # Moon phase and phase crossings
//!
//! A low-precision lunar theory good to about a minute of time over the
//! calendar's validity window:
//!
//! - the Sun's ecliptic longitude from its mean longitude, the equation of
//!   centre and the nutation/aberration terms;
//! - the Moon's longitude from its mean longitude plus the fourteen largest
//!   periodic terms of the lunar theory (arcseconds);
//! - the phase is the elongation `(λ☾ − λ☉) / 2π`, in revolutions.
//!
//! [`find_phase_crossing`] locates the instant the phase reaches a target
//! inside a bracket by false position (regula falsi). A bracket without a
//! sign change yields [`PhaseSearch::NotBracketed`]; it never returns a
//! spurious date.

use std::f64::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;
use crate::instant::Time;
use crate::period::Period;
use crate::scales::{Jd2000, JD};

/// Julian Day reported for a failed search by callers that need a plain
/// number: the day before the J2000 epoch, negated.
pub const NOT_FOUND_JD: f64 = -2_451_546.0;

/// Phase of a new moon.
pub const NEW_MOON: f64 = 0.0;

/// Phase of a first quarter.
pub const FIRST_QUARTER: f64 = 0.25;

#[inline]
fn frac(x: f64) -> f64 {
    x - x.floor()
}

// ── Phase series ─────────────────────────────────────────────────────────

/// Apparent ecliptic longitude of the Sun, in radians.
fn sun_longitude(n: f64) -> f64 {
    let node = 2.1429 - 0.001_039_459_4 * n;
    let mean_longitude = 4.895_063 + 0.017_202_791_698 * n;
    let mean_anomaly = 6.240_06 + 0.017_201_969_9 * n;
    mean_longitude + 0.033_416_07 * mean_anomaly.sin() + 0.000_348_94 * (2.0 * mean_anomaly).sin()
        - 0.000_113_4
        - 0.000_020_3 * node.sin()
}

/// Ecliptic longitude of the Moon, in revolutions.
fn moon_longitude(n: f64) -> f64 {
    let t = n / 36_525.0;
    let mean_longitude = 0.606_433 + 1_336.855_225 * t;
    let l = TAU * frac(0.374_897 + 1_325.552_41 * t);
    let ls = TAU * frac(0.993_133 + 99.997_361 * t);
    let d = TAU * frac(0.827_361 + 1_236.853_086 * t);
    let f = TAU * frac(0.259_086 + 1_342.227_825 * t);

    let perturbation = 22_640.0 * l.sin() - 4_586.0 * (l - 2.0 * d).sin()
        + 2_370.0 * (2.0 * d).sin()
        + 769.0 * (2.0 * l).sin()
        - 668.0 * ls.sin()
        - 412.0 * (2.0 * f).sin()
        - 212.0 * (2.0 * l - 2.0 * d).sin()
        - 206.0 * (l + ls - 2.0 * d).sin()
        + 192.0 * (l + 2.0 * d).sin()
        - 165.0 * (ls - 2.0 * d).sin()
        - 125.0 * d.sin()
        - 110.0 * (l + ls).sin()
        + 148.0 * (l - ls).sin()
        - 55.0 * (2.0 * f - 2.0 * d).sin();

    mean_longitude + perturbation / 1_296_000.0
}

/// Moon phase at `instant` in `[0, 1)`: `0` is new moon, `0.5` full moon.
///
/// # Example
///
/// ```
/// use tsagalbar::{moon_phase, Time, JD};
///
/// // New moon of 2025-02-28.
/// let phase = moon_phase(Time::<JD>::new(2_460_734.532_4).to());
/// assert!(phase < 1e-3 || phase > 1.0 - 1e-3);
/// ```
pub fn moon_phase(instant: Time<Jd2000>) -> f64 {
    let n = instant.value();
    frac(moon_longitude(n) - sun_longitude(n) / TAU)
}

/// Moon phase shifted to `[-0.5, 0.5)`, continuous across new moon.
pub fn normalized_phase(instant: Time<Jd2000>) -> f64 {
    frac(moon_phase(instant) + 0.5) - 0.5
}

// ── Root finder ──────────────────────────────────────────────────────────

/// Outcome of a phase-crossing search.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PhaseSearch {
    /// The crossing instant and the number of refinement steps taken.
    Found { instant: Time<JD>, iterations: u32 },
    /// The phase error has the same sign at both ends of the bracket.
    NotBracketed,
}

impl PhaseSearch {
    /// The crossing instant, if one was found.
    pub fn instant(&self) -> Option<Time<JD>> {
        match *self {
            PhaseSearch::Found { instant, .. } => Some(instant),
            PhaseSearch::NotBracketed => None,
        }
    }

    /// Julian Day of the crossing, or [`NOT_FOUND_JD`].
    pub fn julian_day_or_sentinel(&self) -> f64 {
        self.instant().map_or(NOT_FOUND_JD, |t| t.value())
    }
}

/// Instant inside `bracket` at which the normalised phase equals `target`.
///
/// The search stops when the phase error is within
/// [`SearchConfig::phase_epsilon`], when the bracket narrows below
/// [`SearchConfig::min_bracket_width`], or after
/// [`SearchConfig::max_phase_iterations`] steps.  The bracket must not span
/// a full moon, where the normalised phase wraps from `+0.5` to `−0.5`.
///
/// # Example
///
/// ```
/// use qtty::Days;
/// use tsagalbar::{find_phase_crossing, Period, SearchConfig, Time, JD};
///
/// let around = Period::around(Time::<JD>::new(2_460_736.0), Days::new(3.0));
/// let new_moon = find_phase_crossing(around, 0.0, &SearchConfig::default());
/// let jd = new_moon.instant().unwrap().value();
/// assert!((jd - 2_460_734.532).abs() < 1e-3);
/// ```
pub fn find_phase_crossing(bracket: Period<JD>, target: f64, config: &SearchConfig) -> PhaseSearch {
    let epsilon = config.phase_epsilon;
    let min_width = config.min_bracket_width.value();
    let error = |n: f64| normalized_phase(Time::<Jd2000>::new(n)) - target;
    let found = |n: f64, iterations: u32| PhaseSearch::Found {
        instant: Time::<Jd2000>::new(n).to::<JD>(),
        iterations,
    };

    let days = bracket.to::<Jd2000>();
    let (mut n1, mut n2) = (days.start.value(), days.end.value());

    let mut p1 = error(n1);
    if p1.abs() <= epsilon {
        return found(n1, 0);
    }
    let mut p2 = error(n2);
    if p2.abs() <= epsilon {
        return found(n2, 0);
    }
    if p1 * p2 > 0.0 {
        tracing::warn!(%bracket, target, "phase bracket holds no sign change");
        return PhaseSearch::NotBracketed;
    }

    let mut n = n1 - p1 * (n2 - n1) / (p2 - p1);
    let mut p = error(n);
    let mut iterations = 0;
    while p.abs() > epsilon && iterations < config.max_phase_iterations {
        if p1 * p > 0.0 {
            p1 = p;
            n1 = n;
        } else {
            p2 = p;
            n2 = n;
        }
        n = n1 - p1 * (n2 - n1) / (p2 - p1);
        if n2 - n1 <= min_width {
            break;
        }
        p = error(n);
        iterations += 1;
    }

    tracing::debug!(%bracket, target, iterations, residual = p, "phase crossing located");
    found(n, iterations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtty::Days;

    const NEW_MOON_2025: f64 = 2_460_734.532_373_836_3;

    fn jd(value: f64) -> Time<JD> {
        Time::new(value)
    }

    #[test]
    fn phase_is_in_unit_range() {
        for i in 0..400 {
            let p = moon_phase(Time::new(i as f64 * 0.73));
            assert!((0.0..1.0).contains(&p));
            let q = normalized_phase(Time::new(i as f64 * 0.73));
            assert!((-0.5..0.5).contains(&q));
        }
    }

    #[test]
    fn phase_at_j2000() {
        // The Moon was a waning crescent at J2000.0.
        assert!((normalized_phase(Time::new(0.0)) + 0.158_48).abs() < 1e-4);
    }

    #[test]
    fn phase_advances_about_one_revolution_per_synodic_month() {
        let start = jd(NEW_MOON_2025).to::<Jd2000>();
        let later = start + Days::new(29.530_6);
        assert!(normalized_phase(later).abs() < 0.01);
        assert!((moon_phase(start + Days::new(14.77)) - 0.5).abs() < 0.03);
    }

    #[test]
    fn finds_new_moon_before_tsagaan_sar_2025() {
        let bracket = Period::around(jd(2_460_736.0), Days::new(3.0));
        let search = find_phase_crossing(bracket, NEW_MOON, &SearchConfig::default());
        let instant = search.instant().expect("new moon inside the bracket");
        assert!((instant.value() - NEW_MOON_2025).abs() < 1e-6);
        assert!(normalized_phase(instant.to()).abs() <= 1e-4);
    }

    #[test]
    fn finds_first_quarter() {
        let bracket = Period::new(jd(NEW_MOON_2025 + 5.0), jd(NEW_MOON_2025 + 10.0));
        let search = find_phase_crossing(bracket, FIRST_QUARTER, &SearchConfig::default());
        let instant = search.instant().expect("first quarter inside the bracket");
        assert!((instant.value() - 2_460_741.190_410_450_6).abs() < 1e-6);
    }

    #[test]
    fn endpoint_hit_returns_absolute_julian_day() {
        let bracket = Period::new(jd(NEW_MOON_2025), jd(NEW_MOON_2025 + 2.0));
        let search = find_phase_crossing(bracket, NEW_MOON, &SearchConfig::default());
        assert_eq!(
            search,
            PhaseSearch::Found {
                instant: Time::<Jd2000>::new(NEW_MOON_2025 - 2_451_545.0).to(),
                iterations: 0
            }
        );
        assert!((search.julian_day_or_sentinel() - NEW_MOON_2025).abs() < 1e-6);
    }

    #[test]
    fn bracket_without_crossing_is_reported() {
        // Entirely inside the waxing crescent: phase error is positive at both ends.
        let bracket = Period::new(jd(NEW_MOON_2025 + 3.0), jd(NEW_MOON_2025 + 9.0));
        let search = find_phase_crossing(bracket, NEW_MOON, &SearchConfig::default());
        assert_eq!(search, PhaseSearch::NotBracketed);
        assert_eq!(search.instant(), None);
        assert_eq!(search.julian_day_or_sentinel(), NOT_FOUND_JD);
    }

    #[test]
    fn coarse_tolerance_stops_early() {
        let config = SearchConfig {
            phase_epsilon: 0.05,
            ..SearchConfig::default()
        };
        let bracket = Period::around(jd(2_460_736.0), Days::new(3.0));
        let search = find_phase_crossing(bracket, NEW_MOON, &config);
        let instant = search.instant().expect("crossing");
        assert!((instant.value() - NEW_MOON_2025).abs() < 1.6);
    }
}
