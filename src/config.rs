// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Tsagalbar contributors

//! Tunable limits of the two iterative searches.
//!
//! The defaults are the calendar's historical constants and must be kept
//! for parity with published almanacs; other values are useful for tests
//! and for exploring dates far from the present.

use chrono::{FixedOffset, Offset, Utc};
use qtty::Days;

/// Maximum number of candidate months the resolver examines.
pub const MAX_MONTH_STEPS: u32 = 50;

/// Upper bound on false-position steps of the new-moon search.
pub const MAX_PHASE_ITERATIONS: u32 = 100;

/// Phase tolerance of the new-moon search, in revolutions.
pub const PHASE_EPSILON: f64 = 1e-4;

/// Smallest bracket width the new-moon search keeps narrowing, in days.
pub const MIN_BRACKET_WIDTH: Days = Days::new(1e-3);

/// Half-width of the new-moon bracket around the new-year day, in days.
pub const NEW_MOON_HALF_WINDOW: Days = Days::new(3.0);

/// Civil offset of Ulaanbaatar (UTC+08:00), in seconds.
pub const ULAANBAATAR_UTC_OFFSET: i32 = 8 * 3600;

/// Limits for [`resolve_lunar_month_with`](crate::resolve_lunar_month_with)
/// and [`find_phase_crossing`](crate::find_phase_crossing).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Candidate months examined before giving up.
    pub max_month_steps: u32,
    /// False-position steps allowed after the first interpolation.
    pub max_phase_iterations: u32,
    /// Phase tolerance, in revolutions.
    pub phase_epsilon: f64,
    /// Minimum bracket width, in days.
    pub min_bracket_width: Days,
    /// Half-width of the new-moon bracket, in days.
    pub half_window: Days,
    /// Offset applied when rendering instants as civil time, in seconds
    /// east of UTC.
    pub utc_offset_seconds: i32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_month_steps: MAX_MONTH_STEPS,
            max_phase_iterations: MAX_PHASE_ITERATIONS,
            phase_epsilon: PHASE_EPSILON,
            min_bracket_width: MIN_BRACKET_WIDTH,
            half_window: NEW_MOON_HALF_WINDOW,
            utc_offset_seconds: ULAANBAATAR_UTC_OFFSET,
        }
    }
}

impl SearchConfig {
    /// The civil offset as a `chrono` zone; an out-of-range offset falls
    /// back to UTC.
    pub fn civil_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_seconds).unwrap_or_else(|| Utc.fix())
    }
}
