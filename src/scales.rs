// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Tsagalbar contributors

//! Time-scale marker types.
//!
//! Each zero-sized type identifies a day counter and encodes how values in
//! that counter relate to the canonical **Julian Date**.
//!
//! | Marker | Description | Epoch (JD) |
//! |--------|-------------|------------|
//! | [`JD`] | Julian Date | 0.0 |
//! | [`Jd2000`] | Days since J2000.0 (argument of the moon-phase series) | 2 451 545.0 |
//! | [`UnixTime`] | Days since 1970-01-01T00:00:00Z | 2 440 587.5 |
//!
//! The calendar treats every Julian Date as civil Universal Time: no ΔT
//! correction is applied anywhere in the engine.

use super::instant::TimeScale;
use qtty::Days;

// ---------------------------------------------------------------------------
// Epoch counters
// ---------------------------------------------------------------------------

/// Julian Date, the identity scale.
///
/// `to_jd(v) = v`, i.e. the quantity *is* a (fractional) Julian Day.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "Julian Day:";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd
    }
}

/// Days elapsed since J2000.0 (JD 2 451 545.0).
///
/// This is the `n` fed to the moon-phase series in
/// [`moon_phase`](crate::moon_phase).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Jd2000;

/// JD of the J2000.0 reference epoch.
pub(crate) const J2000_EPOCH_JD: Days = Days::new(2_451_545.0);

impl TimeScale for Jd2000 {
    const LABEL: &'static str = "J2000+";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value + J2000_EPOCH_JD
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd - J2000_EPOCH_JD
    }
}

/// Unix Time: time since 1970-01-01T00:00:00 UTC, stored as **days**.
///
/// Leap seconds are ignored, as POSIX does.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UnixTime;

/// JD of the Unix epoch (1970-01-01T00:00:00Z).
pub(crate) const UNIX_EPOCH_JD: Days = Days::new(2_440_587.5);

impl TimeScale for UnixTime {
    const LABEL: &'static str = "Unix";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value + UNIX_EPOCH_JD
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd - UNIX_EPOCH_JD
    }
}

// ---------------------------------------------------------------------------
// Cross-scale From/Into (generated by macro)
// ---------------------------------------------------------------------------

/// Generate pairwise `From<Time<A>> for Time<B>` implementations.
macro_rules! impl_time_conversions {
    ($single:ty) => {};

    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<super::instant::Time<$first>> for super::instant::Time<$rest> {
                #[inline]
                fn from(t: super::instant::Time<$first>) -> Self {
                    t.to::<$rest>()
                }
            }

            impl From<super::instant::Time<$rest>> for super::instant::Time<$first> {
                #[inline]
                fn from(t: super::instant::Time<$rest>) -> Self {
                    t.to::<$first>()
                }
            }
        )+

        impl_time_conversions!($($rest),+);
    };
}

impl_time_conversions!(JD, Jd2000, UnixTime);
