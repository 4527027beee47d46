// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Tsagalbar contributors

//! Fractional-day instant parameterised by a day counter.
//!
//! [`Time<S>`] stores a scalar quantity in [`Days`] whose *meaning* is
//! determined by the compile-time marker `S: TimeScale`.  The lunisolar
//! calendar itself works on integer day numbers
//! ([`JulianDayNumber`](crate::JulianDayNumber)); `Time<S>` carries the
//! sub-day instants produced by the new-moon search and their conversion
//! to civil timestamps.

use chrono::{DateTime, FixedOffset, Utc};
use qtty::*;
use std::marker::PhantomData;
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ═══════════════════════════════════════════════════════════════════════════
// TimeScale trait
// ═══════════════════════════════════════════════════════════════════════════

/// Marker trait for day counters.
///
/// A **time scale** defines a human-readable label and a pair of conversion
/// functions between the scale's native quantity (in [`Days`]) and the
/// absolute Julian Date.  All scales in this crate are pure epoch offsets.
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Display label used by [`Time`] formatting.
    const LABEL: &'static str;

    /// Convert a quantity in this scale's native unit to an absolute JD.
    fn to_jd(value: Days) -> Days;

    /// Convert an absolute JD back to this scale's native quantity.
    fn from_jd(jd: Days) -> Days;
}

// ═══════════════════════════════════════════════════════════════════════════
// Time<S>: the generic instant
// ═══════════════════════════════════════════════════════════════════════════

/// A point on time scale `S`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    quantity: Days,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw scalar (days since the scale's epoch).
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
            _scale: PhantomData,
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self {
            quantity: days,
            _scale: PhantomData,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Absolute Julian Date corresponding to this instant.
    #[inline]
    pub fn julian_day(&self) -> Days {
        S::to_jd(self.quantity)
    }

    /// Build an instant from an absolute Julian Date.
    #[inline]
    pub fn from_julian_day(jd: Days) -> Self {
        Self::from_days(S::from_jd(jd))
    }

    // ── cross-scale conversion ────────────────────────────────────────

    /// Convert this instant to another day counter.
    ///
    /// The conversion routes through the absolute Julian Date:
    ///
    /// ```text
    /// self → JD → target
    /// ```
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Time<T> {
        Time::<T>::from_julian_day(S::to_jd(self.quantity))
    }

    // ── civil-time helpers ────────────────────────────────────────────

    /// Convert to a `chrono::DateTime<Utc>`.
    ///
    /// Returns `None` if the value falls outside chrono's representable range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        use super::scales::UnixTime;
        let seconds_since_epoch = self.to::<UnixTime>().quantity().to::<Second>().value();
        if !seconds_since_epoch.is_finite() {
            return None;
        }
        let secs = seconds_since_epoch.floor() as i64;
        let nanos = ((seconds_since_epoch - secs as f64) * 1e9) as u32;
        DateTime::<Utc>::from_timestamp(secs, nanos)
    }

    /// Convert to a civil timestamp at a fixed UTC offset.
    pub fn to_civil(&self, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
        self.to_utc().map(|utc| utc.with_timezone(&offset))
    }

    /// Build an instant from a `chrono::DateTime<Utc>`.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        use super::scales::UnixTime;
        let seconds_since_epoch = Seconds::new(datetime.timestamp() as f64);
        let nanos = Seconds::new(datetime.timestamp_subsec_nanos() as f64 / 1e9);
        Time::<UnixTime>::from_days((seconds_since_epoch + nanos).to::<Day>()).to::<S>()
    }

    // ── min / max ─────────────────────────────────────────────────────

    /// Element-wise minimum.
    #[inline]
    pub const fn min(self, other: Self) -> Self {
        Self::from_days(self.quantity.min_const(other.quantity))
    }

    /// Element-wise maximum.
    #[inline]
    pub const fn max(self, other: Self) -> Self {
        Self::from_days(self.quantity.max_const(other.quantity))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Generic trait implementations
// ═══════════════════════════════════════════════════════════════════════════

impl<S: TimeScale> std::fmt::Display for Time<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", S::LABEL, self.quantity)
    }
}

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Time<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

impl<S: TimeScale> Add<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl<S: TimeScale> Sub<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

impl<S: TimeScale> From<Days> for Time<S> {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl<S: TimeScale> From<Time<S>> for Days {
    #[inline]
    fn from(time: Time<S>) -> Self {
        time.quantity
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TimeInstant trait
// ═══════════════════════════════════════════════════════════════════════════

/// Trait for types that represent a point in time.
///
/// Types implementing this trait can be used as endpoints of
/// [`Interval<T>`](crate::Interval).
pub trait TimeInstant: Copy + Clone + PartialEq + PartialOrd + Sized {
    /// The duration type used for arithmetic operations.
    type Duration;

    /// Compute the difference between two time instants.
    fn difference(&self, other: &Self) -> Self::Duration;

    /// Add a duration to this time instant.
    fn add_duration(&self, duration: Self::Duration) -> Self;
}

impl<S: TimeScale> TimeInstant for Time<S> {
    type Duration = Days;

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
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::super::scales::{Jd2000, JD};
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_julian_day_creation() {
        let jd = Time::<JD>::new(2_451_545.0);
        assert_eq!(jd.quantity(), Days::new(2_451_545.0));
    }

    #[test]
    fn test_to_utc_j2000_is_noon() {
        let jd = Time::<JD>::new(2_451_545.0);
        let utc = jd.to_utc().expect("to_utc");
        assert_eq!(utc, Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_utc_roundtrip() {
        let datetime = DateTime::from_timestamp(1_740_732_397, 0).unwrap();
        let jd = Time::<JD>::from_utc(datetime);
        let back = jd.to_utc().expect("to_utc");
        let delta_ns =
            back.timestamp_nanos_opt().unwrap() - datetime.timestamp_nanos_opt().unwrap();
        assert!(delta_ns.abs() < 200_000, "roundtrip error: {} ns", delta_ns);
    }

    #[test]
    fn test_to_civil_applies_offset() {
        let jd = Time::<JD>::new(2_451_545.0);
        let ulaanbaatar = FixedOffset::east_opt(8 * 3600).unwrap();
        let civil = jd.to_civil(ulaanbaatar).expect("civil");
        assert_eq!(civil.hour(), 20);
    }

    #[test]
    fn test_to_utc_rejects_non_finite() {
        let jd = Time::<JD>::new(f64::NAN);
        assert!(jd.to_utc().is_none());
    }

    #[test]
    fn test_min_max() {
        let earlier = Time::<JD>::new(2_451_545.0);
        let later = earlier + Days::new(1.0);
        assert_eq!(earlier.min(later), earlier);
        assert_eq!(earlier.max(later), later);
    }

    #[test]
    fn test_display_jd() {
        let jd = Time::<JD>::new(2_451_545.0);
        let s = format!("{jd}");
        assert!(s.contains("Julian Day"));
    }

    #[test]
    fn test_add_sub_days() {
        let n = Time::<Jd2000>::new(9_000.0);
        assert_eq!((n + Days::new(1.5)).quantity(), Days::new(9_001.5));
        assert_eq!((n - Days::new(1.5)).quantity(), Days::new(8_998.5));
        assert_eq!((n + Days::new(2.0)) - n, Days::new(2.0));
    }

    #[test]
    fn timeinstant_for_time_handles_arithmetic() {
        let jd = Time::<JD>::new(2_451_545.0);
        let other = jd + Days::new(2.0);
        assert_eq!(jd.difference(&other), Days::new(-2.0));
        assert_eq!(
            jd.add_duration(Days::new(1.5)).quantity(),
            Days::new(2_451_546.5)
        );
    }
}
