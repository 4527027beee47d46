// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Tsagalbar contributors

//! Tsagalbar
//!
//! Engine of the Mongolian lunisolar calendar (Phugpa tradition): lunar
//! dates of Gregorian days, the cyclic attributes of days, months and years,
//! leap months, and the date of Tsagaan Sar with its preceding new moon.
//!
//! # Queries
//!
//! - [`compute_lunar_date`]: lunar month, lunar day, year/month/day
//!   attributes and the hair-cutting omen of a Gregorian date.
//! - [`compute_new_year`]: Tsagaan Sar of a year and the new moon before it.
//! - [`month_calendar`] and [`hair_cutting_calendar`]: the same for every
//!   day of a Gregorian month.
//!
//! Every query is a pure function. The two iterative searches report
//! non-convergence in their result types ([`MonthSearch::Exhausted`],
//! [`PhaseSearch::NotBracketed`]) instead of failing.
//!
//! # Core types
//!
//! - [`JulianDayNumber`] and [`GregorianDate`]: the civil day axis.
//! - [`LunarMonth`]: one month of the lunisolar calendar, possibly the
//!   inserted copy of a doubled month.
//! - [`Time<S>`]: fractional-day instant parameterised by a [`TimeScale`]
//!   marker ([`JD`], [`Jd2000`], [`UnixTime`]).
//! - [`Interval<T>`]: closed interval, aliased as [`DaySpan`] for lunar
//!   month spans and [`Period<S>`] for search brackets.
//!
//! # Example
//!
//! ```
//! use tsagalbar::{compute_lunar_date, compute_new_year, LunarMonth};
//!
//! let today = compute_lunar_date(2024, 3, 1);
//! assert_eq!(today.lunar_month(), LunarMonth::regular(2024, 1));
//! assert_eq!(today.lunar_day, 21);
//!
//! let tsagaan_sar = compute_new_year(2025);
//! assert_eq!(tsagaan_sar.date.to_string(), "2025-03-01");
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for every record and value type.
//!
//! # Logging
//!
//! Search steps are emitted as `tracing` events at `debug` level, and a
//! search that gives up is reported at `warn`.  The crate never installs a
//! subscriber.

mod attributes;
mod calendar;
mod config;
mod ephemeris;
mod error;
pub(crate) mod instant;
mod julian_day;
mod lunar_month;
mod moon_phase;
mod period;
mod record;
pub(crate) mod scales;
pub mod tables;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use attributes::{
    amod, Animal, DayAttributes, Element, Mingle, MonthAttributes, Stem, Trigram, YearAttributes,
};
pub use calendar::{
    compute_lunar_date, compute_lunar_date_with, compute_new_year, compute_new_year_with,
    hair_cutting_calendar, month_calendar, new_year_jdn,
};
pub use config::SearchConfig;
pub use ephemeris::{is_leap_month, lunar_julian_day, true_date, true_month};
pub use error::{CalendarError, Result};
pub use instant::{Time, TimeInstant, TimeScale};
pub use julian_day::{
    gregorian_to_jdn, jdn_to_gregorian, GregorianDate, JulianDayNumber, ValidityWindow,
};
pub use lunar_month::{resolve_lunar_month, resolve_lunar_month_with, LunarMonth, MonthSearch};
pub use moon_phase::{
    find_phase_crossing, moon_phase, normalized_phase, PhaseSearch, FIRST_QUARTER, NEW_MOON,
    NOT_FOUND_JD,
};
pub use period::{DaySpan, Interval, Period};
pub use record::{HairCutting, HairCuttingDay, LunarDateRecord, NewMoon, NewYearRecord};
pub use scales::{Jd2000, UnixTime, JD};

/// Julian Date: a fractional day count on the [`JD`] scale.
pub type JulianDate = Time<JD>;
