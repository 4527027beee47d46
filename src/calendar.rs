// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Tsagalbar contributors

//! Calendar queries.
//!
//! [`compute_lunar_date`] and [`compute_new_year`] take raw integers and
//! never fail; out-of-range input gives an unspecified but finite result.
//! The month-level queries validate the month they are given because they
//! need its length.

use crate::attributes::{DayAttributes, MonthAttributes, YearAttributes};
use crate::config::SearchConfig;
use crate::error::{CalendarError, Result};
use crate::instant::Time;
use crate::julian_day::{GregorianDate, JulianDayNumber};
use crate::lunar_month::{resolve_lunar_month_with, LunarMonth};
use crate::moon_phase::{find_phase_crossing, PhaseSearch, NEW_MOON};
use crate::period::Period;
use crate::record::{HairCutting, HairCuttingDay, LunarDateRecord, NewMoon, NewYearRecord};
use crate::scales::JD;

// ── Lunar dates ──────────────────────────────────────────────────────────

/// Lunar date and attributes of the Gregorian date `(year, month, day)`.
///
/// No range checks are made; see [`GregorianDate::new`] for a validated
/// date to pass to [`compute_lunar_date_with`].
///
/// # Example
///
/// ```
/// use tsagalbar::compute_lunar_date;
///
/// let record = compute_lunar_date(2024, 2, 10);
/// assert_eq!(record.lunar_day, 1);
/// assert_eq!(record.day.animal.name(), "луу");
/// assert_eq!(record.hair_cutting.recommendation(), "Нас богиносно");
/// ```
pub fn compute_lunar_date(year: i32, month: u32, day: u32) -> LunarDateRecord {
    compute_lunar_date_with(
        GregorianDate::new_unchecked(year, month, day),
        &SearchConfig::default(),
    )
}

/// [`compute_lunar_date`] with explicit search limits.
pub fn compute_lunar_date_with(date: GregorianDate, config: &SearchConfig) -> LunarDateRecord {
    let jdn = date.jdn();
    let month_search = resolve_lunar_month_with(date.year, date.month, date.day, config);
    let lunar_month = month_search.month();
    let lunar_day = lunar_month.day_of(jdn);
    tracing::debug!(%date, %lunar_month, lunar_day, "resolved lunar date");

    LunarDateRecord {
        date,
        jdn,
        month_search,
        lunar_day,
        year: YearAttributes::new(lunar_month.year),
        month: MonthAttributes::new(lunar_month),
        day: DayAttributes::from_jdn(jdn),
        hair_cutting: HairCutting::clamped(lunar_day),
    }
}

/// [`LunarDateRecord`] of every day of a Gregorian month.
pub fn month_calendar(year: i32, month: u32) -> Result<Vec<LunarDateRecord>> {
    let config = SearchConfig::default();
    GregorianDate::month_days(year, month).map(|dates| {
        dates
            .map(|date| compute_lunar_date_with(date, &config))
            .collect()
    })
}

/// Hair-cutting omen of every day of a Gregorian month.
///
/// # Example
///
/// ```
/// use tsagalbar::hair_cutting_calendar;
///
/// let days = hair_cutting_calendar(2024, 2).unwrap();
/// assert_eq!(days.len(), 29);
/// assert_eq!(days[9].lunar_day, 1);
/// ```
pub fn hair_cutting_calendar(year: i32, month: u32) -> Result<Vec<HairCuttingDay>> {
    Ok(month_calendar(year, month)?
        .into_iter()
        .map(|record| HairCuttingDay {
            date: record.date,
            lunar_day: record.lunar_day,
            hair_cutting: record.hair_cutting,
        })
        .collect())
}

// ── New year ─────────────────────────────────────────────────────────────

/// Day number of Tsagaan Sar of `year`: the day after the last day of the
/// twelfth month of the previous year.
///
/// ```
/// use tsagalbar::new_year_jdn;
///
/// assert_eq!(new_year_jdn(2025).value(), 2_460_736);
/// ```
pub fn new_year_jdn(year: i32) -> JulianDayNumber {
    LunarMonth::regular(year.saturating_sub(1), 12).last_day() + 1
}

/// Tsagaan Sar of `year` with the new moon that precedes it.
///
/// # Example
///
/// ```
/// use tsagalbar::compute_new_year;
///
/// let record = compute_new_year(2025);
/// assert_eq!(record.date_label(), "2025/III/01 Бямба");
/// assert_eq!(record.new_moon_label().as_deref(), Some("II/28 - 08ц 46м"));
/// ```
pub fn compute_new_year(year: i32) -> NewYearRecord {
    compute_new_year_with(year, &SearchConfig::default())
}

/// [`compute_new_year`] with explicit search limits and civil offset.
pub fn compute_new_year_with(year: i32, config: &SearchConfig) -> NewYearRecord {
    let jdn = new_year_jdn(year);
    let bracket = Period::<JD>::around(jdn.to_julian_date(), config.half_window);
    let new_moon = match find_phase_crossing(bracket, NEW_MOON, config) {
        PhaseSearch::Found { instant, .. } => match civil_time(instant, config) {
            Ok(civil) => NewMoon::At { instant, civil },
            Err(err) => {
                tracing::warn!(year, %err, "new moon outside the civil range");
                NewMoon::Unavailable
            }
        },
        PhaseSearch::NotBracketed => {
            tracing::warn!(year, %jdn, "no new moon near Tsagaan Sar");
            NewMoon::Unavailable
        }
    };

    NewYearRecord {
        year: YearAttributes::new(year),
        jdn,
        date: jdn.to_gregorian(),
        day: DayAttributes::from_jdn(jdn),
        new_moon,
    }
}

fn civil_time(
    instant: Time<JD>,
    config: &SearchConfig,
) -> Result<chrono::DateTime<chrono::FixedOffset>> {
    instant
        .to_civil(config.civil_offset())
        .ok_or(CalendarError::TimestampOutOfRange(instant.value()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lunar_month::MonthSearch;
    use chrono::Timelike;

    #[test]
    fn tsagaan_sar_2024_record() {
        let record = compute_lunar_date(2024, 2, 10);
        assert_eq!(record.jdn.value(), 2_460_351);
        assert_eq!(record.lunar_month(), LunarMonth::regular(2024, 1));
        assert!(record.is_exact());
        assert_eq!(record.lunar_day, 1);
        assert_eq!(record.year.cycle_position, 38);
        assert_eq!(record.month.animal.name(), "барс");
        assert_eq!(
            record.day_description(),
            "Билгийн тооллын 1, гал суудалтай, зургаан цагаан мэнгэтэй, хөх луу өдөр"
        );
    }

    #[test]
    fn lunar_days_of_reference_dates() {
        let cases = [
            ((2024, 2, 9), (2023, 12, 29)),
            ((2025, 3, 1), (2025, 1, 2)),
            ((2024, 1, 1), (2023, 11, 20)),
            ((2000, 1, 1), (1999, 11, 25)),
            ((2024, 3, 1), (2024, 1, 21)),
        ];
        for ((y, m, d), (ly, lm, ld)) in cases {
            let record = compute_lunar_date(y, m, d);
            assert_eq!(record.lunar_month(), LunarMonth::regular(ly, lm), "{y}-{m}-{d}");
            assert_eq!(record.lunar_day, ld, "{y}-{m}-{d}");
        }
    }

    #[test]
    fn exhausted_search_still_yields_a_record() {
        let config = SearchConfig {
            max_month_steps: 1,
            ..SearchConfig::default()
        };
        let record = compute_lunar_date_with(GregorianDate::new_unchecked(2024, 2, 10), &config);
        assert!(!record.is_exact());
        assert!(matches!(record.month_search, MonthSearch::Exhausted { .. }));
        assert!((1..=30).contains(&record.lunar_day));
    }

    #[test]
    fn month_calendar_covers_every_day() {
        let days = month_calendar(2024, 2).unwrap();
        assert_eq!(days.len(), 29);
        assert_eq!(days[0].date, GregorianDate::new_unchecked(2024, 2, 1));
        for pair in days.windows(2) {
            assert_eq!(pair[1].jdn - pair[0].jdn, 1);
        }
        assert_eq!(month_calendar(2024, 13), Err(CalendarError::InvalidMonth(13)));
    }

    #[test]
    fn hair_cutting_calendar_matches_lunar_days() {
        let days = hair_cutting_calendar(2024, 3).unwrap();
        assert_eq!(days.len(), 31);
        let first = &days[0];
        assert_eq!(first.lunar_day, 21);
        assert_eq!(first.hair_cutting, HairCutting::new(21).unwrap());
        assert!(hair_cutting_calendar(2024, 0).is_err());
    }

    #[test]
    fn new_year_2025() {
        let record = compute_new_year(2025);
        assert_eq!(record.jdn.value(), 2_460_736);
        assert_eq!(record.date, GregorianDate::new_unchecked(2025, 3, 1));
        assert_eq!(record.year.animal.name(), "могой");
        assert_eq!(record.day.animal.name(), "могой");
        let civil = record.new_moon.civil().expect("new moon found");
        assert_eq!((civil.hour(), civil.minute()), (8, 46));
        assert_eq!(record.date_label(), "2025/III/01 Бямба");
    }

    #[test]
    fn new_moon_in_utc() {
        let config = SearchConfig {
            utc_offset_seconds: 0,
            ..SearchConfig::default()
        };
        let record = compute_new_year_with(2025, &config);
        assert_eq!(record.new_moon_label().as_deref(), Some("II/28 - 00ц 46м"));
    }

    #[test]
    fn extreme_years_yield_records() {
        for year in [i32::MIN, i32::MAX] {
            let record = compute_lunar_date(year, 1, 1);
            assert!((1..=30).contains(&record.lunar_day));
            let new_year = compute_new_year(year);
            assert_eq!(new_year.jdn, new_year_jdn(year));
            assert_eq!(new_year.year.year, year);
        }
        assert_eq!(new_year_jdn(i32::MIN), LunarMonth::regular(i32::MIN, 12).last_day() + 1);
    }

    #[test]
    fn narrow_window_without_new_moon_is_unavailable() {
        let config = SearchConfig {
            half_window: qtty::Days::new(0.25),
            ..SearchConfig::default()
        };
        // Tsagaan Sar 2025 is a day and a half after the new moon.
        let record = compute_new_year_with(2025, &config);
        assert_eq!(record.new_moon, NewMoon::Unavailable);
        assert_eq!(record.new_moon_label(), None);
        assert!(!record.to_string().contains("Шинийн нэгэн"));
    }
}
