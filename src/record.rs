// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Tsagalbar contributors

//! Result records of the calendar queries.
//!
//! Records are plain values built fresh for every query.  Their `Display`
//! output is the descriptive Mongolian text shown by almanacs; the
//! structured fields carry the same information for other front ends.

use std::fmt;

use chrono::{DateTime, Datelike, FixedOffset, Timelike};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::attributes::{DayAttributes, MonthAttributes, YearAttributes};
use crate::error::{CalendarError, Result};
use crate::instant::Time;
use crate::julian_day::{GregorianDate, JulianDayNumber};
use crate::lunar_month::{LunarMonth, MonthSearch, LUNAR_DAYS};
use crate::scales::JD;
use crate::tables::{GOOD_HAIR_CUTTING, HAIR_CUTTING, ROMAN_MONTHS, WEEKDAYS};

fn weekday_name(weekday: chrono::Weekday) -> &'static str {
    WEEKDAYS[weekday.num_days_from_sunday() as usize]
}

fn roman_month(month: u32) -> &'static str {
    ROMAN_MONTHS[(month as usize + 11) % 12]
}

// ═══════════════════════════════════════════════════════════════════════════
// Hair cutting
// ═══════════════════════════════════════════════════════════════════════════

/// Hair-cutting (үс засуулах) omen of a lunar day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub struct HairCutting(u32);

impl HairCutting {
    /// Omen of lunar day `lunar_day` (1..=30).
    pub fn new(lunar_day: u32) -> Result<Self> {
        if (1..=LUNAR_DAYS).contains(&lunar_day) {
            Ok(Self(lunar_day))
        } else {
            Err(CalendarError::InvalidLunarDay(lunar_day))
        }
    }

    /// Omen of a lunar day already known to be in range.
    pub(crate) fn clamped(lunar_day: u32) -> Self {
        Self(lunar_day.clamp(1, LUNAR_DAYS))
    }

    pub const fn lunar_day(self) -> u32 {
        self.0
    }

    /// Recommendation text ("Нас уртасна").
    pub fn recommendation(self) -> &'static str {
        HAIR_CUTTING[self.0 as usize - 1]
    }

    /// Whether the day is auspicious for cutting hair.
    pub fn is_good(self) -> bool {
        GOOD_HAIR_CUTTING.contains(&self.recommendation())
    }
}

impl TryFrom<u32> for HairCutting {
    type Error = CalendarError;

    fn try_from(lunar_day: u32) -> Result<Self> {
        Self::new(lunar_day)
    }
}

impl From<HairCutting> for u32 {
    #[inline]
    fn from(omen: HairCutting) -> Self {
        omen.0
    }
}

impl fmt::Display for HairCutting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.recommendation())
    }
}

/// One row of a monthly hair-cutting calendar.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HairCuttingDay {
    pub date: GregorianDate,
    pub lunar_day: u32,
    pub hair_cutting: HairCutting,
}

// ═══════════════════════════════════════════════════════════════════════════
// Lunar date
// ═══════════════════════════════════════════════════════════════════════════

/// Everything the calendar says about one Gregorian day.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LunarDateRecord {
    pub date: GregorianDate,
    pub jdn: JulianDayNumber,
    /// How the enclosing lunar month was found.
    pub month_search: MonthSearch,
    /// Lunar day of the month, 1..=30.
    pub lunar_day: u32,
    pub year: YearAttributes,
    pub month: MonthAttributes,
    pub day: DayAttributes,
    pub hair_cutting: HairCutting,
}

impl LunarDateRecord {
    /// The lunar month containing the day.
    pub fn lunar_month(&self) -> LunarMonth {
        self.month_search.month()
    }

    /// `false` when the month search ran out of steps and the lunar fields
    /// are only an approximation.
    pub fn is_exact(&self) -> bool {
        self.month_search.is_found()
    }

    /// Descriptive sentence of the day: lunar day, trigram seat, mingle and
    /// stem/animal.
    pub fn day_description(&self) -> String {
        format!(
            "Билгийн тооллын {}, {} суудалтай, {} мэнгэтэй, {} {} өдөр",
            self.lunar_day,
            self.day.trigram.name(),
            self.day.mingle,
            self.day.stem.colour(),
            self.day.animal.name()
        )
    }
}

impl fmt::Display for LunarDateRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.date, weekday_name(self.day.weekday))?;
        writeln!(f, "{}", self.year)?;
        writeln!(f, "{}", self.month)?;
        writeln!(f, "{}", self.day_description())?;
        write!(f, "Үс засуулах: {}", self.hair_cutting)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// New year
// ═══════════════════════════════════════════════════════════════════════════

/// The new moon preceding Tsagaan Sar.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NewMoon {
    At {
        instant: Time<JD>,
        /// The same instant in the configured civil offset.
        civil: DateTime<FixedOffset>,
    },
    /// The search bracket held no new moon or the instant was not
    /// representable.
    Unavailable,
}

impl NewMoon {
    pub fn civil(&self) -> Option<DateTime<FixedOffset>> {
        match *self {
            NewMoon::At { civil, .. } => Some(civil),
            NewMoon::Unavailable => None,
        }
    }
}

/// Tsagaan Sar (lunar new year) of one year.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NewYearRecord {
    pub year: YearAttributes,
    pub jdn: JulianDayNumber,
    pub date: GregorianDate,
    pub day: DayAttributes,
    pub new_moon: NewMoon,
}

impl NewYearRecord {
    /// `YYYY/<Roman month>/DD <weekday>`, e.g. `2025/III/01 Бямба`.
    pub fn date_label(&self) -> String {
        format!(
            "{}/{}/{:02} {}",
            self.date.year,
            roman_month(self.date.month),
            self.date.day,
            weekday_name(self.day.weekday)
        )
    }

    /// `<Roman month>/DD - HHц MMм` in civil time, e.g. `II/28 - 08ц 46м`.
    pub fn new_moon_label(&self) -> Option<String> {
        self.new_moon.civil().map(|civil| {
            format!(
                "{}/{:02} - {:02}ц {:02}м",
                roman_month(civil.month()),
                civil.day(),
                civil.hour(),
                civil.minute()
            )
        })
    }
}

impl fmt::Display for NewYearRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.year)?;
        write!(
            f,
            "Цагаан сар: {}, {} {} өдөр",
            self.date_label(),
            self.day.stem.colour(),
            self.day.animal.name()
        )?;
        if let Some(label) = self.new_moon_label() {
            write!(f, "\nШинийн нэгэн: {label}")?;
        }
        Ok(())
    }
}
