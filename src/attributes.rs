// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Tsagalbar contributors

//! Cyclic attributes of days, months and years.
//!
//! Every attribute is a fixed offset and modulus applied to a day number, a
//! lunar year, or a `(year, month)` pair.  Residues follow the calendar's
//! 1-based convention through [`amod`]: a zero residue maps to the modulus.
//!
//! | Attribute | Day (JDN `j`) | Month (`Y`, `M`) | Year (`Y`) |
//! |-----------|---------------|------------------|------------|
//! | animal    | `amod(j + 2, 12)` | `(M + 1) mod 12` (0-based) | `amod(Y − 3, 12)` |
//! | stem      | `amod(j, 10)` | from the element `amod(Y − 2 + ⌊(M−1)/2⌋, 5)` | `amod(Y − 3, 10)` |
//! | mingle    | `amod(−j, 9)` | `amod(3 − 12Y − M, 9)` | `amod(2 − Y, 9)` |
//! | trigram   | `amod(j + 2, 8)` | | |

use std::fmt;

use chrono::Weekday;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::julian_day::JulianDayNumber;
use crate::lunar_month::LunarMonth;
use crate::tables::{
    ANIMALS, ANIMALS_ATTRIBUTIVE, CYCLE_NAMES, ELEMENTS, MINGLE_COLOURS, MONTH_NAMES, NUMERALS,
    STEM_COLOURS, TRIGRAMS,
};

/// Modulus with the calendar's 1-based residues: the result lies in
/// `1..=modulus`, and multiples of `modulus` map to `modulus` itself.
///
/// # Examples
///
/// ```
/// use tsagalbar::amod;
///
/// assert_eq!(amod(12, 12), 12);
/// assert_eq!(amod(13, 12), 1);
/// assert_eq!(amod(-1, 9), 8);
/// ```
#[inline]
pub fn amod(value: i64, modulus: i64) -> i64 {
    let r = value.rem_euclid(modulus);
    if r == 0 {
        modulus
    } else {
        r
    }
}

/// [`amod`] narrowed to a table index; every modulus used here fits in `u8`.
#[inline]
fn amod_u8(value: i64, modulus: i64) -> u8 {
    amod(value, modulus) as u8
}

// ═══════════════════════════════════════════════════════════════════════════
// Value types
// ═══════════════════════════════════════════════════════════════════════════

/// Checked `u8` conversions for a cyclic newtype holding `$min..=$max`.
macro_rules! impl_u8_conversions {
    ($ty:ident, $attribute:literal, $min:literal, $max:literal) => {
        impl TryFrom<u8> for $ty {
            type Error = CalendarError;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                if ($min..=$max).contains(&value) {
                    Ok(Self(value))
                } else {
                    Err(CalendarError::AttributeOutOfRange {
                        attribute: $attribute,
                        value,
                        min: $min,
                        max: $max,
                    })
                }
            }
        }

        impl From<$ty> for u8 {
            #[inline]
            fn from(value: $ty) -> Self {
                value.0
            }
        }
    };
}

/// One of the twelve animals, 0-based (`0` = mouse).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Animal(u8);

impl Animal {
    /// Animal with 0-based index `index mod 12`.
    pub const fn from_index(index: u8) -> Self {
        Self(index % 12)
    }

    /// 0-based index.
    pub const fn index(self) -> u8 {
        self.0
    }

    /// 1-based number of the animal's image asset.
    pub const fn image_number(self) -> u8 {
        self.0 + 1
    }

    /// Nominative name ("луу").
    pub fn name(self) -> &'static str {
        ANIMALS[self.0 as usize]
    }

    /// Attributive form used in year names ("морин").
    pub fn attributive(self) -> &'static str {
        ANIMALS_ATTRIBUTIVE[self.0 as usize]
    }
}

impl_u8_conversions!(Animal, "animal", 0, 11);

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The five elements in stem order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// Element number `n` in `1..=5`, wrapping with [`amod`].
    pub fn from_number(n: i64) -> Self {
        Self::ALL[amod(n, 5) as usize - 1]
    }

    /// 1-based number.
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Mongolian name ("модон").
    pub fn name(self) -> &'static str {
        ELEMENTS[self as usize]
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the ten stems, 1-based; stems `2k − 1` and `2k` share element `k`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Stem(u8);

impl Stem {
    /// Stem `amod(n, 10)`.
    pub fn from_number(n: i64) -> Self {
        Self(amod_u8(n, 10))
    }

    /// 1-based number.
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Colour ("хөх", "хөхөгчин", …).
    pub fn colour(self) -> &'static str {
        STEM_COLOURS[self.0 as usize - 1]
    }

    /// Element shared by this stem and its pair.
    pub fn element(self) -> Element {
        Element::from_number((self.0 as i64 + 1) / 2)
    }
}

impl_u8_conversions!(Stem, "stem", 1, 10);

/// One of the nine mingle (мэнгэ) numbers, 1-based.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Mingle(u8);

impl Mingle {
    /// Mingle `amod(n, 9)`.
    pub fn from_number(n: i64) -> Self {
        Self(amod_u8(n, 9))
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    /// Attributive numeral ("зургаан").
    pub fn numeral(self) -> &'static str {
        NUMERALS[self.0 as usize - 1]
    }

    pub fn colour(self) -> &'static str {
        MINGLE_COLOURS[self.0 as usize - 1]
    }
}

impl_u8_conversions!(Mingle, "mingle", 1, 9);

impl fmt::Display for Mingle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.numeral(), self.colour())
    }
}

/// One of the eight trigram seats (суудал), 1-based.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Trigram(u8);

impl Trigram {
    pub fn from_number(n: i64) -> Self {
        Self(amod_u8(n, 8))
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        TRIGRAMS[self.0 as usize - 1]
    }
}

impl_u8_conversions!(Trigram, "trigram", 1, 8);

// ═══════════════════════════════════════════════════════════════════════════
// Day
// ═══════════════════════════════════════════════════════════════════════════

/// Attributes of a civil day, derived from its day number alone.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DayAttributes {
    pub animal: Animal,
    pub stem: Stem,
    pub element: Element,
    pub mingle: Mingle,
    pub trigram: Trigram,
    pub weekday: Weekday,
}

impl DayAttributes {
    /// Attributes of civil day `jdn`.
    ///
    /// ```
    /// use tsagalbar::{DayAttributes, gregorian_to_jdn};
    ///
    /// let day = DayAttributes::from_jdn(gregorian_to_jdn(2024, 2, 10));
    /// assert_eq!(day.animal.name(), "луу");
    /// assert_eq!(day.stem.colour(), "хөх");
    /// ```
    pub fn from_jdn(jdn: JulianDayNumber) -> Self {
        let j = jdn.value();
        let stem = Stem::from_number(j);
        Self {
            animal: Animal::from_index(amod_u8(j + 2, 12) - 1),
            stem,
            element: stem.element(),
            mingle: Mingle::from_number(-j),
            trigram: Trigram::from_number(j + 2),
            weekday: jdn.weekday(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Month
// ═══════════════════════════════════════════════════════════════════════════

/// Attributes of a lunar month.
///
/// The inserted copy of a doubled month shares every attribute with the
/// regular month; only its name carries the "(илүү)" marker.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MonthAttributes {
    pub month: LunarMonth,
    pub animal: Animal,
    pub stem: Stem,
    pub element: Element,
    pub mingle: Mingle,
}

impl MonthAttributes {
    pub fn new(month: LunarMonth) -> Self {
        let (y, m) = (month.year as i64, month.month as i64);
        let element = Element::from_number(y - 2 + (m - 1) / 2);
        let stem = Stem::from_number(2 * (element.number() as i64 - 1) + (m - 1) % 2 + 1);
        Self {
            month,
            animal: Animal::from_index(((m + 1).rem_euclid(12)) as u8),
            stem,
            element,
            mingle: Mingle::from_number(3 - 12 * y - m),
        }
    }

    /// Seasonal name ("Хаврын тэргүүн сар"), followed by " (илүү)" for the
    /// inserted copy of a doubled month.
    pub fn name(&self) -> String {
        let base = MONTH_NAMES[(self.month.month as usize + 11) % 12];
        if self.month.is_leap {
            format!("{base} (илүү)")
        } else {
            base.to_string()
        }
    }
}

impl fmt::Display for MonthAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} мэнгэтэй, {} {} сар",
            self.name(),
            self.mingle,
            self.stem.colour(),
            self.animal.name()
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Year
// ═══════════════════════════════════════════════════════════════════════════

/// First year of the first sixty-year cycle, counted with the 1-based rule
/// `cycle = ⌈(Y − 1026) / 60⌉`.
const CYCLE_ORIGIN: i64 = 1026;

/// Attributes of a lunar year.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct YearAttributes {
    pub year: i32,
    /// Position inside the sixty-year cycle, 1..=60.
    pub cycle_position: u8,
    /// Ordinal of the sixty-year cycle (жаран).
    pub cycle: i64,
    pub animal: Animal,
    pub stem: Stem,
    pub element: Element,
    pub mingle: Mingle,
}

impl YearAttributes {
    /// ```
    /// use tsagalbar::YearAttributes;
    ///
    /// let year = YearAttributes::new(2024);
    /// assert_eq!((year.cycle, year.cycle_position), (17, 38));
    /// assert_eq!(year.animal.name(), "луу");
    /// ```
    pub fn new(year: i32) -> Self {
        let y = year as i64;
        let stem = Stem::from_number(y - 3);
        Self {
            year,
            cycle_position: amod_u8(y - 6, 60),
            cycle: (y - CYCLE_ORIGIN + 59).div_euclid(60),
            animal: Animal::from_index(amod_u8(y - 3, 12) - 1),
            stem,
            element: stem.element(),
            mingle: Mingle::from_number(2 - y),
        }
    }

    /// Traditional name of the year inside its cycle.
    pub fn cycle_name(&self) -> &'static str {
        CYCLE_NAMES[amod(self.cycle_position as i64, 60) as usize - 1]
    }
}

impl fmt::Display for YearAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-р жарны {} хэмээх {} {} жил",
            self.cycle,
            self.cycle_name(),
            self.stem.colour(),
            self.animal.attributive()
        )
    }
}
