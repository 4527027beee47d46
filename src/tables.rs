// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Tsagalbar contributors

//! Fixed name tables of the Mongolian calendar.
//!
//! Every cyclic attribute computed by [`attributes`](crate::attributes) is an
//! index into one of these arrays.  Indices stored in the value types are
//! 1-based where the calendar counts from one (stems, mingle numbers,
//! trigrams, cycle years) and 0-based for animals, matching the image
//! numbering used by consumers.

/// The twelve animals, nominative form.
pub const ANIMALS: [&str; 12] = [
    "хулгана", "үхэр", "барс", "туулай", "луу", "могой", "морь", "хонь", "бич", "тахиа", "нохой",
    "гахай",
];

/// The twelve animals in the attributive form used in year names
/// ("хөх луу жил", "шар морин жил").
pub const ANIMALS_ATTRIBUTIVE: [&str; 12] = [
    "хулгана", "үхэр", "бар", "туулай", "луу", "могой", "морин", "хонин", "бичин", "тахиа", "нохой",
    "гахай",
];

/// The five elements; stems `2k − 1` and `2k` share element `k`.
pub const ELEMENTS: [&str; 5] = ["модон", "гал", "шороон", "төмөр", "усан"];

/// The ten stem colours, alternating full and "-гчин" (feminine) shades.
pub const STEM_COLOURS: [&str; 10] = [
    "хөх",
    "хөхөгчин",
    "улаан",
    "улаагчин",
    "шар",
    "шарагчин",
    "цагаан",
    "цагаагчин",
    "хар",
    "харагчин",
];

/// The eight trigram seats (суудал).
pub const TRIGRAMS: [&str; 8] = ["гал", "шороо", "төмөр", "огторгуй", "ус", "уул", "мод", "хий"];

/// Colours of the nine mingle (мэнгэ) numbers.
pub const MINGLE_COLOURS: [&str; 9] = [
    "цагаан", "хар", "хөх", "ногоон", "шар", "цагаан", "улаан", "цагаан", "улаан",
];

/// Attributive numerals one to nine.
pub const NUMERALS: [&str; 9] = [
    "нэг",
    "хоёр",
    "гурван",
    "дөрвөн",
    "таван",
    "зургаан",
    "долоон",
    "найман",
    "есөн",
];

/// Names of the lunar months: season followed by first, middle, last.
pub const MONTH_NAMES: [&str; 12] = [
    "Хаврын тэргүүн сар",
    "Хаврын дунд сар",
    "Хаврын адаг сар",
    "Зуны тэргүүн сар",
    "Зуны дунд сар",
    "Зуны адаг сар",
    "Намрын тэргүүн сар",
    "Намрын дунд сар",
    "Намрын адаг сар",
    "Өвлийн тэргүүн сар",
    "Өвлийн дунд сар",
    "Өвлийн адаг сар",
];

/// Weekday names, Sunday first.
pub const WEEKDAYS: [&str; 7] = ["Ням", "Даваа", "Мягмар", "Лхагва", "Пүрэв", "Баасан", "Бямба"];

/// Roman numerals used for Gregorian months in the new-year summary.
pub const ROMAN_MONTHS: [&str; 12] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII",
];

/// Names of the sixty years of a cycle (жаран), first year first.
pub const CYCLE_NAMES: [&str; 60] = [
    "Төрөлт",
    "Бүрэн төрөлт",
    "Цагаан",
    "Ихэд баясгалант",
    "Ард олны эзэн",
    "Ангирас",
    "Цогт нүүрт",
    "Бодит",
    "Залуу",
    "Бүтээгч",
    "Эрхт",
    "Олон үрт",
    "Согтуу",
    "Давшигч",
    "Бух",
    "Алаг",
    "Нарт",
    "Гэтэлгэгч",
    "Газар тэтгэгч",
    "Барагдашгүй",
    "Бүгдийг номхотгогч",
    "Бүгдийг баригч",
    "Харшлагч",
    "Бүрэн хувирагч",
    "Илжиг",
    "Баясгалан",
    "Бүрэн ялагч",
    "Ялагч",
    "Согтоогч",
    "Муу нүүрт",
    "Алтан унжлагат",
    "Бүрэн унжлагат",
    "Хувилгагч",
    "Бүхнийг агуулагч",
    "Дэвшигч",
    "Буян үйлдэгч",
    "Үзэсгэлэн үйлдэгч",
    "Хилэнт",
    "Олон эрдэнэт",
    "Дарагдагч",
    "Сармагчин",
    "Шаантаг",
    "Амгалан",
    "Энгийн",
    "Харш үйлдэгч",
    "Бүрэн баригч",
    "Хайхрамжгүй",
    "Бүх баясгалан",
    "Мангас",
    "Гал",
    "Шаргал",
    "Цагийн элч",
    "Утга бүтээгч",
    "Догшин",
    "Муу оюунт",
    "Их хэнгэрэг",
    "Цус бөөлжигч",
    "Улаан нүдэт",
    "Хилэгнэгч",
    "Барагдал",
];

/// Hair-cutting (үс засуулах) recommendation for each lunar day 1..=30.
pub const HAIR_CUTTING: [&str; 30] = [
    "Нас богиносно",
    "Өвчин эмгэг ихэснэ",
    "Эд мал баялаг төгөлдөр болно",
    "Бие эрхтний хүч сайжирна",
    "Эд мал арвидна",
    "Өнгө зүс муудна",
    "Өнгө зүс сайжирна",
    "Нас уртасна",
    "Эрч хүн ихэснэ",
    "Эрхтэн хурц болно",
    "Жаргал ирнэ",
    "Амь насанд харш",
    "Эд мал арвижина",
    "Өлзийтэй сайн",
    "Сайн нөхөртэй нөхөрлөнө",
    "Өвчин зовлон ирнэ",
    "Идээ ундаа элбэг олдоно",
    "Эд мал хорогдоно",
    "Эд эдлэл идээ ундаа олдоно",
    "Хэрүүл маргаан гарна",
    "Жаргал үргэлжид ирнэ",
    "Хулгайд алдана",
    "Өлзийтэй сайн",
    "Өвчин хуурна",
    "Нүд муудна",
    "Зовлон учирна",
    "Сэтгэл түгшинэ",
    "Хэрүүл тэмцэл гарна",
    "Сүнс алдана",
    "Үхэл хагацал тохиолдоно",
];

/// Recommendations that mark a lucky day for cutting hair.
pub const GOOD_HAIR_CUTTING: [&str; 14] = [
    "Эд мал баялаг төгөлдөр болно",
    "Бие эрхтний хүч сайжирна",
    "Эд мал арвидна",
    "Өнгө зүс сайжирна",
    "Нас уртасна",
    "Эрч хүн ихэснэ",
    "Эрхтэн хурц болно",
    "Жаргал ирнэ",
    "Эд мал арвижина",
    "Өлзийтэй сайн",
    "Сайн нөхөртэй нөхөрлөнө",
    "Идээ ундаа элбэг олдоно",
    "Эд эдлэл идээ ундаа олдоно",
    "Жаргал үргэлжид ирнэ",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_good_recommendation_occurs_in_the_table() {
        for good in GOOD_HAIR_CUTTING {
            assert!(HAIR_CUTTING.contains(&good), "{good}");
        }
    }

    #[test]
    fn half_of_the_lunar_days_are_good_for_hair_cutting() {
        let good = HAIR_CUTTING
            .iter()
            .filter(|r| GOOD_HAIR_CUTTING.contains(r))
            .count();
        assert_eq!(good, 15);
    }

    #[test]
    fn cycle_names_are_distinct() {
        for (i, a) in CYCLE_NAMES.iter().enumerate() {
            for b in &CYCLE_NAMES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
