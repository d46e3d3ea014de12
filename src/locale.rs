//! Month and weekday names for the bundled locales.
//!
//! Tables are plain statics. Weekday tables start on Monday.

use std::str::FromStr;

use jiff::civil::Weekday;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::prelude::*;
use crate::types::Month;

/// Supported display locales
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    #[default]
    #[display(fmt = "en")]
    En,
    /// Amharic
    #[display(fmt = "am")]
    Am,
    /// Afaan Oromo
    #[display(fmt = "om")]
    Om,
    /// Somali
    #[display(fmt = "so")]
    So,
}

/// Length of weekday names
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekdayStyle {
    #[display(fmt = "short")]
    Short,
    #[default]
    #[display(fmt = "long")]
    Long,
    #[display(fmt = "narrow")]
    Narrow,
}

/// A locale tag that is not one of the bundled locales.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported locale: {0:?} (expected one of en, am, om, so)")]
pub struct UnsupportedLocale(pub String);

impl UnsupportedLocale {
    /// The tag as given by the caller
    pub fn tag(&self) -> &str {
        &self.0
    }
}

struct WeekdayNames {
    short:  [&'static str; 7],
    long:   [&'static str; 7],
    narrow: [&'static str; 7],
}

static MONTH_NAMES: [[&str; 13]; 4] = [
    // en: Gregorian names of the months each Ethiopian month mostly overlaps
    [
        "September", "October", "November", "December", "January", "February", "March", "April",
        "May", "June", "July", "August", "Pagume",
    ],
    // am
    [
        "መስከረም", "ጥቅምት", "ህዳር", "ታኅሣሥ", "ጥር", "የካቲት", "መጋቢት", "ሚያዝያ", "ግንቦት", "ሰኔ", "ሐምሌ",
        "ነሐሴ", "ጳጉሜን",
    ],
    // om
    [
        "Fulbaana", "Onkololeessa", "Sadaasa", "Muddee", "Amajjii", "Guraandhala", "Bitootessa",
        "Ebla", "Caamsa", "Waxabajjii", "Adoolessa", "Hagayya", "Pagumee",
    ],
    // so
    [
        "Sebteembar", "Oktoobar", "Noofembar", "Diseembar", "Janaayo", "Febraayo", "Maarso",
        "Abriil", "Maajo", "Juun", "Luuliyo", "Agoosto", "Pagume",
    ],
];

static WEEKDAY_NAMES: [WeekdayNames; 4] = [
    WeekdayNames {
        short:  ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        long:   [
            "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
        ],
        narrow: ["M", "T", "W", "T", "F", "S", "S"],
    },
    WeekdayNames {
        short:  ["ሰኞ", "ማክሰ", "ረቡ", "ሐሙ", "ዓርብ", "ቅዳ", "እሑ"],
        long:   ["ሰኞ", "ማክሰኞ", "ረቡዕ", "ሐሙስ", "ዓርብ", "ቅዳሜ", "እሑድ"],
        narrow: ["ሰ", "ማ", "ረ", "ሐ", "ዓ", "ቅ", "እ"],
    },
    WeekdayNames {
        short:  ["Wiix", "Kibx", "Roob", "Kami", "Jima", "Sanb", "Dilb"],
        long:   [
            "Wiixata", "Kibxata", "Roobii", "Kamiisa", "Jimaata", "Sanbata", "Dilbata",
        ],
        narrow: ["W", "K", "R", "K", "J", "S", "D"],
    },
    WeekdayNames {
        short:  ["Isn", "Tal", "Arb", "Kha", "Jim", "Sab", "Axa"],
        long:   ["Isniin", "Talaado", "Arbaco", "Khamiis", "Jimco", "Sabti", "Axad"],
        narrow: ["I", "T", "A", "K", "J", "S", "A"],
    },
];

/// Latin transliterations of the Ge'ez month names
static TRANSLITERATED_MONTH_NAMES: [&str; 13] = [
    "Meskerem", "Tikimt", "Hidar", "Tahsas", "Tir", "Yekatit", "Megabit", "Miyazia", "Ginbot",
    "Sene", "Hamle", "Nehasse", "Pagume",
];

impl Locale {
    /// Every bundled locale
    pub const ALL: [Self; 4] = [Self::En, Self::Am, Self::Om, Self::So];

    /// Resolves a locale tag, substituting English for anything unsupported.
    ///
    /// The fallback is not an error: it is logged and handed back so the
    /// caller can surface it.
    pub fn resolve(tag: &str) -> (Self, Option<UnsupportedLocale>) {
        match tag.parse::<Self>() {
            Ok(locale) => (locale, None),
            Err(unsupported) => {
                let fallback = Self::default();
                warn!(tag, %fallback, "unsupported locale, using fallback");
                (fallback, Some(unsupported))
            }
        }
    }

    const fn table_index(self) -> usize {
        match self {
            Self::En => 0,
            Self::Am => 1,
            Self::Om => 2,
            Self::So => 3,
        }
    }

    /// The 13 month names, Meskerem first
    pub fn month_names(self) -> &'static [&'static str; 13] {
        &MONTH_NAMES[self.table_index()]
    }

    pub fn month_name(self, month: Month) -> &'static str {
        self.month_names()[month.index()]
    }

    /// The 7 weekday names, Monday first
    pub fn weekday_names(self, style: WeekdayStyle) -> &'static [&'static str; 7] {
        let names = &WEEKDAY_NAMES[self.table_index()];
        match style {
            WeekdayStyle::Short => &names.short,
            WeekdayStyle::Long => &names.long,
            WeekdayStyle::Narrow => &names.narrow,
        }
    }

    pub fn weekday_name(self, weekday: Weekday, style: WeekdayStyle) -> &'static str {
        self.weekday_names(style)[monday_first_index(weekday)]
    }
}

/// Position of a weekday in the Monday-first tables
fn monday_first_index(weekday: Weekday) -> usize {
    // Sunday is 0 in the Sunday-first numbering and 6 here
    let sunday_first = usize::from(weekday.to_sunday_zero_offset().unsigned_abs());
    (sunday_first + 6) % 7
}

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    /// Accepts the bare language code, case-insensitively, with or without a
    /// region subtag (`am`, `AM`, `am-ET`, `om_ET`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = s.trim().split(['-', '_']).next().unwrap_or_default();

        match language.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "am" => Ok(Self::Am),
            "om" => Ok(Self::Om),
            "so" => Ok(Self::So),
            _ => Err(UnsupportedLocale(s.to_owned())),
        }
    }
}

/// Latin transliteration of an Ethiopian month name (`Meskerem` for month 1)
pub fn transliterated_month_name(month: Month) -> &'static str {
    TRANSLITERATED_MONTH_NAMES[month.index()]
}

/// Maps a transliterated Ethiopian month name to the English table entry,
/// e.g. `Meskerem` to `September`. Matching ignores ASCII case.
pub fn english_month_for_transliterated(name: &str) -> Option<&'static str> {
    let name = name.trim();
    TRANSLITERATED_MONTH_NAMES
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(name))
        .map(|index| Locale::En.month_names()[index])
}
