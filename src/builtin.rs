//! Built-in town-name generators used when no grammar source is selected.
//!
//! Each generator slices the 32-bit seed into overlapping 16-bit windows and
//! scales them onto fixed word tables, so a seed always maps to one name.

use crate::grammar::extract_bits;

/// Source id that selects the built-in generators.
pub const BUILTIN_SOURCE_ID: u32 = 0;
/// Built-in style used whenever a requested style cannot be resolved.
pub const DEFAULT_BUILTIN_STYLE: u16 = BuiltinStyle::DEFAULT as u16;
/// Number of built-in styles ahead of the grammar styles in the flat setting.
pub const BUILTIN_STYLE_COUNT: u16 = BuiltinStyle::ALL.len() as u16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinStyle {
    English = 0,
    EnglishAdditional = 1,
}

impl BuiltinStyle {
    pub const ALL: [BuiltinStyle; 2] = [BuiltinStyle::English, BuiltinStyle::EnglishAdditional];
    pub const DEFAULT: BuiltinStyle = BuiltinStyle::English;

    pub fn from_index(index: u16) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            BuiltinStyle::English => "English (Original)",
            BuiltinStyle::EnglishAdditional => "English (Additional)",
        }
    }

    pub fn generate(self, seed: u32) -> String {
        match self {
            BuiltinStyle::English => english_name(seed),
            BuiltinStyle::EnglishAdditional => english_additional_name(seed),
        }
    }
}

/// Scale 16 bits of `seed` starting at `shift` onto `0..max`.
pub fn seed_chance(shift: u8, max: usize, seed: u32) -> usize {
    (extract_bits(seed, shift, 16) as usize * max) >> 16
}

/// Like [`seed_chance`] over `max + bias` values, shifted down by `bias`.
/// Negative results mean "skip this optional segment".
pub fn seed_chance_bias(shift: u8, max: usize, seed: u32, bias: usize) -> isize {
    seed_chance(shift, max + bias, seed) as isize - bias as isize
}

fn optional<'a>(table: &[&'a str], shift: u8, seed: u32, bias: usize) -> Option<&'a str> {
    usize::try_from(seed_chance_bias(shift, table.len(), seed, bias))
        .ok()
        .map(|i| table[i])
}

fn pick<'a>(table: &[&'a str], shift: u8, seed: u32) -> &'a str {
    table[seed_chance(shift, table.len(), seed)]
}

// --- English (Original): optional prefix, three syllables, optional suffix ---

const ENGLISH_PREFIXES: &[&str] = &[
    "Great ", "Little ", "New ", "Old ", "Upper ", "Lower ", "East ", "West ", "North ",
    "South ", "Market ",
];

const ENGLISH_FIRST: &[&str] = &[
    "Bar", "Bor", "Bra", "Cal", "Can", "Cir", "Dar", "Dra", "Dre", "Fal", "Fra", "Gra", "Gre",
    "Hal", "Ham", "Kir", "Lan", "Mar", "Nor", "Pen", "Sta", "Wra", "Wes",
];

const ENGLISH_MIDDLE: &[&str] = &[
    "t", "r", "n", "h", "g", "ch", "sh", "m", "l", "w", "d", "b", "s", "ck", "th",
];

const ENGLISH_LAST: &[&str] = &[
    "ington", "ford", "bury", "ton", "ham", "wick", "ley", "field", "worth", "borough",
    "minster", "stead", "well", "combe", "den", "by",
];

const ENGLISH_SUFFIXES: &[&str] = &[
    " Cross", " Bridge", " Green", " Heath", " Hill", " Falls", " Springs", " Market",
];

fn english_name(seed: u32) -> String {
    let mut name = String::new();
    if let Some(prefix) = optional(ENGLISH_PREFIXES, 0, seed, 50) {
        name.push_str(prefix);
    }
    name.push_str(pick(ENGLISH_FIRST, 4, seed));
    name.push_str(pick(ENGLISH_MIDDLE, 8, seed));
    name.push_str(pick(ENGLISH_LAST, 12, seed));
    if let Some(suffix) = optional(ENGLISH_SUFFIXES, 16, seed, 60) {
        name.push_str(suffix);
    }

    if name.starts_with("Ce") || name.starts_with("Ci") {
        name.replace_range(..1, "K");
    }
    replace_english_words(&mut name, true);
    name
}

// --- English (Additional): one word or three fragments, then an ending ---

const ADDITIONAL_PREFIXES: &[&str] = &[
    "Great ", "Little ", "Upper ", "Lower ", "Nether ", "Kings ", "Bishops ",
];

const ADDITIONAL_WORDS: &[&str] = &[
    "Ash", "Bright", "Cold", "Fair", "Green", "High", "Long", "Mill", "Red", "Stone", "White",
    "Wood",
];

const ADDITIONAL_OPENINGS: &[&str] = &[
    "Bl", "Br", "C", "Cr", "D", "Dr", "F", "Fr", "Gr", "H", "L", "M", "N", "P", "St", "W", "Wr",
];

const ADDITIONAL_VOWELS: &[&str] = &["a", "e", "i", "o", "ay", "ee", "oo"];

const ADDITIONAL_SOFT_CODAS: &[&str] = &["n", "r", "l", "ll", "m", "nd", "rk", "st", "th"];

const ADDITIONAL_HARD_CODAS: &[&str] = &["ck", "ff", "sh", "g", "t"];

const ADDITIONAL_ENDINGS: &[&str] = &[
    "ton", "ford", "bury", "ham", "wick", "ley", "field", "worth", "den", "by", "mouth", "stone",
    "well", "ing",
];

const ADDITIONAL_SUFFIXES: &[&str] = &[
    " Cross", " Green", " Heath", " Hill", " Market", " on Sea", " Bridge",
];

fn english_additional_name(seed: u32) -> String {
    let mut name = String::new();
    if let Some(prefix) = optional(ADDITIONAL_PREFIXES, 0, seed, 50) {
        name.push_str(prefix);
    }
    if seed_chance(3, 20, seed) >= 14 {
        name.push_str(pick(ADDITIONAL_WORDS, 6, seed));
    } else {
        name.push_str(pick(ADDITIONAL_OPENINGS, 6, seed));
        name.push_str(pick(ADDITIONAL_VOWELS, 9, seed));
        if seed_chance(11, 20, seed) >= 4 {
            name.push_str(pick(ADDITIONAL_SOFT_CODAS, 12, seed));
        } else {
            name.push_str(pick(ADDITIONAL_HARD_CODAS, 12, seed));
        }
    }
    name.push_str(pick(ADDITIONAL_ENDINGS, 14, seed));
    if let Some(suffix) = optional(ADDITIONAL_SUFFIXES, 15, seed, 60) {
        name.push_str(suffix);
    }

    replace_english_words(&mut name, false);
    name
}

/// Four-letter openings rewritten at the start of a generated name.
const ENGLISH_REPLACEMENTS: &[(&str, &str)] = &[
    ("Cunt", "East"),
    ("Slag", "Pits"),
    ("Slut", "Edin"),
    ("Drar", "Quar"),
    ("Dreh", "Bash"),
    ("Frar", "Shor"),
    ("Grar", "Aber"),
    ("Brar", "Over"),
];

/// Rewrite an unwanted opening. `original` selects the English (Original)
/// variant, which never produces "Fart" and renames "Wrar" differently.
fn replace_english_words(name: &mut String, original: bool) {
    let extra: &[(&str, &str)] = if original {
        &[("Wrar", "Inve")]
    } else {
        &[("Fart", "Boot"), ("Wrar", "Stan")]
    };
    for (from, to) in ENGLISH_REPLACEMENTS.iter().chain(extra) {
        if name.starts_with(from) {
            name.replace_range(..from.len(), to);
        }
    }
}
