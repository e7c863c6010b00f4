//! Built-in substitution data and the [`SubstitutionTable`] type.
//!
//! The built-in rows are grouped by the script they cover. Every key is a
//! single lowercase (or caseless) non-ASCII code point; every replacement is
//! pure ASCII, possibly empty. Uppercase input is handled at lookup time by
//! the mapper, so the data never stores capital rows.
//!
//! The groups are disjoint by construction. Where scripts compete for a code
//! point (German umlauts vs. their single-vowel Estonian readings), exactly
//! one group carries the row; an audit test pins the winner.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::error::{LitteraError, Result};

type Rows = &'static [(char, &'static str)];

/// Latin-1 supplement punctuation and ligatures. Both guillemets read as a
/// plain double quote.
#[rustfmt::skip]
static LATIN_SUPPLEMENT: Rows = &[
    ('œ', "oe"), ('ª', "a"), ('º', "o"), ('«', "\""), ('»', "\""),
];

/// Scandinavian vowels.
#[rustfmt::skip]
static SCANDINAVIAN: Rows = &[
    ('æ', "ae"), ('ø', "oe"), ('å', "aa"),
];

/// German umlauts and sharp s. The digraph spellings win over the Estonian
/// single-vowel readings of the same code points.
#[rustfmt::skip]
static GERMAN: Rows = &[
    ('ä', "ae"), ('ö', "oe"), ('ü', "ue"), ('ß', "ss"),
];

/// Russian Cyrillic.
#[rustfmt::skip]
static RUSSIAN: Rows = &[
    ('а', "a"),  ('б', "b"),  ('в', "v"),   ('г', "g"),  ('д', "d"), ('е', "e"), ('ё', "jo"), ('ж', "zh"),
    ('з', "z"),  ('и', "i"),  ('й', "jj"),  ('к', "k"),  ('л', "l"), ('м', "m"), ('н', "n"),  ('о', "o"),
    ('п', "p"),  ('р', "r"),  ('с', "s"),   ('т', "t"),  ('у', "u"), ('ф', "f"), ('х', "kh"), ('ц', "c"),
    ('ч', "ch"), ('ш', "sh"), ('щ', "shh"), ('ъ', "\""), ('ы', "y"), ('ь', "'"), ('э', "eh"), ('ю', "ju"),
    ('я', "ja"),
];

/// Hebrew, including the five final forms.
#[rustfmt::skip]
static HEBREW: Rows = &[
    ('א', "a"),  ('ב', "b"),  ('ג', "g"),  ('ד', "d"),  ('ה', "h"),  ('ו', "u"),
    ('ז', "z"),  ('ח', "kh"), ('ט', "t"),  ('י', "y"),  ('כ', "c"),  ('ל', "l"),
    ('מ', "m"),  ('נ', "n"),  ('ס', "s"),  ('ע', "'"),  ('פ', "p"),  ('צ', "ts"),
    ('ק', "k"),  ('ר', "r"),  ('ש', "sh"), ('ת', "th"), ('ף', "f"),  ('ץ', "ts"),
    ('ך', "ch"), ('ם', "m"),  ('ן', "n"),
];

/// Greek, lowercase rows only (capitals derive via case reconstruction).
#[rustfmt::skip]
static GREEK: Rows = &[
    ('α', "a"), ('ά', "a"), ('β', "v"),  ('γ', "g"), ('δ', "d"),  ('ε', "e"), ('έ', "e"),  ('ζ', "z"), ('η', "i"),
    ('ή', "i"), ('θ', "th"),('ι', "i"),  ('ί', "i"), ('ϊ', "i"),  ('ΐ', "i"), ('κ', "k"),  ('λ', "l"), ('μ', "m"),
    ('ν', "n"), ('ξ', "ks"),('ο', "o"),  ('ό', "o"), ('π', "p"),  ('ρ', "r"), ('σ', "s"),  ('ς', "s"), ('τ', "t"),
    ('υ', "y"), ('ύ', "y"), ('ϋ', "y"),  ('ΰ', "y"), ('φ', "f"),  ('χ', "ch"),('ψ', "ps"), ('ω', "o"), ('ώ', "o"),
];

/// Ukrainian Cyrillic letters absent from the Russian set.
#[rustfmt::skip]
static UKRAINIAN: Rows = &[
    ('ґ', "gh"), ('є', "je"), ('і', "i"), ('ї', "ji"),
];

/// Arabic letters, hamza forms and Eastern Arabic digits. Sounds ASCII
/// cannot spell use the chat-alphabet digit conventions.
#[rustfmt::skip]
static ARABIC: Rows = &[
    ('ا', "a"),  ('ب', "b"), ('ت', "t"),  ('ث', "th"), ('ج', "j"),  ('ح', "7"),
    ('خ', "5"),  ('د', "d"), ('ذ', "th"), ('ر', "r"),  ('ز', "z"),  ('س', "s"),
    ('ش', "sh"), ('ص', "9"), ('ض', "9'"), ('ط', "6"),  ('ظ', "6'"), ('ع', "3"),
    ('غ', "3'"), ('ف', "f"), ('ق', "q"),  ('ك', "k"),  ('ل', "l"),  ('م', "m"),
    ('ن', "n"),  ('ه', "h"), ('و', "w"),  ('ي', "y"),  ('ى', "a"),
    ('\u{FE93}', ""), // teh marbuta, isolated presentation form
    ('آ', "2"), ('ئ', "2"), ('إ', "2"), ('ؤ', "2"), ('أ', "2"), ('ء', "2"),
    ('٠', "0"), ('١', "1"), ('٢', "2"), ('٣', "3"), ('٤', "4"), ('٥', "5"),
    ('٦', "6"), ('٧', "7"), ('٨', "8"), ('٩', "9"),
];

/// Persian letters absent from the Arabic set, Extended Arabic-Indic digits,
/// punctuation and short vowels.
#[rustfmt::skip]
static PERSIAN: Rows = &[
    ('پ', "p"), ('چ', "ch"), ('ژ', "zh"), ('ک', "k"), ('گ', "g"), ('ی', "y"),
    ('\u{200C}', " "), // zero-width non-joiner separates words on ASCII displays
    ('؟', "?"), ('٪', "%"), ('؛', ";"), ('،', ","),
    ('۰', "0"), ('۱', "1"), ('۲', "2"), ('۳', "3"), ('۴', "4"),
    ('۵', "5"), ('۶', "6"), ('۷', "7"), ('۸', "8"), ('۹', "9"),
    ('\u{0650}', "e"), // kasra
    ('\u{064E}', "a"), // fatha
    ('\u{064F}', "o"), // damma
    ('\u{0651}', ""),  // shadda
];

/// Polish.
#[rustfmt::skip]
static POLISH: Rows = &[
    ('ł', "l"),
];

/// Lithuanian.
#[rustfmt::skip]
static LITHUANIAN: Rows = &[
    ('ą', "a"), ('č', "c"), ('ę', "e"), ('ė', "e"), ('į', "i"),
    ('š', "s"), ('ų', "u"), ('ū', "u"), ('ž', "z"),
];

/// Estonian. Only `õ` lives here; `ä`, `ö` and `ü` are carried by the German
/// group with digraph replacements.
#[rustfmt::skip]
static ESTONIAN: Rows = &[
    ('õ', "o"),
];

/// Icelandic.
#[rustfmt::skip]
static ICELANDIC: Rows = &[
    ('þ', "th"), ('ð', "d"),
];

/// Czech (also covers the plain acute vowels shared across Latin scripts).
#[rustfmt::skip]
static CZECH: Rows = &[
    ('ř', "r"), ('ě', "e"), ('ý', "y"), ('á', "a"), ('í', "i"), ('é', "e"),
    ('ó', "o"), ('ú', "u"), ('ů', "u"), ('ď', "d"), ('ť', "t"), ('ň', "n"),
];

/// Every built-in group, in source order.
pub(crate) static GROUPS: &[Rows] = &[
    LATIN_SUPPLEMENT,
    SCANDINAVIAN,
    GERMAN,
    RUSSIAN,
    HEBREW,
    GREEK,
    UKRAINIAN,
    ARABIC,
    PERSIAN,
    POLISH,
    LITHUANIAN,
    ESTONIAN,
    ICELANDIC,
    CZECH,
];

/// Immutable map from a single code point to its ASCII replacement.
///
/// Keys are stored in lowercase form only; the mapper derives uppercase
/// behaviour at lookup time. Construction validates caller rows and fails
/// loudly rather than repairing them, so a built table always upholds the
/// key and replacement invariants.
pub struct SubstitutionTable {
    entries: HashMap<char, Cow<'static, str>>,
}

impl SubstitutionTable {
    /// Shared built-in table. Built once per process, then handed out as
    /// cheap `Arc` clones.
    pub fn builtin() -> Arc<SubstitutionTable> {
        static BUILTIN: OnceLock<Arc<SubstitutionTable>> = OnceLock::new();
        Arc::clone(BUILTIN.get_or_init(|| Arc::new(SubstitutionTable::from_groups())))
    }

    fn from_groups() -> Self {
        let mut entries =
            HashMap::with_capacity(GROUPS.iter().map(|rows| rows.len()).sum());
        for rows in GROUPS {
            for &(ch, replacement) in *rows {
                debug_assert!(validate_key(ch).is_ok(), "bad built-in key {ch:?}");
                debug_assert!(replacement.is_ascii(), "non-ASCII replacement for {ch:?}");
                let previous = entries.insert(ch, Cow::Borrowed(replacement));
                debug_assert!(previous.is_none(), "duplicate built-in key {ch:?}");
            }
        }
        Self { entries }
    }

    /// Built-in rows plus validated caller rows.
    ///
    /// A caller row may replace a built-in row for the same code point, but
    /// duplicates within `overrides` itself are rejected.
    ///
    /// # Errors
    /// [`LitteraError::AsciiKey`], [`LitteraError::KeyNotLowercase`],
    /// [`LitteraError::ReplacementNotAscii`] or
    /// [`LitteraError::DuplicateMapping`] on the first offending row.
    pub fn with_overrides(overrides: &[(char, String)]) -> Result<SubstitutionTable> {
        let mut table = Self::from_groups();
        let mut seen = HashSet::with_capacity(overrides.len());
        for (ch, replacement) in overrides {
            validate_key(*ch)?;
            if !replacement.is_ascii() {
                return Err(LitteraError::ReplacementNotAscii { ch: *ch });
            }
            if !seen.insert(*ch) {
                return Err(LitteraError::DuplicateMapping { ch: *ch });
            }
            table.entries.insert(*ch, Cow::Owned(replacement.clone()));
        }
        Ok(table)
    }

    /// Replacement for `ch`, if a row exists. Callers lower the character
    /// first; this is a plain probe.
    pub fn lookup(&self, ch: char) -> Option<&str> {
        self.entries.get(&ch).map(Cow::as_ref)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for SubstitutionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubstitutionTable")
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}

/// A key must be a non-ASCII code point that is its own single-code-point
/// lowercase form. Caseless scripts (Hebrew, Arabic) satisfy this trivially.
fn validate_key(ch: char) -> Result<()> {
    if ch.is_ascii() {
        return Err(LitteraError::AsciiKey { ch });
    }
    let mut lowered = ch.to_lowercase();
    match (lowered.next(), lowered.next()) {
        (Some(l), None) if l == ch => Ok(()),
        _ => Err(LitteraError::KeyNotLowercase { ch }),
    }
}
