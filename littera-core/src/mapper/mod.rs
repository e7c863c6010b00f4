//! Per-character substitution against a static lookup table.
//!
//! ## Design
//!
//! Lookup lowers the character first and probes the lowercase-keyed table.
//! When the original was not lowercase, the replacement comes back with only
//! its first letter uppercased (`ж → "zh"`, `Ж → "Zh"`). Storing one row per
//! letter and reconstructing case at lookup time keeps capitals working
//! without a parallel capital table, and keeps digraph replacements readable
//! in mid-word capitals (`Øl → "Oel"`, not `"OEl"`).

pub mod table;

use std::sync::Arc;

pub use table::SubstitutionTable;

/// Maps individual characters to ASCII replacements.
///
/// Cloning is cheap; the table sits behind an `Arc`.
#[derive(Debug, Clone)]
pub struct CharacterMapper {
    table: Arc<SubstitutionTable>,
}

impl CharacterMapper {
    /// Mapper over the shared built-in table.
    pub fn new() -> Self {
        Self {
            table: SubstitutionTable::builtin(),
        }
    }

    /// Mapper over a caller-built table.
    pub fn with_table(table: Arc<SubstitutionTable>) -> Self {
        Self { table }
    }

    /// The table this mapper consults.
    pub fn table(&self) -> &SubstitutionTable {
        &self.table
    }

    /// Substitute every tabled character in `text`, one `char` at a time.
    ///
    /// Untabled characters pass through unchanged, so the output may still
    /// contain non-ASCII; later pipeline stages deal with those. Never
    /// fails.
    pub fn transliterate(&self, text: &str) -> String {
        // Table keys are non-ASCII by construction, so ASCII text cannot
        // contain a hit.
        if text.is_ascii() {
            return text.to_string();
        }
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            self.push_mapped(ch, &mut out);
        }
        out
    }

    fn push_mapped(&self, ch: char, out: &mut String) {
        let Some(lower) = single_lowercase(ch) else {
            // Lowering expanded to several code points (e.g. 'İ'); no row
            // can match such a character.
            out.push(ch);
            return;
        };
        match self.table.lookup(lower) {
            Some(replacement) if lower != ch => push_capitalized(replacement, out),
            Some(replacement) => out.push_str(replacement),
            None => out.push(ch),
        }
    }
}

impl Default for CharacterMapper {
    fn default() -> Self {
        Self::new()
    }
}

/// `Some(lowered)` when lowering yields exactly one code point.
fn single_lowercase(ch: char) -> Option<char> {
    let mut lowered = ch.to_lowercase();
    match (lowered.next(), lowered.next()) {
        (Some(l), None) => Some(l),
        _ => None,
    }
}

/// Append `replacement` with only its first letter uppercased. Replacements
/// are ASCII, so per-byte case conversion is enough.
fn push_capitalized(replacement: &str, out: &mut String) {
    let mut chars = replacement.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
        out.push_str(chars.as_str());
    }
}
