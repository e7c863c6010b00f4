//! Diacritic flattening via canonical decomposition.
//!
//! The last pipeline stage. It catches accented characters no table row
//! covers: decompose to NFD, drop every combining mark, keep the rest.
//! Compatibility forms (ligatures, fullwidth digits) are deliberately left
//! alone; this is canonical-only normalization.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Strip combining marks from `text` after NFD decomposition.
///
/// `ê` and `e\u{0301}` both come out as a plain `e`. Characters that
/// neither decompose nor carry marks pass through, so unmapped scripts
/// (CJK and the like) survive intact.
pub fn flatten_diacritics(text: &str) -> String {
    // NFD never changes ASCII, and ASCII carries no marks.
    if text.is_ascii() {
        return text.to_string();
    }
    text.nfd().filter(|ch| !is_combining_mark(*ch)).collect()
}
