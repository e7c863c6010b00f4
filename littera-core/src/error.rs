use thiserror::Error;

/// All errors produced by littera-core.
///
/// Only table construction can fail. Transliteration itself is total: every
/// input string produces an output string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LitteraError {
    #[error("duplicate mapping for {ch:?} — each code point may carry one replacement")]
    DuplicateMapping { ch: char },

    #[error("mapping key {ch:?} is not a single lowercase code point — uppercase forms are derived at lookup time")]
    KeyNotLowercase { ch: char },

    #[error("mapping key {ch:?} is ASCII — ASCII input always passes through unchanged")]
    AsciiKey { ch: char },

    #[error("replacement for {ch:?} is not pure ASCII — output must stay ASCII-safe")]
    ReplacementNotAscii { ch: char },
}

pub type Result<T> = std::result::Result<T, LitteraError>;
