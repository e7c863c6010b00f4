//! # littera-core
//!
//! One-way Unicode → ASCII transliteration engine.
//!
//! ## Architecture
//!
//! ```text
//! input text → CharacterMapper → ScriptExtensionChain → flatten_diacritics
//!                    │                    │                     │
//!            per-char table rows   pluggable whole-      NFD + strip
//!            + case reconstruction string transforms     combining marks
//! ```
//!
//! Transliteration is total and allocation-light: the hot path is one pass
//! per stage, and pure-ASCII input short-circuits every stage.
//!
//! Typical use is one line:
//!
//! ```text
//! littera_core::transliterate("Привет, Ängström!")   // "Privet, Aengstroem!"
//! ```
//!
//! Custom rows and script extensions go through [`TransliteratorBuilder`].

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod error;
pub mod flatten;
pub mod mapper;
pub mod pipeline;
pub mod script;

// Convenience re-exports for downstream crates
pub use error::{LitteraError, Result};
pub use flatten::flatten_diacritics;
pub use mapper::{CharacterMapper, SubstitutionTable};
pub use pipeline::{transliterate, Transliterator, TransliteratorBuilder};
pub use script::{ScriptExtension, ScriptExtensionChain};
