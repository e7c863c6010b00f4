//! Pipeline orchestration: mapper, then script extensions, then flattener.
//!
//! Stage order is fixed. Table rows therefore win over flattening (`ü`
//! becomes `ue`, never `u`), and extensions observe mapped text rather than
//! raw input.

use std::sync::{Arc, OnceLock};

use tracing::debug;

use crate::error::Result;
use crate::flatten::flatten_diacritics;
use crate::mapper::{CharacterMapper, SubstitutionTable};
use crate::script::{ScriptExtension, ScriptExtensionChain};

/// The assembled transliteration pipeline.
///
/// Immutable after construction. Transliteration takes `&self` and touches
/// no interior state, so a shared instance is safe across threads.
#[derive(Debug)]
pub struct Transliterator {
    mapper: CharacterMapper,
    chain: ScriptExtensionChain,
}

impl Transliterator {
    /// Built-in table, empty extension chain.
    pub fn new() -> Self {
        Self {
            mapper: CharacterMapper::new(),
            chain: ScriptExtensionChain::new(),
        }
    }

    pub fn builder() -> TransliteratorBuilder {
        TransliteratorBuilder::default()
    }

    /// Convert `text` to its ASCII approximation.
    ///
    /// Total: never fails, never panics. Empty input returns the empty
    /// string without touching any stage.
    pub fn transliterate(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let mapped = self.mapper.transliterate(text);
        let extended = self.chain.apply(mapped);
        let flattened = flatten_diacritics(&extended);
        debug!(
            chars_in = text.chars().count(),
            chars_out = flattened.chars().count(),
            "transliteration complete"
        );
        flattened
    }
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::new()
    }
}

/// Assembles a [`Transliterator`] from custom table rows and script
/// extensions.
#[derive(Default)]
pub struct TransliteratorBuilder {
    mappings: Vec<(char, String)>,
    extensions: Vec<Box<dyn ScriptExtension>>,
}

impl TransliteratorBuilder {
    /// Register a custom table row, replacing the built-in row for the same
    /// code point if one exists.
    pub fn mapping(mut self, ch: char, replacement: impl Into<String>) -> Self {
        self.mappings.push((ch, replacement.into()));
        self
    }

    /// Append a script extension. Registration order is application order.
    pub fn extension(mut self, extension: impl ScriptExtension + 'static) -> Self {
        self.extensions.push(Box::new(extension));
        self
    }

    /// Validate custom rows and assemble the pipeline.
    ///
    /// # Errors
    /// Any table-construction error from
    /// [`SubstitutionTable::with_overrides`].
    pub fn build(self) -> Result<Transliterator> {
        let mapper = if self.mappings.is_empty() {
            CharacterMapper::new()
        } else {
            let table = SubstitutionTable::with_overrides(&self.mappings)?;
            CharacterMapper::with_table(Arc::new(table))
        };
        let mut chain = ScriptExtensionChain::new();
        for extension in self.extensions {
            chain.push(extension);
        }
        Ok(Transliterator { mapper, chain })
    }
}

/// Transliterate with the process-wide default pipeline.
///
/// Lazily builds one [`Transliterator`] over the built-in table and reuses
/// it for every call.
pub fn transliterate(text: &str) -> String {
    static DEFAULT: OnceLock<Transliterator> = OnceLock::new();
    DEFAULT.get_or_init(Transliterator::new).transliterate(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Scripted fake that records every input it observes.
    struct Recorder {
        seen: Arc<Mutex<Vec<String>>>,
    }

    impl ScriptExtension for Recorder {
        fn name(&self) -> &str {
            "recorder"
        }

        fn transform(&self, text: &str) -> String {
            self.seen.lock().unwrap().push(text.to_string());
            text.to_string()
        }
    }

    #[test]
    fn empty_input_returns_empty() {
        assert_eq!(Transliterator::new().transliterate(""), "");
    }

    #[test]
    fn ascii_is_identity_and_idempotent() {
        let t = Transliterator::new();
        let once = t.transliterate("Already plain, nr. 7");
        assert_eq!(once, "Already plain, nr. 7");
        assert_eq!(t.transliterate(&once), once);
    }

    #[test]
    fn table_rows_win_over_flattening() {
        // The flattener alone would turn 'ü' into 'u'; the table row must
        // fire first.
        assert_eq!(Transliterator::new().transliterate("über"), "ueber");
    }

    #[test]
    fn untabled_diacritics_flatten_to_base() {
        let t = Transliterator::new();
        assert_eq!(t.transliterate("crêpe"), "crepe");
        assert_eq!(t.transliterate("İstanbul"), "Istanbul");
    }

    #[test]
    fn extensions_observe_mapped_text() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let t = Transliterator::builder()
            .extension(Recorder { seen: Arc::clone(&seen) })
            .build()
            .unwrap();
        t.transliterate("Жук");
        assert_eq!(seen.lock().unwrap().as_slice(), ["Zhuk"]);
    }

    #[test]
    fn builder_custom_row_applies_with_case_reconstruction() {
        let t = Transliterator::builder()
            .mapping('ё', "yo")
            .build()
            .unwrap();
        assert_eq!(t.transliterate("Ёлка"), "Yolka");
    }

    #[test]
    fn builder_rejects_conflicting_rows() {
        let result = Transliterator::builder()
            .mapping('ё', "yo")
            .mapping('ё', "e")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn default_pipeline_free_function() {
        assert_eq!(transliterate("Привет"), "Privet");
        assert_eq!(transliterate(""), "");
    }

    #[test]
    fn deterministic_across_calls() {
        let t = Transliterator::new();
        let input = "Καλημέρα, Київ! שלום";
        assert_eq!(t.transliterate(input), t.transliterate(input));
    }
}
