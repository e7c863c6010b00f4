//! Pluggable whole-string transforms between the mapper and the flattener.
//!
//! Script extensions host the language-specific handling that per-character
//! rows cannot express (syllable clustering, conjunct consonants). Each one
//! sees the previous stage's full output. Transforms are total: any input
//! in, some output out, unrecognised text untouched, no panics.

use std::fmt;

use tracing::trace;

/// A named whole-string transform.
pub trait ScriptExtension: Send + Sync {
    /// Stable name, used in logs and `Debug` output.
    fn name(&self) -> &str;

    /// Rewrite `text`, leaving unrecognised content untouched.
    fn transform(&self, text: &str) -> String;
}

/// Ordered collection of extensions, applied first-registered-first.
#[derive(Default)]
pub struct ScriptExtensionChain {
    extensions: Vec<Box<dyn ScriptExtension>>,
}

impl ScriptExtensionChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an extension. Registration order is application order.
    pub fn push(&mut self, extension: Box<dyn ScriptExtension>) {
        self.extensions.push(extension);
    }

    /// Fold `text` through every extension in order.
    ///
    /// Each extension observes the previous one's full output. An empty
    /// chain returns `text` unchanged.
    pub fn apply(&self, text: String) -> String {
        let mut current = text;
        for extension in &self.extensions {
            current = extension.transform(&current);
            trace!(extension = extension.name(), "script extension applied");
        }
        current
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

impl fmt::Debug for ScriptExtensionChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.extensions.iter().map(|e| e.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scripted fake: literal find-and-replace under a fixed name.
    struct Rewrite {
        name: &'static str,
        from: &'static str,
        to: &'static str,
    }

    impl ScriptExtension for Rewrite {
        fn name(&self) -> &str {
            self.name
        }

        fn transform(&self, text: &str) -> String {
            text.replace(self.from, self.to)
        }
    }

    #[test]
    fn empty_chain_is_identity() {
        let chain = ScriptExtensionChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
        assert_eq!(chain.apply("αβγ".to_string()), "αβγ");
    }

    #[test]
    fn extensions_apply_in_registration_order() {
        let mut chain = ScriptExtensionChain::new();
        chain.push(Box::new(Rewrite { name: "first", from: "x", to: "y" }));
        chain.push(Box::new(Rewrite { name: "second", from: "y", to: "z" }));
        assert!(!chain.is_empty());
        assert_eq!(chain.len(), 2);
        // "x" only reaches "z" if the first extension runs before the
        // second.
        assert_eq!(chain.apply("x".to_string()), "z");

        let mut reversed = ScriptExtensionChain::new();
        reversed.push(Box::new(Rewrite { name: "second", from: "y", to: "z" }));
        reversed.push(Box::new(Rewrite { name: "first", from: "x", to: "y" }));
        assert_eq!(reversed.apply("x".to_string()), "y");
    }

    #[test]
    fn unrecognised_text_passes_through() {
        let mut chain = ScriptExtensionChain::new();
        chain.push(Box::new(Rewrite { name: "noop", from: "q", to: "k" }));
        assert_eq!(chain.apply("nothing to do".to_string()), "nothing to do");
    }

    #[test]
    fn debug_lists_extension_names() {
        let mut chain = ScriptExtensionChain::new();
        chain.push(Box::new(Rewrite { name: "bengali", from: "", to: "" }));
        chain.push(Box::new(Rewrite { name: "korean", from: "", to: "" }));
        assert_eq!(format!("{chain:?}"), r#"["bengali", "korean"]"#);
    }
}
