//! Persistent application settings (JSON file in app data directory).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct AppSettings {
    pub transliteration_enabled: bool,
    pub custom_mappings: Vec<CustomMapping>,
}

/// One caller-defined table row: `from` is replaced by `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomMapping {
    pub from: char,
    pub to: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            transliteration_enabled: true,
            custom_mappings: Vec::new(),
        }
    }
}

impl AppSettings {
    /// Drop exact duplicate custom rows (same `from` and same `to`).
    ///
    /// Conflicting rows for one code point are kept so table construction
    /// rejects them loudly instead of silently picking a winner.
    pub fn normalize(&mut self) {
        let mut kept: Vec<CustomMapping> = Vec::with_capacity(self.custom_mappings.len());
        for mapping in self.custom_mappings.drain(..) {
            if !kept.contains(&mapping) {
                kept.push(mapping);
            }
        }
        self.custom_mappings = kept;
    }

    /// Custom rows in the shape table construction expects.
    pub fn override_rows(&self) -> Vec<(char, String)> {
        self.custom_mappings
            .iter()
            .map(|m| (m.from, m.to.clone()))
            .collect()
    }
}

pub fn default_settings_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("Lattice Labs")
            .join("Littera")
            .join("settings.json")
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var_os("XDG_DATA_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                std::env::var_os("HOME")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("/tmp"))
                    .join(".local")
                    .join("share")
            })
            .join("littera")
            .join("settings.json")
    }
}

pub fn load_settings(path: &Path) -> AppSettings {
    let mut settings = fs::read_to_string(path)
        .ok()
        .and_then(|raw| serde_json::from_str::<AppSettings>(&raw).ok())
        .unwrap_or_default();
    settings.normalize();
    settings
}

pub fn save_settings(path: &Path, settings: &AppSettings) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings).map_err(std::io::Error::other)?;
    fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(&dir.path().join("nope.json"));
        assert!(settings.transliteration_enabled);
        assert!(settings.custom_mappings.is_empty());
    }

    #[test]
    fn unparsable_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();
        let settings = load_settings(&path);
        assert!(settings.transliteration_enabled);
    }

    #[test]
    #[cfg(not(target_os = "windows"))]
    fn default_path_lives_under_the_data_dir() {
        let saved = std::env::var_os("XDG_DATA_HOME");
        std::env::set_var("XDG_DATA_HOME", "/tmp/littera-data-home");
        let path = default_settings_path();
        match saved {
            Some(value) => std::env::set_var("XDG_DATA_HOME", value),
            None => std::env::remove_var("XDG_DATA_HOME"),
        }
        assert_eq!(
            path,
            PathBuf::from("/tmp/littera-data-home/littera/settings.json")
        );
        // Every fallback branch still lands in a littera data directory,
        // never under a config directory.
        assert!(default_settings_path().ends_with("littera/settings.json"));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = AppSettings {
            transliteration_enabled: false,
            custom_mappings: vec![CustomMapping {
                from: 'ё',
                to: "yo".into(),
            }],
        };

        save_settings(&path, &settings).unwrap();
        let loaded = load_settings(&path);
        assert!(!loaded.transliteration_enabled);
        assert_eq!(loaded.custom_mappings, settings.custom_mappings);
    }

    #[test]
    fn wire_format_is_camel_case() {
        let mut settings = AppSettings::default();
        settings.custom_mappings.push(CustomMapping {
            from: '€',
            to: "EUR".into(),
        });
        let value = serde_json::to_value(&settings).unwrap();
        assert_eq!(value["transliterationEnabled"], true);
        assert_eq!(value["customMappings"][0]["from"], "€");
        assert_eq!(value["customMappings"][0]["to"], "EUR");
    }

    #[test]
    fn normalize_drops_exact_duplicates_only() {
        let mut settings = AppSettings {
            transliteration_enabled: true,
            custom_mappings: vec![
                CustomMapping { from: 'ё', to: "yo".into() },
                CustomMapping { from: 'ё', to: "yo".into() },
                CustomMapping { from: 'ё', to: "e".into() },
            ],
        };
        settings.normalize();
        // The conflicting third row stays; construction decides its fate.
        assert_eq!(settings.custom_mappings.len(), 2);
    }

    #[test]
    fn override_rows_match_custom_mappings() {
        let settings = AppSettings {
            transliteration_enabled: true,
            custom_mappings: vec![CustomMapping { from: '…', to: "...".into() }],
        };
        assert_eq!(settings.override_rows(), vec![('…', "...".to_string())]);
    }
}
