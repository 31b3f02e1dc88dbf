//! Settings infrastructure for capsel.
//!
//! This module provides support for loading and parsing capsel.toml files
//! to configure the active synthesizer's capital-letter cues, translated
//! messages, and symbol dictionaries.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::host::{SymbolStore, SymbolTable};
use crate::speech::SynthSnapshot;

/// Name of the settings file searched for by [`discover_settings`].
pub const SETTINGS_FILE: &str = "capsel.toml";

/// Locale used when none is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Root settings structure loaded from capsel.toml.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Speech configuration.
    pub speech: Option<SpeechSettings>,

    /// Translated messages: message id -> translation.
    pub messages: Option<HashMap<String, String>>,

    /// Symbol dictionary configuration.
    pub symbols: Option<SymbolSettings>,
}

/// Speech settings: language and synthesizer.
#[derive(Debug, Default, Deserialize)]
pub struct SpeechSettings {
    /// Document locale, e.g. "en" or "de_CH".
    pub language: Option<String>,

    /// Name of the active synthesizer. No synthesizer when absent.
    pub synth: Option<String>,

    /// Per-synthesizer voice settings, keyed by synthesizer name.
    pub voices: Option<HashMap<String, VoiceSettings>>,
}

/// Capital-letter settings for one synthesizer.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VoiceSettings {
    /// Whether the synthesizer honours pitch directives.
    pub supports_pitch: bool,
    /// Pitch offset for capitals.
    pub cap_pitch_change: i32,
    /// Say "cap" before capitals.
    pub say_cap_for_capitals: bool,
    /// Beep before capitals.
    pub beep_for_capitals: bool,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            supports_pitch: true,
            cap_pitch_change: 30,
            say_cap_for_capitals: false,
            beep_for_capitals: false,
        }
    }
}

/// Symbol dictionary settings.
#[derive(Debug, Default, Deserialize)]
pub struct SymbolSettings {
    /// Dictionary files by locale.
    /// Paths are relative to the directory containing capsel.toml.
    #[serde(default)]
    pub dictionaries: HashMap<String, PathBuf>,
}

impl Settings {
    /// The configured locale, or [`DEFAULT_LANGUAGE`].
    pub fn language(&self) -> &str {
        self.speech
            .as_ref()
            .and_then(|s| s.language.as_deref())
            .unwrap_or(DEFAULT_LANGUAGE)
    }

    /// Snapshot of the active synthesizer, if one is configured.
    ///
    /// A synthesizer without a `[speech.voices.<name>]` table uses
    /// [`VoiceSettings::default`].
    pub fn synth_snapshot(&self) -> Option<SynthSnapshot> {
        let speech = self.speech.as_ref()?;
        let name = speech.synth.as_ref()?;
        let voice = speech
            .voices
            .as_ref()
            .and_then(|voices| voices.get(name))
            .cloned()
            .unwrap_or_default();

        Some(SynthSnapshot {
            name: name.clone(),
            supports_pitch: voice.supports_pitch,
            cap_pitch_change: voice.cap_pitch_change,
            say_cap_for_capitals: voice.say_cap_for_capitals,
            beep_for_capitals: voice.beep_for_capitals,
        })
    }

    /// Translated messages, empty if none are configured.
    pub fn messages(&self) -> HashMap<String, String> {
        self.messages.clone().unwrap_or_default()
    }
}

/// Parse settings from TOML text.
pub fn parse_settings(content: &str) -> Result<Settings> {
    Ok(toml::from_str(content)?)
}

/// Load settings from a capsel.toml file.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(content) => match parse_settings(&content) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("failed to parse {}: {}", path.display(), e);
                Settings::default()
            }
        },
        Err(_) => Settings::default(),
    }
}

/// Discover capsel.toml by searching up the directory tree, then direct children.
///
/// Search order:
/// 1. Walk up from `start_dir` to filesystem root
/// 2. If not found, check immediate child directories of `start_dir`
///
/// Returns `(settings, settings_dir)` where `settings_dir` is the directory
/// containing the found capsel.toml (used for resolving relative paths).
/// If not found, returns `(Settings::default(), start_dir)`.
pub fn discover_settings(start_dir: &Path) -> (Settings, PathBuf) {
    let mut current = Some(start_dir);
    while let Some(dir) = current {
        let candidate = dir.join(SETTINGS_FILE);
        if candidate.is_file() {
            debug!("using settings from {}", candidate.display());
            return (load_settings(&candidate), dir.to_path_buf());
        }
        current = dir.parent();
    }

    if let Ok(entries) = std::fs::read_dir(start_dir) {
        for entry in entries.flatten() {
            if entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false) {
                let candidate = entry.path().join(SETTINGS_FILE);
                if candidate.is_file() {
                    debug!("using settings from {}", candidate.display());
                    return (load_settings(&candidate), entry.path());
                }
            }
        }
    }

    (Settings::default(), start_dir.to_path_buf())
}

/// Build a symbol store from the dictionaries listed in settings.
///
/// Dictionaries that fail to load are skipped with a warning; their locale
/// falls back to the builtin table.
pub fn load_symbol_store(settings: &Settings, settings_dir: &Path) -> SymbolStore {
    let store = SymbolStore::new();
    let Some(symbols) = settings.symbols.as_ref() else {
        return store;
    };

    for (locale, path) in &symbols.dictionaries {
        let full_path = if path.is_absolute() {
            path.clone()
        } else {
            settings_dir.join(path)
        };

        match SymbolTable::load(&full_path) {
            Ok(table) => {
                debug!(
                    "loaded {} symbols for '{}' from {}",
                    table.len(),
                    locale,
                    full_path.display()
                );
                store.insert(locale, table);
            }
            Err(e) => warn!("skipping symbol dictionary for '{}': {}", locale, e),
        }
    }

    store
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a unique temp directory for test isolation.
    fn make_test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("capsel-test")
            .join(name)
            .join(format!("{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Clean up a test directory.
    fn cleanup_test_dir(dir: &Path) {
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn defaults_without_speech_section() {
        let settings = Settings::default();
        assert_eq!(settings.language(), "en");
        assert!(settings.synth_snapshot().is_none());
        assert!(settings.messages().is_empty());
    }

    #[test]
    fn parse_voice_settings() {
        let settings = parse_settings(
            r#"
[speech]
language = "de"
synth = "espeak"

[speech.voices.espeak]
cap_pitch_change = 20
say_cap_for_capitals = true
"#,
        )
        .unwrap();

        assert_eq!(settings.language(), "de");
        assert_eq!(
            settings.synth_snapshot(),
            Some(SynthSnapshot {
                name: "espeak".to_string(),
                supports_pitch: true,
                cap_pitch_change: 20,
                say_cap_for_capitals: true,
                beep_for_capitals: false,
            })
        );
    }

    #[test]
    fn synth_without_voice_table_uses_defaults() {
        let settings = parse_settings("[speech]\nsynth = \"sapi5\"\n").unwrap();
        let synth = settings.synth_snapshot().unwrap();
        assert_eq!(synth.name, "sapi5");
        assert_eq!(synth.cap_pitch_change, 30);
        assert!(!synth.say_cap_for_capitals);
    }

    #[test]
    fn parse_messages() {
        let settings = parse_settings(
            r#"
[messages]
"%s selected" = "%s ausgewählt"
"cap %s" = "groß %s"
"#,
        )
        .unwrap();
        let messages = settings.messages();
        assert_eq!(messages.get("%s selected").unwrap(), "%s ausgewählt");
        assert_eq!(messages.get("cap %s").unwrap(), "groß %s");
    }

    #[test]
    fn bare_symbols_table_keeps_other_settings() {
        let settings = parse_settings("[speech]\nsynth = \"espeak\"\n[symbols]\n").unwrap();
        assert_eq!(settings.synth_snapshot().unwrap().name, "espeak");
        assert!(settings.symbols.unwrap().dictionaries.is_empty());
    }

    #[test]
    fn parse_rejects_wrong_types() {
        assert!(parse_settings("[speech.voices.espeak]\ncap_pitch_change = \"high\"\n").is_err());
    }

    #[test]
    fn load_settings_missing_file_is_default() {
        let settings = load_settings(Path::new("/nonexistent/capsel.toml"));
        assert!(settings.speech.is_none());
    }

    #[test]
    fn discover_settings_in_parent_dir() {
        let parent = make_test_dir("discover-parent");
        let child = parent.join("subdir");
        std::fs::create_dir_all(&child).unwrap();
        std::fs::write(parent.join(SETTINGS_FILE), "[speech]\nlanguage = \"fr\"\n").unwrap();

        let (settings, settings_dir) = discover_settings(&child);
        assert_eq!(settings_dir, parent);
        assert_eq!(settings.language(), "fr");

        cleanup_test_dir(&parent);
    }

    #[test]
    fn discover_settings_in_child_dir() {
        let parent = make_test_dir("discover-child");
        let child = parent.join("config");
        std::fs::create_dir_all(&child).unwrap();
        std::fs::write(child.join(SETTINGS_FILE), "[speech]\nsynth = \"espeak\"\n").unwrap();

        let (settings, settings_dir) = discover_settings(&parent);
        assert_eq!(settings_dir, child);
        assert_eq!(settings.synth_snapshot().unwrap().name, "espeak");

        cleanup_test_dir(&parent);
    }

    #[test]
    fn load_symbol_store_resolves_relative_paths() {
        let dir = make_test_dir("symbol-store");
        std::fs::write(dir.join("de.dic"), "symbols:\n.\tPunkt\n").unwrap();

        let settings = parse_settings(
            r#"
[symbols.dictionaries]
de = "de.dic"
fr = "missing.dic"
"#,
        )
        .unwrap();
        let store = load_symbol_store(&settings, &dir);

        assert_eq!(store.process_symbol("de", '.'), "Punkt");
        // Missing dictionary falls back to the builtin table.
        assert_eq!(store.process_symbol("fr", '.'), "dot");

        cleanup_test_dir(&dir);
    }
}
