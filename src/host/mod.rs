//! A plain-text reference host.
//!
//! This module provides:
//! - `PlainHost`, a `SpeechHost` configured from `Settings` that records what
//!   it is asked to speak
//! - `SymbolTable` and `SymbolStore` for per-locale symbol pronunciation

mod builtins;
mod symbols;

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::trace;

pub use builtins::builtin_symbol;
pub use symbols::{SymbolStore, SymbolTable};

use crate::settings::Settings;
use crate::speech::{Priority, SpeechHost, SpeechSequence, SynthSnapshot};

/// One call to [`SpeechHost::speak`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub sequence: SpeechSequence,
    pub priority: Option<Priority>,
}

/// A host backed by settings and a symbol store.
#[derive(Debug, Default)]
pub struct PlainHost {
    language: String,
    synth: Option<SynthSnapshot>,
    messages: HashMap<String, String>,
    symbols: SymbolStore,
    spoken: Mutex<Vec<Utterance>>,
}

impl PlainHost {
    pub fn new(language: impl Into<String>, synth: Option<SynthSnapshot>) -> Self {
        Self {
            language: language.into(),
            synth,
            ..Self::default()
        }
    }

    /// Build a host from settings and an already-loaded symbol store.
    pub fn from_settings(settings: &Settings, symbols: SymbolStore) -> Self {
        Self {
            language: settings.language().to_string(),
            synth: settings.synth_snapshot(),
            messages: settings.messages(),
            symbols,
            spoken: Mutex::new(Vec::new()),
        }
    }

    pub fn with_messages(mut self, messages: HashMap<String, String>) -> Self {
        self.messages = messages;
        self
    }

    pub fn set_synth(&mut self, synth: Option<SynthSnapshot>) {
        self.synth = synth;
    }

    /// Drain everything spoken so far.
    pub fn take_utterances(&self) -> Vec<Utterance> {
        std::mem::take(&mut *self.spoken.lock().unwrap_or_else(|e| e.into_inner()))
    }
}

impl SpeechHost for PlainHost {
    fn speak(&self, sequence: SpeechSequence, priority: Option<Priority>) {
        trace!(items = sequence.len(), ?priority, "speak");
        self.spoken
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(Utterance { sequence, priority });
    }

    fn current_language(&self) -> String {
        self.language.clone()
    }

    fn synth(&self) -> Option<SynthSnapshot> {
        self.synth.clone()
    }

    fn process_symbol(&self, locale: &str, symbol: char) -> String {
        self.symbols.process_symbol(locale, symbol)
    }

    fn translate(&self, message: &str) -> String {
        self.messages
            .get(message)
            .cloned()
            .unwrap_or_else(|| message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::SpeechItem;

    #[test]
    fn records_and_drains_utterances() {
        let host = PlainHost::new("en", None);
        host.speak_message("hello", Some(Priority::Next));

        assert_eq!(
            host.take_utterances(),
            vec![Utterance {
                sequence: vec![SpeechItem::text("hello")],
                priority: Some(Priority::Next),
            }]
        );
        assert!(host.take_utterances().is_empty());
    }

    #[test]
    fn translate_falls_back_to_message_id() {
        let host = PlainHost::new("de", None).with_messages(
            [("%s selected".to_string(), "%s ausgewählt".to_string())]
                .into_iter()
                .collect(),
        );
        assert_eq!(host.translate("%s selected"), "%s ausgewählt");
        assert_eq!(host.translate("%s unselected"), "%s unselected");
    }

    #[test]
    fn set_synth_replaces_snapshot() {
        let mut host = PlainHost::new("en", None);
        assert!(host.synth().is_none());

        let synth = SynthSnapshot {
            name: "espeak".to_string(),
            supports_pitch: true,
            cap_pitch_change: 30,
            say_cap_for_capitals: false,
            beep_for_capitals: true,
        };
        host.set_synth(Some(synth.clone()));
        assert_eq!(host.synth(), Some(synth));

        host.set_synth(None);
        assert!(host.synth().is_none());
    }

    #[test]
    fn symbols_come_from_store() {
        let host = PlainHost::new("en", None);
        assert_eq!(host.process_symbol("en", '?'), "question");
        assert_eq!(host.process_symbol("en", 'x'), "x");
    }
}
