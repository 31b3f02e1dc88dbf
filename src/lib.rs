//! Capital letter cues for screen reader selection announcements.
//!
//! When a single character is selected or unselected, the announcement carries
//! the same capital-letter cues (pitch change, "cap" prefix, beep) the screen
//! reader uses when moving by character. Longer selections are announced the
//! way the host always does.
//!
//! The host supplies text intervals through [`TextRange`] and speech
//! primitives through [`SpeechHost`], and routes its selection announcements
//! through an [`AnnouncerSlot`]. [`CapitalSelectionPlugin`] installs the
//! augmented announcer into that slot and restores the original on shutdown.

mod announce;
pub mod commands;
mod error;
pub mod host;
pub mod settings;
pub mod speech;
pub mod text;

pub use announce::{
    diff_selection, messages, single_char_selection_speech, AnnouncerSlot,
    CapitalSelectionAnnouncer, CapitalSelectionPlugin, PlainSelectionAnnouncer,
    SelectionAnnouncer, SelectionChange, SelectionDiff,
};
pub use error::{Error, Result};
pub use host::{PlainHost, SymbolStore, SymbolTable, Utterance};
pub use settings::{discover_settings, load_settings, load_symbol_store, parse_settings, Settings};
pub use speech::{Priority, SpeechHost, SpeechItem, SpeechSequence, SynthSnapshot};
pub use text::{EndPoints, PlainTextRange, TextBuffer, TextRange};

/// A host ready to announce selections over plain text.
pub struct Session {
    pub host: PlainHost,
    pub slot: AnnouncerSlot<PlainTextRange>,
    pub plugin: CapitalSelectionPlugin,
}

impl Session {
    /// Build a host from settings with the stock announcer, then activate the
    /// capital-letter plugin.
    pub fn new(settings: &Settings, symbols: SymbolStore) -> Self {
        let mut session = Self {
            host: PlainHost::from_settings(settings, symbols),
            slot: AnnouncerSlot::new(PlainSelectionAnnouncer),
            plugin: CapitalSelectionPlugin::new(),
        };
        session.plugin.activate(&mut session.slot);
        session
    }

    /// Announce a selection change and return what was spoken.
    pub fn announce(&self, change: &SelectionChange<'_, PlainTextRange>) -> Vec<Utterance> {
        self.slot.speak_selection_change(&self.host, change);
        self.host.take_utterances()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.plugin.terminate(&mut self.slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn session_activates_plugin() {
        let session = Session::new(&Settings::default(), SymbolStore::new());
        assert!(session.slot.is_active());
        assert!(session.plugin.is_active());
    }

    #[test]
    fn session_announces_through_slot() {
        let settings = parse_settings("[speech]\nsynth = \"espeak\"\n").unwrap();
        let session = Session::new(&settings, SymbolStore::new());

        let buf = Arc::new(TextBuffer::new("Go"));
        let old = PlainTextRange::collapsed(Arc::clone(&buf), 0);
        let new = PlainTextRange::new(buf, 0, 1);
        let spoken = session.announce(&SelectionChange::new(&old, &new));

        assert_eq!(spoken.len(), 1);
        assert_eq!(
            spoken[0].sequence,
            vec![
                SpeechItem::Pitch { offset: 30 },
                SpeechItem::text("G"),
                SpeechItem::Pitch { offset: 0 },
                SpeechItem::text(" selected"),
            ]
        );
    }
}
