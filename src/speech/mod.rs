//! Speech sequences and the host speech contract.
//!
//! This module provides:
//! - `SpeechItem` and `SpeechSequence`, what gets handed to the host for output
//! - `SpeechHost`, the primitives the announcer consumes from the host
//! - Template splicing for translated `%s` messages

mod host;
mod template;

use std::fmt;

pub use host::{CapCues, SpeechHost, SynthSnapshot, LONG_SELECTION_CHARS};
pub use template::{build_from_template, format_message, PLACEHOLDER};

/// Frequency of the tone played before a capital letter.
pub const CAP_BEEP_HZ: u32 = 2000;

/// Length of the tone played before a capital letter.
pub const CAP_BEEP_MS: u32 = 50;

/// One element of a speech sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechItem {
    /// Text to be spoken.
    Text(String),
    /// Shift the pitch by `offset` relative to the voice's base pitch.
    /// An offset of zero restores the base pitch.
    Pitch { offset: i32 },
    /// Play a short tone.
    Beep { hz: u32, length_ms: u32 },
}

impl SpeechItem {
    pub fn text(text: impl Into<String>) -> Self {
        SpeechItem::Text(text.into())
    }

    /// The text of a `Text` item, `None` for directives.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SpeechItem::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for SpeechItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeechItem::Text(text) => write!(f, "{:?}", text),
            SpeechItem::Pitch { offset: 0 } => write!(f, "<pitch reset>"),
            SpeechItem::Pitch { offset } => write!(f, "<pitch {:+}>", offset),
            SpeechItem::Beep { hz, length_ms } => write!(f, "<beep {}Hz {}ms>", hz, length_ms),
        }
    }
}

/// An ordered list of speech items.
pub type SpeechSequence = Vec<SpeechItem>;

/// Concatenate the text items of a sequence, ignoring directives.
pub fn spoken_text(sequence: &[SpeechItem]) -> String {
    sequence.iter().filter_map(SpeechItem::as_text).collect()
}

/// Render a sequence as `item | item | ...`, directives included.
pub fn describe_sequence(sequence: &[SpeechItem]) -> String {
    sequence
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" | ")
}

/// How an announcement competes with other queued speech.
///
/// The announcer never interprets this; it is passed through to the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Priority {
    /// Queued behind other speech.
    #[default]
    Normal,
    /// Spoken after the current utterance, before other queued speech.
    Next,
    /// Interrupts everything.
    Now,
}
