//! Primitives consumed from the host screen reader.

use super::template::format_message;
use super::{Priority, SpeechItem, SpeechSequence, CAP_BEEP_HZ, CAP_BEEP_MS};

/// Selections at least this long are announced by length instead of content.
pub const LONG_SELECTION_CHARS: usize = 512;

/// Read-only view of the active synthesizer and its capital-letter settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthSnapshot {
    /// Synthesizer name, used to look up its voice settings.
    pub name: String,
    /// Whether the voice honours pitch directives.
    pub supports_pitch: bool,
    /// Pitch offset applied to capital letters.
    pub cap_pitch_change: i32,
    /// Say "cap" before capital letters.
    pub say_cap_for_capitals: bool,
    /// Beep before capital letters.
    pub beep_for_capitals: bool,
}

/// The capitalization cues to attach to one spoken character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CapCues {
    pub say_cap: bool,
    pub pitch_change: i32,
    pub beep: bool,
}

impl CapCues {
    /// Cues for a character given the synth settings.
    ///
    /// Lowercase characters never get cues; the pitch offset is dropped when
    /// the voice cannot change pitch.
    pub fn for_char(synth: &SynthSnapshot, uppercase: bool) -> Self {
        if !uppercase {
            return Self::default();
        }
        Self {
            say_cap: synth.say_cap_for_capitals,
            pitch_change: if synth.supports_pitch {
                synth.cap_pitch_change
            } else {
                0
            },
            beep: synth.beep_for_capitals,
        }
    }
}

/// Everything the announcer needs from the host.
///
/// Required methods are the host's own primitives. Provided methods mirror the
/// host's stock behaviour and may be overridden when the host does it
/// differently.
pub trait SpeechHost {
    /// Queue a sequence for output.
    fn speak(&self, sequence: SpeechSequence, priority: Option<Priority>);

    /// Locale of the active document or voice, e.g. `en` or `de_CH`.
    fn current_language(&self) -> String;

    /// The active synthesizer, if any.
    fn synth(&self) -> Option<SynthSnapshot>;

    /// How `symbol` is spoken in `locale` ("dot" for `.`, the letter itself for `a`).
    fn process_symbol(&self, locale: &str, symbol: char) -> String;

    /// Look up the translation of a message id.
    fn translate(&self, message: &str) -> String {
        message.to_string()
    }

    /// Wrap a spelled character in capital-letter cues.
    ///
    /// Order: pitch shift, beep, the translated `"cap %s"` around the
    /// character (or the bare character), pitch reset.
    fn spelling_char_cap_notification(&self, speak_as: &str, cues: CapCues) -> SpeechSequence {
        let mut seq = Vec::new();
        if cues.pitch_change != 0 {
            seq.push(SpeechItem::Pitch {
                offset: cues.pitch_change,
            });
        }
        if cues.beep {
            seq.push(SpeechItem::Beep {
                hz: CAP_BEEP_HZ,
                length_ms: CAP_BEEP_MS,
            });
        }
        if cues.say_cap {
            let cap = self.translate("cap %s");
            let (before, after) = cap.split_once("%s").unwrap_or((cap.as_str(), ""));
            if !before.is_empty() {
                seq.push(SpeechItem::text(before));
            }
            seq.push(SpeechItem::text(speak_as));
            if !after.is_empty() {
                seq.push(SpeechItem::text(after));
            }
        } else {
            seq.push(SpeechItem::text(speak_as));
        }
        if cues.pitch_change != 0 {
            seq.push(SpeechItem::Pitch { offset: 0 });
        }
        seq
    }

    /// Speak a plain message. Empty messages are dropped.
    fn speak_message(&self, text: &str, priority: Option<Priority>) {
        if text.is_empty() {
            return;
        }
        self.speak(vec![SpeechItem::text(text)], priority);
    }

    /// Speak `template` with `text` substituted, or the character count for
    /// very long text.
    fn speak_selection_message(&self, template: &str, text: &str, priority: Option<Priority>) {
        let count = text.chars().count();
        let subject = if count < LONG_SELECTION_CHARS {
            text.to_string()
        } else {
            format_message(&self.translate("%d characters"), "%d", &count.to_string())
        };
        self.speak_message(&format_message(template, "%s", &subject), priority);
    }

    /// The host's multi-character "selected" announcement.
    fn speak_text_selected(&self, text: &str, priority: Option<Priority>) {
        let template = self.translate("%s selected");
        self.speak_selection_message(&template, text, priority);
    }
}
