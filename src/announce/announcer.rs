//! Announcing a selection change.

use tracing::{debug, trace};

use super::diff::{diff_selection, SelectionChange};
use crate::speech::{build_from_template, CapCues, Priority, SpeechHost, SpeechItem, SpeechSequence};
use crate::text::TextRange;

/// Message ids of the translated templates used for announcements.
pub mod messages {
    pub const SELECTED: &str = "%s selected";
    pub const UNSELECTED: &str = "%s unselected";
    pub const SELECTED_INSTEAD: &str = "%s selected instead";
    pub const SELECTION_REMOVED: &str = "selection removed";
}

/// The host's selection-announcement entry point.
pub trait SelectionAnnouncer<R: TextRange> {
    /// Speak whatever changed between `change.old` and `change.new`.
    fn speak_selection_change(&self, host: &dyn SpeechHost, change: &SelectionChange<'_, R>);
}

/// Announces selections the way the host does out of the box: every span,
/// whatever its length, goes through the multi-character messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainSelectionAnnouncer;

impl<R: TextRange> SelectionAnnouncer<R> for PlainSelectionAnnouncer {
    fn speak_selection_change(&self, host: &dyn SpeechHost, change: &SelectionChange<'_, R>) {
        announce(host, change, false);
    }
}

/// Announces single selected or unselected characters with the same
/// capital-letter cues the host uses when moving by character.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapitalSelectionAnnouncer;

impl<R: TextRange> SelectionAnnouncer<R> for CapitalSelectionAnnouncer {
    fn speak_selection_change(&self, host: &dyn SpeechHost, change: &SelectionChange<'_, R>) {
        announce(host, change, true);
    }
}

/// Build the speech for one selected or unselected character.
///
/// `template` is a message id such as [`messages::SELECTED`]; it is translated
/// by the host before the character is spliced in.
pub fn single_char_selection_speech(
    host: &dyn SpeechHost,
    ch: char,
    locale: &str,
    template: &str,
) -> SpeechSequence {
    let template = host.translate(template);
    let speak_as = host.process_symbol(locale, ch);

    let Some(synth) = host.synth() else {
        debug!("no active synth, announcing {:?} without capital cues", ch);
        return build_from_template(&template, vec![SpeechItem::Text(speak_as)]);
    };

    let cues = CapCues::for_char(&synth, ch.is_uppercase());
    trace!(synth = %synth.name, ?cues, "capital cues for {:?}", ch);
    build_from_template(&template, host.spelling_char_cap_notification(&speak_as, cues))
}

/// The only character of `text`, if it has exactly one.
fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    let ch = chars.next()?;
    chars.next().is_none().then_some(ch)
}

struct Announcement<'h> {
    host: &'h dyn SpeechHost,
    locale: String,
    priority: Option<Priority>,
    augment: bool,
}

impl Announcement<'_> {
    fn speak_char(&self, ch: char, template: &str) {
        let seq = single_char_selection_speech(self.host, ch, &self.locale, template);
        self.host.speak(seq, self.priority);
    }

    /// The augmented single character, if this span qualifies.
    fn augmentable(&self, text: &str) -> Option<char> {
        if self.augment {
            single_char(text)
        } else {
            None
        }
    }

    fn selected(&self, text: &str) {
        match self.augmentable(text) {
            Some(ch) => self.speak_char(ch, messages::SELECTED),
            None => self.host.speak_text_selected(text, self.priority),
        }
    }

    fn with_template(&self, text: &str, template: &str) {
        match self.augmentable(text) {
            Some(ch) => self.speak_char(ch, template),
            None => {
                let template = self.host.translate(template);
                self.host
                    .speak_selection_message(&template, text, self.priority);
            }
        }
    }
}

fn announce<R: TextRange>(host: &dyn SpeechHost, change: &SelectionChange<'_, R>, augment: bool) {
    let diff = diff_selection(change);
    if diff.is_empty() {
        return;
    }

    let out = Announcement {
        host,
        locale: host.current_language(),
        priority: change.priority,
        augment,
    };

    if change.speak_selected {
        if !change.generalize {
            for text in &diff.selected {
                out.selected(text);
            }
        } else if !diff.selected.is_empty() {
            out.selected(&change.new.text());
        }
    }

    if change.speak_unselected {
        if !change.generalize {
            for text in &diff.unselected {
                out.with_template(text, messages::UNSELECTED);
            }
        } else if !diff.unselected.is_empty() {
            // Whether the old selection was replaced or dropped is read from
            // the new interval, not from which spans were unselected.
            if change.new.is_collapsed() {
                let message = host.translate(messages::SELECTION_REMOVED);
                host.speak_message(&message, change.priority);
            } else {
                out.with_template(&change.new.text(), messages::SELECTED_INSTEAD);
            }
        }
    }
}
