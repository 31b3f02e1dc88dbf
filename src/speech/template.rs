//! Splicing speech into translated `%s` templates.

use super::{SpeechItem, SpeechSequence};

/// The placeholder translated messages use for the spoken subject.
pub const PLACEHOLDER: &str = "%s";

/// Insert `sequence` at the first `%s` in `template`.
///
/// Empty text on either side of the placeholder is dropped. A template with no
/// placeholder gets the sequence first, then the template text.
pub fn build_from_template(template: &str, sequence: SpeechSequence) -> SpeechSequence {
    let Some((before, after)) = template.split_once(PLACEHOLDER) else {
        let mut result = sequence;
        result.push(SpeechItem::text(template));
        return result;
    };

    let mut result = Vec::with_capacity(sequence.len() + 2);
    if !before.is_empty() {
        result.push(SpeechItem::text(before));
    }
    result.extend(sequence);
    if !after.is_empty() {
        result.push(SpeechItem::text(after));
    }
    result
}

/// Substitute `value` for the first `placeholder` in `template`.
///
/// Without the placeholder the value is spoken first, separated by a space.
pub fn format_message(template: &str, placeholder: &str, value: &str) -> String {
    match template.split_once(placeholder) {
        Some((before, after)) => format!("{}{}{}", before, value, after),
        None => format!("{} {}", value, template),
    }
}
