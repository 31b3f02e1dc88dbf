//! Selection diffing: which text became selected and which unselected.

use std::cmp::Ordering;

use crate::speech::Priority;
use crate::text::{EndPoints, TextRange};

/// One selection change reported by the host.
#[derive(Debug, Clone)]
pub struct SelectionChange<'a, R> {
    /// What the selection was before.
    pub old: &'a R,
    /// What the selection is now.
    pub new: &'a R,
    pub speak_selected: bool,
    pub speak_unselected: bool,
    /// Report only the net before/after state instead of each partial span.
    pub generalize: bool,
    pub priority: Option<Priority>,
}

impl<'a, R> SelectionChange<'a, R> {
    /// A change that speaks both selected and unselected text, not generalized.
    pub fn new(old: &'a R, new: &'a R) -> Self {
        Self {
            old,
            new,
            speak_selected: true,
            speak_unselected: true,
            generalize: false,
            priority: None,
        }
    }

    pub fn with_speak_selected(mut self, speak: bool) -> Self {
        self.speak_selected = speak;
        self
    }

    pub fn with_speak_unselected(mut self, speak: bool) -> Self {
        self.speak_unselected = speak;
        self
    }

    pub fn with_generalize(mut self, generalize: bool) -> Self {
        self.generalize = generalize;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Text spans that changed state, in document order within each list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionDiff {
    pub selected: Vec<String>,
    pub unselected: Vec<String>,
}

impl SelectionDiff {
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty() && self.unselected.is_empty()
    }
}

/// Compute newly selected and newly unselected text between two intervals.
pub fn diff_selection<R: TextRange>(change: &SelectionChange<'_, R>) -> SelectionDiff {
    let old = change.old;
    let new = change.new;
    let mut diff = SelectionDiff::default();

    match (old.is_collapsed(), new.is_collapsed()) {
        (true, true) => {}
        (true, false) => {
            if change.speak_selected {
                diff.selected.push(new.text());
            }
        }
        (false, true) => {
            if change.speak_unselected {
                diff.unselected.push(old.text());
            }
        }
        (false, false) => {
            let start_to_start = new.compare_endpoints(old, EndPoints::StartToStart);
            let start_to_end = new.compare_endpoints(old, EndPoints::StartToEnd);
            let end_to_start = new.compare_endpoints(old, EndPoints::EndToStart);
            let end_to_end = new.compare_endpoints(old, EndPoints::EndToEnd);

            if start_to_end == Ordering::Greater || end_to_start == Ordering::Less {
                // Disjoint: the selection jumped.
                if change.speak_selected {
                    diff.selected.push(new.text());
                }
                if change.speak_unselected {
                    diff.unselected.push(old.text());
                }
                return diff;
            }

            if change.speak_selected {
                if start_to_start == Ordering::Less {
                    diff.selected.push(clamped(new, old, EndPoints::EndToStart));
                }
                if end_to_end == Ordering::Greater {
                    diff.selected.push(clamped(new, old, EndPoints::StartToEnd));
                }
            }
            if change.speak_unselected {
                if start_to_start == Ordering::Greater {
                    diff.unselected.push(clamped(old, new, EndPoints::EndToStart));
                }
                if end_to_end == Ordering::Less {
                    diff.unselected.push(clamped(old, new, EndPoints::StartToEnd));
                }
            }
        }
    }

    diff
}

/// Text of `owner` after moving one of its endpoints onto `other`.
fn clamped<R: TextRange>(owner: &R, other: &R, which: EndPoints) -> String {
    let mut span = owner.clone();
    span.set_endpoint(other, which);
    span.text()
}
