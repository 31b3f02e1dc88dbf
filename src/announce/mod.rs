//! Selection change announcements.
//!
//! This module provides:
//! - `diff_selection`, which splits a before/after selection into the spans
//!   that became selected and unselected
//! - `CapitalSelectionAnnouncer`, which speaks single characters with capital
//!   letter cues, and `PlainSelectionAnnouncer`, the host's stock behaviour
//! - `AnnouncerSlot` and `CapitalSelectionPlugin` for installing one in place
//!   of the other

mod announcer;
mod diff;
mod slot;

pub use announcer::{
    messages, single_char_selection_speech, CapitalSelectionAnnouncer, PlainSelectionAnnouncer,
    SelectionAnnouncer,
};
pub use diff::{diff_selection, SelectionChange, SelectionDiff};
pub use slot::{AnnouncerSlot, CapitalSelectionPlugin};
