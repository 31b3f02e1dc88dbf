//! The host's substitution point for selection announcements.

use tracing::{debug, info, warn};

use super::announcer::{CapitalSelectionAnnouncer, SelectionAnnouncer};
use super::diff::SelectionChange;
use crate::speech::SpeechHost;
use crate::text::TextRange;

/// Holds the announcer the host calls, plus the one it replaced.
///
/// At most one replacement is active at a time: installing over an active
/// replacement and uninstalling when nothing is installed are both no-ops.
pub struct AnnouncerSlot<R: TextRange> {
    current: Box<dyn SelectionAnnouncer<R>>,
    original: Option<Box<dyn SelectionAnnouncer<R>>>,
}

impl<R: TextRange> AnnouncerSlot<R> {
    /// Create a slot around the host's own announcer.
    pub fn new(announcer: impl SelectionAnnouncer<R> + 'static) -> Self {
        Self {
            current: Box::new(announcer),
            original: None,
        }
    }

    /// Whether a replacement announcer is installed.
    pub fn is_active(&self) -> bool {
        self.original.is_some()
    }

    /// Install `announcer`, keeping the current one for [`uninstall`](Self::uninstall).
    ///
    /// Returns false and leaves the slot untouched if a replacement is already
    /// active.
    pub fn install(&mut self, announcer: impl SelectionAnnouncer<R> + 'static) -> bool {
        if self.is_active() {
            warn!("selection announcer already installed, ignoring second install");
            return false;
        }
        let original = std::mem::replace(&mut self.current, Box::new(announcer));
        self.original = Some(original);
        true
    }

    /// Restore the original announcer. Returns false if nothing was installed.
    pub fn uninstall(&mut self) -> bool {
        match self.original.take() {
            Some(original) => {
                self.current = original;
                true
            }
            None => {
                debug!("no selection announcer installed, nothing to restore");
                false
            }
        }
    }

    /// Dispatch a selection change to the current announcer.
    pub fn speak_selection_change(&self, host: &dyn SpeechHost, change: &SelectionChange<'_, R>) {
        self.current.speak_selection_change(host, change);
    }
}

/// Lifecycle hooks that patch capital-letter cues into a host's slot.
#[derive(Debug, Default)]
pub struct CapitalSelectionPlugin {
    installed: bool,
}

impl CapitalSelectionPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called once when the plugin is loaded.
    pub fn activate<R: TextRange>(&mut self, slot: &mut AnnouncerSlot<R>) {
        if self.installed {
            return;
        }
        self.installed = slot.install(CapitalSelectionAnnouncer);
        if self.installed {
            info!("capital letter cues enabled for selection announcements");
        }
    }

    /// Called once when the plugin is unloaded. Safe without a prior activate.
    pub fn terminate<R: TextRange>(&mut self, slot: &mut AnnouncerSlot<R>) {
        if !std::mem::take(&mut self.installed) {
            return;
        }
        if slot.uninstall() {
            info!("capital letter cues disabled for selection announcements");
        }
    }

    pub fn is_active(&self) -> bool {
        self.installed
    }
}
