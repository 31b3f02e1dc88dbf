//! Line commands driving a [`Session`](crate::Session) from a script or a terminal.
//!
//! ```text
//! text Hello World
//! select 0 1
//! select 0 5 generalize
//! collapse 5
//! uninstall
//! install
//! ```

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::announce::SelectionChange;
use crate::error::{Error, Result};
use crate::host::Utterance;
use crate::text::{PlainTextRange, TextBuffer};
use crate::Session;

static SELECT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^select\s+(?P<start>\d+)\s+(?P<end>\d+)(?:\s+(?P<generalize>generalize))?\s*$")
        .unwrap()
});

static COLLAPSE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^collapse\s+(?P<at>\d+)\s*$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the document; the selection collapses to the start.
    Text(String),
    /// Select `[start, end)` in character offsets.
    Select {
        start: usize,
        end: usize,
        generalize: bool,
    },
    /// Move the caret, clearing the selection.
    Collapse(usize),
    Install,
    Uninstall,
}

/// Parse one line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim_start();
    if line.trim().is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    if let Some(text) = line.strip_prefix("text ") {
        return Ok(Some(Command::Text(text.to_string())));
    }
    if let Some(caps) = SELECT_PATTERN.captures(line) {
        return Ok(Some(Command::Select {
            start: parse_offset(&caps["start"])?,
            end: parse_offset(&caps["end"])?,
            generalize: caps.name("generalize").is_some(),
        }));
    }
    if let Some(caps) = COLLAPSE_PATTERN.captures(line) {
        return Ok(Some(Command::Collapse(parse_offset(&caps["at"])?)));
    }

    match line.trim_end() {
        "install" => Ok(Some(Command::Install)),
        "uninstall" => Ok(Some(Command::Uninstall)),
        "text" => Ok(Some(Command::Text(String::new()))),
        other => Err(Error::Command(other.to_string())),
    }
}

fn parse_offset(digits: &str) -> Result<usize> {
    digits
        .parse()
        .map_err(|_| Error::Command(format!("offset out of range: {}", digits)))
}

/// A session plus the document and selection the commands act on.
pub struct Runner {
    session: Session,
    selection: PlainTextRange,
}

impl Runner {
    pub fn new(session: Session) -> Self {
        let buffer = Arc::new(TextBuffer::new(""));
        Self {
            session,
            selection: PlainTextRange::collapsed(buffer, 0),
        }
    }

    /// Apply a command and return what it caused to be spoken.
    pub fn apply(&mut self, command: Command) -> Vec<Utterance> {
        match command {
            Command::Text(text) => {
                self.selection = PlainTextRange::collapsed(Arc::new(TextBuffer::new(text)), 0);
                Vec::new()
            }
            Command::Select {
                start,
                end,
                generalize,
            } => {
                let buffer = Arc::clone(self.selection.buffer());
                self.move_to(PlainTextRange::new(buffer, start, end), generalize)
            }
            Command::Collapse(at) => {
                let buffer = Arc::clone(self.selection.buffer());
                self.move_to(PlainTextRange::collapsed(buffer, at), false)
            }
            Command::Install => {
                self.session.plugin.activate(&mut self.session.slot);
                Vec::new()
            }
            Command::Uninstall => {
                self.session.plugin.terminate(&mut self.session.slot);
                Vec::new()
            }
        }
    }

    fn move_to(&mut self, new: PlainTextRange, generalize: bool) -> Vec<Utterance> {
        let old = std::mem::replace(&mut self.selection, new);
        let change = SelectionChange::new(&old, &self.selection).with_generalize(generalize);
        self.session.announce(&change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::SymbolStore;
    use crate::settings::parse_settings;
    use crate::speech::spoken_text;

    #[test]
    fn parse_commands() {
        assert_eq!(parse_command("").unwrap(), None);
        assert_eq!(parse_command("  # note").unwrap(), None);
        assert_eq!(
            parse_command("text Hello World").unwrap(),
            Some(Command::Text("Hello World".to_string()))
        );
        assert_eq!(
            parse_command("select 2 5").unwrap(),
            Some(Command::Select {
                start: 2,
                end: 5,
                generalize: false
            })
        );
        assert_eq!(
            parse_command("select 0 1 generalize").unwrap(),
            Some(Command::Select {
                start: 0,
                end: 1,
                generalize: true
            })
        );
        assert_eq!(parse_command("collapse 3").unwrap(), Some(Command::Collapse(3)));
        assert_eq!(parse_command("install").unwrap(), Some(Command::Install));
        assert_eq!(parse_command("uninstall ").unwrap(), Some(Command::Uninstall));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!(parse_command("select 1").is_err());
        assert!(parse_command("jump 4").is_err());
        assert!(parse_command("select 99999999999999999999999 1").is_err());
    }

    #[test]
    fn runner_tracks_selection() {
        let settings =
            parse_settings("[speech]\nsynth = \"espeak\"\n[speech.voices.espeak]\nsupports_pitch = false\nsay_cap_for_capitals = true\n")
                .unwrap();
        let mut runner = Runner::new(Session::new(&settings, SymbolStore::new()));

        let mut spoken = |command: &str| -> Vec<String> {
            let command = parse_command(command).unwrap().unwrap();
            runner
                .apply(command)
                .iter()
                .map(|u| spoken_text(&u.sequence))
                .collect()
        };

        assert!(spoken("text Hi there").is_empty());
        assert_eq!(spoken("select 0 1"), ["cap H selected"]);
        assert_eq!(spoken("select 0 2"), ["i selected"]);
        assert_eq!(spoken("select 0 1"), ["i unselected"]);
        assert_eq!(spoken("collapse 1"), ["cap H unselected"]);
        assert!(spoken("uninstall").is_empty());
        assert_eq!(spoken("select 1 2"), ["i selected"]);
        assert_eq!(spoken("select 0 2"), ["H selected"]);
    }
}
