//! Text intervals.
//!
//! This module provides:
//! - `TextRange`, the interval contract the announcer is written against
//! - `PlainTextRange` and `TextBuffer`, a character-offset implementation used
//!   by the reference host

mod plain;
mod range;

pub use plain::{PlainTextRange, TextBuffer};
pub use range::{EndPoints, TextRange};
