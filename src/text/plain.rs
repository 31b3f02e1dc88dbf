//! Plain-text intervals with character offsets.
//!
//! Positions count Unicode scalar values, not bytes, so a single selected
//! character is always one unit wide regardless of its UTF-8 length.

use std::cmp::Ordering;
use std::sync::Arc;

use super::range::{EndPoints, TextRange};

/// Shared document text with pre-computed character boundaries.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    /// Byte offset where each character starts, plus a trailing `source.len()`.
    char_starts: Vec<usize>,
    source: String,
}

impl TextBuffer {
    /// Build a buffer from source text.
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let mut char_starts: Vec<usize> = source.char_indices().map(|(i, _)| i).collect();
        char_starts.push(source.len());

        Self {
            char_starts,
            source,
        }
    }

    /// Get the source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of characters in the buffer.
    pub fn char_len(&self) -> usize {
        self.char_starts.len() - 1
    }

    /// Text between two character offsets. Offsets past the end are clamped.
    pub fn slice(&self, start: usize, end: usize) -> &str {
        let len = self.char_len();
        let start = start.min(len);
        let end = end.clamp(start, len);
        &self.source[self.char_starts[start]..self.char_starts[end]]
    }
}

/// A `[start, end)` character interval over a shared [`TextBuffer`].
#[derive(Debug, Clone)]
pub struct PlainTextRange {
    buffer: Arc<TextBuffer>,
    start: usize,
    end: usize,
}

impl PlainTextRange {
    /// Create an interval; endpoints are clamped to the buffer and ordered.
    pub fn new(buffer: Arc<TextBuffer>, start: usize, end: usize) -> Self {
        let len = buffer.char_len();
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        Self {
            start: start.min(len),
            end: end.min(len),
            buffer,
        }
    }

    /// A caret at `offset`.
    pub fn collapsed(buffer: Arc<TextBuffer>, offset: usize) -> Self {
        Self::new(buffer, offset, offset)
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn buffer(&self) -> &Arc<TextBuffer> {
        &self.buffer
    }

    fn endpoint(&self, start: bool) -> usize {
        if start {
            self.start
        } else {
            self.end
        }
    }
}

/// Split an endpoint pair into (receiver is start, other is start).
fn sides(which: EndPoints) -> (bool, bool) {
    match which {
        EndPoints::StartToStart => (true, true),
        EndPoints::StartToEnd => (true, false),
        EndPoints::EndToStart => (false, true),
        EndPoints::EndToEnd => (false, false),
    }
}

impl TextRange for PlainTextRange {
    fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    fn compare_endpoints(&self, other: &Self, which: EndPoints) -> Ordering {
        let (mine, theirs) = sides(which);
        self.endpoint(mine).cmp(&other.endpoint(theirs))
    }

    fn set_endpoint(&mut self, other: &Self, which: EndPoints) {
        let (mine, theirs) = sides(which);
        let target = other.endpoint(theirs);
        if mine {
            self.start = target;
            // Moving the start past the end drags the end along.
            self.end = self.end.max(target);
        } else {
            self.end = target;
            self.start = self.start.min(target);
        }
    }

    fn text(&self) -> String {
        self.buffer.slice(self.start, self.end).to_string()
    }
}
