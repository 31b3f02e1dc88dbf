//! The text interval contract a host must satisfy.

use std::cmp::Ordering;

/// Which endpoint of `self` is compared with (or moved to) which endpoint of
/// the other interval.
///
/// The first half names the endpoint on the receiver, the second half the
/// endpoint on the argument: `StartToEnd` means "my start against your end".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndPoints {
    StartToStart,
    StartToEnd,
    EndToStart,
    EndToEnd,
}

/// A span within a document, owned by the host.
///
/// The announcer only reads intervals and clamps temporary clones of them, so
/// the contract is deliberately small: anything a host text-position type can
/// already do.
pub trait TextRange: Clone {
    /// True when the interval has zero length (a caret, not a selection).
    fn is_collapsed(&self) -> bool;

    /// Compare one endpoint of `self` with one endpoint of `other`.
    ///
    /// Both intervals are expected to come from the same document. For
    /// intervals over different documents the result only reflects their
    /// offsets.
    fn compare_endpoints(&self, other: &Self, which: EndPoints) -> Ordering;

    /// Move one endpoint of `self` onto one endpoint of `other`.
    ///
    /// `EndToStart` sets this interval's end to `other`'s start.
    fn set_endpoint(&mut self, other: &Self, which: EndPoints);

    /// The text covered by the interval.
    fn text(&self) -> String;
}
