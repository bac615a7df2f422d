//! Source spans attached to parsed nodes.

use std::ops::Range;

/// Offset range `[start, end)` into the original markdown source.
///
/// Spans are produced upstream by the parser and are only formatted here,
/// never validated: `end >= start` is the caller's contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Origin {
    /// Offset of the first byte covered by the node.
    pub start: usize,
    /// Offset one past the last byte covered by the node.
    pub end: usize,
}

impl Origin {
    /// Create a span from its two offsets.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span, or `None` when `end < start`.
    #[must_use]
    pub const fn len(&self) -> Option<usize> {
        self.end.checked_sub(self.start)
    }

    /// Whether the span covers no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

impl From<Range<usize>> for Origin {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}
