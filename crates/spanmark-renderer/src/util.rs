//! Shared utility functions for markdown rendering.

use std::ops::Range;

use pulldown_cmark::HeadingLevel;

use crate::origin::Origin;

/// Convert heading level enum to number (1-6).
#[must_use]
pub(crate) fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Source span of a block, including its terminating newline.
///
/// The parser sometimes ends a block range just before the newline that
/// closes it; in that case the range is extended by one byte.
pub(crate) fn block_origin(source: &str, range: Range<usize>) -> Origin {
    let mut end = range.end;
    let ends_with_newline = source
        .get(range.start..range.end)
        .is_some_and(|s| s.ends_with('\n'));
    if !ends_with_newline && source.as_bytes().get(end) == Some(&b'\n') {
        end += 1;
    }
    Origin::new(range.start, end)
}
