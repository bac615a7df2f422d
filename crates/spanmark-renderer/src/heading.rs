//! Heading style classification.

use crate::origin::Origin;

/// Guess whether a heading was written in the hash-prefixed style (`## Title`)
/// rather than the underline style (`Title` over a line of `=` or `-`).
///
/// This is a best-effort heuristic, not a fact recorded by the parser. The
/// length of `level` hashes, one space and `text` is compared with the source
/// span length minus one trailing newline; equal lengths mean hash style.
///
/// Lengths are measured in bytes, the unit of [`Origin`] offsets. Because
/// `text` is the *rendered* heading content, headings whose markup renders
/// to a different length than it was written (entities, inline formatting,
/// extra spaces, closing hashes) are reported as not hash-style. A missing
/// or inverted span is also reported as not hash-style.
///
/// # Examples
///
/// ```
/// use spanmark_renderer::{Origin, is_hash_heading};
///
/// // "## Title\n"
/// assert!(is_hash_heading("Title", 2, Some(Origin::new(0, 9))));
/// // "Title\n-----\n"
/// assert!(!is_hash_heading("Title", 2, Some(Origin::new(0, 12))));
/// ```
#[must_use]
pub fn is_hash_heading(text: &str, level: u8, origin: Option<Origin>) -> bool {
    let expected = usize::from(level) + 1 + text.len();
    let actual = origin.and_then(|o| o.len()).and_then(|len| len.checked_sub(1));
    actual == Some(expected)
}
