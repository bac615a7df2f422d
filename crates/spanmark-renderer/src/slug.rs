//! Heading slug allocation.
//!
//! A [`Slugger`] is document-scoped mutable state: uniqueness depends on the
//! order in which headings are slugged. Use one instance per document and call
//! it sequentially, in source order.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

static HTML_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<[!/a-z].*?>").unwrap());

/// Punctuation removed from slugs (besides the general punctuation and
/// supplemental punctuation Unicode blocks).
const STRIPPED_PUNCTUATION: &str = "\\'!\"#$%&()*+,./:;<=>?@[]^`{|}~";

/// Allocates unique, ID-safe identifiers for headings.
pub trait Slugger {
    /// Return a slug for `raw` that is unique within this slugger's document.
    fn slug(&mut self, raw: &str) -> String;
}

/// GitHub-style slug generator.
///
/// Lowercases, strips markup and punctuation, turns whitespace into dashes,
/// and appends `-1`, `-2`, ... to repeated slugs.
///
/// # Example
///
/// ```
/// use spanmark_renderer::{GithubSlugger, Slugger};
///
/// let mut slugger = GithubSlugger::new();
/// assert_eq!(slugger.slug("Hello World"), "hello-world");
/// assert_eq!(slugger.slug("Hello World"), "hello-world-1");
/// ```
#[derive(Clone, Debug, Default)]
pub struct GithubSlugger {
    /// Slug → number of times the slug was requested beyond the first.
    seen: HashMap<String, usize>,
}

impl GithubSlugger {
    /// Create an empty slugger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the slug the next [`slug`](Slugger::slug) call would produce,
    /// without recording it.
    #[must_use]
    pub fn slug_dry_run(&self, raw: &str) -> String {
        let base = serialize(raw);
        self.next_safe_slug(&base).1
    }

    /// Forget every slug handed out so far.
    pub fn reset(&mut self) {
        self.seen.clear();
    }

    fn next_safe_slug(&self, base: &str) -> (usize, String) {
        let Some(&seen) = self.seen.get(base) else {
            return (0, base.to_owned());
        };
        let mut count = seen;
        loop {
            count += 1;
            let candidate = format!("{base}-{count}");
            if !self.seen.contains_key(&candidate) {
                return (count, candidate);
            }
        }
    }
}

impl Slugger for GithubSlugger {
    fn slug(&mut self, raw: &str) -> String {
        let base = serialize(raw);
        let (count, slug) = self.next_safe_slug(&base);
        self.seen.insert(base, count);
        self.seen.insert(slug.clone(), 0);
        slug
    }
}

/// Convert heading text to its slug form, before uniqueness is applied.
fn serialize(raw: &str) -> String {
    let lower = raw.to_lowercase();
    let without_tags = HTML_TAG_RE.replace_all(lower.trim(), "");
    without_tags
        .chars()
        .filter(|&c| !is_stripped(c))
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}

fn is_stripped(c: char) -> bool {
    matches!(c, '\u{2000}'..='\u{206F}' | '\u{2E00}'..='\u{2E7F}')
        || STRIPPED_PUNCTUATION.contains(c)
}
