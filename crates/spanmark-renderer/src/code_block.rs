//! Code block language extraction and syntax highlighting hook.
//!
//! # Example
//!
//! ```
//! use spanmark_renderer::{HtmlRenderer, Options, RenderBackend};
//!
//! let options = Options::default().with_highlighter(|code: &str, lang: &str| {
//!     (lang == "shout").then(|| code.to_uppercase())
//! });
//! let renderer = HtmlRenderer::new(options);
//!
//! assert_eq!(
//!     renderer.code("hi\n", "shout", false, None),
//!     "<pre><code class=\"language-shout\">HI\n</code></pre>\n"
//! );
//! ```

/// Syntax highlighting callback.
///
/// Called at most once per code block, synchronously. Returning `None`, or
/// the input unchanged, keeps the default escaped rendering. Any other
/// output is inserted verbatim, so it must already be valid, escaped HTML.
pub trait Highlighter: Send + Sync {
    /// Highlight `code` written in `lang` (empty when the fence had no language).
    fn highlight(&self, code: &str, lang: &str) -> Option<String>;
}

impl<F> Highlighter for F
where
    F: Fn(&str, &str) -> Option<String> + Send + Sync,
{
    fn highlight(&self, code: &str, lang: &str) -> Option<String> {
        self(code, lang)
    }
}

/// Extract the language token from a fence info string.
///
/// The language is the leading run of non-whitespace characters, so an info
/// string that starts with whitespace has no language.
#[must_use]
pub fn info_language(info: &str) -> &str {
    info.split(char::is_whitespace).next().unwrap_or("")
}
