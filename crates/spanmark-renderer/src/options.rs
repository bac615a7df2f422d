//! Renderer configuration.

use std::fmt;
use std::sync::Arc;

use crate::code_block::Highlighter;

/// Renderer options, resolved once and frozen for the renderer's lifetime.
///
/// Every field only affects formatting:
///
/// | Field | Effect |
/// |---|---|
/// | `include_origin` | emit `data-origin-start`/`data-origin-end` attributes |
/// | `header_ids` | give headings an `id` from the slugger |
/// | `header_prefix` | prepended to every heading `id` |
/// | `lang_prefix` | prepended to the code block language class |
/// | `xhtml` | self-close void elements (`<hr />`, `<br/>`, `<img/>`, `<input />`) |
/// | `sanitize` | reject `javascript:`, `vbscript:` and `data:` URLs |
/// | `base_url` | resolve relative link and image URLs against this base |
/// | `highlight` | syntax highlighting callback for code blocks |
#[derive(Clone)]
pub struct Options {
    /// Emit source-position attributes.
    pub include_origin: bool,
    /// Emit heading `id` attributes.
    pub header_ids: bool,
    /// Prefix for heading IDs.
    pub header_prefix: String,
    /// Prefix for the code block language class.
    pub lang_prefix: String,
    /// Self-close void elements.
    pub xhtml: bool,
    /// Reject unsafe URL schemes.
    pub sanitize: bool,
    /// Base for resolving relative URLs.
    pub base_url: Option<String>,
    /// Syntax highlighter.
    pub highlight: Option<Arc<dyn Highlighter>>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            include_origin: false,
            header_ids: true,
            header_prefix: String::new(),
            lang_prefix: "language-".to_owned(),
            xhtml: false,
            sanitize: false,
            base_url: None,
            highlight: None,
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("include_origin", &self.include_origin)
            .field("header_ids", &self.header_ids)
            .field("header_prefix", &self.header_prefix)
            .field("lang_prefix", &self.lang_prefix)
            .field("xhtml", &self.xhtml)
            .field("sanitize", &self.sanitize)
            .field("base_url", &self.base_url)
            .field("highlight", &self.highlight.is_some())
            .finish()
    }
}

impl Options {
    /// Enable or disable source-position attributes.
    #[must_use]
    pub fn with_origin(mut self, enabled: bool) -> Self {
        self.include_origin = enabled;
        self
    }

    /// Enable or disable heading IDs.
    #[must_use]
    pub fn with_header_ids(mut self, enabled: bool) -> Self {
        self.header_ids = enabled;
        self
    }

    /// Set the heading ID prefix.
    #[must_use]
    pub fn with_header_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.header_prefix = prefix.into();
        self
    }

    /// Set the code block language class prefix.
    #[must_use]
    pub fn with_lang_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.lang_prefix = prefix.into();
        self
    }

    /// Enable or disable XHTML-style self-closing void elements.
    #[must_use]
    pub fn with_xhtml(mut self, enabled: bool) -> Self {
        self.xhtml = enabled;
        self
    }

    /// Enable or disable URL sanitization.
    #[must_use]
    pub fn with_sanitize(mut self, enabled: bool) -> Self {
        self.sanitize = enabled;
        self
    }

    /// Set the base URL for relative links and images.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the syntax highlighter.
    #[must_use]
    pub fn with_highlighter(mut self, highlighter: impl Highlighter + 'static) -> Self {
        self.highlight = Some(Arc::new(highlighter));
        self
    }
}
