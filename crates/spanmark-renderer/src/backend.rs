//! Render backend trait: one method per node kind.
//!
//! Every method is a leaf-to-root composition step. Children are rendered
//! first and passed in as already-rendered markup, so a backend never sees
//! siblings or ancestors.

use crate::origin::Origin;
use crate::slug::Slugger;

/// Column alignment of a table cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Align {
    /// `align="left"`.
    Left,
    /// `align="center"`.
    Center,
    /// `align="right"`.
    Right,
}

impl Align {
    /// Attribute value for this alignment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Per-cell table flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellFlags {
    /// Whether the cell belongs to the header row.
    pub header: bool,
    /// Column alignment, if the column declares one.
    pub align: Option<Align>,
}

/// Backend trait for node rendering.
///
/// [`HtmlRenderer`](crate::HtmlRenderer) is the built-in implementation; the
/// [`MarkdownRenderer`](crate::MarkdownRenderer) driver is generic over this
/// trait so custom backends can reuse the tree walk.
///
/// All methods return a markup fragment that the caller concatenates into its
/// parent. None of them can fail.
pub trait RenderBackend {
    /// Render a code block.
    ///
    /// # Arguments
    ///
    /// * `code` - The code content
    /// * `info` - Fence info string; its first word is the language
    /// * `escaped` - Whether `code` is already HTML-escaped
    /// * `origin` - Source span of the block
    fn code(&self, code: &str, info: &str, escaped: bool, origin: Option<Origin>) -> String;

    /// Render a blockquote around rendered block content.
    fn blockquote(&self, quote: &str, origin: Option<Origin>) -> String;

    /// Render a raw HTML node.
    ///
    /// Default passes the markup through unchanged: the parser is the trust
    /// boundary for raw HTML.
    fn html(&self, html: &str) -> String {
        html.to_owned()
    }

    /// Render a heading.
    ///
    /// # Arguments
    ///
    /// * `text` - Rendered inline content
    /// * `level` - Heading level (1-6), not validated
    /// * `raw` - Plain heading text, used as slug input
    /// * `slugger` - Document-scoped slug allocator, called in document order
    /// * `origin` - Source span of the heading
    fn heading(
        &self,
        text: &str,
        level: u8,
        raw: &str,
        slugger: &mut dyn Slugger,
        origin: Option<Origin>,
    ) -> String;

    /// Render a horizontal rule.
    fn hr(&self, origin: Option<Origin>) -> String;

    /// Render a list around rendered items.
    ///
    /// `start` is only meaningful for ordered lists.
    fn list(&self, body: &str, ordered: bool, start: u64, origin: Option<Origin>) -> String;

    /// Render a list item.
    ///
    /// For task items the checkbox is already part of `text`; `task` and
    /// `checked` are informational.
    fn listitem(&self, text: &str, task: bool, checked: bool, origin: Option<Origin>) -> String;

    /// Render a task list checkbox.
    fn checkbox(&self, checked: bool, origin: Option<Origin>) -> String;

    /// Render a paragraph around rendered inline content.
    fn paragraph(&self, text: &str, origin: Option<Origin>) -> String;

    /// Render a table from its rendered header row and body rows.
    fn table(&self, header: &str, body: &str) -> String;

    /// Render a table row around rendered cells.
    fn tablerow(&self, content: &str) -> String;

    /// Render a table cell.
    fn tablecell(&self, content: &str, flags: CellFlags) -> String;

    /// Render strong emphasis.
    fn strong(&self, text: &str, origin: Option<Origin>) -> String;

    /// Render emphasis.
    fn em(&self, text: &str, origin: Option<Origin>) -> String;

    /// Render an inline code span; `text` is already escaped.
    fn codespan(&self, text: &str, origin: Option<Origin>) -> String;

    /// Render a hard line break.
    fn br(&self) -> String;

    /// Render strikethrough.
    fn del(&self, text: &str, origin: Option<Origin>) -> String;

    /// Render a link.
    ///
    /// # Arguments
    ///
    /// * `href` - Link target as written in the source
    /// * `title` - Title attribute, already escaped; empty for none
    /// * `text` - Rendered link content
    fn link(&self, href: &str, title: &str, text: &str) -> String;

    /// Render an image.
    ///
    /// # Arguments
    ///
    /// * `href` - Image source as written in the source
    /// * `title` - Title attribute, already escaped; empty for none
    /// * `text` - Alt text, already escaped
    fn image(&self, href: &str, title: &str, text: &str) -> String;

    /// Render a plain text span; `text` is already escaped.
    fn text(&self, text: &str, origin: Option<Origin>) -> String;
}
