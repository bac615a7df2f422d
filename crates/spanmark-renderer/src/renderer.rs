//! Markdown driver with pluggable backend.

use std::ops::Range;

use pulldown_cmark::{CodeBlockKind, Event, Options as CmarkOptions, Parser, Tag};

use crate::backend::RenderBackend;
use crate::escape::escape_html;
use crate::origin::Origin;
use crate::slug::{GithubSlugger, Slugger};
use crate::state::{Frame, FrameKind, TableState};
use crate::util::{block_origin, heading_level_to_num};

/// Markdown driver with pluggable backend.
///
/// Parses markdown with `pulldown-cmark` and feeds the resulting nodes to a
/// [`RenderBackend`] bottom-up, attaching the source span of every node.
///
/// Heading text reaches the backend as rendered inline markup (text is wrapped
/// in `<span>`), so headings rendered through this driver are always marked
/// `data-hash-header=false`, for ATX and setext headings alike. Call
/// [`is_hash_heading`](crate::is_hash_heading) on the raw heading text when the
/// classification matters.
///
/// # Example
///
/// ```
/// use spanmark_renderer::{HtmlRenderer, MarkdownRenderer, Options};
///
/// let renderer = MarkdownRenderer::new(HtmlRenderer::new(Options::default()));
/// let html = renderer.render_markdown("Hello\n");
/// assert_eq!(html, "<p><span>Hello</span></p>\n");
/// ```
#[derive(Clone, Debug)]
pub struct MarkdownRenderer<B: RenderBackend> {
    backend: B,
    gfm: bool,
}

impl<B: RenderBackend> MarkdownRenderer<B> {
    /// Create a new driver with GFM enabled by default.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self { backend, gfm: true }
    }

    /// Enable or disable GitHub Flavored Markdown features.
    ///
    /// GFM is enabled by default. When enabled, the parser supports:
    /// - Tables
    /// - Strikethrough (`~~text~~`)
    /// - Task lists (`- [ ] item`)
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// The backend nodes are rendered with.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Get parser options based on GFM configuration.
    #[must_use]
    pub fn parser_options(&self) -> CmarkOptions {
        if self.gfm {
            CmarkOptions::ENABLE_TABLES
                | CmarkOptions::ENABLE_STRIKETHROUGH
                | CmarkOptions::ENABLE_TASKLISTS
                | CmarkOptions::ENABLE_GFM
        } else {
            CmarkOptions::empty()
        }
    }

    /// Create a configured parser for the given markdown text.
    #[must_use]
    pub fn create_parser<'a>(&self, markdown: &'a str) -> Parser<'a> {
        Parser::new_ext(markdown, self.parser_options())
    }

    /// Render a standalone document.
    ///
    /// Heading IDs are unique within this document only.
    #[must_use]
    pub fn render_markdown(&self, markdown: &str) -> String {
        let mut slugger = GithubSlugger::new();
        self.render_with_slugger(markdown, &mut slugger)
    }

    /// Render a document, allocating heading IDs from `slugger`.
    ///
    /// Passing the same slugger for several documents keeps their IDs unique
    /// across all of them.
    pub fn render_with_slugger(&self, markdown: &str, slugger: &mut dyn Slugger) -> String {
        let mut walk = Walk::new(&self.backend, markdown, slugger);
        for (event, range) in self.create_parser(markdown).into_offset_iter() {
            walk.process_event(event, range);
        }
        walk.finish()
    }
}

impl<B: RenderBackend + Default> Default for MarkdownRenderer<B> {
    fn default() -> Self {
        Self::new(B::default())
    }
}

/// State of a single render pass.
struct Walk<'a, B: RenderBackend> {
    backend: &'a B,
    source: &'a str,
    slugger: &'a mut dyn Slugger,
    root: Frame,
    stack: Vec<Frame>,
    table: TableState,
}

impl<'a, B: RenderBackend> Walk<'a, B> {
    fn new(backend: &'a B, source: &'a str, slugger: &'a mut dyn Slugger) -> Self {
        Self {
            backend,
            source,
            slugger,
            root: Frame::new(FrameKind::PassThrough, Origin::new(0, source.len())),
            stack: Vec::new(),
            table: TableState::default(),
        }
    }

    /// Innermost open frame.
    fn top(&mut self) -> &mut Frame {
        self.stack.last_mut().unwrap_or(&mut self.root)
    }

    /// Append rendered markup and its plain text to the innermost frame.
    fn push(&mut self, html: &str, plain: &str) {
        let frame = self.top();
        frame.html.push_str(html);
        frame.plain.push_str(plain);
    }

    fn in_code_block(&self) -> bool {
        self.stack.last().is_some_and(Frame::is_code_block)
    }

    fn process_event(&mut self, event: Event<'_>, range: Range<usize>) {
        match event {
            Event::Start(tag) => self.start_tag(tag, range),
            Event::End(_) => {
                if let Some(frame) = self.stack.pop() {
                    self.close(frame);
                }
            }
            Event::Text(text) => self.text(&text, range),
            Event::Code(code) => {
                let out = self
                    .backend
                    .codespan(&escape_html(&code), Some(range.into()));
                self.push(&out, &code);
            }
            Event::Html(html) | Event::InlineHtml(html) => {
                let out = self.backend.html(&html);
                self.push(&out, "");
            }
            Event::SoftBreak => self.push("\n", "\n"),
            Event::HardBreak => {
                let out = self.backend.br();
                self.push(&out, "\n");
            }
            Event::Rule => {
                let out = self.backend.hr(Some(block_origin(self.source, range)));
                self.push(&out, "");
            }
            Event::TaskListMarker(checked) => self.task_list_marker(checked, range),
            Event::FootnoteReference(_) | Event::InlineMath(_) | Event::DisplayMath(_) => {
                tracing::trace!(?range, "Skipping unsupported inline node");
            }
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>, range: Range<usize>) {
        let block = block_origin(self.source, range.clone());
        let inline = Origin::from(range);

        let (kind, origin) = match tag {
            Tag::Paragraph => (FrameKind::Paragraph, block),
            Tag::Heading { level, .. } => (
                FrameKind::Heading {
                    level: heading_level_to_num(level),
                },
                block,
            ),
            Tag::BlockQuote(_) => (FrameKind::BlockQuote, block),
            Tag::CodeBlock(kind) => {
                let info = match kind {
                    CodeBlockKind::Fenced(info) => info.into_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                (FrameKind::CodeBlock { info }, block)
            }
            Tag::List(start) => (FrameKind::List { start }, block),
            Tag::Item => (
                FrameKind::Item {
                    task: false,
                    checked: false,
                },
                block,
            ),
            Tag::Table(alignments) => {
                self.table.start(alignments);
                (
                    FrameKind::Table {
                        header: String::new(),
                    },
                    block,
                )
            }
            Tag::TableHead => {
                self.table.start_head();
                (FrameKind::TableHead, inline)
            }
            Tag::TableRow => {
                self.table.start_row();
                (FrameKind::TableRow, inline)
            }
            Tag::TableCell => (
                FrameKind::TableCell {
                    flags: self.table.next_cell(),
                },
                inline,
            ),
            Tag::Emphasis => (FrameKind::Emphasis, inline),
            Tag::Strong => (FrameKind::Strong, inline),
            Tag::Strikethrough => (FrameKind::Strikethrough, inline),
            Tag::Link {
                dest_url, title, ..
            } => (
                FrameKind::Link {
                    href: dest_url.into_string(),
                    title: escape_html(&title),
                },
                inline,
            ),
            Tag::Image {
                dest_url, title, ..
            } => (
                FrameKind::Image {
                    href: dest_url.into_string(),
                    title: escape_html(&title),
                },
                inline,
            ),
            other => {
                tracing::trace!(tag = ?other, "Passing through unsupported container");
                (FrameKind::PassThrough, inline)
            }
        };

        self.stack.push(Frame::new(kind, origin));
    }

    /// Render a finished frame into its parent.
    fn close(&mut self, frame: Frame) {
        let Frame {
            kind,
            origin,
            html,
            plain,
        } = frame;
        let b = self.backend;
        let origin = Some(origin);

        let out = match kind {
            FrameKind::Paragraph => b.paragraph(&html, origin),
            FrameKind::Heading { level } => {
                b.heading(&html, level, &plain, &mut *self.slugger, origin)
            }
            FrameKind::BlockQuote => b.blockquote(&html, origin),
            FrameKind::CodeBlock { info } => b.code(&html, &info, false, origin),
            FrameKind::List { start } => b.list(&html, start.is_some(), start.unwrap_or(1), origin),
            FrameKind::Item { task, checked } => b.listitem(&html, task, checked, origin),
            FrameKind::Table { header } => b.table(&header, &html),
            FrameKind::TableHead => {
                self.table.end_head();
                let row = b.tablerow(&html);
                if let Some(Frame {
                    kind: FrameKind::Table { header },
                    ..
                }) = self.stack.last_mut()
                {
                    *header = row;
                }
                String::new()
            }
            FrameKind::TableRow => b.tablerow(&html),
            FrameKind::TableCell { flags } => b.tablecell(&html, flags),
            FrameKind::Emphasis => b.em(&html, origin),
            FrameKind::Strong => b.strong(&html, origin),
            FrameKind::Strikethrough => b.del(&html, origin),
            FrameKind::Link { href, title } => b.link(&href, &title, &html),
            FrameKind::Image { href, title } => b.image(&href, &title, &escape_html(&plain)),
            FrameKind::PassThrough => html,
        };

        self.push(&out, &plain);
    }

    fn text(&mut self, text: &str, range: Range<usize>) {
        if self.in_code_block() {
            self.top().html.push_str(text);
            return;
        }
        let out = self.backend.text(&escape_html(text), Some(range.into()));
        self.push(&out, text);
    }

    fn task_list_marker(&mut self, checked: bool, range: Range<usize>) {
        let item = self
            .stack
            .iter_mut()
            .rev()
            .find_map(|frame| match &mut frame.kind {
                FrameKind::Item { task, checked } => Some((task, checked)),
                _ => None,
            });
        if let Some((task, item_checked)) = item {
            *task = true;
            *item_checked = checked;
        }

        let out = self.backend.checkbox(checked, Some(range.into()));
        self.push(&out, "");
    }

    /// Close frames left open by truncated input and return the document.
    fn finish(mut self) -> String {
        while let Some(frame) = self.stack.pop() {
            self.close(frame);
        }
        self.root.html
    }
}
