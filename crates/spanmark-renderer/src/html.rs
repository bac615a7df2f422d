//! HTML backend for node rendering.
//!
//! Produces HTML5 (or XHTML-style void elements) with optional source-position
//! attributes on block and inline elements.

use std::borrow::Cow;
use std::fmt::{self, Write};
use std::sync::Arc;

use crate::backend::{CellFlags, RenderBackend};
use crate::code_block::info_language;
use crate::escape::{escape_html, escape_html_once};
use crate::heading::is_hash_heading;
use crate::options::Options;
use crate::origin::Origin;
use crate::slug::Slugger;
use crate::url::{DefaultUrlCleaner, UrlCleaner};

/// HTML render backend.
///
/// Holds frozen [`Options`] and a [`UrlCleaner`]. Rendering never mutates the
/// renderer, so one instance can be shared across threads; only the slugger
/// passed to [`heading`](RenderBackend::heading) carries per-document state.
///
/// # Example
///
/// ```
/// use spanmark_renderer::{GithubSlugger, HtmlRenderer, Options, Origin, RenderBackend};
///
/// let renderer = HtmlRenderer::new(Options::default().with_origin(true));
/// let mut slugger = GithubSlugger::new();
///
/// let html = renderer.heading("Title", 2, "Title", &mut slugger, Some(Origin::new(0, 9)));
/// assert_eq!(
///     html,
///     "<h2 data-hash-header=true id=\"title\" data-origin-start=\"0\" data-origin-end=\"9\">Title</h2>\n"
/// );
/// ```
#[derive(Clone)]
pub struct HtmlRenderer {
    options: Options,
    cleaner: Arc<dyn UrlCleaner>,
}

impl HtmlRenderer {
    /// Create a renderer with the default URL cleaner.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            options,
            cleaner: Arc::new(DefaultUrlCleaner),
        }
    }

    /// Replace the URL cleaner used for links and images.
    #[must_use]
    pub fn with_url_cleaner(mut self, cleaner: impl UrlCleaner + 'static) -> Self {
        self.cleaner = Arc::new(cleaner);
        self
    }

    /// The options this renderer was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Source-position attributes for an opening tag.
    ///
    /// Returns ` data-origin-start="S" data-origin-end="E"` (leading space
    /// included), or an empty string when the span is absent or origin
    /// emission is disabled.
    #[must_use]
    pub fn origin_attrs(&self, origin: Option<Origin>) -> String {
        match origin {
            Some(Origin { start, end }) if self.options.include_origin => {
                format!(r#" data-origin-start="{start}" data-origin-end="{end}""#)
            }
            _ => String::new(),
        }
    }

    /// Wrap inline content in `<tag{origin}>...</tag>`.
    fn wrap(&self, tag: &str, content: &str, origin: Option<Origin>) -> String {
        format!("<{tag}{}>{content}</{tag}>", self.origin_attrs(origin))
    }

    fn clean(&self, href: &str) -> Option<String> {
        let cleaned =
            self.cleaner
                .clean(self.options.sanitize, self.options.base_url.as_deref(), href);
        if cleaned.is_none() {
            tracing::debug!(href, "Rejected URL, rendering text only");
        }
        cleaned
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl fmt::Debug for HtmlRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlRenderer")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl RenderBackend for HtmlRenderer {
    fn code(&self, code: &str, info: &str, escaped: bool, origin: Option<Origin>) -> String {
        let lang = info_language(info);
        let mut escaped = escaped;
        let mut body = Cow::Borrowed(code);

        if let Some(highlighter) = &self.options.highlight
            && let Some(highlighted) = highlighter.highlight(code, lang)
            && highlighted != code
        {
            tracing::debug!(lang, "Using highlighter output for code block");
            escaped = true;
            body = Cow::Owned(highlighted);
        }

        let mut body = body.strip_suffix('\n').unwrap_or(body.as_ref()).to_owned();
        body.push('\n');
        let body = if escaped { body } else { escape_html(&body) };

        let origin = self.origin_attrs(origin);
        if lang.is_empty() {
            format!("<pre{origin}><code>{body}</code></pre>\n")
        } else {
            format!(
                "<pre{origin}><code class=\"{}{}\">{body}</code></pre>\n",
                self.options.lang_prefix,
                escape_html(lang)
            )
        }
    }

    fn blockquote(&self, quote: &str, origin: Option<Origin>) -> String {
        format!(
            "<blockquote{}>\n{quote}</blockquote>\n",
            self.origin_attrs(origin)
        )
    }

    fn heading(
        &self,
        text: &str,
        level: u8,
        raw: &str,
        slugger: &mut dyn Slugger,
        origin: Option<Origin>,
    ) -> String {
        let hash_header = is_hash_heading(text, level, origin);
        let attrs = self.origin_attrs(origin);

        if self.options.header_ids {
            let id = format!("{}{}", self.options.header_prefix, slugger.slug(raw));
            format!(
                "<h{level} data-hash-header={hash_header} id=\"{id}\"{attrs}>{text}</h{level}>\n"
            )
        } else {
            format!("<h{level}{attrs} data-hash-header={hash_header}>{text}</h{level}>\n")
        }
    }

    fn hr(&self, origin: Option<Origin>) -> String {
        let close = if self.options.xhtml { " />" } else { ">" };
        format!("<hr{}{close}\n", self.origin_attrs(origin))
    }

    fn list(&self, body: &str, ordered: bool, start: u64, origin: Option<Origin>) -> String {
        let tag = if ordered { "ol" } else { "ul" };
        let start_attr = if ordered && start != 1 {
            format!(" start=\"{start}\"")
        } else {
            String::new()
        };
        format!(
            "<{tag}{start_attr}{}>\n{body}</{tag}>\n",
            self.origin_attrs(origin)
        )
    }

    fn listitem(&self, text: &str, _task: bool, _checked: bool, origin: Option<Origin>) -> String {
        format!("<li{}>{text}</li>\n", self.origin_attrs(origin))
    }

    fn checkbox(&self, checked: bool, origin: Option<Origin>) -> String {
        let mut out = format!("<input{} ", self.origin_attrs(origin));
        if checked {
            out.push_str("checked=\"\" ");
        }
        out.push_str("disabled=\"\" type=\"checkbox\"");
        if self.options.xhtml {
            out.push_str(" /");
        }
        out.push_str("> ");
        out
    }

    fn paragraph(&self, text: &str, origin: Option<Origin>) -> String {
        format!("<p{}>{text}</p>\n", self.origin_attrs(origin))
    }

    fn table(&self, header: &str, body: &str) -> String {
        let mut out = format!("<table>\n<thead>\n{header}</thead>\n");
        if !body.is_empty() {
            write!(out, "<tbody>{body}</tbody>").unwrap();
        }
        out.push_str("</table>\n");
        out
    }

    fn tablerow(&self, content: &str) -> String {
        format!("<tr>\n{content}</tr>\n")
    }

    fn tablecell(&self, content: &str, flags: CellFlags) -> String {
        let tag = if flags.header { "th" } else { "td" };
        match flags.align {
            Some(align) => format!("<{tag} align=\"{}\">{content}</{tag}>\n", align.as_str()),
            None => format!("<{tag}>{content}</{tag}>\n"),
        }
    }

    fn strong(&self, text: &str, origin: Option<Origin>) -> String {
        self.wrap("strong", text, origin)
    }

    fn em(&self, text: &str, origin: Option<Origin>) -> String {
        self.wrap("em", text, origin)
    }

    fn codespan(&self, text: &str, origin: Option<Origin>) -> String {
        self.wrap("code", text, origin)
    }

    fn br(&self) -> String {
        if self.options.xhtml { "<br/>" } else { "<br>" }.to_owned()
    }

    fn del(&self, text: &str, origin: Option<Origin>) -> String {
        self.wrap("del", text, origin)
    }

    fn link(&self, href: &str, title: &str, text: &str) -> String {
        let Some(href) = self.clean(href) else {
            return text.to_owned();
        };

        let mut out = format!(r#"<a target="_blank" href="{}""#, escape_html_once(&href));
        if !title.is_empty() {
            write!(out, r#" title="{title}""#).unwrap();
        }
        write!(out, ">{text}</a>").unwrap();
        out
    }

    fn image(&self, href: &str, title: &str, text: &str) -> String {
        let Some(href) = self.clean(href) else {
            return text.to_owned();
        };

        let mut out = format!(r#"<img src="{}" alt="{text}""#, escape_html_once(&href));
        if !title.is_empty() {
            write!(out, r#" title="{title}""#).unwrap();
        }
        out.push_str(if self.options.xhtml { "/>" } else { ">" });
        out
    }

    fn text(&self, text: &str, origin: Option<Origin>) -> String {
        self.wrap("span", text, origin)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::slug::GithubSlugger;
    use pretty_assertions::assert_eq;

    const SPAN: Option<Origin> = Some(Origin::new(4, 12));

    fn html() -> HtmlRenderer {
        HtmlRenderer::default()
    }

    fn with_origin() -> HtmlRenderer {
        HtmlRenderer::new(Options::default().with_origin(true))
    }

    fn xhtml() -> HtmlRenderer {
        HtmlRenderer::new(Options::default().with_xhtml(true))
    }

    struct RejectAll;

    impl UrlCleaner for RejectAll {
        fn clean(&self, _sanitize: bool, _base_url: Option<&str>, _href: &str) -> Option<String> {
            None
        }
    }

    /// Counts slug requests to check the slugger is consulted once per heading.
    #[derive(Default)]
    struct CountingSlugger {
        calls: Vec<String>,
    }

    impl Slugger for CountingSlugger {
        fn slug(&mut self, raw: &str) -> String {
            self.calls.push(raw.to_owned());
            format!("s{}", self.calls.len())
        }
    }

    #[test]
    fn test_origin_attrs() {
        assert_eq!(
            with_origin().origin_attrs(SPAN),
            r#" data-origin-start="4" data-origin-end="12""#
        );
        assert_eq!(with_origin().origin_attrs(None), "");
        assert_eq!(html().origin_attrs(SPAN), "");
    }

    #[test]
    fn test_code_block_without_language() {
        assert_eq!(
            html().code("plain code", "", false, None),
            "<pre><code>plain code\n</code></pre>\n"
        );
    }

    #[test]
    fn test_code_block_with_language() {
        assert_eq!(
            html().code("fn main() {}\n", "rust ignore", false, None),
            "<pre><code class=\"language-rust\">fn main() {}\n</code></pre>\n"
        );
    }

    #[test]
    fn test_code_block_info_starting_with_space_has_no_language() {
        assert_eq!(
            html().code("x", " rust", false, None),
            "<pre><code>x\n</code></pre>\n"
        );
    }

    #[test]
    fn test_code_block_escapes_body_and_language() {
        assert_eq!(
            html().code("<a href='x'>&</a>", "a\"b", false, None),
            "<pre><code class=\"language-a&quot;b\">&lt;a href=&#39;x&#39;&gt;&amp;&lt;/a&gt;\n</code></pre>\n"
        );
    }

    #[test]
    fn test_code_block_already_escaped() {
        assert_eq!(
            html().code("&lt;b&gt;", "", true, None),
            "<pre><code>&lt;b&gt;\n</code></pre>\n"
        );
    }

    #[test]
    fn test_code_block_strips_exactly_one_newline() {
        assert_eq!(
            html().code("a\n\n", "", false, None),
            "<pre><code>a\n\n</code></pre>\n"
        );
    }

    #[test]
    fn test_code_block_newline_normalization_is_idempotent() {
        let once = html().code("a\n", "", true, None);
        let twice = html().code("a\n\n", "", true, None);
        assert_eq!(once, "<pre><code>a\n</code></pre>\n");
        assert_ne!(once, twice);
        assert_eq!(html().code("a", "", true, None), once);
    }

    #[test]
    fn test_code_block_is_pure() {
        let renderer = with_origin();
        let first = renderer.code("<x>", "html", false, SPAN);
        let second = renderer.code("<x>", "html", false, SPAN);
        assert_eq!(first, second);
    }

    #[test]
    fn test_code_block_with_origin_and_prefix() {
        let renderer = HtmlRenderer::new(
            Options::default()
                .with_origin(true)
                .with_lang_prefix("lang-"),
        );
        assert_eq!(
            renderer.code("x", "py", false, SPAN),
            "<pre data-origin-start=\"4\" data-origin-end=\"12\"><code class=\"lang-py\">x\n</code></pre>\n"
        );
    }

    #[test]
    fn test_code_block_highlighter_output_is_not_escaped() {
        let renderer = HtmlRenderer::new(Options::default().with_highlighter(
            |code: &str, lang: &str| Some(format!("<b class=\"{lang}\">{code}</b>")),
        ));
        assert_eq!(
            renderer.code("x<y", "rs", false, None),
            "<pre><code class=\"language-rs\"><b class=\"rs\">x<y</b>\n</code></pre>\n"
        );
    }

    #[test]
    fn test_code_block_highlighter_declines() {
        let renderer = HtmlRenderer::new(
            Options::default().with_highlighter(|_: &str, _: &str| -> Option<String> { None }),
        );
        assert_eq!(
            renderer.code("x<y", "rs", false, None),
            "<pre><code class=\"language-rs\">x&lt;y\n</code></pre>\n"
        );
    }

    #[test]
    fn test_code_block_highlighter_returns_input_unchanged() {
        let renderer = HtmlRenderer::new(
            Options::default().with_highlighter(|code: &str, _: &str| Some(code.to_owned())),
        );
        assert_eq!(
            renderer.code("x<y", "", false, None),
            "<pre><code>x&lt;y\n</code></pre>\n"
        );
    }

    #[test]
    fn test_code_block_highlighter_sees_empty_language() {
        let renderer = HtmlRenderer::new(
            Options::default()
                .with_highlighter(|_: &str, lang: &str| Some(format!("[{lang}]"))),
        );
        assert_eq!(
            renderer.code("x", "", false, None),
            "<pre><code>[]\n</code></pre>\n"
        );
    }

    fn counting_renderer(calls: &Arc<AtomicUsize>, output: Option<&'static str>) -> HtmlRenderer {
        let counter = Arc::clone(calls);
        HtmlRenderer::new(Options::default().with_highlighter(
            move |_: &str, _: &str| -> Option<String> {
                counter.fetch_add(1, Ordering::SeqCst);
                output.map(str::to_owned)
            },
        ))
    }

    #[test]
    fn test_code_block_highlighter_called_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let renderer = counting_renderer(&calls, Some("<i>hl</i>"));
        assert_eq!(
            renderer.code("x\n", "rs", false, None),
            "<pre><code class=\"language-rs\"><i>hl</i>\n</code></pre>\n"
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_code_block_declining_highlighter_called_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let renderer = counting_renderer(&calls, None);
        renderer.code("x\n", "", false, None);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_code_block_highlighter_called_once_per_fence() {
        let calls = Arc::new(AtomicUsize::new(0));
        let driver = crate::MarkdownRenderer::new(counting_renderer(&calls, None));
        driver.render_markdown("```rs\na\n```\n\n    b\n");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(
            html().blockquote("<p>q</p>\n", None),
            "<blockquote>\n<p>q</p>\n</blockquote>\n"
        );
        assert_eq!(
            with_origin().blockquote("", SPAN),
            "<blockquote data-origin-start=\"4\" data-origin-end=\"12\">\n</blockquote>\n"
        );
    }

    #[test]
    fn test_raw_html_passthrough() {
        assert_eq!(
            html().html("<script>alert(1)</script>"),
            "<script>alert(1)</script>"
        );
    }

    #[test]
    fn test_heading_hash_style() {
        let mut slugger = GithubSlugger::new();
        assert_eq!(
            html().heading("Title", 2, "Title", &mut slugger, Some(Origin::new(0, 9))),
            "<h2 data-hash-header=true id=\"title\">Title</h2>\n"
        );
    }

    #[test]
    fn test_heading_underline_style() {
        let mut slugger = GithubSlugger::new();
        assert_eq!(
            html().heading("Title", 2, "Title", &mut slugger, Some(Origin::new(0, 12))),
            "<h2 data-hash-header=false id=\"title\">Title</h2>\n"
        );
    }

    #[test]
    fn test_heading_prefix_and_unique_ids() {
        let renderer = HtmlRenderer::new(Options::default().with_header_prefix("doc-"));
        let mut slugger = GithubSlugger::new();
        let first = renderer.heading("FAQ", 2, "FAQ", &mut slugger, None);
        let second = renderer.heading("FAQ", 2, "FAQ", &mut slugger, None);
        assert!(first.contains(r#"id="doc-faq""#));
        assert!(second.contains(r#"id="doc-faq-1""#));
    }

    #[test]
    fn test_heading_slugs_raw_text() {
        let mut slugger = CountingSlugger::default();
        html().heading("<em>Big</em> news", 1, "Big news", &mut slugger, None);
        assert_eq!(slugger.calls, vec!["Big news".to_owned()]);
    }

    #[test]
    fn test_heading_without_ids() {
        let renderer = HtmlRenderer::new(
            Options::default()
                .with_header_ids(false)
                .with_origin(true),
        );
        let mut slugger = CountingSlugger::default();
        assert_eq!(
            renderer.heading("Title", 2, "Title", &mut slugger, Some(Origin::new(0, 9))),
            "<h2 data-origin-start=\"0\" data-origin-end=\"9\" data-hash-header=true>Title</h2>\n"
        );
        assert!(slugger.calls.is_empty());
    }

    #[test]
    fn test_hr() {
        assert_eq!(html().hr(None), "<hr>\n");
        assert_eq!(xhtml().hr(None), "<hr />\n");
        assert_eq!(
            with_origin().hr(SPAN),
            "<hr data-origin-start=\"4\" data-origin-end=\"12\">\n"
        );
    }

    #[test]
    fn test_list_unordered() {
        assert_eq!(
            html().list("<li>a</li>\n", false, 1, None),
            "<ul>\n<li>a</li>\n</ul>\n"
        );
    }

    #[test]
    fn test_list_start_attribute() {
        assert_eq!(html().list("", true, 1, SPAN), "<ol>\n</ol>\n");
        assert_eq!(html().list("", true, 3, SPAN), "<ol start=\"3\">\n</ol>\n");
        assert_eq!(html().list("", true, 0, None), "<ol start=\"0\">\n</ol>\n");
        assert_eq!(html().list("", false, 3, None), "<ul>\n</ul>\n");
    }

    #[test]
    fn test_list_start_with_origin() {
        assert_eq!(
            with_origin().list("", true, 3, SPAN),
            "<ol start=\"3\" data-origin-start=\"4\" data-origin-end=\"12\">\n</ol>\n"
        );
    }

    #[test]
    fn test_listitem_ignores_task_flags() {
        let plain = html().listitem("a", false, false, None);
        let task = html().listitem("a", true, true, None);
        assert_eq!(plain, "<li>a</li>\n");
        assert_eq!(task, plain);
    }

    #[test]
    fn test_checkbox() {
        assert_eq!(
            html().checkbox(false, None),
            "<input disabled=\"\" type=\"checkbox\"> "
        );
        assert_eq!(
            html().checkbox(true, None),
            "<input checked=\"\" disabled=\"\" type=\"checkbox\"> "
        );
        assert_eq!(
            xhtml().checkbox(true, None),
            "<input checked=\"\" disabled=\"\" type=\"checkbox\" /> "
        );
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(html().paragraph("Hello", None), "<p>Hello</p>\n");
        assert_eq!(
            with_origin().paragraph("Hello", SPAN),
            "<p data-origin-start=\"4\" data-origin-end=\"12\">Hello</p>\n"
        );
    }

    #[test]
    fn test_table_without_body() {
        let out = html().table("<tr>\n<th>A</th>\n</tr>\n", "");
        assert_eq!(
            out,
            "<table>\n<thead>\n<tr>\n<th>A</th>\n</tr>\n</thead>\n</table>\n"
        );
        assert!(!out.contains("<tbody>"));
    }

    #[test]
    fn test_table_with_body() {
        let out = html().table("<tr>\n</tr>\n", "<tr>\n<td>1</td>\n</tr>\n");
        assert_eq!(out.matches("<tbody>").count(), 1);
        assert!(out.contains("<tbody><tr>\n<td>1</td>\n</tr>\n</tbody></table>\n"));
    }

    #[test]
    fn test_tablerow() {
        assert_eq!(html().tablerow("<td>1</td>\n"), "<tr>\n<td>1</td>\n</tr>\n");
    }

    #[test]
    fn test_tablecell() {
        let header = CellFlags {
            header: true,
            align: None,
        };
        let centered = CellFlags {
            header: false,
            align: Some(crate::backend::Align::Center),
        };
        assert_eq!(html().tablecell("A", header), "<th>A</th>\n");
        assert_eq!(
            html().tablecell("1", centered),
            "<td align=\"center\">1</td>\n"
        );
    }

    #[test]
    fn test_inline_spans() {
        let r = html();
        assert_eq!(r.strong("a", SPAN), "<strong>a</strong>");
        assert_eq!(r.em("a", SPAN), "<em>a</em>");
        assert_eq!(r.codespan("a", SPAN), "<code>a</code>");
        assert_eq!(r.del("a", SPAN), "<del>a</del>");
        assert_eq!(r.text("a", SPAN), "<span>a</span>");
    }

    #[test]
    fn test_inline_spans_with_origin() {
        let r = with_origin();
        let attrs = r#" data-origin-start="4" data-origin-end="12""#;
        assert_eq!(r.strong("a", SPAN), format!("<strong{attrs}>a</strong>"));
        assert_eq!(r.em("a", SPAN), format!("<em{attrs}>a</em>"));
        assert_eq!(r.codespan("a", SPAN), format!("<code{attrs}>a</code>"));
        assert_eq!(r.del("a", SPAN), format!("<del{attrs}>a</del>"));
        assert_eq!(r.text("a", SPAN), format!("<span{attrs}>a</span>"));
    }

    #[test]
    fn test_br() {
        assert_eq!(html().br(), "<br>");
        assert_eq!(xhtml().br(), "<br/>");
        assert_eq!(with_origin().br(), "<br>");
    }

    #[test]
    fn test_link() {
        assert_eq!(
            html().link("https://example.com", "", "click"),
            r#"<a target="_blank" href="https://example.com">click</a>"#
        );
    }

    #[test]
    fn test_link_with_title() {
        assert_eq!(
            html().link("/a", "Home &amp; away", "click"),
            r#"<a target="_blank" href="/a" title="Home &amp; away">click</a>"#
        );
    }

    #[test]
    fn test_link_escapes_href_once() {
        assert_eq!(
            html().link("/a?b=1&c=2&amp;d", "", "x"),
            r#"<a target="_blank" href="/a?b=1&amp;c=2&amp;d">x</a>"#
        );
    }

    #[test]
    fn test_link_rejected_by_cleaner() {
        let renderer = HtmlRenderer::default().with_url_cleaner(RejectAll);
        assert_eq!(renderer.link("javascript:x", "", "click"), "click");
    }

    #[test]
    fn test_link_sanitized() {
        let renderer = HtmlRenderer::new(Options::default().with_sanitize(true));
        assert_eq!(renderer.link("javascript:alert(1)", "", "click"), "click");
        assert!(renderer.link("/safe", "", "click").starts_with("<a "));
    }

    #[test]
    fn test_link_base_url() {
        let renderer =
            HtmlRenderer::new(Options::default().with_base_url("https://example.com/docs/"));
        assert_eq!(
            renderer.link("guide", "", "g"),
            r#"<a target="_blank" href="https://example.com/docs/guide">g</a>"#
        );
    }

    #[test]
    fn test_image() {
        assert_eq!(
            html().image("image.png", "", "Alt text"),
            r#"<img src="image.png" alt="Alt text">"#
        );
        assert_eq!(
            xhtml().image("image.png", "Title", "Alt text"),
            r#"<img src="image.png" alt="Alt text" title="Title"/>"#
        );
    }

    #[test]
    fn test_image_rejected_by_cleaner() {
        let renderer = HtmlRenderer::default().with_url_cleaner(RejectAll);
        assert_eq!(renderer.image("x.png", "t", "alt"), "alt");
    }

    #[test]
    fn test_xhtml_toggle_slashes() {
        let plain = html();
        assert!(!plain.hr(None).contains("/>"));
        assert!(!plain.br().contains("/>"));
        assert!(!plain.checkbox(true, None).contains("/>"));
        assert!(!plain.image("a.png", "", "a").contains("/>"));

        let x = xhtml();
        assert!(x.hr(None).contains("/>"));
        assert!(x.br().contains("/>"));
        assert!(x.checkbox(true, None).contains("/>"));
        assert!(x.image("a.png", "", "a").contains("/>"));
    }

    #[test]
    fn test_origin_gating_across_renderers() {
        let r = html();
        let mut slugger = GithubSlugger::new();
        let outputs = [
            r.code("x", "rs", false, SPAN),
            r.blockquote("q", SPAN),
            r.heading("T", 1, "T", &mut slugger, SPAN),
            r.hr(SPAN),
            r.list("", true, 2, SPAN),
            r.listitem("i", false, false, SPAN),
            r.checkbox(true, SPAN),
            r.paragraph("p", SPAN),
            r.strong("s", SPAN),
            r.em("e", SPAN),
            r.codespan("c", SPAN),
            r.del("d", SPAN),
            r.text("t", SPAN),
        ];
        for out in outputs {
            assert!(!out.contains("data-origin-start"), "{out}");
        }
    }

    static_assertions::assert_impl_all!(super::HtmlRenderer: Send, Sync);
}
