//! Markdown to HTML node renderers with source-position attributes.
//!
//! The core of this crate is [`HtmlRenderer`], a set of pure node renderers:
//! one method per markdown node kind (see [`RenderBackend`]), each turning an
//! already-rendered child fragment into the parent's HTML. Block and inline
//! elements can carry `data-origin-start`/`data-origin-end` attributes that
//! map the output back to byte offsets in the markdown source.
//!
//! [`MarkdownRenderer`] drives any backend from a `pulldown-cmark` parse.
//!
//! # Architecture
//!
//! - [`Options`]: frozen formatting configuration, built once per renderer
//! - [`Slugger`]: document-scoped heading ID allocation ([`GithubSlugger`])
//! - [`UrlCleaner`]: link and image URL sanitization ([`DefaultUrlCleaner`])
//! - [`Highlighter`]: optional code block highlighting callback
//!
//! Raw HTML nodes are passed through unchanged; the markdown parser is the
//! trust boundary for embedded markup.
//!
//! # Example
//!
//! ```
//! use spanmark_renderer::{HtmlRenderer, MarkdownRenderer, Options};
//!
//! let options = Options::default().with_origin(true);
//! let renderer = MarkdownRenderer::new(HtmlRenderer::new(options));
//!
//! let html = renderer.render_markdown("# Hello\n\n**Bold** text\n");
//! assert!(html.contains(r#"id="hello""#));
//! assert!(html.contains(r#"<p data-origin-start="9""#));
//! ```

mod backend;
mod code_block;
mod escape;
mod heading;
mod html;
mod options;
mod origin;
mod renderer;
mod slug;
mod state;
mod url;
mod util;

pub use backend::{Align, CellFlags, RenderBackend};
pub use code_block::{Highlighter, info_language};
pub use escape::{escape_html, escape_html_once, unescape_html};
pub use heading::is_hash_heading;
pub use html::HtmlRenderer;
pub use options::Options;
pub use origin::Origin;
pub use renderer::MarkdownRenderer;
pub use slug::{GithubSlugger, Slugger};
pub use url::{DefaultUrlCleaner, UrlCleaner, clean_url};
