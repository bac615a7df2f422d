//! `spanmark render` command implementation.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use spanmark_config::{CliSettings, Config, RenderConfig};
use spanmark_renderer::{HtmlRenderer, MarkdownRenderer, Options};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render (default: read stdin).
    file: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover spanmark.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit data-origin-start/data-origin-end attributes.
    #[arg(long)]
    origin: bool,

    /// Self-close void elements (<hr />, <br/>).
    #[arg(long)]
    xhtml: bool,

    /// Reject javascript:, vbscript: and data: URLs.
    #[arg(long)]
    sanitize: bool,

    /// Do not emit heading id attributes.
    #[arg(long)]
    no_header_ids: bool,

    /// Prefix for heading ids (overrides config).
    #[arg(long)]
    header_prefix: Option<String>,

    /// Base URL for relative links and images (overrides config).
    #[arg(long)]
    base_url: Option<String>,

    /// Disable GitHub Flavored Markdown extensions.
    #[arg(long)]
    no_gfm: bool,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output (debug logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or input/output fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = self.cli_settings();
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            output.info(&format!("Using config: {}", path.display()));
        }

        let markdown = read_input(self.file.as_deref())?;
        tracing::debug!(bytes = markdown.len(), gfm = config.markdown.gfm, "Rendering markdown");

        let renderer = MarkdownRenderer::new(HtmlRenderer::new(render_options(&config.render)))
            .with_gfm(config.markdown.gfm);
        let html = renderer.render_markdown(&markdown);

        if let Some(path) = &self.output {
            std::fs::write(path, &html)?;
            output.success(&format!("Wrote {}", path.display()));
        } else {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }

        Ok(())
    }

    /// Build CLI overrides; flags left unset keep the config file value.
    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            include_origin: self.origin.then_some(true),
            header_ids: self.no_header_ids.then_some(false),
            header_prefix: self.header_prefix.clone(),
            xhtml: self.xhtml.then_some(true),
            sanitize: self.sanitize.then_some(true),
            base_url: self.base_url.clone(),
            gfm: self.no_gfm.then_some(false),
        }
    }
}

/// Map the `[render]` section onto renderer options.
fn render_options(config: &RenderConfig) -> Options {
    let mut options = Options::default()
        .with_origin(config.include_origin)
        .with_header_ids(config.header_ids)
        .with_header_prefix(config.header_prefix.as_str())
        .with_lang_prefix(config.lang_prefix.as_str())
        .with_xhtml(config.xhtml)
        .with_sanitize(config.sanitize);
    if let Some(base_url) = &config.base_url {
        options = options.with_base_url(base_url.as_str());
    }
    options
}

/// Read markdown from `path`, or from stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
