//! URL cleaning for link and image targets.
//!
//! The renderer calls a [`UrlCleaner`] for every `href`/`src`. Returning `None`
//! rejects the URL; the renderer then falls back to the plain link text.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::escape::unescape_html;

/// Characters left untouched when encoding a full URI.
const URI_UNESCAPED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

/// Schemes rejected when sanitizing.
const UNSAFE_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

/// URL cleaning and sanitization hook.
///
/// Implementations must be pure: the same arguments always produce the same
/// result.
pub trait UrlCleaner: Send + Sync {
    /// Clean `href`, or return `None` to reject it.
    ///
    /// # Arguments
    ///
    /// * `sanitize` - Whether unsafe schemes should be rejected
    /// * `base_url` - Optional base for resolving relative URLs
    /// * `href` - The URL as written in the source
    fn clean(&self, sanitize: bool, base_url: Option<&str>, href: &str) -> Option<String>;
}

/// Default [`UrlCleaner`] backed by [`clean_url`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultUrlCleaner;

impl UrlCleaner for DefaultUrlCleaner {
    fn clean(&self, sanitize: bool, base_url: Option<&str>, href: &str) -> Option<String> {
        clean_url(sanitize, base_url, href)
    }
}

/// Sanitize, resolve and percent-encode a URL.
///
/// - With `sanitize`, URLs whose decoded scheme is `javascript:`, `vbscript:`
///   or `data:` are rejected, as are URLs with malformed percent escapes.
/// - With a `base_url`, relative URLs are resolved against it.
/// - The result is percent-encoded, keeping existing `%XX` escapes intact.
///
/// # Examples
///
/// ```
/// use spanmark_renderer::clean_url;
///
/// assert_eq!(clean_url(true, None, "javascript:alert(1)"), None);
/// assert_eq!(
///     clean_url(false, Some("https://example.com/docs/intro"), "guide"),
///     Some("https://example.com/docs/guide".to_owned())
/// );
/// ```
#[must_use]
pub fn clean_url(sanitize: bool, base_url: Option<&str>, href: &str) -> Option<String> {
    if sanitize && is_unsafe_url(href) {
        return None;
    }

    let resolved = match base_url {
        Some(base) if !base.is_empty() && !is_origin_independent(href) => {
            resolve_url(base, href)
        }
        _ => href.to_owned(),
    };

    Some(utf8_percent_encode(&resolved, URI_UNESCAPED).to_string().replace("%25", "%"))
}

/// Check whether a URL uses a script-executing or inline-data scheme.
///
/// Entities and percent escapes are decoded first and every character other
/// than word characters and `:` is dropped, so `java&#x09;script:` and
/// `%6Aavascript:` are caught as well.
fn is_unsafe_url(href: &str) -> bool {
    let Some(decoded) = decode_uri_component(&unescape_html(href)) else {
        return true;
    };
    let scheme: String = decoded
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == ':')
        .collect::<String>()
        .to_lowercase();
    UNSAFE_SCHEMES.iter().any(|s| scheme.starts_with(s))
}

/// Strict percent-decoding: malformed escapes and invalid UTF-8 yield `None`.
fn decode_uri_component(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    for (i, _) in s.match_indices('%') {
        let well_formed = bytes
            .get(i + 1..i + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !well_formed {
            return None;
        }
    }
    percent_decode_str(s)
        .decode_utf8()
        .ok()
        .map(std::borrow::Cow::into_owned)
}

/// URLs that must not be resolved against a base: empty, absolute with a
/// scheme, or query/fragment-only.
fn is_origin_independent(href: &str) -> bool {
    if href.is_empty() || href.starts_with('?') || href.starts_with('#') {
        return true;
    }
    let mut chars = href.chars();
    if !chars.next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    for c in chars {
        match c {
            ':' => return true,
            c if c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-') => {}
            _ => return false,
        }
    }
    false
}

/// Byte offset just past the scheme colon (`https:`), if the base has one.
fn scheme_end(base: &str) -> Option<usize> {
    base.find(':').filter(|&i| i > 0).map(|i| i + 1)
}

/// Byte offset just past the authority (`https://host`), if the base has a scheme.
fn authority_end(base: &str) -> Option<usize> {
    let mut end = scheme_end(base)?;
    let rest = &base[end..];
    end += rest.len() - rest.trim_start_matches('/').len();
    let rest = &base[end..];
    end += rest.find('/').unwrap_or(rest.len());
    Some(end)
}

/// Normalize a base URL into the directory that relative URLs resolve against.
///
/// - `https://example.com` → `https://example.com/`
/// - `https://example.com/docs/page` → `https://example.com/docs/`
/// - `docs/page` → `docs/`
fn normalize_base(base: &str) -> String {
    if authority_end(base) == Some(base.len()) {
        return format!("{base}/");
    }
    match base.rfind('/') {
        Some(i) => base[..=i].to_owned(),
        None => String::new(),
    }
}

/// Resolve `href` against `base`.
///
/// - `//cdn.example.com/x` → keeps only the base scheme
/// - `/x` → keeps the base scheme and host
/// - `x` → appended to the base directory
///
/// Bases without a scheme leave `//x` and `/x` unchanged.
fn resolve_url(base: &str, href: &str) -> String {
    let base = normalize_base(base);
    let relative_base = !base.contains(':');

    if href.starts_with("//") {
        if relative_base {
            return href.to_owned();
        }
        let end = scheme_end(&base).unwrap_or(base.len());
        format!("{}{href}", &base[..end])
    } else if href.starts_with('/') {
        if relative_base {
            return href.to_owned();
        }
        let end = authority_end(&base).unwrap_or(base.len());
        format!("{}{href}", &base[..end])
    } else {
        format!("{base}{href}")
    }
}
