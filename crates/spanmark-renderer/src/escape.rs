//! HTML escaping shared by every renderer.
//!
//! Two modes exist:
//! - [`escape_html`] encodes every special character, unconditionally.
//! - [`escape_html_once`] leaves `&` alone when it already starts a character
//!   reference, so values that were escaped upstream are not escaped twice.
//!
//! Both modes encode quotes, so either is safe inside a double-quoted attribute.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static CHAR_REF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)&(#\d+|#x[0-9a-f]+|[a-z0-9_]+);?").unwrap());

fn push_escaped(c: char, out: &mut String) -> bool {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        _ => return false,
    }
    true
}

/// Escape HTML special characters.
///
/// Used for code bodies and values (such as the language class) that never
/// contain intentional entities.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        if !push_escaped(c, &mut result) {
            result.push(c);
        }
    }
    result
}

/// Escape HTML special characters, preserving existing character references.
///
/// `&amp;`, `&#39;` and `&#x2F;` pass through untouched; a bare `&` is encoded.
#[must_use]
pub fn escape_html_once(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for (i, c) in s.char_indices() {
        if c == '&' && starts_char_ref(&s[i + 1..]) {
            result.push('&');
        } else if !push_escaped(c, &mut result) {
            result.push(c);
        }
    }
    result
}

/// Whether `rest` (the text after an `&`) is the body of a character reference.
fn starts_char_ref(rest: &str) -> bool {
    let name = rest.strip_prefix('#').unwrap_or(rest);
    let len = name
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
        .count();
    len > 0 && name[len..].starts_with(';')
}

/// Decode numeric character references and `&colon;`.
///
/// Other named references are dropped entirely. This is only meant for
/// inspecting URL schemes, not for producing display text.
#[must_use]
pub fn unescape_html(s: &str) -> String {
    CHAR_REF_RE
        .replace_all(s, |caps: &Captures<'_>| {
            let name = caps[1].to_ascii_lowercase();
            if name == "colon" {
                return ":".to_owned();
            }
            let code = if let Some(hex) = name.strip_prefix("#x") {
                u32::from_str_radix(hex, 16).ok()
            } else if let Some(dec) = name.strip_prefix('#') {
                dec.parse::<u32>().ok()
            } else {
                return String::new();
            };
            code.and_then(char::from_u32)
                .unwrap_or(char::REPLACEMENT_CHARACTER)
                .to_string()
        })
        .into_owned()
}
