//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// - `${VAR}` expands to the value of VAR, errors if unset
/// - `${VAR:-default}` expands to VAR if set, otherwise to `default`
///
/// Defaults may themselves contain references and are only expanded when
/// they are used. Bare `$VAR` syntax is never expanded, so a `$` in a URL
/// is safe.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    // Fast path: no expansion needed
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let body_start = start + 2;
        let Some(len) = reference_len(&rest[body_start..]) else {
            // Unterminated reference stays literal
            out.push_str(&rest[start..]);
            return Ok(out);
        };
        out.push_str(&expand_reference(&rest[body_start..body_start + len], field)?);
        rest = &rest[body_start + len + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Length of a reference body up to its matching `}`.
fn reference_len(body: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'$' if bytes.get(i + 1) == Some(&b'{') => {
                depth += 1;
                i += 1;
            }
            b'}' if depth == 0 => return Some(i),
            b'}' => depth -= 1,
            _ => {}
        }
        i += 1;
    }
    None
}

/// Expand the body of one `${...}` reference.
fn expand_reference(body: &str, field: &str) -> Result<String, ConfigError> {
    let (name, default) = match body.split_once(":-") {
        Some((name, default)) => (name, Some(default)),
        None => (body, None),
    };
    if let Some(default) = default
        && std::env::var(name).is_err()
    {
        return expand_env(default, field);
    }

    let reference = format!("${{{name}}}");
    shellexpand::env_with_context(&reference, |var| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(LookupError {
                var_name: var.to_owned(),
            }),
        }
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Error returned when environment variable lookup fails.
struct LookupError {
    var_name: String,
}
