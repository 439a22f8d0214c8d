//! Path addressing over nested data.
//!
//! Two notations are supported: dotted paths (`foo.bar`) for key existence
//! checks and lookups, and slash paths (`/foo/bar/0`, JSON Pointer style) for
//! patching.
//!
//! # Example
//!
//! ```
//! use collectkit_path::{has_keys, parse_path, patch, Dialect};
//! use serde_json::json;
//!
//! let path = parse_path("/contacts/tel/0", Dialect::Slash).unwrap();
//! assert_eq!(path, vec!["contacts", "tel", "0"]);
//!
//! let doc = json!({"foo": {"bar": "x"}, "estomac": true});
//! assert!(has_keys(&doc, ["foo.bar", "estomac"], true));
//!
//! let patched = patch(&doc, [("/foo/bar", json!("y"))]).unwrap();
//! assert_eq!(patched, json!({"foo": {"bar": "y"}, "estomac": true}));
//! assert_eq!(doc["foo"]["bar"], json!("x"));
//! ```

use thiserror::Error;

pub mod has_keys;
pub mod lookup;
pub mod patch;

// Re-export types
pub mod types;
pub use types::{Dialect, Path, PathStep};

// Re-export validation
pub mod validate;
pub use validate::{validate_expression, validate_path};

pub use has_keys::{get, has_all_keys, has_any_key, has_key, has_keys};
pub use lookup::Lookup;
pub use patch::{patch, patch_value, ContainerKind};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("INVALID_PATH: empty expression")]
    Empty,
    #[error("INVALID_PATH: expected a leading '/'")]
    MissingLeadingSlash,
    #[error("INVALID_PATH: empty segment at position {index}")]
    EmptySegment { index: usize },
}

/// Unescapes a slash path segment.
///
/// `~1` is replaced with `/` and `~0` is replaced with `~`.
///
/// # Example
///
/// ```
/// use collectkit_path::unescape_segment;
///
/// assert_eq!(unescape_segment("a~0b"), "a~b");
/// assert_eq!(unescape_segment("c~1d"), "c/d");
/// assert_eq!(unescape_segment("no-escapes"), "no-escapes");
/// ```
pub fn unescape_segment(segment: &str) -> String {
    if !segment.contains('~') {
        return segment.to_string();
    }
    // ~1 first, so "~01" decodes to "~1" and not "/"
    segment.replace("~1", "/").replace("~0", "~")
}

/// Escapes a slash path segment, the inverse of [`unescape_segment`].
///
/// # Example
///
/// ```
/// use collectkit_path::escape_segment;
///
/// assert_eq!(escape_segment("a~b"), "a~0b");
/// assert_eq!(escape_segment("c/d"), "c~1d");
/// ```
pub fn escape_segment(segment: &str) -> String {
    if !segment.contains('/') && !segment.contains('~') {
        return segment.to_string();
    }
    segment.replace('~', "~0").replace('/', "~1")
}

/// Parse a path expression in the given dialect.
///
/// # Errors
///
/// Returns a [`PathError`] when the expression is empty, when a slash
/// expression lacks its leading `/`, or when any segment is empty.
///
/// # Example
///
/// ```
/// use collectkit_path::{parse_path, Dialect, PathError};
///
/// assert_eq!(parse_path("foo.bar", Dialect::Dot).unwrap(), vec!["foo", "bar"]);
/// assert_eq!(parse_path("/a~1b/0", Dialect::Slash).unwrap(), vec!["a/b", "0"]);
/// assert_eq!(parse_path("foo..bar", Dialect::Dot), Err(PathError::EmptySegment { index: 1 }));
/// ```
pub fn parse_path(expression: &str, dialect: Dialect) -> Result<Path, PathError> {
    validate_expression(expression, dialect)?;
    let body = match dialect {
        Dialect::Dot => expression,
        Dialect::Slash => &expression[1..],
    };
    let raw: Vec<&str> = body.split(dialect.delimiter()).collect();
    validate_path(&raw)?;
    let path = match dialect {
        Dialect::Dot => raw.into_iter().map(str::to_string).collect(),
        Dialect::Slash => raw.into_iter().map(unescape_segment).collect(),
    };
    Ok(path)
}

/// Parse a dotted path, `segment ("." segment)*`.
pub fn parse_dot_path(expression: &str) -> Result<Path, PathError> {
    parse_path(expression, Dialect::Dot)
}

/// Parse a slash path, `"/" segment ("/" segment)*`.
pub fn parse_slash_path(expression: &str) -> Result<Path, PathError> {
    parse_path(expression, Dialect::Slash)
}

/// Format segments as a slash path, escaping each one.
///
/// # Example
///
/// ```
/// use collectkit_path::format_slash_path;
///
/// assert_eq!(format_slash_path(&["foo".to_string(), "a/b".to_string()]), "/foo/a~1b");
/// ```
pub fn format_slash_path<S: AsRef<str>>(path: &[S]) -> String {
    let mut out = String::new();
    for segment in path {
        out.push('/');
        out.push_str(&escape_segment(segment.as_ref()));
    }
    out
}

/// Format segments as a dotted path.
pub fn format_dot_path<S: AsRef<str>>(path: &[S]) -> String {
    path.iter()
        .map(|segment| segment.as_ref())
        .collect::<Vec<&str>>()
        .join(".")
}

/// Check if a string is a canonical non-negative list index.
///
/// # Example
///
/// ```
/// use collectkit_path::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("123"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index("01"));
/// ```
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    // No leading zero unless it's just "0"
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

/// Check if a string consists only of ASCII digits.
pub fn is_integer(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    s.bytes().all(|b| b.is_ascii_digit())
}

/// The list position a segment addresses, if it is a canonical index.
pub(crate) fn segment_index(segment: &str) -> Option<usize> {
    if is_valid_index(segment) {
        segment.parse().ok()
    } else {
        None
    }
}
