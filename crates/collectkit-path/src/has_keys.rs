//! Key existence checks and lookups by dotted path.

use serde_json::Value;

use crate::lookup::{json_child, Lookup};
use crate::parse_dot_path;

fn exists<S: Lookup + ?Sized>(subject: &S, segments: &[String]) -> bool {
    let Some((first, rest)) = segments.split_first() else {
        return false;
    };
    let Some(mut current) = subject.lookup(first) else {
        return false;
    };
    for segment in rest {
        match current.lookup(segment) {
            Some(child) => current = child,
            None => return false,
        }
    }
    true
}

/// Whether a single dotted path resolves in `subject`.
///
/// Presence is structural: a `null` or `false` leaf still counts. A path
/// that does not parse never resolves.
pub fn has_key<S: Lookup + ?Sized>(subject: &S, path: &str) -> bool {
    match parse_dot_path(path) {
        Ok(segments) => exists(subject, &segments),
        Err(_) => false,
    }
}

/// Check dotted `paths` against `subject`.
///
/// With `require_all` every path must resolve and the check stops at the
/// first missing one. Without it a single resolving path is enough and the
/// check stops there. An empty `paths` asks for nothing and is satisfied in
/// both modes, which keeps the check monotonic: whenever it holds with
/// `require_all` it also holds without.
///
/// # Example
///
/// ```
/// use collectkit_path::has_keys;
/// use serde_json::json;
///
/// let a = json!({"foo": "bar"});
/// assert!(!has_keys(&a, ["foo", "foz"], true));
/// assert!(has_keys(&a, ["foo", "foz"], false));
///
/// let b = json!({"foo": {"bar": "foie"}, "estomac": true});
/// assert!(has_keys(&b, ["foo.bar", "estomac"], true));
/// ```
pub fn has_keys<S, I, P>(subject: &S, paths: I, require_all: bool) -> bool
where
    S: Lookup + ?Sized,
    I: IntoIterator<Item = P>,
    P: AsRef<str>,
{
    let mut paths = paths.into_iter().peekable();
    if require_all || paths.peek().is_none() {
        paths.all(|path| has_key(subject, path.as_ref()))
    } else {
        paths.any(|path| has_key(subject, path.as_ref()))
    }
}

/// [`has_keys`] requiring every path.
pub fn has_all_keys<S, I, P>(subject: &S, paths: I) -> bool
where
    S: Lookup + ?Sized,
    I: IntoIterator<Item = P>,
    P: AsRef<str>,
{
    has_keys(subject, paths, true)
}

/// [`has_keys`] requiring at least one path.
pub fn has_any_key<S, I, P>(subject: &S, paths: I) -> bool
where
    S: Lookup + ?Sized,
    I: IntoIterator<Item = P>,
    P: AsRef<str>,
{
    has_keys(subject, paths, false)
}

/// Get the value at a dotted path.
///
/// Returns `None` if the path doesn't exist or doesn't parse.
///
/// # Example
///
/// ```
/// use collectkit_path::get;
/// use serde_json::json;
///
/// let doc = json!({"foo": {"bar": [10, 20]}});
/// assert_eq!(get(&doc, "foo.bar.1"), Some(&json!(20)));
/// assert_eq!(get(&doc, "foo.baz"), None);
/// ```
pub fn get<'a>(subject: &'a Value, path: &str) -> Option<&'a Value> {
    let segments = parse_dot_path(path).ok()?;
    segments
        .iter()
        .try_fold(subject, |current, segment| json_child(current, segment))
}
