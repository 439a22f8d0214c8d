//! Applying batches of slash-path assignments to JSON values.
//!
//! Entries are applied in order against one working copy, so a later entry
//! sees what earlier entries wrote. Containers are created on the way down:
//!
//! - a missing or non-container value at the point where a segment must be
//!   resolved becomes an empty array if that segment is purely numeric, an
//!   empty object otherwise ([`ContainerKind::for_segment`]);
//! - an array addressed by a canonical index below its length is indexed;
//!   an index at or past its length extends the array, filling any gap
//!   with `null`;
//! - an array addressed by anything else (a name, a non-canonical number
//!   such as `01`, an index more than 65536 past the end) is turned into an
//!   object keyed by the decimal positions of its items, and the segment is
//!   then used as a key.
//!
//! Scalars in the way are overwritten without complaint: the last write wins.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::{format_slash_path, is_integer, parse_slash_path, segment_index, Path, PathError};

/// The kind of container created for a segment that has nothing to resolve
/// against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Sequence,
    Mapping,
}

impl ContainerKind {
    /// `Sequence` for a purely numeric segment, `Mapping` otherwise.
    ///
    /// ```
    /// use collectkit_path::ContainerKind;
    ///
    /// assert_eq!(ContainerKind::for_segment("0"), ContainerKind::Sequence);
    /// assert_eq!(ContainerKind::for_segment("name"), ContainerKind::Mapping);
    /// ```
    pub fn for_segment(segment: &str) -> Self {
        if is_integer(segment) {
            ContainerKind::Sequence
        } else {
            ContainerKind::Mapping
        }
    }

    pub fn empty(self) -> Value {
        match self {
            ContainerKind::Sequence => Value::Array(Vec::new()),
            ContainerKind::Mapping => Value::Object(Map::new()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerKind::Sequence => "sequence",
            ContainerKind::Mapping => "mapping",
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Furthest an index may point past the end of an array and still be padded.
const MAX_PADDING: usize = 1 << 16;

fn promote(value: &mut Value) {
    if let Value::Array(items) = value {
        let map: Map<String, Value> = std::mem::take(items)
            .into_iter()
            .enumerate()
            .map(|(i, item)| (i.to_string(), item))
            .collect();
        *value = Value::Object(map);
    }
}

/// The slot `segment` addresses inside `value`, created if needed.
fn slot_mut<'v>(value: &'v mut Value, segment: &str) -> &'v mut Value {
    let index = segment_index(segment).filter(|&index| match &*value {
        Value::Array(items) => index.saturating_sub(items.len()) <= MAX_PADDING,
        _ => true,
    });
    match (value, index) {
        (Value::Array(items), Some(index)) => {
            if index >= items.len() {
                if index > items.len() {
                    debug!(segment, len = items.len(), "padding array with nulls");
                }
                items.resize(index + 1, Value::Null);
            }
            &mut items[index]
        }
        (Value::Object(map), _) => map.entry(segment).or_insert(Value::Null),
        (other, _) => {
            if other.is_array() {
                debug!(segment, "promoting array to object");
                promote(other);
            } else {
                let kind = ContainerKind::for_segment(segment);
                debug!(
                    segment,
                    found = json_kind(other),
                    container = kind.as_str(),
                    "replacing non-container value"
                );
                *other = kind.empty();
            }
            slot_mut(other, segment)
        }
    }
}

fn assign(root: &mut Value, path: &[String], value: Value) {
    let Some((last, parents)) = path.split_last() else {
        *root = value;
        return;
    };
    let mut current = root;
    for segment in parents {
        current = slot_mut(current, segment);
    }
    *slot_mut(current, last) = value;
}

fn parse_patch_set<I, P, V>(patch_set: I) -> Result<Vec<(Path, Value)>, PathError>
where
    I: IntoIterator<Item = (P, V)>,
    P: AsRef<str>,
    V: Into<Value>,
{
    patch_set
        .into_iter()
        .map(|(expression, value)| -> Result<(Path, Value), PathError> {
            Ok((parse_slash_path(expression.as_ref())?, value.into()))
        })
        .collect()
}

fn apply(target: &mut Value, entries: Vec<(Path, Value)>) {
    for (path, value) in entries {
        trace!(path = %format_slash_path(&path), "applying patch entry");
        assign(target, &path, value);
    }
}

/// Apply `patch_set` to a copy of `subject` and return the copy.
///
/// Entries are applied in iteration order, so pass an ordered collection
/// when paths overlap. `subject` is never modified.
///
/// # Errors
///
/// Every path is parsed before anything is applied. If any of them is
/// invalid the call fails with its [`PathError`] and nothing is produced.
///
/// # Example
///
/// ```
/// use collectkit_path::patch;
/// use serde_json::json;
///
/// let doc = json!({"a": [1, 1, 1], "extra": 99});
/// let out = patch(&doc, [("/a/0", json!(2)), ("/b/0/c", json!(true))]).unwrap();
/// assert_eq!(out, json!({"a": [2, 1, 1], "extra": 99, "b": [{"c": true}]}));
/// ```
pub fn patch<I, P, V>(subject: &Value, patch_set: I) -> Result<Value, PathError>
where
    I: IntoIterator<Item = (P, V)>,
    P: AsRef<str>,
    V: Into<Value>,
{
    let entries = parse_patch_set(patch_set)?;
    let mut working = subject.clone();
    apply(&mut working, entries);
    Ok(working)
}

/// Apply `patch_set` to `target` in place.
///
/// # Errors
///
/// Same as [`patch`]; on error `target` is left untouched.
pub fn patch_value<I, P, V>(target: &mut Value, patch_set: I) -> Result<(), PathError>
where
    I: IntoIterator<Item = (P, V)>,
    P: AsRef<str>,
    V: Into<Value>,
{
    let entries = parse_patch_set(patch_set)?;
    apply(target, entries);
    Ok(())
}
