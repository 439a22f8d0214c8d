//! Adapting `serde_json` values into sequences and back.

use serde_json::map::Entry;
use serde_json::{Map, Value};
use tracing::debug;

use crate::chunk::{chunk, Group};
use crate::drop::drop;
use crate::error::SeqError;
use crate::key::Key;
use crate::sequence::Sequence;

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Arrays become indexed sequences, objects become associative ones keyed
/// by name. Scalars are rejected.
impl TryFrom<Value> for Sequence<'static, Value> {
    type Error = SeqError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => Ok(Sequence::Indexed(items)),
            Value::Object(map) => Ok(Sequence::associative(map)),
            other => Err(SeqError::UnsupportedSource {
                kind: kind_of(&other),
            }),
        }
    }
}

/// `Key::Index(0)` and `Key::Name("0")` share the object key `"0"`, as do
/// repeated names; the first entry wins.
fn entries_into_json(entries: Vec<(Key, Value)>, as_list: bool) -> Value {
    if as_list {
        return Value::Array(entries.into_iter().map(|(_, v)| v).collect());
    }
    let mut map = Map::new();
    for (key, value) in entries {
        match map.entry(key.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
            Entry::Occupied(slot) => {
                debug!(key = slot.key().as_str(), "object key collision, keeping first value");
            }
        }
    }
    Value::Object(map)
}

impl Group<Value> {
    /// An array when the keys are `0..len` in order, an object otherwise.
    pub fn into_json(self) -> Value {
        let as_list = self.is_list();
        entries_into_json(self.into_entries(), as_list)
    }
}

impl Sequence<'_, Value> {
    /// Indexed sequences become arrays and associative ones objects. A lazy
    /// sequence becomes an array when its keys are `0..n` in order, an object
    /// otherwise.
    pub fn into_json(self) -> Value {
        match self {
            Sequence::Indexed(items) => Value::Array(items),
            Sequence::Associative(map) => entries_into_json(map.into_iter().collect(), false),
            lazy => {
                let entries = lazy.into_pairs();
                let as_list = entries
                    .iter()
                    .enumerate()
                    .all(|(i, (key, _))| key.as_index() == Some(i));
                entries_into_json(entries, as_list)
            }
        }
    }
}

/// [`chunk`] over a JSON array or object, collecting the groups into a JSON
/// array.
///
/// ```
/// use collectkit_seq::chunk_json;
/// use serde_json::json;
///
/// let doc = json!({"a": 1, "b": 2, "c": 3});
/// assert_eq!(
///     chunk_json(&doc, 2, true).unwrap(),
///     json!([{"a": 1, "b": 2}, {"c": 3}])
/// );
/// ```
pub fn chunk_json(value: &Value, size: usize, preserve_keys: bool) -> Result<Value, SeqError> {
    let source = Sequence::try_from(value.clone())?;
    let groups = chunk(source, size, preserve_keys)?
        .map(Group::into_json)
        .collect();
    Ok(Value::Array(groups))
}

/// [`drop`] over a JSON array or object.
pub fn drop_json(value: &Value, count: usize) -> Result<Value, SeqError> {
    let source = Sequence::try_from(value.clone())?;
    Ok(drop(source, count).into_json())
}
