//! Eager helpers over lists.
//!
//! These have no lazy counterpart: they take an owned list and return a new
//! one.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use serde_json::Value;

use crate::error::SeqError;

/// Appends `value` as the last item.
pub fn append<V>(mut items: Vec<V>, value: V) -> Vec<V> {
    items.push(value);
    items
}

/// Inserts `value` as the first item.
pub fn prepend<V>(mut items: Vec<V>, value: V) -> Vec<V> {
    items.insert(0, value);
    items
}

/// Whether a JSON value is falsy.
///
/// Falsy values are `null`, `false`, numeric zero, the empty string, the
/// string `"0"`, and empty arrays or objects.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(arr) => arr.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Removes every falsy item, see [`is_falsy`].
///
/// ```
/// use collectkit_seq::arrays::compact;
/// use serde_json::json;
///
/// let items = vec![json!(0), json!(1), json!(false), json!(2), json!(""), json!(3)];
/// assert_eq!(compact(items), vec![json!(1), json!(2), json!(3)]);
/// ```
pub fn compact(items: Vec<Value>) -> Vec<Value> {
    items.into_iter().filter(|item| !is_falsy(item)).collect()
}

/// Inclusive integer range from `start` to `end` stepping by `step`.
///
/// The sign of `step` is ignored; the direction follows `start` and `end`.
///
/// # Errors
///
/// Returns [`SeqError::InvalidArgument`] when `step` is 0.
///
/// ```
/// use collectkit_seq::arrays::range;
///
/// assert_eq!(range(1, 10, 2).unwrap(), vec![1, 3, 5, 7, 9]);
/// assert_eq!(range(2, -2, 1).unwrap(), vec![2, 1, 0, -1, -2]);
/// ```
pub fn range(start: i64, end: i64, step: i64) -> Result<Vec<i64>, SeqError> {
    if step == 0 {
        return Err(SeqError::InvalidArgument {
            name: "step",
            reason: "must not be zero",
        });
    }
    let step = usize::try_from(step.unsigned_abs()).unwrap_or(usize::MAX);
    let out = if start <= end {
        (start..=end).step_by(step).collect()
    } else {
        (end..=start).rev().step_by(step).collect()
    };
    Ok(out)
}

/// `1..=end`, i.e. [`range`] from 1 with a step of 1.
pub fn range_to(end: i64) -> Vec<i64> {
    if end >= 1 {
        (1..=end).collect()
    } else {
        (end..=1).rev().collect()
    }
}

/// `count` copies of `value`.
pub fn repeat<V: Clone>(value: V, count: usize) -> Vec<V> {
    vec![value; count]
}

/// Shuffles `items` into a random cyclic permutation using the thread RNG.
///
/// Every item moves: a list of two or more items never comes back in its
/// original order.
pub fn randomize<V>(items: Vec<V>) -> Vec<V> {
    randomize_with(items, &mut rand::thread_rng())
}

/// [`randomize`] with a reproducible xoshiro256** stream.
pub fn randomize_seeded<V>(items: Vec<V>, seed: u64) -> Vec<V> {
    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
    randomize_with(items, &mut rng)
}

/// [`randomize`] driven by the given generator (Sattolo's algorithm).
pub fn randomize_with<V, R: Rng>(mut items: Vec<V>, rng: &mut R) -> Vec<V> {
    let mut i = items.len();
    while i > 1 {
        i -= 1;
        let j = rng.gen_range(0..i);
        items.swap(i, j);
    }
    items
}

/// Splices nested arrays into the outer list.
///
/// With `shallow` only one level is removed, otherwise nesting is removed
/// completely.
///
/// ```
/// use collectkit_seq::arrays::flatten;
/// use serde_json::json;
///
/// let items = vec![json!(1), json!(2), json!([3, [[4]]])];
/// assert_eq!(flatten(items.clone(), false), vec![json!(1), json!(2), json!(3), json!(4)]);
/// assert_eq!(flatten(items, true), vec![json!(1), json!(2), json!(3), json!([[4]])]);
/// ```
pub fn flatten(items: Vec<Value>, shallow: bool) -> Vec<Value> {
    let mut out = Vec::with_capacity(items.len());
    flatten_into(items, shallow, &mut out);
    out
}

fn flatten_into(items: Vec<Value>, shallow: bool, out: &mut Vec<Value>) {
    for item in items {
        match item {
            Value::Array(inner) if shallow => out.extend(inner),
            Value::Array(inner) => flatten_into(inner, false, out),
            other => out.push(other),
        }
    }
}
