//! Segment lookup over nested values.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::segment_index;

/// A value whose children can be addressed one path segment at a time.
///
/// Mappings resolve a segment as a key, lists resolve canonical decimal
/// segments as positions, and scalars have no children. Implement this for
/// your own types to make them usable with [`has_keys`](crate::has_keys).
/// Any `serde::Serialize` type can also be checked through
/// `serde_json::to_value`.
pub trait Lookup {
    fn lookup(&self, segment: &str) -> Option<&dyn Lookup>;
}

/// The child of a JSON value at `segment`.
pub(crate) fn json_child<'v>(value: &'v Value, segment: &str) -> Option<&'v Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => items.get(segment_index(segment)?),
        _ => None,
    }
}

impl Lookup for Value {
    fn lookup(&self, segment: &str) -> Option<&dyn Lookup> {
        json_child(self, segment).map(|child| child as &dyn Lookup)
    }
}

impl Lookup for Map<String, Value> {
    fn lookup(&self, segment: &str) -> Option<&dyn Lookup> {
        self.get(segment).map(|child| child as &dyn Lookup)
    }
}

impl<V: Lookup> Lookup for BTreeMap<String, V> {
    fn lookup(&self, segment: &str) -> Option<&dyn Lookup> {
        self.get(segment).map(|child| child as &dyn Lookup)
    }
}

impl<V: Lookup, S: BuildHasher> Lookup for HashMap<String, V, S> {
    fn lookup(&self, segment: &str) -> Option<&dyn Lookup> {
        self.get(segment).map(|child| child as &dyn Lookup)
    }
}

impl<V: Lookup, S: BuildHasher> Lookup for IndexMap<String, V, S> {
    fn lookup(&self, segment: &str) -> Option<&dyn Lookup> {
        self.get(segment).map(|child| child as &dyn Lookup)
    }
}

impl<V: Lookup> Lookup for Vec<V> {
    fn lookup(&self, segment: &str) -> Option<&dyn Lookup> {
        self.get(segment_index(segment)?).map(|child| child as &dyn Lookup)
    }
}

impl<V: Lookup> Lookup for Option<V> {
    fn lookup(&self, segment: &str) -> Option<&dyn Lookup> {
        self.as_ref()?.lookup(segment)
    }
}

impl<V: Lookup + ?Sized> Lookup for Box<V> {
    fn lookup(&self, segment: &str) -> Option<&dyn Lookup> {
        (**self).lookup(segment)
    }
}

impl<V: Lookup + ?Sized> Lookup for &V {
    fn lookup(&self, segment: &str) -> Option<&dyn Lookup> {
        (**self).lookup(segment)
    }
}

macro_rules! impl_leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Lookup for $ty {
                fn lookup(&self, _segment: &str) -> Option<&dyn Lookup> {
                    None
                }
            }
        )*
    };
}

impl_leaf!(
    bool, char, str, String, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32,
    f64,
);
