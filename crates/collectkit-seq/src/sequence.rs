//! The sequence adapter.
//!
//! A [`Sequence`] wraps one of three representations of "some items in
//! order" and turns any of them into a single-pass [`Cursor`] of
//! `(Key, value)` pairs. Chunking and dropping are written once against the
//! cursor and work for every representation, lazy ones included.

use std::fmt;

use indexmap::IndexMap;

use crate::key::Key;

/// Which representation a [`Sequence`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    Indexed,
    Associative,
    Lazy,
}

impl SequenceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SequenceKind::Indexed => "indexed",
            SequenceKind::Associative => "associative",
            SequenceKind::Lazy => "lazy",
        }
    }
}

/// An ordered collection of items, eager or lazily produced.
pub enum Sequence<'a, V> {
    /// Random access, known length. Keys are positions.
    Indexed(Vec<V>),
    /// Known length, keys kept in insertion order.
    Associative(IndexMap<Key, V>),
    /// Forward only, single pass, length unknown until exhausted.
    Lazy(Box<dyn Iterator<Item = (Key, V)> + 'a>),
}

impl<'a, V: 'a> Sequence<'a, V> {
    pub fn indexed(items: Vec<V>) -> Self {
        Sequence::Indexed(items)
    }

    /// Builds an associative sequence. A repeated key keeps its first
    /// position and takes the last value.
    pub fn associative<K, I>(pairs: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, V)>,
    {
        Sequence::Associative(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Wraps a generator-like iterator. Items are keyed by the order in which
    /// they are produced, starting at 0.
    ///
    /// ```
    /// use collectkit_seq::{Key, Sequence};
    ///
    /// let seq = Sequence::lazy((1..).map(|n| n * 10).take(2));
    /// assert_eq!(seq.into_pairs(), vec![(Key::Index(0), 10), (Key::Index(1), 20)]);
    /// ```
    pub fn lazy<I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        I::IntoIter: 'a,
    {
        Sequence::Lazy(Box::new(
            values
                .into_iter()
                .enumerate()
                .map(|(i, v)| (Key::Index(i), v)),
        ))
    }

    /// Wraps an external iterator that supplies its own keys.
    pub fn lazy_pairs<K, I>(pairs: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, V)>,
        I::IntoIter: 'a,
    {
        Sequence::Lazy(Box::new(pairs.into_iter().map(|(k, v)| (k.into(), v))))
    }

    pub fn kind(&self) -> SequenceKind {
        match self {
            Sequence::Indexed(_) => SequenceKind::Indexed,
            Sequence::Associative(_) => SequenceKind::Associative,
            Sequence::Lazy(_) => SequenceKind::Lazy,
        }
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self, Sequence::Lazy(_))
    }

    /// Number of items, when it is known without consuming anything.
    pub fn len_hint(&self) -> Option<usize> {
        match self {
            Sequence::Indexed(items) => Some(items.len()),
            Sequence::Associative(map) => Some(map.len()),
            Sequence::Lazy(iter) => match iter.size_hint() {
                (lower, Some(upper)) if lower == upper => Some(lower),
                _ => None,
            },
        }
    }

    /// Consumes the sequence into its canonical cursor.
    pub fn cursor(self) -> Cursor<'a, V> {
        let inner = match self {
            Sequence::Indexed(items) => CursorInner::Indexed(items.into_iter().enumerate()),
            Sequence::Associative(map) => CursorInner::Associative(map.into_iter()),
            Sequence::Lazy(iter) => CursorInner::Lazy(iter),
        };
        Cursor { inner }
    }

    pub fn into_values(self) -> Vec<V> {
        self.cursor().map(|(_, v)| v).collect()
    }

    pub fn into_pairs(self) -> Vec<(Key, V)> {
        self.cursor().collect()
    }
}

impl<'a, V: 'a> IntoIterator for Sequence<'a, V> {
    type Item = (Key, V);
    type IntoIter = Cursor<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

impl<V> From<Vec<V>> for Sequence<'_, V> {
    fn from(items: Vec<V>) -> Self {
        Sequence::Indexed(items)
    }
}

impl<V> From<IndexMap<Key, V>> for Sequence<'_, V> {
    fn from(map: IndexMap<Key, V>) -> Self {
        Sequence::Associative(map)
    }
}

impl<V: fmt::Debug> fmt::Debug for Sequence<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sequence::Indexed(items) => f.debug_tuple("Indexed").field(items).finish(),
            Sequence::Associative(map) => f.debug_tuple("Associative").field(map).finish(),
            Sequence::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

/// A single-pass forward enumerator over a [`Sequence`].
pub struct Cursor<'a, V> {
    inner: CursorInner<'a, V>,
}

enum CursorInner<'a, V> {
    Indexed(std::iter::Enumerate<std::vec::IntoIter<V>>),
    Associative(indexmap::map::IntoIter<Key, V>),
    Lazy(Box<dyn Iterator<Item = (Key, V)> + 'a>),
}

impl<V> Iterator for Cursor<'_, V> {
    type Item = (Key, V);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            CursorInner::Indexed(iter) => iter.next().map(|(i, v)| (Key::Index(i), v)),
            CursorInner::Associative(iter) => iter.next(),
            CursorInner::Lazy(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            CursorInner::Indexed(iter) => iter.size_hint(),
            CursorInner::Associative(iter) => iter.size_hint(),
            CursorInner::Lazy(iter) => iter.size_hint(),
        }
    }
}
