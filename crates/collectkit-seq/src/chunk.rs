//! Lazy, order-preserving partitioning into fixed-size groups.

use std::fmt;

use crate::error::SeqError;
use crate::key::Key;
use crate::sequence::{Cursor, Sequence};

/// One group of consecutive items produced by [`chunk`].
///
/// Entries keep the order in which they were pulled. Keys are never
/// deduplicated, so a group built from a keyed lazy source may repeat a key.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<V> {
    entries: Vec<(Key, V)>,
}

impl<V> Group<V> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn into_values(self) -> Vec<V> {
        self.entries.into_iter().map(|(_, v)| v).collect()
    }

    pub fn into_entries(self) -> Vec<(Key, V)> {
        self.entries
    }

    /// True when the keys are exactly `0..len` in order.
    pub fn is_list(&self) -> bool {
        self.keys()
            .enumerate()
            .all(|(i, key)| key.as_index() == Some(i))
    }
}

/// Iterator returned by [`chunk`].
pub struct Chunks<'a, V> {
    cursor: Cursor<'a, V>,
    size: usize,
    preserve_keys: bool,
    exhausted: bool,
}

impl<V> fmt::Debug for Chunks<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chunks")
            .field("size", &self.size)
            .field("preserve_keys", &self.preserve_keys)
            .field("exhausted", &self.exhausted)
            .finish_non_exhaustive()
    }
}

impl<V> Iterator for Chunks<'_, V> {
    type Item = Group<V>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let mut entries = Vec::new();
        while entries.len() < self.size {
            match self.cursor.next() {
                Some((key, value)) => {
                    let key = if self.preserve_keys {
                        key
                    } else {
                        Key::Index(entries.len())
                    };
                    entries.push((key, value));
                }
                None => {
                    // Lazy sources are not required to be fused.
                    self.exhausted = true;
                    break;
                }
            }
        }
        if entries.is_empty() {
            None
        } else {
            Some(Group { entries })
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        let (lower, upper) = self.cursor.size_hint();
        (
            lower.div_ceil(self.size),
            upper.map(|upper| upper.div_ceil(self.size)),
        )
    }
}

/// Splits `source` into groups of `size` consecutive items.
///
/// Groups are produced on demand, so unbounded lazy sources are fine as long
/// as the caller stops pulling. The last group may be shorter than `size`; an
/// empty trailing group is never produced. With `preserve_keys` each item
/// keeps its source key, otherwise keys restart at 0 in every group.
///
/// # Errors
///
/// Returns [`SeqError::InvalidArgument`] when `size` is 0. Nothing is pulled
/// from `source` in that case.
///
/// # Example
///
/// ```
/// use collectkit_seq::{chunk, Sequence};
///
/// let groups: Vec<Vec<i32>> = chunk(Sequence::indexed(vec![1, 2, 3, 4, 5]), 3, false)
///     .unwrap()
///     .map(|group| group.into_values())
///     .collect();
/// assert_eq!(groups, vec![vec![1, 2, 3], vec![4, 5]]);
/// ```
pub fn chunk<'a, V: 'a>(
    source: Sequence<'a, V>,
    size: usize,
    preserve_keys: bool,
) -> Result<Chunks<'a, V>, SeqError> {
    if size == 0 {
        return Err(SeqError::InvalidArgument {
            name: "size",
            reason: "must be a positive integer",
        });
    }
    Ok(Chunks {
        cursor: source.cursor(),
        size,
        preserve_keys,
        exhausted: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn values<V>(chunks: Chunks<'_, V>) -> Vec<Vec<V>> {
        chunks.map(Group::into_values).collect()
    }

    #[test]
    fn test_chunk_list() {
        let chunks = chunk(Sequence::indexed(vec![1, 2, 3, 4, 5]), 3, false).unwrap();
        assert_eq!(values(chunks), vec![vec![1, 2, 3], vec![4, 5]]);
    }

    #[test]
    fn test_chunk_shorter_than_size() {
        let chunks = chunk(Sequence::indexed(vec![1]), 3, false).unwrap();
        assert_eq!(values(chunks), vec![vec![1]]);
    }

    #[test]
    fn test_chunk_exact_multiple_has_no_empty_tail() {
        let chunks = chunk(Sequence::indexed(vec![1, 2, 3, 4]), 2, false).unwrap();
        assert_eq!(values(chunks), vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_chunk_empty_source() {
        let mut chunks = chunk(Sequence::<i32>::indexed(vec![]), 2, false).unwrap();
        assert_eq!(chunks.next(), None);
    }

    #[test]
    fn test_chunk_zero_size() {
        let result = chunk(Sequence::indexed(vec![1, 2]), 0, false);
        assert!(matches!(
            result,
            Err(SeqError::InvalidArgument { name: "size", .. })
        ));
    }

    #[test]
    fn test_chunk_zero_size_pulls_nothing() {
        let pulled = Cell::new(0);
        let source = (0..10).inspect(|_| pulled.set(pulled.get() + 1));
        assert!(chunk(Sequence::lazy(source), 0, false).is_err());
        assert_eq!(pulled.get(), 0);
    }

    #[test]
    fn test_chunk_associative_preserving_keys() {
        let seq = Sequence::associative([("a", 1), ("b", 2), ("c", 3), ("d", 4), ("e", 5)]);
        let groups: Vec<Vec<(Key, i32)>> = chunk(seq, 2, true)
            .unwrap()
            .map(Group::into_entries)
            .collect();
        assert_eq!(
            groups,
            vec![
                vec![(Key::from("a"), 1), (Key::from("b"), 2)],
                vec![(Key::from("c"), 3), (Key::from("d"), 4)],
                vec![(Key::from("e"), 5)],
            ]
        );
    }

    #[test]
    fn test_chunk_renumbers_keys_per_group() {
        let seq = Sequence::associative([("a", 1), ("b", 2), ("c", 3)]);
        let groups: Vec<Group<i32>> = chunk(seq, 2, false).unwrap().collect();
        assert!(groups.iter().all(Group::is_list));
        let keys: Vec<&Key> = groups[1].keys().collect();
        assert_eq!(keys, vec![&Key::Index(0)]);
    }

    #[test]
    fn test_chunk_indexed_preserving_keys() {
        let groups: Vec<Group<i32>> = chunk(Sequence::indexed(vec![1, 2, 3]), 2, true)
            .unwrap()
            .collect();
        let keys: Vec<Option<usize>> = groups[1].keys().map(Key::as_index).collect();
        assert_eq!(keys, vec![Some(2)]);
        assert!(groups[0].is_list());
        assert!(!groups[1].is_list());
    }

    #[test]
    fn test_chunk_keeps_repeated_keys() {
        let seq = Sequence::lazy_pairs(vec![("k", 1), ("k", 2), ("k", 3)]);
        let groups: Vec<Group<i32>> = chunk(seq, 2, true).unwrap().collect();
        assert_eq!(groups[0].len(), 2);
        assert!(groups.iter().flat_map(|g| g.keys()).all(|k| k == &Key::from("k")));
    }

    #[test]
    fn test_chunk_generator() {
        let chunks = chunk(Sequence::lazy((1..=5).map(|n| n)), 3, false).unwrap();
        assert_eq!(values(chunks), vec![vec![1, 2, 3], vec![4, 5]]);
    }

    #[test]
    fn test_chunk_unbounded_source() {
        let mut chunks = chunk(Sequence::lazy(0u64..), 4, false).unwrap();
        assert_eq!(chunks.next().map(Group::into_values), Some(vec![0, 1, 2, 3]));
        assert_eq!(chunks.next().map(Group::into_values), Some(vec![4, 5, 6, 7]));
    }

    #[test]
    fn test_chunk_pulls_incrementally() {
        let pulled = Cell::new(0);
        let source = (0..100).inspect(|_| pulled.set(pulled.get() + 1));
        let mut chunks = chunk(Sequence::lazy(source), 10, false).unwrap();
        assert_eq!(pulled.get(), 0);
        chunks.next();
        assert_eq!(pulled.get(), 10);
    }

    #[test]
    fn test_chunk_does_not_pull_after_exhaustion() {
        let pulled = Cell::new(0);
        let source = (0..3).inspect(|_| pulled.set(pulled.get() + 1));
        let mut chunks = chunk(Sequence::lazy(source), 2, false).unwrap();
        assert!(chunks.next().is_some());
        assert!(chunks.next().is_some());
        assert!(chunks.next().is_none());
        assert!(chunks.next().is_none());
        assert_eq!(pulled.get(), 3);
    }

    #[test]
    fn test_chunk_size_hint() {
        let chunks = chunk(Sequence::indexed(vec![1, 2, 3, 4, 5]), 2, false).unwrap();
        assert_eq!(chunks.size_hint(), (3, Some(3)));
    }

    #[test]
    fn test_group_accessors() {
        let group = chunk(Sequence::associative([("a", 1), ("b", 2)]), 5, true)
            .unwrap()
            .next()
            .unwrap();
        assert_eq!(group.len(), 2);
        assert!(!group.is_empty());
        assert_eq!(group.values().copied().collect::<Vec<_>>(), vec![1, 2]);
        let pairs: Vec<(String, i32)> = group.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        assert_eq!(pairs, vec![("a".to_string(), 1), ("b".to_string(), 2)]);
    }
}
