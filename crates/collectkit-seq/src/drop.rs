//! Skipping a prefix of a sequence.

use crate::key::Key;
use crate::sequence::Sequence;

/// Removes the first `count` items of `source`.
///
/// The result stays in the representation family of the input. An indexed
/// sequence keeps the remaining items in a fresh list, so their positions
/// restart at 0. An associative sequence keeps the remaining entries with
/// their keys. A lazy sequence stays lazy: nothing is pulled until the
/// result is iterated, then the first `count` items are consumed and
/// discarded. Positional keys of the items that follow restart at 0, as
/// for an indexed sequence; named keys pass through.
///
/// Dropping more items than the source holds yields an empty sequence.
///
/// ```
/// use collectkit_seq::{drop, Sequence};
///
/// assert_eq!(drop(Sequence::indexed(vec![1, 2, 3]), 2).into_values(), vec![3]);
/// assert!(drop(Sequence::indexed(vec![1, 2, 3]), 5).into_values().is_empty());
/// ```
pub fn drop<'a, V: 'a>(source: Sequence<'a, V>, count: usize) -> Sequence<'a, V> {
    if count == 0 {
        return source;
    }
    match source {
        Sequence::Indexed(mut items) => {
            let count = count.min(items.len());
            items.drain(..count);
            Sequence::Indexed(items)
        }
        Sequence::Associative(mut map) => {
            let count = count.min(map.len());
            map.drain(..count);
            Sequence::Associative(map)
        }
        Sequence::Lazy(iter) => {
            let mut position = 0;
            Sequence::Lazy(Box::new(iter.skip(count).map(move |(key, value)| match key {
                Key::Index(_) => {
                    let key = Key::Index(position);
                    position += 1;
                    (key, value)
                }
                name => (name, value),
            })))
        }
    }
}

/// [`drop`] with a count of 1.
pub fn drop_first<'a, V: 'a>(source: Sequence<'a, V>) -> Sequence<'a, V> {
    drop(source, 1)
}
