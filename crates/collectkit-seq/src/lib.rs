//! collectkit-seq - traversal over eager and lazy sequences.
//!
//! Lists, keyed mappings and iterators all go through one [`Sequence`]
//! adapter, so [`chunk`] and [`drop`] are written once and stay lazy when
//! the input is lazy.
//!
//! # Example
//!
//! ```
//! use collectkit_seq::{chunk, drop, Sequence};
//!
//! // An unbounded generator is fine as long as we stop pulling.
//! let mut groups = chunk(Sequence::lazy(1u32..), 2, false).unwrap();
//! assert_eq!(groups.next().unwrap().into_values(), vec![1, 2]);
//!
//! let rest = drop(Sequence::associative([("a", 1), ("b", 2)]), 1);
//! assert_eq!(rest.into_values(), vec![2]);
//! ```

pub mod arrays;
pub mod chunk;
pub mod drop;
pub mod error;
pub mod json;
pub mod key;
pub mod sequence;

// Re-exports for convenience
pub use arrays::{
    append, compact, flatten, is_falsy, prepend, randomize, randomize_seeded, randomize_with,
    range, range_to, repeat,
};
pub use chunk::{chunk, Chunks, Group};
pub use drop::{drop, drop_first};
pub use error::SeqError;
pub use json::{chunk_json, drop_json};
pub use key::Key;
pub use sequence::{Cursor, Sequence, SequenceKind};
