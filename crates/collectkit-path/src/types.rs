//! Type definitions for paths.

/// A step in a path.
///
/// Whether a step addresses a mapping key or a list position is decided
/// while traversing, by the type of the container it is applied to.
pub type PathStep = String;

/// A parsed path.
pub type Path = Vec<PathStep>;

/// The two path notations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `foo.bar.baz`, used for key existence checks and lookups.
    Dot,
    /// `/foo/bar/0`, JSON Pointer style, used for patching.
    Slash,
}

impl Dialect {
    pub fn delimiter(&self) -> char {
        match self {
            Dialect::Dot => '.',
            Dialect::Slash => '/',
        }
    }
}
