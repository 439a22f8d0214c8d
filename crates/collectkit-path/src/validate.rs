//! Validation of path expressions and parsed paths.

use crate::types::Dialect;
use crate::PathError;

/// Validate the shape of a path expression before it is split.
///
/// # Errors
///
/// - [`PathError::Empty`] for an empty expression
/// - [`PathError::MissingLeadingSlash`] for a slash expression that does not
///   start with `/`
///
/// # Example
///
/// ```
/// use collectkit_path::{validate_expression, Dialect};
///
/// validate_expression("foo.bar", Dialect::Dot).unwrap();
/// validate_expression("/foo/bar", Dialect::Slash).unwrap();
/// validate_expression("foo/bar", Dialect::Slash).unwrap_err();
/// validate_expression("", Dialect::Dot).unwrap_err();
/// ```
pub fn validate_expression(expression: &str, dialect: Dialect) -> Result<(), PathError> {
    if expression.is_empty() {
        return Err(PathError::Empty);
    }
    if dialect == Dialect::Slash && !expression.starts_with('/') {
        return Err(PathError::MissingLeadingSlash);
    }
    Ok(())
}

/// Validate the segments of a path.
///
/// # Errors
///
/// Returns [`PathError::EmptySegment`] with the position of the first empty
/// segment, or [`PathError::Empty`] when there are no segments at all.
pub fn validate_path<S: AsRef<str>>(path: &[S]) -> Result<(), PathError> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }
    match path.iter().position(|segment| segment.as_ref().is_empty()) {
        Some(index) => Err(PathError::EmptySegment { index }),
        None => Ok(()),
    }
}
