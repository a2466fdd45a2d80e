use thiserror::Error;

/// Errors returned by [`Tree`](crate::Tree) operations and the [`Compare`]
/// ordering contract.
///
/// Inserting a value that is already present, or deleting one that is absent,
/// is not an error - both are no-ops.
///
/// [`Compare`]: crate::Compare
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Two values of different comparable kinds were compared.
    #[error("unable to compare, values have different types ({left} and {right})")]
    TypeMismatch {
        /// The kind of the left-hand value.
        left: &'static str,
        /// The kind of the right-hand value.
        right: &'static str,
    },

    /// A value outside the numeric and lexicographic domains was compared.
    #[error("unable to compare, invalid type \"{0}\"")]
    UnsupportedType(&'static str),

    /// An argument was rejected before any work was done.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The queried value does not exist in the tree.
    #[error("unable to calculate {0}, value not found")]
    NotFound(&'static str),

    /// A positional lookup exceeded the number of values in the tree.
    #[error("index {index} out of range for tree of length {len}")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The number of values in the tree.
        len: usize,
    },
}
