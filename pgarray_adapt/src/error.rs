use thiserror::Error;

use crate::{Format, Oid, ValueKind};

/// A data error: the value or the bytes being adapted are invalid.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DataError {
    /// An unexpected token in a text array.
    #[error("malformed array, unexpected '{snippet}'")]
    MalformedArray {
        /// The start of the offending token.
        snippet: String,
    },
    /// A text array is not closed.
    #[error("malformed array, missing '}}'")]
    UnterminatedArray,
    /// Sibling lists differ in length.
    #[error("nested lists have inconsistent lengths: expected {expected}, found {found}")]
    InconsistentLengths {
        /// The length of the dimension.
        expected: usize,
        /// The length of the offending list.
        found: usize,
    },
    /// Sibling items differ in depth.
    #[error("nested lists have inconsistent depths")]
    InconsistentDepths,
    /// An empty list where the dimensions of the array are inferred.
    #[error("lists cannot contain empty lists")]
    EmptyNestedList,
    /// Binary data ends before a declared field.
    #[error("binary data truncated at offset {offset}: needed {needed} bytes, {available} available")]
    Truncated {
        /// The offset of the field.
        offset: usize,
        /// The size of the field.
        needed: usize,
        /// The number of bytes remaining.
        available: usize,
    },
    /// A binary array element has a negative length other than the `NULL` marker.
    #[error("invalid array element length {0}")]
    InvalidElementLength(i32),
    /// A binary array element is too large for its length field.
    #[error("array element of {0} bytes is too large")]
    ElementTooLarge(usize),
    /// An array dimension has too many elements for its extent field.
    #[error("array dimension of {0} elements is too large")]
    DimensionTooLarge(usize),
    /// A binary array dimension has no elements.
    #[error("array dimension {dimension} has an extent of 0")]
    ZeroExtent {
        /// The index of the dimension.
        dimension: usize,
    },
    /// An array is nested deeper than allowed.
    #[error("array nesting exceeds the maximum depth of {max_depth}")]
    NestingTooDeep {
        /// The maximum depth.
        max_depth: usize,
    },
    /// The bytes of a scalar are not a valid representation of its type.
    #[error("invalid {type_name} value: {reason}")]
    InvalidValue {
        /// The type being loaded.
        type_name: &'static str,
        /// Why the value is invalid.
        reason: String,
    },
    /// A dumper received a value of another kind.
    #[error("expected a {expected} value, found {found}")]
    UnexpectedValue {
        /// The kind handled by the dumper.
        expected: ValueKind,
        /// The kind received.
        found: ValueKind,
    },
}

impl DataError {
    /// Create a [`DataError::MalformedArray`] from the offending `token`.
    ///
    /// Tokens longer than 10 bytes are shortened.
    #[must_use]
    pub fn malformed_array(token: &[u8]) -> Self {
        let snippet = if token.len() > 10 {
            format!("{}...", String::from_utf8_lossy(&token[..10]))
        } else {
            String::from_utf8_lossy(token).into_owned()
        };
        Self::MalformedArray { snippet }
    }

    /// Create a [`DataError::InvalidValue`].
    #[must_use]
    pub fn invalid_value(type_name: &'static str, reason: impl ToString) -> Self {
        Self::InvalidValue {
            type_name,
            reason: reason.to_string(),
        }
    }
}

/// An adaptation error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AdaptError {
    /// Invalid data.
    #[error(transparent)]
    Data(#[from] DataError),
    /// No dumper is registered for the kind of value.
    #[error("cannot adapt {kind} values to the {format} format")]
    NoDumper {
        /// The value kind.
        kind: ValueKind,
        /// The target format.
        format: Format,
    },
    /// No loader is registered for the type.
    #[error("cannot load oid {oid} from the {format} format")]
    NoLoader {
        /// The type oid.
        oid: Oid,
        /// The source format.
        format: Format,
    },
    /// An internal invariant was violated.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_array_snippet() {
        assert_eq!(
            DataError::malformed_array(b"abc").to_string(),
            "malformed array, unexpected 'abc'"
        );
        assert_eq!(
            DataError::malformed_array(b"0123456789abc").to_string(),
            "malformed array, unexpected '0123456789...'"
        );
    }

    #[test]
    fn data_error_into_adapt_error() {
        let err: AdaptError = DataError::EmptyNestedList.into();
        assert_eq!(err, AdaptError::Data(DataError::EmptyNestedList));
        assert_eq!(err.to_string(), "lists cannot contain empty lists");
        assert_eq!(
            AdaptError::NoLoader {
                oid: 1082,
                format: Format::Binary
            }
            .to_string(),
            "cannot load oid 1082 from the binary format"
        );
    }
}
