use alloc::string::String;

use thiserror::Error;

use crate::ops::ReflectCloneError;
use crate::tags::TagParseError;

/// Failure of an accessor or field-tree operation.
///
/// No operation has partial effects: when an error is returned,
/// the record is unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessError {
    /// A read went to a value that is not a record.
    #[error("`{type_path}` is not a record")]
    InvalidType { type_path: &'static str },
    /// A write went to a value that is neither a record nor a non-empty
    /// pointer to one.
    #[error("`{type_path}` is not a record or a non-empty pointer to one")]
    NonPointer { type_path: &'static str },
    /// No field of that name, or the name is ambiguous between embedded records.
    #[error("field `{field}` not found")]
    NotFound { field: String },
    /// The field has no non-empty value for that tag key.
    #[error("tag key `{key}` not found on field `{field}`")]
    TagNotFound { field: String, key: String },
    /// The field does not accept writes.
    #[error("field `{field}` is not writable")]
    NoSet { field: String },
    /// A value's type is not exactly the field's type.
    #[error("field `{field}` holds `{expected}`, got `{found}`")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
    /// Compare-and-swap found another value than the expected one.
    #[error("field `{field}` does not hold the expected value")]
    NotMatched { field: String },
    /// Compare-and-swap on a type without equality.
    #[error("field `{field}` of type `{type_path}` cannot be compared")]
    NotComparable {
        field: String,
        type_path: &'static str,
    },
    #[error("field `{field}` cannot be cloned")]
    NotCloneable {
        field: String,
        #[source]
        source: ReflectCloneError,
    },
    #[error("malformed tag on field `{field}`")]
    MalformedTag {
        field: String,
        #[source]
        source: TagParseError,
    },
}

impl AccessError {
    /// Whether the error means "nothing there": an unknown field or tag key.
    ///
    /// ```
    /// # use inflect_reflect::AccessError;
    /// let err = AccessError::NotFound { field: "name".into() };
    /// assert!(err.is_not_found());
    /// assert!(!err.is_retryable());
    /// ```
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::TagNotFound { .. })
    }

    /// Whether repeating the operation with fresh input may succeed.
    ///
    /// Only a lost compare-and-swap race is retryable.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::NotMatched { .. })
    }
}
