use alloc::borrow::Cow;
use core::fmt;

/// Why [`Reflect::reflect_clone`](crate::Reflect::reflect_clone) failed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReflectCloneError {
    /// `field` of `type_path` is hidden from reflection, so the record
    /// cannot be rebuilt field by field.
    FieldNotCloneable {
        type_path: Cow<'static, str>,
        field: Cow<'static, str>,
    },
}

impl fmt::Display for ReflectCloneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldNotCloneable { type_path, field } => write!(
                f,
                "cannot clone `{type_path}` through reflection: field `{field}` is ignored"
            ),
        }
    }
}

impl core::error::Error for ReflectCloneError {}
