use core::{error, fmt};

use crate::info::{ContainerInfo, OpaqueInfo, StructInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the "kinds" of a reflected type.
///
/// Each kind corresponds to a specific reflection trait,
/// such as [`Struct`](crate::ops::Struct) or [`List`](crate::ops::List).
///
/// A [`ReflectKind`] is obtained via [`Reflect::reflect_kind`](crate::Reflect::reflect_kind),
/// [`TypeInfo::kind`], or the `kind` method of [`ReflectRef`](crate::ops::ReflectRef)
/// and [`ReflectMut`](crate::ops::ReflectMut).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Struct,
    List,
    Map,
    Pointer,
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::List => f.pad("List"),
            Self::Map => f.pad("Map"),
            Self::Pointer => f.pad("Pointer"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Error returned when a value is not the expected [`ReflectKind`].
#[derive(Debug)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information for reflected types.
///
/// Obtained from [`Typed::type_info`] when the type is known, or from
/// [`DynamicTyped::reflect_type_info`] on a `dyn Reflect`.
///
/// [`Typed::type_info`]: crate::info::Typed::type_info
/// [`DynamicTyped::reflect_type_info`]: crate::info::DynamicTyped::reflect_type_info
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    List(ContainerInfo),
    Map(ContainerInfo),
    Pointer(ContainerInfo),
    Opaque(OpaqueInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Convert [`TypeInfo`] to specific type information.
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_struct: Struct => StructInfo);

    /// Returns the underlying [`Type`] metadata.
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Pointer(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    crate::info::impl_type_fn!();

    /// Returns the [`ReflectKind`] for this `TypeInfo`.
    ///
    /// # Examples
    ///
    /// ```
    /// use inflect_reflect::info::{Typed, ReflectKind};
    ///
    /// assert_eq!(i32::type_info().kind(), ReflectKind::Opaque);
    /// assert_eq!(<Vec<i32>>::type_info().kind(), ReflectKind::List);
    /// assert_eq!(<Option<i32>>::type_info().kind(), ReflectKind::Pointer);
    /// ```
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec::Vec;

    use super::{ReflectKind, TypeInfo};
    use crate::info::Typed;

    #[test]
    fn cast_reports_both_kinds() {
        let info: &TypeInfo = <u32 as Typed>::type_info();
        let err = info.as_struct().unwrap_err();
        assert_eq!(err.expected, ReflectKind::Struct);
        assert_eq!(err.received, ReflectKind::Opaque);
        assert_eq!(
            err.to_string(),
            "reflect kind mismatch: expected Struct, received Opaque"
        );
        assert!(<Vec<u32> as Typed>::type_info().as_struct().is_err());
    }
}
