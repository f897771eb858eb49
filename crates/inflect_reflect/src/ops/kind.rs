use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::{List, Map, Pointer, Struct};

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable view of a reflected value by its [`ReflectKind`].
///
/// Obtained from [`Reflect::reflect_ref`].
///
/// # Examples
///
/// ```
/// use inflect_reflect::{Reflect, ops::ReflectRef};
///
/// let value = vec![1_u8, 2, 3];
/// match value.reflect_ref() {
///     ReflectRef::List(list) => assert_eq!(list.len(), 3),
///     _ => unreachable!(),
/// }
/// ```
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Map(&'a dyn Map),
    Pointer(&'a dyn Pointer),
    Opaque(&'a dyn Reflect),
}

impl ReflectRef<'_> {
    /// Returns the [`ReflectKind`] of this view.
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
// ReflectMut

/// A mutable view of a reflected value by its [`ReflectKind`].
///
/// Obtained from [`Reflect::reflect_mut`].
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    List(&'a mut dyn List),
    Map(&'a mut dyn Map),
    Pointer(&'a mut dyn Pointer),
    Opaque(&'a mut dyn Reflect),
}

impl ReflectMut<'_> {
    /// Returns the [`ReflectKind`] of this view.
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
