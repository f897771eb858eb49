use crate::Reflect;
use crate::info::{Type, TypePath, impl_type_fn};

/// Type information for a list, a map or a pointer.
///
/// Only the container type itself is recorded. Field access and the field
/// tree look at the live contents, so item types are never consulted.
///
/// # Examples
///
/// ```
/// use inflect_reflect::info::{ReflectKind, Typed};
///
/// let info = <Option<String>>::type_info();
/// assert_eq!(info.kind(), ReflectKind::Pointer);
/// assert_eq!(info.type_name(), "Option<String>");
/// ```
#[derive(Debug, Clone)]
pub struct ContainerInfo {
    ty: Type,
}

impl ContainerInfo {
    impl_type_fn!(ty);

    #[inline]
    pub const fn new<T: Reflect + TypePath>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}
