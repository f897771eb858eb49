use crate::Reflect;
use crate::info::{Type, TypePath, impl_type_fn};

/// Type information for a value whose inside is not reflected.
///
/// Numbers, strings and [`Duration`](core::time::Duration) are opaque.
/// A record marked `#[reflect(opaque)]` is opaque as well.
#[derive(Debug, Clone)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    impl_type_fn!(ty);

    #[inline]
    pub const fn new<T: Reflect + TypePath + ?Sized>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}
