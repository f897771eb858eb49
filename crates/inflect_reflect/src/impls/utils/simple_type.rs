/// Implement `Reflect` for a `Clone + PartialEq + Debug` leaf type.
macro_rules! impl_simple_type_reflect {
    ($kind:ident) => {
        $crate::reflection::impl_reflect_cast_fn!($kind);

        #[inline]
        fn reflect_clone(
            &self,
        ) -> Result<::alloc::boxed::Box<dyn $crate::Reflect>, $crate::ops::ReflectCloneError> {
            Ok(::alloc::boxed::Box::new(Clone::clone(self)))
        }

        fn reflect_partial_eq(&self, value: &dyn $crate::Reflect) -> Option<bool> {
            if let Some(value) = <dyn $crate::Reflect>::downcast_ref::<Self>(value) {
                Some(PartialEq::eq(self, value))
            } else {
                Some(false)
            }
        }

        fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            ::core::fmt::Debug::fmt(self, f)
        }
    };
}

pub(crate) use impl_simple_type_reflect;
