// -----------------------------------------------------------------------------
// For normal HashMap

macro_rules! impl_reflect_for_hashmap {
    ($ty:path $(,)?) => {
        impl<K, V, S> $crate::info::Typed for $ty
        where
            K: $crate::Reflect + $crate::info::Typed + Eq + ::core::hash::Hash,
            V: $crate::Reflect + $crate::info::Typed,
            S: $crate::info::TypePath + ::core::hash::BuildHasher + Default + Send + Sync,
        {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::GenericTypeInfoCell = $crate::impls::GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    $crate::info::TypeInfo::Map($crate::info::ContainerInfo::new::<Self>())
                })
            }
        }

        impl<K, V, S> $crate::Reflect for $ty
        where
            K: $crate::Reflect + $crate::info::Typed + Eq + ::core::hash::Hash,
            V: $crate::Reflect + $crate::info::Typed,
            S: $crate::info::TypePath + ::core::hash::BuildHasher + Default + Send + Sync,
        {
            $crate::reflection::impl_reflect_cast_fn!(Map);

            fn reflect_clone(&self) -> Result<::alloc::boxed::Box<dyn $crate::Reflect>, $crate::ops::ReflectCloneError> {
                let mut map = Self::with_capacity_and_hasher(Self::len(self), S::default());
                for (key, value) in Self::iter(self) {
                    map.insert(
                        $crate::impls::reflect_clone_as(key)?,
                        $crate::impls::reflect_clone_as(value)?,
                    );
                }

                Ok(::alloc::boxed::Box::new(map))
            }

            #[inline]
            fn reflect_partial_eq(&self, value: &dyn $crate::Reflect) -> Option<bool> {
                $crate::impls::map_partial_eq(self, value)
            }

            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::impls::map_debug(self, f)
            }
        }

        impl<K, V, S> $crate::ops::Map for $ty
        where
            K: $crate::Reflect + $crate::info::Typed + Eq + ::core::hash::Hash,
            V: $crate::Reflect + $crate::info::Typed,
            S: $crate::info::TypePath + ::core::hash::BuildHasher + Default + Send + Sync,
        {
            fn get(&self, key: &dyn $crate::Reflect) -> Option<&dyn $crate::Reflect> {
                key.downcast_ref::<K>()
                    .and_then(|key| Self::get(self, key))
                    .map($crate::Reflect::as_reflect)
            }

            fn get_mut(&mut self, key: &dyn $crate::Reflect) -> Option<&mut dyn $crate::Reflect> {
                key.downcast_ref::<K>()
                    .and_then(move |key| Self::get_mut(self, key))
                    .map($crate::Reflect::as_reflect_mut)
            }

            #[inline]
            fn is_empty(&self) -> bool {
                Self::is_empty(self)
            }

            #[inline]
            fn len(&self) -> usize {
                Self::len(self)
            }

            fn iter(&self) -> ::alloc::boxed::Box<dyn Iterator<Item = (&dyn $crate::Reflect, &dyn $crate::Reflect)> + '_> {
                ::alloc::boxed::Box::new(Self::iter(self).map(|(k, v)| (k as &dyn $crate::Reflect, v as &dyn $crate::Reflect)))
            }
        }
    };
}

pub(crate) use impl_reflect_for_hashmap;
