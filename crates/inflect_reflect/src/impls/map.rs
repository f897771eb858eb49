use alloc::boxed::Box;
use alloc::collections::BTreeMap;

use crate::derive::impl_type_path;
use crate::impls::{self, GenericTypeInfoCell, impl_reflect_for_hashmap};
use crate::info::{ContainerInfo, TypeInfo, Typed};
use crate::ops::{Map, ReflectCloneError};
use crate::Reflect;

impl_type_path!(::std::hash::RandomState);
impl_type_path!(::std::collections::HashMap<K, V, S>);
impl_reflect_for_hashmap!(::std::collections::HashMap<K, V, S>);

impl_type_path!(::inflect_utils::hash::FixedHashState);
impl_type_path!(::inflect_utils::hash::hashbrown::HashMap<K, V, S>);
impl_reflect_for_hashmap!(::inflect_utils::hash::hashbrown::HashMap<K, V, S>);

// -----------------------------------------------------------------------------
// BTreeMap

impl_type_path!(::alloc::collections::BTreeMap<K, V>);

impl<K, V> Typed for BTreeMap<K, V>
where
    K: Reflect + Typed + Eq + Ord,
    V: Reflect + Typed,
{
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Map(ContainerInfo::new::<Self>()))
    }
}

impl<K, V> Reflect for BTreeMap<K, V>
where
    K: Reflect + Typed + Eq + Ord,
    V: Reflect + Typed,
{
    crate::reflection::impl_reflect_cast_fn!(Map);

    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        let mut map = Self::new();
        for (key, value) in Self::iter(self) {
            map.insert(impls::reflect_clone_as(key)?, impls::reflect_clone_as(value)?);
        }

        Ok(Box::new(map))
    }

    #[inline]
    fn reflect_partial_eq(&self, value: &dyn Reflect) -> Option<bool> {
        impls::map_partial_eq(self, value)
    }

    #[inline]
    fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        impls::map_debug(self, f)
    }
}

impl<K, V> Map for BTreeMap<K, V>
where
    K: Reflect + Typed + Eq + Ord,
    V: Reflect + Typed,
{
    fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect> {
        key.downcast_ref::<K>()
            .and_then(|key| Self::get(self, key))
            .map(Reflect::as_reflect)
    }

    fn get_mut(&mut self, key: &dyn Reflect) -> Option<&mut dyn Reflect> {
        key.downcast_ref::<K>()
            .and_then(move |key| Self::get_mut(self, key))
            .map(Reflect::as_reflect_mut)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
        Box::new(Self::iter(self).map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect)))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::format;
    use alloc::string::String;

    use inflect_utils::hash::HashMap;

    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};
    use crate::ops::Map;

    #[test]
    fn hash_map_lookup_by_reflected_key() {
        let mut map: HashMap<String, u32> = HashMap::default();
        map.insert(String::from("a"), 1);

        let dyn_map: &dyn Map = &map;
        assert_eq!(
            dyn_map.get(&String::from("a")).and_then(|v| v.downcast_ref::<u32>()),
            Some(&1)
        );
        assert!(dyn_map.get(&"a").is_none());
    }

    #[test]
    fn std_hash_map_clone_and_compare() {
        let mut map = std::collections::HashMap::new();
        map.insert(1_u8, String::from("x"));

        let cloned = map.reflect_clone().unwrap();
        assert_eq!(map.reflect_partial_eq(&*cloned), Some(true));

        let info = <std::collections::HashMap<u8, String>>::type_info();
        assert_eq!(info.kind(), ReflectKind::Map);
    }

    #[test]
    fn btree_map_debug_and_path() {
        let mut map = BTreeMap::new();
        map.insert(2_i32, true);
        map.insert(1_i32, false);

        let value: &dyn Reflect = &map;
        assert_eq!(format!("{value:?}"), "{1: false, 2: true}");
        assert_eq!(
            <BTreeMap<i32, bool>>::type_path(),
            "alloc::collections::BTreeMap<i32, bool>"
        );
    }
}
