use alloc::boxed::Box;

use crate::Reflect;

/// A trait for type-erased map-like operations via reflection.
///
/// Implemented for [`HashMap`](std::collections::HashMap),
/// [`inflect_utils::hash::HashMap`] and [`BTreeMap`](alloc::collections::BTreeMap).
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use inflect_reflect::{Reflect, ops::Map};
///
/// let mut map = BTreeMap::new();
/// map.insert(String::from("a"), 1_u8);
///
/// let dyn_map: &dyn Map = &map;
/// let key = String::from("a");
/// assert_eq!(dyn_map.get(&key).unwrap().downcast_ref::<u8>(), Some(&1));
/// assert!(dyn_map.get(&2_u8).is_none());
/// ```
pub trait Map: Reflect {
    /// Returns the value for `key`.
    ///
    /// A key of another type than the map's key type is never found.
    fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect>;

    fn get_mut(&mut self, key: &dyn Reflect) -> Option<&mut dyn Reflect>;

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the entries. The order is that of the underlying map.
    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_>;
}
