use core::any::TypeId;

use crate::hash::NoOpHashState;
use crate::hash::hashbrown::HashMap;

/// Values built once per type, keyed by [`TypeId`].
///
/// Backs the lazily built type information of generic types. Entries are
/// only ever added. Keys are hashed with [`NoOpHashState`], since a
/// `TypeId` already is a hash.
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use inflect_utils::TypeIdMap;
///
/// let mut paths = TypeIdMap::new();
/// paths.get_or_insert(TypeId::of::<u8>(), || "u8");
///
/// assert_eq!(*paths.get_or_insert(TypeId::of::<u8>(), || "other"), "u8");
/// ```
pub struct TypeIdMap<V>(HashMap<TypeId, V, NoOpHashState>);

impl<V> TypeIdMap<V> {
    #[inline]
    pub const fn new() -> Self {
        Self(HashMap::with_hasher(NoOpHashState))
    }

    #[inline]
    pub fn get(&self, type_id: &TypeId) -> Option<&V> {
        self.0.get(type_id)
    }

    /// The value of `type_id`, built by `init` on first request.
    #[inline]
    pub fn get_or_insert(&mut self, type_id: TypeId, init: impl FnOnce() -> V) -> &mut V {
        self.0.entry(type_id).or_insert_with(init)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::TypeIdMap;

    #[test]
    fn init_runs_once_per_type() {
        let mut map = TypeIdMap::new();
        let mut calls = 0;

        for _ in 0..3 {
            map.get_or_insert(TypeId::of::<i32>(), || {
                calls += 1;
                "i32"
            });
        }
        map.get_or_insert(TypeId::of::<u32>(), || {
            calls += 1;
            "u32"
        });

        assert_eq!(calls, 2);
        assert_eq!(map.get(&TypeId::of::<u32>()), Some(&"u32"));
        assert_eq!(map.get(&TypeId::of::<u8>()), None);
        assert_eq!(*map.get_or_insert(TypeId::of::<i32>(), || "again"), "i32");
    }
}
