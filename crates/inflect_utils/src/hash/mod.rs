//! Provide hash containers, re-exports *hashbrown* and *foldhash*.

// -----------------------------------------------------------------------------
// Modules

mod hasher;

// -----------------------------------------------------------------------------
// Exports

pub use hasher::{FixedHashState, FixedHasher};
pub use hasher::{NoOpHashState, NoOpHasher};

/// A [`hashbrown::HashMap`] using [`FixedHashState`] by default.
///
/// The hash of a key only depends on the key itself, so two maps filled
/// with the same content always produce the same layout.
///
/// # Examples
///
/// ```
/// use inflect_utils::hash::HashMap;
///
/// let mut map: HashMap<&str, i32> = HashMap::default();
/// map.insert("a", 1);
///
/// assert_eq!(map.get("a"), Some(&1));
/// ```
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;

// -----------------------------------------------------------------------------
// Re-export crates

pub use foldhash;
pub use hashbrown;
