//! Provide `FixedHasher` and `NoOpHasher`.
//!
//! `FixedHasher` based on `foldhash` crate,
//! Provide stable hash results through a fixed hash seed.
//!
//! `NoOpHasher` directly use u64 or bit data as hash values.

use core::hash::{BuildHasher, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHasher

/// A fixed hash seed.
const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x95EE04C4F326B271);

/// A hasher whose results only depend on the input.
///
/// A type alias for [`foldhash::fast::FoldHasher`],
/// created through [`FixedHashState::build_hasher`].
pub type FixedHasher = FoldHasher<'static>;

/// Fixed Hash State based upon a random but fixed seed.
///
/// # Examples
///
/// ```
/// use core::hash::{BuildHasher, Hash, Hasher};
/// use inflect_utils::hash::FixedHashState;
///
/// let hash = |s: &str| {
///     let mut hasher = FixedHashState.build_hasher();
///     s.hash(&mut hasher);
///     hasher.finish()
/// };
///
/// assert_eq!(hash("id"), hash("id"));
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASH_STATE.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// NoOpHasher

/// A no-op hasher that passes a `u64` straight through.
///
/// Created through [`NoOpHashState::build_hasher`].
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHasher {
    hash: u64,
}

impl Hasher for NoOpHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        // `TypeId` hashes through `write_u64` on every supported target,
        // this path only serves foreign keys.
        for byte in bytes.iter().rev() {
            self.hash = self.hash.rotate_left(8).wrapping_add(*byte as u64);
        }
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.hash = i;
    }
}

/// Builds [`NoOpHasher`]s, for keys that are already well distributed
/// such as [`TypeId`](core::any::TypeId).
///
/// # Examples
///
/// ```
/// use core::hash::{BuildHasher, Hash, Hasher};
/// use inflect_utils::hash::NoOpHashState;
///
/// let mut hasher = NoOpHashState.build_hasher();
/// 3_u64.hash(&mut hasher);
///
/// assert_eq!(hasher.finish(), 3_u64);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHashState;

impl BuildHasher for NoOpHashState {
    type Hasher = NoOpHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        NoOpHasher { hash: 0 }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{FixedHashState, NoOpHashState};
    use core::hash::{BuildHasher, Hasher};

    #[test]
    fn fixed_state_is_deterministic() {
        let a = FixedHashState.hash_one("created_at");
        let b = FixedHashState.hash_one("created_at");
        let c = FixedHashState.hash_one("updated_at");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn noop_hasher_keeps_last_u64() {
        let mut hasher = NoOpHashState.build_hasher();
        hasher.write_u64(7);
        hasher.write_u64(42);

        assert_eq!(hasher.finish(), 42);
    }
}
