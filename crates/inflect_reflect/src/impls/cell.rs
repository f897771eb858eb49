//! Containers for static storage of type information.
//!
//! ## NonGenericTypeCell
//!
//! For non generic types, [`NonGenericTypeInfoCell`] stores the [`TypeInfo`]
//! in a [`OnceLock`].
//!
//! There is no `NonGenericTypePathCell`, a string literal does the job.
//!
//! ## GenericTypeCell
//!
//! A `static CELL` inside a generic function is shared by every
//! instantiation, so these cells key their content by [`TypeId`]:
//!
//! - [`GenericTypeInfoCell`]: Storage [`TypeInfo`]
//! - [`GenericTypePathCell`]: Storage [`String`]
//!
//! The inner map is a [`TypeIdMap`] behind a [`RwLock`]. Values are leaked,
//! they live as long as the program.

use alloc::{boxed::Box, string::String};
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use inflect_utils::TypeIdMap;

use crate::info::TypeInfo;

mod sealed {
    use super::TypeInfo;
    use alloc::string::String;
    pub trait TypedProperty: 'static {}

    impl TypedProperty for String {}
    impl TypedProperty for TypeInfo {}
}

use sealed::TypedProperty;

/// Container for static storage of non-generic type information.
pub struct NonGenericTypeCell<T: TypedProperty>(OnceLock<T>);

/// See [`Typed`](crate::info::Typed) for an example.
pub type NonGenericTypeInfoCell = NonGenericTypeCell<TypeInfo>;

impl<T: TypedProperty> NonGenericTypeCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored value, computing it with `f` on first access.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.0.get_or_init(f)
    }
}

/// Container for static storage of type information of generic types.
pub struct GenericTypeCell<T: TypedProperty>(RwLock<TypeIdMap<&'static T>>);

pub type GenericTypeInfoCell = GenericTypeCell<TypeInfo>;

/// See [`TypePath`](crate::info::TypePath) for an example.
pub type GenericTypePathCell = GenericTypeCell<String>;

impl<T: TypedProperty> GenericTypeCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the value stored for `G`, computing it with `f` on first access.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> T) -> &T {
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &T {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&T> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    // Another thread may have inserted in between, the first value wins.
    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: T) -> &T {
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, || Box::leak(Box::new(value)))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::{GenericTypePathCell, NonGenericTypeInfoCell};
    use crate::info::{OpaqueInfo, TypeInfo};

    #[test]
    fn generic_cell_keys_by_type() {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();

        let a: *const String = CELL.get_or_insert::<u8>(|| String::from("u8"));
        let b: *const String = CELL.get_or_insert::<u16>(|| String::from("u16"));
        let again = CELL.get_or_insert::<u8>(|| String::from("other"));

        assert_ne!(a, b);
        assert_eq!(again, "u8");
        assert!(core::ptr::eq(a, again));
    }

    #[test]
    fn non_generic_cell_initializes_once() {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();

        let first = CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<u32>()));
        let second = CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<u64>()));
        assert!(second.type_is::<u32>());
        assert!(core::ptr::eq(first, second));
    }
}
