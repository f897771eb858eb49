//! Utilities for implementing reflection traits, and the implementations
//! for foreign types.
//!
//! - [`concat`]: String concatenation for generic type paths.
//! - [`NonGenericTypeInfoCell`]: Used to implement [`Typed`] for non-generic types.
//! - [`GenericTypePathCell`]: Used to implement [`TypePath`] for generic types.
//! - [`GenericTypeInfoCell`]: Used to implement [`Typed`] for generic types.
//! - `xxx_partial_eq`: Used to implement [`Reflect::reflect_partial_eq`] (e.g. [`struct_partial_eq`]).
//! - `xxx_debug`: Used to implement [`Reflect::reflect_debug`] (e.g. [`struct_debug`]).
//! - [`reflect_clone_as`]: Clone a value through [`Reflect::reflect_clone`], keeping its type.
//!
//! ## Implemented Menu
//!
//! - opaque:
//!     - `bool`, `char`, `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`
//!     - `&'static str`, `String`
//!     - `core::time::Duration`, `std::time::SystemTime`
//! - list: `Vec<T>`
//! - map:
//!     - `std::collections::HashMap<K, V, S>`
//!     - `inflect_utils::hash::HashMap<K, V, S>`
//!     - `BTreeMap<K, V>`
//! - pointer: `Box<T>`, `Option<T>`
//!
//! [`TypePath`]: crate::info::TypePath
//! [`Typed`]: crate::info::Typed
//! [`Reflect::reflect_partial_eq`]: crate::Reflect::reflect_partial_eq
//! [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
//! [`Reflect::reflect_clone`]: crate::Reflect::reflect_clone

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod utils;

mod list;
mod map;
mod native;
mod pointer;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};

pub use utils::*;

/// Concatenate string slices into a new `String`.
///
/// ```
/// # use inflect_reflect::impls::concat;
/// assert_eq!(concat(&["Vec", "<", "u8", ">"]), "Vec<u8>");
/// ```
#[inline(never)]
pub fn concat(arr: &[&str]) -> ::alloc::string::String {
    let mut len = 0usize;
    for &item in arr {
        len += item.len();
    }
    let mut res = ::alloc::string::String::with_capacity(len);
    for &item in arr {
        res.push_str(item);
    }
    res
}
