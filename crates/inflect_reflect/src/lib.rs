#![doc = include_str!("../README.md")]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names `inflect_reflect`, both in this crate and in doc tests.
extern crate self as inflect_reflect;

// -----------------------------------------------------------------------------
// no_std support

extern crate alloc;
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod access;
pub mod impls;
pub mod info;
pub mod ops;
pub mod tags;
pub mod time;
pub mod tree;

#[cfg(test)]
mod fixtures;

// -----------------------------------------------------------------------------
// Top-Level exports

pub mod __macro_exports;

pub use access::{AccessError, Inflect};
pub use inflect_reflect_derive as derive;
pub use reflection::Reflect;
pub use tree::{FieldTree, build_field_tree};
