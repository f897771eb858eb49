//! Interfaces for data access by kind.
//!
//! The following are subtraits of [`Reflect`], one per [`ReflectKind`]:
//!
//! - [`Struct`]: For records (e.g. `A { .. }`), fields addressed by name or index.
//! - [`List`]: For list-like containers (e.g. `Vec<i32>`).
//! - [`Map`]: For map-like containers (e.g. `HashMap<String, i32>`).
//! - [`Pointer`]: For indirections to at most one value (e.g. `Box<T>`, `Option<T>`).
//!
//! [`ReflectRef`] and [`ReflectMut`] carry a value viewed through one of them.
//!
//! [`Reflect`]: crate::Reflect
//! [`ReflectKind`]: crate::info::ReflectKind

// -----------------------------------------------------------------------------
// Modules

mod clone_error;
mod kind;
mod list_ops;
mod map_ops;
mod pointer_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use clone_error::ReflectCloneError;
pub use kind::{ReflectMut, ReflectRef};
pub use list_ops::{List, ListItemIter};
pub use map_ops::Map;
pub use pointer_ops::Pointer;
pub use struct_ops::{Struct, StructFieldIter};
