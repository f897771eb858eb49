//! Compile-time type information.
//!
//! ## Menu
//!
//! - [`TypePath`]: A trait for obtaining type names, without prefix `::`.
//! - [`DynamicTypePath`]: Dynamic dispatch for `TypePath`.
//! - [`Type`]: A `TypeId` together with the type's `TypePath` functions.
//! - [`Typed`]: A trait for obtaining the static [`TypeInfo`] of a type.
//! - [`DynamicTyped`]: Dynamic dispatch for `Typed`.
//! - [`TypeInfo`]: One of the following:
//!     - [`StructInfo`]: A record, with its fields in declaration order.
//!     - [`ContainerInfo`]: A list, a map or a pointer (`Box<T>`, `Option<T>`).
//!     - [`OpaqueInfo`]: A leaf value whose inside is not reflected.
//! - [`NamedField`]: A record field: name, type, tag and access flags.
//! - [`ReflectKind`]: The discriminant of `TypeInfo`.

// -----------------------------------------------------------------------------
// Modules

mod container_info;
mod field_info;
mod opaque_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use container_info::ContainerInfo;
pub use field_info::NamedField;
pub use opaque_info::OpaqueInfo;
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath};
pub use typed::{DynamicTyped, Typed};
