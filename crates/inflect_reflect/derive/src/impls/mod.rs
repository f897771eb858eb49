//! Code generation.
//!
//! `match_reflect` dispatches on the parsed input. The record and opaque
//! generators assemble the per-trait pieces from the `trait_*` modules.

// -----------------------------------------------------------------------------
// Modules

mod match_reflect;
mod opaque_kind;
mod struct_clone;
mod struct_kind;
mod trait_reflect;
mod trait_type_path;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use match_reflect::match_reflect_impls;
pub(crate) use opaque_kind::impl_opaque;
pub(crate) use trait_type_path::impl_trait_type_path;

use self::{
    struct_clone::get_struct_clone_impl, struct_kind::impl_struct,
    trait_reflect::impl_trait_reflect, trait_typed::impl_trait_typed,
};
