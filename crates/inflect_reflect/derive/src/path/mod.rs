//! Paths of the runtime items named by generated code.
//!
//! Kept in one place so that moving an item in `inflect_reflect`
//! only touches this module.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the access path to the `inflect_reflect` crate.
///
/// 1. For crates that depend on `inflect_reflect`, `::inflect_reflect` is returned.
/// 2. For crates that depend on the facade `inflect`, `::inflect::reflect` is returned.
/// 3. Otherwise `::inflect_reflect` is returned. This also covers the crate
///    itself, which declares `extern crate self as inflect_reflect`.
///
/// Reading the manifest is not free, so the path is computed once per
/// macro call and passed around.
pub(crate) fn inflect_reflect() -> syn::Path {
    inflect_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("inflect_reflect"))
}

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod info;
mod ops;

pub(crate) mod fp;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use cell::*;
pub(crate) use info::*;
pub(crate) use ops::*;

#[inline(always)]
pub(crate) fn alloc_utils_(reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #reflect_path::__macro_exports::alloc_utils
    }
}

#[inline(always)]
pub(crate) fn reflect_(reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #reflect_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn concat_(reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #reflect_path::impls::concat
    }
}
