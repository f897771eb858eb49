//! See following macros:
//!
//! - [`Reflect`]
//! - [`impl_reflect_opaque`]
//! - [`impl_type_path`]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits:
///
/// - `TypePath`
/// - `Typed`
/// - `Reflect`
/// - `Struct` (for `struct T { ... }`)
///
/// Only structs with named fields can be derived as records.
/// Any other type must be marked `opaque`.
///
/// ## Type Attributes
///
/// ### Standard traits
///
/// The macro cannot see which standard traits a type implements,
/// so it assumes none. Declare them to let the generated code use them:
///
/// ```rust, ignore
/// #[derive(Reflect, Clone, PartialEq, Debug)]
/// #[reflect(clone, partial_eq, debug)]
/// struct Foo { /* ... */ }
/// ```
///
/// - `clone`: `reflect_clone` uses `Clone`, instead of cloning field by field.
/// - `partial_eq`: `reflect_partial_eq` uses `PartialEq`, instead of comparing field by field.
/// - `debug`: `reflect_debug` uses `Debug`.
///
/// ### Opaque Types
///
/// `opaque` makes the type a leaf: its fields are not inspected.
/// `clone` is required, and `reflect_partial_eq` returns `None`
/// unless `partial_eq` is declared.
///
/// ```rust, ignore
/// #[derive(Reflect, Clone)]
/// #[reflect(opaque, clone)]
/// struct Blob(Vec<u8>);
/// ```
///
/// ### Custom Type Path
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "my_crate::models::User")]
/// struct User { /* ... */ }
/// ```
///
/// The path does not include generics, they are appended automatically.
///
/// ## Field Attributes
///
/// - `tag = "..."`: raw tag string, e.g. `#[reflect(tag = r#"json:"id" db:"user_id""#)]`.
/// - `embed`: the field is an embedded record, its fields are promoted.
/// - `readonly`: refuse writes even though the field is `pub`.
/// - `ignore`: the field is invisible to reflection.
///
/// Fields are writable only when declared `pub`.
///
/// An ignored field makes `reflect_clone` fail, unless the type declares `clone`.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(ast)
}

/// Implements reflection for opaque foreign types.
///
/// Syntax: `ident (..attrs..)` for primitives, `::full::path<Generics> (..attrs..)` otherwise.
///
/// ## Example
///
/// ```rust, ignore
/// impl_reflect_opaque!(u64 (clone, partial_eq, debug));
/// impl_reflect_opaque!(::alloc::string::String (clone, partial_eq, debug));
/// ```
///
/// This macro always implies `opaque`, so `clone` is required.
///
/// See available attributes in [`derive Reflect`](derive_reflect).
#[proc_macro]
pub fn impl_reflect_opaque(input: TokenStream) -> TokenStream {
    use crate::derive_data::{ReflectMeta, ReflectOpaqueParser, TypeParser};

    let ReflectOpaqueParser {
        attrs,
        type_ident,
        type_path,
        generics,
    } = parse_macro_input!(input with ReflectOpaqueParser::parse);

    let parser = TypeParser::new_foreign(&type_ident, &type_path, &generics);

    let meta = ReflectMeta::new(attrs, parser);

    let assert_tokens = meta.assert_ident_tokens();
    let reflect_impls = impls::impl_opaque(&meta);

    quote! {
        const _: () = {
            #assert_tokens
            #reflect_impls
        };
    }
    .into()
}

/// Implements `TypePath` for a foreign type.
///
/// Paths starting with `::` cannot be used for primitive types.
/// The leading `::` is required for everything else and is removed
/// from the generated path.
///
/// ## Example
///
/// ```ignore
/// impl_type_path!(u64);
/// impl_type_path!(::alloc::string::String);
/// impl_type_path!(::alloc::vec::Vec<T>);
/// ```
#[proc_macro]
pub fn impl_type_path(input: TokenStream) -> TokenStream {
    use crate::derive_data::{ReflectMeta, ReflectTypePathParser, TypeAttributes, TypeParser};

    let ReflectTypePathParser {
        type_ident,
        type_path,
        generics,
    } = parse_macro_input!(input with ReflectTypePathParser::parse);

    let parser = TypeParser::new_foreign(&type_ident, &type_path, &generics);

    let meta = ReflectMeta::new(TypeAttributes::default(), parser);
    let assert_tokens = meta.assert_ident_tokens();

    let type_path_impls = impls::impl_trait_type_path(&meta);

    quote! {
        const _: () = {
            #assert_tokens
            #type_path_impls
        };
    }
    .into()
}
