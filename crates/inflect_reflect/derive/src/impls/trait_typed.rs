use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `Typed`.
///
/// `type_info_tokens` builds the `TypeInfo`, see the `to_info_tokens`
/// of [`ReflectMeta`] and [`ReflectStruct`].
///
/// [`ReflectStruct`]: crate::derive_data::ReflectStruct
pub(crate) fn impl_trait_typed(
    meta: &ReflectMeta,
    type_info_tokens: TokenStream,
    add_field_bounds: bool,
) -> TokenStream {
    let reflect_path = meta.reflect_path();
    let trait_typed_ = crate::path::typed_(reflect_path);
    let type_info_ = crate::path::type_info_(reflect_path);

    let inner_cell_tokens = if meta.impl_with_generic() {
        let info_cell = crate::path::generic_type_info_cell_(reflect_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_insert::<Self>(|| {
                #type_info_tokens
            })
        }
    } else {
        let info_cell = crate::path::non_generic_type_info_cell_(reflect_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_init(|| {
                #type_info_tokens
            })
        }
    };

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(add_field_bounds);

    quote! {
        impl #impl_generics #trait_typed_ for #real_ident #ty_generics #where_clause {
            fn type_info() -> &'static #type_info_ {
                #inner_cell_tokens
            }
        }
    }
}
