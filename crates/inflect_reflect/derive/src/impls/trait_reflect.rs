use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;
use crate::path::fp::ResultFP;

/// Generate implementation code for `Reflect` trait.
///
/// For param `add_field_bounds`, See [`ReflectMeta::split_generics`]
pub(crate) fn impl_trait_reflect(
    meta: &ReflectMeta,
    reflect_kind_token: TokenStream,
    reflect_clone_tokens: TokenStream,
    reflect_eq_tokens: TokenStream,
    reflect_debug_tokens: TokenStream,
    add_field_bounds: bool,
) -> TokenStream {
    let reflect_path = meta.reflect_path();

    let reflect_ = crate::path::reflect_(reflect_path);
    let alloc_utils_ = crate::path::alloc_utils_(reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(reflect_path);

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(add_field_bounds);

    quote! {
        impl #impl_generics #reflect_ for #real_ident #ty_generics #where_clause {
            fn set(
                &mut self,
                value: #alloc_utils_::Box<dyn #reflect_>,
            ) -> #ResultFP<(), #alloc_utils_::Box<dyn #reflect_>> {
                *self = <dyn #reflect_>::take::<Self>(value)?;
                #ResultFP::Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::#reflect_kind_token
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#reflect_kind_token(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::#reflect_kind_token(self)
            }

            #reflect_clone_tokens

            #reflect_eq_tokens

            #reflect_debug_tokens
        }
    }
}
