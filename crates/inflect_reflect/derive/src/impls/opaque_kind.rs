use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};

use super::{impl_trait_reflect, impl_trait_typed};
use crate::derive_data::ReflectMeta;
use crate::impls::impl_trait_type_path;

/// Implement full reflect for opaque type.
pub(crate) fn impl_opaque(meta: &ReflectMeta) -> TokenStream {
    let type_path_trait_tokens = impl_trait_type_path(meta);
    let typed_trait_tokens = impl_trait_typed(meta, meta.to_info_tokens(), false);

    let reflect_trait_tokens = impl_trait_reflect(
        meta,
        quote!(Opaque),
        get_opaque_clone_impl(meta),
        get_opaque_partial_eq_impl(meta),
        get_opaque_debug_impl(meta),
        false,
    );

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #reflect_trait_tokens
    }
}

/// Generate `Reflect::reflect_clone` implementation tokens.
///
/// `clone` is checked by `TypeAttributes::validity` for opaque types.
fn get_opaque_clone_impl(meta: &ReflectMeta) -> TokenStream {
    use crate::path::fp::{CloneFP, ResultFP};

    let reflect_path = meta.reflect_path();
    let alloc_utils_ = crate::path::alloc_utils_(reflect_path);
    let reflect_ = crate::path::reflect_(reflect_path);
    let reflect_clone_error_ = crate::path::reflect_clone_error_(reflect_path);

    let span = meta.attrs().clone.unwrap_or_else(proc_macro2::Span::call_site);
    quote_spanned! { span =>
        #[inline]
        fn reflect_clone(&self) -> #ResultFP<#alloc_utils_::Box<dyn #reflect_>, #reflect_clone_error_> {
            #ResultFP::Ok(#alloc_utils_::Box::new(<Self as #CloneFP>::clone(self)))
        }
    }
}

/// Generate `Reflect::reflect_partial_eq` implementation tokens.
///
/// Without `partial_eq` the default applies: not comparable.
fn get_opaque_partial_eq_impl(meta: &ReflectMeta) -> TokenStream {
    use crate::path::fp::{OptionFP, PartialEqFP};

    let Some(span) = meta.attrs().partial_eq else {
        return crate::utils::empty();
    };
    let reflect_ = crate::path::reflect_(meta.reflect_path());

    quote_spanned! { span =>
        #[inline]
        fn reflect_partial_eq(&self, other: &dyn #reflect_) -> #OptionFP<bool> {
            if let #OptionFP::Some(value) = <dyn #reflect_>::downcast_ref::<Self>(other) {
                return #OptionFP::Some(#PartialEqFP::eq(self, value));
            }
            #OptionFP::Some(false)
        }
    }
}

/// Generate `Reflect::reflect_debug` implementation tokens.
fn get_opaque_debug_impl(meta: &ReflectMeta) -> TokenStream {
    use crate::path::fp::DebugFP;

    let Some(span) = meta.attrs().debug else {
        return crate::utils::empty();
    };

    quote_spanned! { span =>
        #[inline]
        fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            <Self as #DebugFP>::fmt(self, f)
        }
    }
}
