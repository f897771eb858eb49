use proc_macro2::TokenStream;
use quote::quote;

#[inline]
pub(crate) fn type_path_(reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #reflect_path::info::TypePath
    }
}

#[inline(always)]
pub(crate) fn named_field_(reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #reflect_path::info::NamedField
    }
}

#[inline(always)]
pub(crate) fn opaque_info_(reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #reflect_path::info::OpaqueInfo
    }
}

#[inline(always)]
pub(crate) fn struct_info_(reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #reflect_path::info::StructInfo
    }
}

#[inline(always)]
pub(crate) fn reflect_kind_(reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #reflect_path::info::ReflectKind
    }
}

#[inline(always)]
pub(crate) fn type_info_(reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #reflect_path::info::TypeInfo
    }
}

#[inline(always)]
pub(crate) fn typed_(reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #reflect_path::info::Typed
    }
}
