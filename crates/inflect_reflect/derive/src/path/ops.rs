use proc_macro2::TokenStream;
use quote::quote;

#[inline]
pub(crate) fn reflect_clone_error_(reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #reflect_path::ops::ReflectCloneError
    }
}

#[inline]
pub(crate) fn reflect_mut_(reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #reflect_path::ops::ReflectMut
    }
}

#[inline]
pub(crate) fn reflect_ref_(reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #reflect_path::ops::ReflectRef
    }
}

#[inline]
pub(crate) fn struct_(reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #reflect_path::ops::Struct
    }
}

#[inline]
pub(crate) fn struct_field_iter_(reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #reflect_path::ops::StructFieldIter
    }
}

#[inline]
pub(crate) fn reflect_clone_as_(reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #reflect_path::impls::reflect_clone_as
    }
}

#[inline]
pub(crate) fn struct_partial_eq_(reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #reflect_path::impls::struct_partial_eq
    }
}

#[inline]
pub(crate) fn struct_debug_(reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #reflect_path::impls::struct_debug
    }
}
