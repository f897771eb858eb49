use proc_macro2::TokenStream;
use quote::{ToTokens, quote, quote_spanned};

use super::{get_struct_clone_impl, impl_trait_reflect, impl_trait_typed};
use crate::derive_data::{FieldAccessors, ReflectMeta, ReflectStruct};
use crate::impls::impl_trait_type_path;

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let type_path_trait_tokens = impl_trait_type_path(meta);
    let typed_trait_tokens = impl_trait_typed(meta, info.to_info_tokens(), true);
    let struct_trait_tokens = impl_trait_struct(info);

    let reflect_trait_tokens = impl_trait_reflect(
        meta,
        quote!(Struct),
        get_struct_clone_impl(info),
        get_struct_partial_eq_impl(info),
        get_struct_debug_impl(meta),
        true,
    );

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #struct_trait_tokens

        #reflect_trait_tokens
    }
}

/// Generate `Struct` trait implementation tokens.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    use crate::path::fp::OptionFP;
    let meta = info.meta();

    let reflect_path = meta.reflect_path();
    let struct_ = crate::path::struct_(reflect_path);
    let reflect_ = crate::path::reflect_(reflect_path);
    let struct_field_iter_ = crate::path::struct_field_iter_(reflect_path);
    let option_ = OptionFP.to_token_stream();

    let FieldAccessors {
        fields_ref,
        fields_mut,
        field_indices,
        field_names,
        field_count,
    } = FieldAccessors::new(info);

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);

    quote! {
        impl #impl_generics #struct_ for #real_ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> #option_<&dyn #reflect_> {
                match name {
                    #(#field_names => #option_::Some(#fields_ref),)*
                    _ => #option_::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> #option_<&mut dyn #reflect_> {
                match name {
                    #(#field_names => #option_::Some(#fields_mut),)*
                    _ => #option_::None,
                }
            }

            fn field_at(&self, index: usize) -> #option_<&dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(#fields_ref),)*
                    _ => #option_::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> #option_<&mut dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(#fields_mut),)*
                    _ => #option_::None,
                }
            }

            fn name_at(&self, index: usize) -> #option_<&str> {
                match index {
                    #(#field_indices => #option_::Some(#field_names),)*
                    _ => #option_::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }

            #[inline]
            fn iter_fields(&self) -> #struct_field_iter_<'_> {
                #struct_field_iter_::new(self)
            }
        }
    }
}

/// Generate `Reflect::reflect_partial_eq` implementation tokens.
///
/// An ignored field cannot be compared through reflection, so without
/// `partial_eq` such a struct is not comparable.
fn get_struct_partial_eq_impl(info: &ReflectStruct) -> TokenStream {
    use crate::path::fp::{OptionFP, PartialEqFP};
    let meta = info.meta();
    let reflect_path = meta.reflect_path();
    let reflect_ = crate::path::reflect_(reflect_path);

    if let Some(span) = meta.attrs().partial_eq {
        quote_spanned! { span =>
            #[inline]
            fn reflect_partial_eq(&self, other: &dyn #reflect_) -> #OptionFP<bool> {
                if let #OptionFP::Some(value) = <dyn #reflect_>::downcast_ref::<Self>(other) {
                    return #OptionFP::Some(#PartialEqFP::eq(self, value));
                }
                #OptionFP::Some(false)
            }
        }
    } else if info.fields().iter().any(|field| field.attrs.ignore.is_some()) {
        quote! {
            #[inline]
            fn reflect_partial_eq(&self, _other: &dyn #reflect_) -> #OptionFP<bool> {
                #OptionFP::None
            }
        }
    } else {
        let struct_partial_eq_ = crate::path::struct_partial_eq_(reflect_path);
        quote! {
            #[inline]
            fn reflect_partial_eq(&self, other: &dyn #reflect_) -> #OptionFP<bool> {
                #struct_partial_eq_(self, other)
            }
        }
    }
}

/// Generate `Reflect::reflect_debug` implementation tokens.
fn get_struct_debug_impl(meta: &ReflectMeta) -> TokenStream {
    use crate::path::fp::DebugFP;

    if let Some(span) = meta.attrs().debug {
        quote_spanned! { span =>
            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                <Self as #DebugFP>::fmt(self, f)
            }
        }
    } else {
        let struct_debug_ = crate::path::struct_debug_(meta.reflect_path());
        quote! {
            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                #struct_debug_(self, f)
            }
        }
    }
}
