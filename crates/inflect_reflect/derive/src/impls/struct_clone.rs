use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};

use crate::derive_data::ReflectStruct;

/// Generate `Reflect::reflect_clone` tokens for structs.
///
/// `Clone` when declared, otherwise field by field. An ignored field
/// has no reflected value to clone from, so cloning fails.
pub(crate) fn get_struct_clone_impl(info: &ReflectStruct) -> TokenStream {
    use crate::path::fp::{CloneFP, ResultFP};

    let meta = info.meta();
    let reflect_path = meta.reflect_path();
    let alloc_utils_ = crate::path::alloc_utils_(reflect_path);
    let reflect_ = crate::path::reflect_(reflect_path);
    let reflect_clone_error_ = crate::path::reflect_clone_error_(reflect_path);
    let type_path_ = crate::path::type_path_(reflect_path);

    if let Some(span) = meta.attrs().clone {
        return quote_spanned! { span =>
            #[inline]
            fn reflect_clone(&self) -> #ResultFP<#alloc_utils_::Box<dyn #reflect_>, #reflect_clone_error_> {
                #ResultFP::Ok(#alloc_utils_::Box::new(<Self as #CloneFP>::clone(self)))
            }
        };
    }

    let ignored = info.fields().iter().find_map(|field| Some((field, field.attrs.ignore?)));
    if let Some((field, span)) = ignored {
        let field_name = field.ident().to_string();
        return quote_spanned! { span =>
            #[inline]
            fn reflect_clone(&self) -> #ResultFP<#alloc_utils_::Box<dyn #reflect_>, #reflect_clone_error_> {
                #ResultFP::Err(#reflect_clone_error_::FieldNotCloneable {
                    type_path: #alloc_utils_::Cow::Borrowed(<Self as #type_path_>::type_path()),
                    field: #alloc_utils_::Cow::Borrowed(#field_name),
                })
            }
        };
    }

    let reflect_clone_as_ = crate::path::reflect_clone_as_(reflect_path);
    let fields = info.active_fields().map(|field| {
        let ident = field.ident();
        quote! {
            #ident: #reflect_clone_as_(&self.#ident)?,
        }
    });

    quote! {
        fn reflect_clone(&self) -> #ResultFP<#alloc_utils_::Box<dyn #reflect_>, #reflect_clone_error_> {
            #ResultFP::Ok(#alloc_utils_::Box::new(Self {
                #(#fields)*
            }))
        }
    }
}
