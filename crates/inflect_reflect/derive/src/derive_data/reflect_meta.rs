use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, ImplGenerics, Path, Token, Type, TypeGenerics, punctuated::Punctuated};

use super::{TypeAttributes, TypeParser};
use crate::utils::StringExpr;

pub(crate) struct ReflectMeta<'a> {
    reflect_path: Path,
    attrs: TypeAttributes,
    type_parser: TypeParser<'a>,
    /// Field types, in declaration order, without duplicates.
    active_types: Vec<Type>,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("reflect_path", &self.reflect_path.to_token_stream())
            .field("type_parser", &self.type_parser)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, type_parser: TypeParser<'a>) -> Self {
        Self {
            attrs,
            type_parser,
            reflect_path: crate::path::inflect_reflect(),
            active_types: Vec::new(),
        }
    }

    /// Used by [`ReflectStruct`](crate::derive_data::ReflectStruct),
    /// records the types of the reflected fields.
    pub(super) fn set_active_types(&mut self, types: impl IntoIterator<Item = Type>) {
        for ty in types {
            if !self.active_types.contains(&ty) {
                self.active_types.push(ty);
            }
        }
    }

    #[inline]
    pub fn reflect_path(&self) -> &Path {
        &self.reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn generics(&self) -> &'a Generics {
        self.type_parser.generics()
    }

    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        self.type_parser.impl_with_generic()
    }

    #[inline]
    pub fn real_ident(&self) -> TokenStream {
        self.type_parser.real_ident()
    }

    #[inline]
    pub fn module_path(&self) -> Option<StringExpr> {
        self.type_parser.module_path()
    }

    #[inline]
    pub fn type_ident(&self) -> StringExpr {
        self.type_parser.type_ident()
    }

    /// In debug builds, check that a primitive ident names a type.
    #[inline]
    pub fn assert_ident_tokens(&self) -> TokenStream {
        #[cfg(debug_assertions)]
        if let TypeParser::Primitive(_) = &self.type_parser {
            let ident = self.real_ident();
            return quote! {
                mod __assert_primitive_ident {
                    type AssertIdentValidity = #ident;
                }
            };
        }
        crate::utils::empty()
    }

    #[inline]
    pub fn type_name(&self) -> StringExpr {
        self.type_parser.type_name(&self.reflect_path)
    }

    #[inline]
    pub fn type_path(&self) -> StringExpr {
        self.type_parser.type_path(&self.reflect_path)
    }

    #[inline]
    pub fn type_name_into_owned(&self) -> TokenStream {
        self.type_name().into_owned(&self.reflect_path)
    }

    #[inline]
    pub fn type_path_into_owned(&self) -> TokenStream {
        self.type_path().into_owned(&self.reflect_path)
    }

    /// Return `impl_generics`, `ty_generics` and the `where` clause.
    ///
    /// ```ignore
    /// let real_ident = meta.real_ident();
    /// let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);
    ///
    /// quote! {
    ///     impl #impl_generics TraitName for #real_ident #ty_generics #where_clause {
    ///         /* ... */
    ///     }
    /// }
    /// ```
    ///
    /// Bounds added for generic types:
    ///
    /// - `Self: Any + Send + Sync`, required by `Reflect`.
    /// - `T: TypePath` for every type parameter, to build the type path.
    /// - `FieldType: Reflect + Typed` for every field type that mentions a
    ///   type parameter, when `add_field_bounds` is set. `StructInfo` and
    ///   the field accessors need them.
    pub fn split_generics(
        &self,
        add_field_bounds: bool,
    ) -> (ImplGenerics<'_>, TypeGenerics<'_>, TokenStream) {
        use crate::path::fp::{AnyFP, SendFP, SyncFP};

        let generics = self.generics();
        let mut generic_where_clause = quote! { where };

        if generics.type_params().next().is_some() {
            generic_where_clause.extend(quote! { Self: #AnyFP + #SendFP + #SyncFP, });
        }

        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        // Keep existing bounds.
        if let Some(where_clause) = where_clause {
            let predicates = where_clause.predicates.iter();
            generic_where_clause.extend(quote! { #(#predicates,)* });
        }

        let mut predicates: Punctuated<TokenStream, Token![,]> = Punctuated::new();
        predicates.extend(self.type_path_predicates());
        if add_field_bounds {
            predicates.extend(self.field_type_predicates());
        }

        generic_where_clause.extend(quote! { #predicates });

        (impl_generics, ty_generics, generic_where_clause)
    }

    fn type_path_predicates(&self) -> impl Iterator<Item = TokenStream> + '_ {
        let type_path_ = crate::path::type_path_(&self.reflect_path);
        self.generics().type_params().map(move |param| {
            let ident = &param.ident;
            quote!(#ident : #type_path_)
        })
    }

    fn field_type_predicates(&self) -> impl Iterator<Item = TokenStream> + '_ {
        let type_param_idents = self
            .generics()
            .type_params()
            .map(|type_param| type_param.ident.clone())
            .collect::<Vec<syn::Ident>>();

        let reflect_ = crate::path::reflect_(&self.reflect_path);
        let typed_ = crate::path::typed_(&self.reflect_path);

        // Does any of `idents` appear in `token_stream`?
        fn mentions_any(idents: &[syn::Ident], token_stream: TokenStream) -> bool {
            token_stream.into_iter().any(|token_tree| match token_tree {
                proc_macro2::TokenTree::Ident(ident) => idents.contains(&ident),
                proc_macro2::TokenTree::Group(group) => mentions_any(idents, group.stream()),
                _ => false,
            })
        }

        self.active_types.iter().filter_map(move |ty| {
            if !type_param_idents.is_empty()
                && mentions_any(&type_param_idents, ty.to_token_stream())
            {
                Some(quote! { #ty: #reflect_ + #typed_ })
            } else {
                None
            }
        })
    }

    /// `TypeInfo` construction for opaque types.
    pub fn to_info_tokens(&self) -> TokenStream {
        let opaque_info_ = crate::path::opaque_info_(&self.reflect_path);
        let type_info_ = crate::path::type_info_(&self.reflect_path);

        quote! {
            #type_info_::Opaque(
                #opaque_info_::new::<Self>()
            )
        }
    }
}
