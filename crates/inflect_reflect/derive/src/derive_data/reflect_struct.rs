use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::{Field, Ident, Visibility};

use super::{FieldAttributes, ReflectMeta};

// -----------------------------------------------------------------------------
// Define

/// A struct with named fields.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

/// A field of a [`ReflectStruct`].
pub(crate) struct StructField<'a> {
    pub data: &'a Field,
    pub attrs: FieldAttributes,
    /// Index among the reflected fields, `None` if ignored.
    pub reflection_index: Option<usize>,
}

// -----------------------------------------------------------------------------
// StructField

impl StructField<'_> {
    pub fn ident(&self) -> &Ident {
        self.data
            .ident
            .as_ref()
            .unwrap_or_else(|| unreachable!("only named fields are collected"))
    }

    /// Writable through reflection: declared `pub` and not `readonly`.
    pub fn is_writable(&self) -> bool {
        matches!(self.data.vis, Visibility::Public(_)) && self.attrs.readonly.is_none()
    }

    /// `NamedField` construction for this field.
    pub fn to_info_tokens(&self, reflect_path: &syn::Path) -> TokenStream {
        let named_field_ = crate::path::named_field_(reflect_path);
        let ty = &self.data.ty;
        let name = self.ident().to_string();

        let with_tag = self.attrs.tag.as_ref().map(|tag| quote!(.with_tag(#tag)));
        let with_embedded = self.attrs.embed.map(|_| quote!(.with_embedded(true)));
        let with_writable = (!self.is_writable()).then(|| quote!(.with_writable(false)));

        quote! {
            #named_field_::new::<#ty>(#name)
                #with_tag
                #with_embedded
                #with_writable
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectStruct

impl<'a> ReflectStruct<'a> {
    pub fn new(mut meta: ReflectMeta<'a>, fields: Vec<StructField<'a>>) -> Self {
        meta.set_active_types(
            fields
                .iter()
                .filter(|field| field.attrs.ignore.is_none())
                .map(|field| field.data.ty.clone()),
        );
        Self { meta, fields }
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// All fields, ignored ones included.
    #[inline]
    pub fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }

    /// Fields exposed to reflection, in declaration order.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields
            .iter()
            .filter(|field| field.attrs.ignore.is_none())
    }

    /// `TypeInfo` construction for the struct.
    pub fn to_info_tokens(&self) -> TokenStream {
        let reflect_path = self.meta.reflect_path();
        let type_info_ = crate::path::type_info_(reflect_path);
        let struct_info_ = crate::path::struct_info_(reflect_path);

        let fields = self
            .active_fields()
            .map(|field| field.to_info_tokens(reflect_path));

        quote! {
            #type_info_::Struct(
                #struct_info_::new::<Self>(&[
                    #(#fields,)*
                ])
            )
        }
    }
}

// -----------------------------------------------------------------------------
// FieldAccessors

/// Tokens shared by the `Struct` accessors of a [`ReflectStruct`].
pub(crate) struct FieldAccessors {
    /// `&self.field` of every active field.
    pub fields_ref: Vec<TokenStream>,
    /// `&mut self.field` of every active field.
    pub fields_mut: Vec<TokenStream>,
    /// Reflection index of every active field.
    pub field_indices: Vec<Literal>,
    /// Name of every active field.
    pub field_names: Vec<String>,
    pub field_count: usize,
}

impl FieldAccessors {
    pub fn new(info: &ReflectStruct) -> Self {
        let mut this = Self {
            fields_ref: Vec::new(),
            fields_mut: Vec::new(),
            field_indices: Vec::new(),
            field_names: Vec::new(),
            field_count: 0,
        };

        for field in info.active_fields() {
            let ident = field.ident();
            this.fields_ref.push(quote!(&self.#ident));
            this.fields_mut.push(quote!(&mut self.#ident));
            this.field_indices
                .push(Literal::usize_unsuffixed(field.reflection_index.unwrap_or_default()));
            this.field_names.push(ident.to_string());
            this.field_count += 1;
        }

        this
    }
}
