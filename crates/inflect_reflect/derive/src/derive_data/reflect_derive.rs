use syn::{Data, DeriveInput, Fields};

use super::{
    FieldAttributes, ReflectMeta, ReflectStruct, StructField, TypeAttributes, TypeParser,
    validate_generics,
};

/// The parsed input of `#[derive(Reflect)]`.
pub(crate) enum ReflectDerive<'a> {
    Struct(ReflectStruct<'a>),
    Opaque(ReflectMeta<'a>),
}

impl<'a> ReflectDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        attrs.validity()?;
        validate_generics(&input.generics)?;

        let type_parser =
            TypeParser::new_local(&input.ident, attrs.type_path.clone(), &input.generics);
        let is_opaque = attrs.is_opaque.is_some();
        let meta = ReflectMeta::new(attrs, type_parser);

        if is_opaque {
            return Ok(Self::Opaque(meta));
        }

        let Data::Struct(data) = &input.data else {
            return Err(syn::Error::new(
                input.ident.span(),
                "`Reflect` can only be derived for structs with named fields, \
                 mark other types `#[reflect(opaque, clone)]`",
            ));
        };
        let Fields::Named(named) = &data.fields else {
            return Err(syn::Error::new(
                input.ident.span(),
                "`Reflect` can only be derived for structs with named fields, \
                 mark other types `#[reflect(opaque, clone)]`",
            ));
        };

        let mut reflection_index = 0;
        let fields = named
            .named
            .iter()
            .map(|field| {
                let attrs = FieldAttributes::parse_attrs(&field.attrs)?;
                let index = if attrs.ignore.is_some() {
                    None
                } else {
                    reflection_index += 1;
                    Some(reflection_index - 1)
                };
                Ok(StructField {
                    data: field,
                    attrs,
                    reflection_index: index,
                })
            })
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Self::Struct(ReflectStruct::new(meta, fields)))
    }
}
