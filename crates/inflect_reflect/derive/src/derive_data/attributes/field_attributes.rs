use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::spanned::Spanned;
use syn::{Attribute, LitStr};

use super::set_flag;
use crate::REFLECT_ATTRIBUTE_NAME;

/// Field level attributes.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// The raw tag string, parsed at runtime.
    pub tag: Option<LitStr>,
    pub embed: Option<Span>,
    pub readonly: Option<Span>,
    pub ignore: Option<Span>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
            }
        }
        this.validity()?;
        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        let span = meta.path.span();

        if meta.path.is_ident("tag") {
            if self.tag.is_some() {
                return Err(meta.error("duplicate `tag` attribute"));
            }
            self.tag = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("embed") {
            set_flag(&mut self.embed, span, "embed")
        } else if meta.path.is_ident("readonly") {
            set_flag(&mut self.readonly, span, "readonly")
        } else if meta.path.is_ident("ignore") {
            set_flag(&mut self.ignore, span, "ignore")
        } else {
            Err(meta.error(
                "unsupported attribute, expected `tag`, `embed`, `readonly` or `ignore`",
            ))
        }
    }

    fn validity(&self) -> syn::Result<()> {
        if let Some(span) = self.ignore
            && (self.tag.is_some() || self.embed.is_some() || self.readonly.is_some())
        {
            return Err(syn::Error::new(
                span,
                "an ignored field cannot have other reflect attributes",
            ));
        }
        Ok(())
    }
}
