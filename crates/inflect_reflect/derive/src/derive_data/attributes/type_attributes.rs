use proc_macro2::{Span, TokenStream};
use syn::meta::ParseNestedMeta;
use syn::parse::{ParseStream, Parser};
use syn::spanned::Spanned;
use syn::{Attribute, LitStr, Path};

use super::set_flag;
use crate::REFLECT_ATTRIBUTE_NAME;

/// Type level attributes.
///
/// The standard trait flags store the span of the attribute,
/// so errors in the generated code point back to it.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    pub clone: Option<Span>,
    pub partial_eq: Option<Span>,
    pub debug: Option<Span>,
    pub is_opaque: Option<Span>,
    /// Full path without generics, e.g. `my_crate::models::User`.
    pub type_path: Option<Path>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
            }
        }
        Ok(this)
    }

    /// Parse a bare list, e.g. the `(clone, debug)` of `impl_reflect_opaque!`.
    pub fn parse_stream(&mut self, input: ParseStream) -> syn::Result<()> {
        let tokens: TokenStream = input.parse()?;
        syn::meta::parser(|meta| self.parse_meta(meta)).parse2(tokens)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        let span = meta.path.span();

        if meta.path.is_ident("clone") {
            set_flag(&mut self.clone, span, "clone")
        } else if meta.path.is_ident("partial_eq") {
            set_flag(&mut self.partial_eq, span, "partial_eq")
        } else if meta.path.is_ident("debug") {
            set_flag(&mut self.debug, span, "debug")
        } else if meta.path.is_ident("opaque") {
            set_flag(&mut self.is_opaque, span, "opaque")
        } else if meta.path.is_ident("type_path") {
            if self.type_path.is_some() {
                return Err(meta.error("duplicate `type_path` attribute"));
            }
            let lit: LitStr = meta.value()?.parse()?;
            let path = lit.parse_with(Path::parse_mod_style)?;
            if path.leading_colon.is_some() {
                return Err(syn::Error::new(
                    lit.span(),
                    "did not expect a leading double colon (`::`)",
                ));
            }
            if path.segments.len() < 2 {
                return Err(syn::Error::new(
                    lit.span(),
                    "expected a module path and a name, e.g. `my_crate::Foo`",
                ));
            }
            self.type_path = Some(path);
            Ok(())
        } else {
            Err(meta.error(
                "unsupported attribute, expected `clone`, `partial_eq`, `debug`, `opaque` or `type_path`",
            ))
        }
    }

    pub fn validity(&self) -> syn::Result<()> {
        if let Some(span) = self.is_opaque
            && self.clone.is_none()
        {
            return Err(syn::Error::new(span, "`opaque` types must also declare `clone`"));
        }
        Ok(())
    }
}
