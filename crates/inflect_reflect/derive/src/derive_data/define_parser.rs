use syn::{Attribute, Generics, Ident, Path};
use syn::{parenthesized, parse::ParseStream, token::Paren};

use super::{TypeAttributes, validate_generics};

// -----------------------------------------------------------------------------
// Path Parser

pub(crate) struct ReflectTypePathParser {
    pub type_ident: Ident,
    pub type_path: Path,
    pub generics: Generics,
}

impl ReflectTypePathParser {
    /// Parse the input stream of [`impl_type_path`](crate::impl_type_path).
    ///
    /// Format: `ident` or `::full::path<Generics>`
    pub fn parse(input: ParseStream) -> syn::Result<Self> {
        let type_path = Path::parse_mod_style(input)?;

        let Some(last) = type_path.segments.last() else {
            return Err(input.error("expected a type path"));
        };
        let type_ident = last.ident.clone();

        let mut generics = input.parse::<Generics>()?;
        generics.where_clause = input.parse()?;
        validate_generics(&generics)?;

        Ok(Self {
            type_ident,
            type_path,
            generics,
        })
    }
}

// -----------------------------------------------------------------------------
// Opaque Parser

/// Input of [`impl_reflect_opaque`](crate::impl_reflect_opaque).
pub(crate) struct ReflectOpaqueParser {
    pub attrs: TypeAttributes,
    pub type_ident: Ident,
    pub type_path: Path,
    pub generics: Generics,
}

impl ReflectOpaqueParser {
    /// Format: `ident (..attrs..)` or `::full::path<Generics> (..attrs..)`
    pub fn parse(input: ParseStream) -> syn::Result<Self> {
        let origin_span = input.span();
        let origin_attrs = input.call(Attribute::parse_outer)?;
        let mut attrs = TypeAttributes::parse_attrs(origin_attrs.as_slice())?;

        let ReflectTypePathParser {
            type_ident,
            type_path,
            generics,
        } = ReflectTypePathParser::parse(input)?;

        if input.peek(Paren) {
            let content;
            parenthesized!(content in input);
            attrs.parse_stream(&content)?;
        }
        attrs.is_opaque = Some(origin_span);
        attrs.validity()?;

        Ok(Self {
            attrs,
            type_ident,
            type_path,
            generics,
        })
    }
}
