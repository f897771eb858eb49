//! Parsing of `#[reflect(...)]` attributes.

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use field_attributes::FieldAttributes;
pub(crate) use type_attributes::TypeAttributes;

use proc_macro2::Span;

/// Record a flag, rejecting duplicates.
fn set_flag(slot: &mut Option<Span>, span: Span, name: &str) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new(span, format!("duplicate `{name}` attribute")));
    }
    *slot = Some(span);
    Ok(())
}
