//! Fully qualified paths of `core` items, for use inside `quote!`.
//!
//! Generated code must not depend on what the caller has in scope,
//! e.g. a local type named `Option`.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_fp {
    ($($name:ident => $($segment:ident)::+,)*) => {
        $(
            pub(crate) struct $name;

            impl ToTokens for $name {
                #[inline]
                fn to_tokens(&self, tokens: &mut TokenStream) {
                    tokens.extend(quote!(:: $($segment)::+));
                }
            }
        )*
    };
}

define_fp! {
    AnyFP => core::any::Any,
    SendFP => core::marker::Send,
    SyncFP => core::marker::Sync,
    OptionFP => core::option::Option,
    ResultFP => core::result::Result,
    CloneFP => core::clone::Clone,
    PartialEqFP => core::cmp::PartialEq,
    DebugFP => core::fmt::Debug,
}
