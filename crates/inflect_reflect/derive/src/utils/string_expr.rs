use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{LitStr, spanned::Spanned};

/// A string-valued expression in generated code.
#[derive(Clone)]
pub(crate) enum StringExpr {
    /// Known at compile time: a literal, or a macro like `module_path!()`.
    Const(TokenStream),
    /// A `&'static str` computed at runtime.
    Borrowed(TokenStream),
    /// A `String` computed at runtime.
    Owned(TokenStream),
}

impl Default for StringExpr {
    fn default() -> Self {
        Self::Const("".to_token_stream())
    }
}

impl<T: ToString + Spanned> From<T> for StringExpr {
    fn from(value: T) -> Self {
        Self::Const(LitStr::new(&value.to_string(), value.span()).to_token_stream())
    }
}

impl StringExpr {
    pub fn from_lit(lit: &LitStr) -> Self {
        Self::Const(lit.to_token_stream())
    }

    pub fn from_str(string: &str) -> Self {
        Self::Const(string.to_token_stream())
    }

    /// Tokens of a `&'static str`.
    ///
    /// Owned strings are only borrowed for the enclosing expression.
    pub fn into_borrowed(self) -> TokenStream {
        match self {
            Self::Const(tokens) | Self::Borrowed(tokens) => tokens,
            Self::Owned(owned) => quote! {
                &#owned as &str
            },
        }
    }

    /// Tokens of a `String`.
    pub fn into_owned(self, reflect_path: &syn::Path) -> TokenStream {
        match self {
            Self::Const(tokens) | Self::Borrowed(tokens) => {
                let alloc_utils_ = crate::path::alloc_utils_(reflect_path);
                quote! {
                    #alloc_utils_::String::from(#tokens)
                }
            }
            Self::Owned(owned) => owned,
        }
    }

    fn is_const(&self) -> bool {
        matches!(self, StringExpr::Const(_))
    }

    /// Concatenate the expressions.
    ///
    /// All constant: `concat!` at compile time. Otherwise a runtime concat.
    pub fn from_iter<T: IntoIterator<Item = StringExpr>>(iter: T, reflect_path: &syn::Path) -> Self {
        let exprs: Vec<StringExpr> = iter.into_iter().collect();

        if exprs.is_empty() {
            return Self::default();
        }

        if exprs.iter().all(StringExpr::is_const) {
            let inner = exprs.into_iter().map(StringExpr::into_borrowed);

            Self::Const(quote! {
                ::core::concat!( #(#inner),* )
            })
        } else {
            let concat_ = crate::path::concat_(reflect_path);
            let inner = exprs.into_iter().map(StringExpr::into_borrowed);

            Self::Owned(quote! {
                #concat_(&[ #(#inner),* ])
            })
        }
    }
}
