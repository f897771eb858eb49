use quote::{ToTokens, quote};
use syn::spanned::Spanned;
use syn::{GenericParam, Generics, Ident, LitStr, Path, TypeParam, punctuated::Punctuated};

use crate::utils::StringExpr;

/// Reject generic parameters that reflection cannot name.
///
/// Records hold `'static` data and type paths are built from type parameters only.
pub(crate) fn validate_generics(generics: &Generics) -> syn::Result<()> {
    for param in &generics.params {
        match param {
            GenericParam::Type(_) => {}
            GenericParam::Lifetime(lifetime) => {
                return Err(syn::Error::new(
                    lifetime.span(),
                    "lifetime parameters are not supported by reflection",
                ));
            }
            GenericParam::Const(constant) => {
                return Err(syn::Error::new(
                    constant.span(),
                    "const parameters are not supported by reflection",
                ));
            }
        }
    }
    Ok(())
}

/// A container used to parse type paths and generic parameters.
///
/// Only a part of [`ReflectMeta`](crate::derive_data::ReflectMeta),
/// no interfaces are exposed.
pub(crate) enum TypeParser<'a> {
    /// Types that can be named from any scope (e.g. `bool`).
    Primitive(&'a Ident),
    /// A type reachable with just its ident.
    ///
    /// [`module_path!()`](module_path) gives the module path.
    Local {
        ident: &'a Ident,
        custom_path: Option<Path>,
        generics: &'a Generics,
    },
    /// A type named by a full `::my_crate::foo::Bar` path.
    Foreign {
        path: &'a Path,
        generics: &'a Generics,
    },
}

impl core::fmt::Debug for TypeParser<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.real_ident(), f)
    }
}

impl<'a> TypeParser<'a> {
    pub(crate) fn new_local(
        ident: &'a Ident,
        custom_path: Option<Path>,
        generics: &'a Generics,
    ) -> TypeParser<'a> {
        TypeParser::Local {
            ident,
            custom_path,
            generics,
        }
    }

    /// See [`impl_reflect_opaque`](crate::impl_reflect_opaque) and [`impl_type_path`](crate::impl_type_path)
    pub(crate) fn new_foreign(
        ident: &'a Ident,
        path: &'a Path,
        generics: &'a Generics,
    ) -> TypeParser<'a> {
        if path.leading_colon.is_none() {
            TypeParser::Primitive(ident)
        } else {
            TypeParser::Foreign { path, generics }
        }
    }

    pub(super) fn generics(&self) -> &'a Generics {
        // A constant, because a reference of at least 'a is needed.
        const EMPTY_GENERICS: &Generics = &Generics {
            gt_token: None,
            lt_token: None,
            where_clause: None,
            params: Punctuated::new(),
        };

        match self {
            Self::Local { generics, .. } | Self::Foreign { generics, .. } => generics,
            Self::Primitive(_) => EMPTY_GENERICS,
        }
    }

    /// Whether `Typed` and `TypePath` need a per-instance cell.
    pub(super) fn impl_with_generic(&self) -> bool {
        self.generics().type_params().next().is_some()
    }

    /// This name is used in `impl ... for #real_ident {...}`.
    pub(super) fn real_ident(&self) -> proc_macro2::TokenStream {
        match self {
            Self::Local { ident, .. } | Self::Primitive(ident) => ident.to_token_stream(),
            Self::Foreign { path, .. } => path.to_token_stream(),
        }
    }

    /// The path that names the type, without generics.
    fn get_path(&self) -> Option<&Path> {
        match self {
            Self::Local { custom_path, .. } => custom_path.as_ref(),
            Self::Foreign { path, .. } => Some(path),
            Self::Primitive(_) => None,
        }
    }

    fn get_ident(&self) -> &Ident {
        match self {
            Self::Primitive(ident) | Self::Local { ident, .. } => self
                .get_path()
                .and_then(|path| path.segments.last())
                .map(|segment| &segment.ident)
                .unwrap_or(*ident),
            Self::Foreign { path, .. } => path
                .segments
                .last()
                .map(|segment| &segment.ident)
                .unwrap_or_else(|| unreachable!("a parsed path is never empty")),
        }
    }

    pub(super) fn module_path(&self) -> Option<StringExpr> {
        if let Some(path) = self.get_path() {
            let module = path
                .segments
                .iter()
                .take(path.segments.len().saturating_sub(1))
                .map(|segment| segment.ident.to_string())
                .collect::<Vec<_>>()
                .join("::");

            return Some(StringExpr::from_lit(&LitStr::new(&module, path.span())));
        }

        match self {
            Self::Local { .. } => Some(StringExpr::Const(quote! {
                ::core::module_path!()
            })),
            _ => None,
        }
    }

    pub(super) fn type_ident(&self) -> StringExpr {
        StringExpr::from(self.get_ident())
    }

    /// Join the strings of the type parameters with `", "`.
    fn reduce_generics(
        generics: &Generics,
        ty_generic_fn: impl FnMut(&TypeParam) -> StringExpr,
        reflect_path: &Path,
    ) -> StringExpr {
        let mut params = generics.type_params().map(ty_generic_fn);

        let first = params.next().into_iter();

        StringExpr::from_iter(
            first.chain(params.flat_map(|x| [StringExpr::from_str(", "), x])),
            reflect_path,
        )
    }

    /// The "type name" of the type.
    ///
    /// For `core::option::Option<alloc::string::String>`, this is `"Option<String>"`.
    pub(super) fn type_name(&self, reflect_path: &Path) -> StringExpr {
        let type_ident = self.type_ident();
        if !self.impl_with_generic() {
            return type_ident;
        }

        let type_path_ = crate::path::type_path_(reflect_path);
        let generics = TypeParser::reduce_generics(
            self.generics(),
            |TypeParam { ident, .. }| {
                StringExpr::Borrowed(quote! {
                    <#ident as #type_path_>::type_name()
                })
            },
            reflect_path,
        );

        StringExpr::from_iter(
            [
                type_ident,
                StringExpr::from_str("<"),
                generics,
                StringExpr::from_str(">"),
            ],
            reflect_path,
        )
    }

    /// The "type path" of the type.
    ///
    /// For `Option<String>`, this is `"core::option::Option<alloc::string::String>"`.
    pub(super) fn type_path(&self, reflect_path: &Path) -> StringExpr {
        let type_ident = self.type_ident();
        let Some(module_path) = self.module_path() else {
            return type_ident;
        };

        if !self.impl_with_generic() {
            return StringExpr::from_iter(
                [module_path, StringExpr::from_str("::"), type_ident],
                reflect_path,
            );
        }

        let type_path_ = crate::path::type_path_(reflect_path);
        let generics = TypeParser::reduce_generics(
            self.generics(),
            |TypeParam { ident, .. }| {
                StringExpr::Borrowed(quote! {
                    <#ident as #type_path_>::type_path()
                })
            },
            reflect_path,
        );

        StringExpr::from_iter(
            [
                module_path,
                StringExpr::from_str("::"),
                type_ident,
                StringExpr::from_str("<"),
                generics,
                StringExpr::from_str(">"),
            ],
            reflect_path,
        )
    }
}
