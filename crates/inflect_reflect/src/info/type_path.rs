use core::any::{Any, TypeId};
use core::{fmt, hash};

// -----------------------------------------------------------------------------
// TypePath

/// A static accessor to type paths and names.
///
/// A stable alternative to [`core::any::type_name`], used in error messages
/// and debug output of reflected values.
///
/// These names never carry the prefix `::`. Manual implementations should
/// keep that rule.
///
/// # Implementation
///
/// [`#[derive(Reflect)]`](crate::derive::Reflect) implements it with the
/// module path of the definition, or with `#[reflect(type_path = "...")]`.
///
/// Manually, for a non generic type:
///
/// ```
/// use inflect_reflect::info::TypePath;
///
/// struct Foo;
///
/// impl TypePath for Foo {
///     fn type_path() -> &'static str { "my_crate::foo::Foo" }
///     fn type_name() -> &'static str { "Foo" }
///     fn type_ident() -> &'static str { "Foo" }
///     fn module_path() -> Option<&'static str> { Some("my_crate::foo") }
/// }
/// ```
///
/// Generic types cache the built strings in a [`GenericTypePathCell`].
///
/// ```
/// use inflect_reflect::info::TypePath;
/// use inflect_reflect::impls::{concat, GenericTypePathCell};
///
/// struct Foo<T>(T);
///
/// impl<T: TypePath> TypePath for Foo<T> {
///     fn type_path() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| {
///             concat(&["my_crate::foo::Foo", "<", T::type_path(), ">"])
///         })
///     }
///     fn type_name() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| concat(&["Foo", "<", T::type_name(), ">"]))
///     }
///     fn type_ident() -> &'static str { "Foo" }
///     fn module_path() -> Option<&'static str> { Some("my_crate::foo") }
/// }
///
/// assert_eq!(Foo::<u8>::type_path(), "my_crate::foo::Foo<u8>");
/// ```
///
/// [`GenericTypePathCell`]: crate::impls::GenericTypePathCell
pub trait TypePath: 'static {
    /// Returns the fully qualified path with generics.
    ///
    /// For `Option<Vec<usize>>`, this is `"core::option::Option<alloc::vec::Vec<usize>>"`.
    fn type_path() -> &'static str;

    /// Returns the path without module prefixes.
    ///
    /// For `Option<Vec<usize>>`, this is `"Option<Vec<usize>>"`.
    fn type_name() -> &'static str;

    /// Returns the short name of the type, without generics.
    ///
    /// For `Option<Vec<usize>>`, this is `"Option"`.
    fn type_ident() -> &'static str;

    /// Optional module path where the type is defined.
    ///
    /// Primitive types return `None`.
    fn module_path() -> Option<&'static str> {
        None
    }
}

// -----------------------------------------------------------------------------
// DynamicTypePath

/// Provide dynamic dispatch for types that implement [`TypePath`].
///
/// # Examples
///
/// ```
/// use inflect_reflect::{info::DynamicTypePath, Reflect};
///
/// let x = String::new();
/// let y: &dyn Reflect = &x;
/// assert_eq!(y.reflect_type_path(), "alloc::string::String");
/// ```
pub trait DynamicTypePath {
    /// See [`TypePath::type_path`].
    fn reflect_type_path(&self) -> &'static str;

    /// See [`TypePath::type_name`].
    fn reflect_type_name(&self) -> &'static str;

    /// See [`TypePath::type_ident`].
    fn reflect_type_ident(&self) -> &'static str;

    /// See [`TypePath::module_path`].
    fn reflect_module_path(&self) -> Option<&'static str>;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        Self::type_path()
    }

    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        Self::type_name()
    }

    #[inline]
    fn reflect_type_ident(&self) -> &'static str {
        Self::type_ident()
    }

    #[inline]
    fn reflect_module_path(&self) -> Option<&'static str> {
        Self::module_path()
    }
}

// -----------------------------------------------------------------------------
// Type

/// The base representation of a Rust type: its [`TypeId`] and
/// its [`TypePath`] functions.
///
/// # Examples
///
/// ```
/// use inflect_reflect::info::Type;
///
/// let ty = Type::of::<String>();
///
/// assert!(ty.is::<String>());
/// assert_eq!(ty.path(), "alloc::string::String");
/// assert_eq!(ty.name(), "String");
/// ```
#[derive(Copy, Clone)]
pub struct Type {
    type_id: TypeId,
    type_path: fn() -> &'static str,
    type_name: fn() -> &'static str,
    type_ident: fn() -> &'static str,
    module_path: fn() -> Option<&'static str>,
}

impl Type {
    /// Creates a new [`Type`] from a type that implements [`TypePath`].
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_path: T::type_path,
            type_name: T::type_name,
            type_ident: T::type_ident,
            module_path: T::module_path,
        }
    }

    /// Returns the [`TypeId`] of the type.
    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.type_id
    }

    /// Check if the given type matches this one.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        TypeId::of::<T>() == self.type_id
    }

    /// See [`TypePath::type_path`].
    #[inline]
    pub fn path(&self) -> &'static str {
        (self.type_path)()
    }

    /// See [`TypePath::type_name`].
    #[inline]
    pub fn name(&self) -> &'static str {
        (self.type_name)()
    }

    /// See [`TypePath::type_ident`].
    #[inline]
    pub fn ident(&self) -> &'static str {
        (self.type_ident)()
    }

    /// See [`TypePath::module_path`].
    #[inline]
    pub fn module_path(&self) -> Option<&'static str> {
        (self.module_path)()
    }
}

/// This implementation purely relies on the [`TypeId`] of the type.
impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for Type {}

/// This implementation purely relies on the [`TypeId`] of the type.
impl hash::Hash for Type {
    #[inline]
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

/// Only outputs the [`TypePath`] of the type.
impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

macro_rules! impl_type_fn {
    ($field:ident) => {
        /// Returns the underlying `Type`.
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }
        $crate::info::impl_type_fn!();
    };
    () => {
        /// Returns the `TypeId`.
        #[inline]
        pub const fn ty_id(&self) -> ::core::any::TypeId {
            self.ty().id()
        }

        /// Check if the given type matches this one.
        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.ty().id() == ::core::any::TypeId::of::<T>()
        }

        /// Returns the type path.
        #[inline]
        pub fn type_path(&self) -> &'static str {
            self.ty().path()
        }

        /// Returns the type name.
        #[inline]
        pub fn type_name(&self) -> &'static str {
            self.ty().name()
        }

        /// Returns the type ident.
        #[inline]
        pub fn type_ident(&self) -> &'static str {
            self.ty().ident()
        }

        /// Returns the module path.
        #[inline]
        pub fn module_path(&self) -> Option<&'static str> {
            self.ty().module_path()
        }
    };
}

pub(crate) use impl_type_fn;

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::{Type, TypePath};

    #[test]
    fn type_equality_ignores_path_functions() {
        let a = Type::of::<String>();
        let b = Type::of::<String>();
        assert_eq!(a, b);
        assert_ne!(a, Type::of::<u8>());
    }

    #[test]
    fn container_paths() {
        assert_eq!(<Vec<u8>>::type_path(), "alloc::vec::Vec<u8>");
        assert_eq!(<Vec<u8>>::type_name(), "Vec<u8>");
        assert_eq!(<Vec<u8>>::type_ident(), "Vec");
        assert_eq!(<Vec<u8>>::module_path(), Some("alloc::vec"));
        assert_eq!(u8::module_path(), None);
    }
}
