use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Automatically implemented by [`#[derive(Reflect)]`](crate::derive::Reflect).
///
/// # Examples
///
/// ```
/// use inflect_reflect::{derive::Reflect, info::{Typed, TypeInfo}};
///
/// #[derive(Reflect)]
/// struct A {
///     pub id: u64,
/// }
///
/// let info: &'static TypeInfo = <A as Typed>::type_info();
/// assert_eq!(info.as_struct().unwrap().field_len(), 1);
/// ```
///
/// # Manually Impl
///
/// Use [`NonGenericTypeInfoCell`] or [`GenericTypeInfoCell`] to store the
/// value, it is built once and lives for the rest of the program.
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: TypePath {
    /// Returns the type information of `Self`.
    ///
    /// Use [`DynamicTyped`] for dynamic dispatch.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Provide dynamic dispatch for types that implement [`Typed`].
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use inflect_reflect::{derive::Reflect, Reflect, info::DynamicTyped};
    /// #[derive(Reflect)]
    /// struct A {
    ///     pub id: u64,
    /// }
    ///
    /// let a = Box::new(A { id: 1 }) as Box<dyn Reflect>;
    /// let info = a.reflect_type_info();
    /// assert!(info.type_is::<A>());
    /// ```
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
