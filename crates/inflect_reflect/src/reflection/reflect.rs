use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTypePath, DynamicTyped, ReflectKind};
use crate::ops::{ReflectCloneError, ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime reflection in [`inflect_reflect`].
///
/// A `dyn Reflect` can be inspected and modified without knowing its type
/// at compile time. Records reach their fields through [`reflect_ref`] and
/// [`reflect_mut`], which expose the [`Struct`] view of the value.
///
/// # Type Identification
///
/// [`Any::type_id`] on `Box<dyn Reflect>` returns the id of the box.
/// Use [`Reflect::ty_id`] instead:
///
/// ```rust
/// # use inflect_reflect::Reflect;
/// # use core::any::{Any, TypeId};
/// let x: Box<dyn Reflect> = Box::new(32_i32).into_reflect();
///
/// assert!(x.type_id() != TypeId::of::<i32>());
/// assert!(x.ty_id() == TypeId::of::<i32>());
/// ```
///
/// # Implementation
///
/// Use [the derive macro](crate::derive::Reflect). Foreign leaf types go
/// through [`impl_reflect_opaque!`](crate::derive::impl_reflect_opaque).
///
/// [`inflect_reflect`]: crate
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`reflect_mut`]: Reflect::reflect_mut
/// [`Struct`]: crate::ops::Struct
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    /// Casts this type to a fully-reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable, fully-reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed, fully-reflected value.
    #[inline(always)]
    fn into_reflect(self: Box<Self>) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        self
    }

    /// Moves this value into a boxed, fully-reflected value.
    ///
    /// ```
    /// use inflect_reflect::Reflect;
    ///
    /// let r = 32.into_boxed_reflect();
    /// assert!(r.is::<i32>());
    /// ```
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Return the [`TypeId`] of the underlying type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Replace this value with `value`, which must have exactly the same type.
    ///
    /// On a type mismatch, `value` is handed back untouched.
    ///
    /// ```
    /// # use inflect_reflect::Reflect;
    /// let mut s = String::from("a");
    ///
    /// s.set(String::from("b").into_boxed_reflect()).unwrap();
    /// assert_eq!(s, "b");
    ///
    /// let back = s.set(7_u8.into_boxed_reflect()).unwrap_err();
    /// assert!(back.is::<u8>());
    /// ```
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Returns the ["kind"](ReflectKind) of the type.
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable view of the value by its kind.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable view of the value by its kind.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Clone the value into a new box holding the same concrete type.
    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError>;

    /// Compare with another reflected value.
    ///
    /// Returns `None` when the type does not support comparison.
    #[inline]
    fn reflect_partial_eq(&self, _other: &dyn Reflect) -> Option<bool> {
        None
    }

    /// Debug formatting through reflection.
    fn reflect_debug(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use crate::impls;
        match self.reflect_ref() {
            ReflectRef::Struct(data) => impls::struct_debug(data, f),
            ReflectRef::List(data) => impls::list_debug(data, f),
            ReflectRef::Map(data) => impls::map_debug(data, f),
            ReflectRef::Pointer(data) => impls::pointer_debug(data, f),
            ReflectRef::Opaque(_) => write!(f, "Opaque({})", self.reflect_type_path()),
        }
    }
}

impl dyn Reflect {
    /// Check whether the underlying type is `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcast the box, returning it untouched on a type mismatch.
    #[inline]
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if self.is::<T>() {
            #[expect(unsafe_code, reason = "type is already checked")]
            Ok(unsafe { <Box<dyn Any>>::downcast::<T>(self).unwrap_unchecked() })
        } else {
            Err(self)
        }
    }

    /// Move the value out of the box, returning it untouched on a type mismatch.
    ///
    /// ```
    /// # use inflect_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10_i64.into_boxed_reflect();
    /// assert_eq!(x.take::<i64>().unwrap(), 10);
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        if self.is::<T>() {
            #[expect(unsafe_code, reason = "type is already checked")]
            Ok(unsafe { *<Box<dyn Any>>::downcast::<T>(self).unwrap_unchecked() })
        } else {
            Err(self)
        }
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implement `set`, `reflect_kind`, `reflect_ref` and `reflect_mut`.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        fn set(
            &mut self,
            value: ::alloc::boxed::Box<dyn $crate::Reflect>,
        ) -> Result<(), ::alloc::boxed::Box<dyn $crate::Reflect>> {
            *self = value.take::<Self>()?;
            Ok(())
        }

        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;
