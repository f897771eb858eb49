use alloc::boxed::Box;
use core::fmt;

use crate::derive::impl_type_path;
use crate::impls::{self, GenericTypeInfoCell};
use crate::info::{ContainerInfo, TypeInfo, Typed};
use crate::ops::{Pointer, ReflectCloneError};
use crate::Reflect;

// -----------------------------------------------------------------------------
// Box

impl_type_path!(::alloc::boxed::Box<T>);

impl<T: Reflect + Typed> Typed for Box<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(ContainerInfo::new::<Self>()))
    }
}

impl<T: Reflect + Typed> Reflect for Box<T> {
    crate::reflection::impl_reflect_cast_fn!(Pointer);

    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        let value: T = impls::reflect_clone_as(&**self)?;
        Ok(Box::new(Box::new(value)))
    }

    #[inline]
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        impls::pointer_partial_eq(self, other)
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).reflect_debug(f)
    }
}

impl<T: Reflect + Typed> Pointer for Box<T> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        Some((**self).as_reflect())
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        Some((**self).as_reflect_mut())
    }
}

// -----------------------------------------------------------------------------
// Option

impl_type_path!(::core::option::Option<T>);

impl<T: Reflect + Typed> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(ContainerInfo::new::<Self>()))
    }
}

impl<T: Reflect + Typed> Reflect for Option<T> {
    crate::reflection::impl_reflect_cast_fn!(Pointer);

    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        let value: Option<T> = match self {
            Some(value) => Some(impls::reflect_clone_as(value)?),
            None => None,
        };
        Ok(Box::new(value))
    }

    #[inline]
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        impls::pointer_partial_eq(self, other)
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => f
                .debug_tuple("Some")
                .field(&value.as_reflect() as &dyn fmt::Debug)
                .finish(),
            None => f.write_str("None"),
        }
    }
}

impl<T: Reflect + Typed> Pointer for Option<T> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(Reflect::as_reflect)
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(Reflect::as_reflect_mut)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::format;
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath};
    use crate::ops::Pointer;

    #[test]
    fn option_is_nil_when_none() {
        let none: Option<u8> = None;
        assert!(none.is_null());
        assert_eq!(none.reflect_kind(), ReflectKind::Pointer);
        assert_eq!(none.reflect_partial_eq(&None::<u8>), Some(true));
        assert_eq!(none.reflect_partial_eq(&Some(1_u8)), Some(false));
    }

    #[test]
    fn box_points_through() {
        let mut boxed = Box::new(String::from("a"));
        if let Some(s) = boxed.pointee_mut().and_then(|v| v.downcast_mut::<String>()) {
            s.push('b');
        }
        assert_eq!(*boxed, "ab");

        let cloned = boxed.reflect_clone().unwrap();
        assert_eq!(*cloned.take::<Box<String>>().unwrap(), "ab");
    }

    #[test]
    fn debug_and_paths() {
        let value: &dyn Reflect = &Some(3_i32);
        assert_eq!(format!("{value:?}"), "Some(3)");
        assert_eq!(<Option<i32>>::type_path(), "core::option::Option<i32>");
        assert_eq!(<Box<i32>>::type_name(), "Box<i32>");
    }
}
