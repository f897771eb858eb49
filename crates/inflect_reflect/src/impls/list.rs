use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::info::{ContainerInfo, TypeInfo, Typed};
use crate::ops::{List, ListItemIter, ReflectCloneError};
use crate::{Reflect, impls};

crate::derive::impl_type_path!(::alloc::vec::Vec<T>);

impl<T: Reflect + Typed> Typed for Vec<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: impls::GenericTypeInfoCell = impls::GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::List(ContainerInfo::new::<Self>()))
    }
}

impl<T: Reflect + Typed> Reflect for Vec<T> {
    crate::reflection::impl_reflect_cast_fn!(List);

    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        let mut vec: Vec<T> = Vec::with_capacity(self.len());
        for item in self {
            vec.push(impls::reflect_clone_as(item)?);
        }
        Ok(Box::new(vec))
    }

    #[inline]
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        impls::list_partial_eq(self, other)
    }

    #[inline]
    fn reflect_debug(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        impls::list_debug(self, f)
    }
}

impl<T: Reflect + Typed> List for Vec<T> {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(Reflect::as_reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        <[T]>::get_mut(self, index).map(Reflect::as_reflect_mut)
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::info::{ReflectKind, Typed};

    #[test]
    fn clone_keeps_type_and_items() {
        let value = vec![String::from("a"), String::from("b")];
        let cloned = value.reflect_clone().unwrap();
        assert_eq!(cloned.take::<Vec<String>>().unwrap(), value);
    }

    #[test]
    fn partial_eq_by_items() {
        let a = vec![1_u8, 2];
        assert_eq!(a.reflect_partial_eq(&vec![1_u8, 2]), Some(true));
        assert_eq!(a.reflect_partial_eq(&vec![1_u8]), Some(false));
        assert_eq!(a.reflect_partial_eq(&1_u8), Some(false));
    }

    #[test]
    fn list_type_info() {
        let info = <Vec<i64>>::type_info();
        assert_eq!(info.kind(), ReflectKind::List);
        assert_eq!(info.type_path(), "alloc::vec::Vec<i64>");
    }
}
