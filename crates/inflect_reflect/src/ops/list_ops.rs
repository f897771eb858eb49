use crate::Reflect;

// -----------------------------------------------------------------------------
// List trait

/// A trait for type-erased list-like operations via reflection.
///
/// Implemented for [`Vec`](alloc::vec::Vec).
///
/// # Examples
///
/// ```
/// use inflect_reflect::{Reflect, ops::List};
///
/// let mut vec = vec![1_i32, 2, 3];
/// let list: &mut dyn List = &mut vec;
///
/// *list.get_mut(0).unwrap().downcast_mut::<i32>().unwrap() = 9;
/// assert_eq!(list.iter().count(), 3);
/// assert_eq!(vec, [9, 2, 3]);
/// ```
pub trait List: Reflect {
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn iter(&self) -> ListItemIter<'_>;
}

// -----------------------------------------------------------------------------
// ListItemIter

/// An iterator over the items of a list.
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl<'a> ListItemIter<'a> {
    #[inline(always)]
    pub const fn new(list: &'a dyn List) -> Self {
        ListItemIter { list, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.list.len() - self.index;
        (size, Some(size))
    }
}

impl<'a> ExactSizeIterator for ListItemIter<'a> {}
