use crate::Reflect;

/// A trait for indirections to at most one value.
///
/// A `Box<T>` always has a pointee. An `Option<T>` has none when it is `None`,
/// which makes it a nil pointer.
///
/// # Examples
///
/// ```
/// use inflect_reflect::{Reflect, ops::Pointer};
///
/// let mut some = Some(3_u16);
/// *some.pointee_mut().unwrap().downcast_mut::<u16>().unwrap() = 4;
/// assert_eq!(some, Some(4));
///
/// let none: Option<u16> = None;
/// assert!(none.is_null());
/// ```
pub trait Pointer: Reflect {
    /// Returns the pointed value, `None` for a nil pointer.
    fn pointee(&self) -> Option<&dyn Reflect>;

    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect>;

    #[inline]
    fn is_null(&self) -> bool {
        self.pointee().is_none()
    }
}
