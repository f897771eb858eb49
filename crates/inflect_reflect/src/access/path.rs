use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::Reflect;
use crate::ops::{ReflectMut, ReflectRef, Struct};

/// The location of a field inside a record.
///
/// A sequence of field indices, in declaration order, walked from the root
/// record. Pointers met on the way (`Box`, `Some`) are stepped through.
///
/// A path does not borrow the record. It is resolved against a record
/// each time the field is needed.
///
/// # Examples
///
/// ```
/// use inflect_reflect::{derive::Reflect, Reflect, access::FieldPath};
///
/// #[derive(Reflect)]
/// struct Inner {
///     pub value: u8,
/// }
///
/// #[derive(Reflect)]
/// struct Outer {
///     pub name: String,
///     pub inner: Option<Box<Inner>>,
/// }
///
/// let mut outer = Outer {
///     name: String::new(),
///     inner: Some(Box::new(Inner { value: 1 })),
/// };
///
/// let path = FieldPath::from(vec![1, 0]);
/// *path.resolve_mut(&mut outer).unwrap().downcast_mut::<u8>().unwrap() = 2;
/// assert_eq!(outer.inner.unwrap().value, 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(Box<[usize]>);

impl FieldPath {
    /// The field indices from the root.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// The path of a field of the record at this path.
    pub(crate) fn child(&self, index: usize) -> Self {
        let mut indices = Vec::with_capacity(self.0.len() + 1);
        indices.extend_from_slice(&self.0);
        indices.push(index);
        Self(indices.into_boxed_slice())
    }

    /// Walk the path on `record`.
    ///
    /// Returns `None` if a step meets a non-record, an empty pointer or a
    /// missing index.
    pub fn resolve<'a>(&self, record: &'a dyn Reflect) -> Option<&'a dyn Reflect> {
        let mut current = record;
        for &index in self.0.iter() {
            current = as_record(current)?.field_at(index)?;
        }
        Some(current)
    }

    /// Walk the path on `record`, mutably.
    pub fn resolve_mut<'a>(&self, record: &'a mut dyn Reflect) -> Option<&'a mut dyn Reflect> {
        let mut current = record;
        for &index in self.0.iter() {
            current = as_record_mut(current)?.field_at_mut(index)?;
        }
        Some(current)
    }
}

impl From<Vec<usize>> for FieldPath {
    #[inline]
    fn from(indices: Vec<usize>) -> Self {
        Self(indices.into_boxed_slice())
    }
}

/// View `value` as a record, stepping through non-empty pointers.
pub(crate) fn as_record(value: &dyn Reflect) -> Option<&dyn Struct> {
    let mut current = value;
    loop {
        match current.reflect_ref() {
            ReflectRef::Struct(record) => return Some(record),
            ReflectRef::Pointer(pointer) => current = pointer.pointee()?,
            _ => return None,
        }
    }
}

/// Mutable counterpart of [`as_record`].
fn as_record_mut(value: &mut dyn Reflect) -> Option<&mut dyn Struct> {
    match value.reflect_mut() {
        ReflectMut::Struct(record) => Some(record),
        ReflectMut::Pointer(pointer) => as_record_mut(pointer.pointee_mut()?),
        _ => None,
    }
}
