use crate::Reflect;

// -----------------------------------------------------------------------------
// Struct trait

/// A trait for type-erased record operations via reflection.
///
/// Fields are addressed by name or by declaration index. Fields marked
/// `#[reflect(ignore)]` are not part of the view.
///
/// Usually implemented by [`#[derive(Reflect)]`](crate::derive::Reflect).
///
/// # Examples
///
/// ```
/// use inflect_reflect::{derive::Reflect, Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Foo {
///     pub bar: u32,
/// }
///
/// let foo = Foo { bar: 123 };
///
/// assert_eq!(foo.field_len(), 1);
/// assert_eq!(foo.name_at(0), Some("bar"));
///
/// let field: &dyn Reflect = foo.field_at(0).unwrap();
/// assert_eq!(field.downcast_ref::<u32>(), Some(&123));
/// ```
pub trait Struct: Reflect {
    /// Returns a reference to the field named `name`.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the field named `name`.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    /// Returns a reference to the field at `index`, in declaration order.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the field at `index`, in declaration order.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the name of the field at `index`.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the number of fields.
    fn field_len(&self) -> usize;

    /// Returns an iterator over the field values.
    fn iter_fields(&self) -> StructFieldIter<'_>;
}

impl dyn Struct {
    /// Returns a typed reference to the field named `name`.
    ///
    /// Returns `None` if the field is missing or its type is not `T`.
    #[inline]
    pub fn field_as<T: Reflect>(&self, name: &str) -> Option<&T> {
        self.field(name).and_then(<dyn Reflect>::downcast_ref)
    }

    #[inline]
    pub fn field_mut_as<T: Reflect>(&mut self, name: &str) -> Option<&mut T> {
        self.field_mut(name).and_then(<dyn Reflect>::downcast_mut)
    }

    #[inline]
    pub fn field_at_as<T: Reflect>(&self, index: usize) -> Option<&T> {
        self.field_at(index).and_then(<dyn Reflect>::downcast_ref)
    }

    #[inline]
    pub fn field_at_mut_as<T: Reflect>(&mut self, index: usize) -> Option<&mut T> {
        self.field_at_mut(index).and_then(<dyn Reflect>::downcast_mut)
    }
}

// -----------------------------------------------------------------------------
// StructFieldIter

/// An iterator over the field values of a record.
pub struct StructFieldIter<'a> {
    struct_val: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        StructFieldIter {
            struct_val: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.struct_val.field_at(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.struct_val.field_len() - self.index;
        (size, Some(size))
    }
}

impl<'a> ExactSizeIterator for StructFieldIter<'a> {}
