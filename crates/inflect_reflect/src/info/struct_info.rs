use alloc::boxed::Box;

use inflect_utils::hash::HashMap;

use crate::info::{NamedField, Type, TypePath, impl_type_fn};
use crate::ops::Struct;

/// Type information for a record.
///
/// Fields keep their declaration order, see [`StructInfo::iter`].
///
/// # Examples
///
/// ```
/// use inflect_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Point {
///     pub x: i32,
///     pub y: i32,
/// }
///
/// let info = Point::type_info().as_struct().unwrap();
///
/// assert_eq!(info.field_names(), &["x", "y"]);
/// assert!(info.field("y").unwrap().type_is::<i32>());
/// assert_eq!(info.index_of("y"), Some(1));
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
    field_names: Box<[&'static str]>,
    field_indices: HashMap<&'static str, usize>,
}

impl StructInfo {
    impl_type_fn!(ty);

    pub fn new<T: Struct + TypePath>(fields: &[NamedField]) -> Self {
        let field_names = fields.iter().map(NamedField::name).collect();
        let field_indices = fields
            .iter()
            .enumerate()
            .map(|(index, v)| (v.name(), index))
            .collect();

        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
            field_names,
            field_indices,
        }
    }

    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.get(*self.field_indices.get(name)?)
    }

    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Iterate fields in declaration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }

    #[inline]
    pub fn field_names(&self) -> &[&'static str] {
        &self.field_names
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }

    #[inline]
    pub fn field_len(&self) -> usize {
        self.field_names.len()
    }
}
