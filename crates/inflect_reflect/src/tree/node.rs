use alloc::boxed::Box;
use alloc::string::String;

use inflect_utils::hash::HashMap;

use crate::Reflect;
use crate::access::{AccessError, FieldPath};
use crate::tags::Tags;

/// Field name to node, for one level of a [`FieldTree`].
pub type FieldMap = HashMap<&'static str, FieldNode>;

// -----------------------------------------------------------------------------
// FieldNode

/// One field of a [`FieldTree`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldNode {
    pub(super) slot: FieldPath,
    pub(super) tags: Tags<'static>,
    pub(super) writable: bool,
    pub(super) children: Option<FieldMap>,
}

impl FieldNode {
    /// Where the field lives in the root record.
    #[inline]
    pub fn slot(&self) -> &FieldPath {
        &self.slot
    }

    #[inline]
    pub fn tags(&self) -> &Tags<'static> {
        &self.tags
    }

    /// Whether the field and every non-embedded record above it are writable.
    #[inline]
    pub fn is_writable(&self) -> bool {
        self.writable
    }

    /// The fields of a record-typed field.
    ///
    /// `None` for leaves, an empty map for records that are kept whole
    /// (see [`Timestamp`](crate::time::Timestamp)).
    #[inline]
    pub fn children(&self) -> Option<&FieldMap> {
        self.children.as_ref()
    }

    #[inline]
    pub fn child(&self, name: &str) -> Option<&FieldNode> {
        self.children.as_ref()?.get(name)
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

// -----------------------------------------------------------------------------
// FieldTree

/// The fields of a record, nested by record-typed fields,
/// holding the one mutable borrow of the record.
///
/// Every node's slot resolves to the live storage of its field.
/// Writes through the tree are visible in the record.
///
/// Built by [`build_field_tree`](crate::tree::build_field_tree).
pub struct FieldTree<'a> {
    pub(super) record: &'a mut dyn Reflect,
    pub(super) fields: FieldMap,
}

impl<'a> FieldTree<'a> {
    /// The top-level fields.
    #[inline]
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Find a node by its names from the top level, e.g. `&["model", "id"]`.
    pub fn node(&self, path: &[&str]) -> Option<&FieldNode> {
        let (first, rest) = path.split_first()?;
        let mut node = self.fields.get(*first)?;
        for name in rest {
            node = node.child(*name)?;
        }
        Some(node)
    }

    /// Borrow the field at `path`.
    ///
    /// # Errors
    ///
    /// [`AccessError::NotFound`] if there is no such node, or its storage
    /// is no longer reachable (a pointer on the way was emptied).
    pub fn get(&self, path: &[&str]) -> Result<&dyn Reflect, AccessError> {
        let node = self.node(path).ok_or_else(|| not_found(path))?;
        node.slot.resolve(&*self.record).ok_or_else(|| not_found(path))
    }

    /// Mutably borrow the field at `path`.
    ///
    /// # Errors
    ///
    /// As [`get`](Self::get), plus [`AccessError::NoSet`] for a read-only node.
    pub fn get_mut(&mut self, path: &[&str]) -> Result<&mut dyn Reflect, AccessError> {
        let node = self.node(path).ok_or_else(|| not_found(path))?;
        if !node.writable {
            return Err(AccessError::NoSet {
                field: join(path),
            });
        }
        let slot = node.slot.clone();
        slot.resolve_mut(&mut *self.record).ok_or_else(|| not_found(path))
    }

    /// Overwrite the field at `path`, with the checks of [`access::set`].
    ///
    /// [`access::set`]: crate::access::set
    pub fn set(&mut self, path: &[&str], value: Box<dyn Reflect>) -> Result<(), AccessError> {
        let slot = self.get_mut(path)?;
        if slot.ty_id() != value.ty_id() {
            return Err(AccessError::TypeMismatch {
                field: join(path),
                expected: slot.reflect_type_path(),
                found: value.reflect_type_path(),
            });
        }
        slot.set(value).map_err(|value| AccessError::TypeMismatch {
            field: join(path),
            expected: slot.reflect_type_path(),
            found: value.reflect_type_path(),
        })
    }

    /// Resolve a slot against the record.
    #[inline]
    pub fn slot(&self, slot: &FieldPath) -> Option<&dyn Reflect> {
        slot.resolve(&*self.record)
    }

    /// Resolve a slot against the record, mutably.
    ///
    /// Does not check writability.
    #[inline]
    pub fn slot_mut(&mut self, slot: &FieldPath) -> Option<&mut dyn Reflect> {
        slot.resolve_mut(&mut *self.record)
    }

    #[inline]
    pub fn record(&self) -> &dyn Reflect {
        &*self.record
    }

    #[inline]
    pub fn record_mut(&mut self) -> &mut dyn Reflect {
        &mut *self.record
    }

    /// Release the record, keeping the layout.
    #[inline]
    pub fn into_fields(self) -> FieldMap {
        self.fields
    }
}

impl core::fmt::Debug for FieldTree<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FieldTree")
            .field("record", &self.record.reflect_type_path())
            .field("fields", &self.fields)
            .finish()
    }
}

#[inline]
fn join(path: &[&str]) -> String {
    path.join(".")
}

#[cold]
fn not_found(path: &[&str]) -> AccessError {
    AccessError::NotFound { field: join(path) }
}
