use log::debug;

use super::node::{FieldMap, FieldNode, FieldTree};
use crate::Reflect;
use crate::access::{AccessError, FieldPath, as_record};
use crate::ops::{ReflectRef, Struct};
use crate::time::Timestamp;

/// Build the field tree of `record`.
///
/// Fields are visited depth first, in declaration order:
///
/// - opaque values, lists and maps are leaves;
/// - records are expanded, except [`Timestamp`] which gets an empty map;
/// - pointers are classified by their pointee, an empty pointer is a leaf.
///
/// Declined expansions are logged at `debug` level.
///
/// # Errors
///
/// - [`AccessError::NonPointer`] if `record` is not a record,
///   or a non-empty pointer to one.
/// - [`AccessError::MalformedTag`] if any field's tag cannot be parsed.
///
/// # Examples
///
/// ```
/// use inflect_reflect::{build_field_tree, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Point {
///     pub x: i32,
///     pub y: i32,
/// }
///
/// #[derive(Reflect)]
/// struct Shape {
///     pub origin: Point,
///     #[reflect(tag = r#"json:"name""#)]
///     pub name: String,
/// }
///
/// let mut shape = Shape { origin: Point { x: 0, y: 0 }, name: String::new() };
/// let mut tree = build_field_tree(&mut shape).unwrap();
///
/// assert!(tree.node(&["name"]).unwrap().is_leaf());
/// assert_eq!(tree.node(&["name"]).unwrap().tags().get("json"), Some("name"));
///
/// *tree.get_mut(&["origin", "x"]).unwrap().downcast_mut::<i32>().unwrap() = 4;
/// assert_eq!(shape.origin.x, 4);
/// ```
pub fn build_field_tree(record: &mut dyn Reflect) -> Result<FieldTree<'_>, AccessError> {
    let Some(view) = as_record(record) else {
        return Err(AccessError::NonPointer {
            type_path: record.reflect_type_path(),
        });
    };
    let fields = expand(view, &FieldPath::default(), true)?;
    Ok(FieldTree { record, fields })
}

/// `writable` is whether every non-embedded record above `record` is writable.
fn expand(record: &dyn Struct, prefix: &FieldPath, writable: bool) -> Result<FieldMap, AccessError> {
    let Ok(info) = record.reflect_type_info().as_struct() else {
        return Ok(FieldMap::default());
    };

    let mut fields = FieldMap::with_capacity_and_hasher(info.field_len(), Default::default());
    for (index, field) in info.iter().enumerate() {
        let tags = field.tags().map_err(|source| AccessError::MalformedTag {
            field: field.name().into(),
            source,
        })?;
        let slot = prefix.child(index);
        let inherited = writable && (field.is_embedded() || field.is_writable());

        let children = match record.field_at(index) {
            Some(value) => classify(value, field.name(), &slot, inherited)?,
            None => None,
        };

        fields.insert(
            field.name(),
            FieldNode {
                slot,
                tags,
                writable: writable && field.is_writable(),
                children,
            },
        );
    }
    Ok(fields)
}

fn classify(
    value: &dyn Reflect,
    name: &str,
    slot: &FieldPath,
    writable: bool,
) -> Result<Option<FieldMap>, AccessError> {
    match value.reflect_ref() {
        ReflectRef::Opaque(_) | ReflectRef::List(_) | ReflectRef::Map(_) => Ok(None),
        ReflectRef::Struct(_) if value.is::<Timestamp>() => {
            debug!("field `{name}` is a `{}`, not expanded", value.reflect_type_path());
            Ok(Some(FieldMap::default()))
        }
        ReflectRef::Struct(inner) => expand(inner, slot, writable).map(Some),
        ReflectRef::Pointer(pointer) => match pointer.pointee() {
            Some(pointee) => classify(pointee, name, slot, writable),
            None => {
                debug!(
                    "field `{name}` is an empty `{}`, reported as a leaf",
                    value.reflect_type_path(),
                );
                Ok(None)
            }
        },
    }
}
