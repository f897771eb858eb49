use alloc::boxed::Box;
use core::fmt;

use crate::Reflect;
use crate::ops::{List, Map, Pointer, ReflectCloneError, ReflectRef, Struct};

/// Clone a value through [`Reflect::reflect_clone`] and take the concrete type back.
///
/// Used by containers and by the derive macro to clone field by field.
///
/// # Panics
///
/// Panics if the `reflect_clone` implementation of `T` returns another type.
///
/// ```
/// # use inflect_reflect::impls::reflect_clone_as;
/// let v = vec![String::from("a")];
/// assert_eq!(reflect_clone_as(&v).unwrap(), v);
/// ```
#[inline]
pub fn reflect_clone_as<T: Reflect>(value: &T) -> Result<T, ReflectCloneError> {
    let cloned: Box<dyn Reflect> = value.reflect_clone()?;
    Ok(cloned
        .take::<T>()
        .expect("`Reflect::reflect_clone` should return the same type"))
}

/// A function use for implementing [`Reflect::reflect_partial_eq`].
///
/// # Rules
///
/// 1. If `y` is not a `Struct`, return `Some(false)`.
/// 2. If the field counts differ, return `Some(false)`.
/// 3. Compare fields by name, a missing name yields `Some(false)`.
/// 4. The first field comparison that is not `Some(true)` is the result.
#[inline(never)]
pub fn struct_partial_eq(x: &dyn Struct, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Struct(y) = y.reflect_ref() else {
        return Some(false);
    };

    if x.field_len() != y.field_len() {
        return Some(false);
    }

    for (idx, y_field) in y.iter_fields().enumerate() {
        let Some(x_field) = y.name_at(idx).and_then(|name| x.field(name)) else {
            return Some(false);
        };
        let result = x_field.reflect_partial_eq(y_field);
        if result != Some(true) {
            return result;
        }
    }
    Some(true)
}

/// A function use for implementing [`Reflect::reflect_debug`].
///
/// Output looks like `path::Foo { a: 1, b: "x" }`.
#[inline(never)]
pub fn struct_debug(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(dyn_struct.reflect_type_path());

    for (index, field) in dyn_struct.iter_fields().enumerate() {
        debug.field(
            dyn_struct.name_at(index).unwrap_or_default(),
            &field as &dyn fmt::Debug,
        );
    }
    debug.finish()
}

/// A function use for implementing [`Reflect::reflect_partial_eq`].
///
/// Items are compared in order.
#[inline(never)]
pub fn list_partial_eq(x: &dyn List, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::List(y) = y.reflect_ref() else {
        return Some(false);
    };

    if x.len() != y.len() {
        return Some(false);
    }

    for (x_value, y_value) in x.iter().zip(y.iter()) {
        let result = x_value.reflect_partial_eq(y_value);
        if result != Some(true) {
            return result;
        }
    }

    Some(true)
}

/// A function use for implementing [`Reflect::reflect_debug`].
#[inline(never)]
pub fn list_debug(dyn_list: &dyn List, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_list();
    for item in dyn_list.iter() {
        debug.entry(&item as &dyn fmt::Debug);
    }
    debug.finish()
}

/// A function use for implementing [`Reflect::reflect_partial_eq`].
///
/// Every key of `x` must be found in `y` with an equal value.
#[inline(never)]
pub fn map_partial_eq(x: &dyn Map, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Map(y) = y.reflect_ref() else {
        return Some(false);
    };

    if x.len() != y.len() {
        return Some(false);
    }

    for (key, val) in x.iter() {
        let Some(y_val) = y.get(key) else {
            return Some(false);
        };
        let result = val.reflect_partial_eq(y_val);
        if result != Some(true) {
            return result;
        }
    }

    Some(true)
}

/// A function use for implementing [`Reflect::reflect_debug`].
#[inline(never)]
pub fn map_debug(dyn_map: &dyn Map, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_map();
    for (key, value) in dyn_map.iter() {
        debug.entry(&key as &dyn fmt::Debug, &value as &dyn fmt::Debug);
    }
    debug.finish()
}

/// A function use for implementing [`Reflect::reflect_partial_eq`].
///
/// Two nil pointers are equal, a nil pointer never equals a non-nil one.
#[inline(never)]
pub fn pointer_partial_eq(x: &dyn Pointer, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Pointer(y) = y.reflect_ref() else {
        return Some(false);
    };

    match (x.pointee(), y.pointee()) {
        (None, None) => Some(true),
        (Some(x), Some(y)) => x.reflect_partial_eq(y),
        _ => Some(false),
    }
}

/// A function use for implementing [`Reflect::reflect_debug`].
///
/// A nil pointer prints `None`, otherwise the pointee is printed.
#[inline(never)]
pub fn pointer_debug(dyn_pointer: &dyn Pointer, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match dyn_pointer.pointee() {
        Some(value) => value.reflect_debug(f),
        None => f.write_str("None"),
    }
}
