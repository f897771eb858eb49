use alloc::boxed::Box;
use alloc::string::String;

use super::error::AccessError;
use super::lookup::{self, Resolved};
use super::path::{FieldPath, as_record};
use crate::Reflect;
use crate::info::NamedField;
use crate::tree::{FieldTree, build_field_tree};

// -----------------------------------------------------------------------------
// Read

/// Borrow the field `field` of `record`.
///
/// Names of embedded records' fields are promoted, see the
/// [module docs](crate::access).
///
/// # Errors
///
/// - [`AccessError::InvalidType`] if `record` is not a record,
///   or a non-empty pointer to one.
/// - [`AccessError::NotFound`] if no field has that name.
pub fn get_ref<'a>(record: &'a dyn Reflect, field: &str) -> Result<&'a dyn Reflect, AccessError> {
    Ok(resolve_read(record, field)?.value)
}

/// Returns a snapshot of the field `field` of `record`.
///
/// # Errors
///
/// As [`get_ref`], plus [`AccessError::NotCloneable`] if the field's
/// value refuses [`Reflect::reflect_clone`].
pub fn get(record: &dyn Reflect, field: &str) -> Result<Box<dyn Reflect>, AccessError> {
    get_ref(record, field)?
        .reflect_clone()
        .map_err(|source| AccessError::NotCloneable {
            field: field.into(),
            source,
        })
}

/// Returns a snapshot of the field `field` of `record` as a `T`.
///
/// # Errors
///
/// As [`get`], plus [`AccessError::TypeMismatch`] if the field is not a `T`.
/// The type is checked before cloning.
pub fn get_as<T: Reflect>(record: &dyn Reflect, field: &str) -> Result<T, AccessError> {
    let value = get_ref(record, field)?;
    if !value.is::<T>() {
        return Err(type_mismatch::<T>(field, value.reflect_type_path()));
    }
    value
        .reflect_clone()
        .map_err(|source| AccessError::NotCloneable {
            field: field.into(),
            source,
        })?
        .take::<T>()
        .map_err(|value| type_mismatch::<T>(field, value.reflect_type_path()))
}

/// Returns the value of `key` in the tag of the field `field`.
///
/// The raw tag is parsed on every call.
///
/// # Errors
///
/// - [`AccessError::InvalidType`] and [`AccessError::NotFound`] as [`get_ref`].
/// - [`AccessError::MalformedTag`] if the raw tag cannot be parsed.
/// - [`AccessError::TagNotFound`] if `key` is absent or its value is empty.
pub fn tag(record: &dyn Reflect, field: &str, key: &str) -> Result<&'static str, AccessError> {
    let resolved = resolve_read(record, field)?;
    let tags = resolved
        .field
        .tags()
        .map_err(|source| AccessError::MalformedTag {
            field: field.into(),
            source,
        })?;
    tags.get(key).ok_or_else(|| AccessError::TagNotFound {
        field: field.into(),
        key: key.into(),
    })
}

// -----------------------------------------------------------------------------
// Write

/// Overwrite the field `field` of `record` with `value`.
///
/// # Errors
///
/// Checked in this order, the record is untouched on failure:
///
/// - [`AccessError::NonPointer`] if `record` is not a record,
///   or a non-empty pointer to one.
/// - [`AccessError::NotFound`] if no field has that name.
/// - [`AccessError::NoSet`] if the field is not writable.
/// - [`AccessError::TypeMismatch`] if `value` is not exactly of the field's type.
pub fn set(record: &mut dyn Reflect, field: &str, value: Box<dyn Reflect>) -> Result<(), AccessError> {
    let path = resolve_write(record, field, &*value)?.path;
    overwrite(record, &path, field, value)
}

/// Overwrite the field `field` of `record` with `new` if it currently
/// equals `old`.
///
/// Equality is [`Reflect::reflect_partial_eq`]. The check and the write
/// happen under the one `&mut` borrow; records shared between threads
/// must be guarded by the caller.
///
/// # Errors
///
/// As [`set`], with `old` also checked against the field's type, then:
///
/// - [`AccessError::NotMatched`] if the field does not equal `old`.
/// - [`AccessError::NotComparable`] if the field's type has no equality.
pub fn cas(
    record: &mut dyn Reflect,
    field: &str,
    old: &dyn Reflect,
    new: Box<dyn Reflect>,
) -> Result<(), AccessError> {
    let path = {
        let resolved = resolve_write(record, field, &*new)?;
        check_type(field, resolved.field, old)?;
        match resolved.value.reflect_partial_eq(old) {
            Some(true) => resolved.path,
            Some(false) => {
                return Err(AccessError::NotMatched {
                    field: field.into(),
                });
            }
            None => {
                return Err(AccessError::NotComparable {
                    field: field.into(),
                    type_path: resolved.value.reflect_type_path(),
                });
            }
        }
    };
    overwrite(record, &path, field, new)
}

// -----------------------------------------------------------------------------
// Internal API

fn resolve_read<'a>(record: &'a dyn Reflect, field: &str) -> Result<Resolved<'a>, AccessError> {
    let Some(view) = as_record(record) else {
        return Err(AccessError::InvalidType {
            type_path: record.reflect_type_path(),
        });
    };
    lookup::resolve(view, field).ok_or_else(|| not_found(field))
}

fn resolve_write<'a>(
    record: &'a dyn Reflect,
    field: &str,
    value: &dyn Reflect,
) -> Result<Resolved<'a>, AccessError> {
    let Some(view) = as_record(record) else {
        return Err(AccessError::NonPointer {
            type_path: record.reflect_type_path(),
        });
    };
    let resolved = lookup::resolve(view, field).ok_or_else(|| not_found(field))?;
    if !resolved.field.is_writable() {
        return Err(AccessError::NoSet {
            field: field.into(),
        });
    }
    check_type(field, resolved.field, value)?;
    Ok(resolved)
}

/// Exact type identity, no widening.
fn check_type(
    field: &str,
    expected: &NamedField,
    value: &dyn Reflect,
) -> Result<(), AccessError> {
    if value.ty_id() == expected.ty_id() {
        Ok(())
    } else {
        Err(AccessError::TypeMismatch {
            field: field.into(),
            expected: expected.type_info().type_path(),
            found: value.reflect_type_path(),
        })
    }
}

fn overwrite(
    record: &mut dyn Reflect,
    path: &FieldPath,
    field: &str,
    value: Box<dyn Reflect>,
) -> Result<(), AccessError> {
    let slot = path.resolve_mut(record).ok_or_else(|| not_found(field))?;
    slot.set(value).map_err(|value| AccessError::TypeMismatch {
        field: field.into(),
        expected: slot.reflect_type_path(),
        found: value.reflect_type_path(),
    })
}

#[inline]
fn not_found(field: &str) -> AccessError {
    AccessError::NotFound {
        field: String::from(field),
    }
}

#[inline]
fn type_mismatch<T>(field: &str, expected: &'static str) -> AccessError {
    AccessError::TypeMismatch {
        field: field.into(),
        expected,
        found: core::any::type_name::<T>(),
    }
}

// -----------------------------------------------------------------------------
// Inflect

/// Method-call access to the operations of this module.
///
/// Implemented for every [`Reflect`] type and for `dyn Reflect`.
///
/// # Examples
///
/// ```
/// use inflect_reflect::{Inflect, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Account {
///     #[reflect(tag = r#"json:"balance""#)]
///     pub balance: i64,
/// }
///
/// let mut account = Account { balance: 10 };
///
/// account.cas_field("balance", &10_i64, 15_i64).unwrap();
/// assert_eq!(account.get_field_as::<i64>("balance").unwrap(), 15);
///
/// let err = account.cas_field("balance", &10_i64, 20_i64).unwrap_err();
/// assert!(err.is_retryable());
/// assert_eq!(account.field_tag("balance", "json").unwrap(), "balance");
/// ```
pub trait Inflect {
    /// See [`get`].
    fn get_field(&self, field: &str) -> Result<Box<dyn Reflect>, AccessError>;

    /// See [`get_ref`].
    fn get_field_ref(&self, field: &str) -> Result<&dyn Reflect, AccessError>;

    /// See [`get_as`].
    fn get_field_as<T: Reflect>(&self, field: &str) -> Result<T, AccessError>;

    /// See [`set`].
    fn set_field<V: Reflect>(&mut self, field: &str, value: V) -> Result<(), AccessError>;

    /// See [`cas`].
    fn cas_field<V: Reflect>(&mut self, field: &str, old: &V, new: V) -> Result<(), AccessError>;

    /// See [`tag`].
    fn field_tag(&self, field: &str, key: &str) -> Result<&'static str, AccessError>;

    /// See [`build_field_tree`].
    fn field_tree(&mut self) -> Result<FieldTree<'_>, AccessError>;
}

macro_rules! impl_inflect_methods {
    () => {
        #[inline]
        fn get_field(&self, field: &str) -> Result<Box<dyn Reflect>, AccessError> {
            get(self, field)
        }

        #[inline]
        fn get_field_ref(&self, field: &str) -> Result<&dyn Reflect, AccessError> {
            get_ref(self, field)
        }

        #[inline]
        fn get_field_as<T: Reflect>(&self, field: &str) -> Result<T, AccessError> {
            get_as::<T>(self, field)
        }

        #[inline]
        fn set_field<V: Reflect>(&mut self, field: &str, value: V) -> Result<(), AccessError> {
            set(self, field, Box::new(value))
        }

        #[inline]
        fn cas_field<V: Reflect>(&mut self, field: &str, old: &V, new: V) -> Result<(), AccessError> {
            cas(self, field, old, Box::new(new))
        }

        #[inline]
        fn field_tag(&self, field: &str, key: &str) -> Result<&'static str, AccessError> {
            tag(self, field, key)
        }

        #[inline]
        fn field_tree(&mut self) -> Result<FieldTree<'_>, AccessError> {
            build_field_tree(self)
        }
    };
}

impl<R: Reflect> Inflect for R {
    impl_inflect_methods!();
}

impl Inflect for dyn Reflect {
    impl_inflect_methods!();
}
