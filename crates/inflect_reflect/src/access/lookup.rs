use alloc::vec::Vec;

use log::{trace, warn};

use super::path::{FieldPath, as_record};
use crate::Reflect;
use crate::info::NamedField;
use crate::ops::Struct;

/// A field name resolved against a live record.
pub(crate) struct Resolved<'a> {
    pub(crate) path: FieldPath,
    pub(crate) field: &'static NamedField,
    pub(crate) value: &'a dyn Reflect,
}

/// Resolve `name` among the fields of `record` and the fields promoted
/// from its embedded records.
///
/// Depths are searched shallowest first. A depth with one match wins,
/// a depth with several is ambiguous and nothing is resolved.
/// Embedded records behind an empty pointer are not searched.
pub(crate) fn resolve<'a>(record: &'a dyn Struct, name: &str) -> Option<Resolved<'a>> {
    let mut level: Vec<(FieldPath, &'a dyn Struct)> = alloc::vec![(FieldPath::default(), record)];
    let mut depth = 0_usize;

    while !level.is_empty() {
        let mut found: Option<Resolved<'a>> = None;
        let mut matches = 0_usize;
        let mut next = Vec::new();

        for (prefix, current) in &level {
            let Ok(info) = current.reflect_type_info().as_struct() else {
                continue;
            };
            for (index, field) in info.iter().enumerate() {
                let Some(value) = current.field_at(index) else {
                    continue;
                };
                if field.name() == name {
                    matches += 1;
                    if found.is_none() {
                        found = Some(Resolved {
                            path: prefix.child(index),
                            field,
                            value,
                        });
                    }
                }
                if field.is_embedded()
                    && let Some(inner) = as_record(value)
                {
                    next.push((prefix.child(index), inner));
                }
            }
        }

        match matches {
            0 => level = next,
            1 => return found,
            _ => {
                warn!(
                    "field `{name}` is ambiguous on `{}`: {matches} matches at depth {depth}",
                    record.reflect_type_path(),
                );
                return None;
            }
        }
        depth += 1;
    }

    trace!("field `{name}` not found on `{}`", record.reflect_type_path());
    None
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use super::resolve;
    use crate::access::path::as_record;
    use crate::fixtures::{Both, Data, Left, Model, Right, Wrapped};

    #[test]
    fn own_fields_first() {
        let data = Data::sample();
        let record = as_record(&data).unwrap();

        let own = resolve(record, "created_at").unwrap();
        assert_eq!(own.path.indices(), &[1]);

        let promoted = resolve(record, "id").unwrap();
        assert_eq!(promoted.path.indices(), &[0, 0, 0]);
        assert_eq!(promoted.value.downcast_ref::<u64>(), Some(&1));
        assert_eq!(promoted.field.name(), "id");
    }

    #[test]
    fn embedded_name_is_a_field_too() {
        let data = Data::sample();
        let record = as_record(&data).unwrap();
        assert_eq!(resolve(record, "model").unwrap().path.indices(), &[0, 0]);
    }

    #[test]
    fn same_depth_is_ambiguous() {
        let both = Both {
            left: Left { shared: 1, left_only: 2 },
            right: Right { shared: 3 },
        };
        let record = as_record(&both).unwrap();

        assert!(resolve(record, "shared").is_none());
        assert_eq!(resolve(record, "left_only").unwrap().path.indices(), &[0, 1]);
    }

    #[test]
    fn empty_pointer_hides_fields() {
        let mut wrapped = Wrapped {
            inner: None,
            label: String::new(),
        };
        assert!(resolve(as_record(&wrapped).unwrap(), "id").is_none());

        wrapped.inner = Some(Box::new(Model::default()));
        let found = resolve(as_record(&wrapped).unwrap(), "id").unwrap();
        assert_eq!(found.path.indices(), &[0, 0]);
    }
}
