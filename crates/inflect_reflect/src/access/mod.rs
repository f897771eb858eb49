//! Name-based access to the fields of a record.
//!
//! A record is a value of [`ReflectKind::Struct`], usually from
//! [`#[derive(Reflect)]`](crate::derive::Reflect), or a non-empty
//! [`Pointer`] (`Box`, `Some`) to one.
//!
//! # Promoted fields
//!
//! Fields marked `#[reflect(embed)]` promote their own fields: a name is
//! searched among the record's fields, then among the fields of its
//! embedded records, one depth at a time. The shallowest match wins;
//! two matches at the same depth make the name ambiguous, and it is
//! reported as not found. Embedded records behind an empty pointer are skipped.
//!
//! # Writability
//!
//! Only `pub` fields without `#[reflect(readonly)]` accept [`set`] and [`cas`].
//! Other fields can still be read and their tags queried.
//!
//! # Examples
//!
//! ```
//! use inflect_reflect::{access, derive::Reflect};
//!
//! #[derive(Reflect)]
//! struct Model {
//!     pub id: u64,
//! }
//!
//! #[derive(Reflect)]
//! struct Post {
//!     #[reflect(embed)]
//!     pub model: Model,
//!     pub title: String,
//! }
//!
//! let mut post = Post { model: Model { id: 1 }, title: String::new() };
//!
//! access::set(&mut post, "id", Box::new(2_u64)).unwrap();
//! assert_eq!(access::get_as::<u64>(&post, "id").unwrap(), 2);
//!
//! let err = access::set(&mut post, "id", Box::new(2_i32)).unwrap_err();
//! assert!(matches!(err, access::AccessError::TypeMismatch { .. }));
//! ```
//!
//! [`ReflectKind::Struct`]: crate::info::ReflectKind::Struct
//! [`Pointer`]: crate::ops::Pointer

// -----------------------------------------------------------------------------
// Modules

mod accessor;
mod error;
mod lookup;
mod path;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use path::as_record;

// -----------------------------------------------------------------------------
// Exports

pub use accessor::{Inflect, cas, get, get_as, get_ref, set, tag};
pub use error::AccessError;
pub use path::FieldPath;

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{AccessError, Inflect, cas, get, get_as, get_ref, set, tag};
    use crate::Reflect;
    use crate::fixtures::{Attachment, Blob, Both, Broken, Data, Handle, Left, Model, Wrapped};
    use crate::ops::ReflectCloneError;
    use crate::tags::TagParseError;
    use crate::time::Timestamp;

    #[test]
    fn get_then_set_is_idempotent() {
        let mut data = Data::sample();
        let before = data.clone();

        let value = get(&data, "name").unwrap();
        set(&mut data, "name", value).unwrap();

        assert_eq!(data, before);
    }

    #[test]
    fn set_then_get_returns_written() {
        let mut data = Data::sample();

        data.set_field("name", String::from("renamed")).unwrap();
        assert_eq!(data.get_field_as::<String>("name").unwrap(), "renamed");
        assert_eq!(data.name, "renamed");

        data.set_field("tags", vec![String::from("x")]).unwrap();
        assert_eq!(data.tags, vec![String::from("x")]);
    }

    #[test]
    fn get_returns_a_snapshot() {
        let mut data = Data::sample();
        let snapshot = get(&data, "name").unwrap();

        data.name.push('!');
        assert_eq!(snapshot.downcast_ref::<String>().unwrap(), "sample");
    }

    #[test]
    fn get_ref_borrows_in_place() {
        let data = Data::sample();
        let value = get_ref(&data, "name").unwrap();
        assert!(core::ptr::eq(value.downcast_ref::<String>().unwrap(), &data.name));
    }

    #[test]
    fn cas_success() {
        let mut data = Data::sample();
        cas(&mut data, "name", &String::from("sample"), Box::new(String::from("next"))).unwrap();
        assert_eq!(data.name, "next");
    }

    #[test]
    fn cas_failure_leaves_field() {
        let mut data = Data::sample();
        let err = data
            .cas_field("name", &String::from("other"), String::from("next"))
            .unwrap_err();

        assert_eq!(err, AccessError::NotMatched { field: "name".into() });
        assert!(err.is_retryable());
        assert_eq!(data.name, "sample");
    }

    #[test]
    fn cas_checks_both_types() {
        let mut data = Data::sample();

        let err = cas(&mut data, "name", &1_u8, Box::new(String::new())).unwrap_err();
        assert!(matches!(err, AccessError::TypeMismatch { found: "u8", .. }));

        let err = cas(&mut data, "name", &String::from("sample"), Box::new(1_u8)).unwrap_err();
        assert!(matches!(err, AccessError::TypeMismatch { found: "u8", .. }));
        assert_eq!(data.name, "sample");
    }

    #[test]
    fn cas_without_equality() {
        let mut attachment = Attachment::sample();
        let err = attachment
            .cas_field("blob", &Blob(vec![1]), Blob(vec![2]))
            .unwrap_err();

        assert!(matches!(err, AccessError::NotComparable { .. }));
        assert!(!err.is_retryable());
        assert_eq!(attachment.blob.0, vec![1]);
    }

    #[test]
    fn cas_on_record_field() {
        let mut both = Both::default();

        let err = both
            .cas_field("left", &Left { shared: 1, left_only: 0 }, Left { shared: 2, left_only: 2 })
            .unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(both.left.shared, 0);

        both.cas_field("left", &Left::default(), Left { shared: 2, left_only: 2 })
            .unwrap();
        assert_eq!(both.left.left_only, 2);
    }

    #[test]
    fn cas_with_ignored_member() {
        let mut attachment = Attachment::sample();
        let old = Handle { id: 0, cache: vec![9, 9] };
        let new = Handle { id: 7, cache: Vec::new() };

        let err = attachment.cas_field("handle", &old, new).unwrap_err();
        assert!(matches!(err, AccessError::NotComparable { .. }));
        assert_eq!(attachment.handle.id, 0);
        assert_eq!(attachment.handle.reflect_partial_eq(&attachment.handle), None);
    }

    #[test]
    fn tag_round_trip() {
        let data = Data::sample();

        assert_eq!(tag(&data, "id", "json").unwrap(), "id");
        assert_eq!(tag(&data, "id", "bson").unwrap(), "_id");

        let err = tag(&data, "id", "missing").unwrap_err();
        assert_eq!(
            err,
            AccessError::TagNotFound {
                field: "id".into(),
                key: "missing".into(),
            }
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn tag_on_untagged_field() {
        let data = Data::sample();
        assert!(tag(&data, "tags", "json").unwrap_err().is_not_found());
    }

    #[test]
    fn malformed_tag() {
        let broken = Broken { id: 0 };
        assert_eq!(
            tag(&broken, "id", "json").unwrap_err(),
            AccessError::MalformedTag {
                field: "id".into(),
                source: TagParseError::ExpectedQuote { offset: 5 },
            }
        );
    }

    #[test]
    fn unknown_field_is_not_found() {
        let mut data = Data::sample();
        let not_found = AccessError::NotFound { field: "nope".into() };

        assert_eq!(get(&data, "nope").unwrap_err(), not_found);
        assert_eq!(tag(&data, "nope", "json").unwrap_err(), not_found);
        assert_eq!(set(&mut data, "nope", Box::new(1_u8)).unwrap_err(), not_found);
        assert_eq!(cas(&mut data, "nope", &1_u8, Box::new(2_u8)).unwrap_err(), not_found);
    }

    #[test]
    fn unwritable_field() {
        let mut data = Data::sample();

        let err = data.set_field("secret", String::from("leak")).unwrap_err();
        assert_eq!(err, AccessError::NoSet { field: "secret".into() });
        assert_eq!(data.secret(), "hidden");
        assert_eq!(data.get_field_as::<String>("secret").unwrap(), "hidden");

        let err = data.cas_field("version", &1_u32, 2_u32).unwrap_err();
        assert_eq!(err, AccessError::NoSet { field: "version".into() });
        assert_eq!(data.version, 1);
    }

    #[test]
    fn set_is_exact() {
        let mut data = Data::sample();
        let err = data.set_field("version", 2_u64).unwrap_err();
        assert!(matches!(err, AccessError::NoSet { .. }));

        let err = data.set_field("id", 2_u32).unwrap_err();
        assert_eq!(
            err,
            AccessError::TypeMismatch {
                field: "id".into(),
                expected: "u64",
                found: "u32",
            }
        );
    }

    #[test]
    fn promoted_and_shadowed() {
        let mut data = Data::sample();

        data.set_field("id", 9_u64).unwrap();
        assert_eq!(data.meta_model.model.id, 9);

        let later = Timestamp::from_unix(100);
        data.set_field("created_at", later).unwrap();
        assert_eq!(data.created_at, later);
        assert_eq!(data.meta_model.model.created_at, Timestamp::from_unix(1));

        data.set_field("updated_at", later).unwrap();
        assert_eq!(data.meta_model.model.updated_at, later);
    }

    #[test]
    fn ambiguous_is_not_found() {
        let both = Both::default();
        assert!(get(&both, "shared").unwrap_err().is_not_found());
        assert!(get(&both, "left_only").is_ok());
    }

    #[test]
    fn through_pointers() {
        let mut boxed: Box<Data> = Box::new(Data::sample());
        boxed.set_field("name", String::from("boxed")).unwrap();
        assert_eq!(boxed.name, "boxed");

        let mut some: Option<Model> = Some(Model::default());
        some.set_field("id", 3_u64).unwrap();
        assert_eq!(some.as_ref().map(|m| m.id), Some(3));

        let mut none: Option<Model> = None;
        let err = none.set_field("id", 3_u64).unwrap_err();
        assert!(matches!(err, AccessError::NonPointer { .. }));
        let err = none.get_field("id").unwrap_err();
        assert!(matches!(err, AccessError::InvalidType { .. }));
    }

    #[test]
    fn embedded_pointer() {
        let mut wrapped = Wrapped {
            inner: Some(Box::new(Model::default())),
            label: String::new(),
        };
        wrapped.set_field("id", 5_u64).unwrap();
        assert_eq!(wrapped.inner.as_ref().map(|m| m.id), Some(5));

        wrapped.inner = None;
        assert!(wrapped.get_field("id").unwrap_err().is_not_found());
    }

    #[test]
    fn not_a_record() {
        let mut value = 1_u32;
        assert_eq!(
            get(&value, "x").unwrap_err(),
            AccessError::InvalidType { type_path: "u32" }
        );
        assert_eq!(
            set(&mut value, "x", Box::new(1_u32)).unwrap_err(),
            AccessError::NonPointer { type_path: "u32" }
        );
    }

    #[test]
    fn uncloneable_field() {
        let attachment = Attachment::sample();
        let err = get(&attachment, "handle").unwrap_err();
        assert!(matches!(
            err,
            AccessError::NotCloneable {
                source: ReflectCloneError::FieldNotCloneable { .. },
                ..
            }
        ));
        assert!(get_ref(&attachment, "handle").is_ok());
        assert!(get_as::<Handle>(&attachment, "name").unwrap_err().to_string().contains("name"));
    }

    #[test]
    fn dynamic_record() {
        let mut boxed: Box<dyn Reflect> = Box::new(Data::sample());
        boxed.set_field("name", String::from("dyn")).unwrap();
        assert_eq!(boxed.get_field_as::<String>("name").unwrap(), "dyn");
    }
}
