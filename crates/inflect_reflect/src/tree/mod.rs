//! A navigable, mutable view of a record's fields.
//!
//! See [`build_field_tree`].

// -----------------------------------------------------------------------------
// Modules

mod build;
mod node;

// -----------------------------------------------------------------------------
// Exports

pub use build::build_field_tree;
pub use node::{FieldMap, FieldNode, FieldTree};

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::build_field_tree;
    use crate::access::AccessError;
    use crate::fixtures::{Broken, Data, Model, Wrapped};
    use crate::tags::TagParseError;
    use crate::time::Timestamp;
    use crate::{Inflect, Reflect};

    #[test]
    fn top_level_layout() {
        let mut data = Data::sample();
        let tree = build_field_tree(&mut data).unwrap();

        let mut names: Vec<_> = tree.fields().keys().copied().collect();
        names.sort_unstable();
        assert_eq!(
            names,
            ["created_at", "meta_model", "name", "parent", "secret", "tags", "version"]
        );

        assert!(tree.node(&["name"]).unwrap().is_leaf());
        assert!(tree.node(&["tags"]).unwrap().is_leaf());
        assert_eq!(tree.node(&["name"]).unwrap().slot().indices(), &[2]);
    }

    #[test]
    fn node_outlives_the_lookup_path() {
        let mut data = Data::sample();
        let tree = build_field_tree(&mut data).unwrap();

        let node = {
            let names = [String::from("meta_model"), String::from("model"), String::from("id")];
            let path: Vec<&str> = names.iter().map(String::as_str).collect();
            tree.node(&path).unwrap()
        };
        assert_eq!(node.slot().indices(), &[0, 0, 0]);
        assert_eq!(node.tags().get("bson"), Some("_id"));
    }

    #[test]
    fn nested_record_expands_to_its_fields() {
        let mut data = Data::sample();
        let tree = build_field_tree(&mut data).unwrap();

        let model = tree.node(&["meta_model", "model"]).unwrap();
        let children = model.children().unwrap();
        assert_eq!(children.len(), 3);
        assert!(children["id"].is_leaf());
        assert_eq!(children["id"].tags().get("bson"), Some("_id"));
        assert_eq!(children["id"].slot().indices(), &[0, 0, 0]);
    }

    #[test]
    fn timestamp_is_not_expanded() {
        let mut data = Data::sample();
        let tree = build_field_tree(&mut data).unwrap();

        for path in [
            &["created_at"][..],
            &["meta_model", "model", "created_at"],
            &["meta_model", "model", "updated_at"],
        ] {
            let node = tree.node(path).unwrap();
            assert_eq!(node.children().map(|c| c.len()), Some(0));
            assert!(!node.is_leaf());
        }
    }

    #[test]
    fn pointers_expand_their_pointee() {
        let mut data = Data::sample();
        data.parent = Some(Box::new(Model::default()));
        let tree = build_field_tree(&mut data).unwrap();
        let parent = tree.node(&["parent"]).unwrap();
        assert_eq!(parent.children().unwrap().len(), 3);
        assert!(tree.get(&["parent", "id"]).unwrap().is::<u64>());

        data.parent = None;
        let tree = build_field_tree(&mut data).unwrap();
        assert!(tree.node(&["parent"]).unwrap().is_leaf());
        assert!(tree.node(&["parent", "id"]).is_none());
    }

    #[test]
    fn live_mutation_is_visible() {
        let mut data = Data::sample();
        {
            let mut tree = data.field_tree().unwrap();
            *tree
                .get_mut(&["name"])
                .unwrap()
                .downcast_mut::<String>()
                .unwrap() = String::from("tree");
            tree.set(&["meta_model", "model", "id"], Box::new(42_u64)).unwrap();

            let slot = tree.node(&["version"]).unwrap().slot().clone();
            assert_eq!(tree.slot(&slot).unwrap().downcast_ref::<u32>(), Some(&1));
        }
        assert_eq!(data.name, "tree");
        assert_eq!(data.meta_model.model.id, 42);
    }

    #[test]
    fn writability() {
        let mut data = Data::sample();
        let mut tree = build_field_tree(&mut data).unwrap();

        assert!(!tree.node(&["secret"]).unwrap().is_writable());
        assert!(!tree.node(&["version"]).unwrap().is_writable());
        assert!(tree.node(&["meta_model", "model", "id"]).unwrap().is_writable());

        assert_eq!(
            tree.get_mut(&["secret"]).unwrap_err(),
            AccessError::NoSet { field: "secret".into() }
        );
        assert!(matches!(
            tree.set(&["version"], Box::new(2_u32)),
            Err(AccessError::NoSet { .. })
        ));
        assert!(matches!(
            tree.set(&["name"], Box::new(2_u32)),
            Err(AccessError::TypeMismatch { found: "u32", .. })
        ));
        assert_eq!(
            tree.get(&["nope", "x"]).unwrap_err(),
            AccessError::NotFound { field: "nope.x".into() }
        );
        assert_eq!(tree.into_fields().len(), 7);
        assert_eq!(data.version, 1);
    }

    #[test]
    fn embedded_pointer_child() {
        let mut wrapped = Wrapped {
            inner: Some(Box::new(Model::default())),
            label: String::new(),
        };
        let mut tree = build_field_tree(&mut wrapped).unwrap();
        tree.set(&["inner", "created_at"], Box::new(Timestamp::from_unix(5)))
            .unwrap();
        assert_eq!(
            tree.record().get_field_as::<Timestamp>("created_at").unwrap(),
            Timestamp::from_unix(5)
        );
    }

    #[test]
    fn rejects_non_records() {
        let mut value = 3_u8;
        assert!(matches!(
            build_field_tree(&mut value),
            Err(AccessError::NonPointer { type_path: "u8" })
        ));

        let mut empty: Option<Model> = None;
        assert!(build_field_tree(&mut empty).is_err());

        let mut boxed: Box<dyn Reflect> = Box::new(Model::default());
        assert_eq!(build_field_tree(&mut *boxed).unwrap().fields().len(), 3);
    }

    #[test]
    fn malformed_tag_aborts() {
        let mut broken = Broken { id: 0 };
        assert_eq!(
            build_field_tree(&mut broken).unwrap_err(),
            AccessError::MalformedTag {
                field: "id".into(),
                source: TagParseError::ExpectedQuote { offset: 5 },
            }
        );
    }
}
