//! Records shared by the unit tests.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use std::collections::HashMap;

use crate::derive::Reflect;
use crate::time::Timestamp;

#[derive(Reflect, Clone, PartialEq, Debug, Default)]
#[reflect(clone, partial_eq, debug)]
pub struct Model {
    #[reflect(tag = r#"json:"id" bson:"_id""#)]
    pub id: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Reflect, Clone, PartialEq, Debug, Default)]
#[reflect(clone, partial_eq, debug)]
pub struct MetaModel {
    #[reflect(embed)]
    pub model: Model,
    #[reflect(tag = r#"json:"meta,omitempty""#)]
    pub meta: HashMap<String, String>,
}

#[derive(Reflect, Clone, PartialEq, Debug)]
#[reflect(clone, partial_eq, debug)]
pub struct Data {
    #[reflect(embed)]
    pub meta_model: MetaModel,
    #[reflect(tag = r#"json:"created_at""#)]
    pub created_at: Timestamp,
    #[reflect(tag = r#"json:"name" db:"name""#)]
    pub name: String,
    pub tags: Vec<String>,
    pub parent: Option<Box<Model>>,
    #[reflect(readonly)]
    pub version: u32,
    secret: String,
}

impl Data {
    pub fn sample() -> Self {
        Self {
            meta_model: MetaModel {
                model: Model {
                    id: 1,
                    created_at: Timestamp::from_unix(1),
                    updated_at: Timestamp::from_unix(2),
                },
                meta: HashMap::new(),
            },
            created_at: Timestamp::from_unix(3),
            name: String::from("sample"),
            tags: vec![String::from("a"), String::from("b")],
            parent: None,
            version: 1,
            secret: String::from("hidden"),
        }
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

#[derive(Reflect, Default)]
pub struct Left {
    pub shared: u8,
    pub left_only: u8,
}

#[derive(Reflect, Default)]
pub struct Right {
    pub shared: u8,
}

#[derive(Reflect, Default)]
pub struct Both {
    #[reflect(embed)]
    pub left: Left,
    #[reflect(embed)]
    pub right: Right,
}

#[derive(Reflect)]
pub struct Wrapped {
    #[reflect(embed)]
    pub inner: Option<Box<Model>>,
    pub label: String,
}

#[derive(Reflect)]
pub struct Broken {
    #[reflect(tag = "json:id")]
    pub id: u8,
}

/// Opaque, clonable, without equality.
#[derive(Reflect, Clone, Debug)]
#[reflect(opaque, clone, debug)]
pub struct Blob(pub Vec<u8>);

/// Refuses `reflect_clone` and `reflect_partial_eq`: a field is hidden from reflection.
#[derive(Reflect, Debug)]
pub struct Handle {
    pub id: u8,
    #[reflect(ignore)]
    pub cache: Vec<u8>,
}

#[derive(Reflect)]
pub struct Attachment {
    pub name: String,
    pub blob: Blob,
    pub handle: Handle,
}

impl Attachment {
    pub fn sample() -> Self {
        Self {
            name: String::from("file"),
            blob: Blob(vec![1]),
            handle: Handle { id: 0, cache: Vec::new() },
        }
    }
}
