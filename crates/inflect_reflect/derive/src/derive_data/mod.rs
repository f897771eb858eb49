//! Parsing of macro inputs.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod define_parser;
mod reflect_derive;
mod reflect_meta;
mod reflect_struct;
mod reflect_type_parser;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, TypeAttributes};

pub(crate) use define_parser::{ReflectOpaqueParser, ReflectTypePathParser};
pub(crate) use reflect_type_parser::{TypeParser, validate_generics};

pub(crate) use reflect_derive::ReflectDerive;
pub(crate) use reflect_meta::ReflectMeta;
pub(crate) use reflect_struct::{FieldAccessors, ReflectStruct, StructField};
