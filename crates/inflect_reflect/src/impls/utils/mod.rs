mod common;
pub use common::*;

mod simple_type;
pub(crate) use simple_type::impl_simple_type_reflect;

mod hash_map;
pub(crate) use hash_map::impl_reflect_for_hashmap;
