#![doc = include_str!("../README.md")]
#![no_std]

pub mod hash;

mod typeid_map;
pub use typeid_map::TypeIdMap;
