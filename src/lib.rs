#![doc = include_str!("../README.md")]
#![no_std]

pub use inflect_reflect as reflect;
pub use inflect_utils as utils;
