//! Items used by the code generated by the derive macros.
//!
//! Not public API.

#[doc(hidden)]
pub mod alloc_utils {
    pub use ::alloc::borrow::Cow;
    pub use ::alloc::boxed::Box;
    pub use ::alloc::string::String;
}
