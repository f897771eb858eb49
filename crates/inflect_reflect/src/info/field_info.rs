use core::any::{Any, TypeId};

use crate::info::{TypeInfo, Typed};
use crate::tags::{TagParseError, Tags};

// -----------------------------------------------------------------------------
// NamedField

/// A field of a record.
///
/// Besides name and type, a field carries:
///
/// - an optional raw tag string, see [`Tags`];
/// - whether it is an embedded record, whose fields are promoted into the
///   enclosing record for name lookup;
/// - whether it accepts writes through [`set`](crate::access::set).
///
/// # Examples
///
/// ```
/// use inflect_reflect::info::NamedField;
///
/// let field = NamedField::new::<u64>("id")
///     .with_tag(r#"json:"id""#)
///     .with_writable(false);
///
/// assert_eq!(field.name(), "id");
/// assert_eq!(field.tags().unwrap().get("json"), Some("id"));
/// assert!(!field.is_writable());
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    ty_id: TypeId,
    name: &'static str,
    // `TypeInfo` is created on first access; using a function pointer delays it.
    type_info: fn() -> &'static TypeInfo,
    tag: Option<&'static str>,
    embedded: bool,
    writable: bool,
}

impl NamedField {
    /// Creates a writable, non-embedded field without tag.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            type_info: T::type_info,
            ty_id: TypeId::of::<T>(),
            tag: None,
            embedded: false,
            writable: true,
        }
    }

    /// Attach a raw tag string.
    #[inline]
    pub const fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    #[inline]
    pub const fn with_embedded(mut self, embedded: bool) -> Self {
        self.embedded = embedded;
        self
    }

    #[inline]
    pub const fn with_writable(mut self, writable: bool) -> Self {
        self.writable = writable;
        self
    }

    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    /// The tag string as declared, `None` if the field has no tag.
    #[inline]
    pub const fn raw_tag(&self) -> Option<&'static str> {
        self.tag
    }

    /// Parse the tag string.
    ///
    /// A field without tag yields empty [`Tags`].
    pub fn tags(&self) -> Result<Tags<'static>, TagParseError> {
        match self.tag {
            Some(raw) => Tags::parse(raw),
            None => Ok(Tags::default()),
        }
    }

    #[inline]
    pub const fn is_embedded(&self) -> bool {
        self.embedded
    }

    #[inline]
    pub const fn is_writable(&self) -> bool {
        self.writable
    }
}
