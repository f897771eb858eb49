//! Parsing of field tag strings.
//!
//! A tag is a string of `key:"value"` groups separated by spaces, such as
//! `json:"id" bson:"_id"`. It is attached to a field with
//! `#[reflect(tag = "...")]` and read back through [`NamedField::tags`].
//!
//! [`NamedField::tags`]: crate::info::NamedField::tags

// -----------------------------------------------------------------------------
// Modules

mod parser;

// -----------------------------------------------------------------------------
// Exports

pub use parser::TagParseError;

use alloc::vec::Vec;

use inflect_utils::hash::HashMap;
use inflect_utils::hash::hashbrown::hash_map::Entry;

use parser::Scanner;

// -----------------------------------------------------------------------------
// Tags

/// The parsed form of a tag string.
///
/// Keeps keys in scan order. When a key appears more than once,
/// the first occurrence wins.
///
/// # Examples
///
/// ```
/// use inflect_reflect::tags::Tags;
///
/// let tags = Tags::parse(r#"json:"id" bson:"_id" json:"other" flag"#).unwrap();
///
/// assert_eq!(tags.get("json"), Some("id"));
/// assert_eq!(tags.get("bson"), Some("_id"));
/// assert_eq!(tags.get("flag"), None);
/// assert_eq!(tags.lookup("flag"), Some(""));
/// assert_eq!(tags.len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tags<'a> {
    entries: Vec<(&'a str, &'a str)>,
    index: HashMap<&'a str, usize>,
}

impl<'a> Tags<'a> {
    /// Parse a raw tag string.
    ///
    /// Fails on the first grammar violation, see [`TagParseError`].
    pub fn parse(raw: &'a str) -> Result<Self, TagParseError> {
        let mut tags = Self::default();
        for entry in Scanner::new(raw) {
            let (key, value) = entry?;
            tags.insert(key, value);
        }
        Ok(tags)
    }

    fn insert(&mut self, key: &'a str, value: &'a str) {
        if let Entry::Vacant(slot) = self.index.entry(key) {
            slot.insert(self.entries.len());
            self.entries.push((key, value));
        }
    }

    /// Returns the value of `key`, `None` if it is absent or empty.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.lookup(key).filter(|value| !value.is_empty())
    }

    /// Returns the value of `key`, `Some("")` for a key without value.
    pub fn lookup(&self, key: &str) -> Option<&'a str> {
        let index = *self.index.get(key)?;
        self.entries.get(index).map(|&(_, value)| value)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Iterate `(key, value)` pairs in scan order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&'a str, &'a str)> + '_ {
        self.entries.iter().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{TagParseError, Tags};

    #[test]
    fn lookup_each_key() {
        let tags = Tags::parse(r#"id:"x" bson:"_id""#).unwrap();
        assert_eq!(tags.get("id"), Some("x"));
        assert_eq!(tags.get("bson"), Some("_id"));
        assert_eq!(tags.get("missing"), None);
        assert!(!tags.contains_key("missing"));
    }

    #[test]
    fn first_duplicate_wins() {
        let tags = Tags::parse(r#"k:"a" k:"b""#).unwrap();
        assert_eq!(tags.get("k"), Some("a"));
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn empty_value_is_not_found() {
        let tags = Tags::parse(r#"json:"" db"#).unwrap();
        assert_eq!(tags.get("json"), None);
        assert_eq!(tags.lookup("json"), Some(""));
        assert_eq!(tags.get("db"), None);
        assert!(tags.contains_key("db"));
    }

    #[test]
    fn scan_order_is_kept() {
        let tags = Tags::parse(r#"z:"1" a:"2" m:"3""#).unwrap();
        let keys: Vec<_> = tags.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert_eq!(
            Tags::parse("json:id"),
            Err(TagParseError::ExpectedQuote { offset: 5 })
        );
        assert!(Tags::parse("").unwrap().is_empty());
    }
}
