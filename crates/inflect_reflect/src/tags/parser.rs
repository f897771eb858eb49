use thiserror::Error;

/// A tag string that violates the `key:"value"` grammar.
///
/// Offsets are byte offsets into the raw tag string.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TagParseError {
    /// A colon is not immediately followed by `"`.
    #[error("expected `\"` at byte {offset}")]
    ExpectedQuote { offset: usize },
    /// A value has no closing `"`.
    #[error("unterminated value, opening quote at byte {offset}")]
    UnterminatedValue { offset: usize },
    /// A colon with nothing before it.
    #[error("empty key before `:` at byte {offset}")]
    EmptyKey { offset: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    SkippingWhitespace,
    InsideKey { start: usize },
}

/// Single pass scanner over a raw tag string.
///
/// Yields `(key, value)` pairs in order. A bare key yields an empty value.
/// Stops for good after the first error.
pub(crate) struct Scanner<'a> {
    raw: &'a str,
    pos: usize,
    state: State,
    failed: bool,
}

impl<'a> Scanner<'a> {
    #[inline]
    pub(crate) const fn new(raw: &'a str) -> Self {
        Self {
            raw,
            pos: 0,
            state: State::SkippingWhitespace,
            failed: false,
        }
    }

    #[inline]
    fn fail(&mut self, err: TagParseError) -> TagParseError {
        self.failed = true;
        err
    }

    // `self.pos` is at the colon ending `key`.
    fn quoted_value(&mut self, key: &'a str) -> Result<(&'a str, &'a str), TagParseError> {
        let raw = self.raw;
        let colon = self.pos;
        if key.is_empty() {
            return Err(self.fail(TagParseError::EmptyKey { offset: colon }));
        }

        let quote = colon + 1;
        if raw.as_bytes().get(quote) != Some(&b'"') {
            return Err(self.fail(TagParseError::ExpectedQuote { offset: quote }));
        }

        let start = quote + 1;
        let Some(len) = raw[start..].find('"') else {
            return Err(self.fail(TagParseError::UnterminatedValue { offset: quote }));
        };

        self.pos = start + len + 1;
        Ok((key, &raw[start..start + len]))
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<(&'a str, &'a str), TagParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let raw = self.raw;
        let bytes = raw.as_bytes();
        loop {
            match self.state {
                State::SkippingWhitespace => {
                    let byte = *bytes.get(self.pos)?;
                    if byte.is_ascii_whitespace() {
                        self.pos += 1;
                    } else {
                        self.state = State::InsideKey { start: self.pos };
                    }
                }
                State::InsideKey { start } => match bytes.get(self.pos) {
                    None => {
                        self.state = State::SkippingWhitespace;
                        return Some(Ok((&raw[start..], "")));
                    }
                    Some(byte) if byte.is_ascii_whitespace() => {
                        self.state = State::SkippingWhitespace;
                        return Some(Ok((&raw[start..self.pos], "")));
                    }
                    Some(b':') => {
                        self.state = State::SkippingWhitespace;
                        return Some(self.quoted_value(&raw[start..self.pos]));
                    }
                    Some(_) => self.pos += 1,
                },
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{Scanner, TagParseError};

    fn scan(raw: &str) -> Result<Vec<(&str, &str)>, TagParseError> {
        Scanner::new(raw).collect()
    }

    #[test]
    fn groups_in_order() {
        assert_eq!(
            scan(r#"json:"id" bson:"_id""#).unwrap(),
            vec![("json", "id"), ("bson", "_id")]
        );
        assert_eq!(
            scan(r#"  a:"1"	b:"x y"  "#).unwrap(),
            vec![("a", "1"), ("b", "x y")]
        );
    }

    #[test]
    fn bare_keys_and_adjacent_groups() {
        assert_eq!(scan("flag other").unwrap(), vec![("flag", ""), ("other", "")]);
        assert_eq!(scan(r#"a:"1"b:"2""#).unwrap(), vec![("a", "1"), ("b", "2")]);
        assert_eq!(scan(r#"a:"""#).unwrap(), vec![("a", "")]);
        assert!(scan("").unwrap().is_empty());
    }

    #[test]
    fn colon_must_open_a_quote() {
        assert_eq!(scan("a:b"), Err(TagParseError::ExpectedQuote { offset: 2 }));
        assert_eq!(scan("a:"), Err(TagParseError::ExpectedQuote { offset: 2 }));
        assert_eq!(
            scan(r#"a:"1" b: "2""#),
            Err(TagParseError::ExpectedQuote { offset: 8 })
        );
    }

    #[test]
    fn unterminated_and_empty_key() {
        assert_eq!(
            scan(r#"a:"open"#),
            Err(TagParseError::UnterminatedValue { offset: 2 })
        );
        assert_eq!(scan(r#":"x""#), Err(TagParseError::EmptyKey { offset: 0 }));
    }

    #[test]
    fn stops_after_error() {
        let mut scanner = Scanner::new(r#"a:b c:"d""#);
        assert!(matches!(scanner.next(), Some(Err(_))));
        assert!(scanner.next().is_none());
    }
}
