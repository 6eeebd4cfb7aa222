//! Provides the `IndexStr` type, a read cursor over a mangled name that keeps
//! track of how far into the original input it is.

use super::error::{Error, Result};

use std::fmt;
use std::ops::{RangeFrom, RangeTo};
use std::str;

/// The unparsed rest of a mangled name, along with its offset into the full name.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct IndexStr<'a> {
    idx: usize,
    string: &'a [u8],
}

impl<'a> IndexStr<'a> {
    /// Construct a new `IndexStr` (with `index == 0`) from the given input.
    #[inline]
    pub fn new(string: &'a [u8]) -> IndexStr<'a> {
        IndexStr { idx: 0, string }
    }

    /// Return the length of the string.
    #[inline]
    pub fn len(&self) -> usize {
        self.string.len()
    }

    /// Return true if the string is empty, false otherwise.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.string.is_empty()
    }

    /// Get the index into the original input that this `IndexStr` is at.
    #[inline]
    pub fn index(&self) -> usize {
        self.idx
    }

    /// Peek at the next byte in this `IndexStr`.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.string.first().copied()
    }

    /// Peek `n` bytes ahead, yielding `0` past the end of the input.
    #[inline]
    pub fn peek_at(&self, n: usize) -> u8 {
        self.string.get(n).copied().unwrap_or(0)
    }

    #[inline]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.string.starts_with(prefix)
    }

    /// Move the cursor forward by `n` bytes, stopping at the end of the input.
    #[inline]
    pub fn advance(&self, n: usize) -> IndexStr<'a> {
        self.range_from(n.min(self.len())..)
    }

    /// The remaining input, borrowed for as long as the original input.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.string
    }

    /// The remaining input as text.
    pub fn as_str(&self) -> Result<&'a str> {
        str::from_utf8(self.string).map_err(|_| Error::UnexpectedText)
    }

    /// `[0, idx)` and `[idx, len)`. Panics if `idx` is past the end.
    #[inline]
    pub fn split_at(&self, idx: usize) -> (IndexStr<'a>, IndexStr<'a>) {
        (self.range_to(..idx), self.range_from(idx..))
    }

    /// [`split_at`](Self::split_at) that returns `None` when `idx` is past the end.
    #[inline]
    pub fn try_split_at(&self, idx: usize) -> Option<(IndexStr<'a>, IndexStr<'a>)> {
        if idx > self.len() {
            None
        } else {
            Some(self.split_at(idx))
        }
    }

    /// Read a decimal length `n` followed by exactly `n` bytes of identifier.
    pub fn read_length_prefixed(&self) -> Result<(&'a str, IndexStr<'a>)> {
        let digits = self.string.iter().take_while(|c| c.is_ascii_digit()).count();
        if digits == 0 {
            return Err(if self.is_empty() {
                Error::UnexpectedEnd
            } else {
                Error::UnexpectedText
            });
        }

        let mut len = 0usize;
        for &digit in &self.string[..digits] {
            len = len
                .checked_mul(10)
                .and_then(|len| len.checked_add(usize::from(digit - b'0')))
                .ok_or(Error::Overflow)?;
        }

        let (ident, tail) = self
            .range_from(digits..)
            .try_split_at(len)
            .ok_or(Error::UnexpectedEnd)?;
        Ok((ident.as_str()?, tail))
    }
}

// Plain methods instead of `Index` impls, which would have to return references.
impl<'a> IndexStr<'a> {
    /// Panics if `start` is past the end.
    #[inline]
    fn range_from(&self, range: RangeFrom<usize>) -> IndexStr<'a> {
        IndexStr {
            idx: self.idx + range.start,
            string: &self.string[range],
        }
    }

    /// Panics if `end` is past the end.
    #[inline]
    fn range_to(&self, range: RangeTo<usize>) -> IndexStr<'a> {
        IndexStr {
            idx: self.idx,
            string: &self.string[range],
        }
    }
}

impl<'a> From<&'a [u8]> for IndexStr<'a> {
    fn from(s: &[u8]) -> IndexStr {
        IndexStr::new(s)
    }
}

impl<'a> From<&'a str> for IndexStr<'a> {
    fn from(s: &str) -> IndexStr {
        IndexStr::new(s.as_bytes())
    }
}

impl<'a, 'b> PartialEq<&'a [u8]> for IndexStr<'b> {
    fn eq(&self, rhs: &&[u8]) -> bool {
        self.string == *rhs
    }
}

impl<'a> fmt::Debug for IndexStr<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "IndexStr {{ idx: {}, string: \"{}\" }}",
            self.idx,
            String::from_utf8_lossy(self.string)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_past_end() {
        let input = IndexStr::from("ab");
        assert_eq!(input.peek(), Some(b'a'));
        assert_eq!(input.peek_at(1), b'b');
        assert_eq!(input.peek_at(2), 0);
        assert_eq!(input.advance(2).peek(), None);
    }

    #[test]
    fn advance_tracks_index() {
        let input = IndexStr::from("3foo");
        let tail = input.advance(1);
        assert_eq!(tail.index(), 1);
        assert_eq!(tail, &b"foo"[..]);
        assert_eq!(tail.advance(10).index(), 4);
        assert!(tail.advance(10).is_empty());
    }

    #[test]
    fn length_prefixed() {
        let (ident, tail) = IndexStr::from("3fooE").read_length_prefixed().unwrap();
        assert_eq!(ident, "foo");
        assert_eq!(tail, &b"E"[..]);
        assert_eq!(tail.index(), 4);

        let (ident, tail) = IndexStr::from("10abcdefghij").read_length_prefixed().unwrap();
        assert_eq!(ident, "abcdefghij");
        assert!(tail.is_empty());

        let (ident, _) = IndexStr::from("0E").read_length_prefixed().unwrap();
        assert_eq!(ident, "");
    }

    #[test]
    fn length_prefixed_errors() {
        assert_eq!(IndexStr::from("").read_length_prefixed(), Err(Error::UnexpectedEnd));
        assert_eq!(IndexStr::from("foo").read_length_prefixed(), Err(Error::UnexpectedText));
        assert_eq!(IndexStr::from("5foo").read_length_prefixed(), Err(Error::UnexpectedEnd));
        assert_eq!(
            IndexStr::from("99999999999999999999999a").read_length_prefixed(),
            Err(Error::Overflow)
        );
    }
}
