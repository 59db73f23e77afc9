//! Byte positions and spans into the source text of a compilation unit.

use std::fmt;
use std::ops::Range;

/// The raw, untyped index. We use a 32-bit integer here for space efficiency,
/// assuming we won't be working with sources larger than 4GB.
pub type RawIndex = u32;

/// A byte position in a source file.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ByteIndex(pub RawIndex);

impl ByteIndex {
    /// Convert the position into a `usize`, for use in array indexing
    pub const fn to_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<RawIndex> for ByteIndex {
    fn from(raw: RawIndex) -> ByteIndex {
        ByteIndex(raw)
    }
}

impl fmt::Debug for ByteIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ByteIndex({})", self.0)
    }
}

impl fmt::Display for ByteIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A half-open range of bytes `[start, end)`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    start: ByteIndex,
    end: ByteIndex,
}

impl Span {
    /// Create a new span from a starting and ending index.
    ///
    /// Panics if `end < start`.
    pub fn new(start: impl Into<ByteIndex>, end: impl Into<ByteIndex>) -> Span {
        let start = start.into();
        let end = end.into();

        assert!(end >= start);

        Span { start, end }
    }

    /// Gives an empty span at the start of a source.
    pub const fn initial() -> Span {
        Span { start: ByteIndex(0), end: ByteIndex(0) }
    }

    /// Combine two spans by taking the start of the earlier span
    /// and the end of the later span.
    ///
    /// ```rust
    /// use shade_lang_miette_util::codespan::Span;
    ///
    /// assert_eq!(Span::new(0, 4).merge(Span::new(10, 16)), Span::new(0, 16));
    /// ```
    pub fn merge(self, other: Span) -> Span {
        Span { start: self.start.min(other.start), end: self.end.max(other.end) }
    }

    pub fn start(self) -> ByteIndex {
        self.start
    }

    pub fn end(self) -> ByteIndex {
        self.end
    }

    pub fn len(self) -> usize {
        self.end.to_usize() - self.start.to_usize()
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }
}

impl From<Range<RawIndex>> for Span {
    fn from(range: Range<RawIndex>) -> Span {
        Span::new(range.start, range.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod test {
    use super::Span;

    #[test]
    fn test_merge() {
        let a = Span::from(1..5);
        let b = Span::from(3..10);
        assert_eq!(a.merge(b), Span::from(1..10));
        assert_eq!(b.merge(a), Span::from(1..10));

        // disjoint
        let ten_twenty = Span::from(10..20);
        assert_eq!(a.merge(ten_twenty), Span::from(1..20));

        // identity
        assert_eq!(a.merge(a), a);
    }

    #[test]
    fn test_len() {
        assert_eq!(Span::from(3..10).len(), 7);
        assert!(Span::initial().is_empty());
        assert_eq!(Span::from(3..10).to_string(), "[3, 10)");
    }

    #[test]
    #[should_panic]
    fn test_reversed_span() {
        let _ = Span::new(10, 3);
    }
}
