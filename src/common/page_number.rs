//! Page number type.

use std::fmt;
use std::num::NonZeroUsize;

use super::positive::impl_positive_conversions;

/// A 1-based page number.
///
/// Always positive. It is *not* bounded by the last page of any sequence:
/// page numbers past the end are legal and address an empty page.
///
/// # Example
/// ```
/// use paged::PageNumber;
///
/// let page = PageNumber::try_from(3).unwrap();
/// assert_eq!(page.get(), 3);
/// assert!(PageNumber::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PageNumber(NonZeroUsize);

impl PageNumber {
    /// The first page.
    pub const FIRST: PageNumber = PageNumber(NonZeroUsize::MIN);

    /// Create a page number, returning `None` for zero.
    #[inline]
    pub fn new(n: usize) -> Option<Self> {
        NonZeroUsize::new(n).map(PageNumber)
    }

    /// The page number as a plain integer.
    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Whether this is page 1.
    #[inline]
    pub fn is_first(self) -> bool {
        self == Self::FIRST
    }

    /// The page before this one, or `None` on page 1.
    #[inline]
    pub fn prev(self) -> Option<Self> {
        Self::new(self.get() - 1)
    }

    /// The page after this one, saturating at `usize::MAX`.
    #[inline]
    pub fn saturating_next(self) -> Self {
        PageNumber(self.0.saturating_add(1))
    }

    /// Zero-based index of this page's first item for the given length.
    ///
    /// `None` when the index does not fit in `usize`.
    #[inline]
    pub(crate) fn start_index(self, page_length: usize) -> Option<usize> {
        (self.get() - 1).checked_mul(page_length)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl_positive_conversions!(PageNumber, InvalidPageNumber, [i8, i16, i32, i64, isize, u8, u16, u32, u64, usize]);

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}
