//! Page length type.

use std::fmt;
use std::num::NonZeroUsize;

use super::config::DEFAULT_PAGE_LENGTH;
use super::positive::impl_positive_conversions;

/// Number of items on each page.
///
/// Always positive, so page arithmetic never divides by zero.
///
/// # Example
/// ```
/// use paged::PageLength;
///
/// assert_eq!(PageLength::default().get(), 10);
/// assert_eq!(PageLength::try_from(7).unwrap().get(), 7);
/// assert!(PageLength::try_from(2.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PageLength(NonZeroUsize);

impl PageLength {
    /// Page length used when none is given.
    pub const DEFAULT: PageLength = PageLength(DEFAULT_PAGE_LENGTH);

    /// Create a page length, returning `None` for zero.
    #[inline]
    pub fn new(n: usize) -> Option<Self> {
        NonZeroUsize::new(n).map(PageLength)
    }

    /// The length as a plain integer.
    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Number of pages needed to hold `len` items (ceiling division).
    ///
    /// Zero items need zero pages.
    #[inline]
    pub fn pages_for(self, len: usize) -> usize {
        len.div_ceil(self.get())
    }
}

impl Default for PageLength {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl_positive_conversions!(PageLength, InvalidPageLength, [i8, i16, i32, i64, isize, u8, u16, u32, u64, usize]);

impl fmt::Display for PageLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} per page", self.0)
    }
}
