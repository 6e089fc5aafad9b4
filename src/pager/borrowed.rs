//! Pager over a borrowed slice.

use std::iter::FusedIterator;

use log::{debug, trace};

use crate::common::{Error, PageLength, PageNumber, PagerConfig, Result};
use crate::pager::{Cursor, Pages, Position};

/// Pages through a borrowed slice.
///
/// The pager never copies or mutates `items`; every page is a sub-slice with
/// the same lifetime as the borrowed data, so pages stay usable after the
/// pager itself moves on.
///
/// # Architecture
/// ```text
///   items: &'a [T]   ──┐
///                      ├──▶ page(n) = items[(n-1)*L .. n*L] (clipped)
///   cursor: Cursor   ──┘        ▲
///     ├─ page_length L          │
///     └─ current page p ────────┘  current_page_items(), next()
/// ```
///
/// # Usage
/// ```
/// use paged::Pager;
///
/// let letters: Vec<char> = "abcdefghijklmnopqrstuv".chars().collect();
/// let mut pager = Pager::with_page_length(&letters, 7).unwrap();
///
/// assert_eq!(pager.last_page(), 4);
/// assert_eq!(pager.page(1).unwrap(), &letters[..7]);
///
/// // Stateful iteration: first call yields page 1.
/// let mut seen = 0;
/// while let Some(items) = pager.next() {
///     seen += items.len();
/// }
/// assert_eq!(seen, letters.len());
/// ```
#[derive(Debug)]
pub struct Pager<'a, T> {
    /// The data. Borrowed, never copied.
    items: &'a [T],

    /// Page length and current page.
    cursor: Cursor,
}

impl<T> Clone for Pager<'_, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            cursor: self.cursor,
        }
    }
}

impl<'a, T> Pager<'a, T> {
    /// Create a pager with the default page length (10) on page 1.
    pub fn new(items: &'a [T]) -> Self {
        Self::with_config(items, &PagerConfig::default())
    }

    /// Create a pager with an explicit page length.
    ///
    /// # Errors
    /// `Error::InvalidPageLength` unless `page_length` is a positive integer.
    pub fn with_page_length<L>(items: &'a [T], page_length: L) -> Result<Self>
    where
        L: TryInto<PageLength>,
        Error: From<L::Error>,
    {
        let page_length = page_length.try_into()?;
        Ok(Self::from_cursor(items, Cursor::new(page_length)))
    }

    /// Create a pager from a [`PagerConfig`].
    pub fn with_config(items: &'a [T], config: &PagerConfig) -> Self {
        Self::from_cursor(items, Cursor::new(config.page_length))
    }

    fn from_cursor(items: &'a [T], cursor: Cursor) -> Self {
        debug!(
            "pager over {} items, {}",
            items.len(),
            cursor.page_length()
        );
        Self { items, cursor }
    }

    // ========================================================================
    // Page access
    // ========================================================================

    /// The whole underlying sequence.
    #[inline]
    pub fn all(&self) -> &'a [T] {
        self.items
    }

    /// Items on page `n` (1-based).
    ///
    /// Pages past the last page are empty, not an error.
    ///
    /// # Errors
    /// `Error::InvalidPageNumber` unless `n` is a positive integer.
    pub fn page<N>(&self, n: N) -> Result<&'a [T]>
    where
        N: TryInto<PageNumber>,
        Error: From<N::Error>,
    {
        Ok(self.slice(n.try_into()?))
    }

    /// Items on the current page.
    pub fn current_page_items(&self) -> &'a [T] {
        self.slice(self.cursor.current_page())
    }

    /// Iterate over every page from 1 to [`last_page`](Self::last_page)
    /// without moving the cursor.
    pub fn pages(&self) -> Pages<'a, T> {
        Pages::new(self.items, self.cursor.page_length())
    }

    fn slice(&self, page: PageNumber) -> &'a [T] {
        let items: &'a [T] = self.items;
        &items[self.cursor.range(page, items.len())]
    }

    // ========================================================================
    // Cursor
    // ========================================================================

    #[inline]
    pub fn current_page(&self) -> usize {
        self.cursor.current_page().get()
    }

    /// Move the cursor to page `n`.
    ///
    /// Any positive page is accepted, even past the last page; the current
    /// page is then simply empty.
    ///
    /// # Errors
    /// `Error::InvalidPageNumber` unless `n` is a positive integer.
    pub fn set_current_page<N>(&mut self, n: N) -> Result<()>
    where
        N: TryInto<PageNumber>,
        Error: From<N::Error>,
    {
        self.cursor.set_current_page(n.try_into()?);
        Ok(())
    }

    #[inline]
    pub fn page_length(&self) -> usize {
        self.cursor.page_length().get()
    }

    /// Change the page length, keeping the view anchored near the same items.
    ///
    /// See [`Cursor::set_page_length`] for the exact re-anchoring rule.
    ///
    /// # Errors
    /// `Error::InvalidPageLength` unless `page_length` is a positive integer.
    /// The pager is unchanged on error.
    pub fn set_page_length<L>(&mut self, page_length: L) -> Result<()>
    where
        L: TryInto<PageLength>,
        Error: From<L::Error>,
    {
        self.cursor.set_page_length(page_length.try_into()?);
        Ok(())
    }

    /// `ceil(len / page_length)`; zero for an empty sequence.
    #[inline]
    pub fn last_page(&self) -> usize {
        self.cursor.last_page(self.items.len())
    }

    /// The previous page number, or `None` on page 1.
    #[inline]
    pub fn prev_page(&self) -> Option<usize> {
        self.cursor.prev_page().map(PageNumber::get)
    }

    /// The next page number, or `None` when on the last page.
    #[inline]
    pub fn next_page(&self) -> Option<usize> {
        self.cursor.next_page(self.items.len()).map(PageNumber::get)
    }

    /// Rewind the cursor to page 1, restarting [`next`](Iterator::next).
    pub fn reset(&mut self) {
        self.cursor.reset();
    }

    /// Snapshot of the navigation state.
    pub fn position(&self) -> Position {
        self.cursor.position(self.items.len())
    }
}

/// Stateful page iteration driven by the cursor.
///
/// Each call returns the current page and advances the cursor, so the first
/// call after construction or [`Pager::reset`] yields page 1. An empty page
/// ends iteration; the cursor keeps advancing on every call regardless.
impl<'a, T> Iterator for Pager<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<&'a [T]> {
        let page = self.cursor.advance();
        let items = self.slice(page);
        if items.is_empty() {
            trace!("next: {} is empty, iteration exhausted", page);
            None
        } else {
            Some(items)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .last_page()
            .saturating_sub(self.cursor.current_page().get() - 1);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Pager<'_, T> {}

impl<T> FusedIterator for Pager<'_, T> {}

impl<'a, T> From<&'a [T]> for Pager<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Self::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ErrorKind;

    fn letters() -> Vec<char> {
        "abcdefghijklmnopqrstuv".chars().collect()
    }

    #[test]
    fn test_defaults() {
        let items: Vec<u32> = (0..25).collect();
        let pager = Pager::new(&items);
        assert_eq!(pager.page_length(), 10);
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.last_page(), 3);
        assert_eq!(pager.all(), &items[..]);
    }

    #[test]
    fn test_with_page_length_rejects_invalid() {
        let items = [1, 2, 3];
        for err in [
            Pager::with_page_length(&items, 0).unwrap_err(),
            Pager::with_page_length(&items, -2).unwrap_err(),
            Pager::with_page_length(&items, 1.5).unwrap_err(),
        ] {
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            assert!(err.to_string().starts_with("Page length must be a positive integer"));
        }
    }

    #[test]
    fn test_page_slices() {
        let items = letters();
        let pager = Pager::with_page_length(&items, 7).unwrap();

        assert_eq!(pager.page(1).unwrap(), &items[0..7]);
        assert_eq!(pager.page(3).unwrap(), &items[14..21]);
        assert_eq!(pager.page(4).unwrap(), &['v']);
        assert!(pager.page(5).unwrap().is_empty());
        assert!(pager.page(1000).unwrap().is_empty());
    }

    #[test]
    fn test_page_rejects_non_positive() {
        let items = letters();
        let pager = Pager::new(&items);

        let err = pager.page(0).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().starts_with("page number must be positive"));
        assert!(pager.page(-1).is_err());
        assert!(pager.page(2.5).is_err());
    }

    #[test]
    fn test_page_accepts_page_number() {
        let items = letters();
        let pager = Pager::new(&items);
        assert_eq!(pager.page(PageNumber::FIRST).unwrap().len(), 10);
    }

    #[test]
    fn test_current_page_items() {
        let items = letters();
        let mut pager = Pager::with_page_length(&items, 7).unwrap();
        pager.set_current_page(3).unwrap();
        assert_eq!(pager.current_page_items(), &items[14..21]);

        pager.set_current_page(10).unwrap();
        assert_eq!(pager.current_page(), 10);
        assert!(pager.current_page_items().is_empty());

        assert!(pager.set_current_page(0).is_err());
        assert_eq!(pager.current_page(), 10);
    }

    #[test]
    fn test_set_page_length_reanchors() {
        let items = letters();
        let mut pager = Pager::with_page_length(&items, 7).unwrap();
        pager.set_current_page(3).unwrap();

        pager.set_page_length(5).unwrap();

        assert_eq!(pager.current_page(), 4);
        assert_eq!(pager.last_page(), 5);
        assert_eq!(pager.current_page_items(), &items[15..20]);
    }

    #[test]
    fn test_set_page_length_invalid_leaves_state() {
        let items = letters();
        let mut pager = Pager::with_page_length(&items, 7).unwrap();
        pager.set_current_page(3).unwrap();

        assert!(pager.set_page_length(0).is_err());
        assert_eq!(pager.page_length(), 7);
        assert_eq!(pager.current_page(), 3);
    }

    #[test]
    fn test_prev_next_pages() {
        let items = letters();
        let mut pager = Pager::with_page_length(&items, 7).unwrap();
        assert_eq!(pager.prev_page(), None);
        assert_eq!(pager.next_page(), Some(2));

        pager.set_current_page(4).unwrap();
        assert_eq!(pager.prev_page(), Some(3));
        assert_eq!(pager.next_page(), None);
    }

    #[test]
    fn test_next_then_reset() {
        let items = letters();
        let mut pager = Pager::with_page_length(&items, 7).unwrap();

        assert_eq!(pager.len(), 4);
        assert_eq!(pager.next(), Some(&items[0..7]));
        assert_eq!(pager.next(), Some(&items[7..14]));
        assert_eq!(pager.next(), Some(&items[14..21]));
        assert_eq!(pager.next(), Some(&items[21..22]));
        assert_eq!(pager.next(), None);
        assert_eq!(pager.next(), None);
        // The cursor keeps moving after exhaustion.
        assert_eq!(pager.current_page(), 7);

        pager.reset();
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.next(), Some(&items[0..7]));
    }

    #[test]
    fn test_empty_sequence() {
        let items: [u8; 0] = [];
        let mut pager = Pager::new(&items);
        assert_eq!(pager.last_page(), 0);
        assert!(pager.current_page_items().is_empty());
        assert_eq!(pager.next_page(), Some(2));
        assert_eq!(pager.next(), None);
    }

    #[test]
    fn test_iterator_adapters() {
        let items: Vec<u32> = (0..23).collect();
        let pager = Pager::new(&items);
        let sizes: Vec<usize> = pager.map(<[u32]>::len).collect();
        assert_eq!(sizes, vec![10, 10, 3]);
    }

    #[test]
    fn test_clone_is_independent() {
        let items = letters();
        let mut a = Pager::with_page_length(&items, 5).unwrap();
        let b = a.clone();
        a.next();
        assert_eq!(a.current_page(), 2);
        assert_eq!(b.current_page(), 1);
    }
}
