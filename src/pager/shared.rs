//! Pager over a sequence shared with, and mutable by, its owner.
//!
//! The caller keeps its own handle to the [`SharedItems`] and may push,
//! truncate or replace items between pager calls. Each pager operation takes a
//! short read lock and sees the sequence exactly as it is at that moment;
//! there is no isolation across calls.

use std::sync::Arc;

use log::{debug, trace};
use parking_lot::RwLock;

use crate::common::{Error, PageLength, PageNumber, PagerConfig, Result};
use crate::pager::{Cursor, Position};

/// The shared backing sequence.
pub type SharedItems<T> = Arc<RwLock<Vec<T>>>;

/// Pages through a [`SharedItems`] sequence.
///
/// Same operations as [`Pager`](crate::Pager), but pages are copied out as
/// owned `Vec<T>` snapshots because the lock cannot outlive the call. Use
/// [`with_page`](Self::with_page) to inspect a page in place.
///
/// # Thread Safety
/// - `items`: `RwLock`, read-locked per operation, never written by the pager
/// - `cursor`: no lock, mutation requires `&mut self`
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use parking_lot::RwLock;
/// use paged::SharedPager;
///
/// let items = Arc::new(RwLock::new((0..10).collect::<Vec<u32>>()));
/// let mut pager = SharedPager::with_page_length(Arc::clone(&items), 4).unwrap();
/// assert_eq!(pager.last_page(), 3);
///
/// items.write().truncate(5);
/// assert_eq!(pager.last_page(), 2);
/// assert_eq!(pager.page(2).unwrap(), vec![4]);
/// ```
#[derive(Debug)]
pub struct SharedPager<T> {
    /// The data. Shared with the caller, never written here.
    items: SharedItems<T>,

    /// Page length and current page.
    cursor: Cursor,
}

impl<T> Clone for SharedPager<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            cursor: self.cursor,
        }
    }
}

impl<T> SharedPager<T> {
    /// Create a pager with the default page length (10) on page 1.
    pub fn new(items: SharedItems<T>) -> Self {
        Self::with_config(items, &PagerConfig::default())
    }

    /// Create a pager with an explicit page length.
    ///
    /// # Errors
    /// `Error::InvalidPageLength` unless `page_length` is a positive integer.
    pub fn with_page_length<L>(items: SharedItems<T>, page_length: L) -> Result<Self>
    where
        L: TryInto<PageLength>,
        Error: From<L::Error>,
    {
        let page_length = page_length.try_into()?;
        Ok(Self::from_cursor(items, Cursor::new(page_length)))
    }

    /// Create a pager from a [`PagerConfig`].
    pub fn with_config(items: SharedItems<T>, config: &PagerConfig) -> Self {
        Self::from_cursor(items, Cursor::new(config.page_length))
    }

    fn from_cursor(items: SharedItems<T>, cursor: Cursor) -> Self {
        debug!(
            "shared pager over {} items, {}",
            items.read().len(),
            cursor.page_length()
        );
        Self { items, cursor }
    }

    /// The shared handle to the underlying sequence.
    #[inline]
    pub fn all(&self) -> &SharedItems<T> {
        &self.items
    }

    /// Number of items right now.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Whether the sequence is empty right now.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Run `f` over page `n` while holding the read lock.
    ///
    /// # Errors
    /// `Error::InvalidPageNumber` unless `n` is a positive integer.
    pub fn with_page<N, R, F>(&self, n: N, f: F) -> Result<R>
    where
        N: TryInto<PageNumber>,
        Error: From<N::Error>,
        F: FnOnce(&[T]) -> R,
    {
        let page = n.try_into()?;
        Ok(self.with_slice(page, f))
    }

    fn with_slice<R>(&self, page: PageNumber, f: impl FnOnce(&[T]) -> R) -> R {
        let items = self.items.read();
        let range = self.cursor.range(page, items.len());
        f(&items[range])
    }

    // ========================================================================
    // Cursor
    // ========================================================================

    #[inline]
    pub fn current_page(&self) -> usize {
        self.cursor.current_page().get()
    }

    /// Move the cursor to page `n`, unchecked against the last page.
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

    /// Change the page length, re-anchoring the current page.
    ///
    /// # Errors
    /// `Error::InvalidPageLength` unless `page_length` is a positive integer.
    pub fn set_page_length<L>(&mut self, page_length: L) -> Result<()>
    where
        L: TryInto<PageLength>,
        Error: From<L::Error>,
    {
        self.cursor.set_page_length(page_length.try_into()?);
        Ok(())
    }

    /// `ceil(len / page_length)` for the sequence as it is now.
    pub fn last_page(&self) -> usize {
        self.cursor.last_page(self.len())
    }

    /// The previous page number, or `None` on page 1.
    pub fn prev_page(&self) -> Option<usize> {
        self.cursor.prev_page().map(PageNumber::get)
    }

    /// The next page number, or `None` when on the last page.
    pub fn next_page(&self) -> Option<usize> {
        self.cursor.next_page(self.len()).map(PageNumber::get)
    }

    /// Rewind the cursor to page 1.
    pub fn reset(&mut self) {
        self.cursor.reset();
    }

    /// Snapshot of the navigation state.
    pub fn position(&self) -> Position {
        self.cursor.position(self.len())
    }
}

impl<T: Clone> SharedPager<T> {
    /// Copy of the items on page `n`.
    ///
    /// # Errors
    /// `Error::InvalidPageNumber` unless `n` is a positive integer.
    pub fn page<N>(&self, n: N) -> Result<Vec<T>>
    where
        N: TryInto<PageNumber>,
        Error: From<N::Error>,
    {
        self.with_page(n, <[T]>::to_vec)
    }

    /// Copy of the items on the current page.
    pub fn current_page_items(&self) -> Vec<T> {
        self.with_slice(self.cursor.current_page(), <[T]>::to_vec)
    }
}

/// Stateful page iteration; see the [`Pager`](crate::Pager) iterator.
///
/// Termination is decided by the page read at call time, so truncating the
/// shared sequence mid-iteration can end iteration early, and growing it
/// after `None` can make later calls yield pages again.
impl<T: Clone> Iterator for SharedPager<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        let page = self.cursor.advance();
        let items = self.with_slice(page, <[T]>::to_vec);
        if items.is_empty() {
            trace!("next: {} is empty, iteration exhausted", page);
            None
        } else {
            Some(items)
        }
    }
}

impl<T> From<Vec<T>> for SharedPager<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(Arc::new(RwLock::new(items)))
    }
}
