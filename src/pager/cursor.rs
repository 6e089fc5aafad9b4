//! Cursor state machine and page arithmetic.
//!
//! [`Cursor`] knows nothing about where items live. Both pagers hand it the
//! current sequence length and get back index ranges, so the borrowed and
//! shared flavours cannot drift apart.
//!
//! # Transitions
//! ```text
//!   new()/reset()        p = 1
//!   advance()            p = p + 1   (returns the old p)
//!   set_current_page(v)  p = v       (never checked against the last page)
//!   set_page_length(l)   p = floor(1 + (1 + l_old * (p_old - 1)) / l)
//! ```

use std::num::NonZeroUsize;
use std::ops::Range;

use log::{debug, trace};

use crate::common::config::FIRST_PAGE;
use crate::common::{PageLength, PageNumber};
use crate::pager::Position;

/// Page length plus the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    page_length: PageLength,
    current: PageNumber,
}

impl Cursor {
    /// A cursor on page 1.
    pub fn new(page_length: PageLength) -> Self {
        Self {
            page_length,
            current: FIRST_PAGE,
        }
    }

    #[inline]
    pub fn page_length(&self) -> PageLength {
        self.page_length
    }

    #[inline]
    pub fn current_page(&self) -> PageNumber {
        self.current
    }

    /// Move to any page, including pages past the end.
    #[inline]
    pub fn set_current_page(&mut self, page: PageNumber) {
        self.current = page;
    }

    /// Back to page 1.
    pub fn reset(&mut self) {
        debug!("cursor reset from {}", self.current);
        self.current = FIRST_PAGE;
    }

    /// Change the page length, re-anchoring the current page.
    ///
    /// The first item of the old current page has 1-based rank
    /// `f = 1 + l_old * (p_old - 1)`; the new page is `floor(1 + f / l_new)`.
    /// With 7 items per page on page 3 (`f = 15`), switching to 5 per page
    /// lands on page 4.
    ///
    /// Returns the new current page.
    pub fn set_page_length(&mut self, page_length: PageLength) -> PageNumber {
        let old_length = self.page_length;
        let old_page = self.current;

        let rank = old_length
            .get()
            .saturating_mul(old_page.get() - 1)
            .saturating_add(1);
        let anchored = NonZeroUsize::MIN.saturating_add(rank / page_length.get());

        self.current = PageNumber::from(anchored);
        self.page_length = page_length;

        debug!(
            "page length {} -> {}: {} -> {}",
            old_length.get(),
            page_length.get(),
            old_page,
            self.current
        );
        self.current
    }

    /// Return the current page and step to the next one.
    pub fn advance(&mut self) -> PageNumber {
        let page = self.current;
        self.current = page.saturating_next();
        trace!("cursor advance {} -> {}", page, self.current);
        page
    }

    /// Index range of `page` within a sequence of `len` items.
    ///
    /// Clipped to `0..len`; pages past the end give an empty range at `len`.
    pub fn range(&self, page: PageNumber, len: usize) -> Range<usize> {
        let Some(start) = page.start_index(self.page_length.get()) else {
            return len..len;
        };
        let start = start.min(len);
        let end = start.saturating_add(self.page_length.get()).min(len);
        start..end
    }

    /// Index range of the current page.
    #[inline]
    pub fn current_range(&self, len: usize) -> Range<usize> {
        self.range(self.current, len)
    }

    /// `ceil(len / page_length)`; zero for an empty sequence.
    #[inline]
    pub fn last_page(&self, len: usize) -> usize {
        self.page_length.pages_for(len)
    }

    /// The page before the current one, or `None` on page 1.
    #[inline]
    pub fn prev_page(&self) -> Option<PageNumber> {
        self.current.prev()
    }

    /// The page after the current one, or `None` when the current page is
    /// exactly the last page.
    ///
    /// A cursor already past the end still reports a next page.
    pub fn next_page(&self, len: usize) -> Option<PageNumber> {
        if self.current.get() == self.last_page(len) {
            None
        } else {
            Some(self.current.saturating_next())
        }
    }

    /// Snapshot of the navigation state for a sequence of `len` items.
    pub fn position(&self, len: usize) -> Position {
        Position {
            current_page: self.current.get(),
            page_length: self.page_length.get(),
            last_page: self.last_page(len),
            prev_page: self.prev_page().map(PageNumber::get),
            next_page: self.next_page(len).map(PageNumber::get),
        }
    }
}
