//! Non-consuming iteration over every page.

use std::iter::FusedIterator;
use std::slice::Chunks;

use crate::common::PageLength;

/// Iterator over `page(1) ..= page(last_page)` of a slice.
///
/// Created by [`Pager::pages`](crate::Pager::pages). Unlike iterating the
/// pager itself, this leaves the cursor alone. The yielded pages partition the
/// slice: concatenated, they equal the original items.
#[derive(Debug, Clone)]
pub struct Pages<'a, T> {
    chunks: Chunks<'a, T>,
}

impl<'a, T> Pages<'a, T> {
    pub(crate) fn new(items: &'a [T], page_length: PageLength) -> Self {
        Self {
            chunks: items.chunks(page_length.get()),
        }
    }
}

impl<'a, T> Iterator for Pages<'a, T> {
    type Item = &'a [T];

    #[inline]
    fn next(&mut self) -> Option<&'a [T]> {
        self.chunks.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl<T> DoubleEndedIterator for Pages<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.chunks.next_back()
    }
}

impl<T> ExactSizeIterator for Pages<'_, T> {}

impl<T> FusedIterator for Pages<'_, T> {}
