//! paged - windowed page access over in-memory sequences.
//!
//! Given a sequence and a page length, a pager computes page slices, tracks a
//! current page, and reports previous/next pages for navigation controls.
//!
//! # Architecture
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                          paged                           │
//! ├──────────────────────────────────────────────────────────┤
//! │  Pager<'a, T> (&'a [T])     SharedPager<T> (Arc<RwLock>) │
//! │          │                            │                  │
//! │          └────────────┬───────────────┘                  │
//! │                       ▼                                  │
//! │        Cursor: page length + current page                │
//! │        range(), last_page(), advance(), re-anchoring     │
//! │                       │                                  │
//! │                       ▼                                  │
//! │   common: PageNumber, PageLength, PagerConfig, Error     │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageNumber, PageLength, Error, config)
//! - [`pager`] - The pagers, their cursor and iterators
//!
//! # Quick Start
//! ```
//! use paged::Pager;
//!
//! let letters: Vec<char> = "abcdefghijklmnopqrstuv".chars().collect();
//! let mut pager = Pager::with_page_length(&letters, 7).unwrap();
//!
//! pager.set_current_page(3).unwrap();
//! assert_eq!(pager.current_page_items().iter().collect::<String>(), "opqrstu");
//! assert_eq!(pager.last_page(), 4);
//!
//! pager.set_page_length(5).unwrap();
//! assert_eq!(pager.current_page(), 4);
//! assert_eq!(pager.last_page(), 5);
//! assert_eq!(pager.current_page_items().iter().collect::<String>(), "pqrst");
//! ```

pub mod common;
pub mod pager;

// Re-export commonly used items at crate root for convenience
pub use common::config::DEFAULT_PAGE_LENGTH;
pub use common::{Error, ErrorKind, PageLength, PageNumber, PagerConfig, Result};

pub use pager::{Cursor, Pager, Pages, Position, SharedItems, SharedPager};
