//! Pagers: windowed access and a page cursor over an in-memory sequence.
//!
//! # Components
//! - [`Pager`] - Pages through a borrowed slice
//! - [`SharedPager`] - Pages through a sequence the caller may keep mutating
//! - [`Cursor`] - Page arithmetic and the current-page state machine
//! - [`Pages`] - Iterator over every page, independent of the cursor
//! - [`Position`] - Navigation snapshot for prev/next controls

mod borrowed;
mod cursor;
mod pages;
mod position;
mod shared;

pub use borrowed::Pager;
pub use cursor::Cursor;
pub use pages::Pages;
pub use position::Position;
pub use shared::{SharedItems, SharedPager};
