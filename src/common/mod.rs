//! Common types and utilities shared across paged.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants and [`PagerConfig`]
//! - Error types
//! - Validated values ([`PageNumber`], [`PageLength`])

pub mod config;
pub mod error;
mod page_length;
mod page_number;
mod positive;

pub use config::PagerConfig;
pub use error::{Error, ErrorKind, Result};
pub use page_length::PageLength;
pub use page_number::PageNumber;
