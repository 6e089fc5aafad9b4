//! Configuration constants and pager settings.

use std::num::NonZeroUsize;

use log::warn;

use super::{PageLength, PageNumber, Result};

/// Number of items per page when the caller does not choose one.
pub const DEFAULT_PAGE_LENGTH: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(n) => n,
    None => unreachable!(),
};

/// The page a fresh or reset cursor points at.
pub const FIRST_PAGE: PageNumber = PageNumber::FIRST;

/// Environment variable read by [`PagerConfig::from_env`].
pub const PAGE_LENGTH_ENV: &str = "PAGED_PAGE_LENGTH";

/// Settings applied when a pager is constructed.
///
/// Defaults to [`DEFAULT_PAGE_LENGTH`]. Environment overrides are opt-in via
/// [`PagerConfig::from_env`].
///
/// # Example
/// ```
/// use paged::{PagerConfig, Pager};
///
/// let cfg = PagerConfig::default().with_page_length(3).unwrap();
/// let items = [1, 2, 3, 4];
/// let pager = Pager::with_config(&items, &cfg);
/// assert_eq!(pager.last_page(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PagerConfig {
    /// Items per page.
    /// Env: PAGED_PAGE_LENGTH (default 10; non-positive or non-numeric ignored)
    pub page_length: PageLength,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            page_length: PageLength::DEFAULT,
        }
    }
}

impl PagerConfig {
    /// Load configuration from environment variables.
    ///
    /// Invalid values are logged and ignored; the default stays in effect.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = lookup(PAGE_LENGTH_ENV) {
            match v.trim().parse::<i64>() {
                Ok(n) => match PageLength::try_from(n) {
                    Ok(len) => cfg.page_length = len,
                    Err(e) => warn!("{}: {}; using {}", PAGE_LENGTH_ENV, e, cfg.page_length),
                },
                Err(_) => warn!(
                    "{}: not an integer ({:?}); using {}",
                    PAGE_LENGTH_ENV, v, cfg.page_length
                ),
            }
        }

        cfg
    }

    /// Builder-style page length override.
    ///
    /// # Errors
    /// `Error::InvalidPageLength` if `len` is not a positive integer.
    pub fn with_page_length<L>(mut self, len: L) -> Result<Self>
    where
        L: TryInto<PageLength>,
        super::Error: From<L::Error>,
    {
        self.page_length = len.try_into()?;
        Ok(self)
    }
}
