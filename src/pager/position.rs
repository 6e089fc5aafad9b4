//! Navigation snapshot.

use std::fmt;

/// A point-in-time copy of a pager's navigation state.
///
/// Meant for driving "prev"/"next" controls: `prev_page` and `next_page` are
/// `None` exactly when the matching control should be disabled.
///
/// # Example
/// ```
/// use paged::Pager;
///
/// let items: Vec<u32> = (0..22).collect();
/// let mut pager = Pager::with_page_length(&items, 7).unwrap();
/// pager.set_current_page(3).unwrap();
///
/// let pos = pager.position();
/// assert_eq!(pos.next_page, Some(4));
/// assert_eq!(pos.to_string(), "Page 3/4 (7 per page)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub current_page: usize,
    pub page_length: usize,
    pub last_page: usize,
    pub prev_page: Option<usize>,
    pub next_page: Option<usize>,
}

impl Position {
    /// Whether the current page lies past the last page.
    pub fn is_past_end(&self) -> bool {
        self.current_page > self.last_page
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Page {}/{} ({} per page)",
            self.current_page, self.last_page, self.page_length
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Position {
        Position {
            current_page: 5,
            page_length: 10,
            last_page: 3,
            prev_page: Some(4),
            next_page: Some(6),
        }
    }

    #[test]
    fn test_position_past_end() {
        assert!(sample().is_past_end());
        let pos = Position {
            current_page: 3,
            next_page: None,
            ..sample()
        };
        assert!(!pos.is_past_end());
    }

    #[test]
    fn test_position_display() {
        assert_eq!(format!("{}", sample()), "Page 5/3 (10 per page)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_position_serde() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"current_page\":5"));
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
