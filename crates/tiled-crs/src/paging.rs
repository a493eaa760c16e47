//! Pagination over the row-major tile sequence.

use serde::{Deserialize, Serialize};
use tcrs_common::TileCoord;

/// One page of tiles for an extent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TilePage {
    /// Tiles of this page, nearest to the extent centre first
    pub tiles: Vec<TileCoord>,
    /// Candidate tiles covered by the extent across all pages
    pub total: u64,
    /// Offset this page was read from
    pub start: u64,
    /// Offset of the following page, if any
    pub next: Option<u64>,
}

impl TilePage {
    /// A page with no tiles and nothing after it.
    pub fn empty(start: u64) -> Self {
        Self {
            tiles: Vec::new(),
            total: 0,
            start,
            next: None,
        }
    }

    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

/// Offset of the page after the one at `start`, or `None` once the
/// sequence of `total` tiles is exhausted.
pub fn next_start(start: u64, page_size: usize, total: u64) -> Option<u64> {
    let next = start.saturating_add(page_size as u64);
    (next < total).then_some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_start() {
        assert_eq!(next_start(0, 4, 8), Some(4));
        assert_eq!(next_start(4, 4, 8), None);
        assert_eq!(next_start(0, 5, 8), Some(5));
        assert_eq!(next_start(5, 5, 8), None);
        assert_eq!(next_start(0, 100, 8), None);
        assert_eq!(next_start(0, 1, 0), None);
    }

    #[test]
    fn test_next_start_saturates() {
        assert_eq!(next_start(u64::MAX - 1, 10, u64::MAX), None);
    }

    #[test]
    fn test_empty_page_is_last() {
        let page = TilePage::empty(12);
        assert!(page.is_last());
        assert_eq!(page.start, 12);
    }
}
