//! Query result structures and page-window display helper

use crate::content::Article;
use serde::Serialize;

/// One page of a filtered article index
#[derive(Debug, Clone, Serialize)]
pub struct IndexPage {
    /// Articles on this page, in enumeration order
    pub items: Vec<Article>,
    /// The 1-indexed page this result represents
    pub page: usize,
    /// Page size the query ran with
    pub page_size: usize,
    /// Pages available for the filtered set
    pub total_pages: usize,
    /// Size of the filtered set before pagination
    pub total_count: usize,
}

impl IndexPage {
    pub fn empty(page: usize, page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page,
            page_size,
            total_pages: 0,
            total_count: 0,
        }
    }

    /// 1-indexed positions of this page's items within the filtered set
    /// (the "Showing 11–20 of 34" line). `None` when the page is empty.
    pub fn item_range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.page - 1) * self.page_size + 1;
        Some((first, first + self.items.len() - 1))
    }
}

/// Page numbers to display for the pager.
///
/// All pages when `total <= 5`; otherwise a 5-wide window centered on
/// `current`, clamped so it never leaves `[1, total]`.
pub fn page_window(current: usize, total: usize) -> Vec<usize> {
    if total <= 5 {
        (1..=total).collect()
    } else if current <= 3 {
        (1..=5).collect()
    } else if current >= total - 2 {
        (total - 4..=total).collect()
    } else {
        (current - 2..=current + 2).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_shows_all_when_few_pages() {
        assert_eq!(page_window(1, 3), vec![1, 2, 3]);
        assert_eq!(page_window(3, 5), vec![1, 2, 3, 4, 5]);
        assert!(page_window(1, 0).is_empty());
    }

    #[test]
    fn window_clamps_at_the_start() {
        assert_eq!(page_window(1, 12), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(3, 12), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn window_clamps_at_the_end() {
        assert_eq!(page_window(12, 12), vec![8, 9, 10, 11, 12]);
        assert_eq!(page_window(10, 12), vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn window_centers_in_the_middle() {
        assert_eq!(page_window(6, 12), vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn item_range_on_empty_page() {
        assert_eq!(IndexPage::empty(1, 10).item_range(), None);
    }
}
