//! Pagination over in-memory lists.

use serde::{Deserialize, Serialize};

/// Number of pages needed for `total` items, `ceil(total / per_page)`.
///
/// Returns 0 for an empty list; callers that need a displayable page count
/// use [`Pagination::total_pages`], which is never below 1.
pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// The items of 1-indexed `page`: indices `[per_page*(page-1), per_page*page)`.
///
/// Pages past the end (and page 0) yield an empty slice instead of panicking.
pub fn window<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    if page == 0 || per_page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of items.
    pub total: usize,
    /// Total number of pages, at least 1.
    pub total_pages: usize,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info. `page` is clamped into `[1, total_pages]`.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let total_pages = page_count(total, per_page).max(1);
        let page = page.clamp(1, total_pages);

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.per_page
    }

    /// 1-based row number for the item at `index_in_page`.
    pub fn row_number(&self, index_in_page: usize) -> usize {
        self.offset() + index_in_page + 1
    }

    /// Slice the items belonging to this page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        window(items, self.page, self.per_page)
    }

    /// Get start item number (1-indexed).
    pub fn start_item(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.offset() + 1
        }
    }

    /// Get end item number.
    pub fn end_item(&self) -> usize {
        (self.page * self.per_page).min(self.total)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, 10, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_slices() {
        let items: Vec<u32> = (0..10).collect();
        assert_eq!(window(&items, 1, 4), &[0, 1, 2, 3]);
        assert_eq!(window(&items, 2, 4), &[4, 5, 6, 7]);
        assert_eq!(window(&items, 3, 4), &[8, 9]);
    }

    #[test]
    fn test_window_past_end_is_empty() {
        let items: Vec<u32> = (0..10).collect();
        assert!(window(&items, 4, 4).is_empty());
        assert!(window(&items, 0, 4).is_empty());
        assert!(window::<u32>(&[], 1, 4).is_empty());
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 8), 0);
        assert_eq!(page_count(8, 8), 1);
        assert_eq!(page_count(9, 8), 2);
        assert_eq!(page_count(9, 4), 3);
    }

    #[test]
    fn test_pagination_basics() {
        let p = Pagination::new(2, 10, 45);
        assert_eq!(p.total_pages, 5);
        assert!(p.has_next);
        assert!(p.has_prev);
        assert_eq!(p.offset(), 10);
        assert_eq!(p.row_number(0), 11);
        assert_eq!(p.start_item(), 11);
        assert_eq!(p.end_item(), 20);
    }

    #[test]
    fn test_pagination_clamps_page() {
        let p = Pagination::new(9, 10, 45);
        assert_eq!(p.page, 5);
        assert!(!p.has_next);

        let p = Pagination::new(0, 10, 45);
        assert_eq!(p.page, 1);
        assert!(!p.has_prev);
    }

    #[test]
    fn test_pagination_empty() {
        let p = Pagination::new(1, 10, 0);
        assert_eq!(p.total_pages, 1);
        assert_eq!(p.start_item(), 0);
        assert_eq!(p.end_item(), 0);
        assert!(!p.has_next);
    }
}
