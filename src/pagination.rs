//! Windowed pagination for the list views.

use serde::Serialize;

/// Number of rows shown per page on the list/search views.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Builds the page-number strip: leading edge, a window around the current
/// page, and trailing edge, with `None` marking an ellipsis gap.
fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

#[derive(Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = get_pages(total_pages, current_page, 2, 2, 4, 2);

        Self {
            items,
            pages,
            page: current_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_has_no_pages() {
        let paginated: Paginated<i32> = Paginated::new(vec![], 1, 0);
        assert!(paginated.pages.is_empty());
        assert_eq!(paginated.page, 1);
    }

    #[test]
    fn middle_page_window_has_gaps_on_both_sides() {
        let paginated: Paginated<i32> = Paginated::new(vec![], 10, 20);
        assert!(paginated.pages.contains(&None));
        assert!(paginated.pages.contains(&Some(10)));
        assert!(paginated.pages.contains(&Some(1)));
        assert!(paginated.pages.contains(&Some(20)));
    }

    #[test]
    fn zero_page_is_clamped_to_first() {
        let paginated: Paginated<i32> = Paginated::new(vec![], 0, 3);
        assert_eq!(paginated.page, 1);
        assert_eq!(paginated.pages, vec![Some(1), Some(2), Some(3)]);
    }
}
