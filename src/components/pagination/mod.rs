//! Which page numbers to offer, given where we are
mod view;

pub use view::PaginationComponent;

pub const MAX_VISIBLE_PAGES: usize = 5;

/// `ceil(total_items / page_size)`
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    current: usize,
    total: usize,
    start: usize,
    end: usize,
}

impl PageWindow {
    pub fn new(current: usize, total: usize) -> Self {
        Self::with_max_visible(current, total, MAX_VISIBLE_PAGES)
    }

    /// An empty listing still has one (empty) page, and `current` is
    /// pulled into `1..=total`.
    pub fn with_max_visible(current: usize, total: usize, max_visible: usize) -> Self {
        let total = total.max(1);
        let max_visible = max_visible.max(1);
        let current = current.clamp(1, total);

        let mut start = current.saturating_sub(max_visible / 2).max(1);
        let end = total.min(start + max_visible - 1);
        if end - start + 1 < max_visible {
            start = (end + 1).saturating_sub(max_visible).max(1);
        }

        Self {
            current,
            total,
            start,
            end,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn pages(&self) -> std::ops::RangeInclusive<usize> {
        self.start..=self.end
    }

    pub fn shows_first(&self) -> bool {
        self.start > 1
    }

    pub fn leading_ellipsis(&self) -> bool {
        self.start > 2
    }

    pub fn shows_last(&self) -> bool {
        self.end < self.total
    }

    pub fn trailing_ellipsis(&self) -> bool {
        self.end + 1 < self.total
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    pub fn clamp(&self, page: usize) -> usize {
        page.clamp(1, self.total)
    }

    /// The page to switch to, or `None` if the (clamped) request
    /// would leave us where we are.
    pub fn request(&self, page: usize) -> Option<usize> {
        let page = self.clamp(page);
        (page != self.current).then_some(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(window: &PageWindow) -> Vec<usize> {
        window.pages().collect()
    }

    #[test]
    fn twenty_three_articles_make_five_pages() {
        assert_eq!(total_pages(23, 5), 5);
        assert_eq!(total_pages(25, 5), 5);
        assert_eq!(total_pages(26, 5), 6);
        assert_eq!(total_pages(0, 5), 0);

        let window = PageWindow::new(3, 5);
        assert_eq!(pages(&window), vec![1, 2, 3, 4, 5]);
        assert!(!window.shows_first());
        assert!(!window.leading_ellipsis());
        assert!(!window.shows_last());
        assert!(!window.trailing_ellipsis());
    }

    #[test]
    fn window_near_the_end() {
        let window = PageWindow::new(8, 10);
        assert_eq!(pages(&window), vec![6, 7, 8, 9, 10]);
        assert!(window.shows_first());
        assert!(window.leading_ellipsis());
        assert!(!window.shows_last());
        assert!(!window.trailing_ellipsis());
        assert!(window.has_previous());
        assert!(window.has_next());
    }

    #[test]
    fn window_near_the_start() {
        let window = PageWindow::new(2, 10);
        assert_eq!(pages(&window), vec![1, 2, 3, 4, 5]);
        assert!(!window.shows_first());
        assert!(window.shows_last());
        assert!(window.trailing_ellipsis());
    }

    #[test]
    fn ellipsis_only_when_pages_are_skipped() {
        let window = PageWindow::new(4, 7);
        assert_eq!(pages(&window), vec![2, 3, 4, 5, 6]);
        assert!(window.shows_first());
        assert!(!window.leading_ellipsis());
        assert!(window.shows_last());
        assert!(!window.trailing_ellipsis());
    }

    #[test]
    fn every_window_is_contiguous_and_holds_the_current_page() {
        for total in 1..=12 {
            for current in 1..=total {
                let window = PageWindow::new(current, total);
                let pages = pages(&window);
                assert_eq!(pages.len(), MAX_VISIBLE_PAGES.min(total));
                assert!(pages.contains(&current));
                assert!(pages.windows(2).all(|pair| pair[1] == pair[0] + 1));
                assert!(pages.iter().all(|page| (1..=total).contains(page)));
            }
        }
    }

    #[test]
    fn empty_and_single_page_listings() {
        for total in [0, 1] {
            let window = PageWindow::new(1, total);
            assert_eq!(pages(&window), vec![1]);
            assert!(!window.has_previous());
            assert!(!window.has_next());
            assert!(!window.shows_first());
            assert!(!window.shows_last());
        }
    }

    #[test]
    fn out_of_range_requests_are_clamped() {
        let window = PageWindow::new(1, 5);
        assert_eq!(window.request(0), None);
        assert_eq!(window.request(1), None);
        assert_eq!(window.request(3), Some(3));
        assert_eq!(window.request(99), Some(5));

        let last = PageWindow::new(5, 5);
        assert_eq!(last.request(6), None);
        assert_eq!(PageWindow::new(42, 5).current(), 5);
    }
}
