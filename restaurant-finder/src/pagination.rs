//! Client-side pagination of a result set.
//!
//! Results arrive as one full collection; the table shows one page of it at
//! a time, with a bounded row of page-number buttons around the current page.

/// Rows shown per page.
pub const ITEMS_PER_PAGE: usize = 10;

/// Maximum number of page-number buttons shown at once.
pub const PAGE_WINDOW: usize = 5;

/// Number of pages needed for `len` items.
pub fn total_pages(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    len.div_ceil(per_page)
}

/// Page numbers to show as buttons.
///
/// - If everything fits in the window, all pages are shown.
/// - Near the start, the first `window` pages are shown.
/// - Near the end, the last `window` pages are shown.
/// - Otherwise the window is centered on `current_page`.
///
/// # Examples
///
/// ```
/// use restaurant_finder::pagination::visible_pages;
///
/// assert_eq!(visible_pages(1, 3, 5), vec![1, 2, 3]);
/// assert_eq!(visible_pages(10, 20, 5), vec![8, 9, 10, 11, 12]);
/// ```
pub fn visible_pages(current_page: usize, total_pages: usize, window: usize) -> Vec<usize> {
    if window == 0 {
        return Vec::new();
    }

    if total_pages <= window {
        return (1..=total_pages).collect();
    }

    if current_page < window {
        return (1..=window).collect();
    }

    if current_page > total_pages - window {
        return (total_pages - window + 1..=total_pages).collect();
    }

    let start = current_page - (window - 1) / 2;
    (start..start + window)
        .filter(|page| (1..=total_pages).contains(page))
        .collect()
}

/// The items on `current_page` (1-based).
///
/// Pages past the end, and page 0, are empty rather than an error.
pub fn page_slice<T>(items: &[T], current_page: usize, per_page: usize) -> &[T] {
    if current_page == 0 || per_page == 0 {
        return &[];
    }

    let start = (current_page - 1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }

    let end = current_page.saturating_mul(per_page).min(items.len());
    &items[start..end]
}

/// Which page of the current result set is being viewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    items_per_page: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(ITEMS_PER_PAGE)
    }
}

impl PageState {
    /// Start on page 1.
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Pages needed for a result set of `len` items.
    pub fn total_pages(&self, len: usize) -> usize {
        total_pages(len, self.items_per_page)
    }

    /// Back to page 1 (done whenever a new result set arrives).
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    pub fn first(&mut self) {
        self.current_page = 1;
    }

    pub fn prev(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    pub fn next(&mut self, total_pages: usize) {
        self.current_page = (self.current_page + 1).min(total_pages).max(1);
    }

    pub fn last(&mut self, total_pages: usize) {
        self.current_page = total_pages.max(1);
    }

    /// Jump to `page`.
    ///
    /// Not clamped: the controls only offer pages that exist. A page past
    /// the end simply shows no rows. Page 0 is ignored.
    pub fn go_to(&mut self, page: usize) {
        if page >= 1 {
            self.current_page = page;
        }
    }

    /// Whether "first" and "previous" are enabled.
    pub fn can_go_back(&self) -> bool {
        self.current_page > 1
    }

    /// Whether "next" and "last" are enabled.
    pub fn can_go_forward(&self, total_pages: usize) -> bool {
        self.current_page < total_pages
    }

    /// The rows of `items` on the current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        page_slice(items, self.current_page, self.items_per_page)
    }

    /// Page-number buttons for a result set with `total_pages` pages.
    pub fn visible_pages(&self, total_pages: usize) -> Vec<usize> {
        visible_pages(self.current_page, total_pages, PAGE_WINDOW)
    }

    /// Caption under the controls, e.g. "Page 2 of 7".
    pub fn caption(&self, total_pages: usize) -> String {
        format!("Page {} of {}", self.current_page, total_pages)
    }
}
