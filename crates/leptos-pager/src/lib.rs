//! Leptos Pager Utilities
//!
//! Page cursor maths plus a reactive cursor for paginated lists.
//! Changing the page size always sends the cursor back to the first page.

use leptos::prelude::*;

/// Zero-based page cursor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageCursor {
    pub page: usize,
    pub page_size: usize,
}

impl PageCursor {
    /// Cursor on the first page. A zero page size is bumped to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn with_page(self, page: usize) -> Self {
        Self { page, ..self }
    }

    /// New page size, back on page 0
    pub fn with_page_size(self, page_size: usize) -> Self {
        Self::new(page_size)
    }

    /// Index of the first item on the current page
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.page_size)
    }

    /// `items[page*size .. page*size+size]`, clipped to the slice bounds
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }

    /// Number of pages needed for `total_items` (an empty list still has one page)
    pub fn page_count(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.page_size).max(1)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self, page_count: usize) -> bool {
        self.page + 1 < page_count
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new(10)
    }
}

/// Pager state signals
#[derive(Clone, Copy)]
pub struct PagerSignals {
    pub page_read: ReadSignal<usize>,
    pub page_write: WriteSignal<usize>,
    pub page_size_read: ReadSignal<usize>,
    pub page_size_write: WriteSignal<usize>,
}

pub fn create_pager_signals(page_size: usize) -> PagerSignals {
    let initial = PageCursor::new(page_size);
    let (page_read, page_write) = signal(initial.page);
    let (page_size_read, page_size_write) = signal(initial.page_size);
    PagerSignals {
        page_read,
        page_write,
        page_size_read,
        page_size_write,
    }
}

impl PagerSignals {
    /// Current cursor (tracked)
    pub fn cursor(&self) -> PageCursor {
        PageCursor::new(self.page_size_read.get()).with_page(self.page_read.get())
    }

    pub fn cursor_untracked(&self) -> PageCursor {
        PageCursor::new(self.page_size_read.get_untracked()).with_page(self.page_read.get_untracked())
    }

    pub fn go_to(&self, page: usize) {
        self.page_write.set(page);
    }

    pub fn reset_page(&self) {
        if self.page_read.get_untracked() != 0 {
            self.page_write.set(0);
        }
    }

    pub fn set_page_size(&self, page_size: usize) {
        let next = self.cursor_untracked().with_page_size(page_size);
        self.page_write.set(next.page);
        self.page_size_write.set(next.page_size);
    }
}

/// Create click handler for the "previous page" control
pub fn make_on_prev(pager: PagerSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        let cursor = pager.cursor_untracked();
        if cursor.has_prev() {
            pager.go_to(cursor.page - 1);
        }
    }
}

/// Create click handler for the "next page" control
pub fn make_on_next(
    pager: PagerSignals,
    page_count: Signal<usize>,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        let cursor = pager.cursor_untracked();
        if cursor.has_next(page_count.get_untracked()) {
            pager.go_to(cursor.page + 1);
        }
    }
}

/// Create change handler for a page-size `<select>`
/// Unparseable values are ignored
pub fn make_on_page_size_change(pager: PagerSignals) -> impl Fn(web_sys::Event) + Copy + 'static {
    move |ev: web_sys::Event| {
        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
            pager.set_page_size(size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    fn owner() -> Owner {
        let owner = Owner::new();
        owner.set();
        owner
    }

    #[test]
    fn test_slice_middle_page() {
        let items: Vec<u32> = (0..10).collect();
        let cursor = PageCursor::new(3).with_page(1);
        assert_eq!(cursor.slice(&items), &[3, 4, 5]);
    }

    #[test]
    fn test_slice_last_partial_page() {
        let items: Vec<u32> = (0..10).collect();
        let cursor = PageCursor::new(4).with_page(2);
        assert_eq!(cursor.slice(&items), &[8, 9]);
    }

    #[test]
    fn test_slice_past_end_is_empty() {
        let items: Vec<u32> = (0..5).collect();
        let cursor = PageCursor::new(5).with_page(3);
        assert!(cursor.slice(&items).is_empty());
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let cursor = PageCursor::new(5).with_page(4).with_page_size(20);
        assert_eq!(cursor, PageCursor { page: 0, page_size: 20 });
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        assert_eq!(PageCursor::new(0).page_size, 1);
    }

    #[test]
    fn test_page_count() {
        let cursor = PageCursor::new(4);
        assert_eq!(cursor.page_count(0), 1);
        assert_eq!(cursor.page_count(4), 1);
        assert_eq!(cursor.page_count(5), 2);
        assert_eq!(cursor.page_count(12), 3);
    }

    #[test]
    fn test_prev_next_bounds() {
        let first = PageCursor::new(4);
        assert!(!first.has_prev());
        assert!(first.has_next(2));
        let last = first.with_page(1);
        assert!(last.has_prev());
        assert!(!last.has_next(2));
    }

    #[test]
    fn test_pager_page_size_change_returns_to_first_page() {
        let _owner = owner();
        let pager = create_pager_signals(12);
        pager.go_to(3);
        assert_eq!(pager.cursor_untracked(), PageCursor { page: 3, page_size: 12 });

        pager.set_page_size(6);
        assert_eq!(pager.page_read.get_untracked(), 0);
        assert_eq!(pager.page_size_read.get_untracked(), 6);
    }

    #[test]
    fn test_pager_reset_page() {
        let _owner = owner();
        let pager = create_pager_signals(0);
        assert_eq!(pager.page_size_read.get_untracked(), 1);
        pager.go_to(2);
        pager.reset_page();
        assert_eq!(pager.cursor_untracked(), PageCursor::new(1));
    }
}
