//! Pagination controller state
//!
//! Derives the row of page controls shown under the gallery from a total
//! item count and a page size, and tracks the active page. All transitions
//! are plain methods with no rendering dependencies.
//!
//! Layout rules:
//! - up to 8 pages: every page is listed
//! - more than 8 pages: pages 1-4, an ellipsis, then the last 4 pages
//! - the ellipsis expands into a 5-page window with `«` / `»` controls that
//!   shift it by 5; shifting past either end collapses it again
//! - whenever the current page moves strictly inside the range
//!   (`current > 4 && current < total - 3`) the window follows it, starting
//!   two pages before the current one

/// Above this many pages the compressed layout is used
pub const COMPRESS_THRESHOLD: u32 = 8;

/// Pages shown at each end of the compressed layout
pub const EDGE_PAGES: u32 = 4;

/// Width of the expanded sliding window
pub const WINDOW_SIZE: u32 = 5;

/// One control in the rendered pagination row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// `<` button
    Previous { enabled: bool },
    /// A numbered page button
    Page { number: u32, active: bool },
    /// `...` control that expands the window
    Ellipsis,
    /// `«` shifts the window back by [`WINDOW_SIZE`]
    ShiftLeft,
    /// `»` shifts the window forward by [`WINDOW_SIZE`]
    ShiftRight,
    /// `>` button
    Next { enabled: bool },
}

impl PageItem {
    /// Whether activating this item can do anything
    pub fn is_enabled(&self) -> bool {
        match self {
            PageItem::Previous { enabled } | PageItem::Next { enabled } => *enabled,
            _ => true,
        }
    }
}

/// Pagination state for the gallery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    current_page: u32,
    total_items: u64,
    items_per_page: u32,
    /// First page of the expanded window; `None` shows the compressed layout
    window_start: Option<u32>,
    /// Keyboard focus within [`PaginationState::items`]
    focus: usize,
}

impl PaginationState {
    pub fn new(items_per_page: u32) -> Self {
        Self {
            current_page: 1,
            total_items: 0,
            items_per_page,
            window_start: None,
            focus: 0,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn items_per_page(&self) -> u32 {
        self.items_per_page
    }

    pub fn window_start(&self) -> Option<u32> {
        self.window_start
    }

    pub fn is_expanded(&self) -> bool {
        self.window_start.is_some()
    }

    /// `ceil(total_items / items_per_page)`, zero for degenerate inputs
    pub fn total_pages(&self) -> u32 {
        if self.items_per_page == 0 {
            return 0;
        }
        let pages = self.total_items.div_ceil(u64::from(self.items_per_page));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Zero-based offset of the first item on the current page
    pub fn offset(&self) -> u64 {
        u64::from(self.current_page.saturating_sub(1)) * u64::from(self.items_per_page)
    }

    /// Replace the total item count (after a fetch)
    ///
    /// Keeps `current_page <= total_pages` whenever there is at least one page.
    pub fn set_total_items(&mut self, total_items: u64) {
        self.total_items = total_items;
        let total_pages = self.total_pages();
        if total_pages > 0 && self.current_page > total_pages {
            self.current_page = total_pages;
        }
        self.sync_window();
    }

    /// Set the current page from outside (no page-change event)
    pub fn set_page(&mut self, page: u32) {
        self.current_page = page.max(1);
        self.sync_window();
    }

    /// Select a page button; returns the page to load if it is in range
    pub fn select(&mut self, page: u32) -> Option<u32> {
        if page == 0 || page > self.total_pages() {
            return None;
        }
        self.current_page = page;
        self.sync_window();
        Some(page)
    }

    /// `>`; `None` on the last page
    pub fn next(&mut self) -> Option<u32> {
        if self.current_page < self.total_pages() {
            self.select(self.current_page + 1)
        } else {
            None
        }
    }

    /// `<`; `None` on the first page
    pub fn previous(&mut self) -> Option<u32> {
        if self.current_page > 1 {
            self.select(self.current_page - 1)
        } else {
            None
        }
    }

    /// Expand the ellipsis into the sliding window
    ///
    /// The window is centered on the current page when that page lies inside
    /// the range, otherwise on the middle of the range.
    pub fn expand(&mut self) {
        let total = self.total_pages();
        if self.is_expanded() || total <= COMPRESS_THRESHOLD {
            return;
        }
        let start = if self.is_inner_page(self.current_page) {
            self.current_page - 2
        } else {
            total / 2 - 2
        };
        self.window_start = Some(start);
        self.clamp_focus();
    }

    /// `»`: move the window forward, collapsing it at the end of the range
    pub fn shift_right(&mut self) {
        if let Some(start) = self.window_start {
            let next = start + WINDOW_SIZE;
            if next + (WINDOW_SIZE - 1) >= self.total_pages() {
                self.window_start = None;
            } else {
                self.window_start = Some(next);
            }
            self.clamp_focus();
        }
    }

    /// `«`: move the window back, collapsing it at the start of the range
    pub fn shift_left(&mut self) {
        if let Some(start) = self.window_start {
            if start <= WINDOW_SIZE {
                self.window_start = None;
            } else {
                self.window_start = Some(start - WINDOW_SIZE);
            }
            self.clamp_focus();
        }
    }

    /// The controls to render, left to right
    pub fn items(&self) -> Vec<PageItem> {
        let total = self.total_pages();
        let mut items = vec![PageItem::Previous {
            enabled: self.current_page > 1,
        }];

        match self.window_start {
            Some(start) => {
                if start > 1 {
                    items.push(PageItem::ShiftLeft);
                    items.push(self.page_item(1));
                }
                let count = WINDOW_SIZE.min((total + 1).saturating_sub(start));
                items.extend((start..start + count).map(|n| self.page_item(n)));
                if start + (WINDOW_SIZE - 1) < total {
                    items.push(PageItem::ShiftRight);
                    items.push(self.page_item(total));
                }
            }
            None => {
                items.extend((1..=EDGE_PAGES.min(total)).map(|n| self.page_item(n)));
                if total > COMPRESS_THRESHOLD {
                    items.push(PageItem::Ellipsis);
                    let first_tail = total.saturating_sub(EDGE_PAGES - 1).max(EDGE_PAGES + 1);
                    items.extend(
                        (first_tail..first_tail + EDGE_PAGES)
                            .filter(|n| *n <= total)
                            .map(|n| self.page_item(n)),
                    );
                } else {
                    items.extend((EDGE_PAGES + 1..=total).map(|n| self.page_item(n)));
                }
            }
        }

        items.push(PageItem::Next {
            enabled: self.current_page < total,
        });
        items
    }

    /// Page numbers currently rendered, in order
    pub fn visible_pages(&self) -> Vec<u32> {
        self.items()
            .into_iter()
            .filter_map(|item| match item {
                PageItem::Page { number, .. } => Some(number),
                _ => None,
            })
            .collect()
    }

    // ─────────────────────────────────────────────────────────
    // Keyboard focus
    // ─────────────────────────────────────────────────────────

    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Put focus on the active page button
    pub fn focus_current(&mut self) {
        let current = self.current_page;
        self.focus = self
            .items()
            .iter()
            .position(|item| matches!(item, PageItem::Page { number, .. } if *number == current))
            .unwrap_or(0);
    }

    pub fn focus_left(&mut self) {
        self.focus = self.focus.saturating_sub(1);
    }

    pub fn focus_right(&mut self) {
        self.focus += 1;
        self.clamp_focus();
    }

    pub fn focused_item(&self) -> Option<PageItem> {
        self.items().get(self.focus).copied()
    }

    /// Activate the focused control; returns the page to load, if any
    pub fn activate_focused(&mut self) -> Option<u32> {
        let item = self.focused_item()?;
        let page = self.activate(item);
        self.clamp_focus();
        page
    }

    /// Activate a control; returns the page to load, if any
    pub fn activate(&mut self, item: PageItem) -> Option<u32> {
        match item {
            PageItem::Previous { .. } => self.previous(),
            PageItem::Next { .. } => self.next(),
            PageItem::Page { number, .. } => self.select(number),
            PageItem::Ellipsis => {
                self.expand();
                None
            }
            PageItem::ShiftLeft => {
                self.shift_left();
                None
            }
            PageItem::ShiftRight => {
                self.shift_right();
                None
            }
        }
    }

    // ─────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────

    fn page_item(&self, number: u32) -> PageItem {
        PageItem::Page {
            number,
            active: number == self.current_page,
        }
    }

    /// Pages that are neither in the first nor the last block of four
    fn is_inner_page(&self, page: u32) -> bool {
        let total = i64::from(self.total_pages());
        let page = i64::from(page);
        page > i64::from(EDGE_PAGES) && page < total - 3
    }

    /// Re-derive the window after the current page or total changed
    fn sync_window(&mut self) {
        self.window_start = if self.is_inner_page(self.current_page) {
            Some(self.current_page - 2)
        } else {
            None
        };
        self.clamp_focus();
    }

    fn clamp_focus(&mut self) {
        let len = self.items().len();
        if self.focus >= len {
            self.focus = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_pages(pages: u32) -> PaginationState {
        let mut state = PaginationState::new(10);
        state.set_total_items(u64::from(pages) * 10);
        state
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let mut state = PaginationState::new(50);
        state.set_total_items(101);
        assert_eq!(state.total_pages(), 3);
        state.set_total_items(100);
        assert_eq!(state.total_pages(), 2);
    }

    #[test]
    fn test_zero_inputs_render_no_pages() {
        let state = PaginationState::new(50);
        assert_eq!(state.total_pages(), 0);
        assert!(state.visible_pages().is_empty());
        assert_eq!(
            state.items(),
            vec![
                PageItem::Previous { enabled: false },
                PageItem::Next { enabled: false }
            ]
        );

        let mut zero_size = PaginationState::new(0);
        zero_size.set_total_items(500);
        assert_eq!(zero_size.total_pages(), 0);
        assert!(zero_size.visible_pages().is_empty());
    }

    #[test]
    fn test_up_to_eight_pages_lists_every_page() {
        for pages in 1..=8 {
            let state = with_pages(pages);
            assert_eq!(state.visible_pages(), (1..=pages).collect::<Vec<_>>());
            assert!(!state.items().contains(&PageItem::Ellipsis));
        }
    }

    #[test]
    fn test_more_than_eight_pages_compresses() {
        let state = with_pages(20);
        assert_eq!(state.visible_pages(), vec![1, 2, 3, 4, 17, 18, 19, 20]);
        let items = state.items();
        assert_eq!(items[5], PageItem::Ellipsis);
        assert_eq!(
            items.iter().filter(|i| **i == PageItem::Ellipsis).count(),
            1
        );

        let nine = with_pages(9);
        assert_eq!(nine.visible_pages(), vec![1, 2, 3, 4, 6, 7, 8, 9]);
    }

    #[test]
    fn test_current_page_is_highlighted() {
        let mut state = with_pages(5);
        state.select(3);
        let active: Vec<u32> = state
            .items()
            .into_iter()
            .filter_map(|i| match i {
                PageItem::Page { number, active } if active => Some(number),
                _ => None,
            })
            .collect();
        assert_eq!(active, vec![3]);
    }

    #[test]
    fn test_previous_and_next_disable_at_bounds() {
        let mut state = with_pages(3);
        assert_eq!(state.previous(), None);
        assert_eq!(state.items()[0], PageItem::Previous { enabled: false });

        assert_eq!(state.next(), Some(2));
        assert_eq!(state.next(), Some(3));
        assert_eq!(state.next(), None);
        assert_eq!(state.current_page(), 3);
        assert_eq!(
            *state.items().last().unwrap(),
            PageItem::Next { enabled: false }
        );
        assert_eq!(state.previous(), Some(2));
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut state = with_pages(3);
        assert_eq!(state.select(0), None);
        assert_eq!(state.select(4), None);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.select(2), Some(2));
    }

    #[test]
    fn test_inner_page_shows_window_starting_two_before() {
        let mut state = with_pages(20);
        state.set_page(10);
        assert_eq!(state.window_start(), Some(8));
        assert_eq!(state.visible_pages(), vec![1, 8, 9, 10, 11, 12, 20]);

        let items = state.items();
        assert!(items.contains(&PageItem::ShiftLeft));
        assert!(items.contains(&PageItem::ShiftRight));
    }

    #[test]
    fn test_expand_centers_on_inner_current_page() {
        let mut state = with_pages(20);
        state.set_page(10);
        // Collapse by shifting off the end, then expand again
        state.shift_right();
        state.shift_right();
        assert!(!state.is_expanded());
        assert_eq!(state.current_page(), 10);

        state.expand();
        assert_eq!(state.window_start(), Some(8));
    }

    #[test]
    fn test_expand_from_edge_page_centers_on_range() {
        let mut state = with_pages(20);
        assert_eq!(state.current_page(), 1);
        state.expand();
        assert_eq!(state.window_start(), Some(8));
        assert_eq!(state.visible_pages(), vec![1, 8, 9, 10, 11, 12, 20]);
    }

    #[test]
    fn test_expand_requires_compressed_layout() {
        let mut state = with_pages(8);
        state.expand();
        assert!(!state.is_expanded());
    }

    #[test]
    fn test_shift_right_moves_then_collapses() {
        let mut state = with_pages(20);
        state.expand();
        state.shift_right();
        assert_eq!(state.window_start(), Some(13));
        state.shift_right();
        assert_eq!(state.window_start(), None);
        assert_eq!(state.visible_pages(), vec![1, 2, 3, 4, 17, 18, 19, 20]);
    }

    #[test]
    fn test_shift_left_moves_then_collapses() {
        let mut state = with_pages(20);
        state.expand();
        state.shift_left();
        assert_eq!(state.window_start(), Some(3));
        state.shift_left();
        assert_eq!(state.window_start(), None);
    }

    #[test]
    fn test_window_at_start_has_no_left_controls() {
        let mut state = with_pages(30);
        state.expand();
        state.shift_left();
        state.shift_left();
        state.expand();
        assert_eq!(state.window_start(), Some(13));
        state.shift_left();
        state.shift_left();
        assert_eq!(state.window_start(), Some(3));
        let items = state.items();
        assert!(items.contains(&PageItem::ShiftLeft));
        assert_eq!(state.visible_pages(), vec![1, 3, 4, 5, 6, 7, 30]);
    }

    #[test]
    fn test_selecting_edge_page_collapses_window() {
        let mut state = with_pages(20);
        state.set_page(10);
        assert!(state.is_expanded());
        state.select(1);
        assert!(!state.is_expanded());
        state.select(17);
        assert!(!state.is_expanded());
        state.select(16);
        assert_eq!(state.window_start(), Some(14));
    }

    #[test]
    fn test_total_shrink_clamps_current_page() {
        let mut state = with_pages(20);
        state.select(15);
        state.set_total_items(30);
        assert_eq!(state.current_page(), 3);
    }

    #[test]
    fn test_offset_follows_current_page() {
        let mut state = PaginationState::new(50);
        state.set_total_items(500);
        assert_eq!(state.offset(), 0);
        state.select(3);
        assert_eq!(state.offset(), 100);
    }

    #[test]
    fn test_focus_activation_walks_controls() {
        let mut state = with_pages(20);
        state.focus_current();
        assert_eq!(
            state.focused_item(),
            Some(PageItem::Page {
                number: 1,
                active: true
            })
        );

        // Move to the ellipsis (Prev, 1, 2, 3, 4, ...)
        for _ in 0..4 {
            state.focus_right();
        }
        assert_eq!(state.focused_item(), Some(PageItem::Ellipsis));
        assert_eq!(state.activate_focused(), None);
        assert!(state.is_expanded());

        state.focus_current();
        state.focus_right();
        assert_eq!(state.activate_focused(), Some(2));
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn test_focus_never_leaves_item_row() {
        let mut state = with_pages(2);
        for _ in 0..10 {
            state.focus_right();
        }
        assert_eq!(state.focus(), state.items().len() - 1);
        for _ in 0..10 {
            state.focus_left();
        }
        assert_eq!(state.focus(), 0);
    }
}
