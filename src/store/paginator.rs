//! Fixed-size page window over the filtered view.
//!
//! The paginator only tracks a cursor. It never owns the records: every
//! operation takes the current filtered slice so the window can never point
//! into a stale copy of the data.

/// Default number of cards per page.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Page cursor over a filtered sequence.
///
/// `start` is always a multiple of `page_size`. Callers must [`reset`] the
/// paginator whenever the filtered sequence is replaced (new fetch, new
/// query) and never otherwise.
///
/// [`reset`]: Paginator::reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    start: usize,
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    /// Creates a paginator at the first page. A `page_size` of zero is
    /// raised to one.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            start: 0,
            page_size: page_size.max(1),
        }
    }

    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Moves the window back to the first page.
    pub fn reset(&mut self) {
        self.start = 0;
    }

    /// Returns the records of the current page.
    ///
    /// ```
    /// use authorgrid::store::Paginator;
    ///
    /// let items: Vec<u32> = (0..5).collect();
    /// let pager = Paginator::new(8);
    /// assert_eq!(pager.current_page(&items), &[0, 1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn current_page<'a, T>(&self, filtered: &'a [T]) -> &'a [T] {
        let begin = self.start.min(filtered.len());
        let end = self.start.saturating_add(self.page_size).min(filtered.len());
        &filtered[begin..end]
    }

    /// Advances to the next page and returns it. The page may be empty when
    /// the window moves past the end.
    pub fn advance<'a, T>(&mut self, filtered: &'a [T]) -> &'a [T] {
        self.start = self.start.saturating_add(self.page_size);
        self.current_page(filtered)
    }

    /// `true` iff pages remain after the current one.
    ///
    /// ```
    /// use authorgrid::store::Paginator;
    ///
    /// let mut pager = Paginator::new(8);
    /// let items = [0u8; 16];
    /// assert!(pager.has_more(items.len()));
    /// pager.advance(&items);
    /// assert!(!pager.has_more(items.len()));
    /// ```
    #[must_use]
    pub const fn has_more(&self, filtered_len: usize) -> bool {
        self.start.saturating_add(self.page_size) < filtered_len
    }

    /// Number of records covered by the first page through the current one.
    #[must_use]
    pub fn visible_end(&self, filtered_len: usize) -> usize {
        self.start.saturating_add(self.page_size).min(filtered_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_then_current_page_starts_at_zero() {
        let items: Vec<usize> = (0..20).collect();
        let mut pager = Paginator::new(8);
        pager.advance(&items);
        pager.reset();

        assert_eq!(pager.current_page(&items), &items[..8]);

        let short: Vec<usize> = (0..3).collect();
        assert_eq!(pager.current_page(&short).len(), 3);
        assert!(pager.current_page::<usize>(&[]).is_empty());
    }

    #[test]
    fn exact_multiple_disables_after_two_pages() {
        let items: Vec<usize> = (0..16).collect();
        let mut pager = Paginator::new(8);

        assert!(pager.has_more(items.len()));
        let second = pager.advance(&items);
        assert_eq!(second, &items[8..16]);
        assert!(!pager.has_more(items.len()));
        assert_eq!(pager.visible_end(items.len()), 16);
    }

    #[test]
    fn advance_past_end_yields_empty_page() {
        let items: Vec<usize> = (0..9).collect();
        let mut pager = Paginator::new(8);

        assert_eq!(pager.advance(&items), &[8]);
        assert!(pager.advance(&items).is_empty());
        assert_eq!(pager.start() % pager.page_size(), 0);
    }

    #[test]
    fn zero_page_size_is_clamped() {
        assert_eq!(Paginator::new(0).page_size(), 1);
    }
}
