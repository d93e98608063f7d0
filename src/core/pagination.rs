//! Pagination arithmetic: from a matched-row count, a page size, and a
//! requested page, decide the visible slice and the navigable page-number
//! window. Zero matched rows is a valid state, not an error.

/// Everything a pagination control surface needs for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub total_pages: usize,
    /// Raw start index of the requested page, `(page - 1) * page_length`.
    /// May point past the matched set when the page is out of range.
    pub start: usize,
    /// End of the visible slice, clipped to the matched-row count.
    pub end: usize,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    /// Navigable page numbers, a window centered on the active page and
    /// clipped to `[1, total_pages]`. Empty when there are no pages.
    pub page_numbers: Vec<usize>,
    pub active_page: usize,
}

impl PageLayout {
    /// True when `slice_index` (an index into the matched rows, in display
    /// order) falls on the visible page.
    pub fn contains(&self, slice_index: usize) -> bool {
        slice_index >= self.start && slice_index < self.end
    }

    pub fn visible_len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

/// Compute the layout for one page request. `radius` is the page-number
/// window radius around the active page.
pub fn paginate(
    matched_count: usize,
    page_length: usize,
    current_page: usize,
    radius: usize,
) -> PageLayout {
    let page_length = page_length.max(1);
    let current_page = current_page.max(1);

    let total_pages = matched_count.div_ceil(page_length);

    let start = (current_page - 1) * page_length;
    let end = (start + page_length).min(matched_count);

    let page_numbers = if total_pages == 0 {
        Vec::new()
    } else {
        let first = current_page.saturating_sub(radius).max(1);
        let last = (current_page + radius).min(total_pages);
        (first..=last).collect()
    };

    PageLayout {
        total_pages,
        start,
        end,
        prev_enabled: current_page > 1,
        next_enabled: current_page < total_pages,
        page_numbers,
        active_page: current_page,
    }
}
