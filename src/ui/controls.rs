//! The structural additions the enhancer builds around the table: global
//! search box, per-column search row, result-count label, page-length
//! select, and the pagination bar. These are plain state structs a host
//! renders however it likes; `destroy` drops them wholesale.

use crate::core::pagination::PageLayout;

/// The global search box.
#[derive(Debug, Clone)]
pub struct SearchInput {
    pub placeholder: String,
    pub value: String,
}

impl SearchInput {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            value: String::new(),
        }
    }
}

/// Widget in one column's search cell.
#[derive(Debug, Clone)]
pub enum SearchWidget {
    Input {
        value: String,
    },
    /// A select over the column's distinct values; `all_label` is the first,
    /// empty-valued entry that clears the filter.
    Combobox {
        all_label: String,
        values: Vec<String>,
        selected: String,
    },
}

/// One cell of the per-column search row.
#[derive(Debug, Clone)]
pub struct SearchCell {
    pub column: usize,
    pub widget: SearchWidget,
}

/// The search row appended to the table head. Only columns with a search
/// hint get a cell.
#[derive(Debug, Clone, Default)]
pub struct SearchRow {
    pub cells: Vec<SearchCell>,
}

/// The result-count label.
#[derive(Debug, Clone, Default)]
pub struct InfoLabel {
    pub text: String,
}

/// The rows-per-page select.
#[derive(Debug, Clone)]
pub struct PageLengthSelect {
    pub prefix: String,
    pub suffix: String,
    pub choices: Vec<usize>,
    pub selected: usize,
}

/// One numbered page button. Buttons are a fixed pool; each paginate pass
/// retargets their numbers and hides the ones past the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageButton {
    pub number: usize,
    pub visible: bool,
    pub active: bool,
}

/// Previous/next buttons plus the numbered page-button pool.
#[derive(Debug, Clone)]
pub struct PaginationBar {
    pub prev_label: String,
    pub next_label: String,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub buttons: Vec<PageButton>,
}

impl PaginationBar {
    pub fn new(prev_label: impl Into<String>, next_label: impl Into<String>, slots: usize) -> Self {
        Self {
            prev_label: prev_label.into(),
            next_label: next_label.into(),
            prev_enabled: false,
            next_enabled: false,
            buttons: vec![
                PageButton {
                    number: 0,
                    visible: false,
                    active: false,
                };
                slots
            ],
        }
    }

    /// Retarget the control to a freshly computed layout.
    pub fn apply_layout(&mut self, layout: &PageLayout) {
        self.prev_enabled = layout.prev_enabled;
        self.next_enabled = layout.next_enabled;

        for (slot, button) in self.buttons.iter_mut().enumerate() {
            match layout.page_numbers.get(slot) {
                Some(&number) => {
                    button.number = number;
                    button.visible = true;
                    button.active = number == layout.active_page;
                }
                None => {
                    button.number = 0;
                    button.visible = false;
                    button.active = false;
                }
            }
        }
    }
}

/// Everything the enhancer has added around the table. Fields are `None`
/// when the matching option block is disabled.
#[derive(Debug, Clone, Default)]
pub struct Controls {
    pub search_input: Option<SearchInput>,
    pub search_row: Option<SearchRow>,
    pub info_label: Option<InfoLabel>,
    pub page_length_select: Option<PageLengthSelect>,
    pub pagination: Option<PaginationBar>,
}

impl Controls {
    /// True when nothing has been added (the post-`destroy` state).
    pub fn is_empty(&self) -> bool {
        self.search_input.is_none()
            && self.search_row.is_none()
            && self.info_label.is_none()
            && self.page_length_select.is_none()
            && self.pagination.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pagination::paginate;

    #[test]
    fn test_pagination_bar_retargets_buttons() {
        let mut bar = PaginationBar::new("prev", "next", 5);
        bar.apply_layout(&paginate(100, 10, 5, 2));

        let numbers: Vec<usize> = bar.buttons.iter().map(|b| b.number).collect();
        assert_eq!(numbers, vec![3, 4, 5, 6, 7]);
        assert!(bar.buttons.iter().all(|b| b.visible));
        assert!(bar.buttons[2].active);
        assert!(bar.prev_enabled && bar.next_enabled);
    }

    #[test]
    fn test_buttons_past_the_window_are_hidden() {
        let mut bar = PaginationBar::new("prev", "next", 5);
        bar.apply_layout(&paginate(25, 10, 1, 2));

        assert!(bar.buttons[0].visible && bar.buttons[2].visible);
        assert!(!bar.buttons[3].visible && !bar.buttons[4].visible);
        assert!(bar.buttons[0].active);
        assert!(!bar.prev_enabled);
    }

    #[test]
    fn test_empty_layout_hides_everything() {
        let mut bar = PaginationBar::new("prev", "next", 5);
        bar.apply_layout(&paginate(0, 10, 1, 2));
        assert!(bar.buttons.iter().all(|b| !b.visible));
        assert!(!bar.prev_enabled && !bar.next_enabled);
    }

    #[test]
    fn test_controls_is_empty() {
        let mut controls = Controls::default();
        assert!(controls.is_empty());
        controls.info_label = Some(InfoLabel::default());
        assert!(!controls.is_empty());
    }
}
