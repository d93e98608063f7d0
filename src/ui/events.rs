//! Interaction events and scoped listener bookkeeping.
//!
//! Every binding the enhancer makes is acquired through the registry, so
//! teardown is one `release_all` call instead of a manually mirrored list.
//! Events arriving for an unbound target are ignored; after `destroy` that
//! is every event.

use std::collections::HashSet;

/// Where an interaction can originate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    SearchInput,
    ColumnSearchCell(usize),
    Header(usize),
    PageButton(usize),
    PrevButton,
    NextButton,
    PageLengthSelect,
}

/// A discrete interaction, as delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Keystroke in the global search box (debounced).
    SearchInput(String),
    /// Keystroke or selection in a column's search cell (debounced).
    ColumnSearchInput { column: usize, query: String },
    /// Click on a column header.
    HeaderClick(usize),
    /// Click on a numbered page button.
    PageButtonClick(usize),
    PrevClick,
    NextClick,
    /// New page size picked in the page-length select.
    PageLengthChange(usize),
}

impl UiEvent {
    /// The binding this event requires to be handled.
    pub fn target(&self) -> ListenerTarget {
        match self {
            UiEvent::SearchInput(_) => ListenerTarget::SearchInput,
            UiEvent::ColumnSearchInput { column, .. } => ListenerTarget::ColumnSearchCell(*column),
            UiEvent::HeaderClick(column) => ListenerTarget::Header(*column),
            UiEvent::PageButtonClick(slot) => ListenerTarget::PageButton(*slot),
            UiEvent::PrevClick => ListenerTarget::PrevButton,
            UiEvent::NextClick => ListenerTarget::NextButton,
            UiEvent::PageLengthChange(_) => ListenerTarget::PageLengthSelect,
        }
    }
}

/// Scoped registry of active bindings.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    bound: HashSet<ListenerTarget>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, target: ListenerTarget) {
        self.bound.insert(target);
    }

    pub fn is_bound(&self, target: ListenerTarget) -> bool {
        self.bound.contains(&target)
    }

    pub fn len(&self) -> usize {
        self.bound.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }

    /// Detach everything in one pass.
    pub fn release_all(&mut self) {
        self.bound.clear();
    }
}
