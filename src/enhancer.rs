//! The orchestrating component instance.
//!
//! An [`Enhancer`] attaches to a [`TableDocument`], owns the mutable search,
//! sort, and page state, and runs the fixed filter -> paginate -> stripe
//! pipeline after every state mutation. Interactions arrive either through
//! the typed public operations or as [`UiEvent`]s dispatched by the host;
//! search input additionally passes through a per-field debounce gate.

use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use tracing::{debug, trace, warn};

use crate::core::filter_set::{FilterKey, FilterSet};
use crate::core::fuzzy::FuzzyMatcher;
use crate::core::pagination::{paginate, PageLayout};
use crate::core::sequencer;
use crate::data::document::{Direction, SearchMode, SortSpec, SortState, TableDocument};
use crate::data::type_inference::detect_column_type;
use crate::debouncer::DebouncedQuery;
use crate::i18n::{self, TranslationBundle};
use crate::options::Options;
use crate::plugin::{Capabilities, Plugin};
use crate::ui::controls::{
    Controls, InfoLabel, PageLengthSelect, PaginationBar, SearchCell, SearchInput, SearchRow,
    SearchWidget,
};
use crate::ui::events::{ListenerRegistry, ListenerTarget, UiEvent};

const DEFAULT_PAGE_LENGTH: usize = 10;

pub struct Enhancer {
    document: TableDocument,
    translations: TranslationBundle,
    matcher: FuzzyMatcher,
    filters: FilterSet,

    page_length: usize,
    current_page: usize,
    select_item_page: Vec<usize>,
    page_window_radius: usize,

    info: bool,
    ordering: bool,
    paging: bool,
    searching: bool,
    column_search: bool,
    row_odd_even: bool,
    debounce_delai: u64,

    debouncers: HashMap<FilterKey, DebouncedQuery>,
    controls: Controls,
    listeners: ListenerRegistry,
    capabilities: Capabilities,
    last_layout: PageLayout,
    destroyed: bool,
}

impl Enhancer {
    /// Attach to a document: build the enabled control surfaces, register
    /// their listeners, apply the initial order in sequence, and paginate.
    ///
    /// Fails hard on a malformed initial sort specification; there is no
    /// safe default ordering to fall back to silently.
    pub fn new(document: TableDocument, options: Options) -> Result<Self> {
        let translations = TranslationBundle::from_options(&options);

        let page_length = options
            .page_length
            .or_else(|| {
                document
                    .attribute("data-page-length")
                    .and_then(|v| v.parse().ok())
            })
            .unwrap_or(DEFAULT_PAGE_LENGTH)
            .max(1);

        let mut select_item_page = options.select_item_page.clone();
        if !select_item_page.contains(&page_length) {
            select_item_page.push(page_length);
            select_item_page.sort_unstable();
        }

        let initial_order = resolve_initial_order(&document, &options)?;

        let mut enhancer = Self {
            matcher: FuzzyMatcher::new(options.temperature),
            translations,
            filters: FilterSet::new(),
            page_length,
            current_page: 1,
            select_item_page,
            page_window_radius: options.page_window_radius,
            info: options.info,
            ordering: options.ordering,
            paging: options.paging,
            searching: options.searching,
            column_search: options.column_search,
            row_odd_even: options.row_odd_even,
            debounce_delai: options.debounce_delai,
            debouncers: HashMap::new(),
            controls: Controls::default(),
            listeners: ListenerRegistry::new(),
            capabilities: Capabilities::new(),
            last_layout: paginate(0, 1, 1, options.page_window_radius),
            destroyed: false,
            document,
        };

        enhancer.build_controls();

        for spec in initial_order {
            enhancer.sort_table(spec.column, spec.direction)?;
        }

        enhancer.run_pipeline();
        Ok(enhancer)
    }

    fn build_controls(&mut self) {
        if self.searching {
            self.controls.search_input = Some(SearchInput::new(
                self.translations.lookup(i18n::SEARCH_PLACEHOLDER),
            ));
            self.listeners.bind(ListenerTarget::SearchInput);
            self.debouncers
                .insert(FilterKey::Global, DebouncedQuery::new(self.debounce_delai));
        }

        if self.ordering {
            for column in 0..self.document.column_count() {
                self.listeners.bind(ListenerTarget::Header(column));
            }
        }

        if self.column_search {
            let mut row = SearchRow::default();
            for column in 0..self.document.column_count() {
                let mode = self
                    .document
                    .header(column)
                    .map(|h| h.search_mode)
                    .unwrap_or_default();
                let widget = match mode {
                    SearchMode::None => continue,
                    SearchMode::Input => SearchWidget::Input {
                        value: String::new(),
                    },
                    SearchMode::Combobox => SearchWidget::Combobox {
                        all_label: self.translations.lookup(i18n::SEARCH_ALL).to_string(),
                        values: self.document.unique_values_for_column(column),
                        selected: String::new(),
                    },
                };
                row.cells.push(SearchCell { column, widget });
                self.listeners.bind(ListenerTarget::ColumnSearchCell(column));
                self.debouncers.insert(
                    FilterKey::Column(column),
                    DebouncedQuery::new(self.debounce_delai),
                );
            }
            self.controls.search_row = Some(row);
        }

        if self.info {
            self.controls.info_label = Some(InfoLabel::default());
        }

        if self.paging {
            self.controls.page_length_select = Some(PageLengthSelect {
                prefix: self.translations.lookup(i18n::PAGE_LENGTH_PREFIX).to_string(),
                suffix: self.translations.lookup(i18n::PAGE_LENGTH_SUFFIX).to_string(),
                choices: self.select_item_page.clone(),
                selected: self.page_length,
            });
            self.listeners.bind(ListenerTarget::PageLengthSelect);

            let slots = 2 * self.page_window_radius + 1;
            self.controls.pagination = Some(PaginationBar::new(
                self.translations.lookup(i18n::PAGE_PREVIOUS),
                self.translations.lookup(i18n::PAGE_NEXT),
                slots,
            ));
            for slot in 0..slots {
                self.listeners.bind(ListenerTarget::PageButton(slot));
            }
            self.listeners.bind(ListenerTarget::PrevButton);
            self.listeners.bind(ListenerTarget::NextButton);
        }
    }

    /// Global (`column = None`) or per-column search. Applies immediately,
    /// without the debounce gate; a blank query clears that key's
    /// constraint. Resets to page 1 and repaginates.
    pub fn search_table(&mut self, column: Option<usize>, query: &str) {
        if self.destroyed {
            return;
        }

        let key = match column {
            Some(index) => FilterKey::Column(index),
            None => FilterKey::Global,
        };
        self.filters.apply(key, query);
        debug!(
            target: "enhancer",
            "filter {:?} <- {:?}, {} active entries",
            key,
            query,
            self.filters.len()
        );

        self.reflect_query_in_controls(key, query);
        self.evaluate_filters();
        self.current_page = 1;
        self.run_pipeline();
    }

    /// Re-evaluate every row against the active filter set.
    fn evaluate_filters(&mut self) {
        let filters = &self.filters;
        let matcher = &self.matcher;

        let mut classified: Vec<(usize, bool)> = Vec::with_capacity(self.document.row_count());
        for row in self.document.rows_mut().iter_mut() {
            let matched = filters.row_matches(matcher, |filter_key| match filter_key {
                FilterKey::Global => {
                    let joined: Vec<&str> =
                        row.cells.iter().map(|cell| cell.search_value()).collect();
                    joined.join(" ").trim().to_lowercase()
                }
                FilterKey::Column(index) => row
                    .cell(index)
                    .map(|cell| cell.search_value().trim().to_lowercase())
                    .unwrap_or_default(),
            });
            trace!(target: "enhancer", "row {} matched={}", row.doc_position, matched);
            row.matched = matched;
            classified.push((row.doc_position, matched));
        }

        for (position, matched) in classified {
            self.capabilities.notify_row_classified(position, matched);
        }
    }

    fn reflect_query_in_controls(&mut self, key: FilterKey, query: &str) {
        match key {
            FilterKey::Global => {
                if let Some(input) = &mut self.controls.search_input {
                    input.value = query.to_string();
                }
            }
            FilterKey::Column(index) => {
                if let Some(row) = &mut self.controls.search_row {
                    for cell in row.cells.iter_mut().filter(|c| c.column == index) {
                        match &mut cell.widget {
                            SearchWidget::Input { value } => *value = query.to_string(),
                            SearchWidget::Combobox { selected, .. } => {
                                *selected = query.to_string()
                            }
                        }
                    }
                }
            }
        }
    }

    /// Detect the column's type, stable-sort all rows (not just matched
    /// ones), update the header sort states, and repaginate.
    pub fn sort_table(&mut self, column: usize, direction: Direction) -> Result<()> {
        if self.destroyed {
            return Ok(());
        }
        if column >= self.document.column_count() {
            bail!("sort column {} out of bounds", column);
        }

        let column_type = detect_column_type(self.document.rows(), column);
        sequencer::sort_rows(self.document.rows_mut(), column, column_type, direction);

        // Activating one header resets every other header's stored state,
        // not just its indicator.
        for (index, header) in self.document.headers_mut().iter_mut().enumerate() {
            header.sort_state = if index == column {
                match direction {
                    Direction::Asc => SortState::Asc,
                    Direction::Desc => SortState::Desc,
                }
            } else {
                SortState::None
            };
        }

        self.run_pipeline();
        Ok(())
    }

    /// Jump to a page. Out-of-range pages are fenced by disabled navigation
    /// rather than forcibly reset.
    pub fn set_page(&mut self, page: usize) {
        if self.destroyed {
            return;
        }
        self.current_page = page.max(1);
        self.run_pipeline();
    }

    pub fn next_page(&mut self) {
        if self.destroyed || !self.last_layout.next_enabled {
            return;
        }
        self.current_page += 1;
        self.run_pipeline();
    }

    pub fn previous_page(&mut self) {
        if self.destroyed || !self.last_layout.prev_enabled {
            return;
        }
        self.current_page -= 1;
        self.run_pipeline();
    }

    /// Change the page size; resets to page 1 and recomputes.
    pub fn set_page_length(&mut self, page_length: usize) {
        if self.destroyed {
            return;
        }
        self.page_length = page_length.max(1);
        if !self.select_item_page.contains(&self.page_length) {
            self.select_item_page.push(self.page_length);
            self.select_item_page.sort_unstable();
        }
        if let Some(select) = &mut self.controls.page_length_select {
            select.choices = self.select_item_page.clone();
            select.selected = self.page_length;
        }
        self.current_page = 1;
        self.run_pipeline();
    }

    /// Handle an interaction event. Events whose target has no registered
    /// listener are ignored; after [`destroy`](Self::destroy) that is every
    /// event.
    pub fn dispatch(&mut self, event: UiEvent) {
        if self.destroyed || !self.listeners.is_bound(event.target()) {
            trace!(target: "enhancer", "ignoring event for unbound target {:?}", event.target());
            return;
        }

        match event {
            UiEvent::SearchInput(query) => {
                if let Some(input) = &mut self.controls.search_input {
                    input.value = query.clone();
                }
                if let Some(debouncer) = self.debouncers.get_mut(&FilterKey::Global) {
                    debouncer.push(query);
                }
            }
            UiEvent::ColumnSearchInput { column, query } => {
                self.reflect_query_in_controls(FilterKey::Column(column), &query);
                if let Some(debouncer) = self.debouncers.get_mut(&FilterKey::Column(column)) {
                    debouncer.push(query);
                }
            }
            UiEvent::HeaderClick(column) => {
                let direction = match self
                    .document
                    .header(column)
                    .map(|h| h.sort_state)
                    .unwrap_or_default()
                {
                    SortState::Asc => Direction::Desc,
                    _ => Direction::Asc,
                };
                if let Err(err) = self.sort_table(column, direction) {
                    warn!(target: "enhancer", "header click ignored: {}", err);
                }
            }
            UiEvent::PageButtonClick(slot) => {
                let target = self.controls.pagination.as_ref().and_then(|bar| {
                    bar.buttons
                        .get(slot)
                        .filter(|button| button.visible)
                        .map(|button| button.number)
                });
                if let Some(page) = target {
                    self.set_page(page);
                }
            }
            UiEvent::PrevClick => self.previous_page(),
            UiEvent::NextClick => self.next_page(),
            UiEvent::PageLengthChange(length) => self.set_page_length(length),
        }
    }

    /// Flush any debounced queries whose delay has elapsed. The host calls
    /// this from its idle loop; returns true when a search ran.
    pub fn poll_debounce(&mut self) -> bool {
        if self.destroyed {
            return false;
        }

        let ready: Vec<(FilterKey, String)> = self
            .debouncers
            .iter_mut()
            .filter_map(|(key, debouncer)| debouncer.take_ready().map(|query| (*key, query)))
            .collect();

        let ran = !ready.is_empty();
        for (key, query) in ready {
            match key {
                FilterKey::Global => self.search_table(None, &query),
                FilterKey::Column(index) => self.search_table(Some(index), &query),
            }
        }
        ran
    }

    /// The full filter -> paginate -> stripe pass. Runs after every state
    /// mutation; never partially.
    fn run_pipeline(&mut self) {
        let matched_count = self.document.matched_count();

        let layout = if self.paging {
            paginate(
                matched_count,
                self.page_length,
                self.current_page,
                self.page_window_radius,
            )
        } else {
            // No paging: one page spanning every matched row
            paginate(matched_count, matched_count.max(1), 1, self.page_window_radius)
        };
        debug!(
            target: "enhancer",
            "pipeline: {} matched, page {}/{}, slice {}..{}",
            matched_count,
            layout.active_page,
            layout.total_pages,
            layout.start,
            layout.end
        );

        let mut matched_index = 0usize;
        for row in self.document.rows_mut().iter_mut() {
            if row.matched {
                row.visible = layout.contains(matched_index);
                matched_index += 1;
            } else {
                row.visible = false;
            }
        }

        if self.row_odd_even {
            sequencer::restripe(self.document.rows_mut());
        } else {
            sequencer::clear_stripes(self.document.rows_mut());
        }

        if let Some(label) = &mut self.controls.info_label {
            label.text = self
                .translations
                .format_info(layout.start + 1, layout.end, matched_count);
        }
        if let Some(bar) = &mut self.controls.pagination {
            bar.apply_layout(&layout);
        }

        self.capabilities.notify_re_render(&layout);
        self.last_layout = layout;
    }

    /// Install a plugin against the capability surface. The plugin value is
    /// dropped afterwards; hooks own whatever state they need.
    pub fn use_plugin<P: Plugin>(&mut self, mut plugin: P) {
        plugin.install(&mut self.capabilities);
    }

    /// Revert every structural addition, detach every registered listener,
    /// and restore all rows to visible with flags and stripes cleared.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }

        self.listeners.release_all();
        self.controls = Controls::default();
        self.capabilities.clear();
        self.filters.clear();
        self.debouncers.clear();

        for row in self.document.rows_mut().iter_mut() {
            row.visible = true;
            row.matched = true;
            row.stripe = None;
        }
        for header in self.document.headers_mut() {
            header.sort_state = SortState::None;
        }

        self.destroyed = true;
        debug!(target: "enhancer", "destroyed");
    }

    pub fn document(&self) -> &TableDocument {
        &self.document
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn page_layout(&self) -> &PageLayout {
        &self.last_layout
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_length(&self) -> usize {
        self.page_length
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Document positions of the currently visible rows, in display order.
    pub fn visible_row_positions(&self) -> Vec<usize> {
        self.document
            .rows()
            .iter()
            .filter(|row| row.visible)
            .map(|row| row.doc_position)
            .collect()
    }
}

/// Resolve the startup sort sequence: the inline option wins, else the
/// document's `data-order` attribute (JSON pairs of column index and
/// direction keyword). Malformed specifications are a hard failure.
fn resolve_initial_order(document: &TableDocument, options: &Options) -> Result<Vec<SortSpec>> {
    let specs = match &options.order {
        Some(specs) => specs.clone(),
        None => match document.attribute("data-order") {
            Some(raw) => parse_order_attribute(raw)?,
            None => Vec::new(),
        },
    };

    for spec in &specs {
        if spec.column >= document.column_count() {
            bail!(
                "initial order references column {} but the table has {} columns",
                spec.column,
                document.column_count()
            );
        }
    }
    Ok(specs)
}

fn parse_order_attribute(raw: &str) -> Result<Vec<SortSpec>> {
    let pairs: Vec<(usize, String)> =
        serde_json::from_str(raw).context("parsing data-order attribute")?;

    pairs
        .into_iter()
        .map(|(column, keyword)| {
            let direction = Direction::parse(&keyword)
                .with_context(|| format!("unknown sort direction '{}'", keyword))?;
            Ok(SortSpec::new(column, direction))
        })
        .collect()
}
