use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::type_inference::ColumnType;

/// Sort direction requested for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    /// Parse a direction keyword as it appears in a document attribute.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "asc" => Some(Direction::Asc),
            "desc" => Some(Direction::Desc),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Asc => write!(f, "asc"),
            Direction::Desc => write!(f, "desc"),
        }
    }
}

/// A single sort request: which column, which way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: usize,
    pub direction: Direction,
}

impl SortSpec {
    pub fn new(column: usize, direction: Direction) -> Self {
        Self { column, direction }
    }
}

/// Per-header sort indicator state. Exactly one header is non-`None` at a
/// time; activating a header resets all the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortState {
    #[default]
    None,
    Asc,
    Desc,
}

/// Search widget requested for a column through its `data-search` hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    None,
    Input,
    Combobox,
}

impl SearchMode {
    pub fn parse(value: &str) -> Self {
        match value {
            "input" => SearchMode::Input,
            "combobox" => SearchMode::Combobox,
            _ => SearchMode::None,
        }
    }
}

/// A header cell: the column label plus the per-column hints the enhancer
/// consumes.
#[derive(Debug, Clone)]
pub struct HeaderCell {
    pub label: String,
    pub search_mode: SearchMode,
    pub sort_state: SortState,
}

impl HeaderCell {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            search_mode: SearchMode::None,
            sort_state: SortState::None,
        }
    }

    pub fn with_search_mode(mut self, mode: SearchMode) -> Self {
        self.search_mode = mode;
        self
    }
}

/// A body cell: the displayed text plus an optional override value used for
/// both sort comparison and search matching, and an optional explicit type
/// hint.
#[derive(Debug, Clone, Default)]
pub struct Cell {
    pub text: String,
    pub override_value: Option<String>,
    pub type_hint: Option<ColumnType>,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            override_value: None,
            type_hint: None,
        }
    }

    pub fn with_override(mut self, value: impl Into<String>) -> Self {
        self.override_value = Some(value.into());
        self
    }

    pub fn with_type_hint(mut self, hint: ColumnType) -> Self {
        self.type_hint = Some(hint);
        self
    }

    /// The comparable value for this cell: the override if present, else the
    /// displayed text, trimmed.
    pub fn sort_value(&self) -> &str {
        match &self.override_value {
            Some(v) => v.as_str(),
            None => self.text.trim(),
        }
    }

    /// The searchable value for this cell: the override if present, else the
    /// displayed text.
    pub fn search_value(&self) -> &str {
        match &self.override_value {
            Some(v) => v.as_str(),
            None => self.text.as_str(),
        }
    }
}

/// Stripe classification assigned to visible rows in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stripe {
    Odd,
    Even,
}

/// A body row. `doc_position` is the row's position in the original,
/// untouched document order and is never reassigned; `visible` and `matched`
/// are the two transient flags the enhancer owns and recomputes on every
/// pipeline pass.
#[derive(Debug, Clone)]
pub struct Row {
    pub cells: Vec<Cell>,
    pub doc_position: usize,
    pub visible: bool,
    pub matched: bool,
    pub stripe: Option<Stripe>,
}

impl Row {
    pub fn new(doc_position: usize, cells: Vec<Cell>) -> Self {
        Self {
            cells,
            doc_position,
            visible: true,
            matched: true,
            stripe: None,
        }
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }
}

/// The in-memory table document the enhancer is attached to. Stands in for
/// the external markup: header cells, body rows, and table-level `data-*`
/// attributes.
#[derive(Debug, Clone, Default)]
pub struct TableDocument {
    headers: Vec<HeaderCell>,
    rows: Vec<Row>,
    attributes: HashMap<String, String>,
}

impl TableDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_header(&mut self, header: HeaderCell) -> &mut Self {
        self.headers.push(header);
        self
    }

    /// Append a body row; its document position is fixed at insertion time.
    pub fn add_row(&mut self, cells: Vec<Cell>) -> &mut Self {
        let position = self.rows.len();
        self.rows.push(Row::new(position, cells));
        self
    }

    /// Set a table-level attribute (`data-order`, `data-page-length`, ...).
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn headers(&self) -> &[HeaderCell] {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut [HeaderCell] {
        &mut self.headers
    }

    pub fn header(&self, index: usize) -> Option<&HeaderCell> {
        self.headers.get(index)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut Vec<Row> {
        &mut self.rows
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct trimmed display values for a column, in first-seen row order.
    /// Used to populate a combobox search cell.
    pub fn unique_values_for_column(&self, column: usize) -> Vec<String> {
        let mut values: Vec<String> = Vec::new();
        for row in &self.rows {
            if let Some(cell) = row.cell(column) {
                let value = cell.text.trim();
                if !values.iter().any(|v| v == value) {
                    values.push(value.to_string());
                }
            }
        }
        values
    }

    /// Rows currently visible, in display order.
    pub fn visible_rows(&self) -> Vec<&Row> {
        self.rows.iter().filter(|r| r.visible).collect()
    }

    /// Rows currently matched by the active filters, in display order.
    pub fn matched_rows(&self) -> Vec<&Row> {
        self.rows.iter().filter(|r| r.matched).collect()
    }

    pub fn matched_count(&self) -> usize {
        self.rows.iter().filter(|r| r.matched).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> TableDocument {
        let mut doc = TableDocument::new();
        doc.add_header(HeaderCell::new("Name"));
        doc.add_header(HeaderCell::new("City"));
        doc.add_row(vec![Cell::new("Alice"), Cell::new("Paris")]);
        doc.add_row(vec![Cell::new("Bob"), Cell::new("Lyon")]);
        doc.add_row(vec![Cell::new("Carol"), Cell::new("Paris")]);
        doc
    }

    #[test]
    fn test_doc_positions_are_fixed() {
        let doc = sample_document();
        let positions: Vec<usize> = doc.rows().iter().map(|r| r.doc_position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_cell_sort_value_prefers_override() {
        let cell = Cell::new(" 1,234 € ").with_override("1234");
        assert_eq!(cell.sort_value(), "1234");

        let plain = Cell::new("  Alice  ");
        assert_eq!(plain.sort_value(), "Alice");
    }

    #[test]
    fn test_search_value_does_not_trim_display_text() {
        let cell = Cell::new(" spaced ");
        assert_eq!(cell.search_value(), " spaced ");
    }

    #[test]
    fn test_unique_values_keep_first_seen_order() {
        let doc = sample_document();
        assert_eq!(doc.unique_values_for_column(1), vec!["Paris", "Lyon"]);
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!(Direction::parse("ASC"), Some(Direction::Asc));
        assert_eq!(Direction::parse("desc"), Some(Direction::Desc));
        assert_eq!(Direction::parse("sideways"), None);
    }
}
