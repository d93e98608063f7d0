//! Column type detection.
//!
//! A column is either numeric or textual for the purposes of sorting. The
//! classification is recomputed per sort request; callers must not assume
//! caching across calls, since row content can change between sorts.

use crate::data::document::Row;

/// Detected type for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Numeric,
    Text,
}

/// Explicit, total numeric parse used for both type detection and comparison.
///
/// Empty and whitespace-only strings are not numbers, and neither are NaN or
/// the infinities. This replaces the loose "empty string coerces to zero"
/// behavior that otherwise leaks into type detection.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(n),
        _ => None,
    }
}

/// Classify a column by scanning rows in document order.
///
/// A cell-level explicit type hint wins outright on the first row that
/// carries one. Otherwise the column is `Numeric` as soon as any sampled
/// value parses as a number; if no row ever produces a numeric-parsable
/// value, it is `Text`.
pub fn detect_column_type(rows: &[Row], column: usize) -> ColumnType {
    for row in rows {
        if let Some(cell) = row.cell(column) {
            if let Some(hint) = cell.type_hint {
                return hint;
            }
            if parse_number(cell.sort_value()).is_some() {
                return ColumnType::Numeric;
            }
        }
    }
    ColumnType::Text
}
