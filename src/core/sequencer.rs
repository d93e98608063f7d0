//! Row sequencing: in-place stable reordering of the full row collection,
//! and odd/even restriping of the rows that survived filtering and paging.

use tracing::debug;

use crate::data::document::{Direction, Row, Stripe};
use crate::data::type_inference::ColumnType;
use crate::data::value_compare::compare_values;

/// Stable-sort all rows (not just matched ones) in place by the extracted
/// value at `column`. Rows with equal sort keys keep their relative order.
pub fn sort_rows(rows: &mut [Row], column: usize, column_type: ColumnType, direction: Direction) {
    debug!(
        target: "sequencer",
        "sorting {} rows on column {} ({:?}, {})",
        rows.len(),
        column,
        column_type,
        direction
    );

    rows.sort_by(|a, b| {
        let value_a = a.cell(column).map(|c| c.sort_value()).unwrap_or("");
        let value_b = b.cell(column).map(|c| c.sort_value()).unwrap_or("");
        compare_values(value_a, value_b, column_type, direction)
    });
}

/// Walk rows in final displayed order and assign alternating odd/even
/// classifications to the visible ones. Hidden rows carry no stripe and do
/// not advance the parity counter.
pub fn restripe(rows: &mut [Row]) {
    let mut visible_index = 0usize;
    for row in rows.iter_mut() {
        if row.visible {
            row.stripe = Some(if visible_index % 2 == 0 {
                Stripe::Odd
            } else {
                Stripe::Even
            });
            visible_index += 1;
        } else {
            row.stripe = None;
        }
    }
}

/// Drop every stripe classification, visible or not.
pub fn clear_stripes(rows: &mut [Row]) {
    for row in rows.iter_mut() {
        row.stripe = None;
    }
}
