// Sorting behavior through the public Enhancer surface: type detection,
// override values, stability, and the startup order sequence.

use tablekit::data::document::{Cell, Direction, HeaderCell, SortSpec, TableDocument};
use tablekit::{Enhancer, Options};

fn names(enhancer: &Enhancer) -> Vec<String> {
    enhancer
        .document()
        .rows()
        .iter()
        .map(|row| row.cells[0].text.clone())
        .collect()
}

#[test]
fn test_numeric_column_sorts_arithmetically() {
    let mut doc = TableDocument::new();
    doc.add_header(HeaderCell::new("Qty"));
    for qty in ["10", "2", "33", "4"] {
        doc.add_row(vec![Cell::new(qty)]);
    }

    let mut enhancer = Enhancer::new(doc, Options::default()).unwrap();
    enhancer.sort_table(0, Direction::Asc).unwrap();
    assert_eq!(names(&enhancer), vec!["2", "4", "10", "33"]);

    enhancer.sort_table(0, Direction::Desc).unwrap();
    assert_eq!(names(&enhancer), vec!["33", "10", "4", "2"]);
}

#[test]
fn test_text_column_sorts_lexicographically() {
    let mut doc = TableDocument::new();
    doc.add_header(HeaderCell::new("Name"));
    for name in ["pear", "Apple", "quince", "fig"] {
        doc.add_row(vec![Cell::new(name)]);
    }

    let mut enhancer = Enhancer::new(doc, Options::default()).unwrap();
    enhancer.sort_table(0, Direction::Asc).unwrap();
    assert_eq!(names(&enhancer), vec!["Apple", "fig", "pear", "quince"]);
}

#[test]
fn test_override_values_drive_numeric_sort() {
    let mut doc = TableDocument::new();
    doc.add_header(HeaderCell::new("Price"));
    doc.add_row(vec![Cell::new("1 200,00 €").with_override("1200")]);
    doc.add_row(vec![Cell::new("90,00 €").with_override("90")]);
    doc.add_row(vec![Cell::new("450,00 €").with_override("450")]);

    let mut enhancer = Enhancer::new(doc, Options::default()).unwrap();
    enhancer.sort_table(0, Direction::Asc).unwrap();
    assert_eq!(names(&enhancer), vec!["90,00 €", "450,00 €", "1 200,00 €"]);
}

#[test]
fn test_mixed_column_puts_unparsable_values_last() {
    let mut doc = TableDocument::new();
    doc.add_header(HeaderCell::new("Score"));
    for score in ["n/a", "3", "1", "pending"] {
        doc.add_row(vec![Cell::new(score)]);
    }

    let mut enhancer = Enhancer::new(doc, Options::default()).unwrap();
    enhancer.sort_table(0, Direction::Asc).unwrap();
    assert_eq!(names(&enhancer), vec!["1", "3", "n/a", "pending"]);
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    let mut doc = TableDocument::new();
    doc.add_header(HeaderCell::new("Name"));
    doc.add_header(HeaderCell::new("Group"));
    doc.add_row(vec![Cell::new("first"), Cell::new("b")]);
    doc.add_row(vec![Cell::new("second"), Cell::new("a")]);
    doc.add_row(vec![Cell::new("third"), Cell::new("b")]);

    let mut enhancer = Enhancer::new(doc, Options::default()).unwrap();
    enhancer.sort_table(1, Direction::Asc).unwrap();
    assert_eq!(names(&enhancer), vec!["second", "first", "third"]);
}

#[test]
fn test_initial_order_is_applied_in_sequence() {
    let mut doc = TableDocument::new();
    doc.add_header(HeaderCell::new("Name"));
    doc.add_header(HeaderCell::new("Group"));
    doc.add_row(vec![Cell::new("carol"), Cell::new("2")]);
    doc.add_row(vec![Cell::new("alice"), Cell::new("1")]);
    doc.add_row(vec![Cell::new("bob"), Cell::new("1")]);

    // Sort by name first, then by group: stability keeps the name order
    // inside each group.
    let options = Options {
        order: Some(vec![
            SortSpec::new(0, Direction::Asc),
            SortSpec::new(1, Direction::Asc),
        ]),
        ..Options::default()
    };
    let enhancer = Enhancer::new(doc, options).unwrap();
    assert_eq!(names(&enhancer), vec!["alice", "bob", "carol"]);
}

#[test]
fn test_sort_keeps_filtered_rows_hidden() {
    let mut doc = TableDocument::new();
    doc.add_header(HeaderCell::new("Name"));
    for name in ["delta", "alpha", "echo", "bravo"] {
        doc.add_row(vec![Cell::new(name)]);
    }

    let mut enhancer = Enhancer::new(doc, Options::default()).unwrap();
    enhancer.search_table(None, "a");
    // "echo" drops out
    assert_eq!(enhancer.visible_row_positions().len(), 3);

    enhancer.sort_table(0, Direction::Asc).unwrap();
    let visible: Vec<String> = enhancer
        .document()
        .rows()
        .iter()
        .filter(|row| row.visible)
        .map(|row| row.cells[0].text.clone())
        .collect();
    assert_eq!(visible, vec!["alpha", "bravo", "delta"]);
}

#[test]
fn test_sort_out_of_bounds_column_fails() {
    let mut doc = TableDocument::new();
    doc.add_header(HeaderCell::new("Name"));
    doc.add_row(vec![Cell::new("a")]);

    let mut enhancer = Enhancer::new(doc, Options::default()).unwrap();
    assert!(enhancer.sort_table(5, Direction::Asc).is_err());
}
