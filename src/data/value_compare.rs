//! Centralized value comparison for sorting.
//!
//! Numeric columns coerce both operands through [`parse_number`]; values that
//! do not parse order after every number, stably, and equal to each other.
//! Text columns compare case-insensitively with a case-sensitive tiebreak.

use std::cmp::Ordering;

use crate::data::document::Direction;
use crate::data::type_inference::{parse_number, ColumnType};

/// Compare two extracted cell values under the detected column type.
/// `Desc` reverses the outcome, not the operands' extraction.
pub fn compare_values(a: &str, b: &str, column_type: ColumnType, direction: Direction) -> Ordering {
    let ordering = match column_type {
        ColumnType::Numeric => compare_numeric(a, b),
        ColumnType::Text => compare_text(a, b),
    };

    match direction {
        Direction::Asc => ordering,
        Direction::Desc => ordering.reverse(),
    }
}

fn compare_numeric(a: &str, b: &str) -> Ordering {
    match (parse_number(a), parse_number(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        // Unparsable values sort after all numbers
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    let folded = a.to_lowercase().cmp(&b.to_lowercase());
    if folded == Ordering::Equal {
        a.cmp(b)
    } else {
        folded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_comparison() {
        assert_eq!(
            compare_values("2", "10", ColumnType::Numeric, Direction::Asc),
            Ordering::Less
        );
        assert_eq!(
            compare_values("2", "10", ColumnType::Numeric, Direction::Desc),
            Ordering::Greater
        );
        assert_eq!(
            compare_values("3.5", "3.5", ColumnType::Numeric, Direction::Asc),
            Ordering::Equal
        );
    }

    #[test]
    fn test_unparsable_numbers_sort_last() {
        assert_eq!(
            compare_values("99", "n/a", ColumnType::Numeric, Direction::Asc),
            Ordering::Less
        );
        assert_eq!(
            compare_values("n/a", "99", ColumnType::Numeric, Direction::Asc),
            Ordering::Greater
        );
        assert_eq!(
            compare_values("n/a", "tbd", ColumnType::Numeric, Direction::Asc),
            Ordering::Equal
        );
    }

    #[test]
    fn test_text_comparison_is_case_insensitive_first() {
        assert_eq!(
            compare_values("apple", "Banana", ColumnType::Text, Direction::Asc),
            Ordering::Less
        );
        // Same letters, different case: fall back to a deterministic tiebreak
        assert_ne!(
            compare_values("Apple", "apple", ColumnType::Text, Direction::Asc),
            Ordering::Equal
        );
    }

    #[test]
    fn test_desc_reverses_outcome() {
        assert_eq!(
            compare_values("a", "b", ColumnType::Text, Direction::Desc),
            Ordering::Greater
        );
    }
}
