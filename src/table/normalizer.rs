use crate::table::cell::Cell;
use crate::table::Row;
use std::cmp::Ordering;

/// Reconciles one data row's length against the header-derived column count.
///
/// Short rows are padded with empty text cells up to the column count. Long
/// rows keep their first `column_count - 1` cells and fold everything from
/// there on into a single comma-joined text cell, so no data is dropped when
/// a row carries more fields than the header anticipated. The join character
/// is always a comma even for semicolon-separated sources; changing it would
/// silently alter previously exported file contents.
///
/// Pure function of row length; cell types are never inspected. Callers run
/// it exactly once per table, after parsing and before classification.
pub(crate) fn normalize_row(mut row: Row, column_count: usize) -> Row {
    match row.len().cmp(&column_count) {
        Ordering::Less => {
            row.resize(column_count, Cell::Text(String::new()));
            row
        }
        Ordering::Greater => {
            let overflow = row.split_off(column_count - 1);
            let merged = overflow
                .iter()
                .map(Cell::to_string)
                .collect::<Vec<_>>()
                .join(",");
            row.push(Cell::Text(merged));
            row
        }
        Ordering::Equal => row,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> Cell {
        Cell::Text(value.to_owned())
    }

    #[test]
    fn short_row_is_padded_to_width() {
        let row = normalize_row(vec![text("a")], 3);
        assert_eq!(row, vec![text("a"), text(""), text("")]);
    }

    #[test]
    fn long_row_merges_overflow_into_last_column() {
        let row = normalize_row(vec![text("a"), text("b"), text("c"), text("d")], 2);
        assert_eq!(row, vec![text("a"), text("b,c,d")]);
    }

    #[test]
    fn overflow_merge_renders_numeric_cells() {
        let row = normalize_row(vec![text("a"), Cell::Number(1.5), Cell::Number(2.0)], 2);
        assert_eq!(row, vec![text("a"), text("1.5,2")]);
    }

    #[test]
    fn exact_width_is_untouched() {
        let row = vec![text("a"), text("b")];
        assert_eq!(normalize_row(row.clone(), 2), row);
    }

    #[test]
    fn five_fields_against_three_columns() {
        let row = normalize_row(
            vec![text("a"), text("b"), text("c"), text("d"), text("e")],
            3,
        );
        assert_eq!(row, vec![text("a"), text("b"), text("c,d,e")]);
    }
}
