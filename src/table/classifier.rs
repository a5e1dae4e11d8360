use crate::table::cell::Cell;
use crate::table::Table;

/// Header terms forcing a column to stay text-formatted.
///
/// Identifier-like columns (badge numbers, document numbers) must never
/// receive the numeric display format even when every value in them parses
/// as a number. Matching is case-folded.
#[derive(Clone, Debug)]
pub struct ColumnExclusions {
    /// Exact header matches
    pub exact: Vec<String>,
    /// Substring header matches
    pub substrings: Vec<String>,
}

impl Default for ColumnExclusions {
    fn default() -> Self {
        Self {
            exact: vec!["matricola".to_owned()],
            substrings: vec!["nr.".to_owned()],
        }
    }
}

impl ColumnExclusions {
    /// Checks whether a header title names an excluded column.
    pub(crate) fn matches(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        self.exact.iter().any(|term| title == *term)
            || self.substrings.iter().any(|term| title.contains(term.as_str()))
    }
}

/// Computes the column format map: one flag per column, true when the column
/// should render with the fixed two-decimal numeric format.
///
/// A column is numeric when its header is not excluded and every data cell
/// in it is a numeric cell. Ragged rows are tolerated: the scan reads only
/// up to the declared column count and a missing cell counts as non-numeric.
/// The map is computed once per table and never recomputed mid-use.
pub(crate) fn classify_columns(table: &Table, exclusions: &ColumnExclusions) -> Vec<bool> {
    table
        .header
        .iter()
        .enumerate()
        .map(|(column, title)| {
            if exclusions.matches(&title.to_string()) {
                return false;
            }
            table
                .rows
                .iter()
                .all(|row| row.get(column).map(Cell::is_number).unwrap_or(false))
        })
        .collect()
}
