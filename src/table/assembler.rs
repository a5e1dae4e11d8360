use crate::helpers::decode::decode_utf8;
use crate::table::cell::NumberDetection;
use crate::table::classifier::{classify_columns, ColumnExclusions};
use crate::table::normalizer::normalize_row;
use crate::table::splitter::RowSplitter;
use crate::table::{ConversionUnit, Row, Table, TableError};
use tracing::debug;

/// Spreadsheet-engine sheet name length limit.
const SHEET_NAME_MAX: usize = 31;
/// Characters spreadsheet engines reject in sheet names.
const SHEET_NAME_ILLEGAL: [char; 7] = ['*', ':', '?', '/', '\\', '[', ']'];

/// Options controlling assembly of one file into a conversion unit.
#[derive(Clone, Debug, Default)]
pub struct AssembleOptions {
    /// Numeric-detection policy applied by the cell lexer
    pub detection: NumberDetection,
    /// Header terms excluded from numeric formatting
    pub exclusions: ColumnExclusions,
}

/// Drives one file end-to-end: decode, line-split, row-split, normalize,
/// classify, derive the sheet name.
///
/// Returns `Ok(None)` when the file decodes to empty content or contains no
/// non-blank lines; those are soft no-ops, not errors. Any mix of line
/// ending styles is accepted, and blank lines are dropped before splitting.
pub fn assemble(
    file_name: &str,
    bytes: &[u8],
    options: &AssembleOptions,
) -> Result<Option<ConversionUnit>, TableError> {
    let text = decode_utf8(bytes).ok_or_else(|| TableError::DecodeError {
        name: file_name.to_owned(),
    })?;
    let lines: Vec<&str> = text
        .split(['\r', '\n'])
        .filter(|line| !line.trim().is_empty())
        .collect();
    if lines.is_empty() {
        debug!(file = %file_name, "no non-blank lines, nothing to convert");
        return Ok(None);
    }

    let splitter = RowSplitter::new(options.detection);
    let mut rows: Vec<Row> = lines.iter().map(|line| splitter.split(line)).collect();
    let header = rows.remove(0);
    let column_count = header.len();
    let rows = rows
        .into_iter()
        .map(|row| normalize_row(row, column_count))
        .collect();

    let table = Table { header, rows };
    let numeric_columns = classify_columns(&table, &options.exclusions);
    Ok(Some(ConversionUnit {
        source_name: file_name.to_owned(),
        sheet_name: derive_sheet_name(file_name),
        table,
        numeric_columns,
    }))
}

/// Rebuilds a conversion unit from an already-typed grid read back from a
/// live session, carrying the original column format map instead of
/// recomputing it.
///
/// Only the shaping step is reapplied; lexing and splitting are skipped
/// because session values are already typed. Returns `None` for an empty or
/// header-less grid.
pub fn reassemble(
    source_name: &str,
    sheet_name: &str,
    grid: Vec<Row>,
    numeric_columns: Vec<bool>,
) -> Option<ConversionUnit> {
    let mut rows = grid;
    if rows.is_empty() {
        return None;
    }
    let header = rows.remove(0);
    let column_count = header.len();
    if column_count == 0 {
        return None;
    }
    let rows = rows
        .into_iter()
        .map(|row| normalize_row(row, column_count))
        .collect();
    Some(ConversionUnit {
        source_name: source_name.to_owned(),
        sheet_name: sheet_name.to_owned(),
        table: Table { header, rows },
        numeric_columns,
    })
}

/// Derives the sheet/display name from a file name.
///
/// Takes the segment before the first dot, replaces characters spreadsheet
/// engines reject with underscores and truncates to the 31-character sheet
/// name limit. An all-empty result falls back to `Sheet`.
pub fn derive_sheet_name(file_name: &str) -> String {
    let stem = file_name.split('.').next().unwrap_or(file_name);
    let cleaned: String = stem
        .chars()
        .map(|character| {
            if SHEET_NAME_ILLEGAL.contains(&character) {
                '_'
            } else {
                character
            }
        })
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return "Sheet".to_owned();
    }
    cleaned.chars().take(SHEET_NAME_MAX).collect()
}
