use crate::table::cell::{Cell, NumberDetection};
use crate::table::Row;
use regex::Regex;

/// Splits raw lines into typed cells.
///
/// Holds the compiled quoted-decimal pattern so a whole file is processed
/// with a single compilation.
pub(crate) struct RowSplitter {
    /// Pattern for quoted decimal numbers using a comma as decimal point
    quoted_decimal: Regex,
    /// Numeric-detection policy passed through to the cell lexer
    detection: NumberDetection,
}

impl RowSplitter {
    pub(crate) fn new(detection: NumberDetection) -> Self {
        Self {
            quoted_decimal: Regex::new(r#""(\d+),(\d+)""#).expect("Hardcode regex pattern"),
            detection,
        }
    }

    /// Splits one non-empty line into typed cells.
    ///
    /// Quoted decimal numbers (`"<digits>,<digits>"`) are rewritten to
    /// unquoted period form before the separator is chosen, so a decimal
    /// comma is never misread as a field separator. The separator is chosen
    /// per line, not per file: semicolon when the line contains one, comma
    /// otherwise.
    pub(crate) fn split(&self, line: &str) -> Row {
        let line = self.quoted_decimal.replace_all(line, "$1.$2");
        let separator = if line.contains(';') { ';' } else { ',' };
        line.split(separator)
            .map(|fragment| Cell::lex(fragment, self.detection))
            .collect()
    }
}
