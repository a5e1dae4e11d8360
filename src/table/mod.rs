//! # Table Conversion Module
//!
//! This module provides the core functionality for converting raw delimited
//! text into workbook-ready tables. It handles cell type detection, row
//! splitting with per-line separator selection, row shape normalization and
//! per-column numeric format classification.
use crate::table::cell::Cell;
use thiserror::Error;

pub(crate) mod assembler;
pub(crate) mod cell;
pub(crate) mod classifier;
pub(crate) mod normalizer;
pub(crate) mod splitter;

/// Errors raised while assembling a table from raw file bytes.
#[derive(Error, Debug)]
pub enum TableError {
    /// File bytes cannot be interpreted as UTF-8 text
    #[error("Cannot decode '{name}' as UTF-8 text")]
    DecodeError { name: String },
}

/// An ordered sequence of typed cells, one table row.
pub type Row = Vec<Cell>;

/// A header row plus data rows.
///
/// After normalization every row has exactly the header's length; the header
/// defines the column count for the whole table. Row and column order from
/// the source file is preserved.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    /// Header row defining the column count
    pub header: Row,
    /// Data rows in source order
    pub rows: Vec<Row>,
}

impl Table {
    /// Number of columns, taken from the header row.
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Iterates the header and the data rows in sheet order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &Row> {
        std::iter::once(&self.header).chain(self.rows.iter())
    }
}

/// One source file's derived sheet name, table and column format map, ready
/// to hand to a workbook sink.
#[derive(Clone, Debug)]
pub struct ConversionUnit {
    /// Name of the source file the unit was assembled from
    pub source_name: String,
    /// Sheet/display name derived from the source file name
    pub sheet_name: String,
    /// Normalized table, header row first
    pub table: Table,
    /// Per-column flags, true for columns rendered with the fixed
    /// two-decimal numeric format
    pub numeric_columns: Vec<bool>,
}
