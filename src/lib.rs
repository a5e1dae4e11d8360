//! # CSV Workbook Importer
//!
//! A library for converting delimited text files into spreadsheet workbooks.
//! Raw CSV bytes are parsed into typed tables and rendered either into a
//! live in-memory workbook session or into standalone `.xlsx` files ready
//! to persist.
//!
//! ## Features
//!
//! - **Locale-tolerant parsing**: comma and semicolon separators chosen per
//!   line, with quoted decimal commas (`"1,50"`) read as numbers
//! - **Typed cells**: every fragment becomes a number or text, under a
//!   configurable numeric-detection policy
//! - **Shape repair**: short rows are padded and overflowing rows folded
//!   into the last column, so every table stays rectangular
//! - **Format inference**: columns holding only numbers receive a fixed
//!   two-decimal display format, with identifier-like headers excluded
//! - **Two workbook backends**: a live session model supporting read-back
//!   and re-export of edited sheets, and a standalone file encoder
//! - **Batch runs**: ordered multi-file imports with per-file failure
//!   isolation and a final bulk-persist step
//!
//! ## Example
//!
//! ```
//! use csvbook::{ImportOptions, Importer, WorkbookSink};
//!
//! let mut importer = Importer::new(ImportOptions::default(), WorkbookSink::File);
//! let report = importer.run(vec![(
//!     "demo.csv".to_owned(),
//!     b"Nome,Matricola,Importo\nMario,123,\"1,50\"\n".to_vec(),
//! )]);
//! assert_eq!(report.converted, vec!["demo"]);
//! assert_eq!(importer.pending()[0].file_name, "demo.xlsx");
//! ```
mod error;
mod helpers;
mod importer;
mod table;
mod workbook;

pub use crate::error::{CsvBookError, ResultMessage};
pub use crate::importer::{
    ErrorPolicy, ImportOptions, Importer, PersistOutcome, RunReport,
};
pub use crate::table::assembler::{assemble, derive_sheet_name, reassemble, AssembleOptions};
pub use crate::table::cell::{Cell, NumberDetection};
pub use crate::table::classifier::ColumnExclusions;
pub use crate::table::{ConversionUnit, Row, Table, TableError};
pub use crate::workbook::session::{SessionSheet, SessionWorkbook};
pub use crate::workbook::{ExportFile, SinkError, WorkbookSink, NUMERIC_FORMAT};
