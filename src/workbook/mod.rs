//! # Workbook Sink Module
//!
//! External spreadsheet backends consuming assembled conversion units. Two
//! variant implementations share one contract: a live session that
//! accumulates sheets inside a single open workbook, and a file encoder that
//! produces one standalone workbook per unit. Neither reshapes the table it
//! is handed.
use crate::table::ConversionUnit;
use crate::workbook::session::SessionWorkbook;
use thiserror::Error;

pub(crate) mod session;
pub(crate) mod xlsx;

/// Fixed two-decimal numeric display format applied to flagged columns.
pub const NUMERIC_FORMAT: &str = "#,##0.00;[Red]-#,##0.00";

/// Errors raised while rendering a conversion unit through a sink.
#[derive(Error, Debug)]
pub enum SinkError {
    /// The workbook encoder rejected the write
    #[error("Write workbook failed: {0}")]
    XlsxError(#[from] rust_xlsxwriter::XlsxError),

    /// A sheet with the same name already exists in the live session
    #[error("Sheet '{name}' already exists")]
    DuplicateSheet { name: String },

    /// Read-back requested for a sheet the live session does not hold
    #[error("Sheet '{name}' not found")]
    SheetNotFound { name: String },

    /// A session operation was requested but no live session is configured
    #[error("No live session sink configured")]
    NoSession,
}

/// A standalone workbook file rendered from one conversion unit.
#[derive(Clone, Debug)]
pub struct ExportFile {
    /// Output file name, `<sheet name>.xlsx`
    pub file_name: String,
    /// Encoded workbook bytes for the caller to persist
    pub bytes: Vec<u8>,
}

/// External spreadsheet backend selected by caller configuration.
pub enum WorkbookSink {
    /// Live workbook session written sheet by sheet
    Session(SessionWorkbook),
    /// Standalone file encoder returning byte buffers
    File,
}

impl WorkbookSink {
    /// Renders one conversion unit through the selected backend.
    ///
    /// The session variant writes into the live workbook and returns
    /// nothing; the file variant returns the encoded workbook for the
    /// caller to persist.
    pub fn render(&mut self, unit: &ConversionUnit) -> Result<Option<ExportFile>, SinkError> {
        match self {
            Self::Session(session) => {
                session.render(unit)?;
                Ok(None)
            }
            Self::File => Ok(Some(xlsx::encode_unit(unit)?)),
        }
    }

    /// Returns the live session, if this sink holds one.
    pub fn session(&self) -> Option<&SessionWorkbook> {
        match self {
            Self::Session(session) => Some(session),
            Self::File => None,
        }
    }

    /// Mutable access to the live session, if this sink holds one.
    pub fn session_mut(&mut self) -> Option<&mut SessionWorkbook> {
        match self {
            Self::Session(session) => Some(session),
            Self::File => None,
        }
    }
}
