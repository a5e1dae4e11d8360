use crate::table::cell::Cell;
use crate::table::{ConversionUnit, Row};
use crate::workbook::SinkError;

/// Name of the sheet a fresh session starts with.
const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// One sheet held by a live session.
#[derive(Clone, Debug)]
pub struct SessionSheet {
    /// Sheet name shown on the workbook tab
    pub name: String,
    /// Rectangular value grid, header row first
    pub values: Vec<Row>,
    /// Per-column decimal-format flags carried with the sheet
    pub numeric_columns: Vec<bool>,
    /// Whether the header row is rendered bold
    pub header_bold: bool,
    /// Whether column widths and row heights were auto-fitted
    pub autofit: bool,
}

/// In-memory model of a live spreadsheet session.
///
/// A new session holds one empty default sheet. The first rendered unit
/// takes that sheet over, renaming it; later units append new sheets.
/// Values written here can be read back, edited and re-exported.
#[derive(Debug)]
pub struct SessionWorkbook {
    /// Sheets in creation order
    sheets: Vec<SessionSheet>,
    /// True until the first unit replaces the default empty sheet
    pristine: bool,
}

impl SessionWorkbook {
    pub fn new() -> Self {
        Self {
            sheets: vec![SessionSheet {
                name: DEFAULT_SHEET_NAME.to_owned(),
                values: Vec::new(),
                numeric_columns: Vec::new(),
                header_bold: false,
                autofit: false,
            }],
            pristine: true,
        }
    }

    /// Writes one conversion unit into the session.
    ///
    /// Sheet names must stay unique within one session; the first unit may
    /// reuse the default sheet's name because it replaces that sheet.
    pub(crate) fn render(&mut self, unit: &ConversionUnit) -> Result<(), SinkError> {
        if !self.pristine && self.sheet(&unit.sheet_name).is_some() {
            return Err(SinkError::DuplicateSheet {
                name: unit.sheet_name.clone(),
            });
        }
        let sheet = SessionSheet {
            name: unit.sheet_name.clone(),
            values: unit.table.iter_rows().cloned().collect(),
            numeric_columns: unit.numeric_columns.clone(),
            header_bold: true,
            autofit: true,
        };
        if self.pristine {
            self.sheets[0] = sheet;
            self.pristine = false;
        } else {
            self.sheets.push(sheet);
        }
        Ok(())
    }

    /// Returns the names of all sheets in the session.
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|sheet| sheet.name.to_owned()).collect()
    }

    /// Looks up a sheet by name.
    pub fn sheet(&self, name: &str) -> Option<&SessionSheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }

    /// Returns a sheet's typed value grid and carried format map, the way a
    /// live session hands its used range back for re-export.
    pub fn read_back(&self, name: &str) -> Result<(Vec<Row>, Vec<bool>), SinkError> {
        let sheet = self.sheet(name).ok_or_else(|| SinkError::SheetNotFound {
            name: name.to_owned(),
        })?;
        Ok((sheet.values.clone(), sheet.numeric_columns.clone()))
    }

    /// Overwrites a sheet's values in place, keeping its format map.
    /// Models user edits made in the session between import and export.
    pub fn update_values(&mut self, name: &str, values: Vec<Row>) -> Result<(), SinkError> {
        let sheet = self
            .sheets
            .iter_mut()
            .find(|sheet| sheet.name == name)
            .ok_or_else(|| SinkError::SheetNotFound {
                name: name.to_owned(),
            })?;
        sheet.values = values;
        Ok(())
    }

    /// Updates a single cell of a sheet. Rows and cells beyond the current
    /// grid are created as empty text on demand.
    pub fn update_cell(
        &mut self,
        name: &str,
        row: usize,
        column: usize,
        value: Cell,
    ) -> Result<(), SinkError> {
        let sheet = self
            .sheets
            .iter_mut()
            .find(|sheet| sheet.name == name)
            .ok_or_else(|| SinkError::SheetNotFound {
                name: name.to_owned(),
            })?;
        if sheet.values.len() <= row {
            sheet.values.resize(row + 1, Vec::new());
        }
        let cells = &mut sheet.values[row];
        if cells.len() <= column {
            cells.resize(column + 1, Cell::Text(String::new()));
        }
        cells[column] = value;
        Ok(())
    }
}

impl Default for SessionWorkbook {
    fn default() -> Self {
        Self::new()
    }
}
