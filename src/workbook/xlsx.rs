use crate::table::cell::Cell;
use crate::table::ConversionUnit;
use crate::workbook::{ExportFile, SinkError, NUMERIC_FORMAT};
use rust_xlsxwriter::{Format, Workbook, Worksheet};

/// Renders one conversion unit into a standalone single-sheet workbook.
///
/// The header row is bold; data-row cells in flagged columns carry the fixed
/// two-decimal numeric format (never the header); column widths are
/// auto-fitted. The encoded bytes are returned in memory for the caller to
/// persist under a chosen destination.
pub(crate) fn encode_unit(unit: &ConversionUnit) -> Result<ExportFile, SinkError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&unit.sheet_name)?;

    let bold = Format::new().set_bold();
    let numeric = Format::new().set_num_format(NUMERIC_FORMAT);

    for (column, cell) in unit.table.header.iter().enumerate() {
        write_cell(worksheet, 0, column as u16, cell, Some(&bold))?;
    }
    for (index, row) in unit.table.rows.iter().enumerate() {
        for (column, cell) in row.iter().enumerate() {
            let format = unit
                .numeric_columns
                .get(column)
                .copied()
                .unwrap_or(false)
                .then_some(&numeric);
            write_cell(worksheet, index as u32 + 1, column as u16, cell, format)?;
        }
    }
    worksheet.autofit();

    let bytes = workbook.save_to_buffer()?;
    Ok(ExportFile {
        file_name: format!("{}.xlsx", unit.sheet_name),
        bytes,
    })
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    column: u16,
    cell: &Cell,
    format: Option<&Format>,
) -> Result<(), SinkError> {
    match (cell, format) {
        (Cell::Number(value), Some(format)) => {
            worksheet.write_number_with_format(row, column, *value, format)?
        }
        (Cell::Number(value), None) => worksheet.write_number(row, column, *value)?,
        (Cell::Text(value), Some(format)) => {
            worksheet.write_string_with_format(row, column, value, format)?
        }
        (Cell::Text(value), None) => worksheet.write_string(row, column, value)?,
    };
    Ok(())
}
