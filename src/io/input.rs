use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error::FileFormatError;
use crate::models::table::format_number;
use crate::models::{CellValue, Column, Table};

/// Read the first sheet of a workbook (xlsx, xls, xlsb, ods) into a Table.
///
/// The first row is treated as headers; every following row is data.
/// Columns whose header cell is blank are skipped since they cannot be
/// addressed by name. An empty first sheet yields an empty Table.
pub fn read_spreadsheet(path: &Path) -> Result<Table, FileFormatError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| FileFormatError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;

    let sheet_names = workbook.sheet_names().to_vec();
    let first_sheet = sheet_names
        .first()
        .ok_or_else(|| FileFormatError::NoSheets {
            path: path.to_path_buf(),
        })?;

    let range = workbook
        .worksheet_range(first_sheet)
        .map_err(|e| FileFormatError::Sheet {
            path: path.to_path_buf(),
            sheet: first_sheet.clone(),
            source: e,
        })?;

    let mut rows = range.rows();

    let Some(header_row) = rows.next() else {
        return Ok(Table::default());
    };

    // Header cells select which columns exist; blank headers drop the column
    let named: Vec<(usize, String)> = header_row
        .iter()
        .enumerate()
        .filter_map(|(idx, cell)| header_name(cell).map(|name| (idx, name)))
        .collect();

    let mut columns: Vec<Column> = named
        .iter()
        .map(|(_, name)| Column {
            name: name.clone(),
            values: Vec::new(),
        })
        .collect();

    for row in rows {
        for (col, (idx, _)) in named.iter().enumerate() {
            // The range is dense, but a ragged last row still pads as Empty
            let value = row.get(*idx).map_or(CellValue::Empty, convert_cell);
            columns[col].values.push(value);
        }
    }

    Ok(Table::new(columns))
}

/// Render a header cell to a column name; blank headers have none
fn header_name(cell: &Data) -> Option<String> {
    let name = match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Float(n) => format_number(*n),
        Data::Int(n) => format!("{}", n),
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        _ => return None,
    };

    if name.is_empty() { None } else { Some(name) }
}

/// Convert a calamine cell into our cell model.
/// Dates stay as their numeric serials; cell errors keep their text form.
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => {
            if s.is_empty() {
                CellValue::Empty
            } else {
                CellValue::Text(s.clone())
            }
        }
        Data::Float(n) => CellValue::Number(*n),
        Data::Int(n) => CellValue::Number(*n as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Error(e) => CellValue::Text(format!("#{:?}", e)),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}
