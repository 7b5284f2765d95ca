use std::path::Path;

use tracing::info;

use crate::error::FileFormatError;
use crate::io::read_spreadsheet;
use crate::models::Table;

/// Execute the Load stage: parse the spreadsheet's first sheet into a Table.
///
/// Terminal on failure; there are no retries and no partial tables.
pub fn execute_load(path: &Path) -> Result<Table, FileFormatError> {
    let table = read_spreadsheet(path)?;

    info!(
        "Spreadsheet {:?} successfully loaded ({} rows, {} columns)",
        path,
        table.row_count(),
        table.column_count()
    );

    Ok(table)
}
