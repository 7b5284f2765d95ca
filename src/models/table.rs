use serde::{Deserialize, Serialize};

/// A single spreadsheet cell after import
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Numeric cell (integers, floats, and date serials)
    Number(f64),
    /// Text cell
    Text(String),
    /// Boolean cell
    Bool(bool),
    /// Blank cell or missing trailing cell
    Empty,
}

impl CellValue {
    /// Numeric interpretation of this cell, if any.
    ///
    /// Text cells that parse as a float count as numeric, so salary
    /// figures stored as text still contribute to the mean.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Text interpretation of this cell, if any. Empty cells have none.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Number(n) => Some(format_number(*n)),
            CellValue::Bool(b) => Some(if *b { "TRUE" } else { "FALSE" }.to_string()),
            CellValue::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

/// Render a float the way a spreadsheet displays it: integers without decimals
pub(crate) fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// A named column of cells
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    /// Header text from the first sheet row
    pub name: String,
    /// One cell per data row, padded with Empty to the table's row count
    pub values: Vec<CellValue>,
}

/// In-memory table loaded from the first sheet of a workbook.
///
/// All columns hold the same number of rows; the loader pads short rows
/// so the invariant holds by construction. Read-only after loading.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Look up a column by its exact header name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Number of data rows (uniform across columns)
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}
