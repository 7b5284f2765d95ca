use std::collections::BTreeMap;

use crate::error::MissingColumnError;
use crate::models::{Statistics, Table};

/// Column holding the numeric values averaged by the pipeline
pub const SALARY_COLUMN: &str = "Salary";
/// Column holding the categorical values counted by the pipeline
pub const DEPARTMENT_COLUMN: &str = "Department";

/// Execute the Aggregate stage: mean salary plus department row counts.
///
/// Pure and deterministic. Cells without a numeric interpretation are
/// skipped by the mean; blank department cells are skipped by the
/// distribution. Fails before computing anything if either required
/// column is absent, never returning a partial result.
pub fn execute_aggregate(table: &Table) -> Result<Statistics, MissingColumnError> {
    let salary = table
        .column(SALARY_COLUMN)
        .ok_or_else(|| MissingColumnError::new(SALARY_COLUMN))?;
    let department = table
        .column(DEPARTMENT_COLUMN)
        .ok_or_else(|| MissingColumnError::new(DEPARTMENT_COLUMN))?;

    let numeric: Vec<f64> = salary.values.iter().filter_map(|v| v.as_number()).collect();
    let average_salary = if numeric.is_empty() {
        f64::NAN
    } else {
        numeric.iter().sum::<f64>() / numeric.len() as f64
    };

    let mut department_distribution: BTreeMap<String, usize> = BTreeMap::new();
    for value in &department.values {
        if let Some(name) = value.as_text() {
            *department_distribution.entry(name).or_insert(0) += 1;
        }
    }

    Ok(Statistics {
        average_salary,
        department_distribution,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CellValue, Column};

    fn employee_table(salaries: Vec<CellValue>, departments: Vec<CellValue>) -> Table {
        Table::new(vec![
            Column {
                name: SALARY_COLUMN.to_string(),
                values: salaries,
            },
            Column {
                name: DEPARTMENT_COLUMN.to_string(),
                values: departments,
            },
        ])
    }

    #[test]
    fn test_average_and_distribution() {
        let table = employee_table(
            vec![
                CellValue::Number(50000.0),
                CellValue::Number(70000.0),
                CellValue::Number(60000.0),
            ],
            vec![
                CellValue::Text("Eng".to_string()),
                CellValue::Text("Eng".to_string()),
                CellValue::Text("Sales".to_string()),
            ],
        );

        let stats = execute_aggregate(&table).unwrap();

        assert_eq!(stats.average_salary, 60000.0);
        assert_eq!(stats.department_distribution.get("Eng"), Some(&2));
        assert_eq!(stats.department_distribution.get("Sales"), Some(&1));
        assert_eq!(stats.distribution_total(), table.row_count());
    }

    #[test]
    fn test_missing_salary_column() {
        let table = Table::new(vec![Column {
            name: DEPARTMENT_COLUMN.to_string(),
            values: vec![CellValue::Text("Eng".to_string())],
        }]);

        let err = execute_aggregate(&table).unwrap_err();
        assert_eq!(err.column(), SALARY_COLUMN);
    }

    #[test]
    fn test_missing_department_column() {
        let table = Table::new(vec![Column {
            name: SALARY_COLUMN.to_string(),
            values: vec![CellValue::Number(50000.0)],
        }]);

        let err = execute_aggregate(&table).unwrap_err();
        assert_eq!(err.column(), DEPARTMENT_COLUMN);
    }

    #[test]
    fn test_mean_skips_non_numeric_cells() {
        let table = employee_table(
            vec![
                CellValue::Number(50000.0),
                CellValue::Empty,
                CellValue::Text("n/a".to_string()),
                CellValue::Number(70000.0),
            ],
            vec![
                CellValue::Text("Eng".to_string()),
                CellValue::Text("Eng".to_string()),
                CellValue::Text("Eng".to_string()),
                CellValue::Text("Eng".to_string()),
            ],
        );

        let stats = execute_aggregate(&table).unwrap();
        assert_eq!(stats.average_salary, 60000.0);
    }

    #[test]
    fn test_mean_of_no_numeric_values_is_nan() {
        let table = employee_table(
            vec![CellValue::Empty, CellValue::Empty],
            vec![
                CellValue::Text("Eng".to_string()),
                CellValue::Text("Sales".to_string()),
            ],
        );

        let stats = execute_aggregate(&table).unwrap();
        assert!(stats.average_salary.is_nan());
    }

    #[test]
    fn test_distribution_skips_blank_departments() {
        let table = employee_table(
            vec![CellValue::Number(1.0), CellValue::Number(2.0)],
            vec![CellValue::Text("Eng".to_string()), CellValue::Empty],
        );

        let stats = execute_aggregate(&table).unwrap();
        assert_eq!(stats.department_distribution.len(), 1);
        assert_eq!(stats.department_distribution.get("Eng"), Some(&1));
    }

    #[test]
    fn test_empty_table_is_missing_column() {
        let err = execute_aggregate(&Table::default()).unwrap_err();
        assert_eq!(err.column(), SALARY_COLUMN);
    }
}
