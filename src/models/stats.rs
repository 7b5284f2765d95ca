use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Derived statistics handed from aggregation to summarization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Arithmetic mean of the numeric "Salary" values.
    /// NaN when the column holds no numeric values.
    pub average_salary: f64,
    /// Row count per distinct "Department" value.
    /// BTreeMap so the prompt renders in a deterministic order.
    pub department_distribution: BTreeMap<String, usize>,
}

impl Statistics {
    /// Total rows covered by the distribution
    pub fn distribution_total(&self) -> usize {
        self.department_distribution.values().sum()
    }

    /// Number of distinct departments
    pub fn department_count(&self) -> usize {
        self.department_distribution.len()
    }
}
