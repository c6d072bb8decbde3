use serde::{Serialize, Serializer};
use std::collections::HashMap;
use tabled::Tabled;

use crate::error::{PipelineError, Result};
use crate::util::format_percentage;

pub const ORDER_ID: &str = "order_id";
pub const PRODUCT_ID: &str = "product_id";
pub const REORDERED: &str = "reordered";
pub const DEPARTMENT_ID: &str = "department_id";

pub const ORDER_PRODUCT_COLUMNS: [&str; 3] = [ORDER_ID, PRODUCT_ID, REORDERED];
pub const PRODUCT_COLUMNS: [&str; 2] = [PRODUCT_ID, DEPARTMENT_ID];

/// Header of the report file, in column order.
pub const REPORT_HEADER: [&str; 4] = [
    "department_id",
    "number_of_orders",
    "number_of_first_orders",
    "percentage",
];

/// Columnar view of a delimited file: column name -> values in row order.
///
/// Only the columns requested at load time are kept, and all of them have
/// `row_count` entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: HashMap<String, Vec<String>>,
    row_count: usize,
}

impl Table {
    /// Build a table from explicit columns, which must all have the same
    /// length.
    pub fn from_columns<I, K>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Vec<String>)>,
        K: Into<String>,
    {
        let mut table = Self::default();
        let mut expected: Option<usize> = None;
        for (name, values) in columns {
            let name = name.into();
            match expected {
                Some(len) if len != values.len() => {
                    return Err(PipelineError::InconsistentColumns {
                        column: name,
                        expected: len,
                        actual: values.len(),
                    });
                }
                Some(_) => {}
                None => expected = Some(values.len()),
            }
            table.columns.insert(name, values);
        }
        table.row_count = expected.unwrap_or(0);
        Ok(table)
    }

    pub(crate) fn with_columns(names: &[&str]) -> Self {
        Self {
            columns: names.iter().map(|n| (n.to_string(), Vec::new())).collect(),
            row_count: 0,
        }
    }

    pub(crate) fn push_row(&mut self, values: Vec<(&str, String)>) {
        for (name, value) in values {
            self.columns.entry(name.to_string()).or_default().push(value);
        }
        self.row_count += 1;
    }

    pub fn column(&self, name: &str) -> &[String] {
        self.columns.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }
}

/// Whether an order line is the customer's first purchase of the product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderFlag {
    FirstOrder,
    Reordered,
    Unrecognized(String),
}

impl ReorderFlag {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "0" => Self::FirstOrder,
            "1" => Self::Reordered,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

/// Lookup from product_id to department_id. Later entries overwrite earlier ones.
#[derive(Debug, Clone, Default)]
pub struct ProductDepartmentIndex {
    map: HashMap<String, String>,
}

impl ProductDepartmentIndex {
    pub(crate) fn insert(&mut self, product_id: String, department_id: String) {
        self.map.insert(product_id, department_id);
    }

    pub fn get(&self, product_id: &str) -> Option<&str> {
        self.map.get(product_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JoinedRow {
    pub department_id: String,
    pub order_id: String,
    pub product_id: String,
    pub reordered: ReorderFlag,
}

#[derive(Debug, Serialize, Tabled, Clone, PartialEq)]
pub struct DepartmentAggregate {
    pub department_id: i64,
    pub number_of_orders: u64,
    pub number_of_first_orders: u64,
    #[serde(serialize_with = "serialize_percentage")]
    #[tabled(display_with = "display_percentage")]
    pub percentage: f64,
}

/// Result of one aggregation pass, in first-seen department order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepartmentCounts {
    pub departments: Vec<DepartmentAggregate>,
    /// Order lines left out of every counter.
    pub skipped_rows: usize,
}

fn serialize_percentage<S: Serializer>(
    value: &f64,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_percentage(*value))
}

fn display_percentage(value: &f64) -> String {
    format_percentage(*value)
}

/// Counts gathered while running the pipeline, for console reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub order_rows: usize,
    pub product_rows: usize,
    pub indexed_products: usize,
    pub departments: usize,
    pub skipped_rows: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn from_columns_keeps_values() {
        let table = Table::from_columns([
            (PRODUCT_ID, col(&["p1", "p2"])),
            (DEPARTMENT_ID, col(&["5", "3"])),
        ])
        .unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column(DEPARTMENT_ID), ["5", "3"]);
        assert!(table.column(ORDER_ID).is_empty());
    }

    #[test]
    fn from_columns_rejects_unequal_lengths() {
        let err = Table::from_columns([(PRODUCT_ID, col(&["p1"])), (DEPARTMENT_ID, Vec::new())])
            .unwrap_err();
        match err {
            PipelineError::InconsistentColumns {
                column,
                expected,
                actual,
            } => {
                assert_eq!(column, DEPARTMENT_ID);
                assert_eq!((expected, actual), (1, 0));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn no_columns_is_empty() {
        let table = Table::from_columns(Vec::<(&str, Vec<String>)>::new()).unwrap();
        assert!(table.is_empty());
    }
}
