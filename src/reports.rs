use crate::error::{PipelineError, Result};
use crate::types::{DepartmentAggregate, DepartmentCounts, JoinedRow, ReorderFlag};
use crate::util::round2;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Per-department totals, in the order departments were first seen.
///
/// Rows with an unrecognized reorder flag count toward neither total and are
/// tallied in `skipped_rows`. A department is only created by a row that
/// does count.
pub fn create_report(rows: &[JoinedRow]) -> Result<DepartmentCounts> {
    struct Acc<'a> {
        department_id: &'a str,
        orders: u64,
        first_orders: u64,
    }

    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut accs: Vec<Acc> = Vec::new();
    let mut skipped = 0usize;

    for r in rows {
        let first = match r.reordered {
            ReorderFlag::FirstOrder => 1,
            ReorderFlag::Reordered => 0,
            ReorderFlag::Unrecognized(_) => {
                skipped += 1;
                continue;
            }
        };
        let idx = *positions.entry(r.department_id.as_str()).or_insert_with(|| {
            accs.push(Acc {
                department_id: r.department_id.as_str(),
                orders: 0,
                first_orders: 0,
            });
            accs.len() - 1
        });
        let acc = &mut accs[idx];
        acc.orders += 1;
        acc.first_orders += first;
    }
    if skipped > 0 {
        warn!(skipped, "order lines with an unrecognized reordered flag were not counted");
    }

    let mut seen: HashMap<i64, &str> = HashMap::with_capacity(accs.len());
    let mut report = Vec::with_capacity(accs.len());
    for acc in accs {
        let department_id = parse_department_id(acc.department_id)?;
        if let Some(first) = seen.insert(department_id, acc.department_id) {
            return Err(PipelineError::DuplicateDepartment {
                id: department_id,
                first: first.to_string(),
                second: acc.department_id.to_string(),
            });
        }
        report.push(DepartmentAggregate {
            department_id,
            number_of_orders: acc.orders,
            number_of_first_orders: acc.first_orders,
            percentage: round2(acc.first_orders as f64 / acc.orders as f64),
        });
    }
    debug!(departments = report.len(), "aggregated departments");
    Ok(DepartmentCounts {
        departments: report,
        skipped_rows: skipped,
    })
}

/// Order the report by ascending department id, dropping departments
/// without orders.
pub fn sort_by_department(report: Vec<DepartmentAggregate>) -> Vec<DepartmentAggregate> {
    let mut sorted: Vec<DepartmentAggregate> = report
        .into_iter()
        .filter(|row| row.number_of_orders > 0)
        .collect();
    sorted.sort_by_key(|row| row.department_id);
    sorted
}

fn parse_department_id(raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|_| PipelineError::Format {
        value: raw.to_string(),
    })
}
