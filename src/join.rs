use crate::error::{PipelineError, Result};
use crate::types::{
    JoinedRow, ProductDepartmentIndex, ReorderFlag, Table, DEPARTMENT_ID, ORDER_ID, PRODUCT_ID,
    REORDERED,
};
use tracing::debug;

/// Map every product to its department. A product listed twice keeps the
/// last department seen.
pub fn build_index(products: &Table) -> Result<ProductDepartmentIndex> {
    if products.is_empty() {
        return Err(PipelineError::EmptyInput {
            table: "products".to_string(),
        });
    }

    let product_ids = products.column(PRODUCT_ID);
    let department_ids = products.column(DEPARTMENT_ID);
    for (column, values) in [(PRODUCT_ID, product_ids), (DEPARTMENT_ID, department_ids)] {
        if values.len() != products.row_count() {
            return Err(PipelineError::InconsistentColumns {
                column: column.to_string(),
                expected: products.row_count(),
                actual: values.len(),
            });
        }
    }

    let mut index = ProductDepartmentIndex::default();
    for (product_id, department_id) in product_ids.iter().zip(department_ids) {
        index.insert(product_id.clone(), department_id.clone());
    }
    debug!(products = index.len(), "built product index");
    Ok(index)
}

/// Attach a department to every order line. Any product missing from
/// `index` aborts the whole join.
pub fn join(orders: &Table, index: &ProductDepartmentIndex) -> Result<Vec<JoinedRow>> {
    let order_ids = orders.column(ORDER_ID);
    let product_ids = orders.column(PRODUCT_ID);
    let flags = orders.column(REORDERED);

    for (column, values) in [
        (ORDER_ID, order_ids),
        (PRODUCT_ID, product_ids),
        (REORDERED, flags),
    ] {
        if values.len() != orders.row_count() {
            return Err(PipelineError::InconsistentColumns {
                column: column.to_string(),
                expected: orders.row_count(),
                actual: values.len(),
            });
        }
    }

    let mut rows = Vec::with_capacity(orders.row_count());
    for (row, ((order_id, product_id), flag)) in
        order_ids.iter().zip(product_ids).zip(flags).enumerate()
    {
        let Some(department_id) = index.get(product_id) else {
            return Err(PipelineError::UnresolvedKey {
                product_id: product_id.clone(),
                row: row + 1,
            });
        };
        rows.push(JoinedRow {
            department_id: department_id.to_string(),
            order_id: order_id.clone(),
            product_id: product_id.clone(),
            reordered: ReorderFlag::parse(flag),
        });
    }
    Ok(rows)
}
