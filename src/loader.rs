use crate::error::{PipelineError, Result};
use crate::types::Table;
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Read a headed CSV file into a columnar [`Table`] holding only `required`.
///
/// Short records are tolerated; their missing cells load as empty strings.
/// The file is closed when this returns, on success or error.
pub fn load_table(path: &Path, required: &[&str]) -> Result<Table> {
    let file = File::open(path).map_err(|e| PipelineError::io(path, e))?;
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(file);

    let headers = rdr
        .headers()
        .map_err(|e| PipelineError::csv(path, e))?
        .clone();
    let mut positions: Vec<(&str, usize)> = Vec::with_capacity(required.len());
    for &column in required {
        let Some(idx) = headers.iter().position(|h| h == column) else {
            return Err(PipelineError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            });
        };
        positions.push((column, idx));
    }

    let mut table = Table::with_columns(required);
    for result in rdr.records() {
        let record = result.map_err(|e| PipelineError::csv(path, e))?;
        let values = positions
            .iter()
            .map(|&(column, idx)| (column, record.get(idx).unwrap_or_default().to_string()))
            .collect();
        table.push_row(values);
    }

    debug!(path = %path.display(), rows = table.row_count(), "loaded table");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn loads_required_columns_in_row_order() {
        let file = create_temp_csv(
            "order_id,product_id,add_to_cart_order,reordered\n2,33120,1,1\n2,28985,2,0\n",
        );
        let table = load_table(file.path(), &["order_id", "product_id", "reordered"]).unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column("order_id"), ["2", "2"]);
        assert_eq!(table.column("product_id"), ["33120", "28985"]);
        assert_eq!(table.column("reordered"), ["1", "0"]);
        assert!(table.column("add_to_cart_order").is_empty());
    }

    #[test]
    fn column_order_in_header_does_not_matter() {
        let file = create_temp_csv("department_id,product_id\n5,p1\n3,p2\n");
        let table = load_table(file.path(), &["product_id", "department_id"]).unwrap();

        assert_eq!(table.column("product_id"), ["p1", "p2"]);
        assert_eq!(table.column("department_id"), ["5", "3"]);
    }

    #[test]
    fn missing_column_is_reported() {
        let file = create_temp_csv("product_id,aisle_id\np1,7\n");
        let err = load_table(file.path(), &["product_id", "department_id"]).unwrap_err();

        match err {
            PipelineError::MissingColumn { column, .. } => assert_eq!(column, "department_id"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_table(&dir.path().join("absent.csv"), &["product_id"]).unwrap_err();
        assert!(matches!(err, PipelineError::Io { .. }));
    }

    #[test]
    fn header_only_file_is_empty() {
        let file = create_temp_csv("product_id,department_id\n");
        let table = load_table(file.path(), &["product_id", "department_id"]).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.column("product_id").len(), 0);
    }

    #[test]
    fn short_record_loads_empty_cell() {
        let file = create_temp_csv("product_id,department_id\np1\n");
        let table = load_table(file.path(), &["product_id", "department_id"]).unwrap();
        assert_eq!(table.column("department_id"), [""]);
    }
}
