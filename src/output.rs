use crate::error::{PipelineError, Result};
use crate::types::{DepartmentAggregate, REPORT_HEADER};
use csv::WriterBuilder;
use std::fs;
use std::path::Path;
use tabled::{settings::Style, Table, Tabled};
use tempfile::NamedTempFile;

/// Write the report as CSV with its header row, then one row per department.
///
/// Rows are written to a temporary file beside `path` which replaces `path`
/// only once everything is flushed, so a failed run never leaves a partial
/// report behind. An existing report keeps its permissions.
pub fn write_report(path: &Path, report: &[DepartmentAggregate]) -> Result<()> {
    let mut tmp = temp_file_beside(path)?;
    {
        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(&mut tmp);
        wtr.write_record(REPORT_HEADER)
            .map_err(|e| PipelineError::csv(path, e))?;
        for r in report {
            wtr.serialize(r).map_err(|e| PipelineError::csv(path, e))?;
        }
        wtr.flush().map_err(|e| PipelineError::io(path, e))?;
    }
    tmp.persist(path)
        .map_err(|e| PipelineError::io(path, e.error))?;
    Ok(())
}

/// Create the staging file for `path` in the same directory.
///
/// It takes the target's mode when the target exists. Otherwise it is
/// created 0666 less the umask on Unix, like a plain `File::create`.
fn temp_file_beside(path: &Path) -> Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let existing = fs::metadata(path).ok().map(|m| m.permissions());

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if existing.is_none() {
            builder.permissions(fs::Permissions::from_mode(0o666));
        }
    }
    let tmp = builder
        .tempfile_in(dir)
        .map_err(|e| PipelineError::io(dir, e))?;
    if let Some(perms) = existing {
        tmp.as_file()
            .set_permissions(perms)
            .map_err(|e| PipelineError::io(tmp.path(), e))?;
    }
    Ok(tmp)
}

/// Print the first `max_rows` rows as a markdown table on stdout.
pub fn preview_table_rows<T>(rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    let slice: Vec<T> = rows.iter().take(max_rows).cloned().collect();
    if slice.is_empty() {
        println!("(no rows)\n");
        return;
    }
    let table_str = Table::new(slice).with(Style::markdown()).to_string();
    println!("{}\n", table_str);
}
