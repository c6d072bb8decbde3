use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to process CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("missing required column '{column}' in {path}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("{table} table has no rows")]
    EmptyInput { table: String },

    #[error("column '{column}' has {actual} values, expected {expected}")]
    InconsistentColumns {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("product_id '{product_id}' (order row {row}) has no department")]
    UnresolvedKey { product_id: String, row: usize },

    #[error("department_id '{value}' is not an integer")]
    Format { value: String },

    #[error("department_id '{first}' and '{second}' both resolve to {id}")]
    DuplicateDepartment {
        id: i64,
        first: String,
        second: String,
    },
}

impl PipelineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}
