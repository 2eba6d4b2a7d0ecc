// src/error.rs
use std::path::PathBuf;

/// Terminal failures of the tabular loader.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The source could not be read at all
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The byte stream was rejected by every decoder
    #[error("could not decode input: {0}")]
    Decode(String),

    /// Line recovery produced no rows
    #[error("no rows could be recovered from the input")]
    EmptyTable,
}

/// Terminal failures of role inference and coercion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// Fewer than three usable columns, or altitude/x/y could not all be assigned
    #[error("insufficient columns for a 3D trajectory ({columns} columns)")]
    InsufficientColumns { columns: usize },

    /// Every row was dropped by the completeness filter
    #[error("no valid numeric rows found ({rows} rows inspected)")]
    NoValidRows { rows: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}
