use std::path::PathBuf;

use thiserror::Error;

/// Failure taxonomy for one analysis run.
///
/// Callers log context and propagate; there is no retry and no local
/// recovery. The single deliberate soft-failure in the crate is
/// `xg_per_shot`, which is NaN rather than an error when a zone has no
/// shots.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("input file not found: {path}")]
    MissingInput { path: PathBuf },

    #[error("input contains no usable records: {what}")]
    EmptyInput { what: String },

    #[error("computation failed: {what}")]
    Computation { what: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read tracking parquet {path}: {source}")]
    Tracking {
        path: PathBuf,
        #[source]
        source: parquet::errors::ParquetError,
    },
}

impl AnalysisError {
    pub fn computation(what: impl Into<String>) -> Self {
        AnalysisError::Computation { what: what.into() }
    }

    pub fn empty(what: impl Into<String>) -> Self {
        AnalysisError::EmptyInput { what: what.into() }
    }
}
