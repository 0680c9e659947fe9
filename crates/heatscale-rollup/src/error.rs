//! Error taxonomy for the rollup pipeline.
//!
//! Every variant aborts the run; there is no per-record recovery. The
//! output file is only replaced after the whole pipeline has succeeded, so
//! any of these errors leaves a previous rollup untouched.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for rollup operations.
pub type RollupResult<T> = Result<T, RollupError>;

/// Errors surfaced by the rollup pipeline.
#[derive(Debug, Error)]
pub enum RollupError {
    #[error("invalid scale glob pattern: {pattern}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to read directory entry while matching {pattern}")]
    Walk {
        pattern: String,
        #[source]
        source: glob::GlobError,
    },

    #[error("scale filename is not valid UTF-8: {0}")]
    InvalidPath(PathBuf),

    #[error("failed to read scale definition: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed scale definition: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("scale definition is not a mapping at top level: {0}")]
    NotAMapping(PathBuf),

    #[error("documentation.text is not a string: {0}")]
    DocumentationText(PathBuf),

    #[error("failed to serialize rollup document")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write rollup document: {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
