//! Per-file parsing and key derivation.
//!
//! A scale definition is schema-less: whatever mapping the YAML file holds
//! is carried verbatim into the rollup, so records are kept as generic JSON
//! values rather than a fixed struct. The only field this crate owns is
//! `key`, which is derived from the filename and overwrites anything the
//! file itself declares.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{RollupError, RollupResult};

/// Field injected into every record.
pub const KEY_FIELD: &str = "key";

/// Derive a record key from a definition file path.
///
/// Directory and extension are stripped and underscores become spaces:
/// `src/scales/iron_red.yaml` → `iron red`.
pub fn derive_key(path: &Path) -> RollupResult<String> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| RollupError::InvalidPath(path.to_path_buf()))?;

    Ok(stem.replace('_', " "))
}

/// Load one scale definition as a generic record.
///
/// The file must hold a mapping at top level; a scalar, sequence, or empty
/// document is malformed and aborts the run.
pub fn parse_file(path: &Path) -> RollupResult<Map<String, Value>> {
    let raw = fs::read_to_string(path).map_err(|source| RollupError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_yaml::from_str(&raw).map_err(|source| RollupError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Object(record) => Ok(record),
        _ => Err(RollupError::NotAMapping(path.to_path_buf())),
    }
}
