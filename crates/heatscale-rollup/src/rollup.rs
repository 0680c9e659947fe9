//! The rollup pipeline: discover, parse, render, collect, serialize.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::info;

use crate::config::RollupConfig;
use crate::discover::discover;
use crate::error::{RollupError, RollupResult};
use crate::markdown;
use crate::record;

/// Run the full rollup and write the consolidated document.
///
/// Returns the number of records written. The output file is replaced only
/// after every record has been processed, so a failure part-way through
/// leaves any previous rollup untouched.
pub fn run(config: &RollupConfig) -> RollupResult<usize> {
    let records = collect(config)?;
    let count = records.len();

    let mut json = serde_json::to_string_pretty(&records)?;
    json.push('\n');

    write_atomic(&config.output_path, json.as_bytes())?;
    Ok(count)
}

/// Discover and load every record, in lexicographic filename order.
pub fn collect(config: &RollupConfig) -> RollupResult<Vec<Map<String, Value>>> {
    let files = discover(config)?;

    let mut records = Vec::with_capacity(files.len());
    for path in &files {
        let key = record::derive_key(path)?;
        let mut rec = record::parse_file(path)?;
        rec.insert(record::KEY_FIELD.to_string(), Value::String(key.clone()));

        markdown::render_documentation(&mut rec, path)?;

        info!(%key, "rolled up scale");
        records.push(rec);
    }

    Ok(records)
}

/// Write to a temporary file in the target directory, then rename over the
/// destination. Keeps the previous document intact if anything fails.
fn write_atomic(path: &Path, contents: &[u8]) -> RollupResult<()> {
    let parent = path.parent().unwrap_or(Path::new("."));
    fs::create_dir_all(parent).map_err(|source| RollupError::Write {
        path: parent.to_path_buf(),
        source,
    })?;

    let mut temp_path = path.to_path_buf();
    match path.file_name() {
        Some(name) => temp_path.set_file_name(format!(".{}.tmp", name.to_string_lossy())),
        None => temp_path.push(".tmp"),
    }

    {
        let mut file = File::create(&temp_path).map_err(|source| RollupError::Write {
            path: temp_path.clone(),
            source,
        })?;

        file.write_all(contents).map_err(|source| RollupError::Write {
            path: temp_path.clone(),
            source,
        })?;

        file.sync_all().map_err(|source| RollupError::Write {
            path: temp_path.clone(),
            source,
        })?;
    }

    fs::rename(&temp_path, path).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        RollupError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}
