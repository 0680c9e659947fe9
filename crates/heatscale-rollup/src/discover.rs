//! Discovery of scale definition files.

use std::path::PathBuf;

use glob::MatchOptions;

use crate::config::RollupConfig;
use crate::error::{RollupError, RollupResult};

/// Enumerate every scale definition under the configured directory.
///
/// Non-recursive, extension match only. The list is explicitly sorted so
/// repeated runs over an unchanged tree produce the same record order
/// regardless of the platform's directory iteration order. A missing
/// directory simply matches nothing.
pub fn discover(config: &RollupConfig) -> RollupResult<Vec<PathBuf>> {
    let pattern = config.pattern();

    // Dotfiles are not scale definitions.
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::default()
    };

    let entries = glob::glob_with(&pattern, options).map_err(|source| RollupError::Pattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|source| RollupError::Walk {
            pattern: pattern.clone(),
            source,
        })?;
        files.push(path);
    }

    files.sort();
    Ok(files)
}
