//! `rollup-scales` - consolidate scale definitions into `src/scales.json`.
//!
//! Part of the build, not the shipped card: run from the repository root,
//! it reads `src/scales/*.yaml` and overwrites `src/scales.json`. The tool
//! takes no arguments; both paths are fixed by the build layout.

use std::process::ExitCode;

use tracing::{error, info};

use heatscale_rollup::{rollup, RollupConfig, RollupError};

/// Application exit codes
#[repr(u8)]
enum Exit {
    Success = 0,
    GeneralError = 1,
    IoError = 3,
    ValidationError = 5,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

fn main() -> ExitCode {
    init_tracing();

    let config = RollupConfig::default();
    match rollup::run(&config) {
        Ok(count) => {
            info!(
                records = count,
                output = %config.output_path.display(),
                "rollup complete"
            );
            Exit::Success.into()
        }
        Err(e) => {
            error!("{e}");
            exit_for(&e).into()
        }
    }
}

fn exit_for(err: &RollupError) -> Exit {
    match err {
        RollupError::Walk { .. } | RollupError::Read { .. } | RollupError::Write { .. } => {
            Exit::IoError
        }
        RollupError::Parse { .. }
        | RollupError::NotAMapping(_)
        | RollupError::DocumentationText(_) => Exit::ValidationError,
        _ => Exit::GeneralError,
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Default to info so the per-scale progress lines are visible;
    // RUST_LOG only tunes verbosity, never behavior.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}
