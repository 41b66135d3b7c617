use super::{commands, dispatch, telemetry};
use crate::error::ScaffoldError;
use anyhow::Result;
use clap::error::ErrorKind;
use std::ffi::OsString;

/// Main orchestrator - Pure orchestration with no business logic
///
/// Five-step data flow:
/// 1. Parse: Extract CLI arguments
/// 2. Extract Verbosity: Convert flag count to logging level
/// 3. Initialize Telemetry: Set up structured logging/tracing
/// 4. Dispatch: Convert `ArgMatches` into typed Action enum
/// 5. Execute: Run the action's business logic
///
/// # Errors
///
/// Returns an error if any step in the flow fails
pub fn start() -> Result<()> {
    start_from(std::env::args_os())
}

/// Same as [`start`] with explicit arguments, the first one being the binary name
///
/// # Errors
///
/// Returns an error if any step in the flow fails
pub fn start_from<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    // 1. Parse: Extract CLI arguments
    let matches = match commands::new().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(());
        }
        Err(e) => return Err(ScaffoldError::Usage(e.render().to_string()).into()),
    };

    // 2. Extract Verbosity
    let verbosity = matches.get_count("verbose");

    // 3. Initialize Telemetry
    telemetry::init(verbosity)?;

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "dbscaffold starting");

    // 4. Dispatch: Convert ArgMatches into typed Action enum
    let action = dispatch::dispatch(&matches)?;

    // 5. Execute: Run the action's business logic
    action.execute()?;

    Ok(())
}
