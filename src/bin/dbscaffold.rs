use dbscaffold::{cli::start, error::ScaffoldError, output::Output};
use std::process::ExitCode;

fn main() -> ExitCode {
    match start::start() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // provisioning failures were already shown by the spinner
            if !matches!(
                err.downcast_ref::<ScaffoldError>(),
                Some(ScaffoldError::Provisioning { .. })
            ) {
                Output::error(format!("{err:#}"));
            }
            ExitCode::FAILURE
        }
    }
}
