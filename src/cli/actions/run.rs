use super::Action;
use crate::{
    cli::commands,
    error::ScaffoldError,
    output::Output,
    prompt::{self, InputProvider},
    provision::{Provisioner, Settings},
    recipe::Recipe,
    request::ProvisioningRequest,
    runner::{CommandRunner, RealCommandRunner},
};
use anyhow::{Context, Result};
use std::{env, path::Path};

/// Execute the action's business logic by delegating to the appropriate module
pub fn execute(action: Action) -> Result<()> {
    match action {
        Action::Help => {
            commands::new().print_help()?;
            Ok(())
        }
        Action::New { recipe, settings } => {
            let workdir = env::current_dir().context("Failed to read the current directory")?;
            let input = prompt::from_stdin();
            scaffold(
                recipe,
                &settings,
                &workdir,
                input.as_ref(),
                &RealCommandRunner,
            )
        }
    }
}

/// Ask for the answers, validate them and provision the database inside `workdir`
///
/// Provisioning failures are shown on the spinner before being returned.
///
/// # Errors
///
/// Returns `ScaffoldError::Validation` if any answer is invalid, or
/// `ScaffoldError::Provisioning` if an external step fails
pub fn scaffold(
    recipe: &Recipe,
    settings: &Settings,
    workdir: &Path,
    input: &dyn InputProvider,
    runner: &dyn CommandRunner,
) -> Result<()> {
    let answers = prompt::collect(input)?;
    let request = ProvisioningRequest::validate(&answers, workdir).map_err(ScaffoldError::from)?;

    tracing::debug!(?request, recipe = recipe.id, "request validated");

    let spinner = Output::spinner(format!(
        "✨ Scaffolding a new database in {}",
        workdir.display()
    ));

    match Provisioner::new(runner, settings, workdir).run(recipe, &request, &spinner) {
        Ok(target) => {
            tracing::info!(path = %target.display(), "database provisioned");
            spinner.finish_success(format!("Database {} is now running", request.database()));
            Ok(())
        }
        Err(e) => {
            spinner.finish_error(format!("Error: {e}"));
            Err(e.into())
        }
    }
}
