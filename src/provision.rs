use crate::{
    error::ScaffoldError,
    output::Reporter,
    recipe::{DEFAULT_TEMPLATE_BASE, Recipe},
    request::ProvisioningRequest,
    runner::{CommandOptions, CommandRunner},
};
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

pub const ENV_FILE: &str = ".env";

/// Tunables that are not part of a recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base location of the template repositories
    pub template_base: String,
    /// `git` compatible binary used for the clone
    pub git: String,
    /// `docker` compatible binary used for pull and compose
    pub docker: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            template_base: DEFAULT_TEMPLATE_BASE.to_string(),
            git: "git".to_string(),
            docker: "docker".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Clone,
    Pull,
    Env,
    Up,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Clone => "git clone",
            Self::Pull => "docker pull",
            Self::Env => "writing .env",
            Self::Up => "docker compose up",
        };
        write!(f, "{name}")
    }
}

/// Runs the provisioning steps of a recipe, strictly one after the other
///
/// The first failing step aborts the rest. Whatever earlier steps created,
/// the cloned directory or a pulled image, is left as is.
pub struct Provisioner<'a> {
    runner: &'a dyn CommandRunner,
    settings: &'a Settings,
    workdir: &'a Path,
}

impl<'a> Provisioner<'a> {
    #[must_use]
    pub fn new(runner: &'a dyn CommandRunner, settings: &'a Settings, workdir: &'a Path) -> Self {
        Self {
            runner,
            settings,
            workdir,
        }
    }

    /// Clone, pull, write `.env` and start the stack
    ///
    /// Returns the directory holding the new database.
    ///
    /// # Errors
    ///
    /// Returns `ScaffoldError::Provisioning` naming the first step that failed
    pub fn run(
        &self,
        recipe: &Recipe,
        request: &ProvisioningRequest,
        reporter: &dyn Reporter,
    ) -> Result<PathBuf, ScaffoldError> {
        let target = request.target_dir(self.workdir);

        reporter.step("Cloning repo and pulling docker image (this may take a while)");
        let url = recipe.template_url(&self.settings.template_base);
        tracing::info!(%url, database = request.database(), "cloning template");
        self.exec(
            Step::Clone,
            &self.settings.git,
            &["clone", "--", url.as_str(), request.database()],
            self.workdir,
        )?;

        tracing::info!(image = recipe.image, "pulling image");
        self.exec(
            Step::Pull,
            &self.settings.docker,
            &["pull", recipe.image],
            &target,
        )?;

        reporter.step("Setting up environment variables");
        let env_path = target.join(ENV_FILE);
        tracing::info!(path = %env_path.display(), "writing environment file");
        fs::write(&env_path, recipe.env_file(request)).map_err(|e| {
            ScaffoldError::Provisioning {
                step: Step::Env,
                message: format!("{}: {e}", env_path.display()),
            }
        })?;

        reporter.step("Starting database container");
        tracing::info!(port = request.port(), "starting container stack");
        self.exec(
            Step::Up,
            &self.settings.docker,
            &["compose", "up", "-d"],
            &target,
        )?;

        Ok(target)
    }

    fn exec(
        &self,
        step: Step,
        program: &str,
        args: &[&str],
        cwd: &Path,
    ) -> Result<(), ScaffoldError> {
        let output = self
            .runner
            .run(program, args, &CommandOptions::with_cwd(cwd))
            .map_err(|e| ScaffoldError::Provisioning {
                step,
                message: format!("{e:#}"),
            })?;

        if output.success {
            tracing::debug!(%step, "step finished");
            Ok(())
        } else {
            tracing::debug!(%step, code = ?output.code, stderr = %output.stderr.trim(), "step failed");
            Err(ScaffoldError::Provisioning {
                step,
                message: output.failure_message(),
            })
        }
    }
}
