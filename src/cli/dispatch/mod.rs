use crate::{cli::actions::Action, provision::Settings, recipe};
use anyhow::Result;
use clap::ArgMatches;

fn extract_settings(matches: &ArgMatches) -> Settings {
    let defaults = Settings::default();

    Settings {
        template_base: matches
            .get_one::<String>("template-base")
            .cloned()
            .unwrap_or(defaults.template_base),
        git: matches
            .get_one::<String>("git-bin")
            .cloned()
            .unwrap_or(defaults.git),
        docker: matches
            .get_one::<String>("docker-bin")
            .cloned()
            .unwrap_or(defaults.docker),
    }
}

/// Convert `ArgMatches` into typed Action enum with validation
///
/// # Errors
///
/// Returns `ScaffoldError::UnsupportedType` if `--new` is given with a
/// missing or unknown `--type`
pub fn dispatch(matches: &ArgMatches) -> Result<Action> {
    if !matches.get_flag("new") {
        return Ok(Action::Help);
    }

    let requested = matches
        .get_one::<String>("type")
        .map(String::as_str)
        .unwrap_or_default();
    let recipe = recipe::lookup(requested)?;

    Ok(Action::New {
        recipe,
        settings: extract_settings(matches),
    })
}
