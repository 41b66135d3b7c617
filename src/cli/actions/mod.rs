mod run;

pub use run::scaffold;

use crate::{provision::Settings, recipe::Recipe};

/// Action enum representing each possible command
#[derive(Debug)]
pub enum Action {
    /// `--new` was not given, print usage
    Help,
    New {
        recipe: &'static Recipe,
        settings: Settings,
    },
}

impl Action {
    /// Execute the action
    ///
    /// # Errors
    ///
    /// Returns an error if the action fails to execute
    pub fn execute(self) -> anyhow::Result<()> {
        run::execute(self)
    }
}
