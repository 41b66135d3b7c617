use crate::{provision::Step, request::ValidationErrors};
use thiserror::Error;

/// Terminal errors, every one of them ends the process with exit code 1
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Unknown or malformed command line arguments
    #[error("{0}")]
    Usage(String),

    #[error("Invalid database type. Valid types are: {}", supported.join(", "))]
    UnsupportedType {
        requested: String,
        supported: Vec<&'static str>,
    },

    /// One or more answers broke a constraint, nothing was provisioned
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// An external step failed, earlier steps are left in place
    #[error("{step} failed: {message}")]
    Provisioning { step: Step, message: String },
}
