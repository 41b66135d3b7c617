pub mod cli;
pub mod error;
pub mod output;
pub mod prompt;
pub mod provision;
pub mod recipe;
pub mod request;
pub mod runner;
