use crate::request::Answers;
use anyhow::{Context, Result, bail};
use std::{
    cell::RefCell,
    io::{self, BufRead, IsTerminal},
};

pub const USERNAME_PROMPT: &str = "Choose a username?";
pub const PASSWORD_PROMPT: &str = "Choose a password?";
pub const DATABASE_PROMPT: &str = "Choose a database name?";
pub const PORT_PROMPT: &str = "Choose a port?";

/// Source of answers to the interactive questions
pub trait InputProvider {
    /// Ask `question` and return the raw answer
    ///
    /// # Errors
    ///
    /// Returns an error if the answer could not be read
    fn ask(&self, question: &str) -> Result<String>;

    /// Like [`InputProvider::ask`], without echoing what is typed
    ///
    /// # Errors
    ///
    /// Returns an error if the answer could not be read
    fn ask_secret(&self, question: &str) -> Result<String> {
        self.ask(question)
    }
}

/// Reads answers from the terminal
///
/// Empty answers are accepted here and rejected by validation, so every
/// problem is reported in one batch.
pub struct TerminalInput;

impl InputProvider for TerminalInput {
    fn ask(&self, question: &str) -> Result<String> {
        cliclack::input(question)
            .required(false)
            .interact()
            .with_context(|| format!("Failed to read answer to '{question}'"))
    }

    fn ask_secret(&self, question: &str) -> Result<String> {
        cliclack::password(question)
            .mask('▪')
            .interact()
            .with_context(|| format!("Failed to read answer to '{question}'"))
    }
}

/// Reads one answer per line, used when there is no terminal to prompt on
///
/// Questions are still written to stderr. A trailing `\n` or `\r\n` is stripped.
pub struct LineInput<R> {
    reader: RefCell<R>,
}

impl<R: BufRead> LineInput<R> {
    #[must_use]
    pub const fn new(reader: R) -> Self {
        Self {
            reader: RefCell::new(reader),
        }
    }
}

impl<R: BufRead> InputProvider for LineInput<R> {
    fn ask(&self, question: &str) -> Result<String> {
        eprintln!("{question}");

        let mut line = String::new();
        let read = self
            .reader
            .borrow_mut()
            .read_line(&mut line)
            .with_context(|| format!("Failed to read answer to '{question}'"))?;
        if read == 0 {
            bail!("No answer to '{question}', input closed");
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Interactive prompts on a terminal, plain lines from stdin otherwise
#[must_use]
pub fn from_stdin() -> Box<dyn InputProvider> {
    if io::stdin().is_terminal() && io::stderr().is_terminal() {
        Box::new(TerminalInput)
    } else {
        tracing::debug!("no terminal, reading answers line by line from stdin");
        Box::new(LineInput::new(io::stdin().lock()))
    }
}

/// Ask the four questions in order, the password without echo
///
/// # Errors
///
/// Returns an error if any answer could not be read
pub fn collect(input: &dyn InputProvider) -> Result<Answers> {
    let username = input.ask(USERNAME_PROMPT)?;
    let password = input.ask_secret(PASSWORD_PROMPT)?;
    let database = input.ask(DATABASE_PROMPT)?;
    let port = input.ask(PORT_PROMPT)?;

    Ok(Answers {
        username,
        password,
        database,
        port,
    })
}
