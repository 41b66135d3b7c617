#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use anyhow::anyhow;
use dbscaffold::{
    prompt::InputProvider,
    runner::{CommandOptions, CommandOutput, CommandRunner},
};
use std::{cell::RefCell, collections::VecDeque, fs, path::PathBuf};

/// Answers handed out in order, errors once they run out
pub struct CannedInput(RefCell<VecDeque<String>>);

impl CannedInput {
    pub fn new(answers: &[&str]) -> Self {
        Self(RefCell::new(
            answers.iter().map(ToString::to_string).collect(),
        ))
    }
}

impl InputProvider for CannedInput {
    fn ask(&self, question: &str) -> anyhow::Result<String> {
        self.0
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow!("no answer for {question}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

/// Stands in for git and docker: `clone` creates the target directory,
/// any program listed in `failing` exits non-zero
#[derive(Default)]
pub struct FakeRunner {
    pub invocations: RefCell<Vec<Invocation>>,
    pub failing: Vec<(&'static str, &'static str)>,
}

impl FakeRunner {
    pub fn failing_on(program: &'static str, subcommand: &'static str) -> Self {
        Self {
            failing: vec![(program, subcommand)],
            ..Self::default()
        }
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        options: &CommandOptions,
    ) -> anyhow::Result<CommandOutput> {
        self.invocations.borrow_mut().push(Invocation {
            program: program.to_string(),
            args: args.iter().map(ToString::to_string).collect(),
            cwd: options.cwd.clone(),
        });

        let subcommand = args.first().copied().unwrap_or_default();
        if self
            .failing
            .iter()
            .any(|(p, s)| *p == program && *s == subcommand)
        {
            return Ok(CommandOutput {
                success: false,
                code: Some(1),
                stdout: String::new(),
                stderr: format!("{program} {subcommand}: simulated failure\n"),
            });
        }

        if subcommand == "clone" {
            let target = args.last().unwrap();
            let cwd = options.cwd.clone().unwrap();
            fs::create_dir_all(cwd.join(target)).unwrap();
            fs::write(cwd.join(target).join("compose.yml"), "services: {}\n").unwrap();
        }

        Ok(CommandOutput {
            success: true,
            code: Some(0),
            ..CommandOutput::default()
        })
    }
}
