use crate::recipe::{DEFAULT_TEMPLATE_BASE, supported};
use clap::{
    Arg, ArgAction, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

/// Pure clap command definitions with zero business logic
#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("new")
                .action(ArgAction::SetTrue)
                .help("Create a new project")
                .long("new")
                .short('n'),
        )
        .arg(
            Arg::new("type")
                .env("DBSCAFFOLD_TYPE")
                .help(format!(
                    "Choose a database type ({})",
                    supported().join(", ")
                ))
                .long("type")
                .short('t')
                .value_name("TYPE"),
        )
        .arg(
            Arg::new("template-base")
                .default_value(DEFAULT_TEMPLATE_BASE)
                .env("DBSCAFFOLD_TEMPLATE_BASE")
                .help("Base location of the template repositories")
                .long("template-base")
                .long_help(
                    "Base location of the template repositories.\n\
                    The repository for a type is cloned from <BASE>/<type>.\n\n\
                    Example: https://github.com/lassejlv",
                )
                .value_name("URL"),
        )
        .arg(
            Arg::new("git-bin")
                .default_value("git")
                .env("DBSCAFFOLD_GIT")
                .help("git binary used to clone the template")
                .long("git-bin")
                .value_name("PATH"),
        )
        .arg(
            Arg::new("docker-bin")
                .default_value("docker")
                .env("DBSCAFFOLD_DOCKER")
                .help("docker compatible binary used to pull the image and start the stack")
                .long("docker-bin")
                .value_name("PATH"),
        )
        .arg(
            Arg::new("verbose")
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)")
                .long("verbose")
                .short('v'),
        )
}
