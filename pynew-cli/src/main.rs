//! python-new-project CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

use std::fmt::Display;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use pynew_cli_lib::{observability, Invocation, NewCommand, ResourceDir, ScaffoldError, Settings};

const AFTER_LONG_HELP: &str = "\
The project name or path is a plain name relative to the current directory, or a
relative or absolute path for the project to go in. It need not exist.

One of --app (application) or --lib (library) must be selected, unless a
default_kind is configured. Applications use a Pipfile to lock down concrete
dependencies whilst libraries specify abstract dependencies in setup.py. An
application does not need a setup.py as it need not be packaged, just deployed
and configured.

--force is matched exactly (case-sensitive). It allows writing into an existing
project directory; that directory is never deleted, even if generation fails.

Configuration: ~/.config/python-new-project/config.toml and PYNEW_* variables
(resources_dir, default_kind, quiet).";

#[derive(Parser)]
#[command(name = "python-new-project")]
#[command(version)]
#[command(about = "Python project skeleton generator", long_about = None)]
#[command(after_long_help = AFTER_LONG_HELP)]
#[command(args_override_self = true)]
struct Cli {
    /// Project name or path
    #[arg(value_name = "PROJECT_NAME_OR_PATH")]
    target: Option<String>,

    /// Generate an application (`app/` package and a Pipfile)
    #[arg(long)]
    app: bool,

    /// Generate a library (`<name>/` package and a setup.py)
    #[arg(long)]
    lib: bool,

    /// Write into the project directory even if it already exists
    #[arg(long)]
    force: bool,

    /// Suppress progress and next-steps output
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Config file to use instead of the user config
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Cli {
    fn invocation(&self) -> Invocation {
        Invocation {
            target: self.target.clone(),
            app: self.app,
            lib: self.lib,
            force: self.force,
        }
    }
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => abort(&usage_error(&err)),
        },
    };
    observability::init(cli.verbose)?;

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .unwrap_or_else(|err| abort(&format!("Failed to load configuration: {err}")));

    let cwd = std::env::current_dir().context("Failed to get current directory")?;

    if let Err(err) = run(&cli, &settings, &cwd) {
        tracing::debug!(error = ?err, validation = err.is_validation(), "aborting");
        abort(&err);
    }

    Ok(())
}

fn run(cli: &Cli, settings: &Settings, cwd: &Path) -> Result<(), ScaffoldError> {
    let project = cli.invocation().resolve(cwd, settings.default_kind)?;
    let resources = ResourceDir::locate(settings.resources_dir.as_deref());

    NewCommand::new(project, resources)
        .quiet(cli.quiet || settings.quiet)
        .execute()
}

/// First line of a clap error, without its short usage and `--help` hint
fn usage_error(err: &clap::Error) -> String {
    let rendered = err.to_string();
    rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string()
}

/// Print the message and full help, then exit non-zero
fn abort(message: &dyn Display) -> ! {
    println!("{message}");
    println!();
    println!("{}", Cli::command().render_long_help());
    std::process::exit(1);
}
