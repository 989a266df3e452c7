//! Command-line interface for lint-staged
//!
//! [`Flags`] is the declarative flag schema. It only names flags and their
//! types; defaults are applied by [`crate::config::NormalizedConfig::from_flags`].

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config::{Concurrency, Settings};
use crate::engine::ProcessEngine;
use crate::lifecycle::{ExitStatus, Lifecycle};
use crate::signals::InterruptPolicy;
use crate::terminal::{ConsoleTerminal, TerminalCapability};

/// Run tasks against staged git files
#[derive(Debug, Default, Parser)]
#[command(
    name = "lint-staged",
    version,
    about = "Run tasks against staged git files",
    disable_version_flag = true
)]
pub struct Flags {
    /// Print version
    #[arg(long, action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Allow empty commits when tasks revert all staged changes
    #[arg(long)]
    pub allow_empty: bool,

    /// Path to configuration file
    #[arg(short, long, value_name = "path", num_args = 0..=1)]
    pub config: Option<Option<PathBuf>>,

    /// Print additional debug information
    #[arg(short, long)]
    pub debug: bool,

    /// Disable the backup stash, and do not revert in case of errors
    #[arg(long = "no-stash")]
    pub no_stash: bool,

    /// The number of tasks to run concurrently, or false to run tasks serially
    #[arg(short = 'p', long, value_name = "parallel tasks")]
    pub concurrent: Option<Concurrency>,

    /// Disable lint-staged's own console output
    #[arg(short, long)]
    pub quiet: bool,

    /// Pass relative filepaths to tasks
    #[arg(short, long)]
    pub relative: bool,

    /// Unsafely skip parsing and run tasks in a real shell
    #[arg(short = 'x', long)]
    pub shell: bool,

    /// Unsafely enable shell and disable warning
    #[arg(long)]
    pub unsafe_shell_disable_warnings: bool,

    /// Show task output even when tasks succeed; by default only failed output is shown
    #[arg(short, long)]
    pub verbose: bool,
}

/// Wire the real collaborators together and drive one invocation
pub async fn run(flags: Flags) -> ExitStatus {
    setup_logging(flags.debug, flags.quiet);
    tracing::debug!("Running `lint-staged@{}`", crate::VERSION);

    let color_level = ConsoleTerminal.color_level();
    let engine = ProcessEngine::new(Settings::figment(), color_level);

    Lifecycle::new(InterruptPolicy::Suppress)
        .run(&flags, crate::platform::current(), &engine)
        .await
        .exit_status()
}

fn setup_logging(debug: bool, quiet: bool) {
    if quiet && !debug {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            tracing_subscriber::EnvFilter::new("warn,lint_staged=debug")
        } else {
            tracing_subscriber::EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
