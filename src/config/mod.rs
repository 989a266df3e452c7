//! Configuration handed to the task engine
//!
//! [`NormalizedConfig`] is built exactly once per invocation from the parsed
//! command-line [`Flags`] and is never mutated afterwards. All defaults live
//! here, the flag schema in [`crate::cli`] only declares names and types.

use serde::Serialize;
use std::fmt;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::cli::Flags;
use crate::platform;

pub mod settings;


pub use settings::Settings;

/// How many tasks the engine may run at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Concurrency {
    /// `true` lets the engine pick, `false` runs tasks serially
    Enabled(bool),
    /// At most this many tasks in parallel
    Limit(NonZeroUsize),
}

impl Default for Concurrency {
    fn default() -> Self {
        Concurrency::Enabled(true)
    }
}

impl FromStr for Concurrency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("true") {
            return Ok(Concurrency::Enabled(true));
        }
        if value.eq_ignore_ascii_case("false") {
            return Ok(Concurrency::Enabled(false));
        }
        value
            .parse::<NonZeroUsize>()
            .map(Concurrency::Limit)
            .map_err(|_| format!("expected `true`, `false` or a positive integer, got `{s}`"))
    }
}

impl fmt::Display for Concurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Concurrency::Enabled(enabled) => write!(f, "{enabled}"),
            Concurrency::Limit(limit) => write!(f, "{limit}"),
        }
    }
}

/// Canonical options passed to the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedConfig {
    allow_empty: bool,
    concurrent: Concurrency,
    #[serde(skip_serializing_if = "Option::is_none")]
    config_path: Option<PathBuf>,
    debug: bool,
    max_arg_length: usize,
    stash: bool,
    quiet: bool,
    relative: bool,
    shell: bool,
    unsafe_shell_disable_warnings: bool,
    verbose: bool,
}

impl NormalizedConfig {
    /// Normalize parsed flags for the given platform identifier.
    ///
    /// Total over every flag combination; `maxArgLength` always comes from
    /// `platform` and cannot be set from the command line.
    pub fn from_flags(flags: &Flags, platform: &str) -> Self {
        let config = Self {
            allow_empty: flags.allow_empty,
            concurrent: flags.concurrent.unwrap_or_default(),
            // `-c` without a value carries no path
            config_path: flags.config.clone().flatten(),
            debug: flags.debug,
            max_arg_length: platform::max_arg_length(platform),
            stash: !flags.no_stash,
            quiet: flags.quiet,
            relative: flags.relative,
            shell: flags.shell,
            unsafe_shell_disable_warnings: flags.unsafe_shell_disable_warnings,
            verbose: flags.verbose,
        };

        tracing::debug!(options = ?config, "Options parsed from command-line");
        config
    }

    pub fn allow_empty(&self) -> bool {
        self.allow_empty
    }

    pub fn concurrent(&self) -> Concurrency {
        self.concurrent
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn max_arg_length(&self) -> usize {
        self.max_arg_length
    }

    pub fn stash(&self) -> bool {
        self.stash
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }

    pub fn relative(&self) -> bool {
        self.relative
    }

    pub fn shell(&self) -> bool {
        self.shell
    }

    pub fn unsafe_shell_disable_warnings(&self) -> bool {
        self.unsafe_shell_disable_warnings
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
