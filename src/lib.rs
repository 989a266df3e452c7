//! # lint-staged - run tasks against staged git files
//!
//! This crate is the command-line front-end of a pre-commit tool. It parses
//! flags, normalizes them into a [`config::NormalizedConfig`], keeps Ctrl-C
//! from killing the process while tasks clean up, hands the configuration to
//! a task [`engine::Engine`] and turns the outcome into an exit code.
//!
//! ## Usage
//!
//! ```bash
//! # .git/hooks/pre-commit
//! lint-staged --concurrent 4 --relative
//! ```
//!
//! The default engine is an external executable (`lint-staged-engine`) that
//! reads the configuration as JSON on stdin. Point at another one with
//! `LINT_STAGED_ENGINE=/path/to/engine`.
//!
//! ## Exit codes
//!
//! - `0`: all tasks passed
//! - `1`: tasks failed, or the engine could not run at all
//! - `2`: malformed command-line flags

pub mod cli;
pub mod config;
pub mod engine;
pub mod lifecycle;
pub mod platform;
pub mod signals;
pub mod terminal;

pub use cli::Flags;
pub use config::NormalizedConfig;
pub use lifecycle::{ExitStatus, Lifecycle, RunOutcome};

/// Result type alias for lint-staged operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
