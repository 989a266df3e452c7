//! Boundary to the task-execution engine
//!
//! The engine owns file discovery, stashing, task scheduling and reporting.
//! From here it is one asynchronous call: given a [`NormalizedConfig`], it
//! eventually reports whether all tasks passed, or fails.

use anyhow::Result;
use std::future::Future;

use crate::config::NormalizedConfig;

mod process;

pub use process::ProcessEngine;

pub trait Engine {
    /// Run all tasks. `Ok(false)` means tasks failed; `Err` means the engine itself broke.
    fn run(&self, config: &NormalizedConfig) -> impl Future<Output = Result<bool>> + Send;
}
