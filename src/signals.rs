//! Interrupt handling policy
//!
//! An operator pressing Ctrl-C reaches the whole foreground process group, so
//! the engine sees the interrupt too and runs its own cleanup (restoring the
//! stash, stopping child tasks). The front-end must not die first.

use anyhow::{Context, Result};
use tokio::task::JoinHandle;

/// What the front-end does when it receives an interrupt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterruptPolicy {
    /// Swallow interrupts for the rest of the process lifetime
    #[default]
    Suppress,
    /// Leave the platform default (terminate) in place
    Default,
}

impl InterruptPolicy {
    /// Apply the policy. Must be called from within a tokio runtime.
    ///
    /// The handler is registered before this returns. The returned listener
    /// task never keeps the process alive once `main` finishes.
    pub fn install(self) -> Result<Option<JoinHandle<()>>> {
        match self {
            InterruptPolicy::Default => Ok(None),
            InterruptPolicy::Suppress => {
                let mut interrupts = listen().context("Failed to install interrupt handler")?;
                let listener = tokio::spawn(async move {
                    while interrupts.recv().await.is_some() {
                        tracing::debug!("Ignoring interrupt, waiting for tasks to shut down");
                    }
                });
                Ok(Some(listener))
            }
        }
    }
}

#[cfg(unix)]
fn listen() -> std::io::Result<tokio::signal::unix::Signal> {
    use tokio::signal::unix::{SignalKind, signal};
    signal(SignalKind::interrupt())
}

#[cfg(windows)]
fn listen() -> std::io::Result<tokio::signal::windows::CtrlC> {
    tokio::signal::windows::ctrl_c()
}
