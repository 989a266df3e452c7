//! Engine running as a separate executable
//!
//! The configuration is written as JSON to the engine's stdin; its exit code
//! is the outcome. Output is inherited so the engine reports directly.

use anyhow::{Context, Result, bail};
use figment::Figment;
use std::io::ErrorKind;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use super::Engine;
use crate::config::{NormalizedConfig, Settings};

pub struct ProcessEngine {
    settings: Figment,
    color_level: Option<u8>,
}

impl ProcessEngine {
    /// Settings are extracted lazily so a broken setup surfaces as an engine failure
    pub fn new(settings: Figment, color_level: Option<u8>) -> Self {
        Self {
            settings,
            color_level,
        }
    }

    fn command(&self) -> Result<Command> {
        let settings = Settings::from_figment(&self.settings)?;
        let program = which::which(&settings.engine)
            .with_context(|| format!("Engine executable `{}` not found", settings.engine))?;

        tracing::debug!(engine = %program.display(), args = ?settings.engine_args, "Resolved engine");

        let mut command = Command::new(program);
        command
            .args(&settings.engine_args)
            .stdin(Stdio::piped())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(level) = self.color_level {
            command.env("FORCE_COLOR", level.to_string());
        }

        Ok(command)
    }
}

impl Engine for ProcessEngine {
    async fn run(&self, config: &NormalizedConfig) -> Result<bool> {
        let payload = serde_json::to_vec(config).context("Failed to serialize configuration")?;
        let mut child = self
            .command()?
            .spawn()
            .context("Failed to start engine")?;

        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(&payload).await {
                Ok(()) => {}
                // Engine exited without reading its configuration
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    tracing::debug!("Engine closed stdin before reading configuration");
                }
                Err(e) => return Err(e).context("Failed to send configuration to engine"),
            }
        }

        let status = child.wait().await.context("Failed to wait for engine")?;
        match status.code() {
            Some(0) => Ok(true),
            Some(code) => {
                tracing::debug!(code, "Engine reported failure");
                Ok(false)
            }
            None => bail!("Engine terminated without an exit code ({status})"),
        }
    }
}
