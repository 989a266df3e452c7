//! Process lifecycle: install the interrupt policy, normalize, invoke, map the outcome
//!
//! Flag parsing happens before a [`Lifecycle`] exists; `--version`, `--help`
//! and malformed flags never reach it.

use std::process::ExitCode;

use crate::cli::Flags;
use crate::config::NormalizedConfig;
use crate::engine::Engine;
use crate::signals::InterruptPolicy;

/// Terminal process status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success = 0,
    Failure = 1,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/// How the engine call settled
#[derive(Debug)]
pub enum RunOutcome {
    /// All tasks passed
    Passed,
    /// The engine ran and reported failing tasks
    Failed,
    /// The engine itself broke
    Errored(anyhow::Error),
}

impl RunOutcome {
    /// Failed tasks and engine errors are indistinguishable at the exit-code level
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            RunOutcome::Passed => ExitStatus::Success,
            RunOutcome::Failed | RunOutcome::Errored(_) => ExitStatus::Failure,
        }
    }

    /// Phase the lifecycle ends in for this outcome
    pub fn terminal_phase(&self) -> Phase {
        match self.exit_status() {
            ExitStatus::Success => Phase::Succeeded,
            ExitStatus::Failure => Phase::Failed,
        }
    }

    /// Short label for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            RunOutcome::Passed => "passed",
            RunOutcome::Failed => "tasks-failed",
            RunOutcome::Errored(_) => "engine-error",
        }
    }
}

impl From<anyhow::Result<bool>> for RunOutcome {
    fn from(result: anyhow::Result<bool>) -> Self {
        match result {
            Ok(true) => RunOutcome::Passed,
            Ok(false) => RunOutcome::Failed,
            Err(e) => RunOutcome::Errored(e),
        }
    }
}

/// Lifecycle stages, in order. Flag parsing precedes `Start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Start,
    SignalInstalled,
    Normalizing,
    Invoking,
    Succeeded,
    Failed,
}

pub struct Lifecycle {
    policy: InterruptPolicy,
    phase: Phase,
}

impl Lifecycle {
    pub fn new(policy: InterruptPolicy) -> Self {
        Self {
            policy,
            phase: Phase::Start,
        }
    }

    fn advance(&mut self, next: Phase) {
        tracing::trace!(from = ?self.phase, to = ?next, "Lifecycle transition");
        self.phase = next;
    }

    /// Drive one invocation to completion. Consumes the controller; no phase is revisited.
    pub async fn run<E: Engine>(mut self, flags: &Flags, platform: &str, engine: &E) -> RunOutcome {
        if let Err(e) = self.policy.install() {
            tracing::warn!("{e:#}");
        }
        self.advance(Phase::SignalInstalled);

        self.advance(Phase::Normalizing);
        let config = NormalizedConfig::from_flags(flags, platform);

        self.advance(Phase::Invoking);
        let outcome = RunOutcome::from(engine.run(&config).await);

        match &outcome {
            RunOutcome::Errored(e) => {
                tracing::debug!(outcome = outcome.kind(), "Engine failed: {e:#}");
            }
            _ => tracing::debug!(outcome = outcome.kind(), "Engine finished"),
        }

        self.advance(outcome.terminal_phase());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Engine that records the configuration it was handed
    struct RecordingEngine {
        result: fn() -> anyhow::Result<bool>,
        seen: Mutex<Vec<NormalizedConfig>>,
    }

    impl RecordingEngine {
        fn new(result: fn() -> anyhow::Result<bool>) -> Self {
            Self {
                result,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl Engine for RecordingEngine {
        async fn run(&self, config: &NormalizedConfig) -> anyhow::Result<bool> {
            self.seen.lock().unwrap().push(config.clone());
            (self.result)()
        }
    }

    async fn run_with(engine: &RecordingEngine) -> RunOutcome {
        Lifecycle::new(InterruptPolicy::Default)
            .run(&Flags::default(), "linux", engine)
            .await
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitStatus::Success.code(), 0);
        assert_eq!(ExitStatus::Failure.code(), 1);
    }

    #[tokio::test]
    async fn test_passing_engine_exits_zero() {
        let engine = RecordingEngine::new(|| Ok(true));
        let outcome = run_with(&engine).await;
        assert!(matches!(outcome, RunOutcome::Passed));
        assert_eq!(outcome.exit_status(), ExitStatus::Success);
    }

    #[tokio::test]
    async fn test_failing_engine_exits_one() {
        let engine = RecordingEngine::new(|| Ok(false));
        let outcome = run_with(&engine).await;
        assert!(matches!(outcome, RunOutcome::Failed));
        assert_eq!(outcome.exit_status(), ExitStatus::Failure);
    }

    #[tokio::test]
    async fn test_erroring_engine_exits_one_and_keeps_cause() {
        let engine = RecordingEngine::new(|| Err(anyhow!("git index is locked")));
        let outcome = run_with(&engine).await;
        assert_eq!(outcome.exit_status(), ExitStatus::Failure);
        assert_eq!(outcome.kind(), "engine-error");
        match outcome {
            RunOutcome::Errored(e) => assert_eq!(e.to_string(), "git index is locked"),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_repeated_runs_are_idempotent() {
        let engine = RecordingEngine::new(|| Ok(false));
        for _ in 0..3 {
            assert_eq!(run_with(&engine).await.exit_status(), ExitStatus::Failure);
        }
        let seen = engine.seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert!(seen.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[tokio::test]
    async fn test_engine_receives_normalized_config() {
        let engine = RecordingEngine::new(|| Ok(true));
        run_with(&engine).await;

        let seen = engine.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], NormalizedConfig::from_flags(&Flags::default(), "linux"));
        assert_eq!(seen[0].max_arg_length(), 65536);
    }

    #[tokio::test]
    async fn test_suppressed_interrupts_do_not_block_completion() {
        let engine = RecordingEngine::new(|| Ok(true));
        let flags = Flags::default();
        let run = Lifecycle::new(InterruptPolicy::Suppress).run(&flags, "linux", &engine);

        let outcome = tokio::time::timeout(Duration::from_secs(5), run)
            .await
            .expect("lifecycle should settle once the engine resolves");
        assert_eq!(outcome.exit_status(), ExitStatus::Success);
    }

    #[tokio::test]
    async fn test_run_ends_in_terminal_phase() {
        let passing = RecordingEngine::new(|| Ok(true));
        assert_eq!(run_with(&passing).await.terminal_phase(), Phase::Succeeded);

        let failing = RecordingEngine::new(|| Ok(false));
        assert_eq!(run_with(&failing).await.terminal_phase(), Phase::Failed);

        let broken = RecordingEngine::new(|| Err(anyhow!("engine crashed")));
        assert_eq!(run_with(&broken).await.terminal_phase(), Phase::Failed);
    }
}
