// components/model_puller/src/types.rs
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PullError {
    #[error("ollama is not installed or not in your PATH")]
    ToolNotFound,

    #[error("ollama pull {model} exited with {status}")]
    PullFailed { model: String, status: ExitStatus },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Final state of a batch after the last attempted pull.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Every model in the batch was pulled.
    Completed { pulled: usize },

    /// `model` failed to pull; everything after it was never attempted.
    Aborted { model: String, pulled: usize },
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, BatchOutcome::Completed { .. })
    }
}

#[async_trait::async_trait]
pub trait Puller {
    /// Pull one model, relaying the tool's raw output to the console.
    ///
    /// Blocks until the tool has fully exited; exactly one child process
    /// exists per call.
    async fn pull(&self, model: &str) -> Result<(), PullError>;
}
