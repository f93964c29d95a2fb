// components/model_puller/src/lib.rs
mod ollama;
mod types;

use std::sync::Arc;
use std::time::Duration;

pub use ollama::OllamaCli;
pub use types::{BatchOutcome, PullError, Puller};

/// Pause between successive pulls.
const DEFAULT_COOLDOWN: Duration = Duration::from_secs(5);

/// Split a comma-separated batch into trimmed model names.
///
/// Order is preserved and duplicates are kept; empty segments are dropped.
pub fn parse_models(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

pub struct ModelPuller {
    puller: Arc<dyn Puller + Send + Sync>,
    cooldown: Duration,
}

impl ModelPuller {
    /// Create a ModelPuller backed by the `ollama` CLI.
    pub fn new() -> Self {
        Self::with_puller(Arc::new(OllamaCli::new()))
    }

    /// Create a ModelPuller with a specific puller implementation.
    pub fn with_puller(puller: Arc<dyn Puller + Send + Sync>) -> Self {
        Self {
            puller,
            cooldown: DEFAULT_COOLDOWN,
        }
    }

    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    /// Pull every model in order, stopping at the first failure.
    ///
    /// A cooldown pause separates successive pulls but never follows the
    /// final one. The next pull does not start until the previous tool
    /// invocation has fully exited and the cooldown has elapsed.
    pub async fn pull_batch(&self, models: &[String]) -> BatchOutcome {
        let mut pulled = 0;
        for (index, model) in models.iter().enumerate() {
            println!("Now downloading {model}");
            match self.puller.pull(model).await {
                Ok(()) => {
                    println!("\n✅ Successfully downloaded {model}");
                    pulled += 1;
                }
                Err(error) => {
                    report_failure(model, &error);
                    return BatchOutcome::Aborted {
                        model: model.clone(),
                        pulled,
                    };
                }
            }

            if index + 1 < models.len() {
                println!(
                    "\nWaiting {} seconds before proceeding...",
                    self.cooldown.as_secs()
                );
                tokio::time::sleep(self.cooldown).await;
            }
        }
        BatchOutcome::Completed { pulled }
    }
}

impl Default for ModelPuller {
    fn default() -> Self {
        Self::new()
    }
}

fn report_failure(model: &str, error: &PullError) {
    match error {
        PullError::ToolNotFound => {
            println!("\n❌ Error: Ollama is not installed or not in your PATH");
            println!("Please install Ollama first: https://ollama.ai");
        }
        PullError::PullFailed { .. } => {
            println!("\n❌ Failed to download {model}");
        }
        PullError::Io(e) => {
            println!("\n❌ Unexpected error while downloading {model}: {e}");
        }
    }
    tracing::debug!(model, %error, "pull failed");
}
