// bases/pull_cli/src/app.rs
use std::time::Duration;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use model_puller::{parse_models, BatchOutcome, ModelPuller};

use crate::args::Args;
use crate::output::OutputHandler;

pub struct App {
    args: Args,
    output: OutputHandler,
}

impl App {
    pub fn new(args: Args) -> Self {
        let output = OutputHandler::new(args.verbose);
        Self { args, output }
    }

    pub async fn run(&self) -> Result<()> {
        let models = parse_models(&self.args.models);
        if models.is_empty() {
            return Err(eyre!(
                "no models specified, expected a comma-separated list like \"phi:latest,llama2:13b\""
            ));
        }

        tracing::debug!(count = models.len(), wait = self.args.wait, "parsed batch");
        self.output.print_batch_start(models.len());

        let puller = ModelPuller::new().with_cooldown(Duration::from_secs(self.args.wait));
        match puller.pull_batch(&models).await {
            BatchOutcome::Completed { .. } => {
                self.output.print_batch_complete();
                Ok(())
            }
            BatchOutcome::Aborted { model, .. } => {
                Err(eyre!("stopping due to failure downloading {model}"))
            }
        }
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        self.output.print_error(error);
    }
}
