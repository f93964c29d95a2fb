// bases/pull_cli/src/output.rs

/// Print a failed argument parse: clap's rendered error (which includes the
/// usage line) followed by two lines of guidance.
pub fn print_usage_error(error: &clap::Error) {
    eprint!("{error}");
    eprintln!("Pass one argument: a comma-separated list of model names.");
    eprintln!("Example: pull-cli \"phi:latest,llama2:13b\"");
}

pub struct OutputHandler {
    verbose: bool,
}

impl OutputHandler {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn print_batch_start(&self, count: usize) {
        println!("Starting sequential download of {count} models...\n");
    }

    pub fn print_batch_complete(&self) {
        println!("\n✨ All models downloaded successfully!");
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        eprintln!("Error: {}", error);

        if self.verbose {
            eprintln!("\nError details:");
            error.chain().skip(1).for_each(|cause| {
                eprintln!("  caused by: {}", cause);
            });
        }
    }
}
