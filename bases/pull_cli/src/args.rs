// bases/pull_cli/src/args.rs
use clap::Parser;

/// Pull a batch of Ollama models, one after another
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Comma-separated model names, e.g. "phi:latest,llama2:13b"
    pub models: String,

    /// Seconds to pause between successive pulls
    #[arg(long, default_value_t = 5)]
    pub wait: u64,

    /// Enable verbose error output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_exactly_one_batch_argument() {
        assert!(Args::try_parse_from(["pull-cli"]).is_err());
        assert!(Args::try_parse_from(["pull-cli", "a,b", "c"]).is_err());
    }

    #[test]
    fn one_batch_argument_parses_with_defaults() {
        let args = Args::try_parse_from(["pull-cli", "phi:latest,llama2:13b"]).unwrap();
        assert_eq!(args.models, "phi:latest,llama2:13b");
        assert_eq!(args.wait, 5);
        assert!(!args.verbose);
    }
}
