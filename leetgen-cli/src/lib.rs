//! Command-line front end for the `leetgen` wordlist generator.
//!
//! Generates the leet/suffix/casing passphrase wordlist from the built-in seed
//! passwords and writes it as a pretty-printed JSON array:
//!
//! ```json
//! [
//!   {
//!     "passphrase": "p@$$w0rd123",
//!     "category": "password + leet + suffix",
//!     "modifiers": ["leet", "suffix", "capitalization"]
//!   }
//! ]
//! ```
//!
//! # Usage
//!
//! ```sh
//! leetgen                               # writes brainwallet_phrases_password_leet_v1.1.json
//! leetgen --output words.json --limit 500
//! leetgen --sort                        # lexicographic instead of generation order
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

pub mod error;
pub mod sink;

use std::path::PathBuf;

use clap::Parser;
use leetgen::{GeneratorConfig, Limit, Order, PassphraseGenerator};
use tracing::info;

pub use error::Error;
pub use sink::{JsonFileSink, RecordSink};

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "brainwallet_phrases_password_leet_v1.1.json";

#[derive(Parser, Debug, Clone)]
#[command(name = "leetgen")]
#[command(about = "Generate a leet/suffix/casing passphrase wordlist from common passwords")]
pub struct Args {
    /// Output JSON file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Maximum number of phrases to write
    #[arg(short = 'n', long, default_value_t = leetgen::DEFAULT_LIMIT as i64, allow_negative_numbers = true)]
    pub limit: i64,

    /// Sort phrases lexicographically instead of keeping generation order
    #[arg(long)]
    pub sort: bool,
}

impl Args {
    /// Validates the arguments into a generator configuration.
    pub fn config(&self) -> Result<GeneratorConfig, Error> {
        let order = if self.sort { Order::Lexicographic } else { Order::Generation };
        Ok(GeneratorConfig::default().with_limit(Limit::new(self.limit)?).with_order(order))
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub count: usize,
    pub file_name: String,
}

/// Generates the wordlist and hands it to `sink` in one call.
pub fn generate_into<S: RecordSink>(config: GeneratorConfig, sink: &mut S) -> Result<usize, Error> {
    let records = PassphraseGenerator::new(config).generate();
    info!(count = records.len(), "generated passphrases");
    sink.write_records(&records)?;
    Ok(records.len())
}

/// Runs the CLI: validate, generate, write the JSON file.
///
/// A negative limit is rejected before anything is generated.
pub fn run(args: &Args) -> Result<Summary, Error> {
    let config = args.config()?;
    let mut sink = JsonFileSink::new(&args.output);
    let count = generate_into(config, &mut sink)?;
    Ok(Summary { count, file_name: sink.file_name() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("leetgen").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_args_defaults() {
        let args = parse(&[]);
        assert_eq!(args.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(args.limit, 10_000);
        assert!(!args.sort);
        assert_eq!(args.config().unwrap(), GeneratorConfig::default());
    }

    #[test]
    fn test_args_flags() {
        let args = parse(&["-o", "out.json", "-n", "12", "--sort"]);
        let config = args.config().unwrap();
        assert_eq!(args.output, PathBuf::from("out.json"));
        assert_eq!(config.limit.get(), 12);
        assert_eq!(config.order, Order::Lexicographic);
    }

    #[test]
    fn test_negative_limit_rejected() {
        let args = parse(&["--limit", "-3"]);
        let err = args.config().unwrap_err();
        assert!(matches!(err, Error::Config(leetgen::Error::NegativeLimit { limit: -3 })));
    }

    #[test]
    fn test_generate_into_memory_sink() {
        let mut sink = MemorySink::default();
        let config = GeneratorConfig::default().with_limit(Limit::from(5));
        let count = generate_into(config, &mut sink).unwrap();

        assert_eq!(count, 5);
        let phrases: Vec<&str> = sink.records.iter().map(|r| r.passphrase.as_str()).collect();
        assert_eq!(phrases, ["password", "p@$$w0rd", "password1", "p@$$w0rd1", "password12"]);
    }
}
