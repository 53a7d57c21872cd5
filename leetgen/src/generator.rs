use tracing::debug;

use crate::config::GeneratorConfig;
use crate::record::{PassphraseRecord, build_records};
use crate::seed::SEED_TERMS;
use crate::select::select;
use crate::transform::expand_all;

/// Runs the full pipeline over a list of seed terms: expand, select, wrap.
///
/// Each call starts from an empty candidate set.
pub fn generate<I, S>(terms: I, config: &GeneratorConfig) -> Vec<PassphraseRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let candidates = expand_all(terms);
    let unique = candidates.len();
    let selected = select(candidates, config.limit, config.order);
    debug!(unique, selected = selected.len(), limit = config.limit.get(), "selected candidates");
    build_records(selected)
}

/// Generator bound to a seed list and a configuration.
#[derive(Debug, Clone)]
pub struct PassphraseGenerator<'a> {
    terms: &'a [&'a str],
    config: GeneratorConfig,
}

impl PassphraseGenerator<'static> {
    /// Creates a generator over the built-in seed list.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { terms: SEED_TERMS, config }
    }
}

impl<'a> PassphraseGenerator<'a> {
    pub fn with_terms(terms: &'a [&'a str], config: GeneratorConfig) -> Self {
        Self { terms, config }
    }

    pub fn generate(&self) -> Vec<PassphraseRecord> {
        generate(self.terms.iter().copied(), &self.config)
    }
}
