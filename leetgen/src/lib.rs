//! Deterministic passphrase wordlist built from common breached passwords.
//!
//! Every seed password is expanded through three transformation families:
//!
//! - casing: all lowercase, all uppercase, capitalized
//! - leet substitution: `a→@`, `o→0`, `e→3`, `i→1`, `s→$`
//! - suffixes: `""`, `1`, `12`, `123`, `1234`, `12345`, `!`, `2024`, `#btc`, `69`
//!
//! That gives at most 3 × 10 × 2 = 60 candidates per seed. Candidates are
//! deduplicated in generation order, capped at a [`Limit`] and wrapped into
//! [`PassphraseRecord`]s ready to be serialized.
//!
//! Generation is a pure function of the seed list and the configuration, so two
//! runs with the same inputs always produce the same records in the same order.
//!
//! ```
//! use leetgen::{GeneratorConfig, generate};
//!
//! let records = generate(["admin"], &GeneratorConfig::default());
//! assert_eq!(records[0].passphrase, "admin");
//! assert!(records.iter().any(|r| r.passphrase == "@dm1n2024"));
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod record;
pub mod seed;
pub mod select;
pub mod transform;

pub use config::{DEFAULT_LIMIT, GeneratorConfig, Limit};
pub use error::Error;
pub use generator::{PassphraseGenerator, generate};
pub use record::{CATEGORY, MODIFIERS, PassphraseRecord, build_records};
pub use seed::{SEED_TERMS, seed_terms};
pub use select::{CandidateSet, Order, select};
pub use transform::{
    CaseVariant, MAX_CANDIDATES_PER_TERM, SUFFIXES, expand, expand_all, leet_char, leetify,
};
