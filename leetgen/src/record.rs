use serde::Serialize;

/// Category tag attached to every record.
pub const CATEGORY: &str = "password + leet + suffix";

/// Modifier tags attached to every record, describing the generation recipe.
pub const MODIFIERS: [&str; 3] = ["leet", "suffix", "capitalization"];

/// One entry of the output wordlist.
///
/// `category` and `modifiers` describe how the corpus was built, not the
/// individual phrase; they are the same for every record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassphraseRecord {
    pub passphrase: String,
    pub category: &'static str,
    pub modifiers: [&'static str; 3],
}

impl PassphraseRecord {
    pub fn new(passphrase: String) -> Self {
        Self { passphrase, category: CATEGORY, modifiers: MODIFIERS }
    }
}

/// Wrap each phrase into a record, preserving order.
pub fn build_records(phrases: Vec<String>) -> Vec<PassphraseRecord> {
    phrases.into_iter().map(PassphraseRecord::new).collect()
}
