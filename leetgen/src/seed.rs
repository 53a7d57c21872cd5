/// Common breached passwords the wordlist is expanded from.
///
/// Order matters: it is the primary sort key of the generated output.
pub const SEED_TERMS: &[&str] = &[
    "password", "123456", "123456789", "qwerty", "abc123", "letmein", "monkey", "football",
    "admin", "welcome", "login", "iloveyou", "dragon", "sunshine", "princess", "passw0rd",
    "shadow", "master", "654321", "superman", "111111", "123123", "trustno1", "baseball",
    "whatever", "starwars", "computer", "harley", "batman", "jordan", "buster", "tigger",
    "soccer", "hockey", "george", "michael", "michelle", "thomas", "love", "killer", "pepper",
    "daniel", "jennifer", "jessica", "zxcvbn", "asdfgh", "qazwsx", "1qaz2wsx",
];

/// Returns the built-in seed list.
#[inline]
pub fn seed_terms() -> &'static [&'static str] {
    SEED_TERMS
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_seed_len() {
        assert_eq!(SEED_TERMS.len(), 48);
    }

    #[test]
    fn test_seed_terms_unique() {
        let unique: HashSet<&str> = SEED_TERMS.iter().copied().collect();
        assert_eq!(unique.len(), SEED_TERMS.len());
    }

    #[test]
    fn test_seed_terms_non_empty_ascii() {
        for term in seed_terms() {
            assert!(!term.is_empty());
            assert!(term.is_ascii(), "{term} is not ascii");
        }
    }
}
