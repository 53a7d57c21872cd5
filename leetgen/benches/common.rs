use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const WORD_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Generates `count` random lowercase seed words of length 4..=12.
/// Uses a fixed seed for reproducible benchmark results.
pub fn generate_random_terms(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            let length = rng.gen_range(4..=12);
            (0..length)
                .map(|_| WORD_CHARS[rng.gen_range(0..WORD_CHARS.len())] as char)
                .collect()
        })
        .collect()
}
