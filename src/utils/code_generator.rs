//! Short code generation.
//!
//! Codes are drawn uniformly, with replacement, from a 62-character
//! alphanumeric alphabet. The generator knows nothing about the store;
//! uniqueness is enforced by the caller.

use std::cell::RefCell;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Characters a short code may contain.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of codes handed out by the shorten endpoint.
pub const CODE_LENGTH: usize = 6;

/// Path segments routed to system endpoints; never usable as codes.
pub const RESERVED_CODES: &[&str] = &["shorten", "metrics", "health"];

/// Seed taken once, the first time any thread generates a code.
static PROCESS_SEED: LazyLock<u64> = LazyLock::new(|| {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
});

static NEXT_STREAM: AtomicU64 = AtomicU64::new(0);

thread_local! {
    static GENERATOR: RefCell<SmallRng> = RefCell::new(SmallRng::seed_from_u64(stream_seed(
        *PROCESS_SEED,
        NEXT_STREAM.fetch_add(1, Ordering::Relaxed),
    )));
}

/// Derives the seed of one worker thread's stream from the process seed.
fn stream_seed(process_seed: u64, stream: u64) -> u64 {
    process_seed ^ stream.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Generates a random code of exactly `length` characters.
///
/// Each thread owns a non-cryptographic generator seeded once from the
/// process seed, so concurrent callers never share a lock. A `length` of
/// zero yields an empty string.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    GENERATOR.with(|rng| generate_code_with(&mut *rng.borrow_mut(), length))
}

/// Generates a code from the supplied random source.
pub fn generate_code_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Returns true if `code` would shadow a system route.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_requested_length() {
        for length in [1, 5, 6, 8, 10, 12] {
            assert_eq!(generate_code(length).len(), length);
        }
    }

    #[test]
    fn test_generate_code_zero_length_is_empty() {
        assert_eq!(generate_code(0), "");
    }

    #[test]
    fn test_generate_code_uses_alphabet_only() {
        for _ in 0..200 {
            let code = generate_code(CODE_LENGTH);
            assert!(code.bytes().all(|b| ALPHABET.contains(&b)), "{code}");
        }
    }

    #[test]
    fn test_alphabet_is_62_distinct_alphanumerics() {
        let distinct: HashSet<u8> = ALPHABET.iter().copied().collect();
        assert_eq!(distinct.len(), 62);
        assert!(ALPHABET.iter().all(|b| b.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        assert_eq!(generate_code_with(&mut a, 12), generate_code_with(&mut b, 12));
    }

    #[test]
    fn test_generate_code_covers_whole_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<char> = generate_code_with(&mut rng, 10_000).chars().collect();

        assert_eq!(seen.len(), ALPHABET.len());
    }

    #[test]
    fn test_generate_code_produces_distinct_codes() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code(CODE_LENGTH)).collect();

        // 62^6 possible codes; a collision among 1000 is vanishingly unlikely.
        assert!(codes.len() >= 999);
    }

    #[test]
    fn test_stream_seeds_differ_per_thread() {
        let seeds: HashSet<u64> = (0..64).map(|stream| stream_seed(42, stream)).collect();

        assert_eq!(seeds.len(), 64);
        assert!(!seeds.contains(&42));
    }

    #[test]
    fn test_threads_draw_independent_codes() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| generate_code(12)))
            .collect();
        let codes: HashSet<String> = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect();

        assert_eq!(codes.len(), 4);
    }

    #[test]
    fn test_reserved_codes() {
        assert!(is_reserved("health"));
        assert!(is_reserved("metrics"));
        assert!(is_reserved("shorten"));
        assert!(!is_reserved("Health"));
        assert!(!is_reserved("abc123"));
    }
}
