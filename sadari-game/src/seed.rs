//! Deterministic seed derivation for ladder generation streams.
//!
//! The original web view drew every rung and shuffle step from the ambient
//! `Math.random()`. Here all randomness flows from a user-visible `u64` seed,
//! domain-separated per stream so a replayed session rebuilds the same
//! ladder for the same seed and round.

use hmac::{Hmac, Mac};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sha2::Sha256;

const STRUCTURE_TAG: &[u8] = b"structure";
const SESSION_TAG: &[u8] = b"session";

/// Derive a stream seed from the user seed and a domain tag.
#[must_use]
pub fn derive_stream_seed(user_seed: u64, domain_tag: &[u8]) -> u64 {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(&user_seed.to_le_bytes()).expect("64-bit seed is valid key");
    mac.update(domain_tag);
    let digest = mac.finalize().into_bytes();
    let seed_bytes: [u8; 8] = digest[..8].try_into().expect("digest slice length");
    u64::from_le_bytes(seed_bytes)
}

/// The single generator instance backing one structure-generation call.
///
/// `round` separates successive structures built under the same user seed
/// (a session reset starts a new round); `ChaCha20Rng` keeps the stream
/// portable across platforms.
#[must_use]
pub fn structure_rng(user_seed: u64, round: u32) -> ChaCha20Rng {
    let mut tag = Vec::with_capacity(STRUCTURE_TAG.len() + 4);
    tag.extend_from_slice(STRUCTURE_TAG);
    tag.extend_from_slice(&round.to_le_bytes());
    ChaCha20Rng::seed_from_u64(derive_stream_seed(user_seed, &tag))
}

/// Fold caller-supplied entropy into a session seed.
#[must_use]
pub fn seed_from_entropy(entropy: u64) -> u64 {
    derive_stream_seed(entropy, SESSION_TAG)
}
