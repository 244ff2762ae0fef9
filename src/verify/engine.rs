//! Roll and commitment recomputation.
//!
//! Implements the casino's published scheme: the roll is derived from the
//! SHA-256 of `serverSeed_clientSeed_nonce`, the commitment hash from the
//! SHA-256 of the server seed concatenated with the secret salt.

use sha2::{Digest, Sha256};

/// Upper bound (exclusive) for roll values. Fixed protocol parameter.
pub const ROLL_MAX: u64 = 100_000_000;

/// Leading hex digits of the digest that feed the roll value.
const ROLL_HEX_DIGITS: usize = 16;

/// Derive the roll for a seed pair and nonce.
///
/// The nonce is hashed byte-for-byte as the casino supplied it: `"04"` and
/// `"4"` are different messages and yield different rolls, so callers must
/// not reformat it. The first 16 hex digits of the digest are read as an
/// unsigned 64-bit value and reduced modulo [`ROLL_MAX`]. Values at or above
/// 2^63 occur half the time, so the full u64 range is required here.
pub fn compute_roll(server_seed: &str, client_seed: &str, nonce: &str) -> u64 {
    let combined = format!("{server_seed}_{client_seed}_{nonce}");
    let digest = hex::encode(Sha256::digest(combined.as_bytes()));

    let value = u64::from_str_radix(&digest[..ROLL_HEX_DIGITS], 16)
        .expect("16 hex digits always fit in u64");

    value % ROLL_MAX
}

/// Commitment hash for a server seed and salt: SHA-256 over their
/// concatenation (no separator), as 64 lowercase hex chars.
pub fn commitment_hash(server_seed: &str, secret_salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(server_seed.as_bytes());
    hasher.update(secret_salt.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_is_deterministic() {
        let a = compute_roll("alpha", "beta", "1");
        let b = compute_roll("alpha", "beta", "1");
        assert_eq!(a, b);
    }

    #[test]
    fn test_roll_known_vectors() {
        assert_eq!(compute_roll("alpha", "beta", "1"), 47_293_161);
        assert_eq!(compute_roll("alpha", "beta", "2"), 24_808_387);
        assert_eq!(compute_roll("c4ca4238a0b92382", "my_seed", "4"), 31_137_182);
    }

    #[test]
    fn test_roll_stays_in_range() {
        for nonce in 0..200 {
            let roll = compute_roll("range_seed", "range_client", &nonce.to_string());
            assert!(roll < ROLL_MAX, "roll {} out of range for nonce {}", roll, nonce);
        }
    }

    #[test]
    fn test_roll_sensitive_to_every_input() {
        let base = compute_roll("alpha", "beta", "1");
        assert_ne!(compute_roll("alphb", "beta", "1"), base);
        assert_ne!(compute_roll("alpha", "betb", "1"), base);
        assert_ne!(compute_roll("alpha", "beta", "2"), base);
    }

    #[test]
    fn test_nonce_text_is_not_canonicalized() {
        // "04" and "4" name the same counter but are different hash inputs.
        let plain = compute_roll("c4ca4238a0b92382", "my_seed", "4");
        let padded = compute_roll("c4ca4238a0b92382", "my_seed", "04");
        assert_eq!(plain, 31_137_182);
        assert_eq!(padded, 69_130_130);
    }

    #[test]
    fn test_roll_correct_above_i64_range() {
        // This digest starts with 0xdb..., so the 16-digit value exceeds
        // 2^63 and would go wrong under signed 64-bit arithmetic.
        let digest = hex::encode(Sha256::digest(b"c4ca4238a0b92382_my_seed_3"));
        let value = u64::from_str_radix(&digest[..16], 16).unwrap();
        assert!(value > i64::MAX as u64);

        assert_eq!(compute_roll("c4ca4238a0b92382", "my_seed", "3"), 68_528_489);
    }

    #[test]
    fn test_commitment_hash_shape() {
        let hash = commitment_hash("alpha", "beta");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(hash, commitment_hash("alpha", "beta"));
    }

    #[test]
    fn test_commitment_known_vectors() {
        assert_eq!(
            commitment_hash("alpha", "beta"),
            "a4c4aeb92c20500f364b12b3771ef3a11193e2cf04d0f28956a829749993b39f"
        );
        assert_eq!(
            commitment_hash("c4ca4238a0b92382", "0dcc509a6f75849b"),
            "08428467285068b426356b9b0d0ae1e80378d9137d5e559e5f8377dbd6dde29f"
        );
    }

    #[test]
    fn test_commitment_concatenation_has_no_separator() {
        // Moving a byte across the seed/salt boundary must not change the hash.
        assert_eq!(commitment_hash("alphab", "eta"), commitment_hash("alpha", "beta"));
    }
}
