//! Roll record and verification result types.

use serde::{Deserialize, Serialize};

/// Roll data as published by the casino. All fields are textual on the wire,
/// including the numeric ones.
///
/// Every field defaults to the empty string, so a field missing from the
/// JSON and a field present but empty are the same condition to validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RollRecord {
    /// Secret seed, revealed after play. A `*` prefix marks it unrevealed.
    #[serde(default)]
    pub server_seed: String,
    /// Secret salt, same masking rule as the server seed.
    #[serde(default)]
    pub secret_salt: String,
    /// Commitment hash published before play (64 lowercase hex chars).
    #[serde(default)]
    pub public_hash: String,
    /// Player-supplied seed.
    #[serde(default)]
    pub client_seed: String,
    /// Per-roll counter.
    #[serde(default)]
    pub nonce: String,
    /// Claimed roll result.
    #[serde(default)]
    pub roll: String,
}

impl RollRecord {
    /// Field name/value pairs, in wire order.
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("server_seed", self.server_seed.as_str()),
            ("secret_salt", self.secret_salt.as_str()),
            ("public_hash", self.public_hash.as_str()),
            ("client_seed", self.client_seed.as_str()),
            ("nonce", self.nonce.as_str()),
            ("roll", self.roll.as_str()),
        ]
    }

    /// A record that verifies cleanly, for demos and manual testing.
    pub fn sample() -> Self {
        Self {
            server_seed: "c4ca4238a0b92382".to_string(),
            secret_salt: "0dcc509a6f75849b".to_string(),
            public_hash: "08428467285068b426356b9b0d0ae1e80378d9137d5e559e5f8377dbd6dde29f"
                .to_string(),
            client_seed: "my_seed".to_string(),
            nonce: "4".to_string(),
            roll: "31137182".to_string(),
        }
    }
}

/// Outcome of recomputing a single roll and its commitment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerificationResult {
    pub original_roll: u64,
    pub computed_roll: u64,
    pub rolls_match: bool,
    pub original_hash: String,
    pub computed_hash: String,
    pub hashes_match: bool,
}

/// Terminal state of a verification attempt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    /// Record malformed, or a required field missing/empty.
    InvalidInput,
    /// Server seed or salt still masked; nothing can be recomputed yet.
    SeedUnrevealed,
    /// Seeds revealed; both comparisons were performed.
    Verified(VerificationResult),
}
