//! Verdict presentation.
//!
//! Maps structured verdicts to the text shown to players. Kept apart from
//! the verification core so wording can change without touching it.

use crate::verify::{VerificationResult, Verdict};

const INVALID_INPUT_MSG: &str =
    "Your input is invalid. Try copying the JSON roll data from the site and pasting it here.";

const SEED_UNREVEALED_MSG: &str =
    "Server seed seems to be not yet revealed. It is impossible to verify the roll right now.";

const IDENTICAL_MSG: &str = "And they are identical!";

/// Render the player-facing message for a verdict.
pub fn render_message(verdict: &Verdict) -> String {
    match verdict {
        Verdict::InvalidInput => INVALID_INPUT_MSG.to_string(),
        Verdict::SeedUnrevealed => SEED_UNREVEALED_MSG.to_string(),
        Verdict::Verified(result) => render_result(result),
    }
}

fn render_result(result: &VerificationResult) -> String {
    let mut lines = vec![format!(
        "Original roll is {} and calculated roll is {}.",
        result.original_roll, result.computed_roll
    )];
    if result.rolls_match {
        lines.push(IDENTICAL_MSG.to_string());
    }

    lines.push(format!(
        "Original public hash is {} and the valid public hash for this server seed and salt is {}.",
        result.original_hash, result.computed_hash
    ));
    if result.hashes_match {
        lines.push(IDENTICAL_MSG.to_string());
    }

    lines.join("\n")
}
