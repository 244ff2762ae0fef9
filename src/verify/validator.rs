//! Verification state machine.
//!
//! A record reaches exactly one of three terminal states: invalid input,
//! seed not yet revealed, or verified with both comparisons recorded.
//! Rejection reasons are logged at debug level; callers only ever see the
//! generic verdict.

use crate::errors::VerifyError;
use crate::verify::engine::{commitment_hash, compute_roll};
use crate::verify::types::{RollRecord, VerificationResult, Verdict};

/// Prefix the casino uses to mask seeds that are not yet revealed.
const MASK_PREFIX: char = '*';

/// Run the verification state machine over a roll record.
pub fn check_roll(record: &RollRecord) -> Verdict {
    if let Err(err) = check_required_fields(record) {
        tracing::debug!(%err, "rejecting roll record");
        return Verdict::InvalidInput;
    }

    // Masking is checked before the numeric fields: a record for an
    // unfinished round is unverifiable, not malformed.
    if record.server_seed.starts_with(MASK_PREFIX) || record.secret_salt.starts_with(MASK_PREFIX) {
        return Verdict::SeedUnrevealed;
    }

    let original_roll = match parse_numeric("roll", &record.roll) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(%err, "rejecting roll record");
            return Verdict::InvalidInput;
        }
    };
    if let Err(err) = parse_numeric("nonce", &record.nonce) {
        tracing::debug!(%err, "rejecting roll record");
        return Verdict::InvalidInput;
    }

    // The nonce goes in as the original text; only its numeric shape was
    // validated above.
    let computed_roll = compute_roll(&record.server_seed, &record.client_seed, &record.nonce);
    let computed_hash = commitment_hash(&record.server_seed, &record.secret_salt);
    let hashes_match = computed_hash == record.public_hash;

    Verdict::Verified(VerificationResult {
        original_roll,
        computed_roll,
        rolls_match: original_roll == computed_roll,
        original_hash: record.public_hash.clone(),
        computed_hash,
        hashes_match,
    })
}

fn check_required_fields(record: &RollRecord) -> Result<(), VerifyError> {
    for (name, value) in record.fields() {
        if value.is_empty() {
            return Err(VerifyError::MissingField(name));
        }
    }
    Ok(())
}

fn parse_numeric(field: &'static str, value: &str) -> Result<u64, VerifyError> {
    value.parse::<u64>().map_err(|_| VerifyError::NonNumericField {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_record_verifies() {
        let verdict = check_roll(&RollRecord::sample());

        let Verdict::Verified(result) = verdict else {
            panic!("expected verified, got {:?}", verdict);
        };
        assert_eq!(result.original_roll, 31_137_182);
        assert_eq!(result.computed_roll, 31_137_182);
        assert!(result.rolls_match);
        assert!(result.hashes_match);
    }

    #[test]
    fn test_each_missing_field_is_invalid() {
        let clear: [fn(&mut RollRecord); 6] = [
            |r: &mut RollRecord| r.server_seed.clear(),
            |r: &mut RollRecord| r.secret_salt.clear(),
            |r: &mut RollRecord| r.public_hash.clear(),
            |r: &mut RollRecord| r.client_seed.clear(),
            |r: &mut RollRecord| r.nonce.clear(),
            |r: &mut RollRecord| r.roll.clear(),
        ];

        for wipe in clear {
            let mut record = RollRecord::sample();
            wipe(&mut record);
            assert_eq!(check_roll(&record), Verdict::InvalidInput);
        }
    }

    #[test]
    fn test_empty_record_is_invalid() {
        assert_eq!(check_roll(&RollRecord::default()), Verdict::InvalidInput);
    }

    #[test]
    fn test_masked_server_seed_is_unrevealed() {
        let mut record = RollRecord::sample();
        record.server_seed = "*hidden".to_string();
        assert_eq!(check_roll(&record), Verdict::SeedUnrevealed);
    }

    #[test]
    fn test_masked_salt_is_unrevealed() {
        let mut record = RollRecord::sample();
        record.secret_salt = "*hidden".to_string();
        assert_eq!(check_roll(&record), Verdict::SeedUnrevealed);
    }

    #[test]
    fn test_masking_wins_over_bad_numeric_fields() {
        // An unfinished round is reported as unverifiable even if the rest
        // of the record is junk.
        let mut record = RollRecord::sample();
        record.server_seed = "*hidden".to_string();
        record.roll = "not-a-number".to_string();
        assert_eq!(check_roll(&record), Verdict::SeedUnrevealed);
    }

    #[test]
    fn test_non_numeric_roll_is_invalid() {
        let mut record = RollRecord::sample();
        record.roll = "31137182.5".to_string();
        assert_eq!(check_roll(&record), Verdict::InvalidInput);
    }

    #[test]
    fn test_negative_roll_is_invalid() {
        let mut record = RollRecord::sample();
        record.roll = "-1".to_string();
        assert_eq!(check_roll(&record), Verdict::InvalidInput);
    }

    #[test]
    fn test_non_numeric_nonce_is_invalid() {
        let mut record = RollRecord::sample();
        record.nonce = "four".to_string();
        assert_eq!(check_roll(&record), Verdict::InvalidInput);
    }

    #[test]
    fn test_wrong_roll_still_verifies_with_mismatch() {
        let mut record = RollRecord::sample();
        record.roll = "12345".to_string();

        let Verdict::Verified(result) = check_roll(&record) else {
            panic!("expected verified");
        };
        assert_eq!(result.original_roll, 12_345);
        assert!(!result.rolls_match);
        assert!(result.hashes_match);
    }

    #[test]
    fn test_wrong_hash_still_verifies_with_mismatch() {
        let mut record = RollRecord::sample();
        record.public_hash = "00".repeat(32);

        let Verdict::Verified(result) = check_roll(&record) else {
            panic!("expected verified");
        };
        assert!(result.rolls_match);
        assert!(!result.hashes_match);
        assert_eq!(result.original_hash, "00".repeat(32));
    }

    #[test]
    fn test_hash_comparison_is_case_sensitive() {
        let mut record = RollRecord::sample();
        record.public_hash = record.public_hash.to_uppercase();

        let Verdict::Verified(result) = check_roll(&record) else {
            panic!("expected verified");
        };
        assert!(!result.hashes_match);
    }

    #[test]
    fn test_padded_nonce_text_changes_the_outcome() {
        let mut record = RollRecord::sample();
        record.nonce = "04".to_string();

        let Verdict::Verified(result) = check_roll(&record) else {
            panic!("expected verified");
        };
        assert_eq!(result.computed_roll, 69_130_130);
        assert!(!result.rolls_match);
    }
}
