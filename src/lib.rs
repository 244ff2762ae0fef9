//! Fairroll - Provably-Fair Roll Verification Service
//!
//! Recomputes casino roll results from revealed seed material and checks the
//! pre-published commitment hash, so players can audit outcomes independently.
//! The verification core is pure and synchronous; the HTTP API and the
//! `check_roll` CLI are thin shells over it.

pub mod api;
pub mod config;
pub mod errors;
pub mod verify;

pub use verify::{
    check_roll, commitment_hash, compute_roll, RollRecord, VerificationResult, Verdict, ROLL_MAX,
};
