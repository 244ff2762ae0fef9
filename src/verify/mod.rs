//! Provably-fair roll verification core.
//!
//! Pure and synchronous: no I/O, no shared state. The HTTP and CLI shells
//! feed it a [`RollRecord`] and render the resulting [`Verdict`].

pub mod engine;
pub mod types;
pub mod validator;

pub use engine::{commitment_hash, compute_roll, ROLL_MAX};
pub use types::{RollRecord, VerificationResult, Verdict};
pub use validator::check_roll;
