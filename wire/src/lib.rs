//! Shared REST schema for the campus gamification backend.
//!
//! This crate owns the JSON representation used by both `client` (browser)
//! and `cli` (terminal). Records are passed through from the backend as-is;
//! nothing here enforces referential integrity between challenges, solutions
//! and users.
//!
//! LAYOUT
//! ======
//! - `model`: entity records and request bodies.
//! - `endpoints`: path builders relative to the API base.
//! - `filter`: challenge list query parameters.
//! - `error`: backend error-body extraction for display.
//! - `attachment`: base64 file encoding with a size cap.

pub mod attachment;
pub mod endpoints;
pub mod error;
pub mod filter;
pub mod model;

pub use attachment::{Attachment, AttachmentError};
pub use error::error_message;
pub use filter::ChallengeFilter;
pub use model::*;

/// Upper bound (inclusive) accepted for an evaluation score. The lower bound is 0.
///
/// Evaluation inputs and their labels both derive from this value so the two
/// can never drift apart.
pub const MAX_SCORE: i64 = 200;

/// Largest file accepted for a solution attachment, before base64 encoding.
pub const MAX_ATTACHMENT_BYTES: usize = 5 * 1024 * 1024;

/// Fallback shown when a login attempt fails without a backend message.
pub const LOGIN_FAILED: &str = "Login failed";

/// Fallback shown when a registration attempt fails without a backend message.
pub const REGISTRATION_FAILED: &str = "Registration failed";

/// Returns `true` when `score` lies within `0..=MAX_SCORE`.
#[must_use]
pub fn score_in_range(score: i64) -> bool {
    (0..=MAX_SCORE).contains(&score)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
