//! Content moderation for submitted text.
//!
//! # Data Flow
//! ```text
//! Validation handler:
//!     length precondition (caller-side)
//!         → sanitizer.rs (mask banned tokens)
//!         → cleaned text back to the handler
//! ```
//!
//! # Design Decisions
//! - Sanitization is a pure function over an immutable word set
//! - Length checks stay with the caller; the sanitizer never rejects input

pub mod sanitizer;

pub use sanitizer::{Sanitizer, DEFAULT_BANNED_WORDS, MASK};
