//! Word-level profanity masking.
//!
//! # Responsibilities
//! - Hold the immutable banned word set (lowercased at construction)
//! - Replace banned tokens with a fixed mask, case-insensitively
//! - Preserve everything else byte-for-byte
//!
//! # Design Decisions
//! - Tokenization is a naive split on single spaces, not full Unicode
//!   segmentation; consecutive spaces produce empty tokens that survive
//!   reassembly unchanged
//! - Matching is whole-token only: substrings and punctuation-attached
//!   words pass through

use std::collections::HashSet;

/// Replacement written in place of a banned token.
pub const MASK: &str = "****";

/// Banned words used when no list is configured.
pub const DEFAULT_BANNED_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// Masks banned words in free text.
///
/// The word set is fixed for the lifetime of the sanitizer. `sanitize` is
/// pure and deterministic: the same input always yields the same output.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    banned: HashSet<String>,
}

impl Sanitizer {
    /// Build a sanitizer from a banned word list.
    ///
    /// Entries are lowercased so membership checks are case-insensitive.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            banned: words
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Replace banned tokens with [`MASK`], keeping token positions.
    ///
    /// Splits on single spaces, compares a lowercased copy of each token
    /// against the banned set, and rejoins with single spaces. Non-banned
    /// tokens keep their original casing.
    pub fn sanitize(&self, body: &str) -> String {
        body.split(' ')
            .map(|token| {
                if self.banned.contains(&token.to_lowercase()) {
                    MASK
                } else {
                    token
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Number of banned words in the set.
    pub fn banned_word_count(&self) -> usize {
        self.banned.len()
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new(DEFAULT_BANNED_WORDS)
    }
}
