//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (lengths > 0, address parses)
//! - Catch moderation entries that could never match a token
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::ServiceConfig;

/// A single semantic problem found in a config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `listener.bind_address` does not parse as a socket address.
    InvalidBindAddress(String),
    /// `site.root` is empty.
    EmptySiteRoot,
    /// `moderation.max_length` is zero; every chirp would be rejected.
    ZeroMaxLength,
    /// A banned word is empty or contains whitespace, so it can never match
    /// a whole token.
    UnmatchableBannedWord(String),
    /// `timeouts.request_secs` is zero.
    ZeroRequestTimeout,
    /// `limits.max_body_bytes` is zero; no request body could be read.
    ZeroBodyLimit,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "listener.bind_address {:?} is not a valid socket address", addr)
            }
            ValidationError::EmptySiteRoot => write!(f, "site.root must not be empty"),
            ValidationError::ZeroMaxLength => {
                write!(f, "moderation.max_length must be greater than zero")
            }
            ValidationError::UnmatchableBannedWord(word) => {
                write!(f, "banned word {:?} is empty or contains whitespace and can never match", word)
            }
            ValidationError::ZeroRequestTimeout => {
                write!(f, "timeouts.request_secs must be greater than zero")
            }
            ValidationError::ZeroBodyLimit => {
                write!(f, "limits.max_body_bytes must be greater than zero")
            }
        }
    }
}

/// Validate a config, collecting every problem found.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.site.root.is_empty() {
        errors.push(ValidationError::EmptySiteRoot);
    }

    if config.moderation.max_length == 0 {
        errors.push(ValidationError::ZeroMaxLength);
    }

    for word in &config.moderation.banned_words {
        if word.is_empty() || word.chars().any(char::is_whitespace) {
            errors.push(ValidationError::UnmatchableBannedWord(word.clone()));
        }
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
