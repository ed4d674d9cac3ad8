//! Error types for NewsNex operations.
//!
//! This module defines the main error type [`NewsnexError`]. Note that
//! "nothing found" is never an error: an article without a content region or
//! without any person mentions produces empty results. Errors are reserved for
//! invalid configuration, invalid input URLs, and I/O or network failures.
//!
//! # Example
//!
//! ```rust
//! use newsnex_core::{NewsnexError, Result};
//!
//! fn require_url(input: &str) -> Result<&str> {
//!     if input.is_empty() {
//!         return Err(NewsnexError::InvalidUrl("empty input".to_string()));
//!     }
//!     Ok(input)
//! }
//!
//! assert!(require_url("").is_err());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for profile extraction operations.
#[derive(Error, Debug)]
pub enum NewsnexError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and non-success HTTP statuses.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    ///
    /// Returned when a URL cannot be parsed, lacks a host, or uses a scheme
    /// other than http/https.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A CSS selector in a locator configuration could not be parsed.
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// A pattern in an extractor configuration is not a valid regex.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A pattern rule is structurally unusable, e.g. it does not capture a name.
    #[error("Invalid rule `{rule}`: {reason}")]
    InvalidRule { rule: String, reason: String },

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Standard I/O errors for file and stdin operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing profiles for export failed.
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for NewsnexError {
    fn from(err: serde_json::Error) -> Self {
        NewsnexError::Serialization(err.to_string())
    }
}

/// Result type alias for NewsnexError.
pub type Result<T> = std::result::Result<T, NewsnexError>;
