//! Error types for the otp-extract crate.
//!
//! All errors implement [`std::error::Error`] and provide context about what
//! went wrong. Note that extraction itself is infallible: a message with no
//! recognizable code yields `None`, never an error. The only fallible
//! operations are building custom matchers and parsing expiry timestamps.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring matchers or parsing expiry input.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A custom matcher pattern failed to compile.
    #[error("invalid matcher pattern: {pattern}")]
    InvalidPattern {
        /// The pattern that failed to compile.
        pattern: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// Invalid matcher configuration provided.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the configuration error.
        message: String,
    },

    /// A mailbox expiry timestamp was not valid RFC 3339.
    #[error("invalid expiry timestamp: {value}")]
    InvalidTimestamp {
        /// The timestamp string that failed to parse.
        value: String,
        /// The underlying parse error.
        #[source]
        source: chrono::ParseError,
    },
}
