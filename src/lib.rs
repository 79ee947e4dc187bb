//! # otp-extract
//!
//! Extracts one-time passcodes from unstructured email text using ranked
//! pattern matching.
//!
//! Given the decoded plain-text body of a message, [`extract`] returns the
//! code a human reader would identify as "the verification code", despite
//! noise like dates, order numbers, and multiple candidate formats. The
//! engine is a pure function: no I/O, no state, no failure modes beyond
//! "nothing matched".
//!
//! ## How selection works
//!
//! Four built-in pattern families each scan the whole text and report every
//! occurrence:
//!
//! 1. Vendor-tagged codes (`FB-12345`, `G-482913`) - tag kept in the code
//! 2. Keyword-announced codes ("code", "otp", "pin", "verification", ...)
//! 3. Codes followed by "is your" / "is the"
//! 4. Bare 4-8 digit runs, excluding near-term years (2020-2039)
//!
//! All candidates are pooled and the leftmost occurrence wins, regardless of
//! family. The first code-shaped token a reader meets while scanning
//! top-to-bottom is almost always the intended one.
//!
//! ## Quick start
//!
//! ```
//! use otp_extract::extract;
//!
//! let body = "Your verification code: 123456. It expires in 10 minutes.";
//! let code = extract(body).map(|c| c.into_code());
//! assert_eq!(code.as_deref(), Some("123456"));
//!
//! // Most emails are not OTP emails; absence is a normal outcome.
//! assert!(extract("Hello, just checking in.").is_none());
//! ```
//!
//! ## Custom matcher sets
//!
//! ```
//! use otp_extract::matcher::{CodeMatcher, KeywordCodeMatcher, VendorCodeMatcher};
//! use otp_extract::OtpExtractor;
//!
//! let extractor = OtpExtractor::with_matchers(vec![
//!     Box::new(VendorCodeMatcher::custom("WA", 6, 6).unwrap()) as Box<dyn CodeMatcher>,
//!     Box::new(KeywordCodeMatcher::new()),
//! ]);
//!
//! let found = extractor.extract("WA-482913 is your WhatsApp code");
//! assert_eq!(found.map(|c| c.into_code()).as_deref(), Some("WA-482913"));
//! ```
//!
//! ## Display labels
//!
//! Presentation is layered on top of extraction, never mixed into it:
//!
//! ```
//! use otp_extract::{label, OtpExtractor};
//!
//! let extractor = OtpExtractor::default();
//! let shown = extractor.extract_labeled("Your code: 4821", label::otp);
//! assert_eq!(shown.as_deref(), Some("OTP: 4821"));
//! ```
//!
//! ## Untrusted input
//!
//! Message bodies come from arbitrary third-party senders. Every built-in
//! pattern compiles under the `regex` crate's linear-time engine and none
//! uses nested quantifiers, so adversarially long input degrades linearly
//! rather than exponentially. Extraction is safe to run concurrently from
//! any number of callers; each call is independent.
//!
//! ## Observability
//!
//! The crate uses `tracing` for instrumentation. Matching emits debug-level
//! events only; a message without a code is an expected outcome and is never
//! logged as an error.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Public modules
pub mod error;
pub mod expiry;
pub mod label;
pub mod matcher;

// Internal modules
mod extractor;

// Re-exports for ergonomic API
pub use error::{Error, Result};
pub use extractor::{extract, Candidate, OtpExtractor};
