//! Display formatting for extracted codes.
//!
//! Labeling is a presentation concern kept apart from matching: every function
//! here is a pure `&str -> String` transform suitable for passing to
//! [`OtpExtractor::extract_labeled`](crate::OtpExtractor::extract_labeled).
//! Swapping the label for a localized one never touches the matchers.

/// Formats a code with the default "OTP: " label.
///
/// # Example
///
/// ```
/// use otp_extract::label;
///
/// assert_eq!(label::otp("482913"), "OTP: 482913");
/// assert_eq!(label::otp("FB-12345"), "OTP: FB-12345");
/// ```
#[must_use]
pub fn otp(code: &str) -> String {
    with_prefix("OTP", code)
}

/// Formats a code with an arbitrary prefix, rendered as `"{prefix}: {code}"`.
///
/// Useful for localized labels.
///
/// # Example
///
/// ```
/// use otp_extract::label;
///
/// assert_eq!(label::with_prefix("Kod", "482913"), "Kod: 482913");
/// ```
#[must_use]
pub fn with_prefix(prefix: &str, code: &str) -> String {
    format!("{prefix}: {code}")
}
