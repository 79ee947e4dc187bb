//! Candidate ranking and the public extraction API.
//!
//! An [`OtpExtractor`] runs a set of [`CodeMatcher`]s over the whole message
//! body, pools every occurrence they report, and returns the leftmost one.
//! First-mentioned code wins regardless of which pattern family produced it:
//! the first code-shaped token a reader encounters while scanning top-to-bottom
//! is almost always the intended one, and later numbers (dates, amounts, order
//! numbers) are noise.

use crate::matcher::{
    BareCodeMatcher, CodeMatcher, KeywordCodeMatcher, TrailingPhraseMatcher, VendorCodeMatcher,
};
use once_cell::sync::Lazy;
use std::borrow::Cow;
use tracing::debug;

static DEFAULT_EXTRACTOR: Lazy<OtpExtractor> = Lazy::new(OtpExtractor::default);

/// A detected code occurrence.
///
/// Carries the code text exactly as it appears in the source (vendor tags
/// included) and, internally, the byte offset of the match used for leftmost
/// ranking. The offset is not part of the public surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a> {
    code: Cow<'a, str>,
    position: usize,
}

impl<'a> Candidate<'a> {
    /// Creates a candidate from a code and the byte offset where its match starts.
    ///
    /// Matchers must report a non-empty `code`; empty candidates are discarded
    /// during ranking.
    #[must_use]
    pub fn new(code: Cow<'a, str>, position: usize) -> Self {
        Self { code, position }
    }

    /// Returns the extracted code text.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Consumes the candidate, returning the code.
    ///
    /// Borrowed from the input text where the matcher allowed it.
    #[must_use]
    pub fn into_code(self) -> Cow<'a, str> {
        self.code
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }
}

/// Extracts the single most likely verification code from message text.
///
/// The default extractor recognizes, in registration order: Facebook-tagged
/// codes, Google-tagged codes, keyword-announced codes, codes followed by
/// "is your"/"is the", and bare 4-8 digit runs (with the year exclusion).
/// Registration order only breaks exact position ties; selection is by
/// leftmost occurrence across all families.
///
/// # Example
///
/// ```
/// use otp_extract::OtpExtractor;
///
/// let extractor = OtpExtractor::default();
/// let found = extractor.extract("Your verification code: 123456");
/// assert_eq!(found.map(|c| c.into_code()).as_deref(), Some("123456"));
/// ```
pub struct OtpExtractor {
    matchers: Vec<Box<dyn CodeMatcher>>,
}

impl Default for OtpExtractor {
    fn default() -> Self {
        Self {
            matchers: vec![
                Box::new(VendorCodeMatcher::facebook()),
                Box::new(VendorCodeMatcher::google()),
                Box::new(KeywordCodeMatcher::new()),
                Box::new(TrailingPhraseMatcher::new()),
                Box::new(BareCodeMatcher::new()),
            ],
        }
    }
}

impl std::fmt::Debug for OtpExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let descriptions: Vec<&str> = self.matchers.iter().map(|m| m.description()).collect();
        f.debug_struct("OtpExtractor")
            .field("matchers", &descriptions)
            .finish()
    }
}

impl OtpExtractor {
    /// Creates an extractor with a custom matcher set.
    ///
    /// Matchers are consulted in the given order; order only matters when two
    /// candidates start at the same offset.
    ///
    /// # Example
    ///
    /// ```
    /// use otp_extract::matcher::{CodeMatcher, VendorCodeMatcher};
    /// use otp_extract::OtpExtractor;
    ///
    /// let extractor = OtpExtractor::with_matchers(vec![
    ///     Box::new(VendorCodeMatcher::custom("WA", 6, 6).unwrap()) as Box<dyn CodeMatcher>,
    /// ]);
    /// let found = extractor.extract("WA-482913 is your WhatsApp code");
    /// assert_eq!(found.map(|c| c.into_code()).as_deref(), Some("WA-482913"));
    /// ```
    #[must_use]
    pub fn with_matchers(matchers: Vec<Box<dyn CodeMatcher>>) -> Self {
        Self { matchers }
    }

    /// Returns the code a human reader would identify as "the verification
    /// code" in `text`, or `None` if no recognized format appears.
    ///
    /// All matchers scan the entire text and every occurrence is pooled; the
    /// candidate with the smallest start offset wins. Absence of a match is a
    /// normal outcome, not an error, and this method never panics for any
    /// input, including the empty string.
    #[must_use]
    pub fn extract<'a>(&self, text: &'a str) -> Option<Candidate<'a>> {
        let mut candidates: Vec<Candidate<'a>> = Vec::new();
        for matcher in &self.matchers {
            let found = matcher.find_candidates(text);
            if !found.is_empty() {
                debug!(
                    matcher = matcher.description(),
                    count = found.len(),
                    "Matcher reported candidates"
                );
            }
            candidates.extend(found.into_iter().filter(|c| !c.code().is_empty()));
        }

        if candidates.is_empty() {
            debug!("No code candidates in text");
            return None;
        }

        // Stable sort keeps registration order for candidates starting at the
        // same offset.
        candidates.sort_by_key(Candidate::position);
        let winner = candidates.into_iter().next()?;
        debug!(code_len = winner.code().len(), "Selected leftmost candidate");
        Some(winner)
    }

    /// Extracts a code and renders it with a caller-supplied label formatter.
    ///
    /// Formatting is display-only and fully decoupled from matching: the
    /// formatter receives the raw code and locale or presentation changes
    /// never touch the matchers.
    ///
    /// # Example
    ///
    /// ```
    /// use otp_extract::{label, OtpExtractor};
    ///
    /// let extractor = OtpExtractor::default();
    /// let shown = extractor.extract_labeled("Your code: 4821", label::otp);
    /// assert_eq!(shown.as_deref(), Some("OTP: 4821"));
    /// ```
    pub fn extract_labeled<F>(&self, text: &str, formatter: F) -> Option<String>
    where
        F: Fn(&str) -> String,
    {
        self.extract(text).map(|c| formatter(c.code()))
    }
}

/// Extracts a code from `text` using the default matcher set.
///
/// Free-function form of [`OtpExtractor::extract`] backed by a lazily built
/// shared extractor, so it is usable from any calling context with no setup
/// and no state.
///
/// # Example
///
/// ```
/// use otp_extract::extract;
///
/// assert_eq!(
///     extract("Use 98765 to continue").map(|c| c.into_code()).as_deref(),
///     Some("98765"),
/// );
/// assert!(extract("Hello, just checking in.").is_none());
/// ```
#[must_use]
pub fn extract(text: &str) -> Option<Candidate<'_>> {
    DEFAULT_EXTRACTOR.extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::ClosureMatcher;

    fn code_of(result: Option<Candidate<'_>>) -> Option<String> {
        result.map(|c| c.into_code().into_owned())
    }

    #[test]
    fn test_keyword_code_beats_nothing_else() {
        let result = extract("Your verification code: 123456");
        assert_eq!(code_of(result).as_deref(), Some("123456"));
    }

    #[test]
    fn test_leftmost_wins_across_families() {
        // Keyword match at offset 0 beats the vendor and bare matches later on.
        let result = extract("Code 1111 appears before FB-22222 and 3333.");
        assert_eq!(code_of(result).as_deref(), Some("1111"));
    }

    #[test]
    fn test_vendor_tag_survives_in_code() {
        let result = extract("Your Facebook code is FB-12345.");
        assert_eq!(code_of(result).as_deref(), Some("FB-12345"));
    }

    #[test]
    fn test_bare_fallback() {
        let result = extract("Use 98765 to continue");
        assert_eq!(code_of(result).as_deref(), Some("98765"));
    }

    #[test]
    fn test_year_alone_is_no_candidate() {
        assert!(extract("This was in 2024").is_none());
    }

    #[test]
    fn test_old_year_is_a_bare_candidate() {
        let result = extract("This was in 1999");
        assert_eq!(code_of(result).as_deref(), Some("1999"));
    }

    #[test]
    fn test_keyword_context_overrides_year_exclusion() {
        // 2024 is year-shaped, but explicit context makes it a code.
        let result = extract("Your code: 2024");
        assert_eq!(code_of(result).as_deref(), Some("2024"));
    }

    #[test]
    fn test_trailing_phrase_overrides_year_exclusion() {
        let result = extract("2024 is your code");
        assert_eq!(code_of(result).as_deref(), Some("2024"));
    }

    #[test]
    fn test_no_candidates() {
        assert!(extract("Hello, just checking in.").is_none());
    }

    #[test]
    fn test_empty_input() {
        assert!(extract("").is_none());
    }

    #[test]
    fn test_idempotent() {
        let text = "Code 1111 appears before FB-22222 and 3333.";
        assert_eq!(code_of(extract(text)), code_of(extract(text)));
    }

    #[test]
    fn test_first_of_several_bare_runs_wins() {
        let result = extract("Order 555123 shipped, tracking 777999.");
        assert_eq!(code_of(result).as_deref(), Some("555123"));
    }

    #[test]
    fn test_registration_order_breaks_position_ties() {
        // Both matchers report a candidate at offset 0; the first-registered
        // one is kept by the stable sort.
        let first = ClosureMatcher::new(
            |text: &str| vec![Candidate::new(Cow::Borrowed(&text[..1]), 0)],
            "first",
        );
        let second = ClosureMatcher::new(
            |text: &str| vec![Candidate::new(Cow::Borrowed(&text[..2]), 0)],
            "second",
        );
        let extractor = OtpExtractor::with_matchers(vec![Box::new(first), Box::new(second)]);
        assert_eq!(code_of(extractor.extract("ab")).as_deref(), Some("a"));
    }

    #[test]
    fn test_empty_candidates_are_discarded() {
        let empty = ClosureMatcher::new(
            |_: &str| vec![Candidate::new(Cow::Borrowed(""), 0)],
            "reports empty codes",
        );
        let extractor = OtpExtractor::with_matchers(vec![Box::new(empty)]);
        assert!(extractor.extract("anything").is_none());
    }

    #[test]
    fn test_adversarial_long_input_stays_linear() {
        // Untrusted senders control the text; the matcher set must not admit
        // catastrophic backtracking. A long digit wall is the worst case.
        let wall = "9".repeat(100_000);
        assert!(extract(&wall).is_none()); // 100k digits exceed the 8-digit cap

        let mut noisy = String::new();
        for i in 0..10_000 {
            noisy.push_str("word ");
            if i == 5_000 {
                noisy.push_str("code 4821 ");
            }
        }
        assert_eq!(code_of(extract(&noisy)).as_deref(), Some("4821"));
    }

    #[test]
    fn test_labeled_extraction() {
        let extractor = OtpExtractor::default();
        let shown = extractor.extract_labeled("Your code: 4821", |code| format!("Copy {code}"));
        assert_eq!(shown.as_deref(), Some("Copy 4821"));
        assert!(extractor
            .extract_labeled("nothing here", |code| format!("Copy {code}"))
            .is_none());
    }
}
