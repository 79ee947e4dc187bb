//! Pattern matchers that report every code occurrence in a message body.
//!
//! This module provides the [`CodeMatcher`] trait and built-in implementations
//! for the code formats commonly seen in verification emails: vendor-tagged
//! codes, keyword-announced codes, and bare digit runs.
//!
//! Unlike a first-match scanner, every matcher reports *all* occurrences along
//! with their byte offsets. The [`OtpExtractor`](crate::OtpExtractor) ranks the
//! combined candidate set and picks the leftmost one, so no matcher family
//! wins purely by registration order.
//!
//! # Example
//!
//! ```
//! use otp_extract::matcher::{CodeMatcher, KeywordCodeMatcher, VendorCodeMatcher};
//!
//! let keyword = KeywordCodeMatcher::new();
//! let found = keyword.find_candidates("Your code: 482913");
//! assert_eq!(found[0].code(), "482913");
//!
//! let facebook = VendorCodeMatcher::facebook();
//! let found = facebook.find_candidates("FB-12345 is your Facebook code");
//! assert_eq!(found[0].code(), "FB-12345");
//! ```

use crate::extractor::Candidate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static FACEBOOK_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bFB-\d{5}\b").expect("valid regex"));
static GOOGLE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bG-\d{4,8}\b").expect("valid regex"));
static TRAILING_PHRASE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d{4,8})\s*(?:is your|is the)").expect("valid regex"));
static BARE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{4,8}\b").expect("valid regex"));
static YEAR_LIKE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^20[2-3]\d$").expect("valid regex"));

/// Keywords that announce the digit run after them as a verification code.
const CODE_KEYWORDS: &[&str] = &["code", "otp", "pin", "verification", "verify", "confirm"];

/// Trait for locating code occurrences in email body text.
///
/// Implement this trait to teach the extractor a custom code format.
/// Report *every* occurrence, not just the first: the extractor's leftmost
/// selection only works if later matches are visible too.
///
/// # Example
///
/// ```
/// use otp_extract::matcher::CodeMatcher;
/// use otp_extract::Candidate;
///
/// struct HexTokenMatcher;
///
/// impl CodeMatcher for HexTokenMatcher {
///     fn find_candidates<'a>(&self, text: &'a str) -> Vec<Candidate<'a>> {
///         // Custom scanning logic
///         # let _ = text;
///         # Vec::new()
///     }
///
///     fn description(&self) -> &str {
///         "hex token"
///     }
/// }
/// ```
pub trait CodeMatcher: Send + Sync {
    /// Scans the full text and returns every code occurrence found.
    ///
    /// Each [`Candidate`] carries the code text (borrowed from the input where
    /// possible) and the byte offset where the match starts. An empty vector
    /// means this format does not appear in the text.
    fn find_candidates<'a>(&self, text: &'a str) -> Vec<Candidate<'a>>;

    /// Returns a human-readable description of the format this matcher recognizes.
    ///
    /// Used in logging.
    fn description(&self) -> &str;
}

/// Collects all matches of `regex` in `text` as candidates.
///
/// If the pattern defines a capture group, group 1 is the code; otherwise the
/// whole match is. The position is always the start of the whole match, so
/// announcing context counts toward leftmost ranking even when it is not part
/// of the captured code.
fn scan<'a>(regex: &Regex, text: &'a str) -> Vec<Candidate<'a>> {
    regex
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let code = caps.get(1).unwrap_or(whole);
            if code.as_str().is_empty() {
                return None;
            }
            Some(Candidate::new(Cow::Borrowed(code.as_str()), whole.start()))
        })
        .collect()
}

/// Regex-based matcher reporting all matches with their offsets.
///
/// If the pattern contains a capture group, group 1 is extracted as the code;
/// otherwise the whole match is.
///
/// # Example
///
/// ```
/// use otp_extract::matcher::{CodeMatcher, RegexMatcher};
///
/// let matcher = RegexMatcher::new(r"token:\s*(\d+)").unwrap();
/// let found = matcher.find_candidates("token: 42 and token: 77");
/// assert_eq!(found.len(), 2);
/// assert_eq!(found[0].code(), "42");
/// ```
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
    description: String,
}

impl RegexMatcher {
    /// Creates a new regex matcher.
    ///
    /// # Errors
    ///
    /// Returns an error if the regex pattern is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use otp_extract::matcher::RegexMatcher;
    ///
    /// let matcher = RegexMatcher::new(r"\b[A-Z]{2}-\d{6}\b").unwrap();
    /// ```
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(pattern)?;
        Ok(Self {
            description: format!("regex pattern: {pattern}"),
            regex,
        })
    }

    /// Creates a new regex matcher with a custom description.
    ///
    /// # Errors
    ///
    /// Returns an error if the regex pattern is invalid.
    pub fn with_description(
        pattern: &str,
        description: impl Into<String>,
    ) -> Result<Self, regex::Error> {
        let regex = Regex::new(pattern)?;
        Ok(Self {
            description: description.into(),
            regex,
        })
    }

    fn from_compiled(regex: &Regex, description: impl Into<String>) -> Self {
        Self {
            regex: regex.clone(),
            description: description.into(),
        }
    }
}

impl CodeMatcher for RegexMatcher {
    fn find_candidates<'a>(&self, text: &'a str) -> Vec<Candidate<'a>> {
        scan(&self.regex, text)
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// Matcher for vendor-tagged codes: a fixed alphabetic tag, a hyphen, then digits.
///
/// The full matched text including the tag is the code. Verification flows for
/// these vendors show the tagged form to the user, so stripping it down to the
/// digits would produce a code the user cannot cross-check against the email.
///
/// # Example
///
/// ```
/// use otp_extract::matcher::{CodeMatcher, VendorCodeMatcher};
///
/// let matcher = VendorCodeMatcher::google();
/// let found = matcher.find_candidates("G-482913 is your Google verification code");
/// assert_eq!(found[0].code(), "G-482913");
/// ```
#[derive(Debug, Clone)]
pub struct VendorCodeMatcher {
    inner: RegexMatcher,
}

impl VendorCodeMatcher {
    /// Creates a matcher for Facebook-style codes: `FB-` plus exactly 5 digits.
    ///
    /// The tag is matched case-insensitively; the candidate preserves the
    /// casing found in the text.
    #[must_use]
    pub fn facebook() -> Self {
        Self {
            inner: RegexMatcher::from_compiled(&FACEBOOK_CODE, "Facebook code (FB-XXXXX)"),
        }
    }

    /// Creates a matcher for Google-style codes: `G-` plus 4 to 8 digits.
    #[must_use]
    pub fn google() -> Self {
        Self {
            inner: RegexMatcher::from_compiled(&GOOGLE_CODE, "Google code (G-XXXXXX)"),
        }
    }

    /// Creates a matcher for a custom vendor tag with a digit count range.
    ///
    /// The tag is escaped, so it may contain regex metacharacters.
    ///
    /// # Errors
    ///
    /// Returns an error if the digit range is empty or starts at zero.
    pub fn custom(tag: &str, min_digits: u8, max_digits: u8) -> crate::Result<Self> {
        if min_digits == 0 || min_digits > max_digits {
            return Err(crate::Error::InvalidConfig {
                message: format!(
                    "digit range {min_digits}..={max_digits} must be non-empty and start above 0"
                ),
            });
        }
        let escaped = regex::escape(tag);
        let pattern = format!(r"(?i)\b{escaped}-\d{{{min_digits},{max_digits}}}\b");
        let inner = RegexMatcher::with_description(&pattern, format!("{tag} vendor code"))
            .map_err(|source| crate::Error::InvalidPattern { pattern, source })?;
        Ok(Self { inner })
    }
}

impl CodeMatcher for VendorCodeMatcher {
    fn find_candidates<'a>(&self, text: &'a str) -> Vec<Candidate<'a>> {
        self.inner.find_candidates(text)
    }

    fn description(&self) -> &str {
        self.inner.description()
    }
}

/// Matcher for digit runs announced by a verification keyword.
///
/// Recognizes a 4-to-8 digit run preceded by one of `code`, `otp`, `pin`,
/// `verification`, `verify`, or `confirm` (case-insensitive), with an optional
/// colon and whitespace in between. Only the digits are the code; the keyword
/// is context. The candidate's position is the keyword's offset, since that is
/// where a reader starts seeing the code.
///
/// # Example
///
/// ```
/// use otp_extract::matcher::{CodeMatcher, KeywordCodeMatcher};
///
/// let matcher = KeywordCodeMatcher::new();
/// let found = matcher.find_candidates("Your PIN: 4821");
/// assert_eq!(found[0].code(), "4821");
/// ```
#[derive(Debug, Clone)]
pub struct KeywordCodeMatcher {
    inner: RegexMatcher,
}

impl KeywordCodeMatcher {
    /// Creates a matcher with the default keyword set.
    #[must_use]
    pub fn new() -> Self {
        Self::with_keywords(CODE_KEYWORDS).expect("default keywords form a valid pattern")
    }

    /// Creates a matcher with a custom keyword set.
    ///
    /// Keywords are matched case-insensitively and escaped, so they may
    /// contain regex metacharacters.
    ///
    /// # Errors
    ///
    /// Returns an error if `keywords` is empty.
    pub fn with_keywords(keywords: &[&str]) -> crate::Result<Self> {
        if keywords.is_empty() {
            return Err(crate::Error::InvalidConfig {
                message: "keyword list must not be empty".into(),
            });
        }
        let alternation = keywords
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(r"(?i)(?:{alternation})[:\s]*(\d{{4,8}})");
        let inner = RegexMatcher::with_description(&pattern, "keyword-announced code")
            .map_err(|source| crate::Error::InvalidPattern { pattern, source })?;
        Ok(Self { inner })
    }
}

impl Default for KeywordCodeMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeMatcher for KeywordCodeMatcher {
    fn find_candidates<'a>(&self, text: &'a str) -> Vec<Candidate<'a>> {
        self.inner.find_candidates(text)
    }

    fn description(&self) -> &str {
        self.inner.description()
    }
}

/// Matcher for digit runs followed by "is your" or "is the".
///
/// Covers the common phrasing "482913 is your verification code" where the
/// announcing context comes after the code instead of before it.
#[derive(Debug, Clone)]
pub struct TrailingPhraseMatcher {
    inner: RegexMatcher,
}

impl TrailingPhraseMatcher {
    /// Creates a matcher for the "NNNN is your/is the ..." phrasing.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RegexMatcher::from_compiled(
                &TRAILING_PHRASE_CODE,
                "code before 'is your/is the'",
            ),
        }
    }
}

impl Default for TrailingPhraseMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeMatcher for TrailingPhraseMatcher {
    fn find_candidates<'a>(&self, text: &'a str) -> Vec<Candidate<'a>> {
        self.inner.find_candidates(text)
    }

    fn description(&self) -> &str {
        self.inner.description()
    }
}

/// Fallback matcher for standalone 4-to-8 digit runs.
///
/// This is the noisiest family, so it carries a year exclusion: a 4-digit run
/// in 2020..=2039 is skipped, because in email bodies those are almost always
/// dates, not codes. The exclusion covers exactly the `202x`/`203x` shape.
/// Years outside that range (1999, 2040) are still valid candidates, and the
/// exclusion does not apply to the keyword or vendor matchers, where explicit
/// context outweighs a coincidental year-like shape.
///
/// # Example
///
/// ```
/// use otp_extract::matcher::{BareCodeMatcher, CodeMatcher};
///
/// let matcher = BareCodeMatcher::new();
/// assert!(matcher.find_candidates("Renewed in 2025").is_empty());
/// assert_eq!(matcher.find_candidates("Use 98765")[0].code(), "98765");
/// ```
#[derive(Debug, Clone)]
pub struct BareCodeMatcher {
    inner: RegexMatcher,
}

impl BareCodeMatcher {
    /// Creates the fallback digit-run matcher with the year exclusion.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RegexMatcher::from_compiled(&BARE_CODE, "standalone 4-8 digit code"),
        }
    }
}

impl Default for BareCodeMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeMatcher for BareCodeMatcher {
    fn find_candidates<'a>(&self, text: &'a str) -> Vec<Candidate<'a>> {
        // The regex crate has no lookahead; the year exclusion is a post-filter
        // over the bare matches instead.
        self.inner
            .find_candidates(text)
            .into_iter()
            .filter(|c| !YEAR_LIKE.is_match(c.code()))
            .collect()
    }

    fn description(&self) -> &str {
        self.inner.description()
    }
}

/// Matcher using a closure for custom scanning logic.
///
/// # Example
///
/// ```
/// use otp_extract::matcher::{ClosureMatcher, CodeMatcher};
/// use otp_extract::Candidate;
/// use std::borrow::Cow;
///
/// let matcher = ClosureMatcher::new(
///     |text: &str| {
///         text.match_indices("XYZZY")
///             .map(|(pos, code)| Candidate::new(Cow::Borrowed(code), pos))
///             .collect()
///     },
///     "magic word",
/// );
///
/// let found = matcher.find_candidates("say XYZZY twice: XYZZY");
/// assert_eq!(found.len(), 2);
/// ```
pub struct ClosureMatcher<F>
where
    F: for<'a> Fn(&'a str) -> Vec<Candidate<'a>> + Send + Sync,
{
    matcher_fn: F,
    description: String,
}

impl<F> ClosureMatcher<F>
where
    F: for<'a> Fn(&'a str) -> Vec<Candidate<'a>> + Send + Sync,
{
    /// Creates a new closure-based matcher.
    #[must_use]
    pub fn new(matcher_fn: F, description: impl Into<String>) -> Self {
        Self {
            matcher_fn,
            description: description.into(),
        }
    }
}

impl<F> CodeMatcher for ClosureMatcher<F>
where
    F: for<'a> Fn(&'a str) -> Vec<Candidate<'a>> + Send + Sync,
{
    fn find_candidates<'a>(&self, text: &'a str) -> Vec<Candidate<'a>> {
        (self.matcher_fn)(text)
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl<F> std::fmt::Debug for ClosureMatcher<F>
where
    F: for<'a> Fn(&'a str) -> Vec<Candidate<'a>> + Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosureMatcher")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
