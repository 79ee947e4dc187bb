//! Custom matcher example: teach the extractor a new vendor code format and
//! a closure-based format, and let them compete with the built-ins under
//! leftmost selection.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example custom_matcher
//! ```

use otp_extract::matcher::{ClosureMatcher, CodeMatcher, KeywordCodeMatcher, VendorCodeMatcher};
use otp_extract::{Candidate, OtpExtractor};
use std::borrow::Cow;

fn main() -> otp_extract::Result<()> {
    // A WhatsApp-style tag: WA- plus exactly 6 digits.
    let whatsapp = VendorCodeMatcher::custom("WA", 6, 6)?;

    // A closure matcher for word codes on their own line.
    let word_code = ClosureMatcher::new(
        |text: &str| {
            text.match_indices("PASSPHRASE: ")
                .filter_map(|(pos, tag)| {
                    let rest = text[pos + tag.len()..].lines().next()?.trim();
                    (!rest.is_empty()).then(|| Candidate::new(Cow::Borrowed(rest), pos))
                })
                .collect()
        },
        "passphrase line",
    );

    let extractor = OtpExtractor::with_matchers(vec![
        Box::new(whatsapp) as Box<dyn CodeMatcher>,
        Box::new(word_code),
        Box::new(KeywordCodeMatcher::new()),
    ]);

    let bodies = [
        "WA-482913 is your WhatsApp code",
        "PASSPHRASE: correct horse battery staple",
        "Your code: 7712, but PASSPHRASE: too-late loses on position",
    ];

    for body in bodies {
        match extractor.extract(body) {
            Some(candidate) => println!("{body:60} -> {}", candidate.code()),
            None => println!("{body:60} -> (no code)"),
        }
    }

    Ok(())
}
