//! Popup-style example: render an inbox the way the extension popup does.
//!
//! Each message gets one extraction pass; hits are shown with a label and the
//! mailbox expiry countdown, misses render nothing. Run with
//! `RUST_LOG=otp_extract=debug` to see the matcher events.
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=otp_extract=debug cargo run --example labeled_inbox
//! ```

use chrono::{Duration, Utc};
use otp_extract::{expiry, label, OtpExtractor};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let now = Utc::now();
    let expires_at = now + Duration::minutes(9) + Duration::seconds(30);
    let remaining = expiry::seconds_remaining(expires_at, now);
    println!("Mailbox: {}", expiry::format_countdown(remaining));
    println!();

    let inbox = [
        ("noreply@example.com", "Your verification code: 440022"),
        ("security@facebook.com", "FB-98765 is your Facebook code"),
        ("news@example.com", "Monthly newsletter - best of 2025"),
        ("noreply@google.com", "G-715243 is your Google verification code"),
    ];

    let extractor = OtpExtractor::default();
    for (sender, body) in inbox {
        match extractor.extract_labeled(body, label::otp) {
            Some(shown) => println!("{sender:25} {shown}"),
            None => println!("{sender:25} -"),
        }
    }
}
