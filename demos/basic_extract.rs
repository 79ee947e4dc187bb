//! Basic example: extract the verification code from a message body.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example basic_extract
//! ```

use otp_extract::extract;

fn main() {
    let bodies = [
        "Your verification code: 123456. It expires in 10 minutes.",
        "FB-12345 is your Facebook code",
        "Use 98765 to continue",
        "This was in 2024",
        "Hello, just checking in.",
    ];

    for body in bodies {
        match extract(body) {
            Some(candidate) => println!("{body:55} -> {}", candidate.code()),
            None => println!("{body:55} -> (no code)"),
        }
    }
}
