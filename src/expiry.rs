//! Countdown helpers for disposable mailbox expiry.
//!
//! Disposable mailboxes live for a fixed window; consumers show a ticking
//! "M:SS remaining" countdown next to the inbox. These helpers do the time
//! math and the rendering. Like [`label`](crate::label), rendering accepts a
//! caller-supplied formatter so localization never touches the arithmetic.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};

/// Parses an RFC 3339 expiry timestamp, as returned by mailbox APIs.
///
/// # Errors
///
/// Returns [`Error::InvalidTimestamp`] if `value` is not valid RFC 3339.
///
/// # Example
///
/// ```
/// use otp_extract::expiry;
///
/// let expires = expiry::parse_expiry("2026-02-13T00:10:00Z").unwrap();
/// assert!(expiry::parse_expiry("soonish").is_err());
/// # let _ = expires;
/// ```
pub fn parse_expiry(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|source| Error::InvalidTimestamp {
            value: value.to_owned(),
            source,
        })
}

/// Returns whole seconds from `now` until `expires_at`, clamped at zero.
///
/// Expired mailboxes report zero rather than a negative duration.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use otp_extract::expiry;
///
/// let now = Utc.with_ymd_and_hms(2026, 2, 13, 0, 0, 0).unwrap();
/// let expires = Utc.with_ymd_and_hms(2026, 2, 13, 0, 1, 40).unwrap();
/// assert_eq!(expiry::seconds_remaining(expires, now), 100);
/// assert_eq!(expiry::seconds_remaining(now, expires), 0);
/// ```
#[must_use]
pub fn seconds_remaining(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    u64::try_from((expires_at - now).num_seconds()).unwrap_or(0)
}

/// Renders a countdown as `"M:SS remaining"`, or `"Expired"` at zero.
///
/// # Example
///
/// ```
/// use otp_extract::expiry;
///
/// assert_eq!(expiry::format_countdown(125), "2:05 remaining");
/// assert_eq!(expiry::format_countdown(0), "Expired");
/// ```
#[must_use]
pub fn format_countdown(seconds: u64) -> String {
    format_countdown_with(seconds, |m, s| format!("{m}:{s:02} remaining"), "Expired")
}

/// Renders a countdown with a caller-supplied formatter and expired label.
///
/// The formatter receives whole minutes and leftover seconds. It is only
/// invoked while time remains; at zero the `expired_label` is returned as-is.
///
/// # Example
///
/// ```
/// use otp_extract::expiry;
///
/// let shown = expiry::format_countdown_with(125, |m, s| format!("{m}m {s}s left"), "Gone");
/// assert_eq!(shown, "2m 5s left");
/// assert_eq!(expiry::format_countdown_with(0, |m, s| format!("{m}m {s}s left"), "Gone"), "Gone");
/// ```
pub fn format_countdown_with<F>(seconds: u64, formatter: F, expired_label: &str) -> String
where
    F: Fn(u64, u64) -> String,
{
    if seconds == 0 {
        return expired_label.to_owned();
    }
    formatter(seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_seconds_remaining_future() {
        let now = Utc.with_ymd_and_hms(2026, 2, 13, 0, 0, 0).unwrap();
        let future = Utc.with_ymd_and_hms(2026, 2, 13, 0, 1, 40).unwrap();
        assert_eq!(seconds_remaining(future, now), 100);
    }

    #[test]
    fn test_seconds_remaining_clamps_past_to_zero() {
        let now = Utc.with_ymd_and_hms(2026, 2, 13, 0, 0, 0).unwrap();
        let past = Utc.with_ymd_and_hms(2026, 2, 12, 23, 59, 0).unwrap();
        assert_eq!(seconds_remaining(past, now), 0);
    }

    #[test]
    fn test_parse_expiry_roundtrip() {
        let now = Utc.with_ymd_and_hms(2026, 2, 13, 0, 0, 0).unwrap();
        let parsed = parse_expiry("2026-02-13T00:10:00Z").unwrap();
        assert_eq!(seconds_remaining(parsed, now), 600);
    }

    #[test]
    fn test_parse_expiry_honors_offsets() {
        let parsed = parse_expiry("2026-02-13T02:00:00+02:00").unwrap();
        let utc = Utc.with_ymd_and_hms(2026, 2, 13, 0, 0, 0).unwrap();
        assert_eq!(parsed, utc);
    }

    #[test]
    fn test_parse_expiry_rejects_garbage() {
        assert!(parse_expiry("").is_err());
        assert!(parse_expiry("tomorrow").is_err());
    }

    #[test]
    fn test_format_countdown_pads_seconds() {
        assert_eq!(format_countdown(125), "2:05 remaining");
        assert_eq!(format_countdown(59), "0:59 remaining");
        assert_eq!(format_countdown(3600), "60:00 remaining");
    }

    #[test]
    fn test_format_countdown_expired() {
        assert_eq!(format_countdown(0), "Expired");
    }

    #[test]
    fn test_custom_formatter_and_label() {
        let shown = format_countdown_with(61, |m, s| format!("{m}:{s:02}"), "done");
        assert_eq!(shown, "1:01");
        assert_eq!(format_countdown_with(0, |m, s| format!("{m}:{s:02}"), "done"), "done");
    }
}
