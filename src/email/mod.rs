//! Email validation used at account-creation time.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

/// Returns true when `candidate` is a plausibly deliverable address.
/// Length bounds follow RFC 5321 (254 octets max).
pub fn is_valid(candidate: &str) -> bool {
    (3..=254).contains(&candidate.len()) && EMAIL_PATTERN.is_match(candidate)
}
