// maskedit-core/src/redact.rs
//! Keeps field contents out of debug logs unless explicitly allowed.
//!
//! Masked fields routinely carry personal data (SSNs, phone numbers, card
//! numbers). Set `MASKEDIT_ALLOW_DEBUG_PII=true` to log them verbatim.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use std::borrow::Cow;

lazy_static! {
    /// Initialized once: whether field text may appear in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("MASKEDIT_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

pub fn redact_sensitive(s: &str) -> String {
    format!("[REDACTED: {} chars]", s.chars().count())
}

/// The form of `text` that may be written to a log line.
pub fn loggable(text: &str) -> Cow<'_, str> {
    if *PII_DEBUG_ALLOWED {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(redact_sensitive(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_sensitive_counts_chars() {
        assert_eq!(redact_sensitive("123-45-6789"), "[REDACTED: 11 chars]");
        assert_eq!(redact_sensitive("é"), "[REDACTED: 1 chars]");
    }
}
