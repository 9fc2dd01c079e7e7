use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Secret tokens are opaque strings; anything that looks like one must not
/// reach a log line verbatim. Masks base64-like and hex runs of 16+ chars.
fn base64_token() -> &'static Regex {
    static BASE64_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"\b[A-Za-z0-9+/]{16,}={0,2}\b").unwrap()
    });
    &BASE64_TOKEN_REGEX
}

fn hex_token() -> &'static Regex {
    static HEX_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"\b[A-Fa-f0-9]{16,}\b").unwrap()
    });
    &HEX_TOKEN_REGEX
}

/// Redacts token-shaped runs from a string.
pub fn redact(input: &str) -> String {
    let base64_redacted = base64_token().replace_all(input, "[REDACTED_TOKEN]");
    hex_token()
        .replace_all(&base64_redacted, "[REDACTED_TOKEN]")
        .to_string()
}

/// A wrapper that redacts token-shaped content when displayed, for
/// ergonomic logging of strings that may embed secrets.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::{redact, Redacted};

    #[test]
    fn test_token_redaction() {
        // Base64-like token
        assert_eq!(
            redact("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9"),
            "[REDACTED_TOKEN]"
        );

        // Hex token
        assert_eq!(
            redact("a1b2c3d4e5f678901234567890123456"),
            "[REDACTED_TOKEN]"
        );

        // Short strings are left untouched
        assert_eq!(redact("short123"), "short123");
        assert_eq!(redact("abc123def456"), "abc123def456");
    }

    #[test]
    fn test_redaction_inside_messages() {
        assert_eq!(
            redact("token mismatch for a1b2c3d4e5f678901234567890123456 on player 7"),
            "token mismatch for [REDACTED_TOKEN] on player 7"
        );
    }

    #[test]
    fn test_redacted_wrapper() {
        let wrapped = Redacted("token a1b2c3d4e5f678901234567890123456");
        assert_eq!(format!("{wrapped}"), "token [REDACTED_TOKEN]");
        assert_eq!(format!("{wrapped:?}"), "token [REDACTED_TOKEN]");
    }

    #[test]
    fn test_no_sensitive_data() {
        assert_eq!(redact("Hello world"), "Hello world");
        assert_eq!(redact(""), "");
    }
}
