//! Error types for URL decoding operations.

use thiserror::Error;

/// Errors that can occur while percent-decoding query components.
///
/// Scanning, stringifying, splitting, joining and normalizing never fail; only the
/// operations that decode `searchParams` can return one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UrlError {
    /// A `%` was not followed by two hexadecimal digits.
    #[error("Malformed percent-encoding in: {0}")]
    MalformedEscape(String),

    /// The percent-decoded bytes are not valid UTF-8.
    #[error("Percent-decoded bytes are not valid UTF-8: {0}")]
    InvalidUtf8(String),
}

impl UrlError {
    /// The raw input that failed to decode.
    pub fn input(&self) -> &str {
        match self {
            UrlError::MalformedEscape(input) | UrlError::InvalidUtf8(input) => input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            UrlError::MalformedEscape("%zz".to_string()).to_string(),
            "Malformed percent-encoding in: %zz"
        );

        assert_eq!(
            UrlError::InvalidUtf8("%C3".to_string()).to_string(),
            "Percent-decoded bytes are not valid UTF-8: %C3"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            UrlError::MalformedEscape("a".to_string()),
            UrlError::MalformedEscape("a".to_string())
        );
        assert_ne!(
            UrlError::MalformedEscape("a".to_string()),
            UrlError::InvalidUtf8("a".to_string())
        );
    }

    #[test]
    fn test_error_input() {
        assert_eq!(UrlError::InvalidUtf8("%FF".to_string()).input(), "%FF");
    }
}
