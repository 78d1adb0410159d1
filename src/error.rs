//! Errors for jwtlite
//!
//! Every failure is a variant of [`Error`]. Variants are grouped into a
//! coarse [`ErrorKind`] so callers can branch on "the token is malformed"
//! versus "the algorithm is not supported" without matching every variant.

use crate::utils::base64url::DecodeError;
use thiserror::Error;

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The token could not be split, decoded or parsed
    MalformedToken,
    /// The `alg` header value is absent, unknown or not allowed
    UnsupportedAlgorithm,
    /// Signature computation or verification failed
    Signature,
    /// A header or payload could not be serialized to a JSON object
    Serialization,
}

/// jwtlite errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    #[error("Decoded {part} too large: {size} bytes (maximum: {max} bytes)")]
    SegmentTooLarge {
        part: &'static str,
        size: usize,
        max: usize,
    },

    #[error("Invalid JWT format: expected three non-empty parts separated by '.'")]
    FormatInvalid,

    #[error("Base64URL decoding failed: {0}")]
    FormatInvalidBase64(String),

    #[error("JSON parsing failed: {0}")]
    FormatInvalidJson(String),

    #[error("Token {0} is not a JSON object")]
    FormatNotAnObject(&'static str),

    // ============================================================================
    // Algorithm Errors
    // ============================================================================
    #[error("Header has no 'alg' string value")]
    AlgorithmMissing,

    #[error("Algorithm '{0}' is not supported")]
    AlgorithmUnsupported(String),

    #[error("The 'none' algorithm is rejected for security reasons (RFC 8725)")]
    AlgorithmNoneRejected,

    #[error("Algorithm '{found}' not allowed. Allowed: {allowed:?}")]
    AlgorithmNotAllowed { found: String, allowed: Vec<String> },

    // ============================================================================
    // Signature Errors
    // ============================================================================
    #[error("Signature verification failed")]
    SignatureInvalid,

    // ============================================================================
    // Serialization Errors
    // ============================================================================
    #[error("JSON serialization failed: {0}")]
    Serialization(String),
}

impl Error {
    /// The coarse kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::TokenTooLarge { .. }
            | Error::SegmentTooLarge { .. }
            | Error::FormatInvalid
            | Error::FormatInvalidBase64(_)
            | Error::FormatInvalidJson(_)
            | Error::FormatNotAnObject(_) => ErrorKind::MalformedToken,

            Error::AlgorithmMissing
            | Error::AlgorithmUnsupported(_)
            | Error::AlgorithmNoneRejected
            | Error::AlgorithmNotAllowed { .. } => ErrorKind::UnsupportedAlgorithm,

            Error::SignatureInvalid => ErrorKind::Signature,

            Error::Serialization(_) => ErrorKind::Serialization,
        }
    }

    /// Shorthand for `self.kind() == ErrorKind::MalformedToken`
    pub fn is_malformed(&self) -> bool {
        self.kind() == ErrorKind::MalformedToken
    }

    /// Shorthand for `self.kind() == ErrorKind::UnsupportedAlgorithm`
    pub fn is_unsupported_algorithm(&self) -> bool {
        self.kind() == ErrorKind::UnsupportedAlgorithm
    }
}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::Invalid(e) => Error::FormatInvalidBase64(e.to_string()),
            DecodeError::TooLarge { size, max } => Error::TokenTooLarge { size, max },
        }
    }
}

/// Result type alias for jwtlite operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(Error::FormatInvalid.kind(), ErrorKind::MalformedToken);
        assert_eq!(
            Error::FormatNotAnObject("header").kind(),
            ErrorKind::MalformedToken
        );
        assert_eq!(
            Error::AlgorithmUnsupported("RS256".into()).kind(),
            ErrorKind::UnsupportedAlgorithm
        );
        assert_eq!(Error::AlgorithmMissing.kind(), ErrorKind::UnsupportedAlgorithm);
        assert_eq!(Error::SignatureInvalid.kind(), ErrorKind::Signature);
        assert!(Error::AlgorithmNoneRejected.is_unsupported_algorithm());
        assert!(!Error::AlgorithmNoneRejected.is_malformed());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Error::TokenTooLarge { size: 10, max: 5 }.to_string(),
            "Token too large: 10 bytes (maximum: 5 bytes)"
        );
        assert_eq!(
            Error::FormatNotAnObject("payload").to_string(),
            "Token payload is not a JSON object"
        );
        assert_eq!(
            Error::SegmentTooLarge {
                part: "header",
                size: 9000,
                max: 8192
            }
            .to_string(),
            "Decoded header too large: 9000 bytes (maximum: 8192 bytes)"
        );
    }

    #[test]
    fn test_from_decode_error() {
        let err: Error = DecodeError::TooLarge { size: 5, max: 3 }.into();
        assert_eq!(err, Error::TokenTooLarge { size: 5, max: 3 });

        let err: Error = crate::utils::base64url::decode("!!!").unwrap_err().into();
        assert!(matches!(err, Error::FormatInvalidBase64(_)));
        assert!(err.is_malformed());
    }
}
