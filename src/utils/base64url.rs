//! Base64URL encoding/decoding per RFC 4648
//!
//! This module provides a thin wrapper around the `base64` crate. Output is
//! always unpadded; input padding is accepted but never required.

use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{Engine, alphabet};
use thiserror::Error;

const BASE64URL: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Base64URL decoding failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Invalid alphabet character, impossible length or non-canonical trailing bits
    #[error("{0}")]
    Invalid(#[from] base64::DecodeError),

    /// Decoded output larger than the caller's limit
    #[error("Decoded size exceeds limit: {size} bytes (max: {max})")]
    TooLarge { size: usize, max: usize },
}

/// Encode bytes to an unpadded Base64URL string
pub fn encode(input: impl AsRef<[u8]>) -> String {
    BASE64URL.encode(input)
}

/// Decode a Base64URL string to bytes
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    Ok(BASE64URL.decode(input)?)
}

/// Decode a Base64URL string to bytes, rejecting output above `max_size`
pub fn decode_bounded(input: &str, max_size: usize) -> Result<Vec<u8>, DecodeError> {
    let result = decode(input)?;

    if result.len() > max_size {
        return Err(DecodeError::TooLarge {
            size: result.len(),
            max: max_size,
        });
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(encode(b""), "");
        assert_eq!(encode(b"f"), "Zg");
        assert_eq!(encode(b"fo"), "Zm8");
        assert_eq!(encode(b"foo"), "Zm9v");
        assert_eq!(encode(b"foob"), "Zm9vYg");
        assert_eq!(encode(b"fooba"), "Zm9vYmE");
        assert_eq!(encode(b"foobar"), "Zm9vYmFy");
        assert_eq!(encode("https://jwt.io"), "aHR0cHM6Ly9qd3QuaW8");
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode("aHR0cHM6Ly9qd3QuaW8").unwrap(), b"https://jwt.io");
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_accepts_padding() {
        assert_eq!(decode("Zg==").unwrap(), b"f");
        assert_eq!(decode("Zm8=").unwrap(), b"fo");
    }

    #[test]
    fn test_decode_invalid() {
        assert!(decode("!!!").is_err());
        assert!(decode("A").is_err());
        // Standard alphabet characters are not part of Base64URL
        assert!(decode("+/8").is_err());
        // Non-canonical trailing bits
        assert!(decode("Zh").is_err());
    }

    #[test]
    fn test_url_safe_characters() {
        let encoded = encode([0xfbu8, 0xff]);
        assert_eq!(encoded, "-_8");
        assert_eq!(decode(&encoded).unwrap(), vec![0xfb, 0xff]);
    }

    #[test]
    fn test_binary_roundtrip() {
        let bytes: Vec<u8> = (0..=255).collect();
        assert_eq!(decode(&encode(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn test_decode_bounded() {
        assert_eq!(decode_bounded("SGVsbG8", 10).unwrap(), b"Hello");
        assert!(matches!(
            decode_bounded("SGVsbG8", 3),
            Err(DecodeError::TooLarge { size: 5, max: 3 })
        ));
    }
}
