use crate::algorithm::Algorithm;
use crate::error::{Error, Result};
use crate::limits::{MAX_DECODED_HEADER_SIZE, MAX_DECODED_PAYLOAD_SIZE};
use crate::token::EncodedToken;
use crate::utils::base64url::{self, DecodeError};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A JWT whose header and payload have been decoded into JSON objects
///
/// Key order of the original JSON is preserved. Decoding says nothing about
/// authenticity: the signature has not been checked.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedToken {
    header: Map<String, Value>,
    payload: Map<String, Value>,
}

impl DecodedToken {
    /// Decode the header and payload segments of an encoded token
    pub fn from_encoded(token: &EncodedToken) -> Result<Self> {
        let header = decode_header(token.header())?;
        Self::with_header(header, token)
    }

    /// Finish decoding a token whose header segment is already decoded
    pub(crate) fn with_header(header: Map<String, Value>, token: &EncodedToken) -> Result<Self> {
        Ok(Self {
            header,
            payload: decode_object(token.payload(), "payload", MAX_DECODED_PAYLOAD_SIZE)?,
        })
    }

    /// Header mapping
    pub fn header(&self) -> &Map<String, Value> {
        &self.header
    }

    /// Payload (claims) mapping
    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    /// Algorithm named by the header's `alg` value
    pub fn algorithm(&self) -> Result<Algorithm> {
        Algorithm::from_header(&self.header)
    }

    /// Token type (`typ` header), if present and a string
    pub fn token_type(&self) -> Option<&str> {
        self.header.get("typ").and_then(Value::as_str)
    }

    /// Key ID (`kid` header), if present and a string
    pub fn key_id(&self) -> Option<&str> {
        self.header.get("kid").and_then(Value::as_str)
    }

    /// Deserialize the payload into a caller-defined claims type
    pub fn claims<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(Value::Object(self.payload.clone()))
            .map_err(|e| Error::FormatInvalidJson(format!("Failed to parse claims: {e}")))
    }

    /// Split into `(header, payload)`
    pub fn into_parts(self) -> (Map<String, Value>, Map<String, Value>) {
        (self.header, self.payload)
    }
}

/// Decode only the header segment
pub(crate) fn decode_header(segment: &str) -> Result<Map<String, Value>> {
    decode_object(segment, "header", MAX_DECODED_HEADER_SIZE)
}

fn decode_object(segment: &str, part: &'static str, max_size: usize) -> Result<Map<String, Value>> {
    let json = base64url::decode_bounded(segment, max_size).map_err(|e| match e {
        DecodeError::TooLarge { size, max } => Error::SegmentTooLarge { part, size, max },
        e => e.into(),
    })?;

    let value: Value = serde_json::from_slice(&json)
        .map_err(|e| Error::FormatInvalidJson(format!("Failed to parse {part}: {e}")))?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(Error::FormatNotAnObject(part)),
    }
}
