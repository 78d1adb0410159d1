use crate::error::{Error, Result};
use crate::limits::MAX_TOKEN_LENGTH;

/// A JWT split into its three Base64URL segments
///
/// No segment is decoded at this stage. The only guarantee is structural:
/// the token had exactly three non-empty parts separated by `.`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedToken {
    header: String,
    payload: String,
    signature: String,
}

impl EncodedToken {
    /// Split a token string into header, payload and signature segments
    ///
    /// # Example
    /// ```
    /// use jwtlite::EncodedToken;
    ///
    /// let token = EncodedToken::parse("aGVhZGVy.cGF5bG9hZA.c2ln").unwrap();
    /// assert_eq!(token.signature(), "c2ln");
    /// ```
    pub fn parse(token: &str) -> Result<Self> {
        if token.len() > MAX_TOKEN_LENGTH {
            return Err(Error::TokenTooLarge {
                size: token.len(),
                max: MAX_TOKEN_LENGTH,
            });
        }

        let mut parts = token.split('.');
        let header = parts.next().ok_or(Error::FormatInvalid)?;
        let payload = parts.next().ok_or(Error::FormatInvalid)?;
        let signature = parts.next().ok_or(Error::FormatInvalid)?;
        if parts.next().is_some() {
            return Err(Error::FormatInvalid);
        }

        if header.is_empty() || payload.is_empty() || signature.is_empty() {
            return Err(Error::FormatInvalid);
        }

        Ok(Self {
            header: header.into(),
            payload: payload.into(),
            signature: signature.into(),
        })
    }

    /// Encoded header segment
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Encoded payload segment
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Encoded signature segment
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// The bytes covered by the signature: `header.payload`
    pub fn signing_input(&self) -> String {
        format!("{}.{}", self.header, self.payload)
    }
}

impl std::str::FromStr for EncodedToken {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for EncodedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.header, self.payload, self.signature)
    }
}
