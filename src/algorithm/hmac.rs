use crate::algorithm::HashFamily;
use crate::error::{Error, Result};
use crate::utils::base64url;

use constant_time_eq::constant_time_eq;
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

impl HashFamily {
    /// Compute the raw HMAC of `signing_input` keyed with `secret`
    ///
    /// HMAC is defined for keys of any length: long keys are hashed and short
    /// ones padded, so every secret is usable.
    pub fn sign(&self, secret: &[u8], signing_input: &[u8]) -> Result<Vec<u8>> {
        match self {
            HashFamily::Sha256 => mac::<HmacSha256>(secret, signing_input),
            HashFamily::Sha384 => mac::<HmacSha384>(secret, signing_input),
            HashFamily::Sha512 => mac::<HmacSha512>(secret, signing_input),
        }
    }
}

fn mac<M>(secret: &[u8], signing_input: &[u8]) -> Result<Vec<u8>>
where
    M: Mac + KeyInit,
{
    let mut mac =
        <M as KeyInit>::new_from_slice(secret).map_err(|_| Error::SignatureInvalid)?;
    mac.update(signing_input);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Sign `header.payload` and return the Base64URL-encoded signature
pub(crate) fn sign_encoded(hash: HashFamily, secret: &[u8], signing_input: &str) -> Result<String> {
    let signature = hash.sign(secret, signing_input.as_bytes())?;
    Ok(base64url::encode(signature))
}

/// Recompute the signature of `header.payload` and compare it with the
/// token's encoded signature segment in constant time
pub(crate) fn verify_encoded(
    hash: HashFamily,
    secret: &[u8],
    signing_input: &str,
    signature: &str,
) -> Result<bool> {
    let expected = sign_encoded(hash, secret, signing_input)?;
    Ok(constant_time_eq(expected.as_bytes(), signature.as_bytes()))
}
